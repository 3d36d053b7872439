//! Configuration module for Viser.

mod settings;

pub use settings::{
    CatalogSettings, GeneralSettings, MatchingSettings, PersonaSettings, ServerSettings, Settings,
};
