//! Classify command implementation.

use crate::cli::Output;
use crate::matching::{ClassifierVerdict, QuestionClassifier};
use anyhow::Result;

/// Run the classify command.
pub fn run_classify(message: &str) -> Result<()> {
    let classifier = QuestionClassifier::new();
    let verdict = classifier.classify(message);

    match verdict {
        ClassifierVerdict::NotProduct => {
            Output::warning(&format!("Not a product question ({})", verdict));
        }
        _ => {
            Output::success(&format!("Product question ({})", verdict));
        }
    }

    Ok(())
}
