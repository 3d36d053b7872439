//! HTTP API server for integration with other systems.
//!
//! Provides REST endpoints for question classification, video selection,
//! and live conversation sessions.

use crate::catalog::VideoCatalog;
use crate::cli::Output;
use crate::config::Settings;
use crate::matching::{
    find_relevant_video, score_candidates, QuestionClassifier, VideoRecord,
};
use crate::session::{ConversationSession, TranscriptTurn, VideoSwitch};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use tower_http::cors::{Any, CorsLayer};
use uuid::Uuid;

/// Shared application state.
struct AppState {
    settings: Settings,
    classifier: QuestionClassifier,
    catalog: Vec<VideoRecord>,
    sessions: RwLock<HashMap<Uuid, ConversationSession>>,
}

/// Run the HTTP API server.
pub async fn run_serve(host: &str, port: u16, settings: Settings) -> anyhow::Result<()> {
    let catalog_path = settings.catalog_path();
    let catalog = if catalog_path.exists() {
        VideoCatalog::load(&catalog_path)?
    } else {
        VideoCatalog::demo()
    };

    let state = Arc::new(AppState {
        classifier: QuestionClassifier::new(),
        catalog: catalog.into_videos(),
        sessions: RwLock::new(HashMap::new()),
        settings,
    });

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .route("/health", get(health))
        .route("/classify", post(classify))
        .route("/select", post(select))
        .route("/sessions", post(create_session))
        .route("/sessions/{session_id}", get(get_session))
        .route("/sessions/{session_id}/turns", post(post_turn))
        .layer(cors)
        .with_state(state);

    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    Output::header("Viser API Server");
    println!();
    Output::success(&format!("Listening on http://{}", addr));
    println!();
    println!("Endpoints:");
    Output::kv("Health", "GET  /health");
    Output::kv("Classify", "POST /classify");
    Output::kv("Select", "POST /select");
    Output::kv("New Session", "POST /sessions");
    Output::kv("Get Session", "GET  /sessions/:session_id");
    Output::kv("Post Turn", "POST /sessions/:session_id/turns");
    println!();
    Output::info("Press Ctrl+C to stop the server.");

    axum::serve(listener, app).await?;

    Ok(())
}

// === Request/Response Types ===

#[derive(Deserialize)]
struct ClassifyRequest {
    message: String,
}

#[derive(Serialize)]
struct ClassifyResponse {
    product_question: bool,
    verdict: String,
}

#[derive(Deserialize)]
struct SelectRequest {
    message: String,
    /// Candidates to score; the server catalog is used when omitted.
    #[serde(default)]
    videos: Option<Vec<VideoRecord>>,
    /// Confidence floor; the configured floor is used when omitted.
    #[serde(default)]
    min_score: Option<f64>,
}

#[derive(Serialize)]
struct SelectResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    matched: Option<MatchInfo>,
    /// True when the match clears the confidence floor.
    display: bool,
    candidates: Vec<CandidateScore>,
}

#[derive(Serialize)]
struct MatchInfo {
    index: usize,
    video_id: String,
    title: String,
    score: f64,
}

#[derive(Serialize)]
struct CandidateScore {
    index: usize,
    video_id: String,
    score: f64,
}

#[derive(Deserialize)]
struct CreateSessionRequest {
    /// Persona name; the configured persona is used when omitted.
    #[serde(default)]
    persona: Option<String>,
    /// Candidate videos; the server catalog is used when omitted.
    #[serde(default)]
    videos: Option<Vec<VideoRecord>>,
    /// Confidence floor; the configured floor is used when omitted.
    #[serde(default)]
    min_score: Option<f64>,
}

#[derive(Serialize)]
struct CreateSessionResponse {
    session_id: Uuid,
    persona: String,
    video_count: usize,
}

#[derive(Serialize)]
struct SessionInfoResponse {
    session_id: Uuid,
    persona: String,
    video_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    active_index: Option<usize>,
}

#[derive(Deserialize)]
struct TurnRequest {
    speaker: String,
    text: String,
}

#[derive(Serialize)]
struct TurnResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    switch: Option<VideoSwitch>,
    #[serde(skip_serializing_if = "Option::is_none")]
    active_index: Option<usize>,
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

// === Handlers ===

async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

async fn classify(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ClassifyRequest>,
) -> impl IntoResponse {
    let verdict = state.classifier.classify(&req.message);
    Json(ClassifyResponse {
        product_question: verdict.is_product_question(),
        verdict: verdict.to_string(),
    })
}

async fn select(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SelectRequest>,
) -> impl IntoResponse {
    let videos = req.videos.as_deref().unwrap_or(&state.catalog);
    let min_score = req.min_score.unwrap_or(state.settings.matching.min_score);

    let matched = find_relevant_video(&req.message, videos);
    let candidates = score_candidates(&req.message, videos)
        .into_iter()
        .map(|scored| CandidateScore {
            index: scored.index,
            video_id: videos[scored.index].id.clone(),
            score: scored.score,
        })
        .collect();

    let display = matched.as_ref().is_some_and(|m| m.score > min_score);

    Json(SelectResponse {
        matched: matched.map(|m| MatchInfo {
            index: m.index,
            video_id: m.video.id,
            title: m.video.title,
            score: m.score,
        }),
        display,
        candidates,
    })
}

async fn create_session(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateSessionRequest>,
) -> impl IntoResponse {
    let persona = req
        .persona
        .unwrap_or_else(|| state.settings.persona.name.clone());
    let videos = req.videos.unwrap_or_else(|| state.catalog.clone());
    let min_score = req.min_score.unwrap_or(state.settings.matching.min_score);

    let session = ConversationSession::new(persona.clone(), videos).with_min_score(min_score);
    let video_count = session.videos().len();

    let session_id = Uuid::new_v4();
    state
        .sessions
        .write()
        .unwrap()
        .insert(session_id, session);

    Json(CreateSessionResponse {
        session_id,
        persona,
        video_count,
    })
}

async fn get_session(
    State(state): State<Arc<AppState>>,
    Path(session_id): Path<Uuid>,
) -> impl IntoResponse {
    let sessions = state.sessions.read().unwrap();
    match sessions.get(&session_id) {
        Some(session) => Json(SessionInfoResponse {
            session_id,
            persona: session.persona_name().to_string(),
            video_count: session.videos().len(),
            active_index: session.active_index(),
        })
        .into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: format!("Session not found: {}", session_id),
            }),
        )
            .into_response(),
    }
}

async fn post_turn(
    State(state): State<Arc<AppState>>,
    Path(session_id): Path<Uuid>,
    Json(req): Json<TurnRequest>,
) -> impl IntoResponse {
    let mut sessions = state.sessions.write().unwrap();
    match sessions.get_mut(&session_id) {
        Some(session) => {
            let turn = TranscriptTurn::new(req.speaker, req.text);
            let switch = session.observe_turn(&turn);
            Json(TurnResponse {
                switch,
                active_index: session.active_index(),
            })
            .into_response()
        }
        None => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: format!("Session not found: {}", session_id),
            }),
        )
            .into_response(),
    }
}
