// src/api.rs
use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use tower_http::cors::CorsLayer;

use crate::highlight::{highlight_meaning, DEFAULT_HIGHLIGHT_TAG};
use crate::lexicon::types::DictionaryEntry;
use crate::lexicon::{Lexicon, LexiconInfo};

#[derive(Clone)]
pub struct AppState {
    pub lexicon: Arc<Lexicon>,
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(|| async { "OK" }))
        .route("/search", get(search))
        .route("/debug/lexicon", get(debug_lexicon))
        .layer(CorsLayer::very_permissive())
        .with_state(state)
}

#[derive(serde::Deserialize)]
struct SearchParams {
    #[serde(default)]
    meaning: String,
}

#[derive(serde::Serialize)]
struct SearchHit {
    #[serde(flatten)]
    entry: DictionaryEntry,
    meaning_highlighted: String,
}

#[derive(serde::Serialize)]
struct SearchResp {
    query: String,
    total_matches: usize,
    results: Vec<SearchHit>,
}

#[derive(serde::Serialize)]
struct ErrorResp {
    error: String,
}

/// Meaning search. A blank query is rejected up front (the guard the UI's
/// click handler applies); a load failure answers 502 so the caller can tell
/// it apart from a legitimate zero-match result.
async fn search(State(state): State<AppState>, Query(params): Query<SearchParams>) -> Response {
    let meaning = params.meaning.trim().to_string();
    if meaning.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResp {
                error: "query parameter `meaning` must be non-empty".to_string(),
            }),
        )
            .into_response();
    }

    match state.lexicon.search(&meaning).await {
        Ok(matches) => {
            let results = matches
                .into_iter()
                .map(|entry| {
                    let meaning_highlighted =
                        highlight_meaning(&entry.meaning, &meaning, DEFAULT_HIGHLIGHT_TAG);
                    SearchHit {
                        entry,
                        meaning_highlighted,
                    }
                })
                .collect::<Vec<_>>();
            (
                StatusCode::OK,
                Json(SearchResp {
                    total_matches: results.len(),
                    query: meaning,
                    results,
                }),
            )
                .into_response()
        }
        Err(e) => (
            StatusCode::BAD_GATEWAY,
            Json(ErrorResp {
                error: format!("dictionary load failed: {e}"),
            }),
        )
            .into_response(),
    }
}

async fn debug_lexicon(State(state): State<AppState>) -> Json<LexiconInfo> {
    Json(state.lexicon.info().await)
}
