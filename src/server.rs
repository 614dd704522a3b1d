//! Thin JSON surface over the filter.
//!
//! The core is synchronous and the display is shared mutable state, so the
//! filter sits behind a mutex and queries run one at a time against it.

use std::sync::{Arc, Mutex};

use axum::http::StatusCode;
use axum::{Json, Router, routing::post};
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tracing::{info, warn};

use crate::error::GrimoireError;
use crate::filter::Filter;
use crate::inquiry::Inquiry;
use crate::spell::Spell;

#[derive(Serialize)]
pub struct QueryResponse {
    pub status: String,
    pub count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spells: Option<Vec<Spell>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

pub fn router(filter: Arc<Mutex<Filter>>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([axum::http::Method::POST])
        .allow_headers(Any);
    Router::new()
        .route(
            "/v1/query",
            post(move |Json(inquiry): Json<Inquiry>| {
                let filter = Arc::clone(&filter);
                async move {
                    let mut guard = match filter.lock() {
                        Ok(guard) => guard,
                        Err(poisoned) => poisoned.into_inner(),
                    };
                    match guard.filter(&inquiry) {
                        Ok(()) => {
                            let spells: Vec<Spell> =
                                guard.current_results().into_iter().cloned().collect();
                            info!(count = spells.len(), "query complete");
                            let body = QueryResponse {
                                status: String::from("ok"),
                                count: spells.len(),
                                spells: Some(spells),
                                error: None,
                            };
                            (StatusCode::OK, Json(body))
                        }
                        Err(e) => {
                            let status = match e {
                                GrimoireError::MalformedInquiry(_) => StatusCode::BAD_REQUEST,
                                _ => StatusCode::INTERNAL_SERVER_ERROR,
                            };
                            warn!(error = %e, code = %status.as_u16(), "query error");
                            let body = QueryResponse {
                                status: String::from("error"),
                                count: 0,
                                spells: None,
                                error: Some(e.to_string()),
                            };
                            (status, Json(body))
                        }
                    }
                }
            }),
        )
        .layer(cors)
}
