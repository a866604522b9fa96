//! Dashboard request handlers.
//!
//! This is the attachment boundary: the bootstrap registers these routes onto
//! the application wholesale and knows nothing about them. Handlers read the
//! merged configuration through [`AppState`].

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use crate::http::AppState;

/// Routes served by the dashboard.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route("/status", get(status))
}

#[derive(Serialize)]
struct Banner {
    name: &'static str,
    version: &'static str,
}

async fn index() -> Json<Banner> {
    Json(Banner {
        name: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
    })
}

#[derive(Serialize)]
struct Status {
    debug: bool,
}

async fn status(State(state): State<AppState>) -> Json<Status> {
    Json(Status {
        debug: state.config.debug(),
    })
}
