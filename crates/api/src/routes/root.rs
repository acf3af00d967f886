use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Landing payload served at `/`.
#[derive(Serialize)]
pub struct WelcomeResponse {
    pub message: &'static str,
    pub version: &'static str,
    /// Where the API routes live.
    pub documentation: &'static str,
}

/// GET / -- identifies the service.
async fn welcome() -> Json<WelcomeResponse> {
    Json(WelcomeResponse {
        message: "Welcome to the Notes Management API!",
        version: env!("CARGO_PKG_VERSION"),
        documentation: "/api",
    })
}

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(welcome))
}
