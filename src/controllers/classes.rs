use axum::{extract::State, response::IntoResponse, routing::get, Json, Router};
use chrono::Utc;
use std::sync::Arc;
use tracing::info;

use crate::error::Error;
use crate::middleware::AuthUser;
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/classes", get(list_classes))
}

// GET /api/classes
async fn list_classes(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
) -> Result<impl IntoResponse, Error> {
    let classes = state.catalog.list_upcoming(Utc::now()).await?;
    info!("GET /classes by {}: {} upcoming", user.email, classes.len());
    Ok(Json(classes))
}
