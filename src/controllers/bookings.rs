use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;

use crate::error::Error;
use crate::middleware::AuthUser;
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/book", post(book_class))
        .route("/bookings", get(my_bookings))
}

// POST /api/book
#[derive(Debug, Deserialize)]
struct BookRequest {
    class_id: Option<i64>,
    client_name: Option<String>,
}

async fn book_class(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Json(req): Json<BookRequest>,
) -> Result<impl IntoResponse, Error> {
    let booking = state
        .bookings
        .book(req.class_id, req.client_name.as_deref(), &user.identity())
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Booking successful.", "booking_id": booking.id })),
    ))
}

// GET /api/bookings
#[derive(Debug, Deserialize)]
struct BookingsQuery {
    email: Option<String>,
}

async fn my_bookings(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Query(params): Query<BookingsQuery>,
) -> Result<impl IntoResponse, Error> {
    let bookings = state
        .bookings
        .bookings_for(&user.identity(), params.email.as_deref())
        .await?;

    Ok(Json(bookings))
}
