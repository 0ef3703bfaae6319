pub mod bookings;
pub mod classes;

use axum::Router;
use std::sync::Arc;

pub fn routes() -> Router<Arc<crate::AppState>> {
    Router::new()
        .merge(classes::routes())
        .merge(bookings::routes())
}
