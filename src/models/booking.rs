use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// One ledger row. Immutable once written; only ever created by the booking
/// transaction, never updated.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Booking {
    pub id: String,
    pub class_id: i64,
    pub client_name: String,
    pub client_email: String,
    pub booked_at: DateTime<Utc>,
}

impl Booking {
    pub fn new(class_id: i64, client_name: &str, client_email: &str) -> Self {
        Booking {
            id: Uuid::new_v4().to_string(),
            class_id,
            client_name: client_name.to_string(),
            client_email: client_email.to_string(),
            booked_at: Utc::now(),
        }
    }
}

/// Booking joined with its class, the shape `GET /api/bookings` returns.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct BookingDetails {
    pub id: String,
    pub class_id: i64,
    pub class_name: String,
    pub class_start_time: DateTime<Utc>,
    pub client_name: String,
    pub client_email: String,
    pub booked_at: DateTime<Utc>,
}
