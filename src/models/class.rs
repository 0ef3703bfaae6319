use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A scheduled fitness class. `total_slots` is fixed at creation;
/// `available_slots` only ever moves down, one booking at a time, and
/// `bookings(class) + available_slots == total_slots` holds between
/// transactions.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct FitnessClass {
    pub id: i64,
    pub name: String,
    pub start_time: DateTime<Utc>,
    pub instructor: String,
    pub total_slots: i64,
    pub available_slots: i64,
}
