#![allow(dead_code)]

use chrono::{Duration, Utc};
use std::sync::Arc;

use studio_booking::config::{AppConfig, Config, DatabaseConfig};
use studio_booking::models::VerifiedIdentity;
use studio_booking::AppState;

/// Fresh application state over an in-memory database. Pool size 1 keeps the
/// in-memory database on a single connection.
pub async fn test_state() -> Arc<AppState> {
    test_state_with("sqlite::memory:", 1).await
}

/// Like `test_state`, but with an explicit database URL and pool size.
/// Concurrency tests use a file-backed database so several connections can
/// hold transactions against the same data at once.
pub async fn test_state_with(database_url: &str, pool_size: u32) -> Arc<AppState> {
    let config = Config {
        app: AppConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            rust_log: "warn".to_string(),
        },
        database: DatabaseConfig {
            url: database_url.to_string(),
            pool_size,
        },
    };
    AppState::new(config).await.expect("failed to build test state")
}

pub async fn seed_class(
    state: &Arc<AppState>,
    name: &str,
    hours_from_now: i64,
    total_slots: i64,
    available_slots: i64,
) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO classes (name, start_time, instructor, total_slots, available_slots)
         VALUES (?, ?, ?, ?, ?)
         RETURNING id",
    )
    .bind(name)
    .bind(Utc::now() + Duration::hours(hours_from_now))
    .bind("Jane")
    .bind(total_slots)
    .bind(available_slots)
    .fetch_one(&state.db.pool)
    .await
    .expect("failed to seed class")
}

pub async fn seed_user(state: &Arc<AppState>, name: &str, email: &str, password: &str) {
    let hash = bcrypt::hash(password, 4).expect("failed to hash password");
    sqlx::query("INSERT INTO users (email, password_hash, display_name) VALUES (?, ?, ?)")
        .bind(email)
        .bind(hash)
        .bind(name)
        .execute(&state.db.pool)
        .await
        .expect("failed to seed user");
}

pub fn identity(name: &str, email: &str) -> VerifiedIdentity {
    VerifiedIdentity {
        name: name.to_string(),
        email: email.to_string(),
    }
}

pub async fn available_slots(state: &Arc<AppState>, class_id: i64) -> i64 {
    sqlx::query_scalar("SELECT available_slots FROM classes WHERE id = ?")
        .bind(class_id)
        .fetch_one(&state.db.pool)
        .await
        .expect("failed to read available_slots")
}

pub async fn booking_count(state: &Arc<AppState>, class_id: i64) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM bookings WHERE class_id = ?")
        .bind(class_id)
        .fetch_one(&state.db.pool)
        .await
        .expect("failed to count bookings")
}

/// bookings(class) + available_slots == total_slots must hold between
/// transactions, no matter how the class got into its current state.
pub async fn assert_invariant(state: &Arc<AppState>, class_id: i64) {
    let (total, available): (i64, i64) =
        sqlx::query_as("SELECT total_slots, available_slots FROM classes WHERE id = ?")
            .bind(class_id)
            .fetch_one(&state.db.pool)
            .await
            .expect("failed to read class");
    let booked = booking_count(state, class_id).await;
    assert_eq!(
        booked + available,
        total,
        "slot invariant violated for class {}",
        class_id
    );
}
