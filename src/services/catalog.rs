use chrono::{DateTime, Utc};

use crate::database::Database;
use crate::error::Error;
use crate::models::FitnessClass;

/// Read access to the class schedule. All mutation of `available_slots` goes
/// through the booking transaction, never through here.
#[derive(Clone)]
pub struct Catalog {
    db: Database,
}

impl Catalog {
    pub fn new(db: Database) -> Self {
        Catalog { db }
    }

    /// Classes starting at or after `now`, soonest first.
    pub async fn list_upcoming(&self, now: DateTime<Utc>) -> Result<Vec<FitnessClass>, Error> {
        let classes = sqlx::query_as::<_, FitnessClass>(
            "SELECT id, name, start_time, instructor, total_slots, available_slots
             FROM classes
             WHERE start_time >= ?
             ORDER BY start_time",
        )
        .bind(now)
        .fetch_all(&self.db.pool)
        .await?;

        Ok(classes)
    }

    pub async fn get(&self, id: i64) -> Result<FitnessClass, Error> {
        sqlx::query_as::<_, FitnessClass>(
            "SELECT id, name, start_time, instructor, total_slots, available_slots
             FROM classes
             WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.db.pool)
        .await?
        .ok_or(Error::ClassNotFound)
    }
}
