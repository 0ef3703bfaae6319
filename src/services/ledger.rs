use sqlx::{Executor, Sqlite};

use crate::database::Database;
use crate::error::Error;
use crate::models::{Booking, BookingDetails};

/// The append-only set of booking records. Rows are inserted inside the
/// booking transaction and never updated afterwards.
#[derive(Clone)]
pub struct Ledger {
    db: Database,
}

impl Ledger {
    pub fn new(db: Database) -> Self {
        Ledger { db }
    }

    /// Bookings for one client email, most recent first.
    pub async fn list_for(&self, email: &str) -> Result<Vec<BookingDetails>, Error> {
        let bookings = sqlx::query_as::<_, BookingDetails>(
            "SELECT b.id, b.class_id, c.name AS class_name, c.start_time AS class_start_time,
                    b.client_name, b.client_email, b.booked_at
             FROM bookings b
             JOIN classes c ON c.id = b.class_id
             WHERE b.client_email = ?
             ORDER BY b.booked_at DESC",
        )
        .bind(email)
        .fetch_all(&self.db.pool)
        .await?;

        Ok(bookings)
    }

    /// Appends one row. Generic over the executor so the booking transaction
    /// can run it on its own `tx`; the caller guarantees `booking.id` is
    /// unique.
    pub async fn insert<'e, E>(&self, executor: E, booking: &Booking) -> Result<(), Error>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        sqlx::query(
            "INSERT INTO bookings (id, class_id, client_name, client_email, booked_at)
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(&booking.id)
        .bind(booking.class_id)
        .bind(&booking.client_name)
        .bind(&booking.client_email)
        .bind(booking.booked_at)
        .execute(executor)
        .await?;

        Ok(())
    }
}
