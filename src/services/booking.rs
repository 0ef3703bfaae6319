use std::collections::HashMap;
use std::sync::{Arc, Mutex as StdMutex};

use tokio::sync::Mutex;
use tracing::{info, warn};

use crate::database::Database;
use crate::error::Error;
use crate::models::{Booking, BookingDetails, VerifiedIdentity};
use crate::services::{Catalog, Ledger};

/// One async mutex per class id. Booking attempts against the same class
/// serialize on it; different classes never contend. Entries are never
/// evicted, so the map is bounded by the number of classes ever booked;
/// eviction becomes necessary only if classes ever become deletable.
#[derive(Default)]
struct ClassLocks {
    inner: StdMutex<HashMap<i64, Arc<Mutex<()>>>>,
}

impl ClassLocks {
    fn for_class(&self, class_id: i64) -> Arc<Mutex<()>> {
        let mut map = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        map.entry(class_id).or_default().clone()
    }
}

/// The booking transaction manager. Owns the only code path that writes the
/// ledger or touches `available_slots`.
#[derive(Clone)]
pub struct BookingService {
    db: Database,
    catalog: Catalog,
    ledger: Ledger,
    locks: Arc<ClassLocks>,
}

impl BookingService {
    pub fn new(db: Database, catalog: Catalog, ledger: Ledger) -> Self {
        BookingService {
            db,
            catalog,
            ledger,
            locks: Arc::new(ClassLocks::default()),
        }
    }

    /// Books one slot for the verified caller.
    ///
    /// The slot check, the ledger insert and the decrement happen inside a
    /// single transaction, under the class's lock. Two racing requests for a
    /// class with one slot left get exactly one success and one
    /// `NoAvailableSlots`.
    pub async fn book(
        &self,
        class_id: Option<i64>,
        client_name: Option<&str>,
        identity: &VerifiedIdentity,
    ) -> Result<Booking, Error> {
        // Only an absent or zero id counts as missing; any other id is
        // "present" and resolves (or fails to) against the catalog.
        let class_id = class_id.filter(|id| *id != 0).ok_or_else(|| {
            warn!("Booking failed: missing required fields");
            Error::MissingFields
        })?;
        let client_name = client_name
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .ok_or_else(|| {
                warn!("Booking failed: missing required fields");
                Error::MissingFields
            })?;

        if !names_match(client_name, &identity.name) {
            warn!("Booking blocked: name mismatch for {}", identity.email);
            return Err(Error::IdentityMismatch);
        }

        // Resolve the 404 before taking the lock; unknown ids never contend.
        let class = self.catalog.get(class_id).await?;

        let lock = self.locks.for_class(class_id);
        let _guard = lock.lock().await;

        let mut tx = self.db.pool.begin().await?;

        // Re-read under the lock; the value from `get` above may be stale.
        let available: Option<i64> =
            sqlx::query_scalar("SELECT available_slots FROM classes WHERE id = ?")
                .bind(class_id)
                .fetch_optional(&mut *tx)
                .await?;
        let available = available.ok_or(Error::ClassNotFound)?;

        if available <= 0 {
            info!("Booking failed: no available slots for class {}", class.name);
            return Err(Error::NoAvailableSlots);
        }

        let booking = Booking::new(class_id, client_name, &identity.email);
        self.ledger.insert(&mut *tx, &booking).await?;

        sqlx::query("UPDATE classes SET available_slots = available_slots - 1 WHERE id = ?")
            .bind(class_id)
            .execute(&mut *tx)
            .await?;

        // Both writes or neither; an error above drops `tx` and rolls back.
        tx.commit().await?;

        info!(
            "Booking successful: {} booked {} at {}",
            client_name, class.name, class.start_time
        );
        Ok(booking)
    }

    /// The caller's own bookings, and nobody else's. `email_override` is any
    /// explicit email the request tried to pass; its mere presence is refused
    /// so the ledger can only ever be read through the verified identity.
    pub async fn bookings_for(
        &self,
        identity: &VerifiedIdentity,
        email_override: Option<&str>,
    ) -> Result<Vec<BookingDetails>, Error> {
        if email_override.is_some() {
            warn!(
                "Blocked request: attempt to override email, token belongs to {}",
                identity.email
            );
            return Err(Error::Forbidden);
        }

        info!("Listing bookings for authenticated user {}", identity.email);
        self.ledger.list_for(&identity.email).await
    }
}

/// Claimed names match their registered counterpart ignoring case and
/// surrounding whitespace.
fn names_match(claimed: &str, registered: &str) -> bool {
    claimed.trim().to_lowercase() == registered.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_match_ignores_case_and_whitespace() {
        assert!(names_match("  Alice ", "alice"));
        assert!(names_match("alice", "ALICE"));
        assert!(!names_match("Bob", "Alice"));
    }

    #[test]
    fn class_locks_are_per_class() {
        let locks = ClassLocks::default();
        let a = locks.for_class(1);
        let b = locks.for_class(2);
        let a_again = locks.for_class(1);
        assert!(Arc::ptr_eq(&a, &a_again));
        assert!(!Arc::ptr_eq(&a, &b));
    }
}
