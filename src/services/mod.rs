pub mod booking;
pub mod catalog;
pub mod ledger;

pub use booking::BookingService;
pub use catalog::Catalog;
pub use ledger::Ledger;
