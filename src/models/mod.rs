pub mod booking;
pub mod class;
pub mod user;

pub use booking::{Booking, BookingDetails};
pub use class::FitnessClass;
pub use user::{User, VerifiedIdentity};
