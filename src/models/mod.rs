//! Data models for HouseSkiper

pub mod booking;
pub mod catalog;
pub mod payload;
pub mod payment;
pub mod rooms;
pub mod user;

// Re-export commonly used types
pub use booking::{BookingDetails, BookingDraft};
pub use catalog::{Cleaner, Promotion, ServiceCategory};
pub use payload::RoomsPayload;
pub use payment::{PaymentCardInput, SavedPaymentMethod};
pub use rooms::{RoomCategory, RoomSelection, RoomState};
pub use user::{LoginForm, SignupForm, User};
