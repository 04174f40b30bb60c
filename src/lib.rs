//! HouseSkiper booking core
//!
//! Domain and UI-state logic behind the HouseSkiper home-cleaning booking
//! app: the booking configurator (rooms, calendar, time slots, dirtiness),
//! payment form handling, session state and the sample catalog. There is no
//! network client and no persistence; the cross-screen payload in
//! [`models::payload`] is the only workflow boundary.

pub mod config;
pub mod error;
pub mod models;
pub mod schedule;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult, FieldErrors};
pub use services::booking::BookingConfigurator;
pub use services::Services;
