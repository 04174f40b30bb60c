//! Booking draft and confirmation details

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::AppResult;
use crate::models::catalog::{Cleaner, CLEANERS};
use crate::models::payload::RoomsPayload;

/// The in-progress booking configuration, built on "confirm booking".
///
/// Constructed, serialized, handed to the confirmation step and discarded;
/// nothing is persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingDraft {
    pub rooms: RoomsPayload,
    pub date: NaiveDate,
    pub time: String,
    pub dirtiness_level: f32,
}

impl BookingDraft {
    /// Serialize for the workflow boundary; round-trips exactly.
    pub fn encode(&self) -> AppResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn decode(raw: &str) -> AppResult<Self> {
        Ok(serde_json::from_str(raw)?)
    }
}

/// Service block of the confirmation details
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceDetails {
    pub service_type: String,
    pub duration: String,
    pub time_range: String,
    pub rooms: RoomsPayload,
}

/// Appointment block of the confirmation details
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentDetails {
    pub day: String,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
}

/// Service address block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressDetails {
    pub name: String,
    pub street: String,
    pub region: String,
}

/// Payment summary block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentDetails {
    pub method: String,
    pub card_holder: String,
    pub subtotal: Decimal,
    pub service_fee: Decimal,
    pub total: Decimal,
}

/// Everything the confirmation screen shows.
///
/// Starts from sample defaults; a rooms payload received from the booking
/// step is merged in when it parses, and the defaults are silently retained
/// when it does not (lenient degradation, logged but never surfaced).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingDetails {
    pub cleaner: Cleaner,
    pub service: ServiceDetails,
    pub date_time: AppointmentDetails,
    pub address: AddressDetails,
    pub payment: PaymentDetails,
}

impl Default for BookingDetails {
    fn default() -> Self {
        Self {
            cleaner: CLEANERS[2].clone(),
            service: ServiceDetails {
                service_type: "House - Basic Cleaning".to_string(),
                duration: "4 hours".to_string(),
                time_range: "2:00 pm a 6:00 pm".to_string(),
                rooms: RoomsPayload::default(),
            },
            date_time: AppointmentDetails {
                day: "Wednesday".to_string(),
                date: "Oct 24".to_string(),
                start_time: "2:00 pm".to_string(),
                end_time: "6:00 pm".to_string(),
            },
            address: AddressDetails {
                name: "My home".to_string(),
                street: "789 Boulevard Gourmet Ciudad Gastronómica".to_string(),
                region: "Región Inventada".to_string(),
            },
            payment: PaymentDetails {
                method: "Debit *1210".to_string(),
                card_holder: "Luisa Maria Millan".to_string(),
                subtotal: dec!(100),
                service_fee: dec!(5),
                total: dec!(105),
            },
        }
    }
}

impl BookingDetails {
    /// Merge the rooms navigation parameter into these details.
    ///
    /// A missing or malformed parameter keeps the current rooms; the failure
    /// is logged and never shown to the user.
    pub fn merge_rooms_param(&mut self, raw: Option<&str>) {
        let Some(raw) = raw else {
            tracing::warn!("No rooms parameter received, keeping defaults");
            return;
        };
        match RoomsPayload::decode(raw) {
            Ok(rooms) => self.service.rooms = rooms,
            Err(e) => {
                tracing::warn!("Error parsing selected rooms: {}", e);
            }
        }
    }
}
