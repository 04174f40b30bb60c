//! Cross-screen rooms payload
//!
//! The booking screen hands its expanded room selection to the confirmation
//! screen as a single serialized navigation parameter. The schema carries an
//! explicit version so the receiving side can validate it instead of
//! best-effort parsing.

use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

/// Current payload schema version
pub const PAYLOAD_VERSION: u32 = 1;

/// Expanded room selection crossing the navigation boundary.
///
/// Counted categories that render as lists (bedrooms, bathrooms) are expanded
/// into labeled entries; the living room carries a bare count (0 when
/// unselected); kitchen and office carry their selection flag only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomsPayload {
    #[serde(default = "default_version")]
    pub version: u32,
    pub living_room: u32,
    pub bedrooms: Vec<String>,
    pub bathrooms: Vec<String>,
    pub kitchen: bool,
    pub office: bool,
}

fn default_version() -> u32 {
    PAYLOAD_VERSION
}

impl Default for RoomsPayload {
    fn default() -> Self {
        Self {
            version: PAYLOAD_VERSION,
            living_room: 0,
            bedrooms: Vec::new(),
            bathrooms: Vec::new(),
            kitchen: false,
            office: false,
        }
    }
}

impl RoomsPayload {
    /// Serialize for the navigation parameter
    pub fn encode(&self) -> AppResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parse and validate a received payload.
    ///
    /// Rejects unknown schema versions; malformed JSON surfaces as
    /// `AppError::Serialization`. Callers that want the lenient fallback
    /// behavior go through [`BookingDetails::merge_rooms_param`].
    ///
    /// [`BookingDetails::merge_rooms_param`]: crate::models::booking::BookingDetails::merge_rooms_param
    pub fn decode(raw: &str) -> AppResult<Self> {
        let payload: Self = serde_json::from_str(raw)?;
        if payload.version != PAYLOAD_VERSION {
            return Err(AppError::Payload(format!(
                "Unsupported rooms payload version {}",
                payload.version
            )));
        }
        Ok(payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_decode() {
        let payload = RoomsPayload {
            living_room: 1,
            bedrooms: vec!["Bedroom 1".into(), "Bedroom 2".into()],
            kitchen: true,
            ..Default::default()
        };
        let decoded = RoomsPayload::decode(&payload.encode().unwrap()).unwrap();
        assert_eq!(decoded, payload);
    }

    #[test]
    fn test_decode_rejects_unknown_version() {
        let raw = r#"{"version":99,"livingRoom":1,"bedrooms":[],"bathrooms":[],"kitchen":false,"office":false}"#;
        assert!(matches!(
            RoomsPayload::decode(raw),
            Err(AppError::Payload(_))
        ));
    }

    #[test]
    fn test_decode_rejects_malformed_json() {
        assert!(RoomsPayload::decode("not json").is_err());
        assert!(RoomsPayload::decode(r#"{"livingRoom":"three"}"#).is_err());
    }

    #[test]
    fn test_decode_defaults_missing_version() {
        let raw = r#"{"livingRoom":2,"bedrooms":[],"bathrooms":[],"kitchen":false,"office":true}"#;
        let payload = RoomsPayload::decode(raw).unwrap();
        assert_eq!(payload.version, PAYLOAD_VERSION);
        assert_eq!(payload.living_room, 2);
        assert!(payload.office);
    }
}
