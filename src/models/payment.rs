//! Payment method models

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Raw new-card form input, as typed (number and expiry already carry the
/// display separators inserted by the formatting helpers).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentCardInput {
    pub number: String,
    pub holder: String,
    /// MM/YY
    pub expiry: String,
    pub cvv: String,
}

impl PaymentCardInput {
    pub fn is_empty(&self) -> bool {
        self.number.is_empty()
            && self.holder.is_empty()
            && self.expiry.is_empty()
            && self.cvv.is_empty()
    }
}

/// A saved payment method shown on the payment screen
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedPaymentMethod {
    pub id: String,
    pub card_type: String,
    pub last_four: String,
    pub card_holder: String,
    /// MM/YY
    pub expiry_date: String,
    pub is_default: bool,
}

/// Sample saved cards standing in for a future account store
pub static SAVED_PAYMENT_METHODS: Lazy<Vec<SavedPaymentMethod>> = Lazy::new(|| {
    vec![
        SavedPaymentMethod {
            id: "1".into(),
            card_type: "Visa".into(),
            last_four: "1210".into(),
            card_holder: "Luisa Maria Millan".into(),
            expiry_date: "05/25".into(),
            is_default: true,
        },
        SavedPaymentMethod {
            id: "2".into(),
            card_type: "Mastercard".into(),
            last_four: "4567".into(),
            card_holder: "Luisa Maria Millan".into(),
            expiry_date: "08/26".into(),
            is_default: false,
        },
    ]
});
