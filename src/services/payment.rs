//! Payment form handling: display formatting, submit-time validation and
//! the saved-method / new-card selection state.

use std::sync::Arc;

use chrono::Datelike;

use crate::error::FieldErrors;
use crate::models::payment::{PaymentCardInput, SavedPaymentMethod, SAVED_PAYMENT_METHODS};
use crate::services::Clock;

/// Maximum card number length in digits
const CARD_DIGITS: usize = 16;

/// Format a card number for display: digits only, capped at 16, a space
/// after every complete group of four. Applied on every keystroke.
pub fn format_card_number(input: &str) -> String {
    let digits: String = input
        .chars()
        .filter(|c| c.is_ascii_digit())
        .take(CARD_DIGITS)
        .collect();

    let mut formatted = String::with_capacity(CARD_DIGITS + 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && i % 4 == 0 {
            formatted.push(' ');
        }
        formatted.push(c);
    }
    formatted
}

/// Format an expiry date for display: digits only, capped at 4, a slash
/// after the month once a third digit arrives.
pub fn format_expiry(input: &str) -> String {
    let digits: String = input
        .chars()
        .filter(|c| c.is_ascii_digit())
        .take(4)
        .collect();

    if digits.len() > 2 {
        format!("{}/{}", &digits[..2], &digits[2..])
    } else {
        digits
    }
}

/// Validation outcome of the new-card form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentFormState {
    /// Nothing typed yet
    Empty,
    /// Fields edited, not yet submitted
    Editing,
    /// Last submit passed validation
    Valid,
    /// Last submit failed validation
    Invalid,
}

/// Validates new-card input on submit (never per keystroke).
#[derive(Clone)]
pub struct PaymentService {
    clock: Arc<dyn Clock>,
}

impl PaymentService {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }

    /// Saved methods available to the payment screen
    pub fn saved_methods(&self) -> &'static [SavedPaymentMethod] {
        &SAVED_PAYMENT_METHODS
    }

    /// Validate the form, first failure per field wins. An empty map means
    /// the card is acceptable.
    pub fn validate(&self, input: &PaymentCardInput) -> FieldErrors {
        let mut errors = FieldErrors::new();

        // Card number
        if input.number.is_empty() {
            errors.push("cardNumber", "Card number is required");
        } else {
            let digits: String = input.number.chars().filter(|c| *c != ' ').collect();
            if digits.len() != CARD_DIGITS || !digits.chars().all(|c| c.is_ascii_digit()) {
                errors.push("cardNumber", "Card number must be 16 digits");
            }
        }

        // Card holder
        if input.holder.trim().is_empty() {
            errors.push("cardHolder", "Card holder name is required");
        }

        // Expiry
        if input.expiry.is_empty() {
            errors.push("expiryDate", "Expiry date is required");
        } else {
            self.validate_expiry(&input.expiry, &mut errors);
        }

        // CVV
        if input.cvv.is_empty() {
            errors.push("cvv", "CVV is required");
        } else if !(3..=4).contains(&input.cvv.len())
            || !input.cvv.chars().all(|c| c.is_ascii_digit())
        {
            errors.push("cvv", "CVV must be 3 or 4 digits");
        }

        errors
    }

    fn validate_expiry(&self, expiry: &str, errors: &mut FieldErrors) {
        let Some((month_str, year_str)) = expiry.split_once('/') else {
            errors.push("expiryDate", "Invalid expiry date format");
            return;
        };
        if month_str.len() != 2
            || year_str.len() != 2
            || !month_str.chars().all(|c| c.is_ascii_digit())
            || !year_str.chars().all(|c| c.is_ascii_digit())
        {
            errors.push("expiryDate", "Invalid expiry date format");
            return;
        }

        let month: u32 = month_str.parse().unwrap_or(0);
        let year: i32 = year_str.parse().unwrap_or(0);
        if !(1..=12).contains(&month) {
            errors.push("expiryDate", "Invalid month");
            return;
        }

        // Two-digit year comparison, same contract as the card networks use
        let today = self.clock.today();
        let current_year = today.year() % 100;
        let current_month = today.month();
        if year < current_year || (year == current_year && month < current_month) {
            errors.push("expiryDate", "Card has expired");
        }
    }
}

/// The payment screen's method-selection state: either one saved method is
/// selected or the new-card form is open, never both.
#[derive(Debug, Clone)]
pub struct PaymentScreen {
    selected_method: Option<String>,
    adding_new_card: bool,
    card_input: PaymentCardInput,
    form_state: PaymentFormState,
    errors: FieldErrors,
}

impl Default for PaymentScreen {
    fn default() -> Self {
        // The default saved method starts selected
        let selected_method = SAVED_PAYMENT_METHODS
            .iter()
            .find(|m| m.is_default)
            .map(|m| m.id.clone());
        Self {
            selected_method,
            adding_new_card: false,
            card_input: PaymentCardInput::default(),
            form_state: PaymentFormState::Empty,
            errors: FieldErrors::new(),
        }
    }
}

impl PaymentScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected_method(&self) -> Option<&str> {
        self.selected_method.as_deref()
    }

    pub fn adding_new_card(&self) -> bool {
        self.adding_new_card
    }

    pub fn card_input(&self) -> &PaymentCardInput {
        &self.card_input
    }

    pub fn form_state(&self) -> PaymentFormState {
        self.form_state
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Pick a saved method, closing the new-card form
    pub fn select_method(&mut self, id: &str) {
        self.selected_method = Some(id.to_string());
        self.adding_new_card = false;
    }

    /// Open or close the new-card form; opening deselects any saved method
    pub fn toggle_add_new_card(&mut self) {
        self.adding_new_card = !self.adding_new_card;
        if self.adding_new_card {
            self.selected_method = None;
        }
    }

    // Per-keystroke setters apply the display transforms; validation only
    // happens on submit.

    pub fn set_card_number(&mut self, text: &str) {
        self.card_input.number = format_card_number(text);
        self.mark_editing();
    }

    pub fn set_card_holder(&mut self, text: &str) {
        self.card_input.holder = text.to_string();
        self.mark_editing();
    }

    pub fn set_expiry(&mut self, text: &str) {
        self.card_input.expiry = format_expiry(text);
        self.mark_editing();
    }

    pub fn set_cvv(&mut self, text: &str) {
        self.card_input.cvv = text.to_string();
        self.mark_editing();
    }

    fn mark_editing(&mut self) {
        if self.card_input.is_empty() {
            self.form_state = PaymentFormState::Empty;
        } else {
            self.form_state = PaymentFormState::Editing;
        }
    }

    /// Submit the new-card form. With the form closed there is nothing to
    /// validate and the saved-method selection stands.
    pub fn submit(&mut self, service: &PaymentService) -> bool {
        if !self.adding_new_card {
            return true;
        }
        self.errors = service.validate(&self.card_input);
        self.form_state = if self.errors.is_empty() {
            PaymentFormState::Valid
        } else {
            PaymentFormState::Invalid
        };
        self.errors.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::MockClock;
    use chrono::NaiveDate;

    fn service_at(year: i32, month: u32) -> PaymentService {
        let mut clock = MockClock::new();
        clock
            .expect_today()
            .return_const(NaiveDate::from_ymd_opt(year, month, 15).unwrap());
        PaymentService::new(Arc::new(clock))
    }

    fn valid_input() -> PaymentCardInput {
        PaymentCardInput {
            number: "4111 1111 1111 1111".into(),
            holder: "Luisa Maria Millan".into(),
            expiry: "12/26".into(),
            cvv: "123".into(),
        }
    }

    #[test]
    fn test_format_card_number_groups_of_four() {
        assert_eq!(
            format_card_number("4111111111111111"),
            "4111 1111 1111 1111"
        );
        assert_eq!(format_card_number("41111"), "4111 1");
        assert_eq!(format_card_number(""), "");
    }

    #[test]
    fn test_format_card_number_truncates_past_sixteen() {
        assert_eq!(
            format_card_number("41111111111111112222"),
            "4111 1111 1111 1111"
        );
    }

    #[test]
    fn test_format_card_number_strips_non_digits() {
        assert_eq!(format_card_number("4111-1111a"), "4111 1111");
    }

    #[test]
    fn test_format_expiry() {
        assert_eq!(format_expiry("1"), "1");
        assert_eq!(format_expiry("12"), "12");
        assert_eq!(format_expiry("122"), "12/2");
        assert_eq!(format_expiry("1226"), "12/26");
        assert_eq!(format_expiry("12268"), "12/26");
    }

    #[test]
    fn test_valid_card_passes() {
        let errors = service_at(2024, 6).validate(&valid_input());
        assert!(errors.is_empty());
    }

    #[test]
    fn test_empty_fields_use_required_messages() {
        let errors = service_at(2024, 6).validate(&PaymentCardInput::default());
        assert_eq!(errors.get("cardNumber"), Some("Card number is required"));
        assert_eq!(errors.get("cardHolder"), Some("Card holder name is required"));
        assert_eq!(errors.get("expiryDate"), Some("Expiry date is required"));
        assert_eq!(errors.get("cvv"), Some("CVV is required"));
    }

    #[test]
    fn test_short_card_number_rejected() {
        let mut input = valid_input();
        input.number = "4111 1111".into();
        let errors = service_at(2024, 6).validate(&input);
        assert_eq!(errors.get("cardNumber"), Some("Card number must be 16 digits"));
    }

    #[test]
    fn test_expired_card_rejected() {
        let mut input = valid_input();
        input.expiry = "01/20".into();
        let errors = service_at(2024, 6).validate(&input);
        assert_eq!(errors.get("expiryDate"), Some("Card has expired"));
    }

    #[test]
    fn test_expiry_same_year_earlier_month_rejected() {
        let mut input = valid_input();
        input.expiry = "05/24".into();
        let errors = service_at(2024, 6).validate(&input);
        assert_eq!(errors.get("expiryDate"), Some("Card has expired"));
    }

    #[test]
    fn test_expiry_current_month_accepted() {
        let mut input = valid_input();
        input.expiry = "06/24".into();
        assert!(service_at(2024, 6).validate(&input).is_empty());
    }

    #[test]
    fn test_expiry_bad_format_and_month() {
        let service = service_at(2024, 6);
        for raw in ["1226", "1/26", "12/2"] {
            let mut input = valid_input();
            input.expiry = raw.into();
            assert_eq!(
                service.validate(&input).get("expiryDate"),
                Some("Invalid expiry date format"),
                "{raw}"
            );
        }
        let mut input = valid_input();
        input.expiry = "13/26".into();
        assert_eq!(service.validate(&input).get("expiryDate"), Some("Invalid month"));
    }

    #[test]
    fn test_cvv_length_bounds() {
        let service = service_at(2024, 6);
        for bad in ["12", "12345", "12a"] {
            let mut input = valid_input();
            input.cvv = bad.into();
            assert_eq!(
                service.validate(&input).get("cvv"),
                Some("CVV must be 3 or 4 digits"),
                "{bad}"
            );
        }
        let mut input = valid_input();
        input.cvv = "1234".into();
        assert!(service.validate(&input).is_empty());
    }

    #[test]
    fn test_screen_selection_is_exclusive() {
        let mut screen = PaymentScreen::new();
        assert_eq!(screen.selected_method(), Some("1"));

        screen.toggle_add_new_card();
        assert!(screen.adding_new_card());
        assert_eq!(screen.selected_method(), None);

        screen.select_method("2");
        assert!(!screen.adding_new_card());
        assert_eq!(screen.selected_method(), Some("2"));
    }

    #[test]
    fn test_screen_submit_state_machine() {
        let service = service_at(2024, 6);
        let mut screen = PaymentScreen::new();
        assert_eq!(screen.form_state(), PaymentFormState::Empty);

        // closed form: nothing to validate
        assert!(screen.submit(&service));

        screen.toggle_add_new_card();
        screen.set_card_number("4111111111111111");
        assert_eq!(screen.form_state(), PaymentFormState::Editing);
        assert_eq!(screen.card_input().number, "4111 1111 1111 1111");

        assert!(!screen.submit(&service));
        assert_eq!(screen.form_state(), PaymentFormState::Invalid);
        assert!(screen.errors().get("cardHolder").is_some());

        screen.set_card_holder("Luisa Maria Millan");
        screen.set_expiry("1226");
        screen.set_cvv("123");
        assert!(screen.submit(&service));
        assert_eq!(screen.form_state(), PaymentFormState::Valid);
        assert!(screen.errors().is_empty());
    }
}
