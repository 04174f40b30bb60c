//! Session state and authentication form validation
//!
//! There is no auth backend in scope; the session is an explicit in-process
//! context with defined login/logout transitions rather than an ambient
//! boolean.

use validator::Validate;

use crate::error::FieldErrors;
use crate::models::user::{LoginForm, SignupForm, User};

/// Flatten `validator` output into inline messages, keeping the first
/// failure per field in display order.
fn derive_errors<T: Validate>(form: &T, fields: &[&'static str]) -> FieldErrors {
    let mut errors = FieldErrors::new();
    if let Err(validation) = form.validate() {
        let by_field = validation.field_errors();
        for &field in fields {
            if let Some(field_errors) = by_field.get(field) {
                if let Some(message) = field_errors.iter().find_map(|e| e.message.as_ref()) {
                    errors.push(field, message.to_string());
                }
            }
        }
    }
    errors
}

/// Validate the login form. Required checks come before format checks so
/// an empty field reads "required" rather than "invalid".
pub fn validate_login(form: &LoginForm) -> FieldErrors {
    let mut errors = FieldErrors::new();
    if form.email.is_empty() {
        errors.push("email", "Email is required");
    }
    if form.password.is_empty() {
        errors.push("password", "Password is required");
    }
    let derived = derive_errors(form, &["email", "password"]);
    for (field, message) in derived.iter() {
        errors.push(field, message);
    }
    errors
}

/// Validate the signup form
pub fn validate_signup(form: &SignupForm) -> FieldErrors {
    let mut errors = FieldErrors::new();
    if form.name.is_empty() {
        errors.push("name", "Name is required");
    }
    if form.email.is_empty() {
        errors.push("email", "Email is required");
    }
    if form.password.is_empty() {
        errors.push("password", "Password is required");
    }
    if form.confirm_password.is_empty() {
        errors.push("confirmPassword", "Please confirm your password");
    }
    let derived = derive_errors(form, &["email", "password", "confirm_password"]);
    for (field, message) in derived.iter() {
        let field = if field == "confirm_password" {
            "confirmPassword"
        } else {
            field
        };
        errors.push(field, message);
    }
    errors
}

/// Process-wide authentication state, injected at the navigation root.
#[derive(Debug, Clone, Default)]
pub struct SessionContext {
    current_user: Option<User>,
}

impl SessionContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_authenticated(&self) -> bool {
        self.current_user.is_some()
    }

    pub fn current_user(&self) -> Option<&User> {
        self.current_user.as_ref()
    }

    /// Sign in with the login form. On validation failure the session is
    /// unchanged and the per-field errors are returned for inline display.
    pub fn login(&mut self, form: &LoginForm) -> Result<&User, FieldErrors> {
        let errors = validate_login(form);
        if !errors.is_empty() {
            return Err(errors);
        }
        tracing::info!(email = %form.email, "User signed in");
        self.current_user = Some(User {
            name: form.email.clone(),
            email: form.email.clone(),
        });
        Ok(self.current_user.as_ref().unwrap())
    }

    /// Create an account and sign in
    pub fn signup(&mut self, form: &SignupForm) -> Result<&User, FieldErrors> {
        let errors = validate_signup(form);
        if !errors.is_empty() {
            return Err(errors);
        }
        tracing::info!(email = %form.email, "User signed up");
        self.current_user = Some(User {
            name: form.name.clone(),
            email: form.email.clone(),
        });
        Ok(self.current_user.as_ref().unwrap())
    }

    /// Invalidate the session
    pub fn logout(&mut self) {
        if let Some(user) = self.current_user.take() {
            tracing::info!(email = %user.email, "User signed out");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn login_form(email: &str, password: &str) -> LoginForm {
        LoginForm {
            email: email.into(),
            password: password.into(),
            remember_me: false,
        }
    }

    #[test]
    fn test_login_empty_fields_read_required() {
        let errors = validate_login(&login_form("", ""));
        assert_eq!(errors.get("email"), Some("Email is required"));
        assert_eq!(errors.get("password"), Some("Password is required"));
    }

    #[test]
    fn test_login_invalid_email() {
        let errors = validate_login(&login_form("not-an-email", "secret123"));
        assert_eq!(errors.get("email"), Some("Email is invalid"));
        assert_eq!(errors.get("password"), None);
    }

    #[test]
    fn test_login_short_password() {
        let errors = validate_login(&login_form("ana@example.com", "abc"));
        assert_eq!(
            errors.get("password"),
            Some("Password must be at least 6 characters")
        );
    }

    #[test]
    fn test_signup_password_mismatch() {
        let form = SignupForm {
            name: "Ana".into(),
            email: "ana@example.com".into(),
            password: "secret123".into(),
            confirm_password: "secret124".into(),
        };
        let errors = validate_signup(&form);
        assert_eq!(errors.get("confirmPassword"), Some("Passwords do not match"));
    }

    #[test]
    fn test_signup_missing_confirmation() {
        let form = SignupForm {
            name: "Ana".into(),
            email: "ana@example.com".into(),
            password: "secret123".into(),
            confirm_password: String::new(),
        };
        let errors = validate_signup(&form);
        assert_eq!(
            errors.get("confirmPassword"),
            Some("Please confirm your password")
        );
    }

    #[test]
    fn test_session_transitions() {
        let mut session = SessionContext::new();
        assert!(!session.is_authenticated());

        let err = session.login(&login_form("", "")).unwrap_err();
        assert!(!err.is_empty());
        assert!(!session.is_authenticated());

        session
            .login(&login_form("ana@example.com", "secret123"))
            .unwrap();
        assert!(session.is_authenticated());
        assert_eq!(
            session.current_user().unwrap().email,
            "ana@example.com"
        );

        session.logout();
        assert!(!session.is_authenticated());
    }
}
