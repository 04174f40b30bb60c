//! Authentication form models

use serde::Deserialize;
use validator::Validate;

/// Login form input
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct LoginForm {
    /// Email or phone number
    #[validate(email(message = "Email is invalid"))]
    pub email: String,
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,
    #[serde(default)]
    pub remember_me: bool,
}

/// Signup form input
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct SignupForm {
    pub name: String,
    #[validate(email(message = "Email is invalid"))]
    pub email: String,
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,
    #[validate(must_match(other = "password", message = "Passwords do not match"))]
    pub confirm_password: String,
}

/// A signed-in user; sample identity only, no backend account exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub name: String,
    pub email: String,
}
