//! Declarative schemas for the sign-in and sign-up forms.
//!
//! Validation runs before any request is built; a form that fails
//! [`LoginForm::check`] or [`SignupForm::check`] never reaches the network.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

/// Sign-in form input.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct LoginForm {
    #[validate(email(message = "Please enter a valid email address"))]
    pub email: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Sign-up form input.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct SignupForm {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(email(message = "Please enter a valid email address"))]
    pub email: String,
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,
}

/// First validation message per field, keyed by field name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }
}

impl From<ValidationErrors> for FieldErrors {
    fn from(errors: ValidationErrors) -> Self {
        let mut map = BTreeMap::new();
        for (field, errs) in errors.field_errors() {
            let message = errs
                .iter()
                .find_map(|e| e.message.as_ref().map(|m| m.to_string()))
                .unwrap_or_else(|| "Invalid value".to_string());
            map.insert(field.to_string(), message);
        }
        Self(map)
    }
}

impl LoginForm {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// Trim the email and validate.
    pub fn check(mut self) -> Result<Self, FieldErrors> {
        self.email = self.email.trim().to_string();
        self.validate()?;
        Ok(self)
    }
}

impl SignupForm {
    pub fn new(name: impl Into<String>, email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password: password.into(),
        }
    }

    /// Trim name and email and validate.
    pub fn check(mut self) -> Result<Self, FieldErrors> {
        self.name = self.name.trim().to_string();
        self.email = self.email.trim().to_string();
        self.validate()?;
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_valid_input_is_trimmed() {
        let form = LoginForm::new("  ada@acme.test ", "secret").check().unwrap();
        assert_eq!(form.email, "ada@acme.test");
        assert_eq!(form.password, "secret");
    }

    #[test]
    fn test_login_empty_fields() {
        let errors = LoginForm::new("", "").check().unwrap_err();
        assert_eq!(errors.get("email"), Some("Please enter a valid email address"));
        assert_eq!(errors.get("password"), Some("Password is required"));
    }

    #[test]
    fn test_login_malformed_email() {
        let errors = LoginForm::new("not-an-email", "secret").check().unwrap_err();
        assert!(errors.get("email").is_some());
        assert!(errors.get("password").is_none());
    }

    #[test]
    fn test_signup_password_minimum_length() {
        let errors = SignupForm::new("Ada", "ada@acme.test", "short").check().unwrap_err();
        assert_eq!(errors.get("password"), Some("Password must be at least 8 characters"));
        assert!(errors.get("name").is_none());
        assert!(errors.get("email").is_none());

        assert!(SignupForm::new("Ada", "ada@acme.test", "12345678").check().is_ok());
    }

    #[test]
    fn test_signup_blank_name() {
        let errors = SignupForm::new("   ", "ada@acme.test", "long enough").check().unwrap_err();
        assert_eq!(errors.get("name"), Some("Name is required"));
    }
}
