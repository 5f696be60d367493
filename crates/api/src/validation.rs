//! Field-level checks for incoming request shapes.

use crate::error::{AppError, FieldError};

/// Collects every failing field so the caller sees all problems at once.
#[derive(Debug, Default)]
pub struct FieldErrors(Vec<FieldError>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: &str, message: impl Into<String>) {
        self.0.push(FieldError::new(field, message));
    }

    pub fn required(&mut self, field: &str, value: &str) {
        if value.trim().is_empty() {
            self.push(field, "Required");
        }
    }

    pub fn email(&mut self, field: &str, value: &str) {
        if !is_valid_email(value) {
            self.push(field, "Invalid email");
        }
    }

    pub fn range(&mut self, field: &str, value: i64, min: i64, max: i64) {
        if value < min {
            self.push(field, format!("Must be at least {min}"));
        } else if value > max {
            self.push(field, format!("Must be at most {max}"));
        }
    }

    pub fn finish(self, message: &str) -> Result<(), AppError> {
        if self.0.is_empty() {
            Ok(())
        } else {
            Err(AppError::validation(message, self.0))
        }
    }
}

/// Syntactic check only: `local@domain.tld`, no whitespace, no empty labels.
pub fn is_valid_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') || value.chars().any(char::is_whitespace) {
        return false;
    }
    if local.starts_with('.') || local.ends_with('.') || local.contains("..") {
        return false;
    }

    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 {
        return false;
    }
    let label_ok = |label: &&str| {
        !label.is_empty()
            && !label.starts_with('-')
            && !label.ends_with('-')
            && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
    };
    let tld = labels[labels.len() - 1];
    labels.iter().all(label_ok) && tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_ordinary_addresses() {
        assert!(is_valid_email("player@example.com"));
        assert!(is_valid_email("first.last+cup@mail.example.org"));
        assert!(is_valid_email("a_b@sub-domain.io"));
    }

    #[test]
    fn rejects_malformed_addresses() {
        for bad in [
            "not-an-email",
            "",
            "@example.com",
            "player@",
            "player@example",
            "player@@example.com",
            "play er@example.com",
            "player@example.c",
            "player@-example.com",
            "player@example..com",
            ".player@example.com",
        ] {
            assert!(!is_valid_email(bad), "{bad} should be rejected");
        }
    }

    #[test]
    fn collects_every_failing_field() {
        let mut errors = FieldErrors::new();
        errors.required("playerName", "  ");
        errors.email("email", "nope");
        errors.range("age", 9, 10, 18);
        errors.range("age", 12, 10, 18);

        match errors.finish("Invalid registration data") {
            Err(AppError::Validation { message, errors }) => {
                assert_eq!(message, "Invalid registration data");
                let fields: Vec<_> = errors.iter().map(|e| e.field.as_str()).collect();
                assert_eq!(fields, vec!["playerName", "email", "age"]);
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }
}
