use bcrypt::{hash, verify, DEFAULT_COST};

use crate::error::{AppError, FieldError};

pub struct PasswordService;

impl PasswordService {
    pub fn hash_password(password: &str) -> Result<String, AppError> {
        hash(password, DEFAULT_COST)
            .map_err(|e| AppError::Internal(format!("Failed to hash password: {}", e)))
    }

    pub fn verify_password(password: &str, hash: &str) -> Result<bool, AppError> {
        verify(password, hash)
            .map_err(|e| AppError::Internal(format!("Failed to verify password: {}", e)))
    }

    pub fn validate_password_strength(password: &str) -> Result<(), AppError> {
        if password.len() < 8 {
            return Err(weak("Password must be at least 8 characters long"));
        }

        let has_letter = password.chars().any(|c| c.is_alphabetic());
        let has_digit = password.chars().any(|c| c.is_numeric());

        if !has_letter || !has_digit {
            return Err(weak("Password must contain at least one letter and one number"));
        }

        Ok(())
    }
}

fn weak(message: &str) -> AppError {
    AppError::validation("Invalid user data", vec![FieldError::new("password", message)])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_then_verify() {
        let hashed = PasswordService::hash_password("squad4life").unwrap();
        assert_ne!(hashed, "squad4life");
        assert!(PasswordService::verify_password("squad4life", &hashed).unwrap());
        assert!(!PasswordService::verify_password("squad4lief", &hashed).unwrap());
    }

    #[test]
    fn strength_rules() {
        assert!(PasswordService::validate_password_strength("short1").is_err());
        assert!(PasswordService::validate_password_strength("lettersonly").is_err());
        assert!(PasswordService::validate_password_strength("12345678").is_err());
        assert!(PasswordService::validate_password_strength("booyah2024").is_ok());
    }
}
