//! Request bodies accepted by the public API, with their shape checks.

use infra::models::{
    NewContact, NewRegistration, NewSubscription, MAX_PLAYER_AGE, MIN_PLAYER_AGE,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::error::AppError;
use crate::validation::FieldErrors;

pub const MIN_AGE: i64 = MIN_PLAYER_AGE as i64;
pub const MAX_AGE: i64 = MAX_PLAYER_AGE as i64;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationInput {
    pub tournament_id: String,
    pub player_name: String,
    pub email: String,
    pub age: i64,
    pub free_fire_id: String,
    #[serde(default)]
    pub has_parental_consent: bool,
}

impl RegistrationInput {
    /// Checks every field except whether the tournament id resolves.
    pub fn validate(&self) -> Result<(), AppError> {
        let mut errors = FieldErrors::new();
        errors.required("tournamentId", &self.tournament_id);
        errors.required("playerName", &self.player_name);
        errors.email("email", &self.email);
        errors.range("age", self.age, MIN_AGE, MAX_AGE);
        errors.required("freeFireId", &self.free_fire_id);
        errors.finish("Invalid registration data")
    }

    /// Only meaningful after `validate` succeeded.
    pub fn into_new(self, tournament_id: Uuid) -> NewRegistration {
        NewRegistration {
            tournament_id,
            player_name: self.player_name.trim().to_string(),
            email: self.email,
            // Range already checked.
            age: self.age as i32,
            free_fire_id: self.free_fire_id.trim().to_string(),
            has_parental_consent: self.has_parental_consent,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ContactInput {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactInput {
    pub fn validate(self) -> Result<NewContact, AppError> {
        let mut errors = FieldErrors::new();
        errors.required("name", &self.name);
        errors.email("email", &self.email);
        errors.required("subject", &self.subject);
        errors.required("message", &self.message);
        errors.finish("Invalid contact data")?;

        Ok(NewContact {
            name: self.name,
            email: self.email,
            subject: self.subject,
            message: self.message,
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewsletterInput {
    pub email: String,
}

impl NewsletterInput {
    pub fn validate(self) -> Result<NewSubscription, AppError> {
        let mut errors = FieldErrors::new();
        errors.email("email", &self.email);
        errors.finish("Invalid email address")?;

        Ok(NewSubscription { email: self.email })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registration() -> RegistrationInput {
        RegistrationInput {
            tournament_id: Uuid::new_v4().to_string(),
            player_name: "Kai".into(),
            email: "kai@example.com".into(),
            age: 14,
            free_fire_id: "123456789".into(),
            has_parental_consent: true,
        }
    }

    #[test]
    fn valid_registration_passes() {
        assert!(registration().validate().is_ok());
    }

    #[test]
    fn age_bounds_are_inclusive() {
        for (age, ok) in [(9, false), (10, true), (18, true), (19, false)] {
            let input = RegistrationInput { age, ..registration() };
            assert_eq!(input.validate().is_ok(), ok, "age {age}");
        }
    }

    #[test]
    fn registration_defaults_consent_to_false() {
        let input: RegistrationInput = serde_json::from_str(
            r#"{"tournamentId":"t","playerName":"Kai","email":"kai@example.com","age":16,"freeFireId":"1"}"#,
        )
        .unwrap();
        assert!(!input.has_parental_consent);
    }

    #[test]
    fn newsletter_rejects_bad_email() {
        let err = NewsletterInput { email: "not-an-email".into() }.validate().unwrap_err();
        match err {
            AppError::Validation { errors, .. } => assert_eq!(errors[0].field, "email"),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn contact_requires_all_fields() {
        let err = ContactInput {
            name: "".into(),
            email: "mum@example.com".into(),
            subject: "".into(),
            message: "Hello".into(),
        }
        .validate()
        .unwrap_err();
        match err {
            AppError::Validation { errors, .. } => {
                let fields: Vec<_> = errors.iter().map(|e| e.field.as_str()).collect();
                assert_eq!(fields, vec!["name", "subject"]);
            }
            other => panic!("unexpected {other:?}"),
        }
    }
}
