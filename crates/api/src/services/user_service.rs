use std::sync::Arc;

use infra::models::{NewUser, UserRow};
use infra::{Store, StoreError};
use tracing::info;
use uuid::Uuid;

use crate::auth::PasswordService;
use crate::error::AppError;
use crate::validation::FieldErrors;

/// User accounts. Passwords are stored only as bcrypt hashes.
#[derive(Clone)]
pub struct UserService {
    store: Arc<dyn Store>,
}

impl UserService {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }

    pub async fn create_user(&self, username: &str, password: &str) -> Result<UserRow, AppError> {
        let username = username.trim();
        let mut errors = FieldErrors::new();
        errors.required("username", username);
        errors.finish("Invalid user data")?;
        PasswordService::validate_password_strength(password)?;

        let password_hash = PasswordService::hash_password(password)?;
        let user = self
            .store
            .create_user(NewUser { username: username.to_string(), password_hash })
            .await
            .map_err(|e| match e {
                StoreError::Duplicate(_) => AppError::Conflict("Username is already taken".into()),
                other => other.into(),
            })?;

        info!(user_id = %user.id, "user created");
        Ok(user)
    }

    pub async fn get_user(&self, id: Uuid) -> Result<Option<UserRow>, AppError> {
        Ok(self.store.get_user(id).await?)
    }

    pub async fn get_user_by_username(&self, username: &str) -> Result<Option<UserRow>, AppError> {
        Ok(self.store.get_user_by_username(username).await?)
    }

    /// Returns the user when the password matches, `None` otherwise.
    pub async fn verify_credentials(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<UserRow>, AppError> {
        let Some(user) = self.store.get_user_by_username(username.trim()).await? else {
            return Ok(None);
        };

        if PasswordService::verify_password(password, &user.password_hash)? {
            Ok(Some(user))
        } else {
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use infra::MemStore;

    use super::*;

    fn service() -> UserService {
        UserService::new(Arc::new(MemStore::new()))
    }

    #[tokio::test]
    async fn stores_hash_not_password() {
        let users = service();
        let user = users.create_user("coach", "firestorm24").await.unwrap();

        assert_ne!(user.password_hash, "firestorm24");
        assert!(user.password_hash.starts_with("$2"));
        assert_eq!(users.get_user(user.id).await.unwrap().unwrap().username, "coach");
    }

    #[tokio::test]
    async fn verifies_credentials() {
        let users = service();
        users.create_user("coach", "firestorm24").await.unwrap();

        assert!(users.verify_credentials("coach", "firestorm24").await.unwrap().is_some());
        assert!(users.verify_credentials("coach", "wrong-pass1").await.unwrap().is_none());
        assert!(users.verify_credentials("nobody", "firestorm24").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn rejects_duplicates_and_weak_passwords() {
        let users = service();
        users.create_user("coach", "firestorm24").await.unwrap();

        assert!(matches!(
            users.create_user("coach", "another99").await.unwrap_err(),
            AppError::Conflict(_)
        ));
        assert!(matches!(
            users.create_user("rookie", "weak").await.unwrap_err(),
            AppError::Validation { .. }
        ));
        assert!(matches!(
            users.create_user("  ", "firestorm24").await.unwrap_err(),
            AppError::Validation { .. }
        ));
    }
}
