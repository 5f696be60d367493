use std::sync::Arc;

use infra::Store;

use crate::services::{RegistrationService, UserService};

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn Store>,
    registration_service: RegistrationService,
    user_service: UserService,
}

impl AppState {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self {
            registration_service: RegistrationService::new(store.clone()),
            user_service: UserService::new(store.clone()),
            store,
        }
    }

    pub fn registration_service(&self) -> &RegistrationService {
        &self.registration_service
    }

    pub fn user_service(&self) -> &UserService {
        &self.user_service
    }
}
