pub mod registration_service;
pub mod user_service;

pub use registration_service::RegistrationService;
pub use user_service::UserService;
