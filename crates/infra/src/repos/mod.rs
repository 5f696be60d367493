pub mod blog_posts;
pub mod contacts;
pub mod newsletters;
pub mod registrations;
pub mod tournaments;
pub mod users;

pub use blog_posts::BlogPostRepo;
pub use contacts::ContactRepo;
pub use newsletters::NewsletterRepo;
pub use registrations::{CommitOutcome, RegistrationRepo};
pub use tournaments::TournamentRepo;
pub use users::UserRepo;
