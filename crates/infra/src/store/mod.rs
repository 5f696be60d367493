//! Record storage behind one interface.
//!
//! [`MemStore`] keeps everything in process memory, [`PgStore`] maps each
//! record kind to a Postgres table. Both give the same answers for the same
//! sequence of calls; the application picks one at start-up and shares it as
//! `Arc<dyn Store>`.

pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::models::{
    BlogPostRow, ContactRow, NewBlogPost, NewContact, NewRegistration, NewSubscription,
    NewTournament, NewUser, NewsletterRow, RegistrationRow, TournamentRow, UserRow,
};

pub use memory::MemStore;
pub use postgres::PgStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("tournament is full")]
    TournamentFull,

    #[error("registration is closed for this tournament")]
    RegistrationClosed,

    #[error("{0} already exists")]
    Duplicate(&'static str),

    /// A record broke one of the table rules (range, capacity, reference).
    #[error("constraint violated: {0}")]
    Constraint(&'static str),

    #[error("database error")]
    Db(#[from] sqlx::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

#[async_trait]
pub trait Store: Send + Sync {
    async fn ping(&self) -> StoreResult<()>;

    async fn create_tournament(&self, data: NewTournament) -> StoreResult<TournamentRow>;
    async fn get_tournament(&self, id: Uuid) -> StoreResult<Option<TournamentRow>>;
    /// Ordered by ascending start date.
    async fn list_tournaments(&self) -> StoreResult<Vec<TournamentRow>>;

    /// Re-checks that the tournament exists, is open and has a free seat, then
    /// stores the registration and increments `current_players` by one. Either
    /// both writes happen or neither does.
    async fn commit_registration(&self, data: NewRegistration) -> StoreResult<RegistrationRow>;
    /// Oldest first, optionally restricted to one tournament.
    async fn list_registrations(&self, tournament_id: Option<Uuid>)
        -> StoreResult<Vec<RegistrationRow>>;

    async fn create_blog_post(&self, data: NewBlogPost) -> StoreResult<BlogPostRow>;
    async fn get_blog_post(&self, id: Uuid) -> StoreResult<Option<BlogPostRow>>;
    /// Newest first.
    async fn list_blog_posts(&self) -> StoreResult<Vec<BlogPostRow>>;
    /// Counts one view. Returns false if the post does not exist.
    async fn increment_post_views(&self, id: Uuid) -> StoreResult<bool>;

    async fn create_contact(&self, data: NewContact) -> StoreResult<ContactRow>;

    async fn create_subscription(&self, data: NewSubscription) -> StoreResult<NewsletterRow>;

    async fn create_user(&self, data: NewUser) -> StoreResult<UserRow>;
    async fn get_user(&self, id: Uuid) -> StoreResult<Option<UserRow>>;
    async fn get_user_by_username(&self, username: &str) -> StoreResult<Option<UserRow>>;
}
