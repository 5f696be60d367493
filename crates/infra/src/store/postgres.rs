use async_trait::async_trait;
use uuid::Uuid;

use super::{Store, StoreError, StoreResult};
use crate::db::{self, Db};
use crate::models::{
    BlogPostRow, ContactRow, NewBlogPost, NewContact, NewRegistration, NewSubscription,
    NewTournament, NewUser, NewsletterRow, RegistrationRow, TournamentRow, UserRow,
};
use crate::repos::{
    BlogPostRepo, CommitOutcome, ContactRepo, NewsletterRepo, RegistrationRepo, TournamentRepo,
    UserRepo,
};

#[derive(Clone)]
pub struct PgStore {
    pool: Db,
    tournaments: TournamentRepo,
    registrations: RegistrationRepo,
    blog_posts: BlogPostRepo,
    contacts: ContactRepo,
    newsletters: NewsletterRepo,
    users: UserRepo,
}

impl PgStore {
    pub fn new(pool: Db) -> Self {
        Self {
            tournaments: TournamentRepo::new(pool.clone()),
            registrations: RegistrationRepo::new(pool.clone()),
            blog_posts: BlogPostRepo::new(pool.clone()),
            contacts: ContactRepo::new(pool.clone()),
            newsletters: NewsletterRepo::new(pool.clone()),
            users: UserRepo::new(pool.clone()),
            pool,
        }
    }
}

/// Postgres "numeric value out of range".
const NUMERIC_OUT_OF_RANGE: &str = "22003";

/// Sorts table-rule failures out of generic database errors: unique
/// violations become `Duplicate(field)`, check, foreign-key and range
/// failures become `Constraint`, everything else stays `Db`.
fn classify(err: sqlx::Error, field: &'static str) -> StoreError {
    let sqlx::Error::Database(db_err) = &err else {
        return StoreError::Db(err);
    };
    if db_err.is_unique_violation() {
        StoreError::Duplicate(field)
    } else if db_err.is_check_violation()
        || db_err.is_foreign_key_violation()
        || db_err.code().as_deref() == Some(NUMERIC_OUT_OF_RANGE)
    {
        StoreError::Constraint(field)
    } else {
        StoreError::Db(err)
    }
}

#[async_trait]
impl Store for PgStore {
    async fn ping(&self) -> StoreResult<()> {
        db::ping(&self.pool).await?;
        Ok(())
    }

    async fn create_tournament(&self, data: NewTournament) -> StoreResult<TournamentRow> {
        data.check().map_err(StoreError::Constraint)?;
        self.tournaments
            .create(data)
            .await
            .map_err(|e| classify(e, "tournament"))
    }

    async fn get_tournament(&self, id: Uuid) -> StoreResult<Option<TournamentRow>> {
        Ok(self.tournaments.get(id).await?)
    }

    async fn list_tournaments(&self) -> StoreResult<Vec<TournamentRow>> {
        Ok(self.tournaments.list().await?)
    }

    async fn commit_registration(&self, data: NewRegistration) -> StoreResult<RegistrationRow> {
        data.check().map_err(StoreError::Constraint)?;
        let outcome = self
            .registrations
            .commit(data)
            .await
            .map_err(|e| classify(e, "registration"))?;
        match outcome {
            CommitOutcome::Committed(row) => Ok(row),
            CommitOutcome::TournamentMissing => Err(StoreError::NotFound("tournament")),
            CommitOutcome::Closed => Err(StoreError::RegistrationClosed),
            CommitOutcome::Full => Err(StoreError::TournamentFull),
        }
    }

    async fn list_registrations(
        &self,
        tournament_id: Option<Uuid>,
    ) -> StoreResult<Vec<RegistrationRow>> {
        Ok(self.registrations.list(tournament_id).await?)
    }

    async fn create_blog_post(&self, data: NewBlogPost) -> StoreResult<BlogPostRow> {
        data.check().map_err(StoreError::Constraint)?;
        self.blog_posts
            .create(data)
            .await
            .map_err(|e| classify(e, "blog post"))
    }

    async fn get_blog_post(&self, id: Uuid) -> StoreResult<Option<BlogPostRow>> {
        Ok(self.blog_posts.get(id).await?)
    }

    async fn list_blog_posts(&self) -> StoreResult<Vec<BlogPostRow>> {
        Ok(self.blog_posts.list().await?)
    }

    async fn increment_post_views(&self, id: Uuid) -> StoreResult<bool> {
        self.blog_posts
            .increment_views(id)
            .await
            .map_err(|e| classify(e, "views"))
    }

    async fn create_contact(&self, data: NewContact) -> StoreResult<ContactRow> {
        Ok(self.contacts.create(data).await?)
    }

    async fn create_subscription(&self, data: NewSubscription) -> StoreResult<NewsletterRow> {
        self.newsletters
            .create(data)
            .await
            .map_err(|e| classify(e, "email"))
    }

    async fn create_user(&self, data: NewUser) -> StoreResult<UserRow> {
        self.users
            .create(data)
            .await
            .map_err(|e| classify(e, "username"))
    }

    async fn get_user(&self, id: Uuid) -> StoreResult<Option<UserRow>> {
        Ok(self.users.get_by_id(id).await?)
    }

    async fn get_user_by_username(&self, username: &str) -> StoreResult<Option<UserRow>> {
        Ok(self.users.get_by_username(username).await?)
    }
}
