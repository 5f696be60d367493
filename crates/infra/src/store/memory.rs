use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{Store, StoreError, StoreResult};
use crate::models::{
    BlogPostRow, ContactRow, NewBlogPost, NewContact, NewRegistration, NewSubscription,
    NewTournament, NewUser, NewsletterRow, RegistrationRow, TournamentRow, UserRow,
    CONTACT_PENDING,
};

/// Insertion-ordered arena with an id index.
struct Table<T> {
    rows: Vec<T>,
    index: HashMap<Uuid, usize>,
}

impl<T: Clone> Table<T> {
    fn new() -> Self {
        Self { rows: Vec::new(), index: HashMap::new() }
    }

    fn insert(&mut self, id: Uuid, row: T) -> T {
        self.index.insert(id, self.rows.len());
        self.rows.push(row.clone());
        row
    }

    fn get(&self, id: &Uuid) -> Option<&T> {
        self.index.get(id).map(|&slot| &self.rows[slot])
    }

    fn get_mut(&mut self, id: &Uuid) -> Option<&mut T> {
        match self.index.get(id) {
            Some(&slot) => self.rows.get_mut(slot),
            None => None,
        }
    }

    fn iter(&self) -> impl Iterator<Item = &T> {
        self.rows.iter()
    }
}

struct Tables {
    tournaments: Table<TournamentRow>,
    registrations: Table<RegistrationRow>,
    blog_posts: Table<BlogPostRow>,
    contacts: Table<ContactRow>,
    newsletters: Table<NewsletterRow>,
    users: Table<UserRow>,
}

/// In-process store. Every mutation runs under a single write guard, so the
/// seat check, the insert and the counter bump are never interleaved with
/// another request.
pub struct MemStore {
    tables: RwLock<Tables>,
}

impl MemStore {
    pub fn new() -> Self {
        Self {
            tables: RwLock::new(Tables {
                tournaments: Table::new(),
                registrations: Table::new(),
                blog_posts: Table::new(),
                contacts: Table::new(),
                newsletters: Table::new(),
                users: Table::new(),
            }),
        }
    }
}

impl Default for MemStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Store for MemStore {
    async fn ping(&self) -> StoreResult<()> {
        Ok(())
    }

    async fn create_tournament(&self, data: NewTournament) -> StoreResult<TournamentRow> {
        data.check().map_err(StoreError::Constraint)?;
        let id = Uuid::new_v4();
        let row = TournamentRow {
            id,
            name: data.name,
            description: data.description,
            prize_pool: data.prize_pool,
            max_players: data.max_players,
            current_players: data.current_players,
            format: data.format,
            status: data.status,
            start_date: data.start_date,
            end_date: data.end_date,
            eligibility_min_level: data.eligibility_min_level,
            eligibility_max_level: data.eligibility_max_level,
            created_at: Utc::now(),
        };
        Ok(self.tables.write().await.tournaments.insert(id, row))
    }

    async fn get_tournament(&self, id: Uuid) -> StoreResult<Option<TournamentRow>> {
        Ok(self.tables.read().await.tournaments.get(&id).cloned())
    }

    async fn list_tournaments(&self) -> StoreResult<Vec<TournamentRow>> {
        let mut rows: Vec<_> = self.tables.read().await.tournaments.iter().cloned().collect();
        rows.sort_by_key(|t| t.start_date);
        Ok(rows)
    }

    async fn commit_registration(&self, data: NewRegistration) -> StoreResult<RegistrationRow> {
        data.check().map_err(StoreError::Constraint)?;
        let mut tables = self.tables.write().await;

        let tournament = tables
            .tournaments
            .get_mut(&data.tournament_id)
            .ok_or(StoreError::NotFound("tournament"))?;
        if !tournament.status.accepts_registrations() {
            return Err(StoreError::RegistrationClosed);
        }
        if tournament.is_full() {
            return Err(StoreError::TournamentFull);
        }
        tournament.current_players += 1;

        let id = Uuid::new_v4();
        let row = RegistrationRow {
            id,
            tournament_id: data.tournament_id,
            player_name: data.player_name,
            email: data.email,
            age: data.age,
            free_fire_id: data.free_fire_id,
            has_parental_consent: data.has_parental_consent,
            created_at: Utc::now(),
        };
        Ok(tables.registrations.insert(id, row))
    }

    async fn list_registrations(
        &self,
        tournament_id: Option<Uuid>,
    ) -> StoreResult<Vec<RegistrationRow>> {
        let tables = self.tables.read().await;
        Ok(tables
            .registrations
            .iter()
            .filter(|r| tournament_id.map_or(true, |t| r.tournament_id == t))
            .cloned()
            .collect())
    }

    async fn create_blog_post(&self, data: NewBlogPost) -> StoreResult<BlogPostRow> {
        data.check().map_err(StoreError::Constraint)?;
        let id = Uuid::new_v4();
        let created_at = data.created_at.unwrap_or_else(Utc::now);
        let row = BlogPostRow {
            id,
            title: data.title,
            content: data.content,
            excerpt: data.excerpt,
            category: data.category,
            author: data.author,
            image_url: data.image_url,
            views: data.views,
            read_time: data.read_time,
            created_at,
            updated_at: created_at,
        };
        Ok(self.tables.write().await.blog_posts.insert(id, row))
    }

    async fn get_blog_post(&self, id: Uuid) -> StoreResult<Option<BlogPostRow>> {
        Ok(self.tables.read().await.blog_posts.get(&id).cloned())
    }

    async fn list_blog_posts(&self) -> StoreResult<Vec<BlogPostRow>> {
        let mut rows: Vec<_> = self.tables.read().await.blog_posts.iter().cloned().collect();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(rows)
    }

    async fn increment_post_views(&self, id: Uuid) -> StoreResult<bool> {
        let mut tables = self.tables.write().await;
        match tables.blog_posts.get_mut(&id) {
            Some(post) => {
                post.views = post.views.checked_add(1).ok_or(StoreError::Constraint("views"))?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn create_contact(&self, data: NewContact) -> StoreResult<ContactRow> {
        let id = Uuid::new_v4();
        let row = ContactRow {
            id,
            name: data.name,
            email: data.email,
            subject: data.subject,
            message: data.message,
            status: CONTACT_PENDING.to_string(),
            created_at: Utc::now(),
        };
        Ok(self.tables.write().await.contacts.insert(id, row))
    }

    async fn create_subscription(&self, data: NewSubscription) -> StoreResult<NewsletterRow> {
        let mut tables = self.tables.write().await;
        if tables.newsletters.iter().any(|n| n.email == data.email) {
            return Err(StoreError::Duplicate("email"));
        }

        let id = Uuid::new_v4();
        let row = NewsletterRow {
            id,
            email: data.email,
            is_active: true,
            created_at: Utc::now(),
        };
        Ok(tables.newsletters.insert(id, row))
    }

    async fn create_user(&self, data: NewUser) -> StoreResult<UserRow> {
        let mut tables = self.tables.write().await;
        if tables.users.iter().any(|u| u.username == data.username) {
            return Err(StoreError::Duplicate("username"));
        }

        let id = Uuid::new_v4();
        let row = UserRow {
            id,
            username: data.username,
            password_hash: data.password_hash,
            created_at: Utc::now(),
        };
        Ok(tables.users.insert(id, row))
    }

    async fn get_user(&self, id: Uuid) -> StoreResult<Option<UserRow>> {
        Ok(self.tables.read().await.users.get(&id).cloned())
    }

    async fn get_user_by_username(&self, username: &str) -> StoreResult<Option<UserRow>> {
        let tables = self.tables.read().await;
        let user = tables.users.iter().find(|u| u.username == username).cloned();
        Ok(user)
    }
}
