use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use thiserror::Error;
use uuid::Uuid;

/// Lifecycle of a tournament. Only ever moves forward: upcoming -> live -> completed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TournamentStatus {
    #[default]
    Upcoming,
    Live,
    Completed,
}

impl TournamentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TournamentStatus::Upcoming => "upcoming",
            TournamentStatus::Live => "live",
            TournamentStatus::Completed => "completed",
        }
    }

    /// Registrations are accepted while a tournament is upcoming or live.
    pub fn accepts_registrations(&self) -> bool {
        matches!(self, TournamentStatus::Upcoming | TournamentStatus::Live)
    }
}

impl fmt::Display for TournamentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
#[error("unknown tournament status: {0}")]
pub struct UnknownStatus(pub String);

impl FromStr for TournamentStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "upcoming" => Ok(TournamentStatus::Upcoming),
            "live" => Ok(TournamentStatus::Live),
            "completed" => Ok(TournamentStatus::Completed),
            other => Err(UnknownStatus(other.to_string())),
        }
    }
}

impl TryFrom<String> for TournamentStatus {
    type Error = UnknownStatus;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TournamentRow {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub prize_pool: i32,
    pub max_players: i32,
    pub current_players: i32,
    pub format: String,
    #[sqlx(try_from = "String")]
    pub status: TournamentStatus,
    pub start_date: DateTime<Utc>,
    pub end_date: Option<DateTime<Utc>>,
    pub eligibility_min_level: i32,
    pub eligibility_max_level: Option<i32>,
    pub created_at: DateTime<Utc>,
}

impl TournamentRow {
    pub fn is_full(&self) -> bool {
        self.current_players >= self.max_players
    }
}

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationRow {
    pub id: Uuid,
    pub tournament_id: Uuid,
    pub player_name: String,
    pub email: String,
    pub age: i32,
    pub free_fire_id: String,
    pub has_parental_consent: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPostRow {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub excerpt: String,
    pub category: String,
    pub author: String,
    pub image_url: Option<String>,
    pub views: i32,
    pub read_time: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactRow {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsletterRow {
    pub id: Uuid,
    pub email: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

/// Never serialized back to clients with the hash included.
#[derive(Debug, Clone, FromRow)]
pub struct UserRow {
    pub id: Uuid,
    pub username: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewTournament {
    pub name: String,
    pub description: String,
    pub prize_pool: i32,
    pub max_players: i32,
    pub current_players: i32,
    pub format: String,
    pub status: TournamentStatus,
    pub start_date: DateTime<Utc>,
    pub end_date: Option<DateTime<Utc>>,
    pub eligibility_min_level: i32,
    pub eligibility_max_level: Option<i32>,
}

pub const DEFAULT_MIN_LEVEL: i32 = 15;

pub const MIN_PLAYER_AGE: i32 = 10;
pub const MAX_PLAYER_AGE: i32 = 18;

impl NewTournament {
    /// Same rules as the `tournaments` table CHECK constraints. Returns the
    /// name of the first one broken.
    pub fn check(&self) -> Result<(), &'static str> {
        if self.prize_pool < 0 {
            return Err("prize_pool");
        }
        if self.max_players <= 0 {
            return Err("max_players");
        }
        if self.current_players < 0 {
            return Err("current_players");
        }
        if self.current_players > self.max_players {
            return Err("tournaments_capacity");
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct NewRegistration {
    pub tournament_id: Uuid,
    pub player_name: String,
    pub email: String,
    pub age: i32,
    pub free_fire_id: String,
    pub has_parental_consent: bool,
}

impl NewRegistration {
    pub fn check(&self) -> Result<(), &'static str> {
        if !(MIN_PLAYER_AGE..=MAX_PLAYER_AGE).contains(&self.age) {
            return Err("age");
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct NewBlogPost {
    pub title: String,
    pub content: String,
    pub excerpt: String,
    pub category: String,
    pub author: String,
    pub image_url: Option<String>,
    pub read_time: String,
    pub views: i32,
    pub created_at: Option<DateTime<Utc>>,
}

impl NewBlogPost {
    pub fn check(&self) -> Result<(), &'static str> {
        if self.views < 0 {
            return Err("views");
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct NewContact {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

pub const CONTACT_PENDING: &str = "pending";

#[derive(Debug, Clone)]
pub struct NewSubscription {
    pub email: String,
}

#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub password_hash: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_round_trips_through_text() {
        for status in [
            TournamentStatus::Upcoming,
            TournamentStatus::Live,
            TournamentStatus::Completed,
        ] {
            assert_eq!(status.as_str().parse::<TournamentStatus>().unwrap(), status);
        }
        assert!("cancelled".parse::<TournamentStatus>().is_err());
    }

    #[test]
    fn only_open_statuses_accept_registrations() {
        assert!(TournamentStatus::Upcoming.accepts_registrations());
        assert!(TournamentStatus::Live.accepts_registrations());
        assert!(!TournamentStatus::Completed.accepts_registrations());
    }

    fn tournament(prize_pool: i32, max_players: i32, current_players: i32) -> NewTournament {
        NewTournament {
            name: "Friday Clash".into(),
            description: String::new(),
            prize_pool,
            max_players,
            current_players,
            format: "Solo".into(),
            status: TournamentStatus::Upcoming,
            start_date: Utc::now(),
            end_date: None,
            eligibility_min_level: DEFAULT_MIN_LEVEL,
            eligibility_max_level: None,
        }
    }

    #[test]
    fn tournament_check_names_broken_rule() {
        assert_eq!(tournament(0, 1, 1).check(), Ok(()));
        assert_eq!(tournament(-100, 10, 0).check(), Err("prize_pool"));
        assert_eq!(tournament(100, 0, 0).check(), Err("max_players"));
        assert_eq!(tournament(100, 10, -1).check(), Err("current_players"));
        assert_eq!(tournament(100, 10, 11).check(), Err("tournaments_capacity"));
    }

    #[test]
    fn registration_age_bounds_are_inclusive() {
        let at = |age| NewRegistration {
            tournament_id: Uuid::new_v4(),
            player_name: "Kai".into(),
            email: "kai@example.com".into(),
            age,
            free_fire_id: "FF-1".into(),
            has_parental_consent: true,
        };
        assert_eq!(at(10).check(), Ok(()));
        assert_eq!(at(18).check(), Ok(()));
        assert_eq!(at(9).check(), Err("age"));
        assert_eq!(at(40).check(), Err("age"));
    }
}
