//! Sample catalogue loaded into a fresh store so the site has something to show.

use chrono::{DateTime, TimeZone, Utc};
use tracing::info;

use crate::models::{NewBlogPost, NewTournament, TournamentStatus, DEFAULT_MIN_LEVEL};
use crate::store::{Store, StoreResult};

fn at(year: i32, month: u32, day: u32, hour: u32) -> Option<DateTime<Utc>> {
    Utc.with_ymd_and_hms(year, month, day, hour, 0, 0).single()
}

fn tournaments() -> Vec<NewTournament> {
    let catalogue = [
        (
            "Weekly Clash #12",
            "Fast-paced 1-hour tournament with instant rewards",
            2500, 64, 32, "Battle Royale", TournamentStatus::Live,
            (2024, 11, 25, 18), (2024, 11, 25, 19), None,
        ),
        (
            "Rookie Championship",
            "Special tournament for new players (Level 15-30)",
            1000, 32, 12, "Squad Battle", TournamentStatus::Upcoming,
            (2024, 12, 1, 18), (2024, 12, 1, 20), Some(30),
        ),
        (
            "FireStorm Championship 2024",
            "The biggest Free Fire tournament of the year! 128 players, 4 weeks of intense battles.",
            10000, 128, 45, "Mixed Mode", TournamentStatus::Upcoming,
            (2024, 12, 1, 18), (2024, 12, 22, 20), None,
        ),
        (
            "Holiday Showdown",
            "Special holiday event with exclusive rewards",
            5000, 128, 0, "Mixed Mode", TournamentStatus::Upcoming,
            (2024, 12, 15, 18), (2024, 12, 15, 22), None,
        ),
    ];

    catalogue
        .into_iter()
        .filter_map(|(name, description, prize_pool, max_players, current_players, format, status, start, end, max_level)| {
            Some(NewTournament {
                name: name.to_string(),
                description: description.to_string(),
                prize_pool,
                max_players,
                current_players,
                format: format.to_string(),
                status,
                start_date: at(start.0, start.1, start.2, start.3)?,
                end_date: at(end.0, end.1, end.2, end.3),
                eligibility_min_level: DEFAULT_MIN_LEVEL,
                eligibility_max_level: max_level,
            })
        })
        .collect()
}

fn blog_posts() -> Vec<NewBlogPost> {
    let catalogue = [
        (
            "Top 10 Pro Strategies to Dominate Free Fire Tournaments",
            "Learn the advanced tactics that pro players use to consistently win tournaments...",
            "Learn the advanced tactics that pro players use to consistently win tournaments. From positioning strategies to weapon combinations.",
            "STRATEGY", "GameMaster_Pro",
            Some("https://images.unsplash.com/photo-1560253023-3ec5d502959f"),
            2548, "8 min read", (2024, 11, 20),
        ),
        (
            "New Tournament Format Coming December",
            "We're introducing an exciting new tournament format that will change how you compete...",
            "We're introducing an exciting new tournament format that will change how you compete in Free Fire.",
            "NEWS", "FireStorm Team", None, 1234, "3 min read", (2024, 11, 18),
        ),
        (
            "Best Character Combinations for Squad Play",
            "Discover the most effective character synergies for dominating squad matches...",
            "Discover the most effective character synergies for dominating squad matches in Free Fire tournaments.",
            "TIPS", "Squad_Master", None, 1876, "5 min read", (2024, 11, 15),
        ),
        (
            "5-Minute Guide: Landing Zone Tactics",
            "Quick tips for choosing the perfect landing spot to maximize your survival chances...",
            "Quick tips for choosing the perfect landing spot to maximize your survival chances.",
            "GUIDE", "TacticalGamer", None, 2501, "5 min read", (2024, 11, 14),
        ),
    ];

    catalogue
        .into_iter()
        .map(|(title, content, excerpt, category, author, image_url, views, read_time, day)| NewBlogPost {
            title: title.to_string(),
            content: content.to_string(),
            excerpt: excerpt.to_string(),
            category: category.to_string(),
            author: author.to_string(),
            image_url: image_url.map(str::to_string),
            views,
            read_time: read_time.to_string(),
            created_at: at(day.0, day.1, day.2, 0),
        })
        .collect()
}

pub async fn seed(store: &dyn Store) -> StoreResult<()> {
    let tournaments = tournaments();
    let posts = blog_posts();
    let counts = (tournaments.len(), posts.len());

    for t in tournaments {
        store.create_tournament(t).await?;
    }
    for p in posts {
        store.create_blog_post(p).await?;
    }

    info!(tournaments = counts.0, blog_posts = counts.1, "Seeded sample data");
    Ok(())
}
