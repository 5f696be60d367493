pub mod blog;
pub mod contact;
pub mod newsletter;
pub mod registrations;
pub mod tournaments;

use serde::Serialize;
use uuid::Uuid;

/// Body of the 201 answer for form submissions that only echo an id.
#[derive(Debug, Serialize)]
pub struct Created {
    pub message: &'static str,
    pub id: Uuid,
}

/// Ids the store never issued, including ones that are not UUIDs, read as absent.
pub(crate) fn parse_id(raw: &str) -> Option<Uuid> {
    Uuid::parse_str(raw).ok()
}
