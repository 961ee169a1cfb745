use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::board::BoardId;

/// Unique post identifier (opaque string)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostId(String);

impl PostId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PostId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique creator identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CreatorId(String);

impl CreatorId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Opaque reference to an image asset.
///
/// Resolution to a displayable bitmap is an external collaborator's concern;
/// the core never interprets the contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageRef(String);

impl ImageRef {
    pub fn new(reference: impl Into<String>) -> Self {
        Self(reference.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Engagement rate as a two-decimal percentage, stored as text.
///
/// The feed delivers the value pre-formatted (e.g. "4.25"); comparisons
/// parse it back to a number. An unparseable value compares as 0.0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EngagementRate(String);

impl EngagementRate {
    pub fn new(rate: impl Into<String>) -> Self {
        Self(rate.into())
    }

    /// Format a numeric percentage to the stored two-decimal form.
    pub fn from_value(value: f64) -> Self {
        Self(format!("{:.2}", value))
    }

    /// Parsed numeric value, 0.0 when the stored text is not a number.
    pub fn value(&self) -> f64 {
        self.0.parse().unwrap_or(0.0)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A creator profile referenced by posts. Many posts may share one creator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Creator {
    pub id: CreatorId,
    pub name: String,
    pub handle: String,
    pub avatar: ImageRef,
}

/// A single leaderboard entry.
///
/// `rank` is derived: it is always the 1-based position within the current
/// sorted sequence and must be recomputed after every re-sort. It is never
/// persisted independently of order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    pub rank: u32,
    pub creator: Creator,
    pub thumbnail: ImageRef,
    pub views: u64,
    pub likes: u64,
    pub comments: u64,
    pub shares: u64,
    pub viral_score: u32,
    pub outlier_score: u32,
    pub engagement_rate: EngagementRate,
    pub caption: String,
    pub created_at: DateTime<Utc>,
    /// Present only when the post is viewed through a board filter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub board_id: Option<BoardId>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engagement_rate_parses_stored_text() {
        let rate = EngagementRate::new("4.25");
        assert_eq!(rate.value(), 4.25);
    }

    #[test]
    fn test_engagement_rate_from_value_rounds_to_two_decimals() {
        let rate = EngagementRate::from_value(7.12345);
        assert_eq!(rate.as_str(), "7.12");
    }

    #[test]
    fn test_engagement_rate_garbage_compares_as_zero() {
        let rate = EngagementRate::new("n/a");
        assert_eq!(rate.value(), 0.0);
    }

    #[test]
    fn test_post_id_serializes_transparent() {
        let id = PostId::new("post-1");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"post-1\"");
    }
}
