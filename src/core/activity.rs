//! Activity event model and boundary ingestion.
//!
//! An [`ActivityItem`] is the normalized record of something that happened in
//! the network: a post, a media upload, a site update, a vote, a comment, a
//! connection. Items are created once by the collaborating services and are
//! read-only to this crate; everything derived from them (heat scores,
//! importance blends, ranked feeds) is recomputed from these records.
//!
//! Ingestion is the one place malformed collaborator data is dealt with:
//! [`items_from_json`] rejects records that do not fit the closed model, and
//! [`ActivityItem::normalized`] canonicalizes the rest. Scoring code never
//! sees raw input.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::errors::Result;

/// Closed set of activity kinds the feed understands.
///
/// The near-duplicate pairs (`media_added`/`new_media`,
/// `site_updated`/`site_update`) are deliberate: the activity store carries
/// two generations of type tags and rows with either spelling are live.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityType {
    SiteAdded,
    SiteVerified,
    SiteUpdated,
    MediaAdded,
    PostCreated,
    CommentAdded,
    UserJoined,
    BadgeEarned,
    ConnectionProposed,
    NewMedia,
    ExpertPost,
    SiteUpdate,
    ResearchUpdate,
    EventAnnouncement,
    ConnectionFound,
}

impl ActivityType {
    /// Every variant, in declaration order.
    pub const ALL: [ActivityType; 15] = [
        ActivityType::SiteAdded,
        ActivityType::SiteVerified,
        ActivityType::SiteUpdated,
        ActivityType::MediaAdded,
        ActivityType::PostCreated,
        ActivityType::CommentAdded,
        ActivityType::UserJoined,
        ActivityType::BadgeEarned,
        ActivityType::ConnectionProposed,
        ActivityType::NewMedia,
        ActivityType::ExpertPost,
        ActivityType::SiteUpdate,
        ActivityType::ResearchUpdate,
        ActivityType::EventAnnouncement,
        ActivityType::ConnectionFound,
    ];

    /// Wire tag used by the activity store.
    pub fn tag(&self) -> &'static str {
        match self {
            ActivityType::SiteAdded => "site_added",
            ActivityType::SiteVerified => "site_verified",
            ActivityType::SiteUpdated => "site_updated",
            ActivityType::MediaAdded => "media_added",
            ActivityType::PostCreated => "post_created",
            ActivityType::CommentAdded => "comment_added",
            ActivityType::UserJoined => "user_joined",
            ActivityType::BadgeEarned => "badge_earned",
            ActivityType::ConnectionProposed => "connection_proposed",
            ActivityType::NewMedia => "new_media",
            ActivityType::ExpertPost => "expert_post",
            ActivityType::SiteUpdate => "site_update",
            ActivityType::ResearchUpdate => "research_update",
            ActivityType::EventAnnouncement => "event_announcement",
            ActivityType::ConnectionFound => "connection_found",
        }
    }

    /// Parse a wire tag; unknown values yield `None`.
    ///
    /// Client-supplied filter values go through here, so an unrecognized
    /// tag must never be an error (it is dropped by the filter boundary
    /// instead).
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "site_added" => Some(ActivityType::SiteAdded),
            "site_verified" => Some(ActivityType::SiteVerified),
            "site_updated" => Some(ActivityType::SiteUpdated),
            "media_added" => Some(ActivityType::MediaAdded),
            "post_created" => Some(ActivityType::PostCreated),
            "comment_added" => Some(ActivityType::CommentAdded),
            "user_joined" => Some(ActivityType::UserJoined),
            "badge_earned" => Some(ActivityType::BadgeEarned),
            "connection_proposed" => Some(ActivityType::ConnectionProposed),
            "new_media" => Some(ActivityType::NewMedia),
            "expert_post" => Some(ActivityType::ExpertPost),
            "site_update" => Some(ActivityType::SiteUpdate),
            "research_update" => Some(ActivityType::ResearchUpdate),
            "event_announcement" => Some(ActivityType::EventAnnouncement),
            "connection_found" => Some(ActivityType::ConnectionFound),
            _ => None,
        }
    }
}

/// Kind of entity an activity refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetType {
    Site,
    Post,
    Comment,
    Media,
    User,
    Connection,
}

/// The entity an activity refers to.
///
/// Modeled as one optional struct rather than a loose type/id field pair so
/// a target type without an id is unrepresentable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Target {
    #[serde(rename = "type")]
    pub kind: TargetType,
    pub id: String,
}

/// An immutable record of something that happened.
///
/// `created_at` never changes after creation, and `engagement_score` only
/// ever grows as reactions arrive (negative engagement is unrepresentable).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityItem {
    /// Unique identifier.
    pub id: String,

    /// What happened.
    pub activity_type: ActivityType,

    /// The user who generated the event.
    pub actor_id: String,

    /// The entity the event refers to, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<Target>,

    /// Optional link to a site, for site-scoped filtering.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub site_id: Option<String>,

    /// Lowercase hashtag-style labels. Insertion order is irrelevant;
    /// the set form keeps iteration deterministic.
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub tags: BTreeSet<String>,

    /// Accumulated raw engagement (likes + comments + shares, weighted).
    #[serde(default)]
    pub engagement_score: u32,

    /// When the event happened. Immutable once created.
    pub created_at: DateTime<Utc>,
}

impl ActivityItem {
    /// Canonicalize a record at the ingestion boundary.
    ///
    /// Tags are lowercased and trimmed (hashtag matching is
    /// case-insensitive), empty tags are dropped, and an empty `site_id`
    /// string collapses to `None` so site filters treat it as absent.
    pub fn normalized(mut self) -> Self {
        self.tags = self
            .tags
            .into_iter()
            .map(|tag| tag.trim().to_lowercase())
            .filter(|tag| !tag.is_empty())
            .collect();
        self.site_id = self.site_id.filter(|site| !site.trim().is_empty());
        self
    }

    /// Age of the item in fractional hours at `now`.
    ///
    /// Future-dated items (clock skew at the collaborator) clamp to zero so
    /// decay arithmetic never amplifies engagement.
    pub fn age_hours(&self, now: DateTime<Utc>) -> f64 {
        let elapsed_ms = (now - self.created_at).num_milliseconds().max(0);
        elapsed_ms as f64 / 3_600_000.0
    }
}

/// Parse and normalize a batch of activity records from collaborator JSON.
///
/// Validation happens once, here: malformed JSON, unknown activity types,
/// negative engagement, and unparseable timestamps are all rejected before
/// any scoring code runs. Accepted records come back normalized.
pub fn items_from_json(raw: &str) -> Result<Vec<ActivityItem>> {
    let items: Vec<ActivityItem> = serde_json::from_str(raw)?;
    Ok(items.into_iter().map(ActivityItem::normalized).collect())
}
