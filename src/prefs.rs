//! Per-user personalization state.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// What a user follows.
///
/// Sets rather than lists: following is idempotent and order-free, and the
/// sorted form keeps serialized output stable.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UserPreferences {
    pub followed_sites: BTreeSet<String>,
    pub followed_users: BTreeSet<String>,
}

impl UserPreferences {
    pub fn follows_site(&self, site_id: &str) -> bool {
        self.followed_sites.contains(site_id)
    }

    pub fn follows_user(&self, user_id: &str) -> bool {
        self.followed_users.contains(user_id)
    }

    /// True when the user follows nothing at all.
    pub fn is_empty(&self) -> bool {
        self.followed_sites.is_empty() && self.followed_users.is_empty()
    }

    /// Fill empty fields from a fallback, field by field.
    ///
    /// A user's own non-empty follow list always wins outright; fallback
    /// entries are never merged into it. The fallback only stands in where
    /// the user has expressed nothing.
    pub fn or_fallback(mut self, fallback: &UserPreferences) -> Self {
        if self.followed_sites.is_empty() {
            self.followed_sites = fallback.followed_sites.clone();
        }
        if self.followed_users.is_empty() {
            self.followed_users = fallback.followed_users.clone();
        }
        self
    }
}
