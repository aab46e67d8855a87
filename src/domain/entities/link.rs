//! Link entity representing a shortened URL mapping.

use chrono::{DateTime, Utc};

/// A short code to long URL mapping.
///
/// Links are written once and never updated. Whether a link is still usable
/// is derived from `expires_at` at read time, see [`Link::status_at`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub short_code: String,
    pub long_url: String,
    pub expires_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

/// Observable state of a link at a given instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkStatus {
    Active,
    Expired,
}

impl Link {
    /// Creates a new Link instance.
    pub fn new(
        short_code: String,
        long_url: String,
        expires_at: Option<DateTime<Utc>>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            short_code,
            long_url,
            expires_at,
            created_at,
        }
    }

    /// Returns true if the link has no expiry.
    pub fn is_permanent(&self) -> bool {
        self.expires_at.is_none()
    }

    /// Returns true if the link has expired at `now`.
    ///
    /// The boundary is inclusive: a link whose `expires_at` equals `now`
    /// is already expired.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|expires_at| expires_at <= now)
    }

    /// Derives the link status at `now`.
    pub fn status_at(&self, now: DateTime<Utc>) -> LinkStatus {
        if self.is_expired_at(now) {
            LinkStatus::Expired
        } else {
            LinkStatus::Active
        }
    }
}

/// Input data for inserting a new link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLink {
    pub short_code: String,
    pub long_url: String,
    pub expires_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl NewLink {
    /// Converts the insert payload into the link it describes.
    pub fn into_link(self) -> Link {
        Link::new(
            self.short_code,
            self.long_url,
            self.expires_at,
            self.created_at,
        )
    }
}
