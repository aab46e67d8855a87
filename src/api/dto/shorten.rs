//! DTOs for link shortening endpoint.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::entities::Link;

/// Request to shorten a single URL.
///
/// Both fields are loosely typed on the wire: a non-string `longUrl` is
/// treated as missing, and `expiresInDays` may be a number or a numeric
/// string. Semantic validation happens in the link service.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortenRequest {
    pub long_url: Option<Value>,

    /// Days until the link expires. `null` or absent creates a permanent link.
    pub expires_in_days: Option<ExpiresInDays>,
}

/// Expiry as sent by clients.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ExpiresInDays {
    Number(f64),
    Text(String),
    Other(Value),
}

impl ExpiresInDays {
    /// Numeric value of the expiry; unparseable text and any other JSON
    /// value become NaN and are rejected downstream.
    pub fn as_days(&self) -> f64 {
        match self {
            Self::Number(days) => *days,
            Self::Text(text) => text.trim().parse().unwrap_or(f64::NAN),
            Self::Other(_) => f64::NAN,
        }
    }
}

impl ShortenRequest {
    /// The requested URL, or `""` when absent or not a string.
    pub fn long_url(&self) -> &str {
        self.long_url.as_ref().and_then(Value::as_str).unwrap_or("")
    }

    pub fn expires_in_days(&self) -> Option<f64> {
        self.expires_in_days.as_ref().map(ExpiresInDays::as_days)
    }
}

/// Created short link.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortenResponse {
    pub short_code: String,
    pub short_url: String,
    pub long_url: String,
    pub expires_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl ShortenResponse {
    pub fn new(link: Link, short_url: String) -> Self {
        Self {
            short_code: link.short_code,
            short_url,
            long_url: link.long_url,
            expires_at: link.expires_at,
            created_at: link.created_at,
        }
    }
}
