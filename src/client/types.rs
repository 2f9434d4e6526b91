//! Wire types for the link management API

use chrono::{DateTime, Local, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};

/// Timestamp layout used by the service when it omits the zone
const NAIVE_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// The service serialises empty Go slices and missing values as `null`.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn default_page() -> u32 {
    1
}

/// A short link as returned by the service
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Link {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_url: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub original_url: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub click_count: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub created_at: String,
}

/// Parsed form of [`Link::created_at`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreatedAt {
    /// RFC 3339 with an explicit offset, shown in local time
    Zoned(DateTime<Local>),
    /// Zone-less server time, shown as-is
    Naive(NaiveDateTime),
}

impl Link {
    pub fn created_at(&self) -> Option<CreatedAt> {
        let raw = self.created_at.trim();
        if raw.is_empty() {
            return None;
        }
        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return Some(CreatedAt::Zoned(dt.with_timezone(&Local)));
        }
        NaiveDateTime::parse_from_str(raw, NAIVE_TIMESTAMP_FORMAT)
            .ok()
            .map(CreatedAt::Naive)
    }

    /// Short URL if the service sent one, otherwise the bare code
    pub fn display_short_url(&self) -> &str {
        self.short_url
            .as_deref()
            .filter(|s| !s.is_empty())
            .unwrap_or(&self.code)
    }
}

/// One page of links (browse or search)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkPage {
    #[serde(default, deserialize_with = "null_as_default")]
    pub links: Vec<Link>,
    #[serde(default)]
    pub total: u64,
    #[serde(default = "default_page")]
    pub page: u32,
    #[serde(default)]
    pub limit: u32,
    #[serde(default)]
    pub total_pages: u32,
}

impl Default for LinkPage {
    fn default() -> Self {
        Self {
            links: Vec::new(),
            total: 0,
            page: default_page(),
            limit: 0,
            total_pages: 0,
        }
    }
}

/// Aggregate counters from `GET /stats`
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Stats {
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_links: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_clicks: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub today_clicks: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub top_links: Vec<Link>,
}

/// Body of `POST /links`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateLinkRequest {
    pub url: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

/// Successful response of `POST /links`
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CreatedLink {
    #[serde(default, deserialize_with = "null_as_default")]
    pub short_url: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub code: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub original_url: String,
}

/// Error envelope used by every endpoint: `{"error": "..."}`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}
