//! Analysis result entities as the workspace sees them.
//!
//! The remote service is trusted but not uniform: `POST /analyze` answers
//! with nested heading counts and no `url`/`id`, while `GET /results` rows
//! are flat and carry a `created_at` stamp. Everything is decoded through
//! [`WireResult`] so both shapes land in the same [`AnalysisResult`].

use serde::Deserialize;
use serde_json::Value;
use std::fmt;

/// Identifier assigned by the remote service once a result is persisted.
pub type ResultId = i64;

// ====== Enums ======

/// HTTP status of a broken link, or a text tag such as `"error"` when the
/// link could not be reached at all.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum LinkStatus {
    Code(i64),
    Text(String),
}

impl fmt::Display for LinkStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LinkStatus::Code(code) => write!(f, "{}", code),
            LinkStatus::Text(text) => f.write_str(text),
        }
    }
}

// ====== Entities ======

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BrokenLink {
    pub url: String,
    pub status: LinkStatus,
}

/// Structural report of one analyzed webpage.
///
/// Counts are signed so a misbehaving service can never make decoding or
/// rendering panic; the workspace does not enforce non-negativity.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(from = "WireResult")]
pub struct AnalysisResult {
    pub id: Option<ResultId>,
    pub url: String,
    pub title: String,
    pub html_version: String,
    pub h1: i64,
    pub h2: i64,
    pub h3: i64,
    pub h4: i64,
    pub h5: i64,
    pub h6: i64,
    pub internal_links: i64,
    pub external_links: i64,
    pub has_login_form: bool,
    pub broken_links: Vec<BrokenLink>,
    pub created_at: Option<String>,
}

impl AnalysisResult {
    /// Heading counts labelled `H1`..`H6`, in level order.
    pub fn heading_counts(&self) -> [(&'static str, i64); 6] {
        [
            ("H1", self.h1),
            ("H2", self.h2),
            ("H3", self.h3),
            ("H4", self.h4),
            ("H5", self.h5),
            ("H6", self.h6),
        ]
    }

    /// One-line label used by the result list rows.
    pub fn row_label(&self) -> String {
        format!(
            "{} – {} ({} internal links)",
            self.url, self.title, self.internal_links
        )
    }

    /// Fills in the submitted URL when the service did not echo it back.
    pub fn with_url_fallback(mut self, submitted: &str) -> Self {
        if self.url.is_empty() {
            self.url = submitted.to_string();
        }
        self
    }
}

// ====== Wire format ======

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct WireHeadings {
    h1: Option<i64>,
    h2: Option<i64>,
    h3: Option<i64>,
    h4: Option<i64>,
    h5: Option<i64>,
    h6: Option<i64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct WireResult {
    id: Option<ResultId>,
    url: Option<String>,
    title: Option<String>,
    html_version: Option<String>,
    h1: Option<i64>,
    h2: Option<i64>,
    h3: Option<i64>,
    h4: Option<i64>,
    h5: Option<i64>,
    h6: Option<i64>,
    headings: Option<WireHeadings>,
    internal_links: Option<i64>,
    external_links: Option<i64>,
    has_login_form: Option<bool>,
    broken_links: Option<Value>,
    created_at: Option<String>,
}

impl From<WireResult> for AnalysisResult {
    fn from(wire: WireResult) -> Self {
        let nested = wire.headings.unwrap_or_default();
        Self {
            id: wire.id,
            url: wire.url.unwrap_or_default(),
            title: wire.title.unwrap_or_default(),
            html_version: wire.html_version.unwrap_or_default(),
            h1: wire.h1.or(nested.h1).unwrap_or(0),
            h2: wire.h2.or(nested.h2).unwrap_or(0),
            h3: wire.h3.or(nested.h3).unwrap_or(0),
            h4: wire.h4.or(nested.h4).unwrap_or(0),
            h5: wire.h5.or(nested.h5).unwrap_or(0),
            h6: wire.h6.or(nested.h6).unwrap_or(0),
            internal_links: wire.internal_links.unwrap_or(0),
            external_links: wire.external_links.unwrap_or(0),
            has_login_form: wire.has_login_form.unwrap_or(false),
            broken_links: coerce_broken_links(wire.broken_links),
            created_at: wire.created_at,
        }
    }
}

/// Anything other than an array is treated as "no broken links"; array
/// entries that are not `{url, status}` objects are dropped one by one.
pub fn coerce_broken_links(value: Option<Value>) -> Vec<BrokenLink> {
    match value {
        Some(Value::Array(items)) => items
            .into_iter()
            .filter_map(|item| serde_json::from_value(item).ok())
            .collect(),
        _ => Vec::new(),
    }
}
