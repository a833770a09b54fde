use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Parse-or-empty decoder for the loosely typed tag fields (`services`,
/// `domains`). Form submissions sometimes deliver the list already parsed and
/// sometimes as a JSON array serialized inside a string; anything unreadable
/// becomes an empty set rather than an error, because matching is best-effort.
pub fn normalize_tags(raw: Option<&serde_json::Value>) -> HashSet<String> {
    let items: Vec<serde_json::Value> = match raw {
        Some(serde_json::Value::Array(items)) => items.clone(),
        Some(serde_json::Value::String(s)) => serde_json::from_str(s).unwrap_or_default(),
        _ => Vec::new(),
    };

    items
        .iter()
        .filter_map(|v| v.as_str())
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Incoming hiring request. `services` may arrive as a JSON array or as a
/// JSON array serialized inside a string, depending on the submitting form.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClientRequest {
    #[serde(default)]
    pub services: Option<serde_json::Value>,
}

impl ClientRequest {
    pub fn service_set(&self) -> HashSet<String> {
        normalize_tags(self.services.as_ref())
    }
}

/// Freelancer profile as supplied by the directory listing. Read-only to the
/// matcher; `domains` has the same loose shape as `ClientRequest::services`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FreelancerProfile {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub domains: Option<serde_json::Value>,
}

impl FreelancerProfile {
    pub fn domain_set(&self) -> HashSet<String> {
        normalize_tags(self.domains.as_ref())
    }
}

/// One-time code state for an email. At most one record per email; a new
/// issuance overwrites any prior record outright.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OtpRecord {
    pub email: String,
    pub code: String,
    pub expires_at: DateTime<Utc>,
    pub verified: bool,
}

impl OtpRecord {
    /// A record is usable only before its expiry; `now == expires_at` counts
    /// as expired.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}

/// Identity handed back after a successful verification, for the caller to
/// establish a session with.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthenticatedClient {
    pub email: String,
    pub verified_at: DateTime<Utc>,
}
