use crate::domain::model::OtpRecord;
use crate::utils::error::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Persistent client directory, keyed uniquely by email.
#[async_trait]
pub trait Directory: Send + Sync {
    async fn find_by_email(&self, email: &str) -> Result<Option<OtpRecord>>;

    /// Insert or overwrite the record for `email`, resetting `verified`.
    async fn upsert_otp(&self, email: &str, code: &str, expires_at: DateTime<Utc>) -> Result<()>;

    async fn mark_verified(&self, email: &str) -> Result<()>;
}

/// Out-of-band channel that delivers a code to its owner.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn send(&self, email: &str, code: &str) -> Result<()>;
}
