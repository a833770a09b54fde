use crate::domain::model::OtpRecord;
use crate::domain::ports::Directory;
use crate::utils::error::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;

/// In-process `Directory` keyed by email. Used in tests and local
/// development; production deployments sit on the hosted directory service.
#[derive(Clone, Default)]
pub struct InMemoryDirectory {
    records: Arc<Mutex<HashMap<String, OtpRecord>>>,
}

impl InMemoryDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current record for `email`, if any. Handy for assertions.
    pub async fn get(&self, email: &str) -> Option<OtpRecord> {
        let records = self.records.lock().await;
        records.get(email).cloned()
    }

    /// Place a record directly, bypassing issuance. Lets tests construct
    /// already-expired or pre-verified states.
    pub async fn seed(&self, record: OtpRecord) {
        let mut records = self.records.lock().await;
        records.insert(record.email.clone(), record);
    }
}

#[async_trait]
impl Directory for InMemoryDirectory {
    async fn find_by_email(&self, email: &str) -> Result<Option<OtpRecord>> {
        let records = self.records.lock().await;
        Ok(records.get(email).cloned())
    }

    async fn upsert_otp(&self, email: &str, code: &str, expires_at: DateTime<Utc>) -> Result<()> {
        let mut records = self.records.lock().await;
        records.insert(
            email.to_string(),
            OtpRecord {
                email: email.to_string(),
                code: code.to_string(),
                expires_at,
                verified: false,
            },
        );
        Ok(())
    }

    async fn mark_verified(&self, email: &str) -> Result<()> {
        let mut records = self.records.lock().await;
        if let Some(record) = records.get_mut(email) {
            record.verified = true;
        }
        Ok(())
    }
}
