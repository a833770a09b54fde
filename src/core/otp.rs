use crate::domain::model::AuthenticatedClient;
use crate::domain::ports::{Directory, Notifier};
use crate::utils::error::{MarketError, Result};
use crate::utils::validation::validate_non_empty_string;
use chrono::{Duration, Utc};
use rand::Rng;

/// Default validity window for an issued code.
pub const DEFAULT_TTL_MINUTES: i64 = 5;

/// Issues and verifies one-time codes against an injected directory store.
/// Stateless in process memory; every call round-trips through the store.
pub struct OtpService<D: Directory, N: Notifier> {
    directory: D,
    notifier: N,
    ttl: Duration,
}

impl<D: Directory, N: Notifier> OtpService<D, N> {
    pub fn new(directory: D, notifier: N) -> Self {
        Self::with_ttl(directory, notifier, Duration::minutes(DEFAULT_TTL_MINUTES))
    }

    pub fn with_ttl(directory: D, notifier: N, ttl: Duration) -> Self {
        Self {
            directory,
            notifier,
            ttl,
        }
    }

    /// Issue a fresh code for `email` and dispatch it out of band.
    ///
    /// Any prior record for the email is overwritten, so an earlier unverified
    /// code stops working immediately even if it had not expired. The record
    /// is persisted before dispatch: on `DispatchError` the caller may retry
    /// delivery without generating a new code.
    pub async fn issue(&self, email: &str) -> Result<String> {
        validate_non_empty_string("email", email)?;

        let code = generate_code();
        let expires_at = Utc::now() + self.ttl;

        self.directory.upsert_otp(email, &code, expires_at).await?;
        tracing::debug!(%email, %expires_at, "stored one-time code");

        self.notifier.send(email, &code).await?;
        tracing::info!(%email, "dispatched one-time code");

        Ok(code)
    }

    /// Check `submitted` against the stored record for `email`.
    ///
    /// Expiry is checked before the code comparison, so an expired record
    /// fails with `OtpExpired` even when the code would have matched. A
    /// still-valid matching code verifies successfully on repeat calls;
    /// single consumption is not enforced.
    pub async fn verify(&self, email: &str, submitted: &str) -> Result<AuthenticatedClient> {
        let record = self
            .directory
            .find_by_email(email)
            .await?
            .ok_or_else(|| MarketError::OtpNotFound {
                email: email.to_string(),
            })?;

        let now = Utc::now();
        if record.is_expired(now) {
            tracing::debug!(%email, expired_at = %record.expires_at, "rejected expired code");
            return Err(MarketError::OtpExpired {
                email: email.to_string(),
            });
        }

        if submitted != record.code {
            tracing::debug!(%email, "rejected mismatched code");
            return Err(MarketError::OtpMismatch {
                email: email.to_string(),
            });
        }

        self.directory.mark_verified(email).await?;
        tracing::info!(%email, "client verified");

        Ok(AuthenticatedClient {
            email: record.email,
            verified_at: now,
        })
    }
}

/// Uniform six-digit code, sampled over the integer range [100000, 999999].
fn generate_code() -> String {
    let n: u32 = rand::rng().random_range(100_000..=999_999);
    n.to_string()
}
