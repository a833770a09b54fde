pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::{InMemoryDirectory, WebhookNotifier};
pub use config::{AppConfig, NotifierConfig, OtpConfig};
pub use crate::core::{matcher, OtpService};
pub use domain::model::{AuthenticatedClient, ClientRequest, FreelancerProfile, OtpRecord};
pub use domain::ports::{Directory, Notifier};
pub use utils::error::{MarketError, Result};
