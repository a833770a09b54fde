pub mod matcher;
pub mod otp;

pub use crate::domain::model::{AuthenticatedClient, ClientRequest, FreelancerProfile, OtpRecord};
pub use crate::domain::ports::{Directory, Notifier};
pub use crate::utils::error::Result;
pub use otp::OtpService;
