//! Response DTOs for the Web API.

use serde::Serialize;
use utoipa::ToSchema;

/// Acknowledgement returned after a successful inquiry relay.
#[derive(Debug, Serialize, ToSchema)]
pub struct SendAck {
    /// Confirmation message.
    pub message: String,
}

impl SendAck {
    /// The fixed acknowledgement the front-end expects.
    pub fn email_sent() -> Self {
        Self {
            message: "Email sent successfully".to_string(),
        }
    }
}

/// Public site information (footer content).
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SiteInfoResponse {
    /// Site name.
    pub name: String,
    /// Property manager name.
    pub manager_name: String,
    /// Property manager URL.
    pub manager_url: String,
}
