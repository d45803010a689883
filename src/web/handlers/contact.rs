//! Booking inquiry relay handler.

use axum::{extract::State, Json};
use std::sync::Arc;
use utoipa;

use crate::config::SiteConfig;
use crate::mail::Mailer;
use crate::web::dto::{InquiryRequest, SendAck, ValidatedJson};
use crate::web::error::{ApiError, ErrorBody};

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Outbound mailer for inquiry relay.
    pub mailer: Arc<dyn Mailer>,
    /// Public site information.
    pub site: SiteConfig,
}

impl AppState {
    /// Create a new application state.
    pub fn new(mailer: Arc<dyn Mailer>, site: SiteConfig) -> Self {
        Self { mailer, site }
    }
}

/// POST /api/contact - Relay a booking inquiry to the property manager.
///
/// Both the quick-enquiry and the full reservation form post here. The
/// inquiry is composed into one HTML email and sent synchronously; there is
/// no retry and no queue, so a failed send is surfaced to the caller and a
/// client resubmission is a brand-new attempt.
#[utoipa::path(
    post,
    path = "/api/contact",
    tag = "contact",
    request_body = InquiryRequest,
    responses(
        (status = 200, description = "Inquiry accepted by the mail transport", body = SendAck),
        (status = 422, description = "Invalid inquiry payload", body = ErrorBody),
        (status = 500, description = "Mail transport failure", body = ErrorBody)
    )
)]
pub async fn send_inquiry(
    State(state): State<Arc<AppState>>,
    ValidatedJson(req): ValidatedJson<InquiryRequest>,
) -> Result<Json<SendAck>, ApiError> {
    let inquiry = req.into_inquiry();
    let email = inquiry.to_email();

    if let Err(e) = state.mailer.send(&email).await {
        tracing::error!(error = %e, from = %inquiry.email, "Failed to relay booking inquiry");
        return Err(e.into());
    }

    tracing::info!(from = %inquiry.email, subject = %email.subject, "Booking inquiry relayed");
    Ok(Json(SendAck::email_sent()))
}
