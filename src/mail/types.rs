//! Mail types for WIMSTAY.

use thiserror::Error;

/// Error type for outbound mail.
#[derive(Debug, Error)]
pub enum MailError {
    /// An address could not be parsed.
    #[error("invalid email address: {0}")]
    Address(String),

    /// The message could not be assembled.
    #[error("failed to build message: {0}")]
    Build(String),

    /// The SMTP transport rejected or failed the send.
    #[error("SMTP transport error: {0}")]
    Transport(String),
}

/// A composed email ready to hand to a [`crate::mail::Mailer`].
///
/// The sender and recipient are fixed by configuration, so the message
/// carries only the parts that vary per inquiry.
#[derive(Debug, Clone)]
pub struct OutboundEmail {
    /// Subject line.
    pub subject: String,
    /// HTML body.
    pub html_body: String,
    /// Optional reply-to address (the inquirer).
    pub reply_to: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mail_error_display() {
        let err = MailError::Address("not-an-address".to_string());
        assert_eq!(err.to_string(), "invalid email address: not-an-address");

        let err = MailError::Transport("connection timed out".to_string());
        assert_eq!(err.to_string(), "SMTP transport error: connection timed out");

        let err = MailError::Build("missing subject".to_string());
        assert_eq!(err.to_string(), "failed to build message: missing subject");
    }
}
