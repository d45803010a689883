//! Mail module for WIMSTAY.
//!
//! This module provides outbound mail delivery for booking inquiries:
//! - The [`Mailer`] trait, the seam between the web layer and the transport
//! - [`SmtpMailer`], the lettre-backed SMTP implementation
//!
//! Delivery is single-shot: one send attempt per inquiry, no retry and no
//! queue. A successful send means the transport accepted the message, not
//! that it reached the inbox.

mod smtp;
mod types;

pub use smtp::{Mailer, SmtpMailer};
pub use types::{MailError, OutboundEmail};
