//! Booking inquiry composition.
//!
//! A [`BookingInquiry`] is request-scoped: it is built from a submitted form
//! payload, rendered into an outbound email, and discarded. Nothing here is
//! persisted.

use chrono::Utc;

use crate::mail::OutboundEmail;

/// Placeholder substituted when an inquiry carries no message.
pub const MESSAGE_PLACEHOLDER: &str = "No message provided";

/// A booking inquiry submitted through one of the site forms.
///
/// Only the email address is required; the quick-enquiry form submits just
/// email and message, the full reservation form submits everything. Absent
/// fields render as empty strings in the composed email.
#[derive(Debug, Clone)]
pub struct BookingInquiry {
    /// Full name of the inquirer.
    pub name: Option<String>,
    /// Email address of the inquirer.
    pub email: String,
    /// Phone number.
    pub phone: Option<String>,
    /// Requested check-in date (free-form, not validated).
    pub check_in: Option<String>,
    /// Requested check-out date (free-form, not validated).
    pub check_out: Option<String>,
    /// Message or special requests.
    pub message: Option<String>,
}

impl BookingInquiry {
    /// Subject line for the composed email.
    ///
    /// Uses the inquirer's name when present, falling back to their email
    /// address for quick enquiries that omit the name.
    pub fn subject(&self) -> String {
        let who = self
            .name
            .as_deref()
            .filter(|n| !n.trim().is_empty())
            .unwrap_or(&self.email);
        format!("New Booking Request from {who}")
    }

    /// Render the inquiry as an outbound email to the property manager.
    ///
    /// Field values are HTML-escaped before interpolation. A missing message
    /// is substituted with [`MESSAGE_PLACEHOLDER`]; other missing fields
    /// render as empty.
    pub fn to_email(&self) -> OutboundEmail {
        let message = self
            .message
            .as_deref()
            .filter(|m| !m.trim().is_empty())
            .unwrap_or(MESSAGE_PLACEHOLDER);

        let html_body = format!(
            "<h2>New Booking Request</h2>\n\
             <p><strong>Name:</strong> {}</p>\n\
             <p><strong>Email:</strong> {}</p>\n\
             <p><strong>Phone:</strong> {}</p>\n\
             <p><strong>Check-in:</strong> {}</p>\n\
             <p><strong>Check-out:</strong> {}</p>\n\
             <p><strong>Message:</strong> {}</p>\n\
             <p><em>Received {} UTC</em></p>",
            escape_html(self.name.as_deref().unwrap_or_default()),
            escape_html(&self.email),
            escape_html(self.phone.as_deref().unwrap_or_default()),
            escape_html(self.check_in.as_deref().unwrap_or_default()),
            escape_html(self.check_out.as_deref().unwrap_or_default()),
            escape_html(message),
            Utc::now().format("%Y-%m-%d %H:%M"),
        );

        OutboundEmail {
            subject: self.subject(),
            html_body,
            reply_to: Some(self.email.clone()),
        }
    }
}

/// Escape a string for interpolation into an HTML email body.
fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_inquiry() -> BookingInquiry {
        BookingInquiry {
            name: Some("John Doe".to_string()),
            email: "john@example.com".to_string(),
            phone: Some("+44 7700 900000".to_string()),
            check_in: Some("2026-09-01".to_string()),
            check_out: Some("2026-09-08".to_string()),
            message: Some("We are travelling with a small dog.".to_string()),
        }
    }

    #[test]
    fn test_subject_uses_name() {
        let inquiry = full_inquiry();
        assert_eq!(inquiry.subject(), "New Booking Request from John Doe");
    }

    #[test]
    fn test_subject_falls_back_to_email() {
        let mut inquiry = full_inquiry();
        inquiry.name = None;
        assert_eq!(
            inquiry.subject(),
            "New Booking Request from john@example.com"
        );

        inquiry.name = Some("   ".to_string());
        assert_eq!(
            inquiry.subject(),
            "New Booking Request from john@example.com"
        );
    }

    #[test]
    fn test_email_contains_all_fields() {
        let inquiry = full_inquiry();
        let email = inquiry.to_email();

        assert!(email.html_body.contains("John Doe"));
        assert!(email.html_body.contains("john@example.com"));
        assert!(email.html_body.contains("+44 7700 900000"));
        assert!(email.html_body.contains("2026-09-01"));
        assert!(email.html_body.contains("2026-09-08"));
        assert!(email.html_body.contains("We are travelling with a small dog."));
    }

    #[test]
    fn test_missing_message_uses_placeholder() {
        let mut inquiry = full_inquiry();
        inquiry.message = None;
        let email = inquiry.to_email();
        assert!(email.html_body.contains(MESSAGE_PLACEHOLDER));

        // Whitespace-only counts as missing too
        inquiry.message = Some("  \n".to_string());
        let email = inquiry.to_email();
        assert!(email.html_body.contains(MESSAGE_PLACEHOLDER));
    }

    #[test]
    fn test_missing_fields_render_empty() {
        let inquiry = BookingInquiry {
            name: None,
            email: "quick@example.com".to_string(),
            phone: None,
            check_in: None,
            check_out: None,
            message: Some("Is the house available over Christmas?".to_string()),
        };
        let email = inquiry.to_email();

        assert!(email.html_body.contains("<strong>Check-in:</strong> </p>"));
        assert!(email.html_body.contains("<strong>Phone:</strong> </p>"));
        assert!(email
            .html_body
            .contains("Is the house available over Christmas?"));
    }

    #[test]
    fn test_reply_to_is_inquirer() {
        let email = full_inquiry().to_email();
        assert_eq!(email.reply_to.as_deref(), Some("john@example.com"));
    }

    #[test]
    fn test_html_is_escaped() {
        let mut inquiry = full_inquiry();
        inquiry.message = Some("<script>alert('x')</script>".to_string());
        let email = inquiry.to_email();
        assert!(!email.html_body.contains("<script>"));
        assert!(email.html_body.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("plain"), "plain");
        assert_eq!(escape_html("a & b"), "a &amp; b");
        assert_eq!(escape_html("\"x\" <y>"), "&quot;x&quot; &lt;y&gt;");
    }
}
