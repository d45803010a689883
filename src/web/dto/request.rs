//! Request DTOs for the Web API.

use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::inquiry::BookingInquiry;

use super::validation::no_control_chars;

/// Booking inquiry request.
///
/// Both site forms post this shape: the quick-enquiry form sends only
/// `email` and `message`, the full reservation form sends every field.
/// Only the email address is required.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct InquiryRequest {
    /// Full name of the inquirer.
    #[serde(default)]
    #[validate(
        length(max = 200, message = "Name is too long"),
        custom(function = no_control_chars)
    )]
    pub name: Option<String>,
    /// Email address of the inquirer.
    #[validate(
        required(message = "Email address is required"),
        email(message = "Must be a valid email address")
    )]
    pub email: Option<String>,
    /// Phone number.
    #[serde(default)]
    #[validate(
        length(max = 50, message = "Phone number is too long"),
        custom(function = no_control_chars)
    )]
    pub phone: Option<String>,
    /// Requested check-in date.
    #[serde(default, rename = "checkIn")]
    #[validate(
        length(max = 40, message = "Check-in date is too long"),
        custom(function = no_control_chars)
    )]
    pub check_in: Option<String>,
    /// Requested check-out date.
    #[serde(default, rename = "checkOut")]
    #[validate(
        length(max = 40, message = "Check-out date is too long"),
        custom(function = no_control_chars)
    )]
    pub check_out: Option<String>,
    /// Message or special requests.
    #[serde(default)]
    #[validate(
        length(max = 4000, message = "Message is too long"),
        custom(function = no_control_chars)
    )]
    pub message: Option<String>,
}

impl InquiryRequest {
    /// Convert the validated request into a [`BookingInquiry`].
    pub fn into_inquiry(self) -> BookingInquiry {
        BookingInquiry {
            name: self.name,
            // `required` validation guarantees the address is present
            email: self.email.unwrap_or_default(),
            phone: self.phone,
            check_in: self.check_in,
            check_out: self.check_out,
            message: self.message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_request_json() -> &'static str {
        r#"{
            "name": "John Doe",
            "email": "john@example.com",
            "phone": "+44 7700 900000",
            "checkIn": "2026-09-01",
            "checkOut": "2026-09-08",
            "message": "Looking forward to it"
        }"#
    }

    #[test]
    fn test_deserialize_full_request() {
        let req: InquiryRequest = serde_json::from_str(full_request_json()).unwrap();
        assert_eq!(req.name.as_deref(), Some("John Doe"));
        assert_eq!(req.check_in.as_deref(), Some("2026-09-01"));
        assert_eq!(req.check_out.as_deref(), Some("2026-09-08"));
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_deserialize_quick_enquiry() {
        // The quick-enquiry form omits everything except email and message
        let req: InquiryRequest = serde_json::from_str(
            r#"{"email": "quick@example.com", "message": "Is August free?"}"#,
        )
        .unwrap();
        assert!(req.name.is_none());
        assert!(req.check_in.is_none());
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_missing_email_fails_validation() {
        let req: InquiryRequest = serde_json::from_str(r#"{"message": "hello"}"#).unwrap();
        let errors = req.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("email"));
    }

    #[test]
    fn test_implausible_email_fails_validation() {
        let req: InquiryRequest =
            serde_json::from_str(r#"{"email": "not-an-address"}"#).unwrap();
        let errors = req.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("email"));
    }

    #[test]
    fn test_control_chars_rejected() {
        let req: InquiryRequest = serde_json::from_str(
            r#"{"email": "a@example.com", "name": "Bad\u0000Name"}"#,
        )
        .unwrap();
        let errors = req.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("name"));
    }

    #[test]
    fn test_control_chars_in_message_rejected() {
        let req: InquiryRequest = serde_json::from_str(
            r#"{"email": "a@example.com", "message": "bad\u0000payload"}"#,
        )
        .unwrap();
        let errors = req.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("message"));
    }

    #[test]
    fn test_multiline_message_is_legal() {
        let req: InquiryRequest = serde_json::from_str(
            r#"{"email": "a@example.com", "message": "line one\nline two\r\n\tindented"}"#,
        )
        .unwrap();
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_oversize_fields_rejected() {
        let long_name = "x".repeat(201);
        let json = format!(r#"{{"email": "a@example.com", "name": "{long_name}"}}"#);
        let req: InquiryRequest = serde_json::from_str(&json).unwrap();
        let errors = req.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("name"));

        let long_message = "y".repeat(4001);
        let json = format!(r#"{{"email": "a@example.com", "message": "{long_message}"}}"#);
        let req: InquiryRequest = serde_json::from_str(&json).unwrap();
        let errors = req.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("message"));
    }

    #[test]
    fn test_into_inquiry() {
        let req: InquiryRequest = serde_json::from_str(full_request_json()).unwrap();
        let inquiry = req.into_inquiry();
        assert_eq!(inquiry.email, "john@example.com");
        assert_eq!(inquiry.check_in.as_deref(), Some("2026-09-01"));
    }
}
