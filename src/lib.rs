//! WIMSTAY - Wimbledon holiday home site
//!
//! Marketing and booking-inquiry server for a single short-term rental
//! property, implemented in Rust. Serves the site content as a JSON API and
//! relays booking inquiries to the property manager's inbox over SMTP.

pub mod config;
pub mod content;
pub mod error;
pub mod inquiry;
pub mod logging;
pub mod mail;
pub mod web;

pub use config::Config;
pub use content::{
    gallery, pricing, property, reviews, Amenity, GalleryImage, PricingTable, Property, Review,
};
pub use error::{Result, WimstayError};
pub use inquiry::{BookingInquiry, MESSAGE_PLACEHOLDER};
pub use mail::{MailError, Mailer, OutboundEmail, SmtpMailer};
pub use web::WebServer;
