//! Web API module for WIMSTAY.
//!
//! This module provides the site's HTTP surface: the JSON content endpoints,
//! the booking-inquiry relay endpoint, and optional static file serving for
//! the front-end.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod server;

pub use error::ApiError;
pub use router::create_router;
pub use server::WebServer;
