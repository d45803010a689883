//! API handlers for the Web API.

pub mod contact;
pub mod property;

pub use contact::*;
pub use property::*;
