//! Data transfer objects shared with the dashboard frontend.
//!
//! Discord snowflakes are serialized as strings because JavaScript numbers cannot hold
//! 64-bit ids without losing precision.

pub mod api;
pub mod countdown;
pub mod filter;
pub mod guild;
pub mod settings;
pub mod user;
