//! Service layer for business logic and orchestration.
//!
//! Services sit between the controllers and the repositories. They enforce domain rules,
//! coordinate repository calls with Discord, and work with domain models rather than DTOs or
//! entity models.

pub mod account;
pub mod auth;
pub mod cache;
pub mod channel;
pub mod countdown;
pub mod discord;
pub mod filter;
pub mod guild;
pub mod settings;
pub mod webhook;

#[cfg(test)]
mod test;
