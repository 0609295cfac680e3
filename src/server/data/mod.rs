//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models to keep the entity types out of the service layer.

pub mod account;
pub mod countdown;
pub mod filter;
pub mod guild_settings;
pub mod reference;
pub mod user;

#[cfg(test)]
mod test;
