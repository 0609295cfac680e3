//! LiveLaunch Dashboard Test Utils
//!
//! Shared testing utilities for the dashboard's repository, service, and middleware tests.
//! Tests get an in-memory SQLite database with only the tables they need, an optional
//! tower-sessions `Session` backed by the same database, and factories for seeding rows.
//!
//! # Overview
//!
//! - **TestBuilder**: fluent builder choosing which entity tables to create
//! - **TestContext**: the built environment holding the database connection and session
//! - **TestError**: errors that can occur while setting the environment up
//! - **factory**: row factories for users, accounts, guild settings, reference data
//! - **serenity**: Discord API objects built from JSON for faking the Discord client
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn stores_settings() -> Result<(), TestError> {
//!     let test = TestBuilder::new().with_settings_tables().build().await?;
//!     let db = test.db.as_ref().unwrap();
//!
//!     let guild = factory::create_enabled_guild(db).await?;
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod serenity;
