//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with a `Factory` struct for customization and a
//! `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let user = factory::create_user(&db).await?;
//! let account = factory::create_account(&db, user.discord_id).await?;
//! let guild = factory::create_enabled_guild(&db).await?;
//! let agency = factory::create_agency(&db, "SpaceX").await?;
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let guild = factory::enabled_guild::EnabledGuildFactory::new(&db)
//!     .guild_id(42)
//!     .news_webhook(7, "https://discord.com/api/webhooks/1/token")
//!     .build()
//!     .await?;
//! ```

pub mod account;
pub mod countdown;
pub mod enabled_guild;
pub mod helpers;
pub mod reference;
pub mod user;

pub use account::create_account;
pub use countdown::create_countdown;
pub use enabled_guild::create_enabled_guild;
pub use reference::{create_agency, create_news_site};
pub use user::create_user;
