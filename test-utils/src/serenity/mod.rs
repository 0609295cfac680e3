//! Test factories for creating Serenity API objects.
//!
//! These factories build Serenity structs by deserializing JSON shaped like Discord's REST
//! responses, so fake Discord clients can return the same types the real client does.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::serenity::{create_test_guild_info, create_test_webhook};
//!
//! let guild = create_test_guild_info(123456789, "Test Guild", 0x8);
//! let webhook = create_test_webhook(555, 10, "token");
//! ```
//!
//! # Available Factories
//!
//! - `guild_info::create_test_guild_info` - partial guilds from `/users/@me/guilds`
//! - `channel::create_test_channel` - guild channels from `/guilds/{id}/channels`
//! - `webhook::create_test_webhook` - webhooks returned on creation
//! - `user::create_test_user` - users from `/users/@me`

pub mod channel;
pub mod guild_info;
pub mod user;
pub mod webhook;

pub use channel::create_test_channel;
pub use guild_info::create_test_guild_info;
pub use user::create_test_user;
pub use webhook::create_test_webhook;
