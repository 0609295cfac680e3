mod filter;
mod guild_settings;
mod reference;
mod user;
