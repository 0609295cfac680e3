pub use super::account::Entity as Account;
pub use super::enabled_guild::Entity as EnabledGuild;
pub use super::ll2_agency::Entity as Ll2Agency;
pub use super::ll2_agency_filter::Entity as Ll2AgencyFilter;
pub use super::news_filter::Entity as NewsFilter;
pub use super::news_site::Entity as NewsSite;
pub use super::notification_countdown::Entity as NotificationCountdown;
pub use super::user::Entity as User;
