//! OAuth token set stored per user.

use chrono::{DateTime, Duration, Utc};
use oauth2::{basic::BasicTokenResponse, TokenResponse};

/// Lifetime assumed when Discord omits `expires_in`; Discord issues week-long tokens.
const DEFAULT_TOKEN_LIFETIME_DAYS: i64 = 7;

/// Discord OAuth tokens of a dashboard user.
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    pub user_id: u64,
    pub access_token: String,
    pub refresh_token: Option<String>,
    pub expires_at: DateTime<Utc>,
}

impl Account {
    pub fn from_entity(entity: entity::account::Model) -> Self {
        Self {
            user_id: entity.user_id as u64,
            access_token: entity.access_token,
            refresh_token: entity.refresh_token,
            expires_at: entity.expires_at,
        }
    }

    /// Whether the access token expires within `margin` from now.
    pub fn expires_within(&self, margin: Duration) -> bool {
        self.expires_at <= Utc::now() + margin
    }
}

/// Parameters for storing a freshly issued token set.
#[derive(Debug, Clone)]
pub struct UpsertAccountParam {
    pub user_id: u64,
    pub access_token: String,
    /// `None` keeps the previously stored refresh token.
    pub refresh_token: Option<String>,
    pub expires_at: DateTime<Utc>,
}

impl UpsertAccountParam {
    /// Builds the parameters from a token endpoint response.
    pub fn from_token(user_id: u64, token: &BasicTokenResponse) -> Self {
        let lifetime = token
            .expires_in()
            .and_then(|expires_in| Duration::from_std(expires_in).ok())
            .unwrap_or_else(|| Duration::days(DEFAULT_TOKEN_LIFETIME_DAYS));

        Self {
            user_id,
            access_token: token.access_token().secret().clone(),
            refresh_token: token.refresh_token().map(|t| t.secret().clone()),
            expires_at: Utc::now() + lifetime,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn account(expires_at: DateTime<Utc>) -> Account {
        Account {
            user_id: 1,
            access_token: "token".to_string(),
            refresh_token: None,
            expires_at,
        }
    }

    #[test]
    fn token_expiring_inside_margin_needs_refresh() {
        let account = account(Utc::now() + Duration::seconds(30));

        assert!(account.expires_within(Duration::seconds(60)));
    }

    #[test]
    fn token_valid_past_margin_is_kept() {
        let account = account(Utc::now() + Duration::hours(1));

        assert!(!account.expires_within(Duration::seconds(60)));
    }

    #[test]
    fn token_response_sets_expiry_and_refresh_token() {
        use oauth2::{basic::BasicTokenType, AccessToken, EmptyExtraTokenFields, RefreshToken};

        let mut token = BasicTokenResponse::new(
            AccessToken::new("access".to_string()),
            BasicTokenType::Bearer,
            EmptyExtraTokenFields {},
        );
        token.set_expires_in(Some(&std::time::Duration::from_secs(3600)));
        token.set_refresh_token(Some(RefreshToken::new("refresh".to_string())));

        let param = UpsertAccountParam::from_token(7, &token);

        assert_eq!(param.access_token, "access");
        assert_eq!(param.refresh_token.as_deref(), Some("refresh"));
        assert!(param.expires_at > Utc::now() + Duration::minutes(59));
        assert!(param.expires_at <= Utc::now() + Duration::hours(1));
    }
}
