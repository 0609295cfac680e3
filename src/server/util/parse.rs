use crate::server::error::{internal::InternalError, settings::SettingsError, AppError};

/// Parses a Discord snowflake sent by the dashboard client.
///
/// Snowflakes travel as strings in JSON since they exceed the precision of JavaScript numbers.
///
/// # Arguments
/// - `value` - The string to parse
///
/// # Returns
/// - `Ok(u64)` - Non-zero numeric id
/// - `Err(SettingsError::InvalidSnowflake)` - Not a number, or zero
pub fn parse_snowflake(value: &str) -> Result<u64, SettingsError> {
    match value.trim().parse::<u64>() {
        Ok(id) if id != 0 => Ok(id),
        _ => Err(SettingsError::InvalidSnowflake(value.to_string())),
    }
}

/// Parses a u64 value stored in the session under `key`.
///
/// # Returns
/// - `Ok(u64)` - Successfully parsed
/// - `Err(AppError::InternalErr(CorruptSessionValue))` - The stored value is not numeric
pub fn parse_session_u64(key: &'static str, value: String) -> Result<u64, AppError> {
    let result = value
        .parse::<u64>()
        .map_err(|e| InternalError::CorruptSessionValue {
            key,
            value,
            source: e,
        })?;

    Ok(result)
}
