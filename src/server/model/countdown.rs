//! Notification countdown model.
//!
//! A countdown is stored as a single number of minutes before launch; the dashboard accepts
//! and displays it as days, hours, and minutes.

use crate::{
    model::countdown::{CountdownDto, CreateCountdownDto},
    server::error::settings::SettingsError,
};

/// Maximum number of countdowns a guild can configure.
pub const MAX_COUNTDOWNS_PER_GUILD: u64 = 64;

const MAX_DAYS: i32 = 31;
const MAX_HOURS: i32 = 24;
const MAX_MINUTES: i32 = 60;

const MINUTES_PER_HOUR: i32 = 60;
const MINUTES_PER_DAY: i32 = 24 * MINUTES_PER_HOUR;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Countdown {
    pub minutes: i32,
}

impl Countdown {
    pub fn from_entity(entity: entity::notification_countdown::Model) -> Self {
        Self {
            minutes: entity.minutes,
        }
    }

    pub fn into_dto(self) -> CountdownDto {
        CountdownDto {
            total_minutes: self.minutes,
            days: self.minutes / MINUTES_PER_DAY,
            hours: self.minutes % MINUTES_PER_DAY / MINUTES_PER_HOUR,
            minutes: self.minutes % MINUTES_PER_HOUR,
        }
    }
}

/// Countdown as entered in the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CreateCountdownParam {
    pub days: i32,
    pub hours: i32,
    pub minutes: i32,
}

impl CreateCountdownParam {
    /// Validates the components and folds them into minutes before launch.
    ///
    /// # Returns
    /// - `Ok(i32)` - `days × 1440 + hours × 60 + minutes`
    /// - `Err(SettingsError::CountdownOutOfRange)` - A component is negative or above its bound
    /// - `Err(SettingsError::CountdownEmpty)` - All components are zero
    pub fn total_minutes(&self) -> Result<i32, SettingsError> {
        for (field, value, max) in [
            ("days", self.days, MAX_DAYS),
            ("hours", self.hours, MAX_HOURS),
            ("minutes", self.minutes, MAX_MINUTES),
        ] {
            if !(0..=max).contains(&value) {
                return Err(SettingsError::CountdownOutOfRange { field, value, max });
            }
        }

        let total = self.days * MINUTES_PER_DAY + self.hours * MINUTES_PER_HOUR + self.minutes;
        if total == 0 {
            return Err(SettingsError::CountdownEmpty);
        }

        Ok(total)
    }
}

impl From<CreateCountdownDto> for CreateCountdownParam {
    fn from(dto: CreateCountdownDto) -> Self {
        Self {
            days: dto.days,
            hours: dto.hours,
            minutes: dto.minutes,
        }
    }
}
