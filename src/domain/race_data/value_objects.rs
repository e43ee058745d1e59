use chrono::{DateTime, SecondsFormat, Utc};
use derive_more::{Constructor, Display, From, Into};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumIter};

/// Value Object - calendar year of a race
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, From, Into, Constructor, Display,
    Serialize, Deserialize,
)]
pub struct Year(i32);

impl Year {
    pub fn value(&self) -> i32 {
        self.0
    }
}

/// Value Object - race duration as a time-of-day on 1970-01-01 UTC.
///
/// Stored as milliseconds since the Unix epoch so that every duration lives
/// on the same time axis.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, From, Into, Serialize, Deserialize,
)]
pub struct RaceDuration(i64);

impl RaceDuration {
    /// Equivalent of `Date.UTC(1970, 0, 1, 0, minutes, seconds)`: components
    /// larger than their unit carry over (`75:00` is 01:15:00).
    pub fn from_minutes_seconds(minutes: u32, seconds: u32) -> Self {
        Self((i64::from(minutes) * 60 + i64::from(seconds)) * 1000)
    }

    pub fn from_millis(millis: i64) -> Self {
        Self(millis)
    }

    pub fn millis(&self) -> i64 {
        self.0
    }

    pub fn as_f64(&self) -> f64 {
        self.0 as f64
    }

    fn as_datetime(&self) -> DateTime<Utc> {
        DateTime::from_timestamp_millis(self.0).unwrap_or(DateTime::UNIX_EPOCH)
    }

    pub fn minute_of_hour(&self) -> u32 {
        ((self.0.div_euclid(60_000)).rem_euclid(60)) as u32
    }

    pub fn second_of_minute(&self) -> u32 {
        ((self.0.div_euclid(1000)).rem_euclid(60)) as u32
    }

    /// `%M:%S` label used by the y axis and the tooltip.
    pub fn format_minutes_seconds(&self) -> String {
        self.as_datetime().format("%M:%S").to_string()
    }

    /// ISO-8601 with milliseconds, e.g. `1970-01-01T00:36:40.000Z`.
    pub fn to_iso_string(&self) -> String {
        self.as_datetime().to_rfc3339_opts(SecondsFormat::Millis, true)
    }
}

/// Value Object - doping allegation category, the colour-scale key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, AsRefStr)]
pub enum DopingFlag {
    #[display(fmt = "No doping allegations")]
    #[strum(serialize = "clean")]
    Clean,
    #[display(fmt = "Riders with doping allegations")]
    #[strum(serialize = "alleged")]
    Alleged,
}

impl DopingFlag {
    pub fn from_description(doping: &str) -> Self {
        Self::from(!doping.is_empty())
    }

    pub fn is_alleged(&self) -> bool {
        matches!(self, Self::Alleged)
    }

    /// Legend caption.
    pub fn legend_label(&self) -> String {
        self.to_string()
    }
}

impl From<bool> for DopingFlag {
    fn from(alleged: bool) -> Self {
        if alleged { Self::Alleged } else { Self::Clean }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duration_formats_as_minutes_and_seconds() {
        let d = RaceDuration::from_minutes_seconds(36, 40);
        assert_eq!(d.millis(), 2_200_000);
        assert_eq!(d.format_minutes_seconds(), "36:40");
        assert_eq!(d.to_iso_string(), "1970-01-01T00:36:40.000Z");
    }

    #[test]
    fn overflowing_minutes_carry_into_hours() {
        let d = RaceDuration::from_minutes_seconds(75, 5);
        assert_eq!(d.to_iso_string(), "1970-01-01T01:15:05.000Z");
        assert_eq!(d.format_minutes_seconds(), "15:05");
        assert_eq!(d.minute_of_hour(), 15);
    }

    #[test]
    fn empty_description_is_clean() {
        assert_eq!(DopingFlag::from_description(""), DopingFlag::Clean);
        assert_eq!(DopingFlag::from_description("Admitted"), DopingFlag::Alleged);
    }
}
