use chrono::Weekday;
use std::fmt;
use std::str::FromStr;

use crate::error::Result;
use crate::timestamp::zone::{parse_zone, Zone};
use crate::types::FilterOptions;

/// First day of a displayed week
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekStart(Weekday);

impl WeekStart {
    pub fn new(weekday: Weekday) -> Self {
        Self(weekday)
    }

    pub fn weekday(self) -> Weekday {
        self.0
    }
}

impl Default for WeekStart {
    fn default() -> Self {
        Self(Weekday::Mon)
    }
}

impl FromStr for WeekStart {
    type Err = String;

    /// Accepts full or short English day names, case-insensitive
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        s.trim()
            .parse::<Weekday>()
            .map(Self)
            .map_err(|_| format!("Invalid week start '{s}'. Use a day name such as 'monday' or 'sun'"))
    }
}

impl fmt::Display for WeekStart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Timezone and locale context for agenda queries
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AgendaConfig {
    pub zone: Zone,
    pub week_start: WeekStart,
    pub strict: bool,
}

impl AgendaConfig {
    /// Build a config from raw settings; fails on unknown timezones
    pub fn from_parts(tz: &str, week_start: WeekStart, strict: bool) -> Result<Self> {
        Ok(Self {
            zone: parse_zone(tz)?,
            week_start,
            strict,
        })
    }

    pub fn filter_options(&self) -> FilterOptions {
        FilterOptions {
            strict: self.strict,
        }
    }
}
