use chrono::{DateTime, FixedOffset, LocalResult, NaiveDate, NaiveDateTime, Offset, TimeZone, Utc};
use chrono_tz::Tz;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

use crate::error::{AgendaError, Result};

/// Fixed offset pattern: +05:30, -0800, UTC+3, GMT-04:00
static OFFSET_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:UTC|GMT)?([+-])(\d{1,2})(?::?(\d{2}))?$").expect("Invalid OFFSET_RE regex")
});

/// Timezone used to interpret calendar days
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Zone {
    /// IANA timezone with DST rules
    Named(Tz),
    /// Constant offset from UTC
    Fixed(FixedOffset),
}

impl Default for Zone {
    fn default() -> Self {
        Zone::Named(Tz::UTC)
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Zone::Named(tz) => f.write_str(tz.name()),
            Zone::Fixed(offset) => write!(f, "{offset}"),
        }
    }
}

impl Zone {
    /// Calendar date of `instant` as seen in this zone
    pub fn local_date(&self, instant: &DateTime<Utc>) -> NaiveDate {
        match self {
            Zone::Named(tz) => instant.with_timezone(tz).date_naive(),
            Zone::Fixed(offset) => instant.with_timezone(offset).date_naive(),
        }
    }

    /// Today's date in this zone
    pub fn today(&self) -> NaiveDate {
        self.local_date(&Utc::now())
    }

    /// Map a local wall-clock time to instants, keeping the local offset
    pub fn from_local(&self, naive: &NaiveDateTime) -> LocalResult<DateTime<FixedOffset>> {
        match self {
            Zone::Named(tz) => tz.from_local_datetime(naive).map(|dt| dt.fixed_offset()),
            Zone::Fixed(offset) => offset.from_local_datetime(naive),
        }
    }
}

/// Parse an IANA timezone name or a fixed UTC offset
///
/// # Arguments
/// * `s` - Zone string (e.g., "Europe/Berlin", "UTC", "+05:30", "GMT-4")
///
/// # Returns
/// Parsed zone, or `InvalidWindow` for unknown identifiers
pub fn parse_zone(s: &str) -> Result<Zone> {
    let s = s.trim();
    if s.is_empty() {
        return Err(AgendaError::InvalidWindow("empty timezone".to_string()));
    }

    if let Ok(tz) = s.parse::<Tz>() {
        return Ok(Zone::Named(tz));
    }

    if s == "Z" {
        return Ok(Zone::Fixed(Utc.fix()));
    }

    if let Some(caps) = OFFSET_RE.captures(s) {
        let sign = if &caps[1] == "-" { -1 } else { 1 };
        let hours: i32 = caps[2].parse().map_err(|_| unknown_zone(s))?;
        let minutes: i32 = caps
            .get(3)
            .map(|m| m.as_str().parse::<i32>())
            .transpose()
            .map_err(|_| unknown_zone(s))?
            .unwrap_or(0);
        if hours > 23 || minutes > 59 {
            return Err(unknown_zone(s));
        }
        return FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
            .map(Zone::Fixed)
            .ok_or_else(|| unknown_zone(s));
    }

    Err(unknown_zone(s))
}

fn unknown_zone(s: &str) -> AgendaError {
    AgendaError::InvalidWindow(format!("unknown timezone '{s}'"))
}
