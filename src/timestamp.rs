pub mod zone;

use chrono::{DateTime, FixedOffset, Utc};
use serde_json::Value;

use crate::error::{AgendaError, Result};
use crate::types::PlanningItem;
use crate::window::DateWindow;

/// Offset-carrying formats accepted besides RFC 3339
const EXTRA_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f%z",
    "%Y-%m-%d %H:%M:%S%.f%:z",
    "%Y-%m-%d %H:%M:%S%.f%z",
];

/// Parse a timezone-aware timestamp
///
/// Accepts RFC 3339 ("2024-03-10T08:00:00Z") and the same layout with a
/// space separator or a colon-less offset ("2024-03-10T08:00:00+0000").
/// Timestamps without an offset are rejected.
pub fn parse_instant(s: &str) -> Option<DateTime<FixedOffset>> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt);
    }
    EXTRA_FORMATS
        .iter()
        .find_map(|fmt| DateTime::parse_from_str(s, fmt).ok())
}

/// Validated scheduled window of a planning item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Schedule {
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
}

impl Schedule {
    /// Parse and validate the item's start and end
    pub fn from_item(item: &PlanningItem) -> Result<Self> {
        let start = parse_field(item, "start", item.start.as_ref())?;
        let end = parse_field(item, "end", item.end.as_ref())?;

        if let (Some(s), Some(e)) = (start, end) {
            if s > e {
                return Err(AgendaError::InvalidTimestamp {
                    id: item.id.clone(),
                    reason: format!("start {} is after end {}", s.to_rfc3339(), e.to_rfc3339()),
                });
            }
        }

        Ok(Self { start, end })
    }

    /// Closed span covered by the schedule; a missing bound collapses onto the other
    pub fn span(&self) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
        match (self.start, self.end) {
            (Some(s), Some(e)) => Some((s, e)),
            (Some(s), None) => Some((s, s)),
            (None, Some(e)) => Some((e, e)),
            (None, None) => None,
        }
    }

    /// True when the span touches [day_start, day_end]
    pub fn intersects(&self, window: &DateWindow) -> bool {
        match self.span() {
            Some((start, end)) => start <= window.end_utc() && end >= window.start_utc(),
            None => false,
        }
    }

    /// Instant used for chronological ordering
    pub fn sort_key(&self) -> Option<DateTime<Utc>> {
        self.start.or(self.end)
    }
}

fn parse_field(item: &PlanningItem, field: &str, raw: Option<&Value>) -> Result<Option<DateTime<Utc>>> {
    let invalid = |reason: String| AgendaError::InvalidTimestamp {
        id: item.id.clone(),
        reason,
    };
    match raw {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(raw)) => parse_instant(raw)
            .map(|dt| Some(dt.with_timezone(&Utc)))
            .ok_or_else(|| invalid(format!("{field} '{raw}' is not a valid timestamp"))),
        Some(other) => Err(invalid(format!("{field} {other} is not a timestamp string"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_parse_rfc3339() {
        let dt = parse_instant("2024-03-10T08:00:00Z").unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(2024, 3, 10, 8, 0, 0).unwrap());
    }

    #[test]
    fn test_parse_compact_offset() {
        let dt = parse_instant("2024-03-10T08:00:00+0100").unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(2024, 3, 10, 7, 0, 0).unwrap());
        assert_eq!(dt.offset().local_minus_utc(), 3600);
    }

    #[test]
    fn test_parse_space_separator() {
        let dt = parse_instant("2024-03-10 08:00:00+02:00").unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(2024, 3, 10, 6, 0, 0).unwrap());
    }

    #[test]
    fn test_parse_rejects_naive_and_garbage() {
        assert!(parse_instant("2024-03-10T08:00:00").is_none());
        assert!(parse_instant("not-a-date").is_none());
        assert!(parse_instant("").is_none());
    }

    #[test]
    fn test_schedule_open_ended() {
        let item = PlanningItem::new("a", Some("2024-03-10T23:50:00Z"), None);
        let schedule = Schedule::from_item(&item).unwrap();
        assert!(schedule.end.is_none());
        let (start, end) = schedule.span().unwrap();
        assert_eq!(start, end);
    }

    #[test]
    fn test_schedule_start_after_end() {
        let item = PlanningItem::new("b", Some("2024-03-10T10:00:00Z"), Some("2024-03-10T09:00:00Z"));
        let err = Schedule::from_item(&item).unwrap_err();
        assert!(matches!(err, AgendaError::InvalidTimestamp { ref id, .. } if id == "b"));
    }

    #[test]
    fn test_schedule_malformed_end_names_field() {
        let item = PlanningItem::new("c", Some("2024-03-10T10:00:00Z"), Some("tomorrow"));
        match Schedule::from_item(&item) {
            Err(AgendaError::InvalidTimestamp { id, reason }) => {
                assert_eq!(id, "c");
                assert!(reason.contains("end 'tomorrow'"));
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_schedule_numeric_start_is_invalid() {
        let mut item = PlanningItem::new("epoch", None, None);
        item.start = Some(serde_json::json!(1710057600));
        match Schedule::from_item(&item) {
            Err(AgendaError::InvalidTimestamp { id, reason }) => {
                assert_eq!(id, "epoch");
                assert!(reason.contains("not a timestamp string"));
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_schedule_without_timestamps_has_no_span() {
        let item = PlanningItem::new("d", None, None);
        let schedule = Schedule::from_item(&item).unwrap();
        assert!(schedule.span().is_none());
        assert!(schedule.sort_key().is_none());
    }
}
