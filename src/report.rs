use chrono::{DateTime, FixedOffset, SecondsFormat};
use serde::Serialize;

use crate::types::{DayGroup, Filtered, Grouped, PlanningItem, SkippedItem};
use crate::window::DateWindow;

/// Day window bounds as RFC 3339 strings in the query zone
#[derive(Debug, Serialize)]
pub struct WindowReport {
    pub start: String,
    pub end: String,
}

impl From<&DateWindow> for WindowReport {
    fn from(window: &DateWindow) -> Self {
        Self {
            start: format_instant(&window.day_start),
            end: format_instant(&window.day_end),
        }
    }
}

/// JSON shape of the `day` agenda
#[derive(Debug, Serialize)]
pub struct DayReport {
    pub date: String,
    pub window: WindowReport,
    pub items: Vec<PlanningItem>,
    pub skipped: Vec<SkippedItem>,
}

impl DayReport {
    pub fn new(window: &DateWindow, filtered: Filtered) -> Self {
        Self {
            date: window.date.format("%Y-%m-%d").to_string(),
            window: WindowReport::from(window),
            items: filtered.items,
            skipped: filtered.skipped,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DayGroupReport {
    pub date: String,
    pub items: Vec<PlanningItem>,
}

impl From<DayGroup> for DayGroupReport {
    fn from(group: DayGroup) -> Self {
        Self {
            date: group.date.format("%Y-%m-%d").to_string(),
            items: group.items,
        }
    }
}

/// JSON shape of the `week` agenda
#[derive(Debug, Serialize)]
pub struct WeekReport {
    pub days: Vec<DayGroupReport>,
    pub skipped: Vec<SkippedItem>,
}

impl From<Grouped> for WeekReport {
    fn from(grouped: Grouped) -> Self {
        Self {
            days: grouped.days.into_iter().map(DayGroupReport::from).collect(),
            skipped: grouped.skipped,
        }
    }
}

fn format_instant(dt: &DateTime<FixedOffset>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timestamp::zone::parse_zone;
    use crate::window::compute_day_window;
    use chrono::NaiveDate;
    use serde_json::json;

    #[test]
    fn test_day_report_json() {
        let zone = parse_zone("Europe/Moscow").unwrap();
        let window = compute_day_window(NaiveDate::from_ymd_opt(2024, 3, 10).unwrap(), &zone).unwrap();
        let filtered = Filtered {
            items: vec![PlanningItem::new("a", Some("2024-03-10T08:00:00Z"), None)],
            skipped: vec![SkippedItem {
                id: "b".to_string(),
                reason: "start 'x' is not a valid timestamp".to_string(),
            }],
        };
        let value = serde_json::to_value(DayReport::new(&window, filtered)).unwrap();
        assert_eq!(value["date"], json!("2024-03-10"));
        assert_eq!(value["window"]["start"], json!("2024-03-10T00:00:00.000+03:00"));
        assert_eq!(value["window"]["end"], json!("2024-03-10T23:59:59.999+03:00"));
        assert_eq!(value["items"][0]["id"], json!("a"));
        assert_eq!(value["skipped"][0]["id"], json!("b"));
    }

    #[test]
    fn test_utc_window_uses_z_suffix() {
        let zone = parse_zone("UTC").unwrap();
        let window = compute_day_window(NaiveDate::from_ymd_opt(2024, 3, 10).unwrap(), &zone).unwrap();
        let report = WindowReport::from(&window);
        assert_eq!(report.start, "2024-03-10T00:00:00.000Z");
    }

    #[test]
    fn test_week_report_keeps_empty_days() {
        let grouped = Grouped {
            days: vec![
                DayGroup {
                    date: NaiveDate::from_ymd_opt(2024, 3, 11).unwrap(),
                    items: Vec::new(),
                },
                DayGroup {
                    date: NaiveDate::from_ymd_opt(2024, 3, 12).unwrap(),
                    items: vec![PlanningItem::new("a", Some("2024-03-12T08:00:00Z"), None)],
                },
            ],
            skipped: Vec::new(),
        };
        let value = serde_json::to_value(WeekReport::from(grouped)).unwrap();
        assert_eq!(value["days"][0]["date"], json!("2024-03-11"));
        assert_eq!(value["days"][0]["items"], json!([]));
        assert_eq!(value["days"][1]["items"][0]["id"], json!("a"));
    }
}
