use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Schedulable editorial record
///
/// Only `id`, `start` and `end` are interpreted; every other field is kept
/// verbatim in `payload`. Timestamps stay raw JSON so a non-string value only
/// invalidates its own item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanningItem {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<Value>,
    #[serde(flatten)]
    pub payload: Map<String, Value>,
}

impl PlanningItem {
    pub fn new(id: &str, start: Option<&str>, end: Option<&str>) -> Self {
        Self {
            id: id.to_string(),
            start: start.map(|s| Value::String(s.to_string())),
            end: end.map(|s| Value::String(s.to_string())),
            payload: Map::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterOptions {
    /// Abort on the first malformed item instead of skipping it
    pub strict: bool,
}

/// Item excluded because its timestamps could not be used
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedItem {
    pub id: String,
    pub reason: String,
}

/// Result of filtering items against one day
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Filtered {
    pub items: Vec<PlanningItem>,
    pub skipped: Vec<SkippedItem>,
}

/// Items intersecting one calendar day
#[derive(Debug, Clone, PartialEq)]
pub struct DayGroup {
    pub date: NaiveDate,
    pub items: Vec<PlanningItem>,
}

/// One group per requested date, plus items skipped across the whole call
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Grouped {
    pub days: Vec<DayGroup>,
    pub skipped: Vec<SkippedItem>,
}
