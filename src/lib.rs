//! Day-window filtering and per-day grouping of planning items.
//!
//! Items carry optional start/end timestamps. A query names a calendar day
//! (or a list of days) in an explicit timezone; the crate computes the
//! wall-clock bounds of each day and selects the items whose schedule touches
//! it.
//!
//! ```
//! use planning_agenda::{compute_window, filter_by_window, parse_zone, FilterOptions, PlanningItem};
//!
//! let zone = parse_zone("Europe/Berlin").unwrap();
//! let reference = chrono::DateTime::parse_from_rfc3339("2024-03-10T12:00:00Z").unwrap();
//! let window = compute_window(Some(reference), &zone).unwrap();
//!
//! let items = vec![PlanningItem::new("a", Some("2024-03-10T08:00:00Z"), None)];
//! let filtered = filter_by_window(&items, &window, &FilterOptions::default()).unwrap();
//! assert_eq!(filtered.items.len(), 1);
//! ```

pub mod agenda;
pub mod config;
pub mod error;
pub mod report;
pub mod timestamp;
pub mod types;
pub mod window;

pub use agenda::{filter_by_window, group_by_day, sort_by_start};
pub use config::{AgendaConfig, WeekStart};
pub use error::{AgendaError, Result};
pub use timestamp::zone::{parse_zone, Zone};
pub use timestamp::{parse_instant, Schedule};
pub use types::{DayGroup, FilterOptions, Filtered, Grouped, PlanningItem, SkippedItem};
pub use window::{compute_day_window, compute_window, date_range, week_dates, DateWindow};
