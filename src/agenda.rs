use chrono::NaiveDate;
use tracing::{debug, warn};

use crate::error::{AgendaError, Result};
use crate::timestamp::zone::Zone;
use crate::timestamp::Schedule;
use crate::types::{DayGroup, FilterOptions, Filtered, Grouped, PlanningItem, SkippedItem};
use crate::window::{compute_day_window, DateWindow};

/// Select the items whose schedule intersects `window`, keeping input order
///
/// Malformed items are skipped and reported in `Filtered::skipped`, or abort
/// the call with `InvalidTimestamp` when `options.strict` is set.
pub fn filter_by_window(items: &[PlanningItem], window: &DateWindow, options: &FilterOptions) -> Result<Filtered> {
    let mut filtered = Filtered::default();

    for item in items {
        match Schedule::from_item(item) {
            Ok(schedule) => {
                if schedule.intersects(window) {
                    filtered.items.push(item.clone());
                }
            }
            Err(err) => skip_or_abort(err, options, &mut filtered.skipped)?,
        }
    }

    debug!(
        date = %window.date,
        matched = filtered.items.len(),
        skipped = filtered.skipped.len(),
        "filtered planning items"
    );
    Ok(filtered)
}

/// Group items under each date in `dates`, one group per date in input order
///
/// Multi-day items appear in every group they intersect. Dates with no
/// matching items still get an empty group.
pub fn group_by_day(
    items: &[PlanningItem],
    dates: &[NaiveDate],
    zone: &Zone,
    options: &FilterOptions,
) -> Result<Grouped> {
    let windows = dates
        .iter()
        .map(|date| compute_day_window(*date, zone))
        .collect::<Result<Vec<_>>>()?;

    let mut skipped = Vec::new();
    let mut scheduled = Vec::with_capacity(items.len());
    for item in items {
        match Schedule::from_item(item) {
            Ok(schedule) => scheduled.push((item, schedule)),
            Err(err) => skip_or_abort(err, options, &mut skipped)?,
        }
    }

    let days: Vec<DayGroup> = windows
        .iter()
        .map(|window| DayGroup {
            date: window.date,
            items: scheduled
                .iter()
                .filter(|(_, schedule)| schedule.intersects(window))
                .map(|(item, _)| (*item).clone())
                .collect(),
        })
        .collect();

    debug!(days = days.len(), skipped = skipped.len(), "grouped planning items by day");
    Ok(Grouped { days, skipped })
}

/// Stable chronological sort by start, falling back to end
///
/// Items without a usable timestamp keep their relative order after all others.
pub fn sort_by_start(items: &mut [PlanningItem]) {
    items.sort_by_cached_key(|item| {
        let key = Schedule::from_item(item).ok().and_then(|s| s.sort_key());
        (key.is_none(), key)
    });
}

fn skip_or_abort(err: AgendaError, options: &FilterOptions, skipped: &mut Vec<SkippedItem>) -> Result<()> {
    if options.strict {
        return Err(err);
    }
    match err {
        AgendaError::InvalidTimestamp { id, reason } => {
            warn!(%id, %reason, "skipping planning item with invalid timestamp");
            skipped.push(SkippedItem { id, reason });
            Ok(())
        }
        other => Err(other),
    }
}
