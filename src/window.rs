use chrono::{DateTime, Datelike, Days, FixedOffset, LocalResult, NaiveDate, NaiveDateTime, Utc};
use tracing::debug;

use crate::config::WeekStart;
use crate::error::{AgendaError, Result};
use crate::timestamp::zone::Zone;

/// Inclusive instant range covering one calendar day in a zone
///
/// Bounds follow the wall clock: on DST transition days the span is 23 or 25
/// hours (minus one millisecond), not 24.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWindow {
    pub date: NaiveDate,
    pub day_start: DateTime<FixedOffset>,
    pub day_end: DateTime<FixedOffset>,
}

impl DateWindow {
    pub fn start_utc(&self) -> DateTime<Utc> {
        self.day_start.with_timezone(&Utc)
    }

    pub fn end_utc(&self) -> DateTime<Utc> {
        self.day_end.with_timezone(&Utc)
    }
}

/// Longest wall-clock gap a DST or offset change leaves inside one day
const MAX_GAP_MINUTES: i64 = 180;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Edge {
    Start,
    End,
}

/// Window for the day containing `reference` in `zone`
///
/// A missing reference means "now".
pub fn compute_window(reference: Option<DateTime<FixedOffset>>, zone: &Zone) -> Result<DateWindow> {
    let reference = reference.map_or_else(Utc::now, |r| r.with_timezone(&Utc));
    compute_day_window(zone.local_date(&reference), zone)
}

/// Window for a calendar date in `zone`
pub fn compute_day_window(date: NaiveDate, zone: &Zone) -> Result<DateWindow> {
    let midnight = date
        .and_hms_opt(0, 0, 0)
        .ok_or_else(|| AgendaError::InvalidWindow(format!("no midnight on {date}")))?;
    let last_milli = date
        .and_hms_milli_opt(23, 59, 59, 999)
        .ok_or_else(|| AgendaError::InvalidWindow(format!("no end of day on {date}")))?;

    let day_start = resolve_local(zone, midnight, Edge::Start)?;
    let day_end = resolve_local(zone, last_milli, Edge::End)?;
    if day_start > day_end {
        return Err(AgendaError::InvalidWindow(format!(
            "day {date} in {zone} has start after end"
        )));
    }

    debug!(%date, %zone, start = %day_start, end = %day_end, "computed day window");
    Ok(DateWindow {
        date,
        day_start,
        day_end,
    })
}

/// Resolve a local wall-clock bound to an instant.
///
/// Gaps move toward the inside of the day one minute at a time, for at most
/// `MAX_GAP_MINUTES`; a bound with no instant in that reach (a skipped day, or
/// a time outside the representable range) is an invalid window. Ambiguous
/// times pick the earliest instant for the start and the latest for the end.
fn resolve_local(zone: &Zone, naive: NaiveDateTime, edge: Edge) -> Result<DateTime<FixedOffset>> {
    let step = match edge {
        Edge::Start => chrono::Duration::minutes(1),
        Edge::End => chrono::Duration::minutes(-1),
    };

    let mut candidate = naive;
    for _ in 0..=MAX_GAP_MINUTES {
        if candidate.date() != naive.date() {
            break;
        }
        match zone.from_local(&candidate) {
            LocalResult::Single(dt) => return Ok(dt),
            LocalResult::Ambiguous(earliest, latest) => {
                return Ok(match edge {
                    Edge::Start => earliest,
                    Edge::End => latest,
                })
            }
            LocalResult::None => candidate += step,
        }
    }

    Err(AgendaError::InvalidWindow(format!(
        "{} does not exist in {zone}",
        naive.date()
    )))
}

/// The seven dates of the week containing `date`
///
/// Weeks that run past the supported calendar range are an invalid window.
pub fn week_dates(date: NaiveDate, week_start: WeekStart) -> Result<Vec<NaiveDate>> {
    let days_from_start = (date.weekday().num_days_from_monday() + 7
        - week_start.weekday().num_days_from_monday())
        % 7;
    let out_of_range = || AgendaError::InvalidWindow(format!("week of {date} is outside the supported date range"));

    let first = date
        .checked_sub_days(Days::new(u64::from(days_from_start)))
        .ok_or_else(out_of_range)?;
    let days: Vec<NaiveDate> = first.iter_days().take(7).collect();
    if days.len() != 7 {
        return Err(out_of_range());
    }
    Ok(days)
}

/// Every date from `from` to `to`, inclusive
pub fn date_range(from: NaiveDate, to: NaiveDate) -> Result<Vec<NaiveDate>> {
    if from > to {
        return Err(AgendaError::InvalidWindow(format!(
            "range start {from} is after end {to}"
        )));
    }
    Ok(from.iter_days().take_while(|d| *d <= to).collect())
}
