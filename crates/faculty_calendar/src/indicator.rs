use chrono::NaiveDateTime;

use crate::config::{LayoutConfig, WorkingHours};
use crate::temporal::minutes_since_midnight;

/// Returned by [`current_time_top`] when "now" is outside working hours.
pub const OUTSIDE_WORKING_HOURS: f32 = -1.0;

/// Vertical offset of the "now" line in the day view, or `None` when `now`
/// falls outside `[start_hour, end_hour]`.
///
/// Only the day view draws this line, so the day row height is used whatever
/// view is on screen.
pub fn current_time_offset(
    now: NaiveDateTime,
    working_hours: &WorkingHours,
    day_row_height: f32,
) -> Option<f32> {
    let minutes = minutes_since_midnight(now);
    let start = working_hours.start_minutes() as f32;
    let end = working_hours.end_minutes() as f32;

    if minutes < start || minutes > end {
        return None;
    }

    Some((minutes - start) / 60.0 * day_row_height)
}

/// [`current_time_offset`] for a whole config, flattened to the `-1`
/// sentinel.
pub fn current_time_top(now: NaiveDateTime, config: &LayoutConfig) -> f32 {
    current_time_offset(now, &config.working_hours, config.row_heights.day)
        .unwrap_or(OUTSIDE_WORKING_HOURS)
}
