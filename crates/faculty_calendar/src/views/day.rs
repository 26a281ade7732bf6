use chrono::{NaiveDate, NaiveDateTime};
use tracing::debug;

use crate::config::LayoutConfig;
use crate::filter::{by_category, on_day};
use crate::indicator::current_time_offset;
use crate::layout::layout_day_events;
use crate::model::{CategoryFilter, Event, ViewMode};
use crate::views::DayLayout;

/// Lays out a single day at day-view scale.
///
/// `now` drives both the today highlight and the "now" line.
#[profiling::function]
pub fn layout_day<'a>(
    events: &'a [Event],
    day: NaiveDate,
    now: NaiveDateTime,
    filter: CategoryFilter,
    config: &LayoutConfig,
) -> DayLayout<'a> {
    let visible = by_category(on_day(events, day), filter);
    let positioned = layout_day_events(&visible, day, ViewMode::Day, config);
    let is_today = day == now.date();

    let now_offset = if is_today {
        current_time_offset(now, &config.working_hours, config.row_heights.day)
    } else {
        None
    };

    debug!(
        "day {day}: {} of {} events visible",
        positioned.len(),
        events.len()
    );

    DayLayout {
        date: day,
        is_today,
        events: positioned,
        now_offset,
    }
}
