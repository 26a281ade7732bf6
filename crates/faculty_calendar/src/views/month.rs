use chrono::NaiveDate;
use serde::Serialize;

use crate::config::LayoutConfig;
use crate::filter::{by_category, on_day};
use crate::layout::layout_day_events;
use crate::model::{CategoryFilter, Event, PositionedEvent, ViewMode};
use crate::temporal::{month_dates, CalendarDate};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthCell<'a> {
    pub day: CalendarDate,
    pub events: Vec<PositionedEvent<'a>>,
    /// Events that did not fit in the cell ("+N more").
    pub hidden: usize,
}

/// The 42-cell month grid with each in-month cell's events laid out at month
/// scale. Lead and trail days from neighbouring months are left empty, and at
/// most `max_visible` events are kept per cell.
#[profiling::function]
pub fn layout_month<'a>(
    events: &'a [Event],
    anchor: NaiveDate,
    today: NaiveDate,
    filter: CategoryFilter,
    max_visible: usize,
    config: &LayoutConfig,
) -> Vec<MonthCell<'a>> {
    month_dates(anchor, today)
        .into_iter()
        .map(|day| {
            if !day.is_current_month {
                return MonthCell {
                    day,
                    events: Vec::new(),
                    hidden: 0,
                };
            }

            let visible = by_category(on_day(events, day.date), filter);
            let mut positioned = layout_day_events(&visible, day.date, ViewMode::Month, config);
            let hidden = positioned.len().saturating_sub(max_visible);
            positioned.truncate(max_visible);

            MonthCell {
                day,
                events: positioned,
                hidden,
            }
        })
        .collect()
}
