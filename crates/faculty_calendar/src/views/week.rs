use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

use crate::config::LayoutConfig;
use crate::filter::{by_category, on_day};
use crate::layout::layout_day_events;
use crate::model::{CategoryFilter, Event, ViewMode};
use crate::temporal::{week_dates, DAYS_PER_WEEK};
use crate::views::DayLayout;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeekLayout<'a> {
    pub days: [DayLayout<'a>; DAYS_PER_WEEK],
}

impl<'a> WeekLayout<'a> {
    pub fn dates(&self) -> [NaiveDate; DAYS_PER_WEEK] {
        std::array::from_fn(|i| self.days[i].date)
    }

    pub fn event_count(&self) -> usize {
        self.days.iter().map(|d| d.events.len()).sum()
    }
}

/// Seven Sunday-start day columns at week-view scale. Each day is packed on
/// its own; the "now" line is left to the day view.
#[profiling::function]
pub fn layout_week<'a>(
    events: &'a [Event],
    anchor: NaiveDate,
    today: NaiveDate,
    filter: CategoryFilter,
    config: &LayoutConfig,
) -> WeekLayout<'a> {
    let dates = week_dates(anchor);

    let days = dates.map(|date| {
        let visible = by_category(on_day(events, date), filter);
        DayLayout {
            date,
            is_today: date == today,
            events: layout_day_events(&visible, date, ViewMode::Week, config),
            now_offset: None,
        }
    });

    WeekLayout { days }
}

/// Convenience for callers holding a captured `now`.
pub fn layout_week_at<'a>(
    events: &'a [Event],
    now: NaiveDateTime,
    filter: CategoryFilter,
    config: &LayoutConfig,
) -> WeekLayout<'a> {
    layout_week(events, now.date(), now.date(), filter, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Category;
    use chrono::Weekday;
    use chrono::Datelike;
    use pretty_assertions::assert_eq;

    fn ev(id: &str, day: u32, from: u32, to: u32) -> Event {
        let d = NaiveDate::from_ymd_opt(2025, 3, day).unwrap();
        Event::new(
            id,
            id,
            d.and_hms_opt(from, 0, 0).unwrap(),
            d.and_hms_opt(to, 0, 0).unwrap(),
            Category::Meeting,
        )
        .unwrap()
    }

    #[test]
    fn events_land_on_their_weekday() {
        let events = vec![
            ev("sun", 9, 9, 10),
            ev("wed-a", 12, 9, 11),
            ev("wed-b", 12, 10, 12),
            ev("next-week", 16, 9, 10),
        ];
        let wednesday = NaiveDate::from_ymd_opt(2025, 3, 12).unwrap();
        let week = layout_week(&events, wednesday, wednesday, CategoryFilter::All, &LayoutConfig::default());

        assert_eq!(week.dates()[0].weekday(), Weekday::Sun);
        assert_eq!(week.event_count(), 3);
        assert_eq!(week.days[0].events[0].event.id, "sun");
        assert!(week.days[3].is_today);
        assert_eq!(
            week.days[3]
                .events
                .iter()
                .map(|p| (p.column, p.total_columns))
                .collect::<Vec<_>>(),
            vec![(0, 2), (1, 2)]
        );
        assert!(week.days.iter().all(|d| d.now_offset.is_none()));
    }

    #[test]
    fn week_rows_use_week_height() {
        let events = vec![ev("a", 12, 9, 10)];
        let config = LayoutConfig::default();
        let now = NaiveDate::from_ymd_opt(2025, 3, 12)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();
        let week = layout_week_at(&events, now, CategoryFilter::All, &config);
        let g = week.days[3].events[0].geometry;
        assert_eq!(g.top, config.row_heights.week);
        assert_eq!(g.height, config.row_heights.week);
    }

    #[test]
    fn overnight_event_shows_its_own_hours_on_both_days() {
        // Tuesday 22:00 until Wednesday 01:00
        let tuesday = NaiveDate::from_ymd_opt(2025, 3, 11).unwrap();
        let late = Event::new(
            "late",
            "late",
            tuesday.and_hms_opt(22, 0, 0).unwrap(),
            tuesday.and_hms_opt(22, 0, 0).unwrap() + chrono::Duration::hours(3),
            Category::Event,
        )
        .unwrap();
        let events = vec![late];
        let config = LayoutConfig::default();
        let week = layout_week(&events, tuesday, tuesday, CategoryFilter::All, &config);

        let tue = week.days[2].events[0].geometry;
        assert_eq!(tue.top, 14.0 * config.row_heights.week);
        assert_eq!(tue.height, 2.0 * config.row_heights.week);

        let wed = week.days[3].events[0].geometry;
        assert_eq!(wed.top, 0.0);
        assert_eq!(wed.height, config.row_heights.week);
    }
}
