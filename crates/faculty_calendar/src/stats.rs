use chrono::{Datelike, Duration, NaiveDateTime};
use serde::Serialize;
use strum::IntoEnumIterator;

use crate::model::{Category, Event};
use crate::temporal::{normalize, week_start, DAYS_PER_WEEK};

const UPCOMING_DAYS: i64 = 7;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CategoryCounts {
    pub meeting: usize,
    pub event: usize,
    pub task: usize,
}

impl CategoryCounts {
    pub fn get(&self, category: Category) -> usize {
        match category {
            Category::Meeting => self.meeting,
            Category::Event => self.event,
            Category::Task => self.task,
        }
    }

    pub fn total(&self) -> usize {
        self.meeting + self.event + self.task
    }

    pub fn iter(&self) -> impl Iterator<Item = (Category, usize)> + '_ {
        Category::iter().map(move |c| (c, self.get(c)))
    }

    fn add(&mut self, category: Category) {
        match category {
            Category::Meeting => self.meeting += 1,
            Category::Event => self.event += 1,
            Category::Task => self.task += 1,
        }
    }
}

/// Badge counts for the calendar header.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct EventStats {
    pub all: CategoryCounts,
    pub today: CategoryCounts,
    pub this_week: CategoryCounts,
    pub this_month: CategoryCounts,
    /// Events starting between today's midnight and seven days later.
    pub upcoming: CategoryCounts,
}

/// Counts `events` per category and per time bucket around `reference`.
///
/// Buckets are decided by each event's start.
pub fn aggregate<'a, I>(events: I, reference: NaiveDateTime) -> EventStats
where
    I: IntoIterator<Item = &'a Event>,
{
    let today = reference.date();
    let week_from = week_start(today);
    let week_to = week_from + Duration::days(DAYS_PER_WEEK as i64);
    let upcoming_from = normalize(reference);
    let upcoming_to = upcoming_from + Duration::days(UPCOMING_DAYS);

    let mut stats = EventStats::default();
    for event in events {
        let day = event.start.date();
        stats.all.add(event.category);

        if day == today {
            stats.today.add(event.category);
        }
        if day >= week_from && day < week_to {
            stats.this_week.add(event.category);
        }
        if day.year() == today.year() && day.month() == today.month() {
            stats.this_month.add(event.category);
        }
        if event.start >= upcoming_from && event.start <= upcoming_to {
            stats.upcoming.add(event.category);
        }
    }

    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn ev(id: &str, date: NaiveDate, hour: u32, category: Category) -> Event {
        Event::new(
            id,
            id,
            date.and_hms_opt(hour, 0, 0).unwrap(),
            date.and_hms_opt(hour + 1, 0, 0).unwrap(),
            category,
        )
        .unwrap()
    }

    #[test]
    fn empty_input_is_all_zero() {
        let now = NaiveDate::from_ymd_opt(2025, 3, 12)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();
        let no_events: Vec<Event> = Vec::new();
        assert_eq!(aggregate(&no_events, now), EventStats::default());
    }

    #[test]
    fn buckets_around_a_wednesday() {
        let d = |day| NaiveDate::from_ymd_opt(2025, 3, day).unwrap();
        // 2025-03-12 is a Wednesday; its week is Mar 9..=15
        let now = d(12).and_hms_opt(15, 0, 0).unwrap();
        let events = vec![
            ev("earlier-today", d(12), 9, Category::Meeting),
            ev("sunday", d(9), 9, Category::Task),
            ev("saturday", d(15), 9, Category::Event),
            ev("next-sunday", d(16), 9, Category::Event),
            ev("in-seven-days", d(19), 0, Category::Meeting),
            ev("after-upcoming", d(19), 10, Category::Meeting),
            ev("last-month", NaiveDate::from_ymd_opt(2025, 2, 28).unwrap(), 9, Category::Task),
        ];

        let stats = aggregate(&events, now);
        assert_eq!(stats.all.total(), 7);
        assert_eq!(stats.today, CategoryCounts { meeting: 1, event: 0, task: 0 });
        assert_eq!(
            stats.today.iter().collect::<Vec<_>>(),
            vec![(Category::Meeting, 1), (Category::Event, 0), (Category::Task, 0)]
        );
        assert_eq!(stats.this_week, CategoryCounts { meeting: 1, event: 1, task: 1 });
        assert_eq!(stats.this_month, CategoryCounts { meeting: 3, event: 2, task: 1 });
        // today's midnight through the 19th at midnight, inclusive
        assert_eq!(stats.upcoming, CategoryCounts { meeting: 2, event: 2, task: 0 });
    }
}
