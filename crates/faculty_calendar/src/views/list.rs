use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

use crate::config::LayoutConfig;
use crate::filter::{by_category, by_date_range};
use crate::layout::layout_events;
use crate::model::{CategoryFilter, Event, PositionedEvent, ViewMode};
use crate::temporal::date_key;

/// Agenda entries sharing one start date.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListSection<'a> {
    pub key: String,
    pub date: NaiveDate,
    pub events: Vec<PositionedEvent<'a>>,
}

/// Agenda for `[start, end)`, sorted by start and grouped per day. Every row
/// has the fixed list geometry.
pub fn layout_list<'a>(
    events: &'a [Event],
    start: NaiveDateTime,
    end: NaiveDateTime,
    filter: CategoryFilter,
    config: &LayoutConfig,
) -> Vec<ListSection<'a>> {
    let visible = by_category(by_date_range(events, start, end), filter);
    let mut sections: Vec<ListSection<'a>> = Vec::new();

    for row in layout_events(&visible, ViewMode::List, config) {
        let date = row.event.start.date();
        match sections.last_mut() {
            Some(section) if section.date == date => section.events.push(row),
            _ => sections.push(ListSection {
                key: date_key(date),
                date,
                events: vec![row],
            }),
        }
    }

    sections
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Category;
    use pretty_assertions::assert_eq;

    fn at(d: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 3, d)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap()
    }

    #[test]
    fn sections_group_by_start_date() {
        let events = vec![
            Event::new("c", "c", at(13, 9), at(13, 10), Category::Task).unwrap(),
            Event::new("a", "a", at(12, 14), at(12, 15), Category::Meeting).unwrap(),
            Event::new("b", "b", at(12, 9), at(12, 10), Category::Meeting).unwrap(),
            Event::new("out", "out", at(20, 9), at(20, 10), Category::Meeting).unwrap(),
        ];

        let sections = layout_list(
            &events,
            at(12, 0),
            at(14, 0),
            CategoryFilter::All,
            &LayoutConfig::default(),
        );

        let shape: Vec<(String, Vec<&str>)> = sections
            .iter()
            .map(|s| {
                (
                    s.key.clone(),
                    s.events.iter().map(|p| p.event.id.as_str()).collect(),
                )
            })
            .collect();
        assert_eq!(
            shape,
            vec![
                ("2025-03-12".to_owned(), vec!["b", "a"]),
                ("2025-03-13".to_owned(), vec!["c"]),
            ]
        );
    }
}
