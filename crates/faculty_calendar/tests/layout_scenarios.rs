//! End-to-end checks of the layout pipeline through the public API.

use std::sync::Once;

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime, Weekday};
use faculty_calendar::{
    aggregate, current_time_top, date_key, ingest_json, layout_day, layout_events, month_dates,
    normalize, week_dates, Category, CategoryFilter, Event, LayoutConfig, TimeZoneChoice,
    ViewMode, WorkingHours, OUTSIDE_WORKING_HOURS,
};
use pretty_assertions::assert_eq;

static TRACING_INIT: Once = Once::new();

fn init_tracing() {
    TRACING_INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::from_default_env()
                    .add_directive("faculty_calendar=debug".parse().unwrap()),
            )
            .with_test_writer()
            .init();
    });
}

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn at(date: NaiveDate, h: u32, m: u32) -> NaiveDateTime {
    date.and_hms_opt(h, m, 0).unwrap()
}

fn meeting(id: &str, date: NaiveDate, from: (u32, u32), to: (u32, u32)) -> Event {
    Event::new(
        id,
        id,
        at(date, from.0, from.1),
        at(date, to.0, to.1),
        Category::Meeting,
    )
    .unwrap()
}

#[test]
fn overlapping_pair_splits_the_column() {
    init_tracing();
    let day = ymd(2025, 3, 12);
    let events = vec![
        meeting("A", day, (9, 0), (10, 0)),
        meeting("B", day, (9, 30), (10, 30)),
    ];

    let layout = layout_day(
        &events,
        day,
        at(day, 12, 0),
        CategoryFilter::All,
        &LayoutConfig::default(),
    );
    let got: Vec<_> = layout
        .events
        .iter()
        .map(|p| {
            (
                p.event.id.as_str(),
                p.total_columns,
                p.geometry.width,
                p.geometry.left,
            )
        })
        .collect();

    assert_eq!(got, vec![("A", 2, 50.0, 0.0), ("B", 2, 50.0, 50.0)]);
}

#[test]
fn touching_event_gets_full_width() {
    init_tracing();
    let day = ymd(2025, 3, 12);
    let events = vec![
        meeting("A", day, (9, 0), (10, 0)),
        meeting("B", day, (10, 0), (11, 0)),
        meeting("C", day, (9, 15), (9, 45)),
    ];

    let layout = layout_day(
        &events,
        day,
        at(day, 12, 0),
        CategoryFilter::All,
        &LayoutConfig::default(),
    );
    let got: Vec<_> = layout
        .events
        .iter()
        .map(|p| (p.event.id.as_str(), p.column, p.total_columns, p.geometry.width))
        .collect();

    assert_eq!(
        got,
        vec![("A", 0, 2, 50.0), ("C", 1, 2, 50.0), ("B", 0, 1, 100.0)]
    );
}

#[test]
fn month_starting_on_wednesday() {
    // October 2025 starts on a Wednesday and has 31 days
    let first = ymd(2025, 10, 1);
    assert_eq!(first.weekday(), Weekday::Wed);

    let grid = month_dates(ymd(2025, 10, 17), ymd(2025, 10, 17));
    assert_eq!(grid.len(), 42);
    assert_eq!(grid[0].date, ymd(2025, 9, 28));
    assert_eq!(grid[0].date.weekday(), Weekday::Sun);
    assert_eq!(grid[41].date, ymd(2025, 11, 8));
    assert_eq!(grid[41].date.weekday(), Weekday::Sat);

    let days: Vec<u32> = grid
        .iter()
        .filter(|c| c.is_current_month)
        .map(|c| c.date.day())
        .collect();
    assert_eq!(days, (1..=31).collect::<Vec<_>>());
}

#[test]
fn stats_for_todays_meetings_and_next_weeks_events() {
    init_tracing();
    let today = ymd(2025, 3, 12);
    let next_week = ymd(2025, 3, 17);
    let events = vec![
        meeting("m1", today, (9, 0), (10, 0)),
        meeting("m2", today, (11, 0), (12, 0)),
        meeting("m3", today, (14, 0), (15, 0)),
        Event::new("e1", "e1", at(next_week, 9, 0), at(next_week, 10, 0), Category::Event).unwrap(),
        Event::new("e2", "e2", at(next_week, 13, 0), at(next_week, 14, 0), Category::Event).unwrap(),
    ];

    let stats = aggregate(&events, at(today, 8, 0));
    assert_eq!(stats.today.meeting, 3);
    assert_eq!(stats.all.event, 2);
    assert_eq!(stats.upcoming.meeting, 3);
    assert_eq!(stats.upcoming.event, 2);
    assert_eq!(stats.this_week.event, 0);
}

#[test]
fn now_indicator_respects_working_hours() {
    let day = ymd(2025, 3, 12);
    let config = LayoutConfig::default().with_working_hours(WorkingHours::new(8, 20).unwrap());

    assert_eq!(current_time_top(at(day, 6, 0), &config), OUTSIDE_WORKING_HOURS);
    assert!(current_time_top(at(day, 10, 0), &config) >= 0.0);
}

#[test]
fn no_column_holds_two_overlapping_events() {
    init_tracing();
    let day = ymd(2025, 3, 12);

    // a deterministic spread of starts and lengths in 15 minute steps
    let events: Vec<Event> = (0..40u32)
        .map(|i| {
            let start = at(day, 8, 0) + Duration::minutes(((i * 37) % 48 * 15) as i64);
            let length = Duration::minutes((15 + (i * 53) % 8 * 15) as i64);
            Event::new(format!("e{i}"), "slot", start, start + length, Category::Meeting).unwrap()
        })
        .collect();
    let refs: Vec<&Event> = events.iter().collect();

    let laid = layout_events(&refs, ViewMode::Day, &LayoutConfig::default());
    assert_eq!(laid.len(), events.len());

    for (i, a) in laid.iter().enumerate() {
        assert!(a.column < a.total_columns);
        for b in &laid[i + 1..] {
            if a.column == b.column && a.event.overlaps(b.event) {
                panic!("{} and {} share column {}", a.event.id, b.event.id, a.column);
            }
        }
    }

    // identical input yields identical placement
    let again = layout_events(&refs, ViewMode::Day, &LayoutConfig::default());
    assert_eq!(laid, again);
}

#[test]
fn normalize_and_date_key_ignore_time_of_day() {
    let base = at(ymd(2024, 2, 29), 0, 0);
    for minutes in [0, 1, 59, 720, 1439] {
        let d = base + Duration::minutes(minutes);
        assert_eq!(normalize(normalize(d)), normalize(d));
        assert_eq!(normalize(d).time(), NaiveTime::MIN);
        assert_eq!(date_key(d), date_key(base));
    }
}

#[test]
fn every_week_is_seven_days_from_sunday() {
    let mut d = ymd(2025, 1, 1);
    while d.year() == 2025 {
        let week = week_dates(d);
        assert_eq!(week[0].weekday(), Weekday::Sun);
        assert!(week.windows(2).all(|w| w[1] - w[0] == Duration::days(1)));
        assert!(week.contains(&d));
        d = d.succ_opt().unwrap();
    }
}

#[test]
fn ingested_records_lay_out_like_built_events() {
    init_tracing();
    let json = r#"[
        { "id": "A", "title": "Advising", "start": "2025-03-12T09:00", "end": "2025-03-12T10:00" },
        { "id": "B", "title": "Thesis", "start": "2025-03-12T09:30", "end": "2025-03-12T10:30", "category": "event" },
        { "id": "broken", "title": "?", "start": "2025-03-12T11:00", "end": "2025-03-12T11:00" }
    ]"#;

    let ingested = ingest_json(json, &TimeZoneChoice::utc()).unwrap();
    assert_eq!(ingested.rejected.len(), 1);

    let day = ymd(2025, 3, 12);
    let layout = layout_day(
        &ingested.events,
        day,
        at(day, 9, 0),
        CategoryFilter::All,
        &LayoutConfig::default(),
    );
    assert_eq!(layout.events.len(), 2);
    assert!(layout.events.iter().all(|p| p.total_columns == 2));
    assert_eq!(layout.now_offset, Some(LayoutConfig::default().row_heights.day));
}
