//! Overlap clustering, column packing and geometry for one column of events.

mod cluster;
mod columns;
mod geometry;

pub use cluster::{cluster_events, sort_by_start, OverlapCluster};
pub use columns::{assign_columns, ColumnAssignment};
pub use geometry::{geometry, list_geometry};

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use tracing::trace;

use crate::config::LayoutConfig;
use crate::model::{Event, PositionedEvent, ViewMode};

/// Anything with a half-open `[start, end)` extent on the time grid.
pub trait TimeSpan {
    fn start(&self) -> NaiveDateTime;
    fn end(&self) -> NaiveDateTime;

    fn span_minutes(&self) -> f32 {
        (self.end() - self.start()).num_seconds() as f32 / 60.0
    }
}

impl TimeSpan for Event {
    fn start(&self) -> NaiveDateTime {
        self.start
    }

    fn end(&self) -> NaiveDateTime {
        self.end
    }
}

impl<T: TimeSpan + ?Sized> TimeSpan for &T {
    fn start(&self) -> NaiveDateTime {
        (**self).start()
    }

    fn end(&self) -> NaiveDateTime {
        (**self).end()
    }
}

/// The part of an event that falls on one calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DaySlice<'a> {
    pub event: &'a Event,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl<'a> DaySlice<'a> {
    /// Clips `event` to `[day 00:00, day + 1 00:00)`. `None` if nothing of
    /// it is left, e.g. an event that ends exactly at the day's midnight.
    pub fn clip(event: &'a Event, day: NaiveDate) -> Option<Self> {
        let day_start = day.and_time(NaiveTime::MIN);
        let day_end = day_start + Duration::days(1);

        let start = event.start.max(day_start);
        let end = event.end.min(day_end);
        (start < end).then_some(Self { event, start, end })
    }
}

impl TimeSpan for DaySlice<'_> {
    fn start(&self) -> NaiveDateTime {
        self.start
    }

    fn end(&self) -> NaiveDateTime {
        self.end
    }
}

/// Lays out one column's worth of events (a day, or a month cell).
///
/// Output is ordered by start time. List view skips clustering and gives
/// every event the same full-width row.
#[profiling::function]
pub fn layout_events<'a>(
    events: &[&'a Event],
    view: ViewMode,
    config: &LayoutConfig,
) -> Vec<PositionedEvent<'a>> {
    if !view.uses_columns() {
        let row = list_geometry(config);
        return sort_by_start(events)
            .into_iter()
            .map(|event| PositionedEvent {
                event,
                column: 0,
                total_columns: 1,
                geometry: row,
            })
            .collect();
    }

    pack(events, |event| event, view, config)
}

/// Like [`layout_events`], but first clips every event to `day` so that a
/// span carried over from the previous evening (or running into the next
/// morning) only occupies the hours it covers on this day.
///
/// Events that do not touch `day` at all are dropped.
#[profiling::function]
pub fn layout_day_events<'a>(
    events: &[&'a Event],
    day: NaiveDate,
    view: ViewMode,
    config: &LayoutConfig,
) -> Vec<PositionedEvent<'a>> {
    if !view.uses_columns() {
        return layout_events(events, view, config);
    }

    let slices: Vec<DaySlice<'a>> = events
        .iter()
        .filter_map(|&event| DaySlice::clip(event, day))
        .collect();
    pack(&slices, |slice| slice.event, view, config)
}

fn pack<'a, T, F>(
    spans: &[T],
    event_of: F,
    view: ViewMode,
    config: &LayoutConfig,
) -> Vec<PositionedEvent<'a>>
where
    T: TimeSpan + Copy,
    F: Fn(T) -> &'a Event,
{
    let clusters = cluster_events(spans);
    let mut positioned = Vec::with_capacity(spans.len());

    for cluster in &clusters {
        let assignment = assign_columns(&cluster.events);
        trace!(
            "cluster of {} events packed into {} columns",
            cluster.len(),
            assignment.total_columns
        );

        for (&span, &column) in cluster.events.iter().zip(&assignment.columns) {
            positioned.push(PositionedEvent {
                event: event_of(span),
                column,
                total_columns: assignment.total_columns,
                geometry: geometry(&span, column, assignment.total_columns, view, config),
            });
        }
    }

    positioned
}
