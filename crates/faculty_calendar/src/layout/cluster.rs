use chrono::NaiveDateTime;

use super::TimeSpan;

/// A run of spans that transitively overlap, ordered by start time.
///
/// Only lives for the duration of one layout pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlapCluster<T> {
    pub events: Vec<T>,
    /// Latest end time of any member.
    pub end: NaiveDateTime,
}

impl<T: TimeSpan> OverlapCluster<T> {
    fn start_with(event: T) -> Self {
        Self {
            end: event.end(),
            events: vec![event],
        }
    }

    fn push(&mut self, event: T) {
        self.end = self.end.max(event.end());
        self.events.push(event);
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

/// Sorts `events` by start time, keeping input order on ties.
pub fn sort_by_start<T: TimeSpan + Copy>(events: &[T]) -> Vec<T> {
    let mut sorted = events.to_vec();
    sorted.sort_by_key(|ev| ev.start());
    sorted
}

/// Partitions `events` into connected components of the overlap graph.
///
/// A sweep in start order tracks the latest end seen in the open cluster. An
/// event starting at or after that point cannot overlap any member, so it
/// opens the next cluster. Touching endpoints do not join clusters.
#[profiling::function]
pub fn cluster_events<T: TimeSpan + Copy>(events: &[T]) -> Vec<OverlapCluster<T>> {
    let mut clusters: Vec<OverlapCluster<T>> = Vec::new();

    for event in sort_by_start(events) {
        match clusters.last_mut() {
            Some(current) if event.start() < current.end => current.push(event),
            _ => clusters.push(OverlapCluster::start_with(event)),
        }
    }

    clusters
}
