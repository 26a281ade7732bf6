use std::cmp::Reverse;
use std::collections::BinaryHeap;

use chrono::NaiveDateTime;

use super::TimeSpan;

/// Column placement for every member of one cluster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnAssignment {
    /// `columns[i]` is the column of the i-th event passed in.
    pub columns: Vec<usize>,
    /// Number of columns opened; at least 1 for a non-empty cluster.
    pub total_columns: usize,
}

/// Packs a start-sorted cluster into the fewest columns.
///
/// Busy columns sit in a min-heap keyed by the end of their last event. Before
/// placing an event every column that has ended by its start is released, and
/// the lowest released index is reused so that identical input always lands
/// in identical columns. The number of columns opened equals the largest
/// number of members running at the same instant.
#[profiling::function]
pub fn assign_columns<T: TimeSpan>(cluster: &[T]) -> ColumnAssignment {
    let mut busy: BinaryHeap<Reverse<(NaiveDateTime, usize)>> = BinaryHeap::new();
    let mut free: BinaryHeap<Reverse<usize>> = BinaryHeap::new();
    let mut columns = Vec::with_capacity(cluster.len());
    let mut total_columns = 0;

    for event in cluster {
        while let Some(Reverse((end, column))) = busy.peek().copied() {
            if end > event.start() {
                break;
            }
            busy.pop();
            free.push(Reverse(column));
        }

        let column = match free.pop() {
            Some(Reverse(column)) => column,
            None => {
                total_columns += 1;
                total_columns - 1
            }
        };

        busy.push(Reverse((event.end(), column)));
        columns.push(column);
    }

    ColumnAssignment {
        columns,
        total_columns: total_columns.max(1),
    }
}
