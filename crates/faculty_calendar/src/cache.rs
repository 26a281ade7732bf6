use chrono::NaiveDate;
use hashbrown::HashMap;
use tracing::trace;

use crate::model::ViewMode;
use crate::temporal::{
    month_dates, month_start, week_dates, week_start, AsDate, CalendarDate, DAYS_PER_WEEK,
};

#[derive(Debug, Clone)]
enum CachedGrid {
    Week([NaiveDate; DAYS_PER_WEEK]),
    Month {
        today: NaiveDate,
        cells: Vec<CalendarDate>,
    },
}

/// Memo of week and month grids, owned by whoever drives the views.
///
/// Entries are keyed by the grid's first day and the view mode, so every date
/// inside the same week (or month) hits the same entry.
#[derive(Debug, Default)]
pub struct GridCache {
    grids: HashMap<(NaiveDate, ViewMode), CachedGrid>,
}

impl GridCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn week(&mut self, d: impl AsDate) -> [NaiveDate; DAYS_PER_WEEK] {
        let anchor = week_start(d);
        let entry = self
            .grids
            .entry((anchor, ViewMode::Week))
            .or_insert_with(|| {
                trace!("grid cache miss: week of {anchor}");
                CachedGrid::Week(week_dates(anchor))
            });

        match entry {
            CachedGrid::Week(dates) => *dates,
            CachedGrid::Month { .. } => week_dates(anchor),
        }
    }

    /// The month grid around `d`. `today` is part of the cached value, so a
    /// new day invalidates the entry.
    pub fn month(&mut self, d: impl AsDate, today: NaiveDate) -> &[CalendarDate] {
        let anchor = month_start(d);
        let key = (anchor, ViewMode::Month);

        let stale = !matches!(
            self.grids.get(&key),
            Some(CachedGrid::Month { today: cached, .. }) if *cached == today
        );
        if stale {
            trace!("grid cache miss: month of {anchor}");
            self.grids.insert(
                key,
                CachedGrid::Month {
                    today,
                    cells: month_dates(anchor, today),
                },
            );
        }

        match self.grids.get(&key) {
            Some(CachedGrid::Month { cells, .. }) => cells.as_slice(),
            _ => &[],
        }
    }

    /// Drops every grid whose first day lies more than `max_days` from
    /// `center`.
    pub fn prune_around(&mut self, center: NaiveDate, max_days: i64) {
        self.grids
            .retain(|(anchor, _), _| (*anchor - center).num_days().abs() <= max_days);
    }

    pub fn clear(&mut self) {
        self.grids.clear();
    }

    pub fn len(&self) -> usize {
        self.grids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.grids.is_empty()
    }
}
