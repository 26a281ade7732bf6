//! Assembles the layout pipeline for each calendar surface.

mod day;
mod list;
mod month;
mod week;

pub use day::layout_day;
pub use list::{layout_list, ListSection};
pub use month::{layout_month, MonthCell};
pub use week::{layout_week, layout_week_at, WeekLayout};

use chrono::NaiveDate;
use serde::Serialize;

use crate::model::PositionedEvent;

/// One day column, ready to draw.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayLayout<'a> {
    pub date: NaiveDate,
    pub is_today: bool,
    pub events: Vec<PositionedEvent<'a>>,
    /// Offset of the "now" line; only set by the day view, on today.
    pub now_offset: Option<f32>,
}

impl DayLayout<'_> {
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
