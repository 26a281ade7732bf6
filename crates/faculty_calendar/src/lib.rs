//! Calendar layout engine for the faculty appointment booking calendar.
//!
//! Booking records enter through [`parse`], which rejects anything with an
//! unreadable date or an empty range. From there the pipeline is
//! filter → overlap clusters → column packing → geometry, assembled per
//! surface in [`views`]. Every function is pure: callers capture one `now`
//! per pass and hand it to both the views and [`stats::aggregate`].

mod cache;
mod config;
mod error;
mod model;

pub mod filter;
pub mod indicator;
pub mod layout;
pub mod parse;
pub mod stats;
pub mod temporal;
pub mod timezone;
pub mod views;

pub use cache::GridCache;
pub use config::{LayoutConfig, MinHeightTable, RowHeightTable, WorkingHours, DEFAULT_BASE_Z};
pub use error::{Error, Result};
pub use indicator::{current_time_offset, current_time_top, OUTSIDE_WORKING_HOURS};
pub use layout::{layout_day_events, layout_events, DaySlice, TimeSpan};
pub use model::{Category, CategoryFilter, Event, Geometry, PositionedEvent, ViewMode};
pub use parse::{ingest, ingest_json, Ingested, RawEvent, RawTime};
pub use stats::{aggregate, CategoryCounts, EventStats};
pub use temporal::{date_key, month_dates, normalize, week_dates, CalendarDate};
pub use timezone::TimeZoneChoice;
pub use views::{
    layout_day, layout_list, layout_month, layout_week, layout_week_at, DayLayout, ListSection,
    MonthCell, WeekLayout,
};
