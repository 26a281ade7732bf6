use std::fmt;
use std::str::FromStr;

use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};
use strum_macros::EnumIter;

use crate::error::Error;

/// What kind of booking an event represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Meeting,
    Event,
    Task,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Meeting => "meeting",
            Category::Event => "event",
            Category::Task => "task",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "meeting" => Ok(Category::Meeting),
            "event" => Ok(Category::Event),
            "task" => Ok(Category::Task),
            _ => Err(Error::UnknownCategory(s.to_owned())),
        }
    }
}

/// Category selection as offered by the calendar toolbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn matches(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(c) => *c == category,
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(CategoryFilter::All);
        }
        s.parse().map(CategoryFilter::Only)
    }
}

impl From<Category> for CategoryFilter {
    fn from(category: Category) -> Self {
        CategoryFilter::Only(category)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    Day,
    Week,
    Month,
    List,
}

impl ViewMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewMode::Day => "day",
            ViewMode::Week => "week",
            ViewMode::Month => "month",
            ViewMode::List => "list",
        }
    }

    /// Whether events in this view are stacked into overlap columns.
    pub fn uses_columns(&self) -> bool {
        !matches!(self, ViewMode::List)
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ViewMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "day" => Ok(ViewMode::Day),
            "week" => Ok(ViewMode::Week),
            "month" => Ok(ViewMode::Month),
            "list" => Ok(ViewMode::List),
            _ => Err(Error::UnknownViewMode(s.to_owned())),
        }
    }
}

/// A booked slot on somebody's calendar.
///
/// `start` and `end` are local wall-clock times. Values built through
/// [`Event::new`] or [`crate::parse::ingest`] always satisfy `end > start`;
/// the layout code relies on that and does not check it again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Event {
    pub id: String,
    pub title: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub category: Category,
    pub location: Option<String>,
    pub attendees: Vec<String>,
}

impl Event {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        start: NaiveDateTime,
        end: NaiveDateTime,
        category: Category,
    ) -> Result<Self, Error> {
        let id = id.into();
        if end <= start {
            return Err(Error::InvalidRange { id, start, end });
        }

        Ok(Self {
            id,
            title: title.into(),
            start,
            end,
            category,
            location: None,
            attendees: Vec::new(),
        })
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn with_attendees<I, S>(mut self, attendees: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.attendees = attendees.into_iter().map(Into::into).collect();
        self
    }

    pub fn duration(&self) -> Duration {
        self.end - self.start
    }

    /// Length in fractional minutes.
    pub fn duration_minutes(&self) -> f32 {
        self.duration().num_seconds() as f32 / 60.0
    }

    /// Half-open interval intersection. Events that only touch at an
    /// endpoint do not overlap.
    pub fn overlaps(&self, other: &Event) -> bool {
        self.start < other.end && self.end > other.start
    }
}

/// Where an event sits inside its day column.
///
/// `top` and `height` are pixels, `width` and `left` are percentages of the
/// column width.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Geometry {
    pub top: f32,
    pub height: f32,
    pub width: f32,
    pub left: f32,
    pub z_index: i32,
}

/// An event together with its computed column and geometry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PositionedEvent<'a> {
    pub event: &'a Event,
    pub column: usize,
    pub total_columns: usize,
    pub geometry: Geometry,
}
