use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{Error, Result};
use crate::model::ViewMode;

const DEFAULT_START_HOUR: u32 = 8;
const DEFAULT_END_HOUR: u32 = 20;

const DEFAULT_DAY_ROW_HEIGHT: f32 = 60.0;
const DEFAULT_WEEK_ROW_HEIGHT: f32 = 48.0;
const DEFAULT_MONTH_ROW_HEIGHT: f32 = 24.0;
const DEFAULT_LIST_ROW_HEIGHT: f32 = 56.0;

const DEFAULT_DAY_MIN_HEIGHT: f32 = 20.0;
const DEFAULT_WEEK_MIN_HEIGHT: f32 = 16.0;
const DEFAULT_MONTH_MIN_HEIGHT: f32 = 14.0;

pub const DEFAULT_BASE_Z: i32 = 10;

/// The `[start_hour, end_hour]` band that the time grid covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkingHours {
    pub start_hour: u32,
    pub end_hour: u32,
}

impl WorkingHours {
    pub fn new(start_hour: u32, end_hour: u32) -> Result<Self> {
        let hours = Self {
            start_hour,
            end_hour,
        };
        hours.validate()?;
        Ok(hours)
    }

    pub fn validate(&self) -> Result<()> {
        if self.start_hour >= self.end_hour || self.end_hour > 24 {
            return Err(Error::InvalidWorkingHours {
                start: self.start_hour,
                end: self.end_hour,
            });
        }
        Ok(())
    }

    pub fn start_minutes(&self) -> u32 {
        self.start_hour * 60
    }

    pub fn end_minutes(&self) -> u32 {
        self.end_hour * 60
    }
}

impl Default for WorkingHours {
    fn default() -> Self {
        Self {
            start_hour: DEFAULT_START_HOUR,
            end_hour: DEFAULT_END_HOUR,
        }
    }
}

/// Pixel height of one hour row, per view mode.
///
/// Each calling surface has its own table: the day view draws taller rows
/// than the week view does.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RowHeightTable {
    pub day: f32,
    pub week: f32,
    pub month: f32,
    /// Fixed row height of the agenda list.
    pub list: f32,
}

impl RowHeightTable {
    pub fn get(&self, mode: ViewMode) -> f32 {
        match mode {
            ViewMode::Day => self.day,
            ViewMode::Week => self.week,
            ViewMode::Month => self.month,
            ViewMode::List => self.list,
        }
    }

    pub fn day_surface() -> Self {
        Self::default()
    }

    /// The compact table used where seven day columns share the width.
    pub fn week_surface() -> Self {
        Self {
            day: DEFAULT_WEEK_ROW_HEIGHT,
            ..Self::default()
        }
    }
}

impl Default for RowHeightTable {
    fn default() -> Self {
        Self {
            day: DEFAULT_DAY_ROW_HEIGHT,
            week: DEFAULT_WEEK_ROW_HEIGHT,
            month: DEFAULT_MONTH_ROW_HEIGHT,
            list: DEFAULT_LIST_ROW_HEIGHT,
        }
    }
}

/// Smallest height an event block may shrink to, per view mode.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MinHeightTable {
    pub day: f32,
    pub week: f32,
    pub month: f32,
}

impl MinHeightTable {
    pub fn get(&self, mode: ViewMode) -> f32 {
        match mode {
            ViewMode::Day => self.day,
            ViewMode::Week => self.week,
            ViewMode::Month => self.month,
            ViewMode::List => 0.0,
        }
    }
}

impl Default for MinHeightTable {
    fn default() -> Self {
        Self {
            day: DEFAULT_DAY_MIN_HEIGHT,
            week: DEFAULT_WEEK_MIN_HEIGHT,
            month: DEFAULT_MONTH_MIN_HEIGHT,
        }
    }
}

/// Everything the layout pass needs besides the events themselves.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutConfig {
    #[serde(default)]
    pub working_hours: WorkingHours,
    #[serde(default)]
    pub row_heights: RowHeightTable,
    #[serde(default)]
    pub min_heights: MinHeightTable,
    #[serde(default = "default_base_z")]
    pub base_z: i32,
}

fn default_base_z() -> i32 {
    DEFAULT_BASE_Z
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            working_hours: WorkingHours::default(),
            row_heights: RowHeightTable::default(),
            min_heights: MinHeightTable::default(),
            base_z: DEFAULT_BASE_Z,
        }
    }
}

impl LayoutConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        let config: LayoutConfig = serde_json::from_str(json)?;
        config.working_hours.validate()?;
        info!(
            "layout config loaded: hours {}..{}, day row {}px",
            config.working_hours.start_hour,
            config.working_hours.end_hour,
            config.row_heights.day
        );
        Ok(config)
    }

    pub fn with_working_hours(mut self, working_hours: WorkingHours) -> Self {
        self.working_hours = working_hours;
        self
    }

    pub fn row_height(&self, mode: ViewMode) -> f32 {
        self.row_heights.get(mode)
    }

    pub fn min_height(&self, mode: ViewMode) -> f32 {
        self.min_heights.get(mode)
    }
}
