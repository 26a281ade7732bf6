use super::TimeSpan;
use crate::config::LayoutConfig;
use crate::model::{Geometry, ViewMode};
use crate::temporal::minutes_since_midnight;

const FULL_WIDTH: f32 = 100.0;

/// Maps a span and its column onto the time grid of `view`.
///
/// Offsets are measured from the start of the working-hours window; events
/// starting before it are pinned to the top. Height never drops below the
/// view's minimum so short slots stay clickable. List view has no time grid
/// and gets [`list_geometry`].
pub fn geometry<T: TimeSpan + ?Sized>(
    event: &T,
    column: usize,
    total_columns: usize,
    view: ViewMode,
    config: &LayoutConfig,
) -> Geometry {
    if !view.uses_columns() {
        return list_geometry(config);
    }

    let row_height = config.row_height(view);
    let window_start = config.working_hours.start_minutes() as f32;
    let relative_start = (minutes_since_midnight(event.start()) - window_start).max(0.0);

    let top = relative_start / 60.0 * row_height;
    let height = (event.span_minutes() / 60.0 * row_height).max(config.min_height(view));

    let width = FULL_WIDTH / total_columns.max(1) as f32;
    let left = column as f32 * width;

    Geometry {
        top,
        height,
        width,
        left,
        z_index: config.base_z + column as i32,
    }
}

/// Fixed-height, full-width row used by the agenda list.
pub fn list_geometry(config: &LayoutConfig) -> Geometry {
    Geometry {
        top: 0.0,
        height: config.row_height(ViewMode::List),
        width: FULL_WIDTH,
        left: 0.0,
        z_index: config.base_z,
    }
}
