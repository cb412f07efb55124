//! Geometry helpers for the desktop icon grid.
//!
//! Pure functions only: pointer-to-cell conversion, bounds checks, and occupancy.
//! The grid is responsive — cell metrics come from breakpoint tiers and are
//! recomputed whenever the viewport resizes, so persisted placements must be
//! re-validated against the bounds of the current tier before they are applied.

use std::collections::BTreeMap;

use crate::model::{AppId, GridCell, PointerPosition};

/// Viewport width at or below which the narrow tier applies.
pub const NARROW_BREAKPOINT_PX: i32 = 480;
/// Viewport width at or below which the medium tier applies.
pub const MEDIUM_BREAKPOINT_PX: i32 = 768;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Cell metrics for one responsive tier.
pub struct GridConfig {
    pub cell_width: i32,
    pub cell_height: i32,
    pub gap: i32,
    pub padding: i32,
}

impl GridConfig {
    /// Selects the tier for the current viewport width.
    pub fn for_viewport_width(viewport_width: i32) -> Self {
        if viewport_width <= NARROW_BREAKPOINT_PX {
            Self {
                cell_width: 80,
                cell_height: 100,
                gap: 6,
                padding: 10,
            }
        } else if viewport_width <= MEDIUM_BREAKPOINT_PX {
            Self {
                cell_width: 90,
                cell_height: 110,
                gap: 8,
                padding: 15,
            }
        } else {
            Self {
                cell_width: 100,
                cell_height: 120,
                gap: 10,
                padding: 20,
            }
        }
    }

    fn cell_pitch_x(&self) -> i32 {
        self.cell_width + self.gap
    }

    fn cell_pitch_y(&self) -> i32 {
        self.cell_height + self.gap
    }

    /// Converts a pointer position (relative to the desktop origin) to a cell.
    /// Coordinates left of / above the padding clamp to column/row 1.
    pub fn cell_at(&self, pointer: PointerPosition) -> GridCell {
        let rel_x = pointer.x - self.padding;
        let rel_y = pointer.y - self.padding;
        GridCell {
            column: (rel_x.div_euclid(self.cell_pitch_x()) + 1).max(1),
            row: (rel_y.div_euclid(self.cell_pitch_y()) + 1).max(1),
        }
    }

    /// Top-left pixel origin of a cell, relative to the desktop origin.
    pub fn cell_origin(&self, cell: GridCell) -> (i32, i32) {
        (
            self.padding + (cell.column - 1) * self.cell_pitch_x(),
            self.padding + (cell.row - 1) * self.cell_pitch_y(),
        )
    }

    /// Grid bounds that fit inside a desktop area of the given size.
    pub fn bounds(&self, desktop_width: i32, desktop_height: i32) -> GridBounds {
        GridBounds {
            columns: ((desktop_width - self.padding * 2) / self.cell_pitch_x()).max(0),
            rows: ((desktop_height - self.padding * 2) / self.cell_pitch_y()).max(0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Maximum addressable columns/rows for the current grid.
pub struct GridBounds {
    pub columns: i32,
    pub rows: i32,
}

impl GridBounds {
    /// True when the cell lies inside the grid.
    pub fn contains(&self, cell: GridCell) -> bool {
        cell.column >= 1 && cell.column <= self.columns && cell.row >= 1 && cell.row <= self.rows
    }
}

/// True when `cell` is already held by an icon other than `dragged`.
pub fn is_cell_occupied(
    positions: &BTreeMap<AppId, GridCell>,
    cell: GridCell,
    dragged: AppId,
) -> bool {
    positions
        .iter()
        .any(|(app_id, held)| *app_id != dragged && *held == cell)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn wide() -> GridConfig {
        GridConfig::for_viewport_width(1440)
    }

    #[test]
    fn tier_selection_follows_breakpoints() {
        assert_eq!(GridConfig::for_viewport_width(480).cell_width, 80);
        assert_eq!(GridConfig::for_viewport_width(768).cell_width, 90);
        assert_eq!(GridConfig::for_viewport_width(769).cell_width, 100);
    }

    #[test]
    fn cell_at_maps_padding_origin_to_first_cell() {
        let grid = wide();
        let cell = grid.cell_at(PointerPosition { x: 21, y: 21 });
        assert_eq!(cell, GridCell { column: 1, row: 1 });
    }

    #[test]
    fn cell_at_steps_by_cell_pitch() {
        let grid = wide();
        // pitch = 100 + 10 gap; second column starts at padding + 110.
        let cell = grid.cell_at(PointerPosition { x: 20 + 110, y: 20 + 130 * 2 });
        assert_eq!(cell, GridCell { column: 2, row: 3 });
    }

    #[test]
    fn cell_at_clamps_negative_coordinates_to_first_cell() {
        let grid = wide();
        let cell = grid.cell_at(PointerPosition { x: -200, y: 4 });
        assert_eq!(cell, GridCell { column: 1, row: 1 });
    }

    #[test]
    fn cell_origin_round_trips_cell_at() {
        let grid = wide();
        let cell = GridCell { column: 4, row: 2 };
        let (x, y) = grid.cell_origin(cell);
        assert_eq!(grid.cell_at(PointerPosition { x, y }), cell);
    }

    #[test]
    fn bounds_reject_cells_outside_grid() {
        let bounds = wide().bounds(1000, 600);
        // (1000 - 40) / 110 = 8 columns, (600 - 40) / 130 = 4 rows.
        assert_eq!(bounds, GridBounds { columns: 8, rows: 4 });
        assert!(bounds.contains(GridCell { column: 8, row: 4 }));
        assert!(!bounds.contains(GridCell { column: 9, row: 4 }));
        assert!(!bounds.contains(GridCell { column: 0, row: 1 }));
    }

    #[test]
    fn occupancy_excludes_the_dragged_icon_itself() {
        let mut positions = BTreeMap::new();
        positions.insert(AppId::About, GridCell { column: 2, row: 2 });
        positions.insert(AppId::Resume, GridCell { column: 3, row: 1 });

        let cell = GridCell { column: 2, row: 2 };
        assert!(!is_cell_occupied(&positions, cell, AppId::About));
        assert!(is_cell_occupied(&positions, cell, AppId::Resume));
    }
}
