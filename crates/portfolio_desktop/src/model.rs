//! Core data model for the portfolio desktop compositor.
//!
//! Window records are created once per configured application at shell startup and
//! are never destroyed afterwards; closing a window only toggles its flags. All
//! decision logic operates on this model — views project it, they never read state
//! back out of the DOM.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::apps;

/// Default window width when an app definition does not override it.
pub const DEFAULT_WINDOW_WIDTH: i32 = 1200;
/// Default window height when an app definition does not override it.
pub const DEFAULT_WINDOW_HEIGHT: i32 = 800;
/// First z-index handed out; staggered upwards at seeding, monotonic afterwards.
pub const BASE_Z_INDEX: u32 = 1000;
/// Offset applied per app when computing staggered startup positions.
pub const STAGGER_STEP_PX: i32 = 40;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
/// Stable identifier for a configured application window.
pub enum AppId {
    About,
    Projects,
    Resume,
    Contact,
    RoiCalculator,
    Trivia,
    Settings,
}

impl AppId {
    /// String form used for DOM attributes, persistence keys, and the content loader.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::About => "about",
            Self::Projects => "projects",
            Self::Resume => "resume",
            Self::Contact => "contact",
            Self::RoiCalculator => "roi-calculator",
            Self::Trivia => "trivia",
            Self::Settings => "settings",
        }
    }
}

impl std::fmt::Display for AppId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Pointer coordinates in desktop-viewport pixels.
pub struct PointerPosition {
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Window geometry: top-left origin plus size, in pixels.
pub struct WindowRect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl WindowRect {
    /// Returns the rect translated by `(dx, dy)`.
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..self
        }
    }

    /// Clamps width/height up to the given minimums.
    pub fn clamped_min(self, min_w: i32, min_h: i32) -> Self {
        Self {
            w: self.w.max(min_w),
            h: self.h.max(min_h),
            ..self
        }
    }

    /// Clamps the origin so the window cannot leave through the top/left edge.
    /// The bottom/right edge is deliberately unconstrained.
    pub fn clamped_origin(self) -> Self {
        Self {
            x: self.x.max(0),
            y: self.y.max(0),
            ..self
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
/// A 1-based (column, row) slot in the desktop icon grid.
pub struct GridCell {
    pub column: i32,
    pub row: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// One window record per configured application; toggled, never destroyed.
pub struct WindowRecord {
    pub app_id: AppId,
    pub is_open: bool,
    pub is_minimized: bool,
    pub is_maximized: bool,
    pub rect: WindowRect,
    /// Geometry snapshot taken on maximize so restore reverts exactly.
    pub restore_rect: Option<WindowRect>,
    pub z_index: u32,
}

impl WindowRecord {
    /// True when this record is eligible to be the frontmost window.
    pub fn is_stacking(&self) -> bool {
        self.is_open && !self.is_minimized
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Authoritative compositor state: the single source of truth mutated only by the
/// reducer in [`crate::reducer`].
pub struct DesktopState {
    pub windows: Vec<WindowRecord>,
    /// Next z-index to hand out; increases monotonically, never reused downward.
    pub next_z: u32,
    /// At most one desktop icon is selected at a time.
    pub selected_icon: Option<AppId>,
    /// Persisted icon placements; apps without an entry use their default cell.
    pub icon_positions: BTreeMap<AppId, GridCell>,
    pub wallpaper_id: String,
}

impl Default for DesktopState {
    fn default() -> Self {
        Self {
            windows: Vec::new(),
            next_z: BASE_Z_INDEX,
            selected_icon: None,
            icon_positions: BTreeMap::new(),
            wallpaper_id: "aurora".to_string(),
        }
    }
}

impl DesktopState {
    /// Seeds one record per configured app with staggered centered positions.
    /// Insertion order determines the initial z ordering (first-configured lowest).
    pub fn with_configured_apps(viewport: WindowRect) -> Self {
        let mut state = Self::default();
        for (index, def) in apps::configured_apps().iter().enumerate() {
            let index = index as i32;
            let center_x = ((viewport.w - def.default_width) / 2).max(50);
            let center_y = ((viewport.h - def.default_height) / 2).max(50);
            state.windows.push(WindowRecord {
                app_id: def.app_id,
                is_open: false,
                is_minimized: false,
                is_maximized: false,
                rect: WindowRect {
                    x: center_x + index * STAGGER_STEP_PX,
                    y: center_y + index * STAGGER_STEP_PX,
                    w: def.default_width,
                    h: def.default_height,
                },
                restore_rect: None,
                z_index: state.next_z,
            });
            state.next_z += 1;
        }
        state
    }

    /// Returns the window record for `app_id`, if configured.
    pub fn window(&self, app_id: AppId) -> Option<&WindowRecord> {
        self.windows.iter().find(|w| w.app_id == app_id)
    }

    /// Highest z-index among open, non-minimized windows.
    pub fn top_z(&self) -> Option<u32> {
        self.windows
            .iter()
            .filter(|w| w.is_stacking())
            .map(|w| w.z_index)
            .max()
    }

    /// The single frontmost window: open, not minimized, highest z-index.
    ///
    /// A minimized window is never active, so minimizing the frontmost window
    /// promotes the next-highest stacking window.
    pub fn active_app(&self) -> Option<AppId> {
        self.windows
            .iter()
            .filter(|w| w.is_stacking())
            .max_by_key(|w| w.z_index)
            .map(|w| w.app_id)
    }

    /// True when `app_id` is the frontmost window.
    pub fn is_active(&self, app_id: AppId) -> bool {
        self.active_app() == Some(app_id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Active window drag session. Created on header pointer-down, destroyed on
/// pointer-up; the drag itself only begins past the movement threshold.
pub struct WindowDragSession {
    pub app_id: AppId,
    pub pointer_start: PointerPosition,
    pub rect_start: WindowRect,
    /// False while armed but below the movement threshold (a click, not a drag).
    pub moving: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Active window resize session from the bottom-right affordance.
pub struct WindowResizeSession {
    pub app_id: AppId,
    pub pointer_start: PointerPosition,
    pub rect_start: WindowRect,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
/// Ephemeral pointer interaction state; exists only during an active gesture.
pub struct InteractionState {
    pub window_drag: Option<WindowDragSession>,
    pub window_resize: Option<WindowResizeSession>,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn seeded() -> DesktopState {
        DesktopState::with_configured_apps(WindowRect {
            x: 0,
            y: 0,
            w: 1920,
            h: 1080,
        })
    }

    #[test]
    fn seeding_creates_one_record_per_configured_app() {
        let state = seeded();
        assert_eq!(state.windows.len(), apps::configured_apps().len());
        assert!(state.windows.iter().all(|w| !w.is_open));
    }

    #[test]
    fn seeding_staggers_positions_and_z_in_configured_order() {
        let state = seeded();
        for pair in state.windows.windows(2) {
            assert!(pair[0].z_index < pair[1].z_index);
            assert_eq!(pair[1].rect.x - pair[0].rect.x >= 0, true);
        }
        assert_eq!(state.windows[0].z_index, BASE_Z_INDEX);
    }

    #[test]
    fn active_app_ignores_minimized_windows() {
        let mut state = seeded();
        state.windows[0].is_open = true;
        state.windows[1].is_open = true;
        state.windows[1].z_index = 5000;
        assert_eq!(state.active_app(), Some(state.windows[1].app_id));

        state.windows[1].is_minimized = true;
        assert_eq!(state.active_app(), Some(state.windows[0].app_id));
    }

    #[test]
    fn clamped_origin_never_negative() {
        let rect = WindowRect {
            x: -40,
            y: -3,
            w: 300,
            h: 200,
        }
        .clamped_origin();
        assert_eq!((rect.x, rect.y), (0, 0));
    }
}
