//! Static application configuration consumed at shell startup.
//!
//! This table is the compositor's only notion of "what apps exist": it seeds the
//! window registry, orders the dock, and lays out the default icon grid. The
//! shell is not extensible beyond this list.

use crate::model::{AppId, GridCell, DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// One configured application entry.
pub struct AppDefinition {
    pub app_id: AppId,
    pub title: &'static str,
    /// Icon glyph identifier resolved by the stylesheet.
    pub icon_id: &'static str,
    pub default_width: i32,
    pub default_height: i32,
}

const CONFIGURED_APPS: &[AppDefinition] = &[
    AppDefinition {
        app_id: AppId::About,
        title: "About Me",
        icon_id: "user-circle",
        default_width: DEFAULT_WINDOW_WIDTH,
        default_height: DEFAULT_WINDOW_HEIGHT,
    },
    AppDefinition {
        app_id: AppId::Projects,
        title: "Projects",
        icon_id: "folder",
        default_width: DEFAULT_WINDOW_WIDTH,
        default_height: DEFAULT_WINDOW_HEIGHT,
    },
    AppDefinition {
        app_id: AppId::Resume,
        title: "Resume",
        icon_id: "file-alt",
        default_width: DEFAULT_WINDOW_WIDTH,
        default_height: DEFAULT_WINDOW_HEIGHT,
    },
    AppDefinition {
        app_id: AppId::Contact,
        title: "Contact",
        icon_id: "envelope",
        default_width: 1100,
        default_height: 760,
    },
    AppDefinition {
        app_id: AppId::RoiCalculator,
        title: "ROI Calculator",
        icon_id: "calculator",
        default_width: 1000,
        default_height: 720,
    },
    AppDefinition {
        app_id: AppId::Trivia,
        title: "Trivia",
        icon_id: "gamepad",
        default_width: 1000,
        default_height: 700,
    },
    AppDefinition {
        app_id: AppId::Settings,
        title: "Settings",
        icon_id: "cog",
        default_width: 1000,
        default_height: 700,
    },
];

/// Dock entries in display order.
const DOCK_ORDER: &[AppId] = &[
    AppId::About,
    AppId::Projects,
    AppId::Resume,
    AppId::Contact,
    AppId::RoiCalculator,
    AppId::Trivia,
    AppId::Settings,
];

/// All configured applications in registry/seed order.
pub fn configured_apps() -> &'static [AppDefinition] {
    CONFIGURED_APPS
}

/// Dock item ordering.
pub fn dock_order() -> &'static [AppId] {
    DOCK_ORDER
}

/// Returns the definition for `app_id`.
pub fn definition(app_id: AppId) -> &'static AppDefinition {
    CONFIGURED_APPS
        .iter()
        .find(|def| def.app_id == app_id)
        .expect("every AppId variant is configured")
}

/// Default icon cell for an app when no persisted placement exists: a single
/// left-hand column, top to bottom in configured order.
pub fn default_icon_cell(app_id: AppId) -> GridCell {
    let index = CONFIGURED_APPS
        .iter()
        .position(|def| def.app_id == app_id)
        .expect("every AppId variant is configured") as i32;
    GridCell {
        column: 1,
        row: index + 1,
    }
}
