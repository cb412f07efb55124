//! Preference persistence for icon placement and wallpaper choice.
//!
//! Keys are versioned so a future layout change can abandon stale payloads
//! instead of migrating them. Loads are forgiving: corrupt payloads fall back to
//! defaults, and saved icon cells that no longer fit the current grid (the
//! viewport may have shrunk since last visit) are dropped individually so the
//! affected icons return to their default cells.

use std::collections::BTreeMap;

use platform_prefs::PrefsStore;
use serde::{Deserialize, Serialize};

use crate::{
    desktop_grid::GridBounds,
    model::{AppId, GridCell},
};

const ICON_POSITIONS_KEY: &str = "portfolio.icons.v1";
const WALLPAPER_KEY: &str = "portfolio.wallpaper.v1";

/// Wallpaper used when nothing is persisted.
pub const DEFAULT_WALLPAPER_ID: &str = "aurora";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
struct IconPositionsPayload {
    positions: BTreeMap<AppId, GridCell>,
}

/// Loads persisted icon placements, keeping only cells inside `bounds`.
pub fn load_icon_positions(store: PrefsStore, bounds: GridBounds) -> BTreeMap<AppId, GridCell> {
    let payload = store.load_typed_or(ICON_POSITIONS_KEY, IconPositionsPayload::default());
    payload
        .positions
        .into_iter()
        .filter(|(_, cell)| bounds.contains(*cell))
        .collect()
}

/// Persists the icon placement map.
///
/// # Errors
///
/// Returns an error when the backing store is unavailable or the write fails.
pub fn save_icon_positions(
    store: PrefsStore,
    positions: &BTreeMap<AppId, GridCell>,
) -> Result<(), String> {
    let payload = IconPositionsPayload {
        positions: positions.clone(),
    };
    store.save_typed(ICON_POSITIONS_KEY, &payload)
}

/// Loads the persisted wallpaper id, defaulting to [`DEFAULT_WALLPAPER_ID`].
pub fn load_wallpaper(store: PrefsStore) -> String {
    store
        .load_typed(WALLPAPER_KEY)
        .unwrap_or_else(|| DEFAULT_WALLPAPER_ID.to_string())
}

/// Persists the wallpaper id.
///
/// # Errors
///
/// Returns an error when the backing store is unavailable or the write fails.
pub fn save_wallpaper(store: PrefsStore, wallpaper_id: &str) -> Result<(), String> {
    store.save_typed(WALLPAPER_KEY, &wallpaper_id)
}
