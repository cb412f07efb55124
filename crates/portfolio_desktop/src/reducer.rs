//! Reducer actions, side-effect intents, and transition logic for the compositor.
//!
//! [`reduce_desktop`] is the authoritative state transition engine: every window,
//! icon, and preference mutation flows through it. Other components never write
//! z-indexes or flags directly — in particular, focus changes always go through
//! [`DesktopAction::BringToFront`] so the "exactly one frontmost" invariant holds
//! between handler invocations.

use std::collections::BTreeMap;

use thiserror::Error;

use crate::{
    desktop_grid::{is_cell_occupied, GridBounds},
    model::{
        AppId, DesktopState, GridCell, InteractionState, PointerPosition, WindowDragSession,
        WindowRecord, WindowRect, WindowResizeSession,
    },
    window_manager,
};

#[derive(Debug, Clone, PartialEq)]
/// Actions accepted by [`reduce_desktop`] to mutate [`DesktopState`].
pub enum DesktopAction {
    /// Open an application window and bring it to the front.
    OpenApp { app_id: AppId },
    /// Close an application window. Idempotent when already closed.
    CloseApp { app_id: AppId },
    /// Minimize an open window; its z-index is left untouched.
    MinimizeApp { app_id: AppId },
    /// Un-minimize a window and bring it to the front.
    RestoreApp { app_id: AppId },
    /// Raise a window to the top of the stack and mark it active.
    BringToFront { app_id: AppId },
    /// Maximize into the viewport, or restore the snapshotted geometry.
    ToggleMaximize { app_id: AppId, viewport: WindowRect },
    /// Dock icon click: open / restore / close / bring-to-front, depending on state.
    ToggleDockApp { app_id: AppId },
    /// Close the frontmost window (keyboard shortcut path).
    CloseActive,
    /// Minimize the frontmost window (keyboard shortcut path).
    MinimizeActive,
    /// Arm a window drag from a header press.
    BeginWindowDrag {
        app_id: AppId,
        pointer: PointerPosition,
    },
    /// Pointer movement during an armed or active window drag.
    UpdateWindowDrag { pointer: PointerPosition },
    /// Pointer-up ends the drag session implicitly.
    EndWindowDrag,
    /// Begin resizing from the bottom-right handle.
    BeginWindowResize {
        app_id: AppId,
        pointer: PointerPosition,
    },
    /// Pointer movement during an active resize.
    UpdateWindowResize { pointer: PointerPosition },
    /// Pointer-up ends the resize session implicitly.
    EndWindowResize,
    /// Select a desktop icon; selection is exclusive.
    SelectIcon { app_id: AppId },
    /// Clicking empty desktop space deselects all icons.
    DeselectIcons,
    /// Commit an icon drop. Out-of-bounds or occupied targets are silently
    /// ignored — the icon stays at its pre-drag cell, which is the desired UX.
    MoveIcon {
        app_id: AppId,
        cell: GridCell,
        bounds: GridBounds,
    },
    /// Switch the desktop wallpaper.
    SetWallpaper { wallpaper_id: String },
    /// Apply persisted preferences at boot. Positions are assumed to be already
    /// re-validated against the current grid bounds.
    HydratePrefs {
        icon_positions: BTreeMap<AppId, GridCell>,
        wallpaper_id: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Side-effect intents emitted by [`reduce_desktop`] for the shell to execute.
pub enum RuntimeEffect {
    /// Ask the content loader for this window's body markup.
    LoadContent(AppId),
    /// Persist the icon placement map.
    PersistIconPositions,
    /// Persist the wallpaper choice.
    PersistWallpaper,
    /// One-shot dock bounce when an app opens.
    DockOpenPulse(AppId),
    /// One-shot dock feedback when a dock toggle closes its app.
    DockClosePulse(AppId),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Reducer errors. Logged at the dispatch boundary; never crash the shell.
pub enum ReducerError {
    /// The action referenced an app with no registered window record.
    #[error("unknown app `{0}`")]
    UnknownApp(AppId),
}

/// Applies a [`DesktopAction`] to the compositor state and collects side effects.
///
/// Operations are total over expected edge cases: closing an already-closed
/// window, restoring a non-minimized one, or dropping an icon on an occupied
/// cell all succeed without mutating anything.
///
/// # Errors
///
/// Returns [`ReducerError::UnknownApp`] when an action references an app id that
/// was never seeded into the registry.
pub fn reduce_desktop(
    state: &mut DesktopState,
    interaction: &mut InteractionState,
    action: DesktopAction,
) -> Result<Vec<RuntimeEffect>, ReducerError> {
    let mut effects = Vec::new();
    match action {
        DesktopAction::OpenApp { app_id } => {
            let window = find_window_mut(state, app_id)?;
            let was_closed = !window.is_open;
            window.is_open = true;
            window.is_minimized = false;
            bring_to_front_internal(state, app_id)?;
            if was_closed {
                effects.push(RuntimeEffect::LoadContent(app_id));
                effects.push(RuntimeEffect::DockOpenPulse(app_id));
            }
        }
        DesktopAction::CloseApp { app_id } => {
            let window = find_window_mut(state, app_id)?;
            // The z slot is freed implicitly: a non-stacking window no longer
            // participates in max-z queries. Nothing is renumbered.
            if window.is_maximized {
                if let Some(rect) = window.restore_rect.take() {
                    window.rect = rect;
                }
                window.is_maximized = false;
            }
            window.is_open = false;
            window.is_minimized = false;
        }
        DesktopAction::MinimizeApp { app_id } => {
            let window = find_window_mut(state, app_id)?;
            if window.is_open {
                window.is_minimized = true;
            }
        }
        DesktopAction::RestoreApp { app_id } => {
            let window = find_window_mut(state, app_id)?;
            if window.is_open {
                window.is_minimized = false;
                bring_to_front_internal(state, app_id)?;
            }
        }
        DesktopAction::BringToFront { app_id } => {
            bring_to_front_internal(state, app_id)?;
        }
        DesktopAction::ToggleMaximize { app_id, viewport } => {
            let window = find_window_mut(state, app_id)?;
            if !window.is_open {
                return Ok(effects);
            }
            if window.is_maximized {
                if let Some(rect) = window.restore_rect.take() {
                    window.rect = rect;
                }
                window.is_maximized = false;
            } else {
                window.restore_rect = Some(window.rect);
                window.rect = viewport;
                window.is_maximized = true;
            }
            bring_to_front_internal(state, app_id)?;
        }
        DesktopAction::ToggleDockApp { app_id } => {
            let window = *find_window(state, app_id)?;
            if !window.is_open {
                effects.extend(reduce_desktop(
                    state,
                    interaction,
                    DesktopAction::OpenApp { app_id },
                )?);
            } else if window.is_minimized {
                effects.extend(reduce_desktop(
                    state,
                    interaction,
                    DesktopAction::RestoreApp { app_id },
                )?);
            } else if state.is_active(app_id) {
                // Source behavior preserved: clicking the dock icon of the
                // frontmost window closes it rather than minimizing.
                effects.extend(reduce_desktop(
                    state,
                    interaction,
                    DesktopAction::CloseApp { app_id },
                )?);
                effects.push(RuntimeEffect::DockClosePulse(app_id));
            } else {
                effects.extend(reduce_desktop(
                    state,
                    interaction,
                    DesktopAction::BringToFront { app_id },
                )?);
            }
        }
        DesktopAction::CloseActive => {
            if let Some(app_id) = state.active_app() {
                effects.extend(reduce_desktop(
                    state,
                    interaction,
                    DesktopAction::CloseApp { app_id },
                )?);
            }
        }
        DesktopAction::MinimizeActive => {
            if let Some(app_id) = state.active_app() {
                effects.extend(reduce_desktop(
                    state,
                    interaction,
                    DesktopAction::MinimizeApp { app_id },
                )?);
            }
        }
        DesktopAction::BeginWindowDrag { app_id, pointer } => {
            let window = find_window(state, app_id)?;
            // Maximized windows are not draggable.
            if !window.is_open || window.is_maximized {
                return Ok(effects);
            }
            let rect_start = window.rect;
            // A drag always implies focus, even before the threshold is crossed.
            bring_to_front_internal(state, app_id)?;
            interaction.window_drag = Some(WindowDragSession {
                app_id,
                pointer_start: pointer,
                rect_start,
                moving: false,
            });
        }
        DesktopAction::UpdateWindowDrag { pointer } => {
            if let Some(session) = interaction.window_drag.as_mut() {
                if !session.moving
                    && window_manager::exceeds_drag_threshold(session.pointer_start, pointer)
                {
                    session.moving = true;
                }
                if session.moving {
                    let session = session.clone();
                    let window = find_window_mut(state, session.app_id)?;
                    window.rect = window_manager::dragged_rect(
                        session.rect_start,
                        session.pointer_start,
                        pointer,
                    );
                }
            }
        }
        DesktopAction::EndWindowDrag => {
            interaction.window_drag = None;
        }
        DesktopAction::BeginWindowResize { app_id, pointer } => {
            let window = find_window(state, app_id)?;
            if !window.is_open || window.is_maximized {
                return Ok(effects);
            }
            let rect_start = window.rect;
            bring_to_front_internal(state, app_id)?;
            interaction.window_resize = Some(WindowResizeSession {
                app_id,
                pointer_start: pointer,
                rect_start,
            });
        }
        DesktopAction::UpdateWindowResize { pointer } => {
            if let Some(session) = interaction.window_resize.clone() {
                let window = find_window_mut(state, session.app_id)?;
                window.rect = window_manager::resized_rect(
                    session.rect_start,
                    session.pointer_start,
                    pointer,
                );
            }
        }
        DesktopAction::EndWindowResize => {
            interaction.window_resize = None;
        }
        DesktopAction::SelectIcon { app_id } => {
            state.selected_icon = Some(app_id);
        }
        DesktopAction::DeselectIcons => {
            state.selected_icon = None;
        }
        DesktopAction::MoveIcon {
            app_id,
            cell,
            bounds,
        } => {
            if bounds.contains(cell) && !is_cell_occupied(&state.icon_positions, cell, app_id) {
                state.icon_positions.insert(app_id, cell);
                effects.push(RuntimeEffect::PersistIconPositions);
            }
        }
        DesktopAction::SetWallpaper { wallpaper_id } => {
            state.wallpaper_id = wallpaper_id;
            effects.push(RuntimeEffect::PersistWallpaper);
        }
        DesktopAction::HydratePrefs {
            icon_positions,
            wallpaper_id,
        } => {
            state.icon_positions = icon_positions;
            state.wallpaper_id = wallpaper_id;
        }
    }
    Ok(effects)
}

fn find_window(state: &DesktopState, app_id: AppId) -> Result<&WindowRecord, ReducerError> {
    state
        .windows
        .iter()
        .find(|w| w.app_id == app_id)
        .ok_or(ReducerError::UnknownApp(app_id))
}

fn find_window_mut(
    state: &mut DesktopState,
    app_id: AppId,
) -> Result<&mut WindowRecord, ReducerError> {
    state
        .windows
        .iter_mut()
        .find(|w| w.app_id == app_id)
        .ok_or(ReducerError::UnknownApp(app_id))
}

/// Assigns `max(z over stacking windows) + 1` to the target. Every call hands
/// out a fresh value, so repeated raises of the same window keep increasing its
/// z-index — slots are never reused downward.
fn bring_to_front_internal(state: &mut DesktopState, app_id: AppId) -> Result<(), ReducerError> {
    let window = find_window(state, app_id)?;
    if !window.is_open || window.is_minimized {
        return Ok(());
    }
    let top = state.top_z().map_or(state.next_z, |z| z + 1);
    let next = top.max(state.next_z);
    let window = find_window_mut(state, app_id)?;
    window.z_index = next;
    state.next_z = next + 1;
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::BASE_Z_INDEX;

    fn viewport() -> WindowRect {
        WindowRect {
            x: 0,
            y: 0,
            w: 1920,
            h: 1080,
        }
    }

    fn seeded() -> (DesktopState, InteractionState) {
        (
            DesktopState::with_configured_apps(viewport()),
            InteractionState::default(),
        )
    }

    fn bounds() -> GridBounds {
        GridBounds {
            columns: 10,
            rows: 6,
        }
    }

    fn dispatch(
        state: &mut DesktopState,
        interaction: &mut InteractionState,
        action: DesktopAction,
    ) -> Vec<RuntimeEffect> {
        reduce_desktop(state, interaction, action).expect("action applies")
    }

    fn open(state: &mut DesktopState, interaction: &mut InteractionState, app_id: AppId) {
        dispatch(state, interaction, DesktopAction::OpenApp { app_id });
    }

    #[test]
    fn open_requests_content_and_raises_window() {
        let (mut state, mut ui) = seeded();
        let effects = dispatch(
            &mut state,
            &mut ui,
            DesktopAction::OpenApp {
                app_id: AppId::About,
            },
        );

        assert!(effects.contains(&RuntimeEffect::LoadContent(AppId::About)));
        assert!(effects.contains(&RuntimeEffect::DockOpenPulse(AppId::About)));
        let window = state.window(AppId::About).unwrap();
        assert!(window.is_open && !window.is_minimized);
        assert_eq!(state.active_app(), Some(AppId::About));
    }

    #[test]
    fn reopening_an_open_window_does_not_reload_content() {
        let (mut state, mut ui) = seeded();
        open(&mut state, &mut ui, AppId::About);
        let effects = dispatch(
            &mut state,
            &mut ui,
            DesktopAction::OpenApp {
                app_id: AppId::About,
            },
        );
        assert!(effects.is_empty());
    }

    #[test]
    fn windows_opened_in_order_stack_in_order() {
        let (mut state, mut ui) = seeded();
        open(&mut state, &mut ui, AppId::About);
        open(&mut state, &mut ui, AppId::Resume);
        open(&mut state, &mut ui, AppId::Contact);

        let z = |app| state.window(app).unwrap().z_index;
        assert!(z(AppId::About) < z(AppId::Resume));
        assert!(z(AppId::Resume) < z(AppId::Contact));
        assert_eq!(state.active_app(), Some(AppId::Contact));
    }

    #[test]
    fn bring_to_front_makes_lowest_window_the_new_maximum() {
        let (mut state, mut ui) = seeded();
        open(&mut state, &mut ui, AppId::About);
        open(&mut state, &mut ui, AppId::Resume);
        open(&mut state, &mut ui, AppId::Contact);

        dispatch(
            &mut state,
            &mut ui,
            DesktopAction::ToggleDockApp {
                app_id: AppId::About,
            },
        );

        let z = |app: AppId| state.window(app).unwrap().z_index;
        assert!(z(AppId::About) > z(AppId::Contact));
        assert_eq!(state.active_app(), Some(AppId::About));
    }

    #[test]
    fn repeated_bring_to_front_is_strictly_increasing() {
        let (mut state, mut ui) = seeded();
        open(&mut state, &mut ui, AppId::About);

        let mut seen = Vec::new();
        for _ in 0..4 {
            dispatch(
                &mut state,
                &mut ui,
                DesktopAction::BringToFront {
                    app_id: AppId::About,
                },
            );
            seen.push(state.window(AppId::About).unwrap().z_index);
        }
        assert!(seen.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn at_most_one_window_is_active() {
        let (mut state, mut ui) = seeded();
        for app_id in [AppId::About, AppId::Resume, AppId::Contact] {
            open(&mut state, &mut ui, app_id);
        }
        dispatch(
            &mut state,
            &mut ui,
            DesktopAction::MinimizeApp {
                app_id: AppId::Contact,
            },
        );

        let active: Vec<AppId> = state
            .windows
            .iter()
            .filter(|w| state.is_active(w.app_id))
            .map(|w| w.app_id)
            .collect();
        assert_eq!(active, vec![AppId::Resume]);
    }

    #[test]
    fn minimize_keeps_z_index_and_clears_active() {
        let (mut state, mut ui) = seeded();
        open(&mut state, &mut ui, AppId::About);
        let z_before = state.window(AppId::About).unwrap().z_index;

        dispatch(
            &mut state,
            &mut ui,
            DesktopAction::MinimizeApp {
                app_id: AppId::About,
            },
        );

        let window = state.window(AppId::About).unwrap();
        assert!(window.is_minimized);
        assert_eq!(window.z_index, z_before);
        assert_eq!(state.active_app(), None);
    }

    #[test]
    fn close_is_idempotent() {
        let (mut state, mut ui) = seeded();
        open(&mut state, &mut ui, AppId::About);

        dispatch(
            &mut state,
            &mut ui,
            DesktopAction::CloseApp {
                app_id: AppId::About,
            },
        );
        let after_first = state.clone();
        dispatch(
            &mut state,
            &mut ui,
            DesktopAction::CloseApp {
                app_id: AppId::About,
            },
        );
        assert_eq!(state, after_first);
    }

    #[test]
    fn close_does_not_renumber_other_windows() {
        let (mut state, mut ui) = seeded();
        open(&mut state, &mut ui, AppId::About);
        open(&mut state, &mut ui, AppId::Resume);
        let resume_z = state.window(AppId::Resume).unwrap().z_index;

        dispatch(
            &mut state,
            &mut ui,
            DesktopAction::CloseApp {
                app_id: AppId::About,
            },
        );
        assert_eq!(state.window(AppId::Resume).unwrap().z_index, resume_z);
    }

    #[test]
    fn maximize_round_trip_restores_geometry_exactly() {
        let (mut state, mut ui) = seeded();
        open(&mut state, &mut ui, AppId::Projects);
        let before = state.window(AppId::Projects).unwrap().rect;

        dispatch(
            &mut state,
            &mut ui,
            DesktopAction::ToggleMaximize {
                app_id: AppId::Projects,
                viewport: viewport(),
            },
        );
        assert_eq!(state.window(AppId::Projects).unwrap().rect, viewport());
        assert!(state.window(AppId::Projects).unwrap().is_maximized);

        dispatch(
            &mut state,
            &mut ui,
            DesktopAction::ToggleMaximize {
                app_id: AppId::Projects,
                viewport: viewport(),
            },
        );
        let window = state.window(AppId::Projects).unwrap();
        assert_eq!(window.rect, before);
        assert!(!window.is_maximized);
        assert_eq!(window.restore_rect, None);
    }

    #[test]
    fn dock_toggle_restores_a_minimized_window() {
        let (mut state, mut ui) = seeded();
        open(&mut state, &mut ui, AppId::About);
        dispatch(
            &mut state,
            &mut ui,
            DesktopAction::MinimizeApp {
                app_id: AppId::About,
            },
        );

        dispatch(
            &mut state,
            &mut ui,
            DesktopAction::ToggleDockApp {
                app_id: AppId::About,
            },
        );
        let window = state.window(AppId::About).unwrap();
        assert!(window.is_open && !window.is_minimized);
        assert_eq!(state.active_app(), Some(AppId::About));
    }

    #[test]
    fn dock_toggle_closes_the_frontmost_window() {
        let (mut state, mut ui) = seeded();
        open(&mut state, &mut ui, AppId::About);

        let effects = dispatch(
            &mut state,
            &mut ui,
            DesktopAction::ToggleDockApp {
                app_id: AppId::About,
            },
        );
        assert!(!state.window(AppId::About).unwrap().is_open);
        assert!(effects.contains(&RuntimeEffect::DockClosePulse(AppId::About)));
    }

    #[test]
    fn dock_toggle_opens_a_closed_window() {
        let (mut state, mut ui) = seeded();
        let effects = dispatch(
            &mut state,
            &mut ui,
            DesktopAction::ToggleDockApp {
                app_id: AppId::Trivia,
            },
        );
        assert!(state.window(AppId::Trivia).unwrap().is_open);
        assert!(effects.contains(&RuntimeEffect::LoadContent(AppId::Trivia)));
    }

    #[test]
    fn drag_waits_for_threshold_then_tracks_pointer() {
        let (mut state, mut ui) = seeded();
        open(&mut state, &mut ui, AppId::About);
        let before = state.window(AppId::About).unwrap().rect;

        dispatch(
            &mut state,
            &mut ui,
            DesktopAction::BeginWindowDrag {
                app_id: AppId::About,
                pointer: PointerPosition { x: 500, y: 300 },
            },
        );
        dispatch(
            &mut state,
            &mut ui,
            DesktopAction::UpdateWindowDrag {
                pointer: PointerPosition { x: 502, y: 301 },
            },
        );
        assert_eq!(state.window(AppId::About).unwrap().rect, before);

        dispatch(
            &mut state,
            &mut ui,
            DesktopAction::UpdateWindowDrag {
                pointer: PointerPosition { x: 530, y: 260 },
            },
        );
        let rect = state.window(AppId::About).unwrap().rect;
        assert_eq!((rect.x, rect.y), (before.x + 30, before.y - 40));

        dispatch(&mut state, &mut ui, DesktopAction::EndWindowDrag);
        assert_eq!(ui.window_drag, None);
    }

    #[test]
    fn drag_clamps_top_left_to_zero() {
        let (mut state, mut ui) = seeded();
        open(&mut state, &mut ui, AppId::About);

        dispatch(
            &mut state,
            &mut ui,
            DesktopAction::BeginWindowDrag {
                app_id: AppId::About,
                pointer: PointerPosition { x: 500, y: 300 },
            },
        );
        dispatch(
            &mut state,
            &mut ui,
            DesktopAction::UpdateWindowDrag {
                pointer: PointerPosition { x: -2000, y: -2000 },
            },
        );
        let rect = state.window(AppId::About).unwrap().rect;
        assert_eq!((rect.x, rect.y), (0, 0));
    }

    #[test]
    fn maximized_window_is_not_draggable() {
        let (mut state, mut ui) = seeded();
        open(&mut state, &mut ui, AppId::About);
        dispatch(
            &mut state,
            &mut ui,
            DesktopAction::ToggleMaximize {
                app_id: AppId::About,
                viewport: viewport(),
            },
        );

        dispatch(
            &mut state,
            &mut ui,
            DesktopAction::BeginWindowDrag {
                app_id: AppId::About,
                pointer: PointerPosition { x: 10, y: 10 },
            },
        );
        assert_eq!(ui.window_drag, None);
    }

    #[test]
    fn drag_start_brings_window_to_front() {
        let (mut state, mut ui) = seeded();
        open(&mut state, &mut ui, AppId::About);
        open(&mut state, &mut ui, AppId::Resume);

        dispatch(
            &mut state,
            &mut ui,
            DesktopAction::BeginWindowDrag {
                app_id: AppId::About,
                pointer: PointerPosition { x: 10, y: 10 },
            },
        );
        assert_eq!(state.active_app(), Some(AppId::About));
    }

    #[test]
    fn resize_clamps_to_minimum_size() {
        let (mut state, mut ui) = seeded();
        open(&mut state, &mut ui, AppId::About);

        dispatch(
            &mut state,
            &mut ui,
            DesktopAction::BeginWindowResize {
                app_id: AppId::About,
                pointer: PointerPosition { x: 900, y: 700 },
            },
        );
        dispatch(
            &mut state,
            &mut ui,
            DesktopAction::UpdateWindowResize {
                pointer: PointerPosition { x: 0, y: 0 },
            },
        );
        let rect = state.window(AppId::About).unwrap().rect;
        assert_eq!(
            (rect.w, rect.h),
            (
                window_manager::MIN_WINDOW_WIDTH,
                window_manager::MIN_WINDOW_HEIGHT
            )
        );
        dispatch(&mut state, &mut ui, DesktopAction::EndWindowResize);
        assert_eq!(ui.window_resize, None);
    }

    #[test]
    fn keyboard_shortcuts_route_to_the_frontmost_window() {
        let (mut state, mut ui) = seeded();
        open(&mut state, &mut ui, AppId::About);
        open(&mut state, &mut ui, AppId::Resume);

        dispatch(&mut state, &mut ui, DesktopAction::MinimizeActive);
        assert!(state.window(AppId::Resume).unwrap().is_minimized);
        assert_eq!(state.active_app(), Some(AppId::About));

        dispatch(&mut state, &mut ui, DesktopAction::CloseActive);
        assert!(!state.window(AppId::About).unwrap().is_open);
        assert_eq!(state.active_app(), None);

        // With nothing open the shortcuts are harmless no-ops.
        dispatch(&mut state, &mut ui, DesktopAction::CloseActive);
    }

    #[test]
    fn icon_selection_is_exclusive_and_cleared_by_desktop_click() {
        let (mut state, mut ui) = seeded();
        dispatch(
            &mut state,
            &mut ui,
            DesktopAction::SelectIcon {
                app_id: AppId::About,
            },
        );
        dispatch(
            &mut state,
            &mut ui,
            DesktopAction::SelectIcon {
                app_id: AppId::Resume,
            },
        );
        assert_eq!(state.selected_icon, Some(AppId::Resume));

        dispatch(&mut state, &mut ui, DesktopAction::DeselectIcons);
        assert_eq!(state.selected_icon, None);
    }

    #[test]
    fn icon_drop_commits_to_a_free_in_bounds_cell() {
        let (mut state, mut ui) = seeded();
        let cell = GridCell { column: 4, row: 2 };
        let effects = dispatch(
            &mut state,
            &mut ui,
            DesktopAction::MoveIcon {
                app_id: AppId::About,
                cell,
                bounds: bounds(),
            },
        );
        assert_eq!(state.icon_positions.get(&AppId::About), Some(&cell));
        assert!(effects.contains(&RuntimeEffect::PersistIconPositions));
    }

    #[test]
    fn icon_drop_on_occupied_cell_reverts_and_leaves_occupant_untouched() {
        let (mut state, mut ui) = seeded();
        let taken = GridCell { column: 2, row: 2 };
        let origin = GridCell { column: 5, row: 5 };
        state.icon_positions.insert(AppId::Resume, taken);
        state.icon_positions.insert(AppId::About, origin);

        let effects = dispatch(
            &mut state,
            &mut ui,
            DesktopAction::MoveIcon {
                app_id: AppId::About,
                cell: taken,
                bounds: bounds(),
            },
        );
        assert!(effects.is_empty());
        assert_eq!(state.icon_positions.get(&AppId::About), Some(&origin));
        assert_eq!(state.icon_positions.get(&AppId::Resume), Some(&taken));
    }

    #[test]
    fn icon_drop_out_of_bounds_reverts() {
        let (mut state, mut ui) = seeded();
        let origin = GridCell { column: 1, row: 1 };
        state.icon_positions.insert(AppId::About, origin);

        dispatch(
            &mut state,
            &mut ui,
            DesktopAction::MoveIcon {
                app_id: AppId::About,
                cell: GridCell {
                    column: 99,
                    row: 1,
                },
                bounds: bounds(),
            },
        );
        assert_eq!(state.icon_positions.get(&AppId::About), Some(&origin));
    }

    #[test]
    fn unknown_app_errors_without_mutating_state() {
        let mut state = DesktopState::default();
        let mut ui = InteractionState::default();
        let err = reduce_desktop(
            &mut state,
            &mut ui,
            DesktopAction::OpenApp {
                app_id: AppId::About,
            },
        )
        .unwrap_err();
        assert_eq!(err, ReducerError::UnknownApp(AppId::About));
        assert_eq!(state, DesktopState::default());
    }

    #[test]
    fn z_indexes_start_at_base_and_stay_unique_among_stacking_windows() {
        let (mut state, mut ui) = seeded();
        for app_id in [AppId::About, AppId::Resume, AppId::Contact, AppId::Trivia] {
            open(&mut state, &mut ui, app_id);
        }
        dispatch(
            &mut state,
            &mut ui,
            DesktopAction::BringToFront {
                app_id: AppId::Resume,
            },
        );

        let mut zs: Vec<u32> = state
            .windows
            .iter()
            .filter(|w| w.is_stacking())
            .map(|w| w.z_index)
            .collect();
        assert!(zs.iter().all(|z| *z >= BASE_Z_INDEX));
        zs.sort_unstable();
        let len = zs.len();
        zs.dedup();
        assert_eq!(zs.len(), len);
    }
}
