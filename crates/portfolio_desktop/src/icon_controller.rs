//! Click/drag disambiguation state machine for desktop icons.
//!
//! Icons use a dual strategy: a press arms dragging once the arming timer fires,
//! but pointer travel beyond a small threshold before the timer fires
//! short-circuits the wait and begins the drag immediately. Releases that never
//! became a drag are clicks, and single-click selection is itself delayed so a
//! fast double click can cancel it and open the app instead. Windows
//! deliberately use a different (pure pixel-threshold) strategy; see
//! [`crate::window_manager`].
//!
//! The controller is pure: timers live in the view layer, which calls
//! [`IconController::arm_timer_fired`] / [`IconController::select_timer_fired`]
//! when they elapse and inspects the returned [`IconOutcome`] to decide which
//! [`crate::reducer::DesktopAction`] to dispatch.

use crate::model::{AppId, GridCell, PointerPosition};

/// Delay before a held press arms dragging.
pub const DRAG_ARM_DELAY_MS: u32 = 150;
/// Delay before a single click commits to selection, leaving room for a double
/// click to cancel it.
pub const CLICK_SELECT_DELAY_MS: u32 = 200;
/// Pointer travel (in px, either axis) that starts a drag; movement past this
/// before the arming timer fires starts the drag immediately.
pub const DRAG_MOVE_THRESHOLD_PX: i32 = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
enum IconPhase {
    Idle,
    /// Pointer is down; the arming timer may or may not have fired yet.
    Pressed {
        app_id: AppId,
        pointer_start: PointerPosition,
        origin_cell: GridCell,
        armed: bool,
    },
    /// Past the movement threshold; the icon ghost follows the pointer.
    Dragging {
        app_id: AppId,
        origin_cell: GridCell,
        pointer: PointerPosition,
    },
    /// Pointer released without dragging; waiting out the double-click window.
    PendingSelect { app_id: AppId },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// What the view layer should do in response to a controller event.
pub enum IconOutcome {
    /// Nothing to dispatch.
    None,
    /// Start the arming timer for [`DRAG_ARM_DELAY_MS`].
    StartArmTimer,
    /// A drag began; cancel the arming timer if still pending.
    DragStarted { app_id: AppId },
    /// Drag in progress; reposition the ghost at `pointer`.
    DragMoved { pointer: PointerPosition },
    /// Drag released over `pointer`; resolve the drop cell and dispatch a move.
    Drop {
        app_id: AppId,
        origin_cell: GridCell,
        pointer: PointerPosition,
    },
    /// Click released; start the selection timer for [`CLICK_SELECT_DELAY_MS`].
    StartSelectTimer { app_id: AppId },
    /// Selection timer elapsed uninterrupted; select the icon.
    Select { app_id: AppId },
    /// Double click; cancel any pending selection timer and open the app.
    Open { app_id: AppId },
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Per-desktop icon interaction controller. One instance serves all icons, since
/// at most one icon gesture can be in flight.
pub struct IconController {
    phase: IconPhase,
}

impl Default for IconController {
    fn default() -> Self {
        Self {
            phase: IconPhase::Idle,
        }
    }
}

impl IconController {
    /// Pointer pressed on an icon. Restarts the gesture even if a selection
    /// timer from a previous click is still pending.
    pub fn pointer_down(
        &mut self,
        app_id: AppId,
        pointer: PointerPosition,
        origin_cell: GridCell,
    ) -> IconOutcome {
        self.phase = IconPhase::Pressed {
            app_id,
            pointer_start: pointer,
            origin_cell,
            armed: false,
        };
        IconOutcome::StartArmTimer
    }

    /// The arming timer elapsed while the pointer is still down: the press is
    /// committed to dragging, so any further movement starts the drag.
    pub fn arm_timer_fired(&mut self) -> IconOutcome {
        if let IconPhase::Pressed { armed, .. } = &mut self.phase {
            *armed = true;
        }
        IconOutcome::None
    }

    /// Pointer movement. An armed press drags on any movement; an unarmed one
    /// becomes a drag past the movement threshold, superseding the pending
    /// arm timer.
    pub fn pointer_moved(&mut self, pointer: PointerPosition) -> IconOutcome {
        match &self.phase {
            IconPhase::Pressed {
                app_id,
                pointer_start,
                origin_cell,
                armed,
            } => {
                let dx = (pointer.x - pointer_start.x).abs();
                let dy = (pointer.y - pointer_start.y).abs();
                if *armed || dx > DRAG_MOVE_THRESHOLD_PX || dy > DRAG_MOVE_THRESHOLD_PX {
                    let app_id = *app_id;
                    let origin_cell = *origin_cell;
                    self.phase = IconPhase::Dragging {
                        app_id,
                        origin_cell,
                        pointer,
                    };
                    IconOutcome::DragStarted { app_id }
                } else {
                    IconOutcome::None
                }
            }
            IconPhase::Dragging {
                app_id,
                origin_cell,
                ..
            } => {
                let app_id = *app_id;
                let origin_cell = *origin_cell;
                self.phase = IconPhase::Dragging {
                    app_id,
                    origin_cell,
                    pointer,
                };
                IconOutcome::DragMoved { pointer }
            }
            _ => IconOutcome::None,
        }
    }

    /// Pointer released. A drag resolves to a drop; a press resolves to a
    /// deferred click.
    pub fn pointer_up(&mut self, pointer: PointerPosition) -> IconOutcome {
        match std::mem::replace(&mut self.phase, IconPhase::Idle) {
            IconPhase::Dragging {
                app_id,
                origin_cell,
                ..
            } => IconOutcome::Drop {
                app_id,
                origin_cell,
                pointer,
            },
            IconPhase::Pressed { app_id, .. } => {
                self.phase = IconPhase::PendingSelect { app_id };
                IconOutcome::StartSelectTimer { app_id }
            }
            phase => {
                self.phase = phase;
                IconOutcome::None
            }
        }
    }

    /// The selection timer elapsed with no intervening double click.
    pub fn select_timer_fired(&mut self) -> IconOutcome {
        if let IconPhase::PendingSelect { app_id } = self.phase {
            self.phase = IconPhase::Idle;
            IconOutcome::Select { app_id }
        } else {
            IconOutcome::None
        }
    }

    /// Double click on an icon: cancels any pending selection and opens the app.
    pub fn double_click(&mut self, app_id: AppId) -> IconOutcome {
        self.phase = IconPhase::Idle;
        IconOutcome::Open { app_id }
    }

    /// True while an icon drag ghost should be rendered.
    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, IconPhase::Dragging { .. })
    }

    /// The icon currently being dragged, if any.
    pub fn dragging_app(&self) -> Option<AppId> {
        match self.phase {
            IconPhase::Dragging { app_id, .. } => Some(app_id),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const CELL: GridCell = GridCell { column: 2, row: 3 };
    const DOWN_AT: PointerPosition = PointerPosition { x: 200, y: 150 };

    fn pressed() -> IconController {
        let mut controller = IconController::default();
        assert_eq!(
            controller.pointer_down(AppId::About, DOWN_AT, CELL),
            IconOutcome::StartArmTimer
        );
        controller
    }

    #[test]
    fn fast_movement_before_arm_timer_starts_a_drag() {
        let mut controller = pressed();
        // No arm_timer_fired: the flick crosses the threshold first.
        let flick = PointerPosition { x: 240, y: 150 };
        assert_eq!(
            controller.pointer_moved(flick),
            IconOutcome::DragStarted {
                app_id: AppId::About
            }
        );
        assert_eq!(controller.dragging_app(), Some(AppId::About));
    }

    #[test]
    fn small_movement_before_arm_timer_stays_a_click() {
        let mut controller = pressed();
        let nudge = PointerPosition { x: 204, y: 154 };
        assert_eq!(controller.pointer_moved(nudge), IconOutcome::None);
        assert!(!controller.is_dragging());

        assert_eq!(
            controller.pointer_up(nudge),
            IconOutcome::StartSelectTimer {
                app_id: AppId::About
            }
        );
    }

    #[test]
    fn armed_press_drags_on_any_movement() {
        let mut controller = pressed();
        controller.arm_timer_fired();

        let nudge = PointerPosition { x: 202, y: 151 };
        assert_eq!(
            controller.pointer_moved(nudge),
            IconOutcome::DragStarted {
                app_id: AppId::About
            }
        );
        assert_eq!(controller.dragging_app(), Some(AppId::About));

        let farther = PointerPosition { x: 360, y: 420 };
        assert_eq!(
            controller.pointer_moved(farther),
            IconOutcome::DragMoved { pointer: farther }
        );
    }

    #[test]
    fn drag_release_resolves_to_drop_with_origin_cell() {
        let mut controller = pressed();
        controller.arm_timer_fired();
        controller.pointer_moved(PointerPosition { x: 260, y: 150 });

        let up_at = PointerPosition { x: 500, y: 310 };
        assert_eq!(
            controller.pointer_up(up_at),
            IconOutcome::Drop {
                app_id: AppId::About,
                origin_cell: CELL,
                pointer: up_at,
            }
        );
        assert!(!controller.is_dragging());
    }

    #[test]
    fn quick_release_defers_selection() {
        let mut controller = pressed();
        assert_eq!(
            controller.pointer_up(DOWN_AT),
            IconOutcome::StartSelectTimer {
                app_id: AppId::About
            }
        );
        assert_eq!(
            controller.select_timer_fired(),
            IconOutcome::Select {
                app_id: AppId::About
            }
        );
    }

    #[test]
    fn double_click_cancels_pending_selection_and_opens() {
        let mut controller = pressed();
        controller.pointer_up(DOWN_AT);

        assert_eq!(
            controller.double_click(AppId::About),
            IconOutcome::Open {
                app_id: AppId::About
            }
        );
        // The stale selection timer must now fire into nothing.
        assert_eq!(controller.select_timer_fired(), IconOutcome::None);
    }

    #[test]
    fn arming_timer_after_release_is_inert() {
        let mut controller = pressed();
        controller.pointer_up(DOWN_AT);
        assert_eq!(controller.arm_timer_fired(), IconOutcome::None);
        let moved = controller.pointer_moved(PointerPosition { x: 900, y: 900 });
        assert_eq!(moved, IconOutcome::None);
    }
}
