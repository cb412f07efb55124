use std::time::Duration;

use leptos::leptos_dom::helpers::TimeoutHandle;

use super::*;
use crate::{
    desktop_grid::{GridBounds, GridConfig},
    icon_controller::{IconController, IconOutcome, CLICK_SELECT_DELAY_MS, DRAG_ARM_DELAY_MS},
    model::AppId,
};

fn clear_timer(slot: StoredValue<Option<TimeoutHandle>>) {
    if let Some(handle) = slot.get_value() {
        handle.clear();
    }
    slot.set_value(None);
}

/// Grid bounds of the desktop area between the menu bar and the dock.
fn desktop_bounds(grid: GridConfig, viewport: WindowRect) -> GridBounds {
    grid.bounds(
        viewport.w,
        (viewport.h - MENU_BAR_HEIGHT_PX - DOCK_RESERVED_HEIGHT_PX).max(0),
    )
}

/// Pointer position translated from client coordinates to desktop-local ones.
fn desktop_local(pointer: PointerPosition) -> PointerPosition {
    PointerPosition {
        x: pointer.x,
        y: pointer.y - MENU_BAR_HEIGHT_PX,
    }
}

#[component]
pub(super) fn DesktopIconGrid() -> impl IntoView {
    let runtime = use_desktop_runtime();

    let viewport = create_rw_signal(boot_viewport());
    let grid = Signal::derive(move || GridConfig::for_viewport_width(viewport.get().w));
    let resize_listener = window_event_listener(ev::resize, move |_| viewport.set(boot_viewport()));
    on_cleanup(move || resize_listener.remove());

    let controller = create_rw_signal(IconController::default());
    // Client-space pointer of the icon ghost while a drag is in flight.
    let ghost = create_rw_signal(None::<PointerPosition>);
    let arm_timer = store_value(None::<TimeoutHandle>);
    let select_timer = store_value(None::<TimeoutHandle>);
    on_cleanup(move || {
        clear_timer(arm_timer);
        clear_timer(select_timer);
    });

    let handle_outcome = move |outcome: IconOutcome| match outcome {
        IconOutcome::None => {}
        IconOutcome::StartArmTimer => {
            clear_timer(arm_timer);
            let fired = set_timeout_with_handle(
                move || {
                    arm_timer.set_value(None);
                    controller.update(|c| {
                        c.arm_timer_fired();
                    });
                },
                Duration::from_millis(u64::from(DRAG_ARM_DELAY_MS)),
            );
            if let Ok(handle) = fired {
                arm_timer.set_value(Some(handle));
            }
        }
        IconOutcome::DragStarted { .. } => {
            clear_timer(arm_timer);
        }
        IconOutcome::DragMoved { pointer } => {
            ghost.set(Some(pointer));
        }
        IconOutcome::Drop {
            app_id, pointer, ..
        } => {
            ghost.set(None);
            let grid = grid.get_untracked();
            runtime.dispatch_action(DesktopAction::MoveIcon {
                app_id,
                cell: grid.cell_at(desktop_local(pointer)),
                bounds: desktop_bounds(grid, viewport.get_untracked()),
            });
        }
        IconOutcome::StartSelectTimer { .. } => {
            clear_timer(select_timer);
            let fired = set_timeout_with_handle(
                move || {
                    select_timer.set_value(None);
                    let outcome = controller
                        .try_update(|c| c.select_timer_fired())
                        .unwrap_or(IconOutcome::None);
                    if let IconOutcome::Select { app_id } = outcome {
                        runtime.dispatch_action(DesktopAction::SelectIcon { app_id });
                    }
                },
                Duration::from_millis(u64::from(CLICK_SELECT_DELAY_MS)),
            );
            if let Ok(handle) = fired {
                select_timer.set_value(Some(handle));
            }
        }
        IconOutcome::Open { app_id } => {
            clear_timer(select_timer);
            runtime.dispatch_action(DesktopAction::OpenApp { app_id });
        }
        // Produced only inside the timer callbacks above.
        IconOutcome::Select { .. } => {}
    };

    // Icon drags track the document so fast pointer movement cannot escape the icon.
    let move_listener = window_event_listener(ev::pointermove, move |ev| {
        let pointer = pointer_from_mouse_event(&ev);
        let outcome = controller
            .try_update(|c| c.pointer_moved(pointer))
            .unwrap_or(IconOutcome::None);
        if let IconOutcome::DragStarted { .. } = outcome {
            ghost.set(Some(pointer));
        }
        handle_outcome(outcome);
    });
    on_cleanup(move || move_listener.remove());

    let up_listener = window_event_listener(ev::pointerup, move |ev| {
        let pointer = pointer_from_mouse_event(&ev);
        let outcome = controller
            .try_update(|c| c.pointer_up(pointer))
            .unwrap_or(IconOutcome::None);
        handle_outcome(outcome);
    });
    on_cleanup(move || up_listener.remove());

    let desktop_click = move |ev: web_sys::PointerEvent| {
        // Icons stop propagation, so a press that arrives here hit empty space.
        if ev.button() == 0 {
            runtime.dispatch_action(DesktopAction::DeselectIcons);
        }
    };

    view! {
        <div
            class="desktop-icon-layer"
            style=format!("top:{MENU_BAR_HEIGHT_PX}px;")
            on:pointerdown=desktop_click
        >
            <For
                each=move || apps::configured_apps().iter().map(|def| def.app_id)
                key=|app_id| *app_id
                children=move |app_id| {
                    view! {
                        <DesktopIcon
                            app_id=app_id
                            grid=grid
                            controller=controller
                            ghost=ghost
                            handle_outcome=handle_outcome
                        />
                    }
                }
            />
        </div>
    }
}

#[component]
fn DesktopIcon(
    app_id: AppId,
    grid: Signal<GridConfig>,
    controller: RwSignal<IconController>,
    ghost: RwSignal<Option<PointerPosition>>,
    #[prop(into)] handle_outcome: Callback<IconOutcome>,
) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let definition = apps::definition(app_id);

    let cell = Signal::derive(move || {
        state
            .get()
            .icon_positions
            .get(&app_id)
            .copied()
            .unwrap_or_else(|| apps::default_icon_cell(app_id))
    });
    let selected = Signal::derive(move || state.get().selected_icon == Some(app_id));
    let dragging = Signal::derive(move || {
        controller.get().dragging_app() == Some(app_id) && ghost.get().is_some()
    });

    let pointer_down = move |ev: web_sys::PointerEvent| {
        if ev.button() != 0 {
            return;
        }
        ev.stop_propagation();
        try_set_pointer_capture(&ev);
        let outcome = controller
            .try_update(|c| {
                c.pointer_down(app_id, pointer_from_mouse_event(&ev), cell.get_untracked())
            })
            .unwrap_or(IconOutcome::None);
        handle_outcome.call(outcome);
    };
    let double_click = move |ev: web_sys::MouseEvent| {
        stop_mouse_event(&ev);
        let outcome = controller
            .try_update(|c| c.double_click(app_id))
            .unwrap_or(IconOutcome::None);
        handle_outcome.call(outcome);
    };

    let style = move || {
        let grid = grid.get();
        if dragging.get() {
            let pointer = ghost.get().map(desktop_local).unwrap_or(PointerPosition {
                x: 0,
                y: 0,
            });
            format!(
                "left:{}px;top:{}px;width:{}px;height:{}px;",
                pointer.x - grid.cell_width / 2,
                pointer.y - grid.cell_height / 2,
                grid.cell_width,
                grid.cell_height,
            )
        } else {
            let (x, y) = grid.cell_origin(cell.get());
            format!(
                "left:{}px;top:{}px;width:{}px;height:{}px;",
                x, y, grid.cell_width, grid.cell_height,
            )
        }
    };
    let class = move || {
        format!(
            "desktop-icon{}{}",
            if selected.get() { " selected" } else { "" },
            if dragging.get() { " dragging" } else { "" },
        )
    };

    view! {
        <button
            class=class
            style=style
            on:pointerdown=pointer_down
            on:dblclick=double_click
            aria-label=definition.title
            aria-pressed=move || selected.get().to_string()
        >
            <span class=format!("icon-glyph icon-{}", definition.icon_id) aria-hidden="true"></span>
            <span class="icon-label">{definition.title}</span>
        </button>
    }
}
