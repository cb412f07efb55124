//! Desktop shell UI composition and interaction surfaces.

mod desktop;
mod dock;
mod menu_bar;
mod window;

use leptos::*;

use self::{desktop::DesktopIconGrid, dock::Dock, menu_bar::MenuBar, window::DesktopWindow};

use crate::{
    apps,
    model::{PointerPosition, WindowRect},
    reducer::DesktopAction,
    runtime_context::boot_viewport,
};

pub use crate::runtime_context::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext};

const MENU_BAR_HEIGHT_PX: i32 = 28;
const DOCK_RESERVED_HEIGHT_PX: i32 = 90;

fn pointer_from_mouse_event(ev: &web_sys::MouseEvent) -> PointerPosition {
    PointerPosition {
        x: ev.client_x(),
        y: ev.client_y(),
    }
}

#[cfg(target_arch = "wasm32")]
fn try_set_pointer_capture(ev: &web_sys::PointerEvent) {
    use wasm_bindgen::JsCast;

    if let Some(target) = ev.current_target() {
        if let Ok(element) = target.dyn_into::<web_sys::Element>() {
            let _ = element.set_pointer_capture(ev.pointer_id());
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn try_set_pointer_capture(_: &web_sys::PointerEvent) {}

fn stop_mouse_event(ev: &web_sys::MouseEvent) {
    ev.prevent_default();
    ev.stop_propagation();
}

/// Area available to maximized windows: the viewport minus menu bar and dock.
fn shell_viewport_rect() -> WindowRect {
    let viewport = boot_viewport();
    WindowRect {
        x: 0,
        y: MENU_BAR_HEIGHT_PX,
        w: viewport.w,
        h: (viewport.h - MENU_BAR_HEIGHT_PX - DOCK_RESERVED_HEIGHT_PX).max(0),
    }
}

#[component]
/// Full desktop shell: wallpaper, menu bar, icon grid, window layer, and dock.
/// Must be mounted under a [`DesktopProvider`].
pub fn DesktopShell() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;

    // Window drags and resizes track the pointer at the document level so fast
    // movement cannot escape the header or the resize handle.
    let move_listener = window_event_listener(ev::pointermove, move |ev| {
        let active = runtime.interaction.with_untracked(|ui| {
            (ui.window_drag.is_some(), ui.window_resize.is_some())
        });
        let pointer = pointer_from_mouse_event(&ev);
        if active.0 {
            runtime.dispatch_action(DesktopAction::UpdateWindowDrag { pointer });
        }
        if active.1 {
            runtime.dispatch_action(DesktopAction::UpdateWindowResize { pointer });
        }
    });
    on_cleanup(move || move_listener.remove());

    let up_listener = window_event_listener(ev::pointerup, move |_| {
        let active = runtime.interaction.with_untracked(|ui| {
            (ui.window_drag.is_some(), ui.window_resize.is_some())
        });
        if active.0 {
            runtime.dispatch_action(DesktopAction::EndWindowDrag);
        }
        if active.1 {
            runtime.dispatch_action(DesktopAction::EndWindowResize);
        }
    });
    on_cleanup(move || up_listener.remove());

    let shortcut_listener = window_event_listener(ev::keydown, move |ev| {
        if !ev.ctrl_key() && !ev.meta_key() {
            return;
        }
        match ev.key().as_str() {
            "w" => {
                ev.prevent_default();
                runtime.dispatch_action(DesktopAction::CloseActive);
            }
            "m" => {
                ev.prevent_default();
                runtime.dispatch_action(DesktopAction::MinimizeActive);
            }
            _ => {}
        }
    });
    on_cleanup(move || shortcut_listener.remove());

    let wallpaper_class =
        move || format!("desktop-shell wallpaper-{}", state.get().wallpaper_id);

    view! {
        <div class=wallpaper_class>
            <MenuBar />
            <DesktopIconGrid />
            <div class="window-layer">
                <For
                    each=move || apps::configured_apps().iter().map(|def| def.app_id)
                    key=|app_id| *app_id
                    children=move |app_id| view! { <DesktopWindow app_id=app_id /> }
                />
            </div>
            <Dock />
        </div>
    }
}
