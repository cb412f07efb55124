use std::{cell::RefCell, rc::Rc, time::Duration};

use leptos::leptos_dom::helpers::{AnimationFrameRequestHandle, TimeoutHandle};

use super::*;
use crate::{
    dock::DockMagnifier,
    model::AppId,
    runtime_context::{DockPulse, DockPulseKind},
};

/// Nominal footprint of one dock item, used to seed centers before the first
/// DOM measurement lands.
const DOCK_ITEM_SIZE_PX: f64 = 48.0;
/// Nominal gap between resting dock items, same seeding role.
const DOCK_ITEM_GAP_PX: f64 = 12.0;
/// How long a dock pulse animation class stays applied.
const PULSE_DURATION_MS: u64 = 600;

fn seed_centers(count: usize) -> Vec<f64> {
    let pitch = DOCK_ITEM_SIZE_PX + DOCK_ITEM_GAP_PX;
    (0..count)
        .map(|index| index as f64 * pitch + DOCK_ITEM_SIZE_PX / 2.0)
        .collect()
}

/// Resting center of each dock item in dock-local pixels, measured from the
/// rendered layout so magnification peaks under the item actually hovered.
#[cfg(target_arch = "wasm32")]
fn measured_item_centers(dock: &web_sys::Element) -> Option<Vec<f64>> {
    let dock_left = dock.get_bounding_client_rect().left();
    let children = dock.children();
    let mut centers = Vec::with_capacity(children.length() as usize);
    for index in 0..children.length() {
        let rect = children.item(index)?.get_bounding_client_rect();
        centers.push(rect.left() - dock_left + rect.width() / 2.0);
    }
    (!centers.is_empty()).then_some(centers)
}

#[cfg(not(target_arch = "wasm32"))]
fn measured_item_centers(_: &web_sys::Element) -> Option<Vec<f64>> {
    None
}

#[cfg(target_arch = "wasm32")]
fn dock_local_x(ev: &web_sys::PointerEvent) -> Option<f64> {
    use wasm_bindgen::JsCast;

    let element = ev.current_target()?.dyn_into::<web_sys::Element>().ok()?;
    let rect = element.get_bounding_client_rect();
    Some(f64::from(ev.client_x()) - rect.left())
}

#[cfg(not(target_arch = "wasm32"))]
fn dock_local_x(ev: &web_sys::PointerEvent) -> Option<f64> {
    Some(f64::from(ev.client_x()))
}

/// Drives [`DockMagnifier::step`] once per animation frame, pausing entirely
/// while the engine reports itself settled.
#[derive(Clone)]
struct MagnifierFrameLoop {
    magnifier: RwSignal<DockMagnifier>,
    handle: Rc<RefCell<Option<AnimationFrameRequestHandle>>>,
}

impl MagnifierFrameLoop {
    fn new(magnifier: RwSignal<DockMagnifier>) -> Self {
        Self {
            magnifier,
            handle: Rc::new(RefCell::new(None)),
        }
    }

    fn is_running(&self) -> bool {
        self.handle.borrow().is_some()
    }

    fn ensure_running(&self) {
        if !self.is_running() {
            self.schedule_frame();
        }
    }

    fn schedule_frame(&self) {
        let this = self.clone();
        match request_animation_frame_with_handle(move || this.on_frame()) {
            Ok(handle) => *self.handle.borrow_mut() = Some(handle),
            Err(err) => logging::warn!("dock animation frame request failed: {err:?}"),
        }
    }

    fn on_frame(&self) {
        *self.handle.borrow_mut() = None;
        let animating = self
            .magnifier
            .try_update(DockMagnifier::step)
            .unwrap_or(false);
        if animating {
            self.schedule_frame();
        }
    }

    fn cancel(&self) {
        if let Some(handle) = self.handle.borrow_mut().take() {
            handle.cancel();
        }
    }
}

#[component]
pub(super) fn Dock() -> impl IntoView {
    let runtime = use_desktop_runtime();

    let items = apps::dock_order();
    let magnifier = create_rw_signal(DockMagnifier::new(seed_centers(items.len())));
    let frame_loop = MagnifierFrameLoop::new(magnifier);
    {
        let frame_loop = frame_loop.clone();
        on_cleanup(move || frame_loop.cancel());
    }

    // Re-measure resting centers once the dock is in the document and whenever
    // the viewport resizes; the stylesheet, not these constants, decides spacing.
    let dock_ref = create_node_ref::<html::Nav>();
    let measure = move || {
        let Some(dock) = dock_ref.get_untracked() else {
            return;
        };
        if let Some(centers) = measured_item_centers(&dock) {
            magnifier.update(|m| m.set_item_centers(centers));
        }
    };
    create_effect(move |_| {
        if dock_ref.get().is_some() {
            measure();
        }
    });
    let measure_listener = window_event_listener(ev::resize, move |_| measure());
    on_cleanup(move || measure_listener.remove());

    // Active pulse per item, cleared by a one-shot timer when the animation ends.
    let pulse = create_rw_signal(None::<DockPulse>);
    let pulse_timer = store_value(None::<TimeoutHandle>);
    on_cleanup(move || {
        if let Some(handle) = pulse_timer.get_value() {
            handle.clear();
        }
    });
    create_effect(move |_| {
        let Some(request) = runtime.dock_pulse.get() else {
            return;
        };
        runtime.dock_pulse.set(None);
        pulse.set(Some(request));

        if let Some(handle) = pulse_timer.get_value() {
            handle.clear();
        }
        let armed = set_timeout_with_handle(
            move || {
                pulse_timer.set_value(None);
                pulse.set(None);
            },
            Duration::from_millis(PULSE_DURATION_MS),
        );
        if let Ok(handle) = armed {
            pulse_timer.set_value(Some(handle));
        }
    });

    let pointer_move = {
        let frame_loop = frame_loop.clone();
        move |ev: web_sys::PointerEvent| {
            let Some(pointer_x) = dock_local_x(&ev) else {
                return;
            };
            let needs_frames = magnifier
                .try_update(|m| m.pointer_moved(pointer_x))
                .unwrap_or(false);
            if needs_frames {
                frame_loop.ensure_running();
            }
        }
    };
    let pointer_leave = move |_| {
        let needs_frames = magnifier
            .try_update(DockMagnifier::pointer_left)
            .unwrap_or(false);
        if needs_frames {
            frame_loop.ensure_running();
        }
    };

    view! {
        <nav
            node_ref=dock_ref
            class="dock"
            aria-label="Dock"
            on:pointermove=pointer_move
            on:pointerleave=pointer_leave
        >
            {items
                .iter()
                .enumerate()
                .map(|(index, app_id)| {
                    view! {
                        <DockItem app_id=*app_id index=index magnifier=magnifier pulse=pulse />
                    }
                })
                .collect_view()}
        </nav>
    }
}

#[component]
fn DockItem(
    app_id: AppId,
    index: usize,
    magnifier: RwSignal<DockMagnifier>,
    pulse: RwSignal<Option<DockPulse>>,
) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let definition = apps::definition(app_id);

    let is_open = Signal::derive(move || {
        state
            .get()
            .window(app_id)
            .map(|w| w.is_open)
            .unwrap_or(false)
    });
    let pulse_class = Signal::derive(move || match pulse.get() {
        Some(DockPulse { app_id: pulsed, kind }) if pulsed == app_id => match kind {
            DockPulseKind::Open => " pulse-open",
            DockPulseKind::Close => " pulse-close",
        },
        _ => "",
    });

    let click = move |ev: web_sys::MouseEvent| {
        stop_mouse_event(&ev);
        runtime.dispatch_action(DesktopAction::ToggleDockApp { app_id });
    };

    let style = move || {
        let magnifier = magnifier.get();
        format!(
            "transform:translate({:.2}px,{:.2}px) scale({:.3});",
            magnifier.offset_x(index),
            -magnifier.lift_y(index),
            magnifier.scale(index),
        )
    };

    view! {
        <button
            class=move || format!("dock-item{}", pulse_class.get())
            style=style
            on:click=click
            aria-label=definition.title
        >
            <span class=format!("icon-glyph icon-{}", definition.icon_id) aria-hidden="true"></span>
            <Show when=move || is_open.get() fallback=|| ()>
                <span class="dock-open-indicator" aria-hidden="true"></span>
            </Show>
        </button>
    }
}
