use content_contract::ContentPhase;

use super::*;
use crate::{model::AppId, window_manager};

#[component]
pub(super) fn DesktopWindow(app_id: AppId) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let definition = apps::definition(app_id);

    let window = Signal::derive(move || runtime.state.get().window(app_id).copied());

    let focus = move |_| {
        if !runtime.state.get_untracked().is_active(app_id) {
            runtime.dispatch_action(DesktopAction::BringToFront { app_id });
        }
    };
    let minimize = move |_| runtime.dispatch_action(DesktopAction::MinimizeApp { app_id });
    let close = move |_| runtime.dispatch_action(DesktopAction::CloseApp { app_id });
    let toggle_maximize = move |_| {
        runtime.dispatch_action(DesktopAction::ToggleMaximize {
            app_id,
            viewport: shell_viewport_rect(),
        });
    };

    let begin_drag = move |ev: web_sys::PointerEvent| {
        if ev.button() != 0 {
            return;
        }
        try_set_pointer_capture(&ev);
        ev.prevent_default();
        runtime.dispatch_action(DesktopAction::BeginWindowDrag {
            app_id,
            pointer: pointer_from_mouse_event(&ev),
        });
    };
    let header_double_click = move |ev: web_sys::MouseEvent| {
        stop_mouse_event(&ev);
        runtime.dispatch_action(DesktopAction::ToggleMaximize {
            app_id,
            viewport: shell_viewport_rect(),
        });
    };
    let begin_resize = move |ev: web_sys::PointerEvent| {
        if ev.button() != 0 {
            return;
        }
        try_set_pointer_capture(&ev);
        ev.prevent_default();
        ev.stop_propagation();
        runtime.dispatch_action(DesktopAction::BeginWindowResize {
            app_id,
            pointer: pointer_from_mouse_event(&ev),
        });
    };

    view! {
        <Show when=move || window.get().map(|w| w.is_open).unwrap_or(false) fallback=|| ()>
            {move || {
                let win = window.get().expect("window record exists while shown");
                let active = runtime.state.get().is_active(app_id);
                let content_height = window_manager::content_viewport_height(win.rect.h);
                let style = format!(
                    "left:{}px;top:{}px;width:{}px;height:{}px;z-index:{};",
                    win.rect.x, win.rect.y, win.rect.w, win.rect.h, win.z_index
                );
                let class = format!(
                    "desktop-window{}{}{}",
                    if active { " active" } else { "" },
                    if win.is_minimized { " minimized" } else { "" },
                    if win.is_maximized { " maximized" } else { "" },
                );

                view! {
                    <section
                        class=class
                        style=style
                        on:pointerdown=focus
                        role="dialog"
                        aria-label=definition.title
                    >
                        <header
                            class="window-header"
                            on:pointerdown=begin_drag
                            on:dblclick=header_double_click
                        >
                            <div class="window-controls">
                                <button
                                    class="window-control close"
                                    aria-label="Close window"
                                    on:pointerdown=move |ev: web_sys::PointerEvent| {
                                        ev.prevent_default();
                                        ev.stop_propagation();
                                    }
                                    on:click=move |ev| {
                                        stop_mouse_event(&ev);
                                        close(ev);
                                    }
                                />
                                <button
                                    class="window-control minimize"
                                    aria-label="Minimize window"
                                    on:pointerdown=move |ev: web_sys::PointerEvent| {
                                        ev.prevent_default();
                                        ev.stop_propagation();
                                    }
                                    on:click=move |ev| {
                                        stop_mouse_event(&ev);
                                        minimize(ev);
                                    }
                                />
                                <button
                                    class="window-control maximize"
                                    aria-label=if win.is_maximized {
                                        "Restore window"
                                    } else {
                                        "Maximize window"
                                    }
                                    on:pointerdown=move |ev: web_sys::PointerEvent| {
                                        ev.prevent_default();
                                        ev.stop_propagation();
                                    }
                                    on:click=move |ev| {
                                        stop_mouse_event(&ev);
                                        toggle_maximize(ev);
                                    }
                                />
                            </div>
                            <span class="window-title">{definition.title}</span>
                        </header>
                        <div
                            class="window-body"
                            style=format!("height:{content_height}px;")
                        >
                            <WindowBody app_id=app_id />
                        </div>
                        <Show
                            when=move || window.get().map(|w| !w.is_maximized).unwrap_or(false)
                            fallback=|| ()
                        >
                            <div
                                class="window-resize-handle"
                                aria-hidden="true"
                                on:pointerdown=begin_resize
                            />
                        </Show>
                    </section>
                }
                    .into_view()
            }}
        </Show>
    }
}

#[component]
fn WindowBody(app_id: AppId) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let phase = Signal::derive(move || runtime.content_phase(app_id));

    let retry = move |_| runtime.request_content_reload(app_id);

    view! {
        <div class="window-body-content">
            {move || match phase.get() {
                ContentPhase::Idle | ContentPhase::Loading => view! {
                    <div class="content-loading" aria-busy="true">
                        <span class="spinner" aria-hidden="true"></span>
                        <p>"Loading…"</p>
                    </div>
                }
                    .into_view(),
                ContentPhase::Ready(markup) => view! {
                    <article class="content-ready" inner_html=markup.0></article>
                }
                    .into_view(),
                ContentPhase::Error(err) => view! {
                    <div class="content-error" role="alert">
                        <p>{format!("Could not load this window: {err}")}</p>
                        <button on:click=retry>"Try again"</button>
                    </div>
                }
                    .into_view(),
            }}
        </div>
    }
}
