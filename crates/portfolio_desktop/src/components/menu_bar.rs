use std::time::Duration;

use super::*;
use crate::persistence::DEFAULT_WALLPAPER_ID;

/// Wallpapers the menu bar toggle cycles through. The first entry is the default.
const WALLPAPERS: &[&str] = &[DEFAULT_WALLPAPER_ID, "dunes", "graphite", "tide"];

#[cfg(target_arch = "wasm32")]
fn clock_label() -> String {
    let date = js_sys::Date::new_0();
    format!(
        "{:02}:{:02}",
        date.get_hours(),
        date.get_minutes()
    )
}

#[cfg(not(target_arch = "wasm32"))]
fn clock_label() -> String {
    "--:--".to_string()
}

#[component]
pub(super) fn MenuBar() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;

    let clock = create_rw_signal(clock_label());
    if let Ok(interval) = set_interval_with_handle(
        move || clock.set(clock_label()),
        Duration::from_secs(1),
    ) {
        on_cleanup(move || interval.clear());
    }

    let active_title = Signal::derive(move || {
        state
            .get()
            .active_app()
            .map(|app_id| apps::definition(app_id).title)
            .unwrap_or("Portfolio")
    });

    let cycle_wallpaper = move |_| {
        let current = state.with_untracked(|s| s.wallpaper_id.clone());
        let position = WALLPAPERS
            .iter()
            .position(|id| *id == current)
            .unwrap_or(0);
        let next = WALLPAPERS[(position + 1) % WALLPAPERS.len()];
        runtime.dispatch_action(DesktopAction::SetWallpaper {
            wallpaper_id: next.to_string(),
        });
    };

    let close_active = move |_| runtime.dispatch_action(DesktopAction::CloseActive);
    let minimize_active = move |_| runtime.dispatch_action(DesktopAction::MinimizeActive);
    let has_active = Signal::derive(move || state.get().active_app().is_some());

    view! {
        <header class="menu-bar" style=format!("height:{MENU_BAR_HEIGHT_PX}px;")>
            <div class="menu-bar-left">
                <span class="menu-brand" aria-hidden="true">"◈"</span>
                <span class="menu-active-title">{active_title}</span>
                <Show when=move || has_active.get() fallback=|| ()>
                    <button class="menu-action" on:click=close_active>
                        "Close"
                    </button>
                    <button class="menu-action" on:click=minimize_active>
                        "Minimize"
                    </button>
                </Show>
            </div>
            <div class="menu-bar-right">
                <button
                    class="menu-action"
                    aria-label="Change wallpaper"
                    on:click=cycle_wallpaper
                >
                    "Wallpaper"
                </button>
                <span class="menu-clock">{clock}</span>
            </div>
        </header>
    }
}
