//! Runtime provider and context wiring for the desktop shell.
//!
//! This module owns the long-lived reducer container, the runtime effect queue,
//! per-app content phases, and boot-time preference hydration. UI composition
//! stays in [`crate::components`].

use std::collections::BTreeMap;

use content_contract::{ContentPhase, SharedContentLoader};
use leptos::*;
use platform_prefs::PrefsStore;

use crate::{
    desktop_grid::GridConfig,
    effect_executor,
    model::{AppId, DesktopState, InteractionState, WindowRect},
    persistence,
    reducer::{reduce_desktop, DesktopAction, RuntimeEffect},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Which dock feedback animation a pulse requests.
pub enum DockPulseKind {
    /// Bounce on open.
    Open,
    /// Fade feedback when a dock toggle closed its app.
    Close,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// One-shot dock feedback request consumed by the dock view.
pub struct DockPulse {
    pub app_id: AppId,
    pub kind: DockPulseKind,
}

#[derive(Clone, Copy)]
/// Leptos context for reading desktop state and dispatching [`DesktopAction`] values.
pub struct DesktopRuntimeContext {
    /// Reactive compositor state signal.
    pub state: RwSignal<DesktopState>,
    /// Reactive pointer/drag/resize interaction state signal.
    pub interaction: RwSignal<InteractionState>,
    /// Queue of runtime effects emitted by the reducer and drained by the executor.
    pub effects: RwSignal<Vec<RuntimeEffect>>,
    /// Content lifecycle phase per app window.
    pub content: RwSignal<BTreeMap<AppId, ContentPhase>>,
    /// Latest dock feedback request; the dock view clears it when the animation ends.
    pub dock_pulse: RwSignal<Option<DockPulse>>,
    /// Preference store backing icon and wallpaper persistence.
    pub prefs: StoredValue<PrefsStore>,
    /// Content loader supplying window body markup.
    pub loader: StoredValue<SharedContentLoader>,
    /// Reducer dispatch callback.
    pub dispatch: Callback<DesktopAction>,
}

impl DesktopRuntimeContext {
    /// Dispatches a reducer action through the runtime context callback.
    pub fn dispatch_action(&self, action: DesktopAction) {
        self.dispatch.call(action);
    }

    /// Content phase for one app window.
    pub fn content_phase(&self, app_id: AppId) -> ContentPhase {
        self.content
            .with(|phases| phases.get(&app_id).cloned().unwrap_or_default())
    }

    /// Re-enqueues a content load, e.g. from a retry affordance after a failure.
    pub fn request_content_reload(&self, app_id: AppId) {
        let mut queue = self.effects.get_untracked();
        queue.push(RuntimeEffect::LoadContent(app_id));
        self.effects.set(queue);
    }
}

/// Browser viewport rect at boot, used for window seeding and grid bounds.
pub fn boot_viewport() -> WindowRect {
    #[cfg(target_arch = "wasm32")]
    {
        let fallback = WindowRect {
            x: 0,
            y: 0,
            w: 1920,
            h: 1080,
        };
        let Some(window) = web_sys::window() else {
            return fallback;
        };
        let width = window
            .inner_width()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(f64::from(fallback.w));
        let height = window
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(f64::from(fallback.h));
        WindowRect {
            x: 0,
            y: 0,
            w: width as i32,
            h: height as i32,
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        WindowRect {
            x: 0,
            y: 0,
            w: 1920,
            h: 1080,
        }
    }
}

fn hydrate_preferences(prefs: PrefsStore, viewport: WindowRect, dispatch: Callback<DesktopAction>) {
    let grid = GridConfig::for_viewport_width(viewport.w);
    let bounds = grid.bounds(viewport.w, viewport.h);
    dispatch.call(DesktopAction::HydratePrefs {
        icon_positions: persistence::load_icon_positions(prefs, bounds),
        wallpaper_id: persistence::load_wallpaper(prefs),
    });
}

#[component]
/// Provides [`DesktopRuntimeContext`] to descendant components and boots persisted state.
pub fn DesktopProvider(
    /// Content loader assembled by the entry layer.
    loader: SharedContentLoader,
    children: Children,
) -> impl IntoView {
    let viewport = boot_viewport();
    let state = create_rw_signal(DesktopState::with_configured_apps(viewport));
    let interaction = create_rw_signal(InteractionState::default());
    let effects = create_rw_signal(Vec::<RuntimeEffect>::new());
    let content = create_rw_signal(BTreeMap::<AppId, ContentPhase>::new());
    let dock_pulse = create_rw_signal(None::<DockPulse>);
    let prefs = store_value(PrefsStore);
    let loader = store_value(loader);

    let dispatch = Callback::new(move |action: DesktopAction| {
        let mut desktop = state.get_untracked();
        let mut ui = interaction.get_untracked();
        let previous_desktop = desktop.clone();
        let previous_ui = ui.clone();

        match reduce_desktop(&mut desktop, &mut ui, action) {
            Ok(new_effects) => {
                if desktop != previous_desktop {
                    state.set(desktop);
                }
                if ui != previous_ui {
                    interaction.set(ui);
                }
                if !new_effects.is_empty() {
                    let mut queue = effects.get_untracked();
                    queue.extend(new_effects);
                    effects.set(queue);
                }
            }
            Err(err) => logging::warn!("desktop reducer error: {err}"),
        }
    });

    let runtime = DesktopRuntimeContext {
        state,
        interaction,
        effects,
        content,
        dock_pulse,
        prefs,
        loader,
        dispatch,
    };

    provide_context(runtime);

    hydrate_preferences(prefs.get_value(), viewport, dispatch);
    effect_executor::install(runtime);

    children().into_view()
}

/// Returns the current [`DesktopRuntimeContext`].
///
/// # Panics
///
/// Panics if called outside [`DesktopProvider`].
pub fn use_desktop_runtime() -> DesktopRuntimeContext {
    use_context::<DesktopRuntimeContext>().expect("DesktopRuntimeContext not provided")
}
