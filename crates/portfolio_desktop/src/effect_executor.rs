//! Explicit runtime effect-queue executor for reducer-emitted side effects.

use content_contract::ContentPhase;
use leptos::*;

use crate::{
    model::AppId,
    persistence,
    reducer::RuntimeEffect,
    runtime_context::{DesktopRuntimeContext, DockPulse, DockPulseKind},
};

/// Installs the effect executor that drains reducer-emitted runtime effects in order.
pub fn install(runtime: DesktopRuntimeContext) {
    // Clear the current queue before processing so nested dispatches enqueue a
    // fresh batch instead of being overwritten by the in-flight drain.
    create_effect(move |_| {
        let queued = runtime.effects.get();
        if queued.is_empty() {
            return;
        }

        runtime.effects.set(Vec::new());

        for effect in queued {
            run_runtime_effect(runtime, effect);
        }
    });
}

fn run_runtime_effect(runtime: DesktopRuntimeContext, effect: RuntimeEffect) {
    match effect {
        RuntimeEffect::LoadContent(app_id) => load_content(runtime, app_id),
        RuntimeEffect::PersistIconPositions => {
            let positions = runtime.state.with_untracked(|s| s.icon_positions.clone());
            if let Err(err) =
                persistence::save_icon_positions(runtime.prefs.get_value(), &positions)
            {
                logging::warn!("failed to persist icon positions: {err}");
            }
        }
        RuntimeEffect::PersistWallpaper => {
            let wallpaper_id = runtime.state.with_untracked(|s| s.wallpaper_id.clone());
            if let Err(err) = persistence::save_wallpaper(runtime.prefs.get_value(), &wallpaper_id)
            {
                logging::warn!("failed to persist wallpaper: {err}");
            }
        }
        RuntimeEffect::DockOpenPulse(app_id) => runtime.dock_pulse.set(Some(DockPulse {
            app_id,
            kind: DockPulseKind::Open,
        })),
        RuntimeEffect::DockClosePulse(app_id) => runtime.dock_pulse.set(Some(DockPulse {
            app_id,
            kind: DockPulseKind::Close,
        })),
    }
}

/// Kicks off an asynchronous content load for one app window.
///
/// The phase moves to `Loading` immediately; an in-flight load for the same app
/// is not re-entered, matching the reducer's open-transition dedupe.
fn load_content(runtime: DesktopRuntimeContext, app_id: AppId) {
    let already_loading = runtime.content.with_untracked(|phases| {
        matches!(
            phases.get(&app_id),
            Some(ContentPhase::Loading | ContentPhase::Ready(_))
        )
    });
    if already_loading {
        return;
    }

    runtime.content.update(|phases| {
        phases.insert(app_id, ContentPhase::Loading);
    });

    let loader = runtime.loader.get_value();
    let content = runtime.content;
    spawn_local(async move {
        let phase = match loader.load_content(app_id.as_str()).await {
            Ok(markup) => ContentPhase::Ready(markup),
            Err(err) => {
                logging::warn!("content load failed for {app_id}: {err}");
                ContentPhase::Error(err)
            }
        };
        content.update(|phases| {
            phases.insert(app_id, phase);
        });
    });
}
