pub mod apps;
pub mod components;
pub mod desktop_grid;
pub mod dock;
pub mod effect_executor;
pub mod icon_controller;
pub mod model;
pub mod persistence;
pub mod reducer;
pub mod runtime_context;
pub mod window_manager;

pub use components::{DesktopProvider, DesktopRuntimeContext, DesktopShell};
pub use model::*;
pub use reducer::{reduce_desktop, DesktopAction, ReducerError, RuntimeEffect};
