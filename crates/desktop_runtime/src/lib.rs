//! Retro desktop shell runtime: window lifecycle, stacking, taskbar and shell chrome.
//!
//! State transitions live in [`reducer::reduce_desktop`] over the owned [`WindowManager`];
//! the Leptos components in [`components`] render from that state and dispatch actions back.

pub mod catalog;
pub mod chrome;
pub mod components;
pub mod effect_executor;
pub mod host;
pub mod model;
pub mod reducer;
pub mod runtime_context;
pub mod store;
pub mod surface;
pub mod taskbar;
pub mod window_manager;
pub mod z_order;

pub use catalog::{shell_catalog, CatalogError, ShellCatalog, WindowManifest};
pub use components::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext, DesktopShell};
pub use model::*;
pub use reducer::{reduce_desktop, DesktopAction, ReducerError, RuntimeEffect};
pub use taskbar::{taskbar_activation, taskbar_buttons, TaskbarActivation, TaskbarButton};
pub use window_manager::{window_page_path, HOME_PAGE_PATH};
