//! Desktop shell UI composition and interaction surfaces.
//!
//! Components only render from [`DesktopState`] and translate browser events into
//! [`DesktopAction`] values; they never keep window state of their own.

mod input;
mod menus;
mod taskbar;
mod window;

use leptos::*;

use self::{
    input::{
        classify_click_target, classify_window_region, pointer_from_pointer_event,
        titlebar_action, try_set_pointer_capture, START_BUTTON_ID, START_MENU_ID,
    },
    menus::{ShutdownOverlay, StartMenu},
    taskbar::Taskbar,
    window::DesktopWindow,
};

pub use crate::runtime_context::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext};
use crate::{
    model::{DesktopState, TitlebarAction, WindowId, WindowRegion},
    reducer::{key_opens_selected_icon, DesktopAction},
};

#[derive(Debug, Clone, PartialEq, Eq)]
struct DesktopIconEntry {
    window_id: WindowId,
    label: String,
    icon: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct WindowEntry {
    window_id: WindowId,
    summary: String,
}

#[component]
fn DesktopIcon(entry: DesktopIconEntry) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let selected_id = entry.window_id.clone();
    let open_id = entry.window_id.clone();
    let selected = move || {
        runtime
            .state
            .with(|desktop| desktop.chrome.is_icon_selected(&selected_id))
    };

    view! {
        <button
            class="desktop-icon"
            class:selected=selected
            data-desktop-icon=entry.window_id.to_string()
            on:dblclick=move |_| {
                runtime.dispatch_action(DesktopAction::DesktopIconDoubleClick {
                    window_id: open_id.clone(),
                });
            }
        >
            <img src=entry.icon alt="" aria-hidden="true" />
            <span class="desktop-icon-label">{entry.label}</span>
        </button>
    }
}

#[component]
/// Renders the full desktop shell UI and installs the shell-wide input listeners.
pub fn DesktopShell() -> impl IntoView {
    let runtime = use_desktop_runtime();

    let (icons, windows) = runtime.catalog.with_value(|catalog| {
        let icons = catalog
            .desktop_icons()
            .map(|window| DesktopIconEntry {
                window_id: window.id.clone(),
                label: window.icon_label().to_string(),
                icon: window.icon.clone(),
            })
            .collect::<Vec<_>>();
        let windows = catalog
            .windows
            .iter()
            .map(|window| WindowEntry {
                window_id: window.id.clone(),
                summary: window.summary.clone(),
            })
            .collect::<Vec<_>>();
        (icons, windows)
    });

    let click_listener = window_event_listener(ev::click, move |ev| {
        runtime.dispatch_action(DesktopAction::DocumentClick {
            target: classify_click_target(&ev),
        });
    });
    on_cleanup(move || click_listener.remove());

    let keydown_listener = window_event_listener(ev::keydown, move |ev| {
        if ev.default_prevented() {
            return;
        }
        let key = ev.key();
        let claimed = runtime
            .state
            .with_untracked(|desktop| key_opens_selected_icon(&desktop.chrome, &key));
        if !claimed {
            return;
        }
        // Keeps the focused icon button from turning Enter into a click that reselects it.
        ev.prevent_default();
        runtime.dispatch_action(DesktopAction::KeyDown { key });
    });
    on_cleanup(move || keydown_listener.remove());

    let on_pointer_move = move |ev: web_sys::PointerEvent| {
        if runtime.interaction.with_untracked(|ui| ui.dragging.is_some()) {
            runtime.dispatch_action(DesktopAction::UpdateMove {
                pointer: pointer_from_pointer_event(&ev),
            });
        }
    };
    let on_pointer_end = move |_| {
        if runtime.interaction.with_untracked(|ui| ui.dragging.is_some()) {
            runtime.dispatch_action(DesktopAction::EndMove);
        }
    };

    view! {
        <div
            id="desktop"
            class="desktop"
            on:pointermove=on_pointer_move
            on:pointerup=on_pointer_end
            on:pointercancel=on_pointer_end
        >
            <div class="desktop-icons" role="group" aria-label="Desktop">
                {icons
                    .into_iter()
                    .map(|entry| view! { <DesktopIcon entry=entry /> })
                    .collect_view()}
            </div>

            <div class="window-layer">
                {windows
                    .into_iter()
                    .map(|entry| {
                        view! { <DesktopWindow window_id=entry.window_id summary=entry.summary /> }
                    })
                    .collect_view()}
            </div>

            <StartMenu />
            <Taskbar />
            <ShutdownOverlay />
        </div>
    }
}
