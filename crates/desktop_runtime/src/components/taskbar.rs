use super::*;
use crate::taskbar::{taskbar_buttons, TaskbarButton};

fn taskbar_button_class(button: &TaskbarButton) -> &'static str {
    match (button.active, button.minimized) {
        (true, _) => "taskbar-button active",
        (false, true) => "taskbar-button minimized",
        (false, false) => "taskbar-button",
    }
}

#[component]
pub(super) fn Taskbar() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let start_menu_open = move || state.with(|desktop| desktop.chrome.start_menu_open);

    view! {
        <footer class="taskbar" role="toolbar" aria-label="Taskbar">
            <button
                id=START_BUTTON_ID
                class=move || if start_menu_open() { "start-button active" } else { "start-button" }
                aria-haspopup="true"
                aria-controls=START_MENU_ID
                aria-expanded=move || state.with(|desktop| desktop.chrome.aria_expanded())
                on:click:undelegated=move |ev: web_sys::MouseEvent| {
                    ev.stop_propagation();
                    runtime.dispatch_action(DesktopAction::ToggleStartMenu);
                }
            >
                <span>"Start"</span>
            </button>

            <div class="taskbar-windows" role="group" aria-label="Running windows">
                <For
                    each=move || state.with(|desktop| taskbar_buttons(&desktop.manager))
                    key=|button| {
                        (button.window_id.clone(), button.active, button.minimized)
                    }
                    let:button
                >
                    {{
                        let window_id = button.window_id.clone();
                        view! {
                            <button
                                class=taskbar_button_class(&button)
                                aria-pressed=button.active.to_string()
                                title=button.title.clone()
                                on:click=move |_| {
                                    runtime.dispatch_action(DesktopAction::ActivateTaskbarButton {
                                        window_id: window_id.clone(),
                                    });
                                }
                            >
                                {button.icon.clone().map(|icon| {
                                    view! { <img class="taskbar-icon" src=icon alt="" aria-hidden="true" /> }
                                })}
                                <span>{button.title.clone()}</span>
                            </button>
                        }
                    }}
                </For>
            </div>
        </footer>
    }
}
