use super::*;

#[component]
pub(super) fn StartMenu() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let entries = runtime.catalog.with_value(|catalog| {
        catalog
            .start_menu_items()
            .map(|window| (window.id.clone(), window.title.clone(), window.icon.clone()))
            .collect::<Vec<_>>()
    });

    view! {
        <Show when=move || state.with(|desktop| desktop.chrome.start_menu_open) fallback=|| ()>
            <div id=START_MENU_ID class="start-menu" role="menu" aria-label="Start menu">
                <div class="start-menu-banner" aria-hidden="true"></div>
                <ul class="start-menu-items">
                    {entries
                        .iter()
                        .cloned()
                        .map(|(window_id, title, icon)| {
                            view! {
                                <li>
                                    <button
                                        role="menuitem"
                                        on:click=move |_| {
                                            runtime.dispatch_action(DesktopAction::StartMenuItem {
                                                window_id: window_id.clone(),
                                            });
                                        }
                                    >
                                        <img class="start-menu-icon" src=icon alt="" aria-hidden="true" />
                                        <span>{title}</span>
                                    </button>
                                </li>
                            }
                        })
                        .collect_view()}
                    <li class="start-menu-separator" role="separator"></li>
                    <li>
                        <button
                            role="menuitem"
                            on:click=move |_| runtime.dispatch_action(DesktopAction::Shutdown)
                        >
                            <span>"Shut Down..."</span>
                        </button>
                    </li>
                </ul>
            </div>
        </Show>
    }
}

/// Lines shown on the shutdown overlay, top to bottom.
pub(super) const SHUTDOWN_MESSAGE: [&str; 2] = ["It's now safe to turn off", "your computer."];
pub(super) const SHUTDOWN_HINT: &str = "Click anywhere to restart";

#[component]
pub(super) fn ShutdownOverlay() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;

    view! {
        <Show when=move || state.with(|desktop| desktop.chrome.shutdown_overlay_visible) fallback=|| ()>
            <div
                class="shutdown-overlay"
                role="dialog"
                aria-modal="true"
                on:click=move |_| runtime.dispatch_action(DesktopAction::DismissShutdown)
            >
                <p class="shutdown-message">
                    {SHUTDOWN_MESSAGE[0]}
                    <br />
                    {SHUTDOWN_MESSAGE[1]}
                </p>
                <p class="shutdown-hint">{SHUTDOWN_HINT}</p>
            </div>
        </Show>
    }
}
