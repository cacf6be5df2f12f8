use super::*;
use crate::model::WindowRect;

/// Everything a visible window needs to render, derived from state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct WindowFrame {
    pub title: String,
    pub icon: Option<String>,
    pub rect: WindowRect,
    pub z_index: u32,
    pub active: bool,
    pub maximized: bool,
}

/// Returns the frame for `window_id`, or `None` while the window is hidden.
pub(super) fn window_frame(state: &DesktopState, window_id: &WindowId) -> Option<WindowFrame> {
    let manager = &state.manager;
    let record = manager.record(window_id).filter(|record| record.open)?;
    let surface = manager.surfaces().by_id(window_id)?;

    Some(WindowFrame {
        title: surface.display_title().to_string(),
        icon: surface.icon_ref().map(str::to_string),
        rect: surface.rect,
        z_index: surface.z_index,
        active: manager.is_active(window_id),
        maximized: record.maximized,
    })
}

pub(super) fn window_class(frame: &WindowFrame) -> String {
    let mut class = String::from("window");
    if !frame.active {
        class.push_str(" inactive");
    }
    if frame.maximized {
        class.push_str(" maximized");
    }
    class
}

/// Inline geometry; maximized windows take their size from the stylesheet.
pub(super) fn window_style(frame: &WindowFrame) -> String {
    if frame.maximized {
        format!("z-index:{};", frame.z_index)
    } else {
        format!(
            "left:{}px;top:{}px;width:{}px;height:{}px;z-index:{};",
            frame.rect.x, frame.rect.y, frame.rect.w, frame.rect.h, frame.z_index
        )
    }
}

#[component]
pub(super) fn DesktopWindow(window_id: WindowId, summary: String) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let frame_id = window_id.clone();
    let frame = create_memo(move |_| runtime.state.with(|state| window_frame(state, &frame_id)));

    let pointer_window = window_id.clone();
    let on_pointerdown = move |ev: web_sys::PointerEvent| {
        if ev.button() != 0 {
            return;
        }
        let region = classify_window_region(&ev);
        if region == WindowRegion::DragHandle {
            try_set_pointer_capture(&ev);
            ev.prevent_default();
        }
        runtime.dispatch_action(DesktopAction::WindowPointerDown {
            window_id: pointer_window.clone(),
            region,
            pointer: pointer_from_pointer_event(&ev),
        });
    };

    let controls_window = window_id.clone();
    let on_controls_click = move |ev: web_sys::MouseEvent| {
        if let Some(action) = titlebar_action(&ev) {
            runtime.dispatch_action(DesktopAction::TitlebarButton {
                window_id: controls_window.clone(),
                action,
            });
        }
    };

    let dom_id = format!("window-{window_id}");
    let class = move || frame.with(|win| win.as_ref().map(window_class).unwrap_or_default());
    let style = move || frame.with(|win| win.as_ref().map(window_style).unwrap_or_default());
    let title = move || {
        frame.with(|win| win.as_ref().map(|win| win.title.clone()).unwrap_or_default())
    };
    let icon = move || frame.with(|win| win.as_ref().and_then(|win| win.icon.clone()));
    let maximize_label = move || {
        if frame.with(|win| win.as_ref().is_some_and(|win| win.maximized)) {
            "Restore"
        } else {
            "Maximize"
        }
    };

    view! {
        <Show when=move || frame.with(Option::is_some) fallback=|| ()>
            <section
                id=dom_id.clone()
                class=class
                style=style
                role="dialog"
                aria-label=title
                on:pointerdown=on_pointerdown.clone()
            >
                <header class="title-bar" data-drag-handle="true">
                    <div class="title-bar-text">
                        {move || {
                            icon().map(|src| {
                                view! { <img class="title-bar-icon" src=src alt="" aria-hidden="true" /> }
                            })
                        }}
                        <span>{title}</span>
                    </div>
                    <div class="title-bar-controls" on:click=on_controls_click.clone()>
                        <button data-action={TitlebarAction::Minimize.tag()} aria-label="Minimize"></button>
                        <button data-action={TitlebarAction::Maximize.tag()} aria-label=maximize_label></button>
                        <button data-action={TitlebarAction::Close.tag()} aria-label="Close"></button>
                    </div>
                </header>
                <div class="window-body">
                    <p>{summary.clone()}</p>
                </div>
            </section>
        </Show>
    }
}
