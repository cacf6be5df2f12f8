//! DOM hit-testing that turns raw browser events into reducer vocabulary.
//!
//! Elements opt in through attributes: `data-desktop-icon="<window id>"` on desktop icons,
//! `data-drag-handle` on title bars, `data-action="<tag>"` on title bar controls, plus the
//! `#start-button` and `#start-menu` ids.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

use crate::model::{ClickTarget, PointerPosition, TitlebarAction, WindowId, WindowRegion};

const DESKTOP_ICON_ATTR: &str = "data-desktop-icon";
const ACTION_ATTR: &str = "data-action";
pub(super) const START_BUTTON_ID: &str = "start-button";
pub(super) const START_MENU_ID: &str = "start-menu";

const DESKTOP_ICON_SELECTOR: &str = "[data-desktop-icon]";
const DRAG_HANDLE_SELECTOR: &str = "[data-drag-handle]";
const ACTION_SELECTOR: &str = "[data-action]";
const START_BUTTON_SELECTOR: &str = "#start-button";
const START_MENU_SELECTOR: &str = "#start-menu";

#[cfg(target_arch = "wasm32")]
fn target_element(ev: &web_sys::Event) -> Option<web_sys::Element> {
    ev.target()?.dyn_into::<web_sys::Element>().ok()
}

#[cfg(not(target_arch = "wasm32"))]
fn target_element(_: &web_sys::Event) -> Option<web_sys::Element> {
    None
}

fn closest(element: &web_sys::Element, selector: &str) -> Option<web_sys::Element> {
    element.closest(selector).ok().flatten()
}

fn resolve_click_target(icon_id: Option<String>, on_start_button: bool, in_start_menu: bool) -> ClickTarget {
    match icon_id {
        Some(id) if !id.is_empty() => ClickTarget::DesktopIcon(WindowId::new(id)),
        _ if on_start_button => ClickTarget::StartButton,
        _ if in_start_menu => ClickTarget::StartMenu,
        _ => ClickTarget::Elsewhere,
    }
}

fn resolve_window_region(on_button: bool, on_drag_handle: bool) -> WindowRegion {
    if on_button {
        WindowRegion::Control
    } else if on_drag_handle {
        WindowRegion::DragHandle
    } else {
        WindowRegion::Body
    }
}

/// Classifies a document-level click for the shell chrome.
pub(super) fn classify_click_target(ev: &web_sys::MouseEvent) -> ClickTarget {
    let Some(element) = target_element(ev) else {
        return ClickTarget::Elsewhere;
    };

    let icon_id = closest(&element, DESKTOP_ICON_SELECTOR)
        .and_then(|icon| icon.get_attribute(DESKTOP_ICON_ATTR));
    resolve_click_target(
        icon_id,
        closest(&element, START_BUTTON_SELECTOR).is_some(),
        closest(&element, START_MENU_SELECTOR).is_some(),
    )
}

/// Classifies which part of a window a pointer-down landed on.
pub(super) fn classify_window_region(ev: &web_sys::PointerEvent) -> WindowRegion {
    let Some(element) = target_element(ev) else {
        return WindowRegion::Body;
    };

    resolve_window_region(
        closest(&element, "button").is_some(),
        closest(&element, DRAG_HANDLE_SELECTOR).is_some(),
    )
}

/// Resolves the title bar control under a click, ignoring unknown action tags.
pub(super) fn titlebar_action(ev: &web_sys::MouseEvent) -> Option<TitlebarAction> {
    let element = target_element(ev)?;
    let tag = closest(&element, ACTION_SELECTOR)?.get_attribute(ACTION_ATTR)?;
    TitlebarAction::from_tag(&tag)
}

pub(super) fn pointer_from_pointer_event(ev: &web_sys::PointerEvent) -> PointerPosition {
    PointerPosition {
        x: ev.client_x(),
        y: ev.client_y(),
    }
}

#[cfg(target_arch = "wasm32")]
pub(super) fn try_set_pointer_capture(ev: &web_sys::PointerEvent) {
    if let Some(target) = ev.current_target() {
        if let Ok(element) = target.dyn_into::<web_sys::Element>() {
            let _ = element.set_pointer_capture(ev.pointer_id());
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub(super) fn try_set_pointer_capture(_: &web_sys::PointerEvent) {}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn icon_wins_over_other_click_targets() {
        assert_eq!(
            resolve_click_target(Some("about".to_string()), false, true),
            ClickTarget::DesktopIcon(WindowId::from("about"))
        );
        assert_eq!(
            resolve_click_target(Some(String::new()), false, false),
            ClickTarget::Elsewhere
        );
    }

    #[test]
    fn start_button_and_menu_are_told_apart() {
        assert_eq!(resolve_click_target(None, true, false), ClickTarget::StartButton);
        assert_eq!(resolve_click_target(None, false, true), ClickTarget::StartMenu);
        assert_eq!(resolve_click_target(None, false, false), ClickTarget::Elsewhere);
    }

    #[test]
    fn buttons_inside_the_title_bar_never_start_a_drag() {
        assert_eq!(resolve_window_region(true, true), WindowRegion::Control);
        assert_eq!(resolve_window_region(false, true), WindowRegion::DragHandle);
        assert_eq!(resolve_window_region(false, false), WindowRegion::Body);
    }
}
