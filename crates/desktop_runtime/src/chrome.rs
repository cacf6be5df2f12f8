//! Presentation state for the shell chrome around the windows.

use crate::model::WindowId;

/// Start menu, desktop icon selection and shutdown overlay state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ShellChromeState {
    pub start_menu_open: bool,
    /// At most one desktop icon is selected at a time.
    pub selected_icon: Option<WindowId>,
    pub shutdown_overlay_visible: bool,
}

impl ShellChromeState {
    pub fn toggle_start_menu(&mut self) {
        self.start_menu_open = !self.start_menu_open;
    }

    /// Closes the start menu, returning whether it was open.
    pub fn close_start_menu(&mut self) -> bool {
        std::mem::replace(&mut self.start_menu_open, false)
    }

    /// Selects `window_id`'s desktop icon, replacing any previous selection.
    pub fn select_icon(&mut self, window_id: WindowId) {
        self.selected_icon = Some(window_id);
    }

    pub fn clear_selection(&mut self) {
        self.selected_icon = None;
    }

    pub fn is_icon_selected(&self, window_id: &WindowId) -> bool {
        self.selected_icon.as_ref() == Some(window_id)
    }

    pub fn show_shutdown(&mut self) {
        self.start_menu_open = false;
        self.shutdown_overlay_visible = true;
    }

    pub fn dismiss_shutdown(&mut self) {
        self.shutdown_overlay_visible = false;
    }

    /// `aria-expanded` value for the start button.
    pub fn aria_expanded(&self) -> &'static str {
        if self.start_menu_open {
            "true"
        } else {
            "false"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_menu_toggle_mirrors_aria_expanded() {
        let mut chrome = ShellChromeState::default();
        assert_eq!(chrome.aria_expanded(), "false");

        chrome.toggle_start_menu();
        assert!(chrome.start_menu_open);
        assert_eq!(chrome.aria_expanded(), "true");

        assert!(chrome.close_start_menu());
        assert!(!chrome.close_start_menu());
        assert_eq!(chrome.aria_expanded(), "false");
    }

    #[test]
    fn icon_selection_is_exclusive() {
        let mut chrome = ShellChromeState::default();
        chrome.select_icon(WindowId::from("about"));
        chrome.select_icon(WindowId::from("projects"));

        assert!(!chrome.is_icon_selected(&WindowId::from("about")));
        assert!(chrome.is_icon_selected(&WindowId::from("projects")));
        chrome.clear_selection();
        assert_eq!(chrome.selected_icon, None);
    }

    #[test]
    fn shutdown_closes_menu_and_dismisses() {
        let mut chrome = ShellChromeState {
            start_menu_open: true,
            ..ShellChromeState::default()
        };

        chrome.show_shutdown();
        assert!(!chrome.start_menu_open);
        assert!(chrome.shutdown_overlay_visible);

        chrome.dismiss_shutdown();
        assert!(!chrome.shutdown_overlay_visible);
    }
}
