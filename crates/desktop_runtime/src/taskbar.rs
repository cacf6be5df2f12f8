//! Taskbar button derivation and click resolution.

use crate::{model::WindowId, window_manager::WindowManager};

/// One taskbar button, derived from a running window record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskbarButton {
    pub window_id: WindowId,
    pub title: String,
    pub icon: Option<String>,
    /// Foreground window; never set for minimized windows.
    pub active: bool,
    pub minimized: bool,
}

/// What clicking a taskbar button should do to its window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskbarActivation {
    /// Reopen a minimized window (records a page view).
    Restore,
    /// Minimize the window that is already in the foreground.
    Minimize,
    /// Bring an open background window to the front.
    Focus,
}

/// Lists a button for every open or minimized window, in first-open order.
pub fn taskbar_buttons(manager: &WindowManager) -> Vec<TaskbarButton> {
    manager
        .store()
        .iter()
        .filter(|record| record.is_running())
        .filter_map(|record| {
            let surface = manager.surfaces().by_id(&record.id)?;
            Some(TaskbarButton {
                window_id: record.id.clone(),
                title: surface.display_title().to_string(),
                icon: surface.icon_ref().map(str::to_string),
                active: !record.minimized && manager.is_active(&record.id),
                minimized: record.minimized,
            })
        })
        .collect()
}

/// Resolves a taskbar click for `window_id`, or `None` when the window has no button.
pub fn taskbar_activation(manager: &WindowManager, window_id: &WindowId) -> Option<TaskbarActivation> {
    let record = manager.record(window_id)?;
    if !record.is_running() || !manager.contains(window_id) {
        return None;
    }

    let activation = if record.minimized {
        TaskbarActivation::Restore
    } else if manager.is_active(window_id) {
        TaskbarActivation::Minimize
    } else {
        TaskbarActivation::Focus
    };
    Some(activation)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::window_manager::test_support::{id, manager};

    fn summary(manager: &WindowManager) -> Vec<(String, bool)> {
        taskbar_buttons(manager)
            .into_iter()
            .map(|button| (button.window_id.to_string(), button.active))
            .collect()
    }

    fn expected(buttons: &[(&str, bool)]) -> Vec<(String, bool)> {
        buttons
            .iter()
            .map(|(window_id, active)| (window_id.to_string(), *active))
            .collect()
    }

    #[test]
    fn empty_desktop_has_no_buttons() {
        assert!(taskbar_buttons(&manager()).is_empty());
    }

    #[test]
    fn focus_marks_only_the_foreground_button_active() {
        let mut wm = manager();
        wm.open(&id("about"));
        wm.open(&id("projects"));
        wm.focus(&id("about"));

        assert_eq!(summary(&wm), expected(&[("about", true), ("projects", false)]));
    }

    #[test]
    fn buttons_keep_first_open_order_after_reopen() {
        let mut wm = manager();
        wm.open(&id("projects"));
        wm.open(&id("about"));
        wm.close(&id("projects"));
        wm.open(&id("projects"));

        assert_eq!(summary(&wm), expected(&[("projects", true), ("about", false)]));
    }

    #[test]
    fn minimized_windows_keep_an_inactive_button() {
        let mut wm = manager();
        wm.open(&id("about"));
        wm.minimize(&id("about"));

        let buttons = taskbar_buttons(&wm);
        assert_eq!(buttons.len(), 1);
        assert_eq!(buttons[0].title, "About Me");
        assert_eq!(buttons[0].icon.as_deref(), Some("/icons/user.png"));
        assert!(buttons[0].minimized);
        assert!(!buttons[0].active);
    }

    #[test]
    fn blank_titles_fall_back_to_the_window_id() {
        let mut wm = manager();
        wm.open(&id("contact"));

        let buttons = taskbar_buttons(&wm);
        assert_eq!(buttons[0].title, "contact");
        assert_eq!(buttons[0].icon, None);
    }

    #[test]
    fn activation_restores_minimizes_or_focuses() {
        let mut wm = manager();
        wm.open(&id("about"));
        wm.open(&id("projects"));

        assert_eq!(
            taskbar_activation(&wm, &id("projects")),
            Some(TaskbarActivation::Minimize)
        );
        assert_eq!(
            taskbar_activation(&wm, &id("about")),
            Some(TaskbarActivation::Focus)
        );

        wm.minimize(&id("projects"));
        assert_eq!(
            taskbar_activation(&wm, &id("projects")),
            Some(TaskbarActivation::Restore)
        );

        wm.close(&id("about"));
        assert_eq!(taskbar_activation(&wm, &id("about")), None);
        assert_eq!(taskbar_activation(&wm, &id("ghost")), None);
    }
}
