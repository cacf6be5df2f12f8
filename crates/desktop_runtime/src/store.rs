//! Per-window lifecycle flags, kept in first-open order.

use crate::model::{WindowId, WindowRect};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowRecord {
    pub id: WindowId,
    /// Visible and not minimized.
    pub open: bool,
    /// Hidden but resumable from the taskbar.
    pub minimized: bool,
    pub maximized: bool,
    /// Geometry captured when the window was last maximized.
    pub saved_rect: Option<WindowRect>,
}

impl WindowRecord {
    fn closed(id: WindowId) -> Self {
        Self {
            id,
            open: false,
            minimized: false,
            maximized: false,
            saved_rect: None,
        }
    }

    /// Whether the window should be listed on the taskbar.
    pub fn is_running(&self) -> bool {
        self.open || self.minimized
    }
}

/// Insertion-ordered window records. Records are never removed for the session.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WindowStateStore {
    records: Vec<WindowRecord>,
}

impl WindowStateStore {
    pub fn get(&self, id: &WindowId) -> Option<&WindowRecord> {
        self.records.iter().find(|record| record.id == *id)
    }

    pub(crate) fn get_mut(&mut self, id: &WindowId) -> Option<&mut WindowRecord> {
        self.records.iter_mut().find(|record| record.id == *id)
    }

    /// Returns the record for `id`, creating a closed one at the end on first use.
    pub(crate) fn ensure(&mut self, id: &WindowId) -> &mut WindowRecord {
        let index = match self.records.iter().position(|record| record.id == *id) {
            Some(index) => index,
            None => {
                self.records.push(WindowRecord::closed(id.clone()));
                self.records.len() - 1
            }
        };
        &mut self.records[index]
    }

    pub fn iter(&self) -> impl Iterator<Item = &WindowRecord> {
        self.records.iter()
    }

    pub fn is_open(&self, id: &WindowId) -> bool {
        self.get(id).map(|record| record.open).unwrap_or(false)
    }

    pub fn is_maximized(&self, id: &WindowId) -> bool {
        self.get(id).map(|record| record.maximized).unwrap_or(false)
    }

    /// Whether any window is still open or minimized.
    pub fn any_running(&self) -> bool {
        self.records.iter().any(WindowRecord::is_running)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ensure_creates_once_and_keeps_first_open_order() {
        let mut store = WindowStateStore::default();
        let about = WindowId::from("about");
        let projects = WindowId::from("projects");

        store.ensure(&projects).open = true;
        store.ensure(&about).open = true;
        store.ensure(&projects).open = false;

        let ids: Vec<&str> = store.iter().map(|record| record.id.as_str()).collect();
        assert_eq!(ids, vec!["projects", "about"]);
        assert!(!store.is_open(&projects));
        assert!(store.is_open(&about));
    }

    #[test]
    fn missing_records_read_as_closed() {
        let store = WindowStateStore::default();
        let ghost = WindowId::from("ghost");
        assert!(store.get(&ghost).is_none());
        assert!(!store.is_open(&ghost));
        assert!(!store.is_maximized(&ghost));
        assert!(!store.any_running());
    }
}
