//! Window lifecycle controller: open, close, minimize, maximize, focus and surface moves.
//!
//! Every operation is a silent no-op when the window surface is not registered or the
//! operation makes no sense for the window's current record. Nothing here returns an error;
//! callers that need to tell "unknown window" apart check [`WindowManager::contains`] first.

use crate::{
    model::{WindowId, WindowRect},
    reducer::RuntimeEffect,
    store::{WindowRecord, WindowStateStore},
    surface::SurfaceRegistry,
    z_order::ZOrderAllocator,
};

/// Virtual path reported when the last running window closes.
pub const HOME_PAGE_PATH: &str = "/";

/// Virtual page path reported when `window_id` opens.
pub fn window_page_path(window_id: &WindowId) -> String {
    format!("/{window_id}")
}

/// Owned window-management context: surfaces, records, focus and stacking state.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowManager {
    surfaces: SurfaceRegistry,
    store: WindowStateStore,
    active_window: Option<WindowId>,
    z_order: ZOrderAllocator,
    home_title: String,
}

impl WindowManager {
    pub fn new(surfaces: SurfaceRegistry, home_title: impl Into<String>) -> Self {
        Self {
            surfaces,
            store: WindowStateStore::default(),
            active_window: None,
            z_order: ZOrderAllocator::default(),
            home_title: home_title.into(),
        }
    }

    pub fn surfaces(&self) -> &SurfaceRegistry {
        &self.surfaces
    }

    pub fn store(&self) -> &WindowStateStore {
        &self.store
    }

    pub fn record(&self, window_id: &WindowId) -> Option<&WindowRecord> {
        self.store.get(window_id)
    }

    pub fn active_window(&self) -> Option<&WindowId> {
        self.active_window.as_ref()
    }

    pub fn is_active(&self, window_id: &WindowId) -> bool {
        self.active_window.as_ref() == Some(window_id)
    }

    pub fn z_order(&self) -> &ZOrderAllocator {
        &self.z_order
    }

    pub fn home_title(&self) -> &str {
        &self.home_title
    }

    /// Whether a surface is registered for `window_id`.
    pub fn contains(&self, window_id: &WindowId) -> bool {
        self.surfaces.contains(window_id)
    }

    pub fn rect(&self, window_id: &WindowId) -> Option<WindowRect> {
        self.surfaces.by_id(window_id).map(|surface| surface.rect)
    }

    pub fn z_index(&self, window_id: &WindowId) -> Option<u32> {
        self.surfaces.by_id(window_id).map(|surface| surface.z_index)
    }

    /// Shows the window (creating its record on first use), reports a page view, and focuses it.
    pub fn open(&mut self, window_id: &WindowId) -> Vec<RuntimeEffect> {
        let Some(surface) = self.surfaces.by_id(window_id) else {
            return Vec::new();
        };
        let title = surface.display_title().to_string();

        let record = self.store.ensure(window_id);
        record.open = true;
        record.minimized = false;

        self.focus(window_id);
        vec![RuntimeEffect::RecordPageView {
            path: window_page_path(window_id),
            title,
        }]
    }

    /// Hides the window and resets its flags, reporting the home page once nothing is left running.
    pub fn close(&mut self, window_id: &WindowId) -> Vec<RuntimeEffect> {
        if !self.surfaces.contains(window_id) {
            return Vec::new();
        }
        let Some(record) = self.store.get_mut(window_id) else {
            return Vec::new();
        };
        if !record.is_running() {
            return Vec::new();
        }

        record.open = false;
        record.minimized = false;
        record.maximized = false;
        self.release_focus(window_id);

        if self.store.any_running() {
            Vec::new()
        } else {
            vec![RuntimeEffect::RecordPageView {
                path: HOME_PAGE_PATH.to_string(),
                title: self.home_title.clone(),
            }]
        }
    }

    /// Hides a running window while keeping its taskbar button. Returns whether anything changed.
    pub fn minimize(&mut self, window_id: &WindowId) -> bool {
        if !self.surfaces.contains(window_id) {
            return false;
        }
        let Some(record) = self.store.get_mut(window_id) else {
            return false;
        };
        if !record.is_running() {
            return false;
        }

        record.open = false;
        record.minimized = true;
        self.release_focus(window_id);
        true
    }

    /// Flips the maximized flag, capturing geometry on the way in and restoring it on the way out.
    pub fn toggle_maximize(&mut self, window_id: &WindowId) -> bool {
        let Some(record) = self.store.get_mut(window_id) else {
            return false;
        };
        let Some(surface) = self.surfaces.by_id_mut(window_id) else {
            return false;
        };

        if record.maximized {
            if let Some(saved) = record.saved_rect {
                surface.rect = saved;
            }
            record.maximized = false;
        } else {
            record.saved_rect = Some(surface.rect);
            record.maximized = true;
        }
        true
    }

    /// Raises an open window above every other surface and makes it the active window.
    pub fn focus(&mut self, window_id: &WindowId) -> bool {
        if !self.store.is_open(window_id) {
            return false;
        }
        let Some(handle) = self.surfaces.resolve(window_id) else {
            return false;
        };

        if self.z_order.needs_renormalize() {
            self.renormalize_open_windows();
        }
        let z_index = self.z_order.allocate();
        if let Some(surface) = self.surfaces.get_mut(handle) {
            surface.z_index = z_index;
        }
        self.active_window = Some(window_id.clone());
        true
    }

    /// Moves a window's origin, clamped to the desktop's top-left. Maximized windows stay put.
    pub fn move_window(&mut self, window_id: &WindowId, x: i32, y: i32) -> bool {
        if self.store.is_maximized(window_id) {
            return false;
        }
        let Some(surface) = self.surfaces.by_id_mut(window_id) else {
            return false;
        };

        let moved = surface.rect.moved_to_clamped(x, y);
        let changed = moved != surface.rect;
        surface.rect = moved;
        changed
    }

    fn release_focus(&mut self, window_id: &WindowId) {
        if self.active_window.as_ref() == Some(window_id) {
            self.active_window = None;
        }
    }

    fn renormalize_open_windows(&mut self) {
        let store = &self.store;
        let slots = self
            .surfaces
            .iter_mut()
            .filter(|surface| store.is_open(&surface.id))
            .map(|surface| &mut surface.z_index);
        self.z_order.renormalize(slots);
    }

    #[cfg(test)]
    pub(crate) fn set_z_order(&mut self, z_order: ZOrderAllocator) {
        self.z_order = z_order;
    }
}
