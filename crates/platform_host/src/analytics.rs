//! Analytics host-service contracts and in-process adapters.

use std::{cell::RefCell, rc::Rc};

use serde::{Deserialize, Serialize};

/// A single virtual page view reported to the analytics collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageView {
    /// Virtual URL path, for example `/about` or `/` for the home page.
    pub path: String,
    /// Document title reported with the view.
    pub title: String,
}

impl PageView {
    /// Builds a page view from borrowed path and title values.
    pub fn new(path: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            title: title.into(),
        }
    }
}

/// Host service receiving virtual page views from the desktop shell.
///
/// Calls are fire-and-forget. The runtime never consults the result beyond logging it and
/// never retries.
pub trait AnalyticsService {
    /// Records one virtual page view.
    fn record_virtual_page_view(&self, path: &str, title: &str) -> Result<(), String>;
}

#[derive(Debug, Clone, Copy, Default)]
/// No-op analytics service for hosts without a tracker.
pub struct NoopAnalyticsService;

impl AnalyticsService for NoopAnalyticsService {
    fn record_virtual_page_view(&self, _path: &str, _title: &str) -> Result<(), String> {
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
/// In-memory analytics service that keeps every recorded view in call order.
pub struct MemoryAnalyticsService {
    inner: Rc<RefCell<Vec<PageView>>>,
}

impl MemoryAnalyticsService {
    /// Returns a copy of every page view recorded so far.
    pub fn recorded(&self) -> Vec<PageView> {
        self.inner.borrow().clone()
    }
}

impl AnalyticsService for MemoryAnalyticsService {
    fn record_virtual_page_view(&self, path: &str, title: &str) -> Result<(), String> {
        self.inner.borrow_mut().push(PageView::new(path, title));
        Ok(())
    }
}
