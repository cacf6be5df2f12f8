//! Host-side runtime helpers for executing reducer effects.
//!
//! The reducer and window manager never talk to host services directly. They emit
//! [`RuntimeEffect`] values, and this context runs them against the injected
//! [`HostServices`] bundle after the state transition has been committed.

use std::rc::Rc;

use leptos::logging;
use platform_host::{AnalyticsService, HostServices};

use crate::reducer::RuntimeEffect;

#[derive(Clone)]
/// Host service bundle for desktop runtime side effects.
pub struct DesktopHostContext {
    analytics: Rc<dyn AnalyticsService>,
}

impl DesktopHostContext {
    /// Wraps the host bundle assembled by the entry layer.
    pub fn new(host_services: HostServices) -> Self {
        Self {
            analytics: host_services.analytics,
        }
    }

    /// Executes a single [`RuntimeEffect`]. Collaborator failures are logged and dropped.
    pub fn run_runtime_effect(&self, effect: RuntimeEffect) {
        match effect {
            RuntimeEffect::RecordPageView { path, title } => {
                if let Err(err) = self.analytics.record_virtual_page_view(&path, &title) {
                    logging::debug_warn!("analytics page view `{path}` failed: {err}");
                }
            }
        }
    }
}

impl Default for DesktopHostContext {
    fn default() -> Self {
        Self::new(HostServices::stub())
    }
}

#[cfg(test)]
mod tests {
    use platform_host::{HostStrategy, MemoryAnalyticsService, PageView};
    use pretty_assertions::assert_eq;

    use super::*;

    struct FailingAnalytics;

    impl AnalyticsService for FailingAnalytics {
        fn record_virtual_page_view(&self, _path: &str, _title: &str) -> Result<(), String> {
            Err("tracker unavailable".to_string())
        }
    }

    #[test]
    fn page_view_effect_reaches_analytics_service() {
        let memory = MemoryAnalyticsService::default();
        let host = DesktopHostContext::new(HostServices::new(
            Rc::new(memory.clone()),
            HostStrategy::Browser,
        ));

        host.run_runtime_effect(RuntimeEffect::RecordPageView {
            path: "/about".to_string(),
            title: "About Me".to_string(),
        });

        assert_eq!(memory.recorded(), vec![PageView::new("/about", "About Me")]);
    }

    #[test]
    fn analytics_failure_is_swallowed() {
        let host = DesktopHostContext::new(HostServices::new(
            Rc::new(FailingAnalytics),
            HostStrategy::Stub,
        ));

        host.run_runtime_effect(RuntimeEffect::RecordPageView {
            path: "/".to_string(),
            title: "Home".to_string(),
        });
    }
}
