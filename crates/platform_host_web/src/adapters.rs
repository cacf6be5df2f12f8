use std::rc::Rc;

use platform_host::{AnalyticsService, HostServices, HostStrategy, NoopAnalyticsService};

use crate::MatomoAnalyticsService;

/// Returns the compile-time selected host strategy for the active build.
pub const fn selected_host_strategy() -> HostStrategy {
    #[cfg(feature = "host-stub")]
    {
        HostStrategy::Stub
    }

    #[cfg(not(feature = "host-stub"))]
    {
        HostStrategy::Browser
    }
}

/// Returns the selected host strategy as a stable string token.
pub fn host_strategy_name() -> &'static str {
    selected_host_strategy().as_str()
}

/// Adapter enum that erases the concrete analytics backend behind [`AnalyticsService`].
#[derive(Debug, Clone, Copy)]
pub enum AnalyticsServiceAdapter {
    /// Matomo `_paq` queue in the browser page.
    Browser(MatomoAnalyticsService),
    /// No-op fallback used when the host is stubbed.
    Stub(NoopAnalyticsService),
}

impl AnalyticsService for AnalyticsServiceAdapter {
    fn record_virtual_page_view(&self, path: &str, title: &str) -> Result<(), String> {
        match self {
            Self::Browser(service) => service.record_virtual_page_view(path, title),
            Self::Stub(service) => service.record_virtual_page_view(path, title),
        }
    }
}

/// Builds the analytics adapter for the selected host strategy.
pub fn analytics_service() -> AnalyticsServiceAdapter {
    match selected_host_strategy() {
        HostStrategy::Browser => AnalyticsServiceAdapter::Browser(MatomoAnalyticsService),
        HostStrategy::Stub => AnalyticsServiceAdapter::Stub(NoopAnalyticsService),
    }
}

/// Assembles the host service bundle injected into `desktop_runtime`.
pub fn build_host_services() -> HostServices {
    HostServices::new(Rc::new(analytics_service()), selected_host_strategy())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundle_strategy_matches_selected_strategy() {
        let host = build_host_services();
        assert_eq!(host.host_strategy, selected_host_strategy());
        assert_eq!(host_strategy_name(), host.host_strategy.as_str());
    }

    #[test]
    fn adapter_records_without_error_off_browser() {
        assert_eq!(
            analytics_service().record_virtual_page_view("/projects", "Projects"),
            Ok(())
        );
    }
}
