//! Shared host-bundle models for browser and stub runtime composition.

use std::rc::Rc;

use crate::{AnalyticsService, NoopAnalyticsService};

/// Stable host strategy selected for the current build/runtime composition path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostStrategy {
    /// Browser-backed runtime composition.
    Browser,
    /// Composition with placeholder/no-op adapters (tests, non-browser previews).
    Stub,
}

impl HostStrategy {
    /// Returns a stable string token for diagnostics and runtime inspection.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Browser => "browser",
            Self::Stub => "stub",
        }
    }
}

/// Runtime-selected host service bundle injected into the desktop runtime.
///
/// All environment-specific service selection happens before this bundle crosses into
/// `desktop_runtime`, which keeps the window manager decoupled from browser adapter details.
#[derive(Clone)]
pub struct HostServices {
    /// Virtual page-view analytics collaborator.
    pub analytics: Rc<dyn AnalyticsService>,
    /// Stable strategy identifier for diagnostics.
    pub host_strategy: HostStrategy,
}

impl HostServices {
    /// Builds a host bundle around the given analytics service.
    pub fn new(analytics: Rc<dyn AnalyticsService>, host_strategy: HostStrategy) -> Self {
        Self {
            analytics,
            host_strategy,
        }
    }

    /// Host bundle whose services all do nothing.
    pub fn stub() -> Self {
        Self::new(Rc::new(NoopAnalyticsService), HostStrategy::Stub)
    }
}

impl std::fmt::Debug for HostServices {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HostServices")
            .field("host_strategy", &self.host_strategy)
            .finish_non_exhaustive()
    }
}
