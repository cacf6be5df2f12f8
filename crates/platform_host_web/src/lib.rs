//! Browser (`wasm32`) implementations of [`platform_host`] service contracts.
//!
//! This crate is the concrete browser-side host wiring layer. Off `wasm32` every adapter
//! degrades to a successful no-op so the runtime can be exercised in native tests.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

/// Compile-time host-strategy selection and concrete adapter factories for runtime wiring.
pub mod adapters;
/// Matomo page-view tracking through the page's `_paq` queue.
pub mod analytics;

pub use adapters::{
    analytics_service, build_host_services, host_strategy_name, selected_host_strategy,
    AnalyticsServiceAdapter,
};
pub use analytics::{matomo_page_view_commands, MatomoAnalyticsService, MATOMO_QUEUE_GLOBAL};
