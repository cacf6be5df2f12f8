//! Typed host-domain contracts shared by the desktop runtime and browser adapters.
//!
//! This crate is the API-first boundary for platform services. The runtime only ever talks to
//! the traits defined here; concrete browser adapters live in `platform_host_web`.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod analytics;
pub mod host;

pub use analytics::{AnalyticsService, MemoryAnalyticsService, NoopAnalyticsService, PageView};
pub use host::{HostServices, HostStrategy};
