#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]

//! Geotrace front-end bootstrap sequence.
//!
//! Layout: `bootstrap.rs` (lifecycle and ordering), `maps.rs` (explicit maps
//! SDK configuration handle), `sink.rs` (diagnostic output), `error.rs`.
//! Nothing here touches the DOM, so the whole sequence runs in native tests.

/// Start-up lifecycle and collaborator traits.
pub mod bootstrap;
/// Error types for the start-up path.
pub mod error;
/// Write-once maps SDK configuration shared with the UI tree.
pub mod maps;
/// Diagnostic output channels.
pub mod sink;

pub use bootstrap::{Bootstrap, BootstrapState, MapsLoader, Mount, log_diagnostic};
pub use error::{BootstrapError, BootstrapResult, MapsConfigError};
pub use maps::MapsSdkConfig;
pub use sink::{DiagnosticSink, TracingSink};
