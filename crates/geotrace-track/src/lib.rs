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

//! GPS track interpolation for drive videos.
//!
//! Layout: `gps.rs` (coordinate parsing), `telemetry.rs` (per-second linear
//! track and its CSV rendering), `error.rs`.

pub mod error;
/// Coordinate parsing and interpolation.
pub mod gps;
pub mod telemetry;

pub use error::{TrackError, TrackResult};
pub use gps::{GpsPoint, SIMULATED_END_OFFSET_DEG};
pub use telemetry::{LinearTrack, TELEMETRY_HEADER, TrackSample, telemetry_log};
