//! Fixed names and values shared by the start-up path.
//!
//! # Design
//! - Keep every contractual literal in one place so the loader, the bootstrap
//!   and the tests agree on them.

/// Build environment entry holding the Google Maps API key.
pub const MAPS_API_KEY_VAR: &str = "GEOTRACE_GOOGLE_MAPS_API_KEY";
/// Loader release channel passed to the maps SDK.
pub const LOADER_VERSION: &str = "weekly";
/// Selector of the host element the root component mounts into.
pub const MOUNT_SELECTOR: &str = "#app";
/// Number of leading key characters allowed in diagnostics.
pub const KEY_PREFIX_CHARS: usize = 6;
