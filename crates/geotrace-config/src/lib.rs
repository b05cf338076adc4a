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

//! Start-up configuration for the Geotrace front-end.
//!
//! Layout: `env.rs` (environment sources), `model.rs` (typed config and the
//! maps loader record), `diagnostic.rs` (key presence reporting without
//! leaking the key).

pub mod defaults;
pub mod diagnostic;
pub mod env;
pub mod model;

pub use defaults::{KEY_PREFIX_CHARS, LOADER_VERSION, MAPS_API_KEY_VAR, MOUNT_SELECTOR};
pub use diagnostic::KeyDiagnostic;
pub use env::{BuildEnv, EnvSource, Layered, MapEnv, ProcessEnv};
pub use model::{ApiKey, AppConfig, MapsLoaderOptions, resolve_api_key};
