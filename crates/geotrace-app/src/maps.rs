//! # Design
//!
//! - The maps SDK options live in an explicit handle that is cloned into
//!   whatever needs them, instead of a process-wide global.
//! - Written exactly once; every clone observes the same value afterwards.
//! - Single-threaded (`Rc`), matching the browser's run-to-completion model.

use std::rc::Rc;

use geotrace_config::MapsLoaderOptions;
use once_cell::unsync::OnceCell;

use crate::bootstrap::MapsLoader;
use crate::error::MapsConfigError;

/// Shared, write-once maps SDK configuration.
#[derive(Clone, Debug, Default)]
pub struct MapsSdkConfig {
    options: Rc<OnceCell<MapsLoaderOptions>>,
}

impl MapsSdkConfig {
    /// Unconfigured handle.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Options once configured, `None` before.
    #[must_use]
    pub fn options(&self) -> Option<&MapsLoaderOptions> {
        self.options.get()
    }

    /// Whether options were written.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.options.get().is_some()
    }
}

// Handles are equal when they share storage; Yew contexts rely on this.
impl PartialEq for MapsSdkConfig {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.options, &other.options)
    }
}

impl MapsLoader for MapsSdkConfig {
    type Error = MapsConfigError;

    fn set_options(&mut self, options: MapsLoaderOptions) -> Result<(), Self::Error> {
        self.options
            .set(options)
            .map_err(|_| MapsConfigError::AlreadyConfigured)
    }
}
