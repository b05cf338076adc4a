//! # Design
//!
//! - Keep error messages constant while carrying context fields for debugging.
//! - Collaborator failures are preserved untouched as `source`; the bootstrap
//!   never retries or recovers.

use std::error::Error as StdError;

use thiserror::Error;

use crate::bootstrap::BootstrapState;

/// Result alias for bootstrap operations.
pub type BootstrapResult<T> = Result<T, BootstrapError>;

/// Failures raised while starting the application.
#[derive(Debug, Error)]
pub enum BootstrapError {
    /// A step was requested out of order or a second time.
    #[error("invalid bootstrap transition")]
    InvalidTransition {
        /// State the bootstrap was in.
        from: BootstrapState,
        /// State the caller tried to reach.
        to: BootstrapState,
    },
    /// The maps SDK rejected its configuration.
    #[error("maps loader configuration failed")]
    MapsLoader {
        /// Error raised by the loader.
        source: Box<dyn StdError + 'static>,
    },
    /// The UI framework failed to mount the root component.
    #[error("application mount failed")]
    Mount {
        /// Selector of the host element.
        selector: &'static str,
        /// Error raised by the mount target.
        source: Box<dyn StdError + 'static>,
    },
}

impl BootstrapError {
    /// Message followed by every source, joined with `": "`.
    #[must_use]
    pub fn chain(&self) -> String {
        let mut text = self.to_string();
        let mut source = self.source();
        while let Some(err) = source {
            text.push_str(": ");
            text.push_str(&err.to_string());
            source = err.source();
        }
        text
    }

    pub(crate) fn maps_loader(source: impl StdError + 'static) -> Self {
        Self::MapsLoader {
            source: Box::new(source),
        }
    }

    pub(crate) fn mount(selector: &'static str, source: impl StdError + 'static) -> Self {
        Self::Mount {
            selector,
            source: Box::new(source),
        }
    }
}

/// Errors raised by [`crate::MapsSdkConfig`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MapsConfigError {
    /// Options were already written once.
    #[error("maps sdk already configured")]
    AlreadyConfigured,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn helpers_preserve_source_errors() {
        let loader = BootstrapError::maps_loader(MapsConfigError::AlreadyConfigured);
        let source = loader.source().map(ToString::to_string);
        assert_eq!(source.as_deref(), Some("maps sdk already configured"));

        let mount = BootstrapError::mount("#app", io::Error::other("no host"));
        assert!(matches!(mount, BootstrapError::Mount { selector: "#app", .. }));
        assert_eq!(mount.source().map(ToString::to_string).as_deref(), Some("no host"));
        assert_eq!(mount.chain(), "application mount failed: no host");
    }

    #[test]
    fn chain_without_source_is_the_message() {
        let err = BootstrapError::InvalidTransition {
            from: BootstrapState::Mounted,
            to: BootstrapState::Configured,
        };
        assert_eq!(err.chain(), "invalid bootstrap transition");
    }
}
