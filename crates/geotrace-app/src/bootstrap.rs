use std::error::Error as StdError;
use std::fmt::{self, Display, Formatter};

use geotrace_config::{ApiKey, AppConfig, MapsLoaderOptions};
use tracing::debug;

use crate::error::{BootstrapError, BootstrapResult};
use crate::sink::DiagnosticSink;

/// Maps SDK configuration entry point.
pub trait MapsLoader {
    /// Error raised when the SDK rejects the options.
    type Error: StdError + 'static;

    /// Hand the SDK its options. Called once, before any UI is mounted.
    ///
    /// # Errors
    ///
    /// Returns the SDK's own error unchanged.
    fn set_options(&mut self, options: MapsLoaderOptions) -> Result<(), Self::Error>;
}

/// UI framework mount entry point.
pub trait Mount {
    /// Error raised by the framework, such as a missing host element.
    type Error: StdError + 'static;

    /// Build the root component tree and attach it to `selector`.
    ///
    /// # Errors
    ///
    /// Returns the framework's own error unchanged.
    fn mount(&mut self, selector: &'static str) -> Result<(), Self::Error>;
}

/// Position in the one-shot start-up sequence. Transitions only move forward.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum BootstrapState {
    /// Nothing has run yet.
    Uninitialized,
    /// The maps SDK holds its options.
    Configured,
    /// The root component is attached to the document.
    Mounted,
}

impl BootstrapState {
    /// Lower-case label used in logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Uninitialized => "uninitialized",
            Self::Configured => "configured",
            Self::Mounted => "mounted",
        }
    }
}

impl Display for BootstrapState {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Emit the single presence line for `key`.
pub fn log_diagnostic(key: &ApiKey, sink: &mut impl DiagnosticSink) {
    sink.emit(&key.diagnostic());
}

/// Start-up sequence: report the key, configure the maps SDK, mount the UI.
#[derive(Debug)]
pub struct Bootstrap {
    config: AppConfig,
    state: BootstrapState,
}

impl Bootstrap {
    /// Fresh bootstrap around resolved configuration.
    #[must_use]
    pub const fn new(config: AppConfig) -> Self {
        Self {
            config,
            state: BootstrapState::Uninitialized,
        }
    }

    /// Current lifecycle state.
    #[must_use]
    pub const fn state(&self) -> BootstrapState {
        self.state
    }

    /// Configuration the bootstrap was built with.
    #[must_use]
    pub const fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Run the whole sequence once.
    ///
    /// # Errors
    ///
    /// Fails with [`BootstrapError::InvalidTransition`] if the sequence already
    /// ran (nothing is emitted or called in that case), otherwise with the
    /// first collaborator failure.
    pub fn run(
        &mut self,
        sink: &mut impl DiagnosticSink,
        loader: &mut impl MapsLoader,
        mount: &mut impl Mount,
    ) -> BootstrapResult<()> {
        self.expect_state(BootstrapState::Uninitialized, BootstrapState::Configured)?;
        log_diagnostic(&self.config.maps_api_key, sink);
        self.configure_maps_loader(loader)?;
        self.mount_application(mount)
    }

    /// Pass the key and the `weekly` channel to the maps SDK.
    ///
    /// # Errors
    ///
    /// Fails if called after the SDK was configured, or with the loader's error.
    /// The state does not advance on failure.
    pub fn configure_maps_loader(&mut self, loader: &mut impl MapsLoader) -> BootstrapResult<()> {
        self.expect_state(BootstrapState::Uninitialized, BootstrapState::Configured)?;
        loader
            .set_options(self.config.maps_loader_options())
            .map_err(BootstrapError::maps_loader)?;
        self.advance(BootstrapState::Configured);
        Ok(())
    }

    /// Attach the root component to the configured host element.
    ///
    /// # Errors
    ///
    /// Fails unless the maps SDK was configured and nothing is mounted yet, or
    /// with the mount target's error.
    pub fn mount_application(&mut self, mount: &mut impl Mount) -> BootstrapResult<()> {
        self.expect_state(BootstrapState::Configured, BootstrapState::Mounted)?;
        let selector = self.config.mount_selector;
        mount
            .mount(selector)
            .map_err(|err| BootstrapError::mount(selector, err))?;
        self.advance(BootstrapState::Mounted);
        Ok(())
    }

    fn expect_state(&self, expected: BootstrapState, to: BootstrapState) -> BootstrapResult<()> {
        if self.state == expected {
            Ok(())
        } else {
            Err(BootstrapError::InvalidTransition {
                from: self.state,
                to,
            })
        }
    }

    fn advance(&mut self, next: BootstrapState) {
        debug!(from = self.state.as_str(), to = next.as_str(), "bootstrap state advanced");
        self.state = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MapsConfigError;
    use geotrace_config::KeyDiagnostic;
    use std::io;

    #[derive(Default)]
    struct NullSink(usize);

    impl DiagnosticSink for NullSink {
        fn emit(&mut self, _diagnostic: &KeyDiagnostic) {
            self.0 += 1;
        }
    }

    #[derive(Default)]
    struct FailingLoader(usize);

    impl MapsLoader for FailingLoader {
        type Error = MapsConfigError;

        fn set_options(&mut self, _options: MapsLoaderOptions) -> Result<(), Self::Error> {
            self.0 += 1;
            Err(MapsConfigError::AlreadyConfigured)
        }
    }

    #[derive(Default)]
    struct MissingHost(usize);

    impl Mount for MissingHost {
        type Error = io::Error;

        fn mount(&mut self, _selector: &'static str) -> Result<(), Self::Error> {
            self.0 += 1;
            Err(io::Error::other("host element missing"))
        }
    }

    #[test]
    fn log_diagnostic_emits_exactly_one_line() {
        let mut sink = NullSink::default();
        log_diagnostic(&ApiKey::from("AIzaSyXXXXXXX"), &mut sink);
        assert_eq!(sink.0, 1);
    }

    #[test]
    fn state_labels_are_stable() {
        assert_eq!(BootstrapState::Uninitialized.to_string(), "uninitialized");
        assert_eq!(BootstrapState::Configured.as_str(), "configured");
        assert_eq!(BootstrapState::Mounted.as_str(), "mounted");
        assert!(BootstrapState::Uninitialized < BootstrapState::Mounted);
    }

    #[test]
    fn mount_before_configure_is_rejected() {
        let mut bootstrap = Bootstrap::new(AppConfig::with_key(ApiKey::from("abc")));
        let mut mount = MissingHost::default();
        let err = bootstrap.mount_application(&mut mount);
        assert!(matches!(
            err,
            Err(BootstrapError::InvalidTransition {
                from: BootstrapState::Uninitialized,
                to: BootstrapState::Mounted,
            })
        ));
        assert_eq!(mount.0, 0);
    }

    #[test]
    fn loader_failure_leaves_state_unchanged() {
        let mut bootstrap = Bootstrap::new(AppConfig::with_key(ApiKey::default()));
        let mut loader = FailingLoader::default();
        let result = bootstrap.configure_maps_loader(&mut loader);
        assert!(matches!(result, Err(BootstrapError::MapsLoader { .. })));
        assert_eq!(bootstrap.state(), BootstrapState::Uninitialized);
        assert_eq!(loader.0, 1);
    }

    #[test]
    fn run_surfaces_loader_failure_without_mounting() {
        let mut bootstrap = Bootstrap::new(AppConfig::with_key(ApiKey::from("abc")));
        let mut sink = NullSink::default();
        let mut loader = FailingLoader::default();
        let mut mount = MissingHost::default();
        let result = bootstrap.run(&mut sink, &mut loader, &mut mount);
        assert!(matches!(result, Err(BootstrapError::MapsLoader { .. })));
        assert_eq!(sink.0, 1);
        assert_eq!(mount.0, 0);
    }

    #[test]
    fn mount_failure_is_reported_with_selector() {
        let mut bootstrap = Bootstrap::new(AppConfig::with_key(ApiKey::from("abc")));
        let mut sdk = crate::MapsSdkConfig::new();
        bootstrap.configure_maps_loader(&mut sdk).expect("configure");
        let mut mount = MissingHost::default();
        let err = bootstrap.mount_application(&mut mount);
        assert!(matches!(err, Err(BootstrapError::Mount { selector: "#app", .. })));
        assert_eq!(bootstrap.state(), BootstrapState::Configured);
    }
}
