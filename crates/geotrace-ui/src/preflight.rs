//! Native preflight: runs the bootstrap up to the maps configuration step so
//! the baked-in key can be checked without a browser.
//!
//! # Design
//! - Runtime environment overrides build-time values.
//! - Mounting needs a DOM, so the sequence stops at `Configured`.

use anyhow::{Result, anyhow};
use geotrace_app::{
    Bootstrap, BootstrapResult, DiagnosticSink, MapsSdkConfig, TracingSink, log_diagnostic,
};
use geotrace_config::{AppConfig, BuildEnv, EnvSource, Layered, ProcessEnv};
use geotrace_telemetry::{LOG_FORMAT_VAR, LogFormat, LoggingConfig, init_logging};
use tracing::warn;

/// Initialise logging and run the preflight against the real environment.
///
/// # Errors
///
/// Returns an error if logging cannot be installed or the maps SDK handle
/// rejects its options.
pub fn run() -> Result<()> {
    let env = Layered::new(ProcessEnv, BuildEnv);
    init_logging(&LoggingConfig {
        format: log_format(&env),
        ..LoggingConfig::default()
    })?;

    let bootstrap = preflight(&env, &mut TracingSink).map_err(|err| anyhow!(err.chain()))?;
    warn!(
        selector = bootstrap.config().mount_selector,
        state = bootstrap.state().as_str(),
        "mounting requires a wasm32 build; build with `trunk build` or `cargo build --target wasm32-unknown-unknown`"
    );
    Ok(())
}

/// Log format selected by `GEOTRACE_LOG_FORMAT`, or the build default.
#[must_use]
pub fn log_format(env: &impl EnvSource) -> LogFormat {
    LogFormat::from_setting(env.get(LOG_FORMAT_VAR).as_deref()).unwrap_or_else(LogFormat::infer)
}

/// Resolve configuration from `env`, report the key and configure a fresh
/// maps SDK handle.
///
/// # Errors
///
/// Propagates the bootstrap's configuration failure.
pub fn preflight(
    env: &impl EnvSource,
    sink: &mut impl DiagnosticSink,
) -> BootstrapResult<Bootstrap> {
    let mut bootstrap = Bootstrap::new(AppConfig::load(env));
    log_diagnostic(&bootstrap.config().maps_api_key, sink);
    let mut sdk = MapsSdkConfig::new();
    bootstrap.configure_maps_loader(&mut sdk)?;
    Ok(bootstrap)
}
