//! Browser wiring: console diagnostics, DOM mount and the wasm entry point.

use geotrace_app::{Bootstrap, DiagnosticSink, MapsSdkConfig, Mount};
use geotrace_config::{AppConfig, BuildEnv, KeyDiagnostic};
use gloo::console;
use gloo::utils::document;

use crate::app::{GeotraceApp, GeotraceAppProps};
use crate::error::MountError;

/// Writes the key diagnostic to the browser console.
struct ConsoleSink;

impl DiagnosticSink for ConsoleSink {
    fn emit(&mut self, diagnostic: &KeyDiagnostic) {
        console::log!(format!("System: Google Maps Key loaded: {diagnostic}"));
    }
}

/// Renders [`GeotraceApp`] into the element matching the selector.
struct DomMount {
    maps: MapsSdkConfig,
}

impl Mount for DomMount {
    type Error = MountError;

    fn mount(&mut self, selector: &'static str) -> Result<(), Self::Error> {
        if !self.maps.is_configured() {
            return Err(MountError::MapsNotConfigured);
        }
        let host = document()
            .query_selector(selector)
            .map_err(|err| MountError::InvalidSelector {
                selector,
                detail: format!("{err:?}"),
            })?
            .ok_or(MountError::HostNotFound { selector })?;
        yew::Renderer::<GeotraceApp>::with_root_and_props(
            host,
            GeotraceAppProps {
                maps: self.maps.clone(),
            },
        )
        .render();
        Ok(())
    }
}

/// Configure the maps SDK from the build environment and mount the UI.
///
/// Failures are reported on the console; nothing is retried.
pub fn run_app() {
    console_error_panic_hook::set_once();
    let config = AppConfig::load(&BuildEnv);
    let maps = MapsSdkConfig::new();
    let mut loader = maps.clone();
    let mut mount = DomMount { maps };
    if let Err(err) = Bootstrap::new(config).run(&mut ConsoleSink, &mut loader, &mut mount) {
        console::error!(format!("System: bootstrap failed: {}", err.chain()));
    }
}
