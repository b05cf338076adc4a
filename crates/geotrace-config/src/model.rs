//! Typed start-up configuration and the maps loader record.

use std::fmt::{self, Debug, Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::defaults::{LOADER_VERSION, MAPS_API_KEY_VAR, MOUNT_SELECTOR};
use crate::diagnostic::KeyDiagnostic;
use crate::env::EnvSource;

/// Google Maps API key, treated as an opaque secret.
///
/// Formatting never reveals the value; both `Debug` and `Display` print the
/// [`KeyDiagnostic`] form. The key is not validated.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ApiKey(String);

impl ApiKey {
    /// Wrap a raw key.
    #[must_use]
    pub const fn new(value: String) -> Self {
        Self(value)
    }

    /// Whether the key is the empty string.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Raw key, for handing to the maps SDK only.
    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }

    /// Presence report safe to log.
    #[must_use]
    pub fn diagnostic(&self) -> KeyDiagnostic {
        KeyDiagnostic::for_key(&self.0)
    }
}

impl From<String> for ApiKey {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for ApiKey {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl Debug for ApiKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ApiKey").field(&self.diagnostic()).finish()
    }
}

impl Display for ApiKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.diagnostic(), f)
    }
}

/// Configuration record accepted by the maps SDK loader.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapsLoaderOptions {
    /// Key the SDK authenticates with; passed through unchanged.
    pub api_key: ApiKey,
    /// Loader release channel.
    pub version: String,
}

impl MapsLoaderOptions {
    /// Options on the `weekly` channel, the only one the bootstrap uses.
    #[must_use]
    pub fn weekly(api_key: ApiKey) -> Self {
        Self {
            api_key,
            version: LOADER_VERSION.to_string(),
        }
    }
}

/// Everything the bootstrap needs, resolved once at start-up.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    /// Maps key; empty when the environment has none.
    pub maps_api_key: ApiKey,
    /// Host element selector for the root component.
    pub mount_selector: &'static str,
}

impl AppConfig {
    /// Resolve configuration from `env`. Absent entries become empty values.
    #[must_use]
    pub fn load(env: &impl EnvSource) -> Self {
        Self::with_key(resolve_api_key(env))
    }

    /// Configuration around an already resolved key.
    #[must_use]
    pub const fn with_key(maps_api_key: ApiKey) -> Self {
        Self {
            maps_api_key,
            mount_selector: MOUNT_SELECTOR,
        }
    }

    /// Loader options derived from this configuration.
    #[must_use]
    pub fn maps_loader_options(&self) -> MapsLoaderOptions {
        MapsLoaderOptions::weekly(self.maps_api_key.clone())
    }
}

/// Look up the maps key, substituting the empty string when it is absent.
#[must_use]
pub fn resolve_api_key(env: &impl EnvSource) -> ApiKey {
    ApiKey::new(env.get(MAPS_API_KEY_VAR).unwrap_or_default())
}
