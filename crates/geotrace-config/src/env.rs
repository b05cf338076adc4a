//! Environment sources the start-up configuration is read from.
//!
//! # Design
//! - Reading goes through [`EnvSource`] so tests can swap in a [`MapEnv`]
//!   instead of mutating the process environment.
//! - A missing entry is `None`, never an error.

use std::collections::BTreeMap;
use std::env::{self, VarError};
use std::fmt::{self, Debug, Formatter};

use tracing::warn;

/// Read-only mapping from configuration names to string values.
pub trait EnvSource {
    /// Look up `name`, returning `None` when the entry is absent.
    fn get(&self, name: &str) -> Option<String>;
}

impl<T: EnvSource + ?Sized> EnvSource for &T {
    fn get(&self, name: &str) -> Option<String> {
        (**self).get(name)
    }
}

/// Values baked into the binary when it was compiled.
///
/// This is the bundle's build-time configuration map; for wasm builds it is
/// the only source available.
#[derive(Clone, Copy, Debug, Default)]
pub struct BuildEnv;

impl BuildEnv {
    const ENTRIES: &'static [(&'static str, Option<&'static str>)] = &[(
        crate::MAPS_API_KEY_VAR,
        option_env!("GEOTRACE_GOOGLE_MAPS_API_KEY"),
    )];

    /// Names of the entries captured at build time.
    #[must_use]
    pub fn names() -> impl Iterator<Item = &'static str> {
        Self::ENTRIES.iter().map(|(name, _)| *name)
    }
}

impl EnvSource for BuildEnv {
    fn get(&self, name: &str) -> Option<String> {
        Self::ENTRIES
            .iter()
            .find(|(entry, _)| *entry == name)
            .and_then(|(_, value)| value.map(str::to_string))
    }
}

/// Process environment read at runtime; only meaningful on native hosts.
#[derive(Clone, Copy, Debug, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn get(&self, name: &str) -> Option<String> {
        match env::var(name) {
            Ok(value) => Some(value),
            Err(VarError::NotPresent) => None,
            Err(VarError::NotUnicode(_)) => {
                warn!(var = name, "ignoring non-UTF-8 environment value");
                None
            }
        }
    }
}

/// In-memory source, used to substitute configuration in tests.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct MapEnv {
    entries: BTreeMap<String, String>,
}

impl MapEnv {
    /// Empty source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace an entry.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.entries.insert(name.into(), value.into());
        self
    }
}

// Values may be secrets, so only names are printed.
impl Debug for MapEnv {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.entries.keys()).finish()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MapEnv {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        }
    }
}

impl EnvSource for MapEnv {
    fn get(&self, name: &str) -> Option<String> {
        self.entries.get(name).cloned()
    }
}

/// Two sources where the first one that has an entry wins.
#[derive(Clone, Copy, Debug, Default)]
pub struct Layered<A, B> {
    primary: A,
    fallback: B,
}

impl<A, B> Layered<A, B> {
    /// Prefer `primary`, fall back to `fallback`.
    #[must_use]
    pub const fn new(primary: A, fallback: B) -> Self {
        Self { primary, fallback }
    }
}

impl<A: EnvSource, B: EnvSource> EnvSource for Layered<A, B> {
    fn get(&self, name: &str) -> Option<String> {
        self.primary
            .get(name)
            .or_else(|| self.fallback.get(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MAPS_API_KEY_VAR;

    #[test]
    fn map_env_returns_entries_and_none_for_missing() {
        let env = MapEnv::new().with("A", "1");
        assert_eq!(env.get("A").as_deref(), Some("1"));
        assert_eq!(env.get("B"), None);
    }

    #[test]
    fn map_env_debug_hides_values() {
        let env: MapEnv = [(MAPS_API_KEY_VAR, "AIzaSySecretValue")]
            .into_iter()
            .collect();
        let rendered = format!("{env:?}");
        assert!(rendered.contains(MAPS_API_KEY_VAR));
        assert!(!rendered.contains("SecretValue"));
    }

    #[test]
    fn layered_prefers_primary_then_falls_back() {
        let primary = MapEnv::new().with("A", "primary");
        let fallback = MapEnv::new().with("A", "fallback").with("B", "fallback");
        let layered = Layered::new(&primary, &fallback);
        assert_eq!(layered.get("A").as_deref(), Some("primary"));
        assert_eq!(layered.get("B").as_deref(), Some("fallback"));
        assert_eq!(layered.get("C"), None);
    }

    #[test]
    fn layered_keeps_empty_primary_value() {
        let primary = MapEnv::new().with("A", "");
        let fallback = MapEnv::new().with("A", "fallback");
        assert_eq!(Layered::new(primary, fallback).get("A").as_deref(), Some(""));
    }

    #[test]
    fn build_env_captures_maps_key_name() {
        assert!(BuildEnv::names().any(|name| name == MAPS_API_KEY_VAR));
        assert_eq!(BuildEnv.get("GEOTRACE_NOT_CAPTURED"), None);
    }

    #[test]
    fn process_env_missing_entry_is_none() {
        assert_eq!(ProcessEnv.get("GEOTRACE_TEST_SURELY_UNSET_VARIABLE"), None);
    }
}
