//! Key presence reporting that never leaks the key.
//!
//! # Design
//! - Only the first [`KEY_PREFIX_CHARS`] characters survive; counting is by
//!   `char` so multi-byte input never splits a code point.
//! - Control characters in the prefix are escaped so the report stays on one
//!   line.
//! - An empty key reports absence and carries no prefix at all.

use std::fmt::{self, Display, Formatter};

use crate::defaults::KEY_PREFIX_CHARS;

/// Loggable summary of an API key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum KeyDiagnostic {
    /// Key is non-empty; `prefix` holds at most six leading characters,
    /// escaped.
    Present {
        /// Leading characters of the key.
        prefix: String,
    },
    /// Key is the empty string.
    Empty,
}

impl KeyDiagnostic {
    /// Summarise `key`.
    #[must_use]
    pub fn for_key(key: &str) -> Self {
        if key.is_empty() {
            return Self::Empty;
        }
        Self::Present {
            prefix: key
                .chars()
                .take(KEY_PREFIX_CHARS)
                .flat_map(char::escape_debug)
                .collect(),
        }
    }

    /// Whether a key was supplied.
    #[must_use]
    pub const fn is_present(&self) -> bool {
        matches!(self, Self::Present { .. })
    }

    /// Leading characters when present.
    #[must_use]
    pub fn prefix(&self) -> Option<&str> {
        match self {
            Self::Present { prefix } => Some(prefix.as_str()),
            Self::Empty => None,
        }
    }
}

impl Display for KeyDiagnostic {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Present { prefix } => write!(f, "YES (starts with {prefix})"),
            Self::Empty => f.write_str("NO (EMPTY)"),
        }
    }
}
