//! Errors raised while attaching the UI to the document.

use thiserror::Error;

/// Failures of the DOM mount step.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MountError {
    /// No element matches the host selector.
    #[error("mount host element not found")]
    HostNotFound {
        /// Selector that matched nothing.
        selector: &'static str,
    },
    /// The document rejected the selector syntax.
    #[error("invalid mount selector")]
    InvalidSelector {
        /// Selector passed to the document.
        selector: &'static str,
        /// Browser-provided detail.
        detail: String,
    },
    /// Mount was attempted before the maps SDK held its options.
    #[error("maps sdk not configured before mount")]
    MapsNotConfigured,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_are_constant() {
        assert_eq!(
            MountError::HostNotFound { selector: "#app" }.to_string(),
            "mount host element not found"
        );
        assert_eq!(
            MountError::MapsNotConfigured.to_string(),
            "maps sdk not configured before mount"
        );
    }
}
