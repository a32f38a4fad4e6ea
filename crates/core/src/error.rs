//! Error types for U-Packing.

use thiserror::Error;

/// Result type alias for U-Packing operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building or packing containers.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Invalid item provided.
    #[error("Invalid item: {0}")]
    InvalidItem(String),

    /// Invalid bin (container) provided.
    #[error("Invalid bin: {0}")]
    InvalidBin(String),

    /// None of the supplied bins could hold every item.
    #[error("No bin fits all items ({items} items, {bins} bins tried)")]
    NoFittingBin {
        /// Number of bins that were tried.
        bins: usize,
        /// Number of items that had to be packed.
        items: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = Error::InvalidItem("width of 'A' must be positive".into());
        assert_eq!(
            err.to_string(),
            "Invalid item: width of 'A' must be positive"
        );

        let err = Error::NoFittingBin { bins: 2, items: 3 };
        assert_eq!(err.to_string(), "No bin fits all items (3 items, 2 bins tried)");
    }
}
