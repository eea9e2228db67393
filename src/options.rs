//! Configuration options for the favorites codec and edit algebra.
//!
//! This module provides [`FavoritesOptions`], which controls the stored-value
//! capacity and the one deliberately preserved decoding quirk.
//!
//! ## Examples
//!
//! ```rust
//! use favitems::{decode_with_options, FavoritesOptions};
//!
//! // Default: 400-character cap, legacy trailing entry preserved
//! let options = FavoritesOptions::new();
//! assert_eq!(decode_with_options("", &options).len(), 1);
//!
//! // Opt out of the spurious empty entry on marker-less input
//! let options = FavoritesOptions::new().with_legacy_trailing_entry(false);
//! assert!(decode_with_options("", &options).is_empty());
//! ```

/// Maximum stored length of the raw favorites value, in characters.
pub const DEFAULT_MAX_LEN: usize = 400;

/// Configuration for decoding and mutating a favorites value.
///
/// # Examples
///
/// ```rust
/// use favitems::FavoritesOptions;
///
/// let options = FavoritesOptions::new()
///     .with_max_len(120)
///     .with_legacy_trailing_entry(false);
/// assert_eq!(options.max_len, 120);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FavoritesOptions {
    /// Hard cap on the raw value; additions past it are silently truncated.
    pub max_len: usize,
    /// When `true` (the default), decoding always emits a final entry even if
    /// its buffer is empty, matching the original scanner. Downstream menu
    /// numbering depends on the resulting list length, so turning this off is
    /// only safe when nothing maps displayed indices back onto the list.
    pub legacy_trailing_entry: bool,
}

impl Default for FavoritesOptions {
    fn default() -> Self {
        FavoritesOptions {
            max_len: DEFAULT_MAX_LEN,
            legacy_trailing_entry: true,
        }
    }
}

impl FavoritesOptions {
    /// Creates the default options (400-character cap, legacy decode quirk on).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use favitems::FavoritesOptions;
    ///
    /// let options = FavoritesOptions::new();
    /// assert_eq!(options.max_len, 400);
    /// assert!(options.legacy_trailing_entry);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the hard cap on the raw value, in characters.
    #[must_use]
    pub fn with_max_len(mut self, max_len: usize) -> Self {
        self.max_len = max_len;
        self
    }

    /// Enables or disables the always-emit-final-entry decode behavior.
    #[must_use]
    pub fn with_legacy_trailing_entry(mut self, legacy: bool) -> Self {
        self.legacy_trailing_entry = legacy;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = FavoritesOptions::default();
        assert_eq!(options.max_len, DEFAULT_MAX_LEN);
        assert!(options.legacy_trailing_entry);
    }

    #[test]
    fn test_builder() {
        let options = FavoritesOptions::new()
            .with_max_len(64)
            .with_legacy_trailing_entry(false);
        assert_eq!(options.max_len, 64);
        assert!(!options.legacy_trailing_entry);
    }
}
