//! Error types for the favorites edit algebra and store layer.
//!
//! The codec and the sanitizer have no failure path by design: malformed raw
//! input is tolerated structurally rather than rejected. Errors only arise at
//! the mutation and persistence boundary:
//!
//! - [`Error::InvalidIndex`]: a removal targeted a position outside the list
//! - [`Error::Backend`]: the query executor failed; propagated, never retried
//! - [`Error::Capacity`]: the advisory truncation signal, escalated to an
//!   error by a caller that chooses to treat it as one
//!
//! ## Examples
//!
//! ```rust
//! use favitems::{FavoriteList, FavoritesOptions, Error};
//!
//! let mut list = FavoriteList::decode("coffee ", FavoritesOptions::new());
//! let err = list.remove(5).unwrap_err();
//! assert!(matches!(err, Error::InvalidIndex { index: 5, len: 1 }));
//! ```

use thiserror::Error;

/// Errors surfaced by list mutation and the store layer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Removal index outside `[0, len]` (`len` itself means "cancel").
    #[error("invalid favorites index {index} for list of {len} entries")]
    InvalidIndex { index: usize, len: usize },

    /// Any failure reported by the query executor.
    #[error("backend failure: {0}")]
    Backend(String),

    /// Capacity signal escalated to an error by the caller.
    #[error(transparent)]
    Capacity(#[from] CapacityExceeded),
}

/// Advisory signal that an addition pushed the raw value past the cap.
///
/// Additions never fail on capacity; the excess is silently dropped from the
/// end, matching the stored-field behavior. This value reports that the
/// truncation happened so callers can warn or escalate.
///
/// # Examples
///
/// ```rust
/// use favitems::{FavoriteList, FavoritesOptions};
///
/// let options = FavoritesOptions::new().with_max_len(8);
/// let mut list = FavoriteList::decode("", options);
/// let warning = list.add("quadruple espresso").expect("should truncate");
/// assert_eq!(warning.max, 8);
/// assert_eq!(list.raw().len(), 8);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("favorites value of {len} characters truncated to the {max}-character cap")]
pub struct CapacityExceeded {
    /// Length the raw value would have had without the cap.
    pub len: usize,
    /// The configured cap it was truncated to.
    pub max: usize,
}

impl Error {
    /// Creates a backend error from any displayable failure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use favitems::Error;
    ///
    /// let err = Error::backend("connection reset");
    /// assert!(err.to_string().contains("connection reset"));
    /// ```
    pub fn backend<T: std::fmt::Display>(msg: T) -> Self {
        Error::Backend(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = Error::InvalidIndex { index: 4, len: 2 };
        assert_eq!(
            err.to_string(),
            "invalid favorites index 4 for list of 2 entries"
        );

        let err = Error::backend("no such table: users");
        assert!(err.to_string().starts_with("backend failure:"));
    }

    #[test]
    fn test_capacity_converts_into_error() {
        let warning = CapacityExceeded { len: 420, max: 400 };
        let err: Error = warning.clone().into();
        assert_eq!(err, Error::Capacity(warning));
    }
}
