//! Decoded favorite entries and their byte spans.
//!
//! This module provides [`FavoriteEntry`], one favorite item together with the
//! `[start, end)` byte span it occupied in the raw favorites value at the time
//! it was decoded.
//!
//! ## Offset Validity
//!
//! Spans point into the raw value *as it was when the entry was produced*.
//! Every mutation through [`FavoriteList`](crate::FavoriteList) recomputes the
//! spans of all entries from the mutation point onward; spans held across a
//! mutation by any other means are stale.
//!
//! ## Examples
//!
//! ```rust
//! use favitems::decode;
//!
//! let entries = decode("coffee,tea,muffin ");
//! assert_eq!(entries[0].text(), "coffee");
//! assert_eq!(entries[0].span(), 0..6);
//! assert_eq!(entries[1].span(), 7..10);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Range;

/// One decoded favorite item plus its byte span in the raw favorites value.
///
/// The final entry of a non-empty list carries the trailing-space marker as
/// part of its text; its `end` is the byte index of that marker, so removing
/// the entry leaves the marker in place for whichever entry becomes last.
///
/// # Examples
///
/// ```rust
/// use favitems::FavoriteEntry;
///
/// let entry = FavoriteEntry::new("coffee", 0, 6);
/// assert_eq!(entry.text(), "coffee");
/// assert_eq!(entry.start(), 0);
/// assert_eq!(entry.end(), 6);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavoriteEntry {
    text: String,
    start: usize,
    end: usize,
}

impl FavoriteEntry {
    /// Creates an entry from its text and span endpoints.
    #[must_use]
    pub fn new(text: impl Into<String>, start: usize, end: usize) -> Self {
        FavoriteEntry {
            text: text.into(),
            start,
            end,
        }
    }

    /// The item text, including the trailing-space marker for the final entry.
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Start byte offset of the entry in the raw value it was decoded from.
    #[inline]
    #[must_use]
    pub fn start(&self) -> usize {
        self.start
    }

    /// End byte offset (exclusive) of the entry in the raw value.
    ///
    /// For the final entry this is the index of the trailing-space marker,
    /// or 0 when the input carried no marker at all.
    #[inline]
    #[must_use]
    pub fn end(&self) -> usize {
        self.end
    }

    /// The entry's span as a range, convenient for slicing the raw value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use favitems::decode;
    ///
    /// let raw = "coffee,tea ";
    /// let entries = decode(raw);
    /// assert_eq!(&raw[entries.first().unwrap().span()], "coffee");
    /// ```
    #[inline]
    #[must_use]
    pub fn span(&self) -> Range<usize> {
        self.start..self.end
    }

    /// The item text with the trailing-space marker stripped, for display.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use favitems::decode;
    ///
    /// let entries = decode("coffee,muffin ");
    /// assert_eq!(entries[1].text(), "muffin ");
    /// assert_eq!(entries[1].trimmed(), "muffin");
    /// ```
    #[inline]
    #[must_use]
    pub fn trimmed(&self) -> &str {
        self.text.trim_end_matches(' ')
    }

    pub(crate) fn shift_down(&mut self, amount: usize) {
        self.start = self.start.saturating_sub(amount);
        self.end = self.end.saturating_sub(amount);
    }
}

impl fmt::Display for FavoriteEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.trimmed())
    }
}
