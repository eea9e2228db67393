//! # favitems
//!
//! Codec and incremental-edit algebra for the delimited favorite-items field
//! of a cafe ordering backend, plus the legacy SQL-literal sanitizer that
//! travels with it.
//!
//! ## The micro-format
//!
//! A user's favorites are stored as one text column. Entries are separated
//! by commas; the final entry of a non-empty list is terminated by a single
//! trailing space instead of a comma, and that space is part of the final
//! entry's text:
//!
//! ```text
//! coffee,tea,muffin␣
//! ```
//!
//! Decoding produces entries that carry their byte spans, and edits splice
//! the raw text at those spans directly — offset surgery — instead of
//! reparsing and re-serializing on every change.
//!
//! ## Quick Start
//!
//! ```rust
//! use favitems::{FavoriteList, FavoritesOptions};
//!
//! let mut list = FavoriteList::decode("coffee,tea,muffin ", FavoritesOptions::new());
//!
//! // Entries are ordered and numbered exactly as stored
//! let texts: Vec<_> = list.entries().iter().map(|e| e.trimmed()).collect();
//! assert_eq!(texts, ["coffee", "tea", "muffin"]);
//!
//! // Remove by displayed position: spans shift, no reparse
//! list.remove(1).unwrap();
//! assert_eq!(list.raw(), "coffee,muffin ");
//!
//! // Add before the trailing marker
//! list.add("cocoa");
//! assert_eq!(list.raw(), "coffee,muffin,cocoa ");
//! ```
//!
//! ## Persistence
//!
//! [`FavoritesStore`] binds the algebra to a [`QueryExecutor`] collaborator
//! and performs the read-modify-write cycle against the `users.favitems`
//! column, routing every interpolated value through [`escape`].
//!
//! ## Legacy Compatibility
//!
//! Two quirks of the system this field migrated from are reproduced on
//! purpose:
//!
//! - Decoding always emits a final entry, even an empty one, so an empty
//!   stored value decodes to a single spurious entry. Downstream menu
//!   numbering depends on the list length, so this is preserved and only
//!   switchable via [`FavoritesOptions::legacy_trailing_entry`].
//! - [`escape`] is a narrow, imperfect escaping policy, documented in
//!   [`sanitize`] — legacy text compatibility, not a security mechanism.
//!
//! ## Concurrency
//!
//! Everything here is single-threaded and synchronous. The algebra assumes
//! it holds the only up-to-date copy of the value between decode and
//! write-back; concurrent edits of the same user record lose updates.

pub mod codec;
pub mod entry;
pub mod error;
pub mod executor;
pub mod list;
pub mod options;
pub mod sanitize;
pub mod store;

pub use entry::FavoriteEntry;
pub use error::{CapacityExceeded, Error, Result};
pub use executor::{QueryExecutor, Row};
pub use list::FavoriteList;
pub use options::{FavoritesOptions, DEFAULT_MAX_LEN};
pub use sanitize::escape;
pub use store::FavoritesStore;

/// Decodes a raw favorites value with default options.
///
/// # Examples
///
/// ```rust
/// use favitems::decode;
///
/// let entries = decode("coffee,tea ");
/// assert_eq!(entries.len(), 2);
/// assert_eq!(entries[1].text(), "tea ");
/// ```
#[must_use]
pub fn decode(raw: &str) -> Vec<FavoriteEntry> {
    codec::decode(raw, &FavoritesOptions::default())
}

/// Decodes a raw favorites value with explicit options.
///
/// # Examples
///
/// ```rust
/// use favitems::{decode_with_options, FavoritesOptions};
///
/// let options = FavoritesOptions::new().with_legacy_trailing_entry(false);
/// assert!(decode_with_options("", &options).is_empty());
/// ```
#[must_use]
pub fn decode_with_options(raw: &str, options: &FavoritesOptions) -> Vec<FavoriteEntry> {
    codec::decode(raw, options)
}

/// Encodes entries back into the raw stored form.
///
/// The inverse of [`decode`]: texts joined by commas, trailing-space marker
/// restored on the final entry.
///
/// # Examples
///
/// ```rust
/// use favitems::{decode, encode};
///
/// let raw = "coffee,tea,muffin ";
/// assert_eq!(encode(&decode(raw)), raw);
/// ```
#[must_use]
pub fn encode(entries: &[FavoriteEntry]) -> String {
    codec::encode(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_default_matches_explicit_default() {
        let raw = "coffee,tea ";
        assert_eq!(
            decode(raw),
            decode_with_options(raw, &FavoritesOptions::default())
        );
    }

    #[test]
    fn test_encode_decode_identity_on_wellformed_input() {
        for raw in ["coffee ", "coffee,tea ", "a,b,c "] {
            assert_eq!(encode(&decode(raw)), raw);
        }
    }

    #[test]
    fn test_spurious_entry_tolerated_by_callers() {
        let entries = decode("");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].text(), "");
    }
}
