//! Decoding and encoding of the raw favorites micro-format.
//!
//! ## The format
//!
//! A favorites value is a single text field. Entries are separated by commas;
//! the final entry of a non-empty list is terminated by one trailing space
//! instead of a comma, and that space is part of the final entry's text. The
//! empty value has no entries.
//!
//! ```text
//! coffee,tea,muffin␣
//! ```
//!
//! ## Decoding
//!
//! [`decode`] scans the value once, left to right, and produces entries that
//! carry their byte spans so later edits can splice the raw text directly
//! instead of reparsing (see [`FavoriteList`](crate::FavoriteList)).
//!
//! The scanner always emits a final entry at end of input, even when its
//! buffer is empty. An empty or marker-less value therefore decodes to one
//! spurious empty entry; downstream numbering depends on that list length, so
//! the behavior is kept and only switchable via
//! [`FavoritesOptions::legacy_trailing_entry`].
//!
//! ## Encoding
//!
//! [`encode`] is the serialization ground truth the offset surgery is checked
//! against: entry texts joined by commas, with the trailing space restored on
//! the final entry.
//!
//! ## Examples
//!
//! ```rust
//! use favitems::{decode, encode};
//!
//! let entries = decode("coffee,tea,muffin ");
//! let texts: Vec<_> = entries.iter().map(|e| e.text()).collect();
//! assert_eq!(texts, ["coffee", "tea", "muffin "]);
//! assert_eq!(encode(&entries), "coffee,tea,muffin ");
//! ```

use crate::{FavoriteEntry, FavoritesOptions};

/// Decodes a raw favorites value into its ordered entries.
///
/// Never fails: malformed input (doubled commas, missing trailing marker)
/// yields structurally odd entries rather than an error.
///
/// # Examples
///
/// ```rust
/// use favitems::{decode_with_options, FavoritesOptions};
///
/// let options = FavoritesOptions::new();
/// let entries = decode_with_options("coffee,tea ", &options);
/// assert_eq!(entries.len(), 2);
/// assert_eq!(entries[1].text(), "tea ");
/// assert_eq!(entries[1].span(), 7..10);
/// ```
#[must_use]
pub fn decode(raw: &str, options: &FavoritesOptions) -> Vec<FavoriteEntry> {
    let mut entries = Vec::new();
    let mut buf = String::new();
    let mut start = 0;
    // Index of the most recent trailing-marker candidate anywhere in the
    // input. The original scanner never reset it, so the final entry's end
    // falls back to a stale marker (or 0) when its own run has none.
    let mut marker = 0;
    let mut marker_seen = false;

    for (i, ch) in raw.char_indices() {
        match ch {
            ' ' => {
                // Only the first space of a run marks the trailing position;
                // further spaces are dropped until a non-space resets it.
                if !marker_seen {
                    marker = i;
                    marker_seen = true;
                    buf.push(ch);
                }
            }
            ',' => {
                entries.push(FavoriteEntry::new(std::mem::take(&mut buf), start, i));
                start = i + 1;
                marker_seen = false;
            }
            _ => {
                buf.push(ch);
                marker_seen = false;
            }
        }
    }

    if options.legacy_trailing_entry || !buf.is_empty() {
        entries.push(FavoriteEntry::new(buf, start, marker));
    }
    entries
}

/// Encodes entries back into the raw stored form.
///
/// Texts are joined with commas except the final entry, which keeps its
/// trailing-space marker (restored if the text lacks one). This is the
/// inverse of [`decode`] and the ground truth the in-place edit algebra is
/// verified against.
///
/// # Examples
///
/// ```rust
/// use favitems::{decode, encode};
///
/// let entries = decode("coffee,muffin ");
/// assert_eq!(encode(&entries), "coffee,muffin ");
/// ```
#[must_use]
pub fn encode(entries: &[FavoriteEntry]) -> String {
    let mut out = String::with_capacity(entries.iter().map(|e| e.text().len() + 1).sum());
    for (i, entry) in entries.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        out.push_str(entry.text());
    }
    if !entries.is_empty() && !out.ends_with(' ') {
        out.push(' ');
    }
    out
}
