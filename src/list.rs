//! The favorites list and its incremental-edit algebra.
//!
//! [`FavoriteList`] pairs a raw favorites value with its decoded entries and
//! keeps both consistent across edits. The ordered entry list is the primary
//! representation; the raw text is maintained by offset surgery — splicing at
//! the spans the entries carry — rather than re-encoding the whole list on
//! every edit. The surgery is verified against ground truth in tests: exact
//! [`encode`](crate::encode) bytes for removals, a fresh decode of the raw
//! value for mixed edit sequences (see [`FavoriteList::is_consistent`]).
//!
//! Offsets are only valid between mutations: every edit shifts the spans of
//! all entries from the edit point onward before returning.
//!
//! ## Examples
//!
//! ```rust
//! use favitems::{FavoriteList, FavoritesOptions};
//!
//! let mut list = FavoriteList::decode("coffee,tea,muffin ", FavoritesOptions::new());
//! list.remove(1).unwrap();
//! assert_eq!(list.raw(), "coffee,muffin ");
//!
//! list.add("cocoa");
//! assert_eq!(list.raw(), "coffee,muffin,cocoa ");
//! ```

use crate::error::{CapacityExceeded, Error, Result};
use crate::{codec, FavoriteEntry, FavoritesOptions};
use serde::Serialize;

/// A raw favorites value together with its decoded, span-carrying entries.
///
/// Created by [`FavoriteList::decode`]; mutated in place by [`add`] and
/// [`remove`], which splice the raw text at known byte positions and shift
/// the remaining spans instead of reparsing.
///
/// Not a long-lived entity: the surrounding flow decodes, edits once or
/// twice, writes back, and drops the list. Holding one across concurrent
/// edits of the same stored value is a lost-update hazard; the algebra
/// assumes it owns the only up-to-date copy between decode and write-back.
///
/// [`add`]: FavoriteList::add
/// [`remove`]: FavoriteList::remove
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FavoriteList {
    raw: String,
    entries: Vec<FavoriteEntry>,
    #[serde(skip)]
    options: FavoritesOptions,
}

impl FavoriteList {
    /// Decodes a raw favorites value into an editable list.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use favitems::{FavoriteList, FavoritesOptions};
    ///
    /// let list = FavoriteList::decode("coffee,tea ", FavoritesOptions::new());
    /// assert_eq!(list.len(), 2);
    /// assert_eq!(list.entries()[0].text(), "coffee");
    /// ```
    #[must_use]
    pub fn decode(raw: impl Into<String>, options: FavoritesOptions) -> Self {
        let raw = raw.into();
        let entries = codec::decode(&raw, &options);
        FavoriteList {
            raw,
            entries,
            options,
        }
    }

    /// The current raw stored form.
    #[inline]
    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The entries in stored order, spans valid for the current raw value.
    #[inline]
    #[must_use]
    pub fn entries(&self) -> &[FavoriteEntry] {
        &self.entries
    }

    /// Number of entries, including the legacy spurious entry if present.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the list has no entries.
    ///
    /// With the legacy decode behavior on, an empty raw value still decodes
    /// to one empty entry, so this is `false` for it.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The options this list was decoded with.
    #[inline]
    #[must_use]
    pub fn options(&self) -> &FavoritesOptions {
        &self.options
    }

    /// Removes the entry at `index` by splicing it out of the raw value.
    ///
    /// An index equal to [`len`](FavoriteList::len) means "cancel" and leaves
    /// the list unchanged; anything past that is [`Error::InvalidIndex`].
    /// Returns `true` when an entry was removed, `false` for a cancel, so
    /// callers can tell whether the value changed.
    ///
    /// The excised span is widened by one to consume the adjacent separator:
    /// the preceding comma (or the marker-adjacent position) for any entry
    /// but the first, the following comma for the first. Every surviving
    /// entry at or after `index` has its span shifted down by the removed
    /// length, so spans stay valid without reparsing.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidIndex`] when `index > len`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use favitems::{FavoriteList, FavoritesOptions};
    ///
    /// let mut list = FavoriteList::decode("coffee,tea,muffin ", FavoritesOptions::new());
    /// list.remove(0).unwrap();
    /// assert_eq!(list.raw(), "tea,muffin ");
    /// assert_eq!(list.entries()[0].span(), 0..3);
    /// ```
    pub fn remove(&mut self, index: usize) -> Result<bool> {
        if index == self.entries.len() {
            return Ok(false);
        }
        if index > self.entries.len() {
            return Err(Error::InvalidIndex {
                index,
                len: self.entries.len(),
            });
        }

        let (mut s, mut e) = {
            let entry = &self.entries[index];
            (entry.start(), entry.end())
        };
        if s > 0 {
            s -= 1;
        } else {
            e += 1;
        }
        // Malformed raw values decode to degenerate spans: the spurious
        // empty entry of an empty value is zero-width, and a marker-less
        // value gives its final entry a stale end before its start. Clamp
        // so the excision stays in bounds and never inverts; a degenerate
        // span removes the entry from the list but excises nothing.
        s = s.min(self.raw.len());
        e = e.clamp(s, self.raw.len());
        let removed = e - s;

        self.raw.replace_range(s..e, "");
        for entry in &mut self.entries[index..] {
            entry.shift_down(removed);
        }
        self.entries.remove(index);
        Ok(true)
    }

    /// Appends an item by splicing it in before the trailing remainder.
    ///
    /// For a non-empty list the new text is inserted, comma-prefixed, at the
    /// final entry's end — in front of the trailing-space marker, which stays
    /// in place as the new final entry's terminator. For an empty list the
    /// text becomes the start of the raw value.
    ///
    /// The result is capped at [`FavoritesOptions::max_len`] characters;
    /// excess is silently dropped from the end and reported through the
    /// returned [`CapacityExceeded`] signal. The new entry is appended with
    /// its computed span either way.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use favitems::{FavoriteList, FavoritesOptions};
    ///
    /// let mut list = FavoriteList::decode("", FavoritesOptions::new());
    /// assert!(list.add("cocoa").is_none());
    /// assert_eq!(list.raw(), "cocoa");
    /// assert_eq!(list.entries().last().unwrap().span(), 0..5);
    /// ```
    pub fn add(&mut self, text: &str) -> Option<CapacityExceeded> {
        // A previous capped addition can leave the final span past the
        // truncated raw text; clamp the insertion point to stay in bounds.
        let last = self
            .entries
            .last()
            .map_or(0, FavoriteEntry::end)
            .min(self.raw.len());
        let start = if last > 0 {
            self.raw.insert(last, ',');
            self.raw.insert_str(last + 1, text);
            last + 1
        } else {
            self.raw.insert_str(0, text);
            0
        };

        let warning = self.truncate_to_cap();
        self.entries
            .push(FavoriteEntry::new(text, start, start + text.len()));
        warning
    }

    /// Re-decodes the raw value and checks it still names the same items.
    ///
    /// Diagnostic helper for tests and debug assertions. Compares the
    /// ordered, marker-stripped, non-empty item texts of a fresh decode
    /// against the held entries; the edit algebra is expected to keep this
    /// `true` after any sequence of mutations. Marker spaces migrate between
    /// entries as the list tail changes, which is why the comparison is on
    /// trimmed texts rather than exact encoded bytes.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        let redecoded = codec::decode(&self.raw, &self.options);
        let fresh: Vec<&str> = redecoded
            .iter()
            .map(FavoriteEntry::trimmed)
            .filter(|t| !t.is_empty())
            .collect();
        let held: Vec<&str> = self
            .entries
            .iter()
            .map(FavoriteEntry::trimmed)
            .filter(|t| !t.is_empty())
            .collect();
        fresh == held
    }

    fn truncate_to_cap(&mut self) -> Option<CapacityExceeded> {
        let cut = self.raw.char_indices().nth(self.options.max_len)?;
        let len = self.raw.chars().count();
        self.raw.truncate(cut.0);
        Some(CapacityExceeded {
            len,
            max: self.options.max_len,
        })
    }
}
