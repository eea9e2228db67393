//! Persistence layer binding the edit algebra to the `favitems` column.
//!
//! [`FavoritesStore`] performs the read-modify-write cycle for one user's
//! favorites: load the raw value from the `users` table, edit the decoded
//! list in place via offset surgery, and write the new raw value straight
//! back. Every value spliced into SQL text goes through
//! [`escape`](crate::escape) first — the legacy-compatible seam, not a
//! security boundary; persistence built fresh should bind parameters.
//!
//! The store is synchronous and holds no cross-operation state. It assumes
//! it owns the only up-to-date copy of the value between [`load`] and the
//! write-back; concurrent edits of the same user record are a lost-update
//! hazard with no concurrency control here.
//!
//! [`load`]: FavoritesStore::load
//!
//! ## Examples
//!
//! ```rust,no_run
//! use favitems::{FavoritesStore, QueryExecutor};
//!
//! fn unfavorite_first<E: QueryExecutor>(executor: E) -> favitems::Result<()> {
//!     let mut store = FavoritesStore::new(executor);
//!     let mut list = store.load("alice")?;
//!     store.remove("alice", &mut list, 0)?;
//!     Ok(())
//! }
//! ```

use crate::error::Result;
use crate::executor::QueryExecutor;
use crate::sanitize::escape;
use crate::{FavoriteList, FavoritesOptions};
use tracing::{debug, warn};

/// Loads and persists one user's favorites through a [`QueryExecutor`].
pub struct FavoritesStore<E> {
    executor: E,
    options: FavoritesOptions,
}

impl<E: QueryExecutor> FavoritesStore<E> {
    /// Creates a store with default [`FavoritesOptions`].
    pub fn new(executor: E) -> Self {
        Self::with_options(executor, FavoritesOptions::default())
    }

    /// Creates a store with explicit options.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use favitems::{FavoritesStore, FavoritesOptions, QueryExecutor};
    ///
    /// fn build<E: QueryExecutor>(executor: E) -> FavoritesStore<E> {
    ///     FavoritesStore::with_options(
    ///         executor,
    ///         FavoritesOptions::new().with_max_len(200),
    ///     )
    /// }
    /// ```
    pub fn with_options(executor: E, options: FavoritesOptions) -> Self {
        FavoritesStore { executor, options }
    }

    /// The options applied to every list this store decodes.
    #[must_use]
    pub fn options(&self) -> &FavoritesOptions {
        &self.options
    }

    /// Gives back the wrapped executor.
    pub fn into_inner(self) -> E {
        self.executor
    }

    /// Loads and decodes the user's stored favorites.
    ///
    /// A missing user row or a NULL column decodes as the empty value.
    ///
    /// # Errors
    ///
    /// Propagates any [`Error::Backend`](crate::Error::Backend) from the
    /// executor.
    pub fn load(&mut self, login: &str) -> Result<FavoriteList> {
        let sql = format!(
            "SELECT favitems FROM users WHERE login = '{}'",
            escape(login)
        );
        debug!(login, "loading favorites");
        let rows = self.executor.execute_query_rows(&sql)?;
        let raw = rows
            .into_iter()
            .next()
            .and_then(|row| row.into_iter().next())
            .flatten()
            .unwrap_or_default();
        Ok(FavoriteList::decode(raw, self.options.clone()))
    }

    /// Adds an item to the list and writes the new raw value back.
    ///
    /// Returns `true` when the addition hit the capacity cap and was
    /// truncated; the truncated value is what got persisted.
    ///
    /// # Errors
    ///
    /// Propagates executor failures. Capacity overflow is not an error — it
    /// is logged and reported through the return value.
    pub fn add(&mut self, login: &str, list: &mut FavoriteList, text: &str) -> Result<bool> {
        let warning = list.add(text);
        if let Some(capacity) = &warning {
            warn!(login, %capacity, "favorites truncated at capacity");
        }
        self.write_back(login, list.raw())?;
        Ok(warning.is_some())
    }

    /// Removes the entry at `index` and writes the new raw value back.
    ///
    /// The cancel case is decided by [`FavoriteList::remove`]: when it
    /// reports that nothing was removed, nothing is written either.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidIndex`](crate::Error::InvalidIndex) when `index` is
    /// past the cancel position; executor failures otherwise.
    pub fn remove(&mut self, login: &str, list: &mut FavoriteList, index: usize) -> Result<()> {
        if list.remove(index)? {
            self.write_back(login, list.raw())
        } else {
            debug!(login, index, "favorites removal cancelled");
            Ok(())
        }
    }

    fn write_back(&mut self, login: &str, raw: &str) -> Result<()> {
        let sql = format!(
            "UPDATE users SET favitems = '{}' WHERE login = '{}'",
            escape(raw),
            escape(login)
        );
        debug!(login, sql = %sql, "writing favorites");
        self.executor.execute_update(&sql)
    }
}
