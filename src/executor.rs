//! The query-executor collaborator contract.
//!
//! The store layer reaches the database only through this narrow trait; the
//! real implementation (a JDBC-style connection wrapper in the surrounding
//! application) lives outside the crate, and tests drive the store with an
//! in-memory double. All methods are synchronous and blocking — the store's
//! operations are inline string transformations around these calls, with no
//! internal suspension points.

use crate::error::Result;

/// One result row: column values in select order, `None` for SQL NULL.
pub type Row = Vec<Option<String>>;

/// Narrow interface to the SQL backend.
///
/// Every failure surfaces as [`Error::Backend`](crate::Error::Backend); the
/// core propagates it to the caller and never retries or swallows it.
///
/// # Examples
///
/// An in-memory double for tests:
///
/// ```rust
/// use favitems::{QueryExecutor, Result, Row};
///
/// #[derive(Default)]
/// struct Recorder {
///     statements: Vec<String>,
/// }
///
/// impl QueryExecutor for Recorder {
///     fn execute_update(&mut self, sql: &str) -> Result<()> {
///         self.statements.push(sql.to_string());
///         Ok(())
///     }
///     fn execute_query(&mut self, _sql: &str) -> Result<usize> {
///         Ok(0)
///     }
///     fn execute_query_rows(&mut self, _sql: &str) -> Result<Vec<Row>> {
///         Ok(Vec::new())
///     }
/// }
/// ```
pub trait QueryExecutor {
    /// Executes a statement that returns no rows (INSERT, UPDATE, DELETE).
    fn execute_update(&mut self, sql: &str) -> Result<()>;

    /// Executes a query and returns only its row count.
    fn execute_query(&mut self, sql: &str) -> Result<usize>;

    /// Executes a query and returns its rows in order.
    fn execute_query_rows(&mut self, sql: &str) -> Result<Vec<Row>>;
}
