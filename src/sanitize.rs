//! Legacy escaping of user text bound for a single-quoted SQL literal.
//!
//! [`escape`] reproduces a specific, deliberately narrow policy: strip
//! statement separators and backslash-escape a single quote only when the
//! run of backslashes immediately before it would otherwise leave it live.
//! It does **not** make interpolation safe in general — other SQL
//! metacharacters pass through untouched, and a bare quote with no preceding
//! backslashes is left as-is. Keep it only where bit-for-bit compatibility
//! with the stored legacy text matters; new persistence code should bind
//! parameters instead of splicing strings.
//!
//! ## Examples
//!
//! ```rust
//! use favitems::escape;
//!
//! // Semicolons are removed outright, quotes without a backslash run stay
//! assert_eq!(escape("O'Brien;DROP TABLE x"), "O'BrienDROP TABLE x");
//!
//! // An even, non-empty backslash run leaves the quote live, so one more
//! // backslash is inserted in front of it
//! assert_eq!(escape(r"\\'"), r"\\\'");
//!
//! // An odd run already escapes the quote; nothing is added
//! assert_eq!(escape(r"\'"), r"\'");
//! ```

/// Transforms arbitrary user text for embedding in a single-quoted literal.
///
/// Single left-to-right pass tracking two flags: whether the character just
/// seen was a backslash, and whether the current backslash run has even
/// length. A quote preceded by a non-empty even run gets one backslash
/// inserted before it; semicolons are dropped; everything else passes
/// through and resets the run.
///
/// Total function; never fails and never panics.
///
/// # Examples
///
/// ```rust
/// use favitems::escape;
///
/// assert_eq!(escape("latte; -- comment"), "latte -- comment");
/// assert_eq!(escape("plain"), "plain");
/// ```
#[must_use]
pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    // even_escapes: the run of consecutive backslashes just seen has even
    // length, i.e. a quote following it would not itself be escaped.
    let mut even_escapes = true;
    let mut consecutive_escapes = false;

    for ch in input.chars() {
        match ch {
            '\'' => {
                if consecutive_escapes && even_escapes {
                    out.push('\\');
                }
                out.push('\'');
                consecutive_escapes = false;
                even_escapes = true;
            }
            // Statement separators are stripped, not escaped; the run
            // trackers are unaffected.
            ';' => {}
            '\\' => {
                even_escapes = !even_escapes;
                consecutive_escapes = true;
                out.push('\\');
            }
            _ => {
                consecutive_escapes = false;
                even_escapes = true;
                out.push(ch);
            }
        }
    }
    out
}
