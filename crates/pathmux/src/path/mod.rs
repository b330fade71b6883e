//! Path splitting
//!
//! Both patterns and query paths go through the same [`Splitter`], so a
//! pattern and a query only line up when they were cut by identical rules.

use std::borrow::Cow;
use std::fmt;

/// Cuts a path into segments
///
/// Implementations must be pure: the same input always yields the same
/// segments. Returning `Cow::Borrowed` slices of the input keeps lookups
/// allocation-free; owned segments are allowed for splitters that rewrite
/// the path.
pub trait Splitter: Send + Sync + fmt::Debug {
    fn split<'a>(&self, path: &'a str, delimiter: char) -> Vec<Cow<'a, str>>;
}

/// Default splitter
///
/// Strips one leading delimiter, then splits after every delimiter so each
/// segment keeps its trailing delimiter. A path ending in the delimiter
/// yields a final empty segment, and an empty path yields one empty segment.
///
/// # Examples
///
/// ```
/// use pathmux::path::split_after;
///
/// assert_eq!(split_after("/users/:name", '/'), vec!["users/", ":name"]);
/// assert_eq!(split_after("/users/", '/'), vec!["users/", ""]);
/// assert_eq!(split_after("/", '/'), vec![""]);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DelimiterSplitter;

impl Splitter for DelimiterSplitter {
    fn split<'a>(&self, path: &'a str, delimiter: char) -> Vec<Cow<'a, str>> {
        split_after(path, delimiter)
            .into_iter()
            .map(Cow::Borrowed)
            .collect()
    }
}

/// Splits `path` the way [`DelimiterSplitter`] does
pub fn split_after(path: &str, delimiter: char) -> Vec<&str> {
    let path = path.strip_prefix(delimiter).unwrap_or(path);
    let mut parts: Vec<&str> = path.split_inclusive(delimiter).collect();
    // split_inclusive drops the empty tail that follows a trailing delimiter
    if path.is_empty() || path.ends_with(delimiter) {
        parts.push("");
    }
    parts
}

/// Removes one trailing delimiter from a segment
pub fn trim_delimiter(segment: &str, delimiter: char) -> &str {
    segment.strip_suffix(delimiter).unwrap_or(segment)
}
