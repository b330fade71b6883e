//! # Pathmux
//!
//! A path pattern registry for Rust web frameworks. Patterns map to any
//! application value and support:
//! - Static routes (`/about`)
//! - Named parameters (`/users/:name`)
//! - A trailing catch-all parameter (`/files/*filename`)
//!
//! ## Quick Start
//!
//! ```
//! use pathmux::Paths;
//!
//! let mut paths = Paths::new();
//! paths.insert("/users", "usersList").unwrap();
//! paths.insert("/users/:name", "userName").unwrap();
//! paths.insert("/users/me", "userMe").unwrap();
//!
//! let found = paths.lookup("/users/mdigger").unwrap();
//! assert_eq!(*found.handler, "userName");
//! assert_eq!(found.params.get("name"), Some("mdigger"));
//!
//! let found = paths.lookup("/users/me").unwrap();
//! assert_eq!(*found.handler, "userMe");
//! assert!(found.params.is_empty());
//! ```
//!
//! ## Segments
//!
//! Paths are split after each delimiter, so every segment keeps its trailing
//! `/` except possibly the last one. A leading `/` is dropped first:
//! `/users/:name` becomes `users/` and `:name`.
//!
//! ## Route Priority
//!
//! 1. **Static patterns** - exact match on the whole path, always first
//! 2. **Longer patterns** - buckets are tried from the query's segment count
//!    downwards; once the query is longer than a pattern only catch-all
//!    patterns may still match
//! 3. **Fewer named parameters** - within one segment count
//! 4. **Catch-all patterns** - last within their segment count
//! 5. **Registration order** - the first registered pattern wins a tie
//!
//! Overlapping patterns are not rejected. With `/:user/:id/:name` and
//! `/:user/:name/:id` both registered, the second one is never returned.
//!
//! ## Concurrency
//!
//! Registration takes `&mut self`; lookups take `&self` and never mutate.
//! Build the registry first, then share it (for example through `Arc`) for
//! concurrent reads.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use tracing::{debug, trace, warn};

// ============================================================================
// Module Declarations
// ============================================================================

mod config;
mod error;
mod params;
pub mod path;
pub mod route;
mod table;

pub use config::PathsConfig;
pub use error::PathsError;
pub use params::{Param, Params};
pub use route::{PatternSegmentType, Priority, MAX_SEGMENTS};
pub use table::{RouteEntry, RouteTable};

use route::{parse_pattern, Record};

// ============================================================================
// Core Types
// ============================================================================

/// Result of a successful lookup
#[derive(Debug, Clone, PartialEq)]
pub struct PathMatch<'a, H> {
    /// The handler registered for the matched pattern
    pub handler: &'a H,
    /// Captured parameters in pattern order (empty for static matches)
    pub params: Params,
}

/// Registry of path patterns
///
/// Static patterns live in a map keyed by their full path. Every other
/// pattern is stored in a bucket keyed by its segment count, each bucket kept
/// in priority order.
#[derive(Debug, Clone)]
pub struct Paths<H> {
    config: PathsConfig,
    /// Patterns without parameters, keyed by concatenated segments
    statics: HashMap<String, Record<H>>,
    /// Patterns with parameters, keyed by segment count
    buckets: HashMap<u16, Vec<Record<H>>>,
    /// Largest segment count among the buckets
    max_segments: u16,
    /// Smallest segment count of any catch-all pattern
    min_catch_all: Option<u16>,
}

impl<H> Default for Paths<H> {
    fn default() -> Self {
        Self::with_config(PathsConfig::default())
    }
}

impl<H> Paths<H> {
    /// Creates an empty registry with the default delimiter and sigils
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty registry with a custom configuration
    ///
    /// The configuration is taken as-is. Builder-made configurations are not
    /// checked; use [`Paths::try_with_config`] to reject a delimiter that
    /// collides with a sigil.
    pub fn with_config(config: PathsConfig) -> Self {
        Paths {
            config,
            statics: HashMap::new(),
            buckets: HashMap::new(),
            max_segments: 0,
            min_catch_all: None,
        }
    }

    /// Creates an empty registry after validating the configuration
    ///
    /// ```
    /// use pathmux::{Paths, PathsConfig};
    ///
    /// assert!(Paths::<u8>::try_with_config(PathsConfig::default().with_delimiter('.')).is_ok());
    /// assert!(Paths::<u8>::try_with_config(PathsConfig::default().with_named_param('/')).is_err());
    /// ```
    pub fn try_with_config(config: PathsConfig) -> anyhow::Result<Self> {
        config.validate()?;
        Ok(Self::with_config(config))
    }

    pub fn config(&self) -> &PathsConfig {
        &self.config
    }

    /// Number of registered patterns
    pub fn len(&self) -> usize {
        self.statics.len() + self.buckets.values().map(Vec::len).sum::<usize>()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Registers a handler for a pattern
    ///
    /// Named parameters start with `:`, a catch-all parameter starts with `*`
    /// and must be the last segment.
    ///
    /// # Errors
    ///
    /// - [`PathsError::PathOverflow`] for more than [`MAX_SEGMENTS`] segments
    /// - [`PathsError::CatchAllNotLast`] for a misplaced catch-all
    ///
    /// # Examples
    ///
    /// ```
    /// use pathmux::{Paths, PathsError};
    ///
    /// let mut paths = Paths::new();
    /// assert!(paths.insert("/files/*filename", 1).is_ok());
    /// assert!(matches!(
    ///     paths.insert("/file/*name/test", 2),
    ///     Err(PathsError::CatchAllNotLast { .. })
    /// ));
    /// ```
    pub fn insert(&mut self, pattern: &str, handler: H) -> Result<(), PathsError> {
        self.try_insert(pattern, Some(handler))
    }

    /// Registers a handler that may be absent
    ///
    /// Useful when handlers are resolved by name at startup: a failed
    /// resolution is reported as [`PathsError::NilHandler`].
    pub fn try_insert(&mut self, pattern: &str, handler: Option<H>) -> Result<(), PathsError> {
        let handler = handler.ok_or(PathsError::NilHandler)?;
        let parsed = parse_pattern(pattern, &self.config)?;
        let level = parsed.level();

        if parsed.is_static() {
            match self.statics.entry(parsed.joined()) {
                Entry::Occupied(_) => {
                    warn!(pattern, "static path already registered, keeping the first handler");
                }
                Entry::Vacant(slot) => {
                    debug!(pattern, segments = level, "registered static path");
                    slot.insert(Record {
                        handler,
                        segments: parsed.segments,
                        priority: parsed.priority,
                    });
                }
            }
            return Ok(());
        }

        if parsed.priority.has_catch_all() {
            self.min_catch_all = Some(self.min_catch_all.map_or(level, |min| min.min(level)));
        }
        self.max_segments = self.max_segments.max(level);

        debug!(
            pattern,
            segments = level,
            named = parsed.priority.named_params(),
            catch_all = parsed.priority.has_catch_all(),
            "registered dynamic path"
        );

        let bucket = self.buckets.entry(level).or_default();
        bucket.push(Record {
            handler,
            segments: parsed.segments,
            priority: parsed.priority,
        });
        // sort_by is stable: equal priorities keep registration order
        bucket.sort_by(|a, b| a.cmp_priority(b));

        Ok(())
    }

    /// Finds the handler for a path and captures its parameters
    ///
    /// Returns `None` when nothing matches.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathmux::Paths;
    ///
    /// let mut paths = Paths::new();
    /// paths.insert("/store/file/*filename", "file").unwrap();
    /// paths.insert("/store/:file/*filename", "any").unwrap();
    ///
    /// let found = paths.lookup("/store/other/testfile").unwrap();
    /// assert_eq!(*found.handler, "any");
    /// assert_eq!(found.params.get("file"), Some("other"));
    /// assert_eq!(found.params.get("filename"), Some("testfile"));
    ///
    /// assert!(paths.lookup("/missing").is_none());
    /// ```
    pub fn lookup(&self, path: &str) -> Option<PathMatch<'_, H>> {
        let parts = self.config.split(path);

        if !self.statics.is_empty() {
            if let Some(record) = self.statics.get(parts.concat().as_str()) {
                trace!(path, "matched static path");
                return Some(PathMatch {
                    handler: &record.handler,
                    params: Params::new(),
                });
            }
        }

        if self.buckets.is_empty() {
            trace!(path, "no dynamic paths registered");
            return None;
        }

        let length = parts.len();
        let start = if length > usize::from(self.max_segments) {
            // only a catch-all can absorb the extra segments
            if self.min_catch_all.is_none() {
                trace!(path, segments = length, "path longer than any pattern");
                return None;
            }
            self.max_segments
        } else {
            // bounded by max_segments
            length as u16
        };

        for level in (1..=start).rev() {
            let records = match self.buckets.get(&level) {
                Some(records) if !records.is_empty() => records,
                _ => {
                    if self.min_catch_all.is_some_and(|min| level < min) {
                        break;
                    }
                    continue;
                }
            };

            for record in records {
                if usize::from(level) < length && !record.priority.has_catch_all() {
                    continue;
                }
                if let Some(params) = record.capture(&parts, self.config.delimiter) {
                    trace!(path, segments = level, params = params.len(), "matched dynamic path");
                    return Some(PathMatch {
                        handler: &record.handler,
                        params,
                    });
                }
            }
        }

        trace!(path, "no path matched");
        None
    }

    /// Iterates over every record, statics first, then buckets by segment count
    fn records(&self) -> impl Iterator<Item = &Record<H>> + '_ {
        let mut levels: Vec<u16> = self.buckets.keys().copied().collect();
        levels.sort_unstable();

        self.statics.values().chain(
            levels
                .into_iter()
                .filter_map(move |level| self.buckets.get(&level))
                .flatten(),
        )
    }
}

impl<H: PartialEq> Paths<H> {
    /// Returns the segments of the first pattern registered with `handler`
    ///
    /// A linear scan meant for diagnostics. When several static patterns
    /// share a handler, which one is returned is unspecified.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathmux::Paths;
    ///
    /// let mut paths = Paths::new();
    /// paths.insert("/repos/:owner/:repo", 7).unwrap();
    ///
    /// assert_eq!(
    ///     paths.path(&7),
    ///     Some(vec!["repos/".to_string(), ":owner/".to_string(), ":repo".to_string()])
    /// );
    /// assert_eq!(paths.path(&8), None);
    /// ```
    pub fn path(&self, handler: &H) -> Option<Vec<String>> {
        self.records()
            .find(|record| record.handler == *handler)
            .map(Record::parts)
    }

    /// Rebuilds the normalized pattern registered with `handler`
    ///
    /// ```
    /// use pathmux::Paths;
    ///
    /// let mut paths = Paths::new();
    /// paths.insert("/a/to/b/:param/*routepath", "h").unwrap();
    /// assert_eq!(paths.pattern(&"h").as_deref(), Some("/a/to/b/:param/*routepath"));
    /// ```
    pub fn pattern(&self, handler: &H) -> Option<String> {
        self.path(handler)
            .map(|parts| format!("{}{}", self.config.delimiter, parts.concat()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_track_dynamic_paths() {
        let mut paths = Paths::new();
        paths.insert("/a/b/c/d", 0).unwrap();
        assert_eq!(paths.max_segments, 0);
        assert_eq!(paths.min_catch_all, None);

        paths.insert("/a/:b/c", 1).unwrap();
        assert_eq!(paths.max_segments, 3);

        paths.insert("/x/y/z/*rest", 2).unwrap();
        paths.insert("/x/*rest", 3).unwrap();
        paths.insert("/x/y/*rest", 4).unwrap();
        assert_eq!(paths.max_segments, 4);
        assert_eq!(paths.min_catch_all, Some(2));
    }

    #[test]
    fn test_failed_insert_leaves_registry_untouched() {
        let mut paths = Paths::new();
        assert!(paths.insert("/file/*name/test", 1).is_err());
        assert!(paths.try_insert("/ok/*rest", None).is_err());
        assert!(paths.is_empty());
        assert_eq!(paths.min_catch_all, None);
        assert_eq!(paths.max_segments, 0);
    }

    #[test]
    fn test_bucket_sorted_by_priority() {
        let mut paths = Paths::new();
        paths.insert("/:a/*b", "catch-all").unwrap();
        paths.insert("/:a/:b", "two").unwrap();
        paths.insert("/x/:b", "one").unwrap();
        paths.insert("/y/:b", "one-later").unwrap();

        let order: Vec<&str> = paths.buckets[&2].iter().map(|r| r.handler).collect();
        assert_eq!(order, vec!["one", "one-later", "two", "catch-all"]);
    }

    #[test]
    fn test_len_counts_all_patterns() {
        let mut paths = Paths::new();
        paths.insert("/", 0).unwrap();
        paths.insert("/user/:id", 1).unwrap();
        paths.insert("/user/:id/*rest", 2).unwrap();
        assert_eq!(paths.len(), 3);
    }

    #[test]
    fn test_duplicate_static_keeps_first() {
        let mut paths = Paths::new();
        paths.insert("/about", 1).unwrap();
        paths.insert("/about", 2).unwrap();
        assert_eq!(paths.len(), 1);
        assert_eq!(*paths.lookup("/about").unwrap().handler, 1);
    }
}
