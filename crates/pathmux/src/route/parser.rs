//! Pattern parsing
//!
//! Turns a pattern string into typed segments plus the priority word used to
//! order records inside a bucket. Parsing never touches a registry, so a
//! rejected pattern leaves no trace.

use super::pattern::{PatternSegmentType, Segment};
use super::record::Priority;
use crate::{PathsConfig, PathsError};

/// Largest segment count a pattern may have (15-bit counter)
pub const MAX_SEGMENTS: usize = (1 << 15) - 1;

/// A validated pattern ready for registration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedPattern {
    pub segments: Vec<Segment>,
    pub priority: Priority,
}

impl ParsedPattern {
    /// Number of segments, always within [`MAX_SEGMENTS`]
    pub fn level(&self) -> u16 {
        // bounded by MAX_SEGMENTS during parsing
        self.segments.len() as u16
    }

    /// True when the pattern has neither named nor catch-all segments
    pub fn is_static(&self) -> bool {
        self.priority.is_static()
    }

    /// Concatenated segment text, the key used for static lookups
    pub fn joined(&self) -> String {
        self.segments.iter().map(|s| s.text.as_str()).collect()
    }
}

/// Parses a pattern
///
/// # Errors
///
/// - [`PathsError::PathOverflow`] when the pattern has more than
///   [`MAX_SEGMENTS`] segments
/// - [`PathsError::CatchAllNotLast`] when a catch-all segment is followed by
///   anything
///
/// # Examples
///
/// ```
/// use pathmux::route::parser::parse_pattern;
/// use pathmux::PathsConfig;
///
/// let parsed = parse_pattern("/store/:file/*filename", &PathsConfig::default()).unwrap();
/// assert_eq!(parsed.level(), 3);
/// assert_eq!(parsed.priority.named_params(), 1);
/// assert!(parsed.priority.has_catch_all());
/// ```
pub fn parse_pattern(pattern: &str, config: &PathsConfig) -> Result<ParsedPattern, PathsError> {
    let parts = config.split(pattern);
    let count = parts.len();
    if count > MAX_SEGMENTS {
        return Err(PathsError::PathOverflow(count));
    }

    let mut named: u16 = 0;
    let mut catch_all = false;
    let mut segments = Vec::with_capacity(count);

    for (index, part) in parts.iter().enumerate() {
        let segment = Segment::parse(part, config);
        match segment.kind {
            PatternSegmentType::Named(_) => named += 1,
            PatternSegmentType::CatchAll(_) => {
                if index + 1 != count {
                    return Err(PathsError::CatchAllNotLast {
                        pattern: pattern.to_string(),
                    });
                }
                catch_all = true;
            }
            PatternSegmentType::Static => {}
        }
        segments.push(segment);
    }

    Ok(ParsedPattern {
        segments,
        priority: Priority::new(named, catch_all),
    })
}
