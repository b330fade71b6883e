//! Pattern segment classification
//!
//! Pure parsing of a single split segment into its typed form.

use crate::path::trim_delimiter;
use crate::PathsConfig;

/// Represents the kinds of segment a pattern can contain
///
/// # Examples
///
/// ```
/// use pathmux::route::pattern::{classify_segment, PatternSegmentType};
/// use pathmux::PathsConfig;
///
/// let config = PathsConfig::default();
///
/// assert_eq!(classify_segment("users/", &config), PatternSegmentType::Static);
/// assert_eq!(
///     classify_segment(":name/", &config),
///     PatternSegmentType::Named("name".to_string())
/// );
/// assert_eq!(
///     classify_segment("*filename", &config),
///     PatternSegmentType::CatchAll("filename".to_string())
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternSegmentType {
    /// Literal text, compared as-is (an empty segment is static too)
    Static,
    /// Named parameter: `:name`
    Named(String),
    /// Catch-all parameter: `*name`
    CatchAll(String),
}

impl PatternSegmentType {
    pub fn is_static(&self) -> bool {
        matches!(self, PatternSegmentType::Static)
    }
}

/// Classifies a segment by its leading sigil
///
/// Parameter names drop the sigil and one trailing delimiter. A catch-all is
/// always the last segment of a valid pattern, so its name never carries a
/// delimiter in practice.
pub fn classify_segment(segment: &str, config: &PathsConfig) -> PatternSegmentType {
    if let Some(name) = segment.strip_prefix(config.named_param) {
        return PatternSegmentType::Named(trim_delimiter(name, config.delimiter).to_string());
    }

    match segment.strip_prefix(config.catch_all_param) {
        Some(name) => PatternSegmentType::CatchAll(name.to_string()),
        None => PatternSegmentType::Static,
    }
}

/// One segment of a registered pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    /// Segment text as split, trailing delimiter included
    pub text: String,
    pub kind: PatternSegmentType,
}

impl Segment {
    pub fn parse(text: &str, config: &PathsConfig) -> Self {
        Segment {
            text: text.to_string(),
            kind: classify_segment(text, config),
        }
    }
}
