//! Route module
//!
//! Parsing of patterns into typed segments and the records stored in the
//! registry buckets.

pub mod parser;
pub mod pattern;
pub mod record;

// Re-export commonly used types
pub use parser::{parse_pattern, ParsedPattern, MAX_SEGMENTS};
pub use pattern::{classify_segment, PatternSegmentType, Segment};
pub use record::{Priority, Record};
