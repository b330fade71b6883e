//! Registered dynamic patterns and their ordering

use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;

use super::pattern::{PatternSegmentType, Segment};
use crate::path::trim_delimiter;
use crate::Params;

const CATCH_ALL_FLAG: u16 = 1 << 15;

/// Ordering word for records of one bucket
///
/// The low 15 bits count named parameters and the high bit marks a catch-all.
/// Comparing the raw word puts fewer named parameters first and every
/// catch-all record after every record without one.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Priority(u16);

impl Priority {
    pub fn new(named_params: u16, catch_all: bool) -> Self {
        let flag = if catch_all { CATCH_ALL_FLAG } else { 0 };
        Priority((named_params & !CATCH_ALL_FLAG) | flag)
    }

    pub fn named_params(self) -> u16 {
        self.0 & !CATCH_ALL_FLAG
    }

    pub fn has_catch_all(self) -> bool {
        self.0 & CATCH_ALL_FLAG != 0
    }

    pub fn is_static(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Debug for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Priority")
            .field("named_params", &self.named_params())
            .field("catch_all", &self.has_catch_all())
            .finish()
    }
}

/// A pattern with at least one named or catch-all segment
#[derive(Debug, Clone)]
pub struct Record<H> {
    pub handler: H,
    pub segments: Vec<Segment>,
    pub priority: Priority,
}

impl<H> Record<H> {
    /// Bucket order: stable sorts on this keep registration order for ties
    pub fn cmp_priority(&self, other: &Self) -> Ordering {
        self.priority.cmp(&other.priority)
    }

    /// Segment texts, trailing delimiters included
    pub fn parts(&self) -> Vec<String> {
        self.segments.iter().map(|s| s.text.clone()).collect()
    }

    /// Matches the record against split query segments
    ///
    /// `parts` must hold at least as many segments as the record. Named
    /// segments capture one query segment without its trailing delimiter; a
    /// catch-all captures the rest of the query verbatim and ends the match.
    pub fn capture(&self, parts: &[Cow<'_, str>], delimiter: char) -> Option<Params> {
        let mut params = Params::with_capacity(usize::from(self.priority.named_params()) + 1);

        for (index, segment) in self.segments.iter().enumerate() {
            match &segment.kind {
                PatternSegmentType::Named(name) => {
                    params.push(name.as_str(), trim_delimiter(&parts[index], delimiter));
                }
                PatternSegmentType::CatchAll(name) => {
                    params.push(name.as_str(), parts[index..].concat());
                    break;
                }
                PatternSegmentType::Static => {
                    if segment.text.as_str() != &*parts[index] {
                        return None;
                    }
                }
            }
        }

        Some(params)
    }
}
