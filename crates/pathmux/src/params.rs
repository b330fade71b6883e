//! Captured path parameters

use std::fmt;
use std::ops::Deref;

/// A named parameter and the path text captured for it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Param {
    /// Parameter name, without its sigil
    pub key: String,
    /// Captured value
    pub value: String,
}

impl Param {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

impl fmt::Display for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.key, self.value)
    }
}

/// Ordered list of captured parameters
///
/// A list rather than a map: capture order follows the pattern declaration
/// and repeated names are kept side by side.
///
/// # Examples
///
/// ```
/// use pathmux::Paths;
///
/// let mut paths = Paths::new();
/// paths.insert("/repos/:owner/:repo", "repo").unwrap();
///
/// let found = paths.lookup("/repos/mdigger/rest").unwrap();
/// assert_eq!(found.params.get("owner"), Some("mdigger"));
/// assert_eq!(found.params.get("missing"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params(Vec<Param>);

impl Params {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self(Vec::with_capacity(capacity))
    }

    pub(crate) fn push(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.push(Param::new(key, value));
    }

    /// Returns the value of the first parameter with this name
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|param| param.key == name)
            .map(|param| param.value.as_str())
    }
}

impl Deref for Params {
    type Target = [Param];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| Param::new(k, v)).collect())
    }
}

impl IntoIterator for Params {
    type Item = Param;
    type IntoIter = std::vec::IntoIter<Param>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Params {
    type Item = &'a Param;
    type IntoIter = std::slice::Iter<'a, Param>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_param_display() {
        let param = Param::new("name", "mdigger");
        assert_eq!(param.to_string(), "name: mdigger");
    }

    #[test]
    fn test_get_returns_first_duplicate() {
        let params: Params = [("id", "1"), ("id", "2")].into_iter().collect();
        assert_eq!(params.get("id"), Some("1"));
        assert_eq!(params.len(), 2);
    }

    #[test]
    fn test_get_missing() {
        let params = Params::new();
        assert!(params.is_empty());
        assert_eq!(params.get("test"), None);
    }

    #[test]
    fn test_iteration_preserves_order() {
        let params: Params = [("year", "2014"), ("month", "01"), ("day", "06")]
            .into_iter()
            .collect();
        let keys: Vec<&str> = params.iter().map(|p| p.key.as_str()).collect();
        assert_eq!(keys, vec!["year", "month", "day"]);

        for param in &params {
            assert_eq!(params.get(&param.key), Some(param.value.as_str()));
        }
    }
}
