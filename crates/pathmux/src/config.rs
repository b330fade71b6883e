// File: src/config.rs
// Purpose: Registry configuration (delimiter, sigils, splitter) and TOML loading

use anyhow::{ensure, Context, Result};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use crate::path::{DelimiterSplitter, Splitter};

/// Settings shared by every pattern and query of one registry
///
/// Each [`Paths`](crate::Paths) carries its own copy, so registries with
/// different delimiters or sigils can live side by side.
///
/// ```toml
/// delimiter = "/"
/// named_param = ":"
/// catch_all_param = "*"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Segment separator (default: `/`)
    #[serde(default = "default_delimiter")]
    pub delimiter: char,

    /// Marks a named parameter segment (default: `:`)
    #[serde(default = "default_named_param")]
    pub named_param: char,

    /// Marks the trailing catch-all segment (default: `*`)
    #[serde(default = "default_catch_all_param")]
    pub catch_all_param: char,

    #[serde(skip, default = "default_splitter")]
    splitter: Arc<dyn Splitter>,
}

fn default_delimiter() -> char {
    '/'
}

fn default_named_param() -> char {
    ':'
}

fn default_catch_all_param() -> char {
    '*'
}

fn default_splitter() -> Arc<dyn Splitter> {
    Arc::new(DelimiterSplitter)
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            delimiter: default_delimiter(),
            named_param: default_named_param(),
            catch_all_param: default_catch_all_param(),
            splitter: default_splitter(),
        }
    }
}

impl PathsConfig {
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn with_named_param(mut self, sigil: char) -> Self {
        self.named_param = sigil;
        self
    }

    pub fn with_catch_all_param(mut self, sigil: char) -> Self {
        self.catch_all_param = sigil;
        self
    }

    /// Replaces the path splitter
    ///
    /// # Examples
    ///
    /// ```
    /// use pathmux::path::Splitter;
    /// use pathmux::{Paths, PathsConfig};
    /// use std::borrow::Cow;
    ///
    /// // Treats "/a/b" and "/a/b/" the same by dropping the trailing slash
    /// #[derive(Debug)]
    /// struct TrimTrailing;
    ///
    /// impl Splitter for TrimTrailing {
    ///     fn split<'a>(&self, path: &'a str, delimiter: char) -> Vec<Cow<'a, str>> {
    ///         let path = path.trim_end_matches(delimiter);
    ///         pathmux::path::split_after(path, delimiter)
    ///             .into_iter()
    ///             .map(Cow::Borrowed)
    ///             .collect()
    ///     }
    /// }
    ///
    /// let mut paths = Paths::with_config(PathsConfig::default().with_splitter(TrimTrailing));
    /// paths.insert("/about", 1).unwrap();
    /// assert_eq!(*paths.lookup("/about/").unwrap().handler, 1);
    /// ```
    pub fn with_splitter(mut self, splitter: impl Splitter + 'static) -> Self {
        self.splitter = Arc::new(splitter);
        self
    }

    /// Splits a pattern or query path with the configured splitter
    pub fn split<'a>(&self, path: &'a str) -> Vec<Cow<'a, str>> {
        self.splitter.split(path, self.delimiter)
    }

    /// Checks that the delimiter and both sigils are distinct
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.delimiter != self.named_param,
            "delimiter and named parameter sigil are both {:?}",
            self.delimiter
        );
        ensure!(
            self.delimiter != self.catch_all_param,
            "delimiter and catch-all sigil are both {:?}",
            self.delimiter
        );
        ensure!(
            self.named_param != self.catch_all_param,
            "named parameter and catch-all sigils are both {:?}",
            self.named_param
        );
        Ok(())
    }

    /// Parses and validates configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: PathsConfig =
            toml::from_str(content).context("Failed to parse paths configuration")?;
        config.validate()?;

        Ok(config)
    }

    /// Load configuration from a TOML file
    ///
    /// A missing or empty file yields the default configuration.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        Self::from_toml_str(&content)
            .with_context(|| format!("Invalid config file: {:?}", path))
    }
}
