// File: src/table.rs
// Purpose: Route tables declared in TOML and resolved into a Paths registry

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::{Paths, PathsConfig};

/// One declared route: a pattern and the name of its handler
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteEntry {
    pub pattern: String,
    pub handler: String,
}

/// A list of routes plus the registry configuration they were written for
///
/// ```toml
/// [config]
/// delimiter = "/"
///
/// [[route]]
/// pattern = "/users/:name"
/// handler = "user_show"
///
/// [[route]]
/// pattern = "/files/*filename"
/// handler = "file_download"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RouteTable {
    #[serde(default)]
    pub config: PathsConfig,

    #[serde(default, rename = "route")]
    pub routes: Vec<RouteEntry>,
}

impl RouteTable {
    /// Parses a route table from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let table: RouteTable =
            toml::from_str(content).context("Failed to parse route table")?;
        table.config.validate()?;

        Ok(table)
    }

    /// Load a route table from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read route table: {:?}", path))?;

        Self::from_toml_str(&content)
            .with_context(|| format!("Invalid route table: {:?}", path))
    }
}

impl<H> Paths<H> {
    /// Builds a registry from a route table
    ///
    /// `resolve` maps each handler name to its value. A name it cannot
    /// resolve fails the whole build with [`PathsError::NilHandler`]
    /// (reachable through `downcast_ref`) and the route in the context.
    ///
    /// [`PathsError::NilHandler`]: crate::PathsError::NilHandler
    ///
    /// # Examples
    ///
    /// ```
    /// use pathmux::{Paths, RouteTable};
    ///
    /// let table = RouteTable::from_toml_str(r#"
    ///     [[route]]
    ///     pattern = "/users/:name"
    ///     handler = "user_show"
    /// "#).unwrap();
    ///
    /// let paths = Paths::from_table(&table, |name| match name {
    ///     "user_show" => Some(1),
    ///     _ => None,
    /// }).unwrap();
    ///
    /// assert_eq!(*paths.lookup("/users/mdigger").unwrap().handler, 1);
    /// ```
    pub fn from_table<F>(table: &RouteTable, mut resolve: F) -> Result<Self>
    where
        F: FnMut(&str) -> Option<H>,
    {
        let mut paths = Paths::try_with_config(table.config.clone())?;

        for entry in &table.routes {
            paths
                .try_insert(&entry.pattern, resolve(&entry.handler))
                .with_context(|| {
                    format!(
                        "Failed to register route {} -> {}",
                        entry.pattern, entry.handler
                    )
                })?;
        }

        Ok(paths)
    }
}
