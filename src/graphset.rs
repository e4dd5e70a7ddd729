use std::path::{Path, PathBuf};

use anyhow::{anyhow, Result};
use serde::Deserialize;

use crate::curve::CurveStore;
use crate::registry::GraphRegistry;

/// A set of graph entries loaded from a toml file:
///
/// ```toml
/// [[graphs]]
/// name = "beauty"
/// filepath = "/renders/shot010/beauty/beauty.0001.exr"
///
/// [[graphs]]
/// filepath = "/renders/shot010/depth/depth.0001.exr"
/// ```
#[derive(Deserialize, Clone, Debug)]
pub struct GraphSet {
    pub graphs: Vec<GraphSetEntry>,
}

#[derive(Deserialize, Clone, Debug)]
pub struct GraphSetEntry {
    pub name: Option<String>,
    pub filepath: String,
}

pub fn load_graph_set(file_path: &str) -> Result<GraphSet> {
    if !Path::new(file_path).exists() {
        Err(anyhow!("File not found: {}", file_path))
    } else {
        let t = std::fs::read_to_string(file_path)?;
        Ok(toml::from_str(&t)?)
    }
}

impl GraphSet {
    /// Builds a registry from the configured entries, auto-naming the ones
    /// without an explicit name and ensuring every curve object exists.
    pub fn build_registry<S: CurveStore>(&self, store: &mut S) -> Result<GraphRegistry> {
        let mut registry = GraphRegistry::default();
        for graph in &self.graphs {
            let filepath = PathBuf::from(&graph.filepath);
            match &graph.name {
                Some(name) => registry.add_named(name, filepath, store)?,
                None => {
                    registry.add(filepath, store)?;
                }
            }
        }
        Ok(registry)
    }
}
