use std::path::{Path, PathBuf};

use anyhow::{anyhow, Result};

use crate::curve::CurveStore;
use crate::pattern::SequenceDescriptor;
use crate::scanning::scan_sequence;
use crate::series::FrameSeries;
use crate::stats::SequenceStats;

/// One configured graph: a display name, the representative file path it
/// was configured with, and the statistics from its last recompute.
#[derive(Debug, Clone)]
pub struct GraphEntry {
    pub name: String,
    pub filepath: PathBuf,
    pub stats: SequenceStats,
}

/// Result of recomputing a single graph during a run.
#[derive(Debug)]
pub struct GraphOutcome {
    pub name: String,
    pub filepath: PathBuf,
    pub result: Result<SequenceStats>,
}

/// Ordered collection of configured graphs. Every mutation that affects a
/// graph's identity is propagated to the curve store so the visual object
/// keeps matching the entry by name.
#[derive(Debug, Default)]
pub struct GraphRegistry {
    entries: Vec<GraphEntry>,
}

/// Recomputes one sequence end to end and fully replaces the named curve:
/// derive the pattern from the representative path, collect sizes, fill
/// gaps, normalize, write the points. Any failure surfaces before the
/// rebuild starts, leaving the previous curve contents untouched.
pub fn visualize_sequence<S: CurveStore>(
    name: &str,
    filepath: &Path,
    store: &mut S,
) -> Result<SequenceStats> {
    let descriptor = SequenceDescriptor::from_path(filepath)?;
    let scan = scan_sequence(&descriptor)?;
    let series = FrameSeries::from_scan(scan);
    store.replace_points(name, &series.curve_points())?;
    Ok(series.stats)
}

impl GraphRegistry {
    pub fn entries(&self) -> &[GraphEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&GraphEntry> {
        self.entries.get(index)
    }

    pub fn contains_name(&self, name: &str) -> bool {
        self.entries.iter().any(|entry| entry.name == name)
    }

    fn next_name(&self) -> String {
        if !self.contains_name("Graph") {
            return "Graph".to_owned();
        }
        let mut i = 1;
        while self.contains_name(&format!("Graph.{:03}", i)) {
            i += 1;
        }
        format!("Graph.{:03}", i)
    }

    /// Adds an entry under the first unused auto-generated name
    /// (`Graph`, `Graph.001`, ...) and ensures its curve object exists.
    /// Returns the assigned name.
    pub fn add<S: CurveStore>(&mut self, filepath: PathBuf, store: &mut S) -> Result<String> {
        let name = self.next_name();
        self.add_named(&name, filepath, store)?;
        Ok(name)
    }

    pub fn add_named<S: CurveStore>(
        &mut self,
        name: &str,
        filepath: PathBuf,
        store: &mut S,
    ) -> Result<()> {
        if self.contains_name(name) {
            return Err(anyhow!("graph name already in use: {}", name));
        }
        store.ensure(name)?;
        self.entries.push(GraphEntry {
            name: name.to_owned(),
            filepath,
            stats: SequenceStats::default(),
        });
        Ok(())
    }

    /// Renames an entry and moves the curve object with it, preserving its
    /// computed data. When no curve exists under the old name, one is
    /// ensured under the new name instead.
    pub fn rename<S: CurveStore>(
        &mut self,
        index: usize,
        new_name: &str,
        store: &mut S,
    ) -> Result<()> {
        let old_name = self
            .entries
            .get(index)
            .ok_or_else(|| anyhow!("no graph at index {}", index))?
            .name
            .clone();

        if old_name == new_name {
            return Ok(());
        }
        if self.contains_name(new_name) {
            return Err(anyhow!("graph name already in use: {}", new_name));
        }

        store.rename(&old_name, new_name)?;
        self.entries[index].name = new_name.to_owned();
        Ok(())
    }

    /// Removes an entry and deletes its curve object, if present.
    pub fn remove<S: CurveStore>(&mut self, index: usize, store: &mut S) -> Result<GraphEntry> {
        if index >= self.entries.len() {
            return Err(anyhow!("no graph at index {}", index));
        }
        let entry = self.entries.remove(index);
        if store.contains(&entry.name) {
            store.remove(&entry.name)?;
        }
        Ok(entry)
    }

    /// Recomputes every entry's curve and statistics. A failing entry is
    /// reported in its outcome and still gets its curve object ensured;
    /// the remaining entries always run.
    pub fn run_all<S: CurveStore, F: Fn(&GraphOutcome)>(
        &mut self,
        store: &mut S,
        on_graph_done: F,
    ) -> Vec<GraphOutcome> {
        let mut outcomes = Vec::with_capacity(self.entries.len());

        for entry in self.entries.iter_mut() {
            let result = visualize_sequence(&entry.name, &entry.filepath, store);
            let outcome = match result {
                Ok(stats) => {
                    entry.stats = stats.clone();
                    GraphOutcome {
                        name: entry.name.clone(),
                        filepath: entry.filepath.clone(),
                        result: Ok(stats),
                    }
                }
                Err(why) => {
                    warn!("Graph {} failed: {}", entry.name, why);
                    if let Err(ensure_err) = store.ensure(&entry.name) {
                        error!("Failed to ensure curve for {}: {}", entry.name, ensure_err);
                    }
                    GraphOutcome {
                        name: entry.name.clone(),
                        filepath: entry.filepath.clone(),
                        result: Err(why),
                    }
                }
            };

            on_graph_done(&outcome);
            outcomes.push(outcome);
        }

        outcomes
    }
}
