use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use chrono::Utc;
use serde::{Deserialize, Serialize};

/// One point of a size curve: frame index on x, normalized size (or the
/// missing-frame sentinel) on z.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    pub x: f64,
    pub z: f64,
}

/// Named store of visual curve objects. The consumer owns the objects;
/// this seam only needs create-or-fetch, full-replace, rename, and remove
/// semantics. `ensure` is idempotent and never clears existing contents.
pub trait CurveStore {
    fn ensure(&mut self, name: &str) -> Result<()>;
    fn replace_points(&mut self, name: &str, points: &[CurvePoint]) -> Result<()>;
    fn rename(&mut self, old_name: &str, new_name: &str) -> Result<()>;
    fn remove(&mut self, name: &str) -> Result<()>;
    fn contains(&self, name: &str) -> bool;
    fn points(&self, name: &str) -> Option<Vec<CurvePoint>>;
}

/// In-memory curve store, for embedding and tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryCurveStore {
    curves: HashMap<String, Vec<CurvePoint>>,
}

impl MemoryCurveStore {
    pub fn new() -> Self {
        MemoryCurveStore {
            curves: HashMap::new(),
        }
    }
}

impl CurveStore for MemoryCurveStore {
    fn ensure(&mut self, name: &str) -> Result<()> {
        self.curves.entry(name.to_owned()).or_default();
        Ok(())
    }

    fn replace_points(&mut self, name: &str, points: &[CurvePoint]) -> Result<()> {
        self.curves.insert(name.to_owned(), points.to_vec());
        Ok(())
    }

    fn rename(&mut self, old_name: &str, new_name: &str) -> Result<()> {
        match self.curves.remove(old_name) {
            Some(points) => {
                self.curves.insert(new_name.to_owned(), points);
                Ok(())
            }
            None => self.ensure(new_name),
        }
    }

    fn remove(&mut self, name: &str) -> Result<()> {
        self.curves.remove(name);
        Ok(())
    }

    fn contains(&self, name: &str) -> bool {
        self.curves.contains_key(name)
    }

    fn points(&self, name: &str) -> Option<Vec<CurvePoint>> {
        self.curves.get(name).cloned()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct CurveDocument {
    name: String,
    generated: String,
    points: Vec<CurvePoint>,
}

/// Curve store writing one JSON document per curve into an output
/// directory. `ensure` picks up documents left by an earlier run instead
/// of clearing them.
pub struct JsonCurveStore {
    directory: PathBuf,
    curves: HashMap<String, Vec<CurvePoint>>,
}

impl JsonCurveStore {
    pub fn new(directory: &Path) -> Result<Self> {
        fs::create_dir_all(directory)?;
        Ok(JsonCurveStore {
            directory: directory.to_path_buf(),
            curves: HashMap::new(),
        })
    }

    fn curve_path(&self, name: &str) -> PathBuf {
        self.directory.join(format!("{}.json", name))
    }

    fn write(&self, name: &str) -> Result<()> {
        let document = CurveDocument {
            name: name.to_owned(),
            generated: Utc::now().to_rfc3339(),
            points: self.curves.get(name).cloned().unwrap_or_default(),
        };
        fs::write(
            self.curve_path(name),
            serde_json::to_string_pretty(&document)?,
        )?;
        Ok(())
    }

    fn read(&self, name: &str) -> Option<Vec<CurvePoint>> {
        let raw = fs::read_to_string(self.curve_path(name)).ok()?;
        let document: CurveDocument = serde_json::from_str(&raw).ok()?;
        Some(document.points)
    }
}

impl CurveStore for JsonCurveStore {
    fn ensure(&mut self, name: &str) -> Result<()> {
        if self.curves.contains_key(name) {
            return Ok(());
        }
        match self.read(name) {
            Some(points) => {
                self.curves.insert(name.to_owned(), points);
                Ok(())
            }
            None => {
                self.curves.insert(name.to_owned(), Vec::new());
                self.write(name)
            }
        }
    }

    fn replace_points(&mut self, name: &str, points: &[CurvePoint]) -> Result<()> {
        self.curves.insert(name.to_owned(), points.to_vec());
        self.write(name)
    }

    fn rename(&mut self, old_name: &str, new_name: &str) -> Result<()> {
        if !self.contains(old_name) {
            return self.ensure(new_name);
        }

        self.ensure(old_name)?;
        let points = self.curves.remove(old_name).unwrap_or_default();

        let old_path = self.curve_path(old_name);
        if old_path.exists() {
            fs::remove_file(&old_path)?;
        }

        self.curves.insert(new_name.to_owned(), points);
        self.write(new_name)
    }

    fn remove(&mut self, name: &str) -> Result<()> {
        self.curves.remove(name);
        let path = self.curve_path(name);
        if path.exists() {
            fs::remove_file(&path)?;
        }
        Ok(())
    }

    fn contains(&self, name: &str) -> bool {
        self.curves.contains_key(name) || self.curve_path(name).exists()
    }

    fn points(&self, name: &str) -> Option<Vec<CurvePoint>> {
        match self.curves.get(name) {
            Some(points) => Some(points.clone()),
            None => self.read(name),
        }
    }
}
