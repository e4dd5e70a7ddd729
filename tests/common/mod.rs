#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;

/// Scratch directory under the system temp dir, removed on drop.
pub struct TestDir {
    root: PathBuf,
}

impl TestDir {
    pub fn create(label: &str) -> Result<TestDir> {
        let root = std::env::temp_dir().join(format!("sizegraph-{}-{}", label, std::process::id()));
        if root.exists() {
            fs::remove_dir_all(&root)?;
        }
        fs::create_dir_all(&root)?;
        Ok(TestDir { root })
    }

    pub fn path(&self) -> &Path {
        &self.root
    }

    pub fn join(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }

    pub fn write_file(&self, name: &str, size: usize) -> Result<PathBuf> {
        let path = self.root.join(name);
        fs::write(&path, vec![0u8; size])?;
        Ok(path)
    }
}

impl Drop for TestDir {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.root);
    }
}
