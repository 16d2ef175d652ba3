//! Shared fixtures for the integration tests.

#![allow(dead_code)]

use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use tracing_subscriber::EnvFilter;

/// A temporary directory tree, laid out from `(relative path, content)` pairs
pub struct Fixture {
    temp: TempDir,
}

impl Fixture {
    pub fn new(files: &[(&str, String)]) -> Self {
        init_tracing();

        let temp = TempDir::new().unwrap();
        for (relative, content) in files {
            let path = temp.path().join(relative);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(path, content).unwrap();
        }

        Self { temp }
    }

    /// The fixture root, standing in for `/test`
    pub fn root(&self) -> &Path {
        self.temp.path()
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.temp.path().join(relative)
    }

    /// Keep a resolved root only if it lies inside the fixture
    ///
    /// Resolution keeps walking above the temp dir up to `/`, so a workspace
    /// config on the host (say `/tmp/package.json`) could answer for a
    /// fixture that declares nothing. Tests only assert on the fixture tree.
    pub fn within(&self, resolved: Option<PathBuf>) -> Option<PathBuf> {
        resolved.filter(|root| root.starts_with(self.root()))
    }

    pub fn create_dir(&self, relative: &str) -> PathBuf {
        let path = self.path(relative);
        fs::create_dir_all(&path).unwrap();
        path
    }
}

pub fn json(value: Value) -> String {
    serde_json::to_string(&value).unwrap()
}

pub fn yaml(value: Value) -> String {
    serde_yaml::to_string(&value).unwrap()
}

/// Logs go to the test writer; set `RUST_LOG=debug` to see each probed directory
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
