//! Common test utilities for standards-mcp integration tests.
//!
//! Provides `TestEnv` for setting up an isolated document root with
//! registry and search engine wired together.

#![allow(dead_code)] // Test utilities may not all be used in every test file

use standards_mcp::registry::{Namespace, Registry};
use standards_mcp::search::SearchEngine;
use std::fs;
use std::sync::Arc;
use tempfile::TempDir;

/// An isolated document root with registry and search engine.
pub struct TestEnv {
    pub dir: TempDir,
    pub registry: Arc<Registry>,
    pub engine: SearchEngine,
}

impl TestEnv {
    /// Creates a new environment with an empty document root.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp directory");
        let registry = Arc::new(Registry::new(dir.path().to_path_buf()));
        let engine = SearchEngine::new(Arc::clone(&registry));

        Self {
            dir,
            registry,
            engine,
        }
    }

    /// Writes a document at a root-relative path, creating parents.
    pub fn write_doc(&self, rel: &str, content: &str) {
        let path = self.dir.path().join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write test document");
    }

    /// Writes the document backing a registered key.
    pub fn write_key(&self, namespace: Namespace, key: &str, content: &str) {
        let entry = Registry::entry(namespace, key).expect("key must be registered");
        self.write_doc(entry.path, content);
    }

    /// Deletes the document backing a registered key.
    pub fn delete_key(&self, namespace: Namespace, key: &str) {
        let entry = Registry::entry(namespace, key).expect("key must be registered");
        fs::remove_file(self.dir.path().join(entry.path)).expect("Failed to delete document");
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

/// Creates an environment where every registered key has a backing file.
///
/// Each document mentions its own key plus a shared marker so corpus-wide
/// searches have predictable hits.
pub fn full_corpus() -> TestEnv {
    let env = TestEnv::new();

    for entry in Registry::all_entries() {
        env.write_doc(
            entry.path,
            &format!(
                "# {key}\n\n{description}\n\nEvery document carries the corpus-marker line.\n",
                key = entry.key,
                description = entry.description,
            ),
        );
    }

    env
}
