//! Document registry: fixed key-to-path tables across three namespaces.
//!
//! The tables are compile-time constants. The registry owns only the root
//! directory the relative paths resolve against; it exposes no mutation API.
//! Documents are re-read from disk on every resolve so callers always see
//! the current file content.

use crate::error::RegistryError;
use std::fs;
use std::path::{Path, PathBuf};

/// The three disjoint document namespaces.
///
/// The split exists for discoverability and to keep each tool's key
/// validation narrow: an invalid key in one namespace can never be
/// confused with a valid key in another.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Namespace {
    Core,
    Workflow,
    Integration,
}

impl Namespace {
    /// Human-readable singular label, used in error messages.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Core => "core standard",
            Self::Workflow => "workflow pattern",
            Self::Integration => "integration guide",
        }
    }

    /// Section title for listings.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Core => "Core standards",
            Self::Workflow => "Workflow patterns",
            Self::Integration => "Integration guides",
        }
    }

    /// All namespaces in registration order. Search results follow this
    /// order, so it is a tested property rather than a convenience.
    pub const ALL: [Namespace; 3] = [Self::Core, Self::Workflow, Self::Integration];
}

impl std::fmt::Display for Namespace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for Namespace {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "core" | "standard" => Ok(Self::Core),
            "workflow" | "pattern" => Ok(Self::Workflow),
            "integration" | "guide" => Ok(Self::Integration),
            other => Err(format!(
                "Invalid category: '{}'. Valid categories: core, workflow, integration",
                other
            )),
        }
    }
}

/// One registered document: logical key, path relative to the document
/// root, and a one-line description shown by the listing tool.
#[derive(Debug)]
pub struct DocEntry {
    pub key: &'static str,
    pub path: &'static str,
    pub description: &'static str,
}

const CORE_STANDARDS: &[DocEntry] = &[
    DocEntry {
        key: "terminal-standards",
        path: "standards/terminal-standards.md",
        description: "Terminal discipline: clean bash, non-interactive commands, output hygiene",
    },
    DocEntry {
        key: "commit-standards",
        path: "standards/commit-standards.md",
        description: "Commit message format, scoping, and branch hygiene rules",
    },
    DocEntry {
        key: "agent-rules",
        path: "standards/agent-rules.md",
        description: "Universal ground rules every AI coding agent must follow",
    },
];

const WORKFLOW_PATTERNS: &[DocEntry] = &[
    DocEntry {
        key: "session-management",
        path: "workflows/session-management.md",
        description: "Starting, suspending, and resuming focused work sessions",
    },
    DocEntry {
        key: "branching-strategy",
        path: "workflows/branching-strategy.md",
        description: "Branch naming, lifetimes, and merge flow",
    },
    DocEntry {
        key: "code-review",
        path: "workflows/code-review.md",
        description: "Review checklist and feedback conventions",
    },
    DocEntry {
        key: "testing-strategy",
        path: "workflows/testing-strategy.md",
        description: "Test-first loops and coverage expectations",
    },
    DocEntry {
        key: "documentation",
        path: "workflows/documentation.md",
        description: "Keeping docs in step with code changes",
    },
    DocEntry {
        key: "refactoring",
        path: "workflows/refactoring.md",
        description: "Incremental refactoring with safety nets",
    },
    DocEntry {
        key: "release-process",
        path: "workflows/release-process.md",
        description: "Versioning, changelogs, and release checklists",
    },
];

const INTEGRATION_GUIDES: &[DocEntry] = &[
    DocEntry {
        key: "claude-code",
        path: "integrations/claude-code.md",
        description: "Wiring Claude Code to these standards",
    },
    DocEntry {
        key: "cursor",
        path: "integrations/cursor.md",
        description: "Cursor editor setup and rule files",
    },
    DocEntry {
        key: "github-copilot",
        path: "integrations/github-copilot.md",
        description: "GitHub Copilot instructions configuration",
    },
    DocEntry {
        key: "aider",
        path: "integrations/aider.md",
        description: "Aider conventions and configuration",
    },
    DocEntry {
        key: "windsurf",
        path: "integrations/windsurf.md",
        description: "Windsurf rules integration",
    },
    DocEntry {
        key: "cline",
        path: "integrations/cline.md",
        description: "Cline custom instructions",
    },
    DocEntry {
        key: "continue",
        path: "integrations/continue.md",
        description: "Continue.dev rules and configuration",
    },
];

/// Resolves registered document keys to file content under a fixed root.
///
/// The root is chosen once at construction and never changes afterwards.
#[derive(Debug)]
pub struct Registry {
    root: PathBuf,
}

impl Registry {
    #[must_use]
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// The document root all registered paths resolve against.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Registration table for one namespace, in insertion order.
    #[must_use]
    pub fn entries(namespace: Namespace) -> &'static [DocEntry] {
        match namespace {
            Namespace::Core => CORE_STANDARDS,
            Namespace::Workflow => WORKFLOW_PATTERNS,
            Namespace::Integration => INTEGRATION_GUIDES,
        }
    }

    /// Every registered entry across all namespaces, in registration order
    /// (core, then workflow, then integration). Not sorted; the search
    /// engine's result ordering is defined by this iteration order.
    pub fn all_entries() -> impl Iterator<Item = &'static DocEntry> {
        Namespace::ALL
            .iter()
            .flat_map(|ns| Self::entries(*ns).iter())
    }

    /// Valid keys for one namespace, for error enumeration.
    #[must_use]
    pub fn keys(namespace: Namespace) -> Vec<&'static str> {
        Self::entries(namespace).iter().map(|e| e.key).collect()
    }

    /// Looks up a registered entry by key within one namespace.
    pub fn entry(namespace: Namespace, key: &str) -> Result<&'static DocEntry, RegistryError> {
        Self::entries(namespace)
            .iter()
            .find(|e| e.key == key)
            .ok_or_else(|| RegistryError::UnknownKey {
                namespace,
                key: key.to_string(),
                valid: Self::keys(namespace),
            })
    }

    /// Reads the full UTF-8 text of a registered entry. Re-read on every
    /// call; nothing is cached.
    ///
    /// # Errors
    ///
    /// [`RegistryError::FileNotFound`] naming the resolved path if the file
    /// is missing or unreadable.
    pub fn read(&self, entry: &DocEntry) -> Result<String, RegistryError> {
        let path = self.root.join(entry.path);
        fs::read_to_string(&path).map_err(|source| RegistryError::FileNotFound { path, source })
    }

    /// Reads and returns the full UTF-8 text of the document mapped to
    /// `key` in `namespace`.
    ///
    /// # Errors
    ///
    /// - [`RegistryError::UnknownKey`] if the key is not registered in the
    ///   namespace; the message enumerates the valid keys.
    /// - [`RegistryError::FileNotFound`] if the registered file is missing
    ///   or unreadable; the message names the resolved path.
    pub fn resolve(&self, namespace: Namespace, key: &str) -> Result<String, RegistryError> {
        self.read(Self::entry(namespace, key)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn namespace_sizes_match_registered_vocabulary() {
        assert_eq!(Registry::entries(Namespace::Core).len(), 3);
        assert_eq!(Registry::entries(Namespace::Workflow).len(), 7);
        assert_eq!(Registry::entries(Namespace::Integration).len(), 7);
    }

    #[test]
    fn keys_are_unique_within_each_namespace() {
        for ns in Namespace::ALL {
            let keys = Registry::keys(ns);
            let unique: HashSet<_> = keys.iter().collect();
            assert_eq!(keys.len(), unique.len(), "duplicate key in {ns}");
        }
    }

    #[test]
    fn all_entries_iterates_in_registration_order() {
        let paths: Vec<_> = Registry::all_entries().map(|e| e.path).collect();
        assert_eq!(paths.len(), 17);
        assert_eq!(paths[0], "standards/terminal-standards.md");
        assert!(paths[3].starts_with("workflows/"));
        assert!(paths[10].starts_with("integrations/"));
    }

    #[test]
    fn unknown_key_enumerates_valid_keys() {
        let err = Registry::entry(Namespace::Core, "does-not-exist").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("does-not-exist"));
        assert!(msg.contains("terminal-standards"));
        assert!(msg.contains("commit-standards"));
        assert!(msg.contains("agent-rules"));
    }

    #[test]
    fn namespace_parses_cli_forms() {
        assert_eq!("core".parse::<Namespace>().unwrap(), Namespace::Core);
        assert_eq!("WORKFLOW".parse::<Namespace>().unwrap(), Namespace::Workflow);
        assert_eq!(
            "integration".parse::<Namespace>().unwrap(),
            Namespace::Integration
        );
        assert!("nope".parse::<Namespace>().is_err());
    }

    #[test]
    fn resolve_reads_file_content() {
        let dir = tempfile::TempDir::new().unwrap();
        std::fs::create_dir_all(dir.path().join("standards")).unwrap();
        std::fs::write(
            dir.path().join("standards/terminal-standards.md"),
            "# Terminal\n\nclean bash\n",
        )
        .unwrap();

        let registry = Registry::new(dir.path().to_path_buf());
        let text = registry
            .resolve(Namespace::Core, "terminal-standards")
            .unwrap();
        assert!(text.contains("clean bash"));
    }

    #[test]
    fn resolve_missing_file_names_resolved_path() {
        let dir = tempfile::TempDir::new().unwrap();
        let registry = Registry::new(dir.path().to_path_buf());

        let err = registry
            .resolve(Namespace::Workflow, "code-review")
            .unwrap_err();
        let msg = err.to_string();
        assert!(matches!(err, RegistryError::FileNotFound { .. }));
        assert!(msg.contains("code-review.md"));
    }
}
