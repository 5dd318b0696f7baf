//! Linear keyword search across all registered documents.
//!
//! A case-insensitive substring scan over a corpus of a dozen-odd markdown
//! files. No index, no ranking: matches come back in registry order, then
//! line order, which keeps two identical searches byte-identical.

use crate::error::SearchError;
use crate::registry::Registry;
use std::fs;
use std::sync::Arc;

/// Default cap on the number of matches returned.
pub const DEFAULT_MAX_RESULTS: usize = 10;

/// Default number of context lines on each side of a match.
pub const DEFAULT_CONTEXT_LINES: usize = 2;

/// One reported hit of the query within a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchMatch {
    /// Document path relative to the registry root.
    pub path: String,
    /// Line number of the match (1-indexed).
    pub line: usize,
    /// The matched line, trimmed.
    pub text: String,
    /// Line number of the first context line (1-indexed).
    pub context_start: usize,
    /// Context lines before and after the match, clamped to the document
    /// bounds and joined with newlines. Includes the matched line.
    pub context: String,
}

/// Scans every document resolvable via the registry.
#[derive(Debug)]
pub struct SearchEngine {
    registry: Arc<Registry>,
}

impl SearchEngine {
    #[must_use]
    pub fn new(registry: Arc<Registry>) -> Self {
        Self { registry }
    }

    /// Runs a case-insensitive substring search over the whole corpus.
    ///
    /// `max_results` is a hard global cap: scanning stops across all
    /// remaining documents once it is reached, so one match-heavy document
    /// can consume the entire budget. Unreadable documents are skipped, not
    /// fatal; a missing file must never abort the whole search.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::EmptyQuery`] when the query is empty or
    /// all-whitespace. A query that matches nothing is `Ok(vec![])`.
    pub fn search(
        &self,
        query: &str,
        max_results: usize,
        context_lines: usize,
    ) -> Result<Vec<SearchMatch>, SearchError> {
        let trimmed = query.trim();
        if trimmed.is_empty() {
            return Err(SearchError::EmptyQuery);
        }
        if max_results == 0 {
            return Ok(Vec::new());
        }

        let needle = trimmed.to_lowercase();
        let mut matches = Vec::new();

        'documents: for entry in Registry::all_entries() {
            let path = self.registry.root().join(entry.path);
            let content = match fs::read_to_string(&path) {
                Ok(content) => content,
                Err(e) => {
                    tracing::debug!("skipping unreadable document {}: {e}", entry.path);
                    continue;
                }
            };

            let lines: Vec<&str> = content.lines().collect();
            for (idx, line) in lines.iter().enumerate() {
                if !line.to_lowercase().contains(&needle) {
                    continue;
                }

                let start = idx.saturating_sub(context_lines);
                let end = (idx + context_lines).min(lines.len() - 1);

                matches.push(SearchMatch {
                    path: entry.path.to_string(),
                    line: idx + 1,
                    text: line.trim().to_string(),
                    context_start: start + 1,
                    context: lines[start..=end].join("\n"),
                });

                if matches.len() >= max_results {
                    break 'documents;
                }
            }
        }

        Ok(matches)
    }
}
