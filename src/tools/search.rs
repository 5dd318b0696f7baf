//! Keyword search tool.

use crate::error::Result;
use crate::search::{SearchEngine, DEFAULT_CONTEXT_LINES, DEFAULT_MAX_RESULTS};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Input for the search tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct SearchInput {
    /// Keyword to search for (case-insensitive substring)
    pub keyword: String,
    /// Maximum matches to return (default: 10)
    #[serde(default = "default_max_results")]
    pub max_results: usize,
    /// Context lines before and after each match (default: 2)
    #[serde(default = "default_context_lines")]
    pub context_lines: usize,
}

const fn default_max_results() -> usize {
    DEFAULT_MAX_RESULTS
}

const fn default_context_lines() -> usize {
    DEFAULT_CONTEXT_LINES
}

/// A single match in the search report.
#[derive(Debug, Serialize, JsonSchema)]
pub struct MatchOutput {
    /// Document path relative to the root
    pub path: String,
    /// Line number of the match (1-indexed)
    pub line: usize,
    /// The matched line, trimmed
    pub text: String,
    /// Line number of the first context line (1-indexed)
    pub context_start: usize,
    /// Context block around the match
    pub context: String,
}

/// Output for the search tool.
#[derive(Debug, Serialize, JsonSchema)]
pub struct SearchOutput {
    /// The keyword that was searched
    pub query: String,
    /// Matches in document order, then line order
    pub matches: Vec<MatchOutput>,
}

/// Executes the search tool.
///
/// # Errors
///
/// Empty or all-whitespace keywords are rejected; a keyword that matches
/// nothing is a success with an empty match list.
pub fn execute_search(engine: &SearchEngine, input: SearchInput) -> Result<SearchOutput> {
    let matches = engine
        .search(&input.keyword, input.max_results, input.context_lines)?
        .into_iter()
        .map(|m| MatchOutput {
            path: m.path,
            line: m.line,
            text: m.text,
            context_start: m.context_start,
            context: m.context,
        })
        .collect();

    Ok(SearchOutput {
        query: input.keyword,
        matches,
    })
}

/// Renders the search report as the single markdown payload the tool
/// returns: one `## path:line` header per match followed by a fenced block
/// of context. The no-match case is an explicit statement, distinguishable
/// from both an error and an empty string.
#[must_use]
pub fn render_report(out: &SearchOutput) -> String {
    if out.matches.is_empty() {
        return format!("No results found for '{}'.", out.query);
    }

    let mut report = format!(
        "# Search results for '{}' ({} match{})\n",
        out.query,
        out.matches.len(),
        if out.matches.len() == 1 { "" } else { "es" }
    );

    for m in &out.matches {
        report.push_str(&format!(
            "\n## {}:{}\n```\n{}\n```\n",
            m.path, m.line, m.context
        ));
    }

    report
}
