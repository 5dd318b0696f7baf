//! Document fetch and listing tools.

use crate::error::Result;
use crate::registry::{Namespace, Registry};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Input for the fetch tools (one per namespace).
#[derive(Debug, Deserialize, JsonSchema)]
pub struct FetchInput {
    /// Registered document key within the tool's namespace
    pub key: String,
}

/// Output for the fetch tools.
#[derive(Debug, Serialize, JsonSchema)]
pub struct FetchOutput {
    /// The requested key
    pub key: String,
    /// Document path relative to the root
    pub path: String,
    /// Full document text, verbatim
    pub content: String,
}

/// Executes a fetch against one namespace.
///
/// The document text is returned verbatim; the server treats documents as
/// opaque blobs and never rewrites them.
///
/// # Errors
///
/// Unknown keys and missing files surface as [`crate::error::RegistryError`]
/// values wrapped in the top-level error; both messages are self-contained.
pub fn execute_fetch(
    registry: &Registry,
    namespace: Namespace,
    input: FetchInput,
) -> Result<FetchOutput> {
    let entry = Registry::entry(namespace, &input.key)?;
    let content = registry.read(entry)?;

    Ok(FetchOutput {
        key: input.key,
        path: entry.path.to_string(),
        content,
    })
}

/// One key in a listing section.
#[derive(Debug, Serialize, JsonSchema)]
pub struct ListEntry {
    /// Registered document key
    pub key: String,
    /// One-line description
    pub description: String,
}

/// One namespace section of the listing.
#[derive(Debug, Serialize, JsonSchema)]
pub struct ListSection {
    /// Section title
    pub title: String,
    /// MCP tool that fetches keys from this section
    pub fetch_tool: String,
    /// Registered keys, in registration order
    pub entries: Vec<ListEntry>,
}

/// Output for the listing tool.
#[derive(Debug, Serialize, JsonSchema)]
pub struct ListOutput {
    /// One section per namespace
    pub sections: Vec<ListSection>,
}

/// Name of the fetch tool serving a namespace.
const fn fetch_tool(namespace: Namespace) -> &'static str {
    match namespace {
        Namespace::Core => "get_core_standard",
        Namespace::Workflow => "get_workflow_pattern",
        Namespace::Integration => "get_integration_guide",
    }
}

/// Enumerates every registered key with its description. Never fails.
#[must_use]
pub fn execute_list(_registry: &Registry) -> ListOutput {
    let sections = Namespace::ALL
        .iter()
        .map(|ns| ListSection {
            title: ns.title().to_string(),
            fetch_tool: fetch_tool(*ns).to_string(),
            entries: Registry::entries(*ns)
                .iter()
                .map(|e| ListEntry {
                    key: e.key.to_string(),
                    description: e.description.to_string(),
                })
                .collect(),
        })
        .collect();

    ListOutput { sections }
}

/// Renders the listing as the single markdown payload the tool returns.
#[must_use]
pub fn render_list(out: &ListOutput) -> String {
    let mut text = String::from("# Available standards\n");

    for section in &out.sections {
        text.push_str(&format!(
            "\n## {} ({})\n",
            section.title, section.fetch_tool
        ));
        for entry in &section.entries {
            text.push_str(&format!("- `{}`: {}\n", entry.key, entry.description));
        }
    }

    text
}
