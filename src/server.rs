//! MCP server implementation using rmcp.

use crate::error::ServerError;
use crate::registry::{Namespace, Registry};
use crate::search::SearchEngine;
use crate::tools;
use rmcp::handler::server::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolResult, Content, ServerCapabilities, ServerInfo};
use rmcp::{schemars, tool, tool_handler, tool_router, ServerHandler};
use serde::Deserialize;
use std::fmt::Display;
use std::path::PathBuf;
use std::sync::Arc;

/// Parameters for `get_core_standard`.
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct GetCoreStandardRequest {
    #[schemars(description = "Core standard key, e.g. 'terminal-standards'")]
    pub standard: String,
}

/// Parameters for `get_workflow_pattern`.
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct GetWorkflowPatternRequest {
    #[schemars(description = "Workflow pattern key, e.g. 'session-management'")]
    pub pattern: String,
}

/// Parameters for `get_integration_guide`.
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct GetIntegrationGuideRequest {
    #[schemars(description = "Integration guide key, e.g. 'claude-code'")]
    pub tool: String,
}

/// Parameters for `search_standards`.
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SearchStandardsRequest {
    #[schemars(description = "Keyword to search for")]
    pub keyword: String,
    #[schemars(description = "Maximum matches to return (default: 10)")]
    pub max_results: Option<usize>,
    #[schemars(description = "Context lines around each match (default: 2)")]
    pub context_lines: Option<usize>,
}

/// Helper to run a blocking tool operation and return an MCP result.
///
/// Filesystem reads are blocking, so the closure runs on `spawn_blocking()`.
/// Tool-level failures become `CallToolResult::error()` text (the caller
/// must be able to distinguish "tool failed" from "tool succeeded with no
/// results"); only a panicked task surfaces as a protocol-level error.
async fn run_tool<E, F>(name: &'static str, f: F) -> Result<CallToolResult, rmcp::Error>
where
    E: Display + Send + 'static,
    F: FnOnce() -> Result<String, E> + Send + 'static,
{
    tracing::debug!("tool invoked: {name}");
    let result = tokio::task::spawn_blocking(f).await;

    match result {
        Ok(Ok(text)) => Ok(CallToolResult::success(vec![Content::text(text)])),
        Ok(Err(e)) => Ok(CallToolResult::error(vec![Content::text(e.to_string())])),
        Err(e) => Err(rmcp::Error::internal_error(e.to_string(), None)),
    }
}

/// MCP server for the standards document collection.
///
/// Holds no mutable state: every operation is a pure read of the filesystem
/// followed by pure computation, so invocations are independent.
#[derive(Clone)]
pub struct StandardsServer {
    registry: Arc<Registry>,
    engine: Arc<SearchEngine>,
    tool_router: ToolRouter<Self>,
}

impl StandardsServer {
    /// Creates a server rooted at the given document directory.
    ///
    /// The root is fixed for the lifetime of the server.
    pub fn new(root: PathBuf) -> Result<Self, ServerError> {
        if !root.is_dir() {
            return Err(ServerError::Config(format!(
                "document root is not a directory: {}",
                root.display()
            )));
        }

        let registry = Arc::new(Registry::new(root));
        let engine = Arc::new(SearchEngine::new(Arc::clone(&registry)));
        Ok(Self {
            registry,
            engine,
            tool_router: Self::tool_router(),
        })
    }

    async fn fetch(
        &self,
        name: &'static str,
        namespace: Namespace,
        key: String,
    ) -> Result<CallToolResult, rmcp::Error> {
        let registry = Arc::clone(&self.registry);
        run_tool(name, move || {
            tools::execute_fetch(&registry, namespace, tools::FetchInput { key })
                .map(|out| out.content)
        })
        .await
    }
}

// Tool implementations using rmcp macros
#[tool_router]
impl StandardsServer {
    /// Fetch one of the core standards documents.
    #[tool(description = "Get a core standards document in full.\n\n\
        Core standards are the three top-level rule sets: terminal-standards, \
        commit-standards, agent-rules.\n\
        Tip: call 'list_available_standards' first to see every key with its description.")]
    async fn get_core_standard(
        &self,
        Parameters(req): Parameters<GetCoreStandardRequest>,
    ) -> Result<CallToolResult, rmcp::Error> {
        self.fetch("get_core_standard", Namespace::Core, req.standard)
            .await
    }

    /// Fetch one of the workflow pattern documents.
    #[tool(description = "Get a workflow pattern document in full.\n\n\
        Workflow patterns describe recurring development workflows such as \
        session-management or branching-strategy.\n\
        Tip: call 'list_available_standards' first to see every key with its description.")]
    async fn get_workflow_pattern(
        &self,
        Parameters(req): Parameters<GetWorkflowPatternRequest>,
    ) -> Result<CallToolResult, rmcp::Error> {
        self.fetch("get_workflow_pattern", Namespace::Workflow, req.pattern)
            .await
    }

    /// Fetch one of the tool integration guides.
    #[tool(description = "Get an integration guide in full.\n\n\
        Integration guides describe how to wire a specific AI coding tool \
        (claude-code, cursor, aider, ...) to these standards.\n\
        Tip: call 'list_available_standards' first to see every key with its description.")]
    async fn get_integration_guide(
        &self,
        Parameters(req): Parameters<GetIntegrationGuideRequest>,
    ) -> Result<CallToolResult, rmcp::Error> {
        self.fetch("get_integration_guide", Namespace::Integration, req.tool)
            .await
    }

    /// Search all documents for a keyword.
    #[tool(description = "Search every standards document for a keyword \
        (case-insensitive substring).\n\n\
        Returns up to max_results matches in document order with context_lines \
        lines of context around each. Use the fetch tools to read a matching \
        document in full.")]
    async fn search_standards(
        &self,
        Parameters(req): Parameters<SearchStandardsRequest>,
    ) -> Result<CallToolResult, rmcp::Error> {
        let engine = Arc::clone(&self.engine);
        let input = tools::SearchInput {
            keyword: req.keyword,
            max_results: req.max_results.unwrap_or(crate::search::DEFAULT_MAX_RESULTS),
            context_lines: req
                .context_lines
                .unwrap_or(crate::search::DEFAULT_CONTEXT_LINES),
        };
        run_tool("search_standards", move || {
            tools::execute_search(&engine, input).map(|out| tools::render_report(&out))
        })
        .await
    }

    /// List every available document key.
    #[tool(description = "List all available standards, workflow patterns, and \
        integration guides with one-line descriptions.\n\n\
        Call this first to learn the key vocabulary for the fetch tools.")]
    async fn list_available_standards(&self) -> Result<CallToolResult, rmcp::Error> {
        let registry = Arc::clone(&self.registry);
        run_tool("list_available_standards", move || {
            Ok::<_, ServerError>(tools::render_list(&tools::execute_list(&registry)))
        })
        .await
    }
}

// Implement ServerHandler trait
#[tool_handler]
impl ServerHandler for StandardsServer {
    fn get_info(&self) -> ServerInfo {
        let instructions = "standards-mcp: curated coding standards for AI agents.\n\n\
             WORKFLOW:\n\
             1. list_available_standards -> learn the document keys\n\
             2. get_core_standard / get_workflow_pattern / get_integration_guide -> read one document\n\
             3. search_standards -> find which documents mention a keyword\n\n\
             Fetch only the documents you need instead of loading the whole \
             collection into context."
            .to_string();

        ServerInfo {
            instructions: Some(instructions),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}
