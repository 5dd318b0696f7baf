//! standards-mcp: MCP server for a curated coding-standards collection.
//!
//! This library exposes a small, fixed set of markdown documents (core
//! standards, workflow patterns, integration guides) to AI agents over the
//! Model Context Protocol, so an agent can fetch one document or search by
//! keyword instead of loading the whole collection into its context window.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │              MCP Server (rmcp)              │
//! │         JSON-RPC over stdin/stdout          │
//! └─────────────────┬───────────────────────────┘
//!                   │
//! ┌─────────────────▼───────────────────────────┐
//! │                Tool Router                  │
//! │  get_core_standard, get_workflow_pattern,   │
//! │  get_integration_guide, search_standards,   │
//! │  list_available_standards                   │
//! └───────┬─────────────────────────┬───────────┘
//!         │                         │
//! ┌───────▼────────┐       ┌────────▼────────┐
//! │    Registry    │◄──────│  Search Engine  │
//! │  key → path    │       │  linear scan    │
//! └───────┬────────┘       └────────┬────────┘
//!         │                         │
//! ┌───────▼─────────────────────────▼───────────┐
//! │        Markdown documents on disk           │
//! │        (read-only, re-read per call)        │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! The registry tables are compile-time constants; nothing in this crate
//! writes to the document tree.

pub mod error;
pub mod fmt;
pub mod registry;
pub mod search;
pub mod server;
pub mod tools;

pub use error::{Result, ServerError};
pub use registry::{Namespace, Registry};
pub use search::{SearchEngine, SearchMatch};
pub use server::StandardsServer;
