//! MCP tool implementations.

mod docs;
mod search;

// docs
pub use docs::{
    execute_fetch, execute_list, render_list, FetchInput, FetchOutput, ListEntry, ListOutput,
    ListSection,
};

// search
pub use search::{execute_search, render_report, MatchOutput, SearchInput, SearchOutput};
