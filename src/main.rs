//! standards-mcp: MCP server for curated coding standards.
//!
//! Usage:
//!   standards-mcp --mcp --root <path>   # Start MCP server over stdio
//!   standards-mcp list                  # Show every registered document
//!   standards-mcp get core terminal-standards
//!   standards-mcp search "clean bash"

use clap::{Parser, Subcommand};
use rmcp::ServiceExt;
use standards_mcp::registry::Namespace;
use standards_mcp::search::{DEFAULT_CONTEXT_LINES, DEFAULT_MAX_RESULTS};
use standards_mcp::server::StandardsServer;
use standards_mcp::{fmt, tools, Registry, SearchEngine};
use std::io::{IsTerminal, Write};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "standards-mcp")]
#[command(about = "MCP server exposing curated coding standards to AI agents")]
#[command(version)]
struct Cli {
    /// Run as MCP server (stdin/stdout JSON-RPC)
    #[arg(long)]
    mcp: bool,

    /// Root directory containing the standards documents (default: current directory)
    #[arg(long)]
    root: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print one document in full
    Get {
        /// Document category: core, workflow, or integration
        category: String,

        /// Registered document key
        key: String,
    },

    /// Search all documents for a keyword
    Search {
        /// Keyword (case-insensitive substring)
        keyword: String,

        /// Maximum matches
        #[arg(short, long, default_value_t = DEFAULT_MAX_RESULTS)]
        limit: usize,

        /// Context lines around each match
        #[arg(short, long, default_value_t = DEFAULT_CONTEXT_LINES)]
        context: usize,

        /// Print raw JSON instead of formatted output
        #[arg(long)]
        json: bool,
    },

    /// List every registered document with its description
    List {
        /// Print raw JSON instead of formatted output
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // CRITICAL: Log to stderr only (stdout is JSON-RPC for MCP)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("standards_mcp=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let root = cli.root.unwrap_or_else(|| PathBuf::from("."));
    let root = root.canonicalize().unwrap_or(root);

    if cli.mcp {
        run_mcp_server(root).await
    } else if let Some(cmd) = cli.command {
        run_cli(root, cmd)
    } else {
        eprintln!("Use --mcp to start the MCP server, or a subcommand for CLI mode.");
        eprintln!("Run with --help for more information.");
        std::process::exit(1);
    }
}

async fn run_mcp_server(root: PathBuf) -> anyhow::Result<()> {
    tracing::info!("Starting MCP server for document root: {}", root.display());

    let server = StandardsServer::new(root)?;

    // Run the MCP server on stdin/stdout
    let service = server.serve(rmcp::transport::io::stdio()).await?;
    service.waiting().await?;

    Ok(())
}

fn run_cli(root: PathBuf, cmd: Commands) -> anyhow::Result<()> {
    let registry = Arc::new(Registry::new(root));
    let color = std::io::stdout().is_terminal();
    let mut stdout = std::io::stdout().lock();

    match cmd {
        Commands::Get { category, key } => {
            let namespace: Namespace = category.parse().map_err(|e: String| anyhow::anyhow!(e))?;
            let out = tools::execute_fetch(&registry, namespace, tools::FetchInput { key })?;
            write!(stdout, "{}", out.content)?;
        }

        Commands::Search {
            keyword,
            limit,
            context,
            json,
        } => {
            let engine = SearchEngine::new(Arc::clone(&registry));
            let input = tools::SearchInput {
                keyword,
                max_results: limit,
                context_lines: context,
            };
            let out = tools::execute_search(&engine, input)?;
            if json {
                writeln!(stdout, "{}", serde_json::to_string_pretty(&out)?)?;
            } else {
                fmt::fmt_search(&mut stdout, &out, color)?;
            }
        }

        Commands::List { json } => {
            let out = tools::execute_list(&registry);
            if json {
                writeln!(stdout, "{}", serde_json::to_string_pretty(&out)?)?;
            } else {
                fmt::fmt_list(&mut stdout, &out, color)?;
            }
        }
    }

    Ok(())
}
