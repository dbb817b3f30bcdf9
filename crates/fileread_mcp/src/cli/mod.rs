use clap::Parser;

/// File Reading MCP Server
///
/// A Model Context Protocol server exposing bounded file reads: windowed
/// line reads (head- or tail-relative) and batch whole-file reads with a
/// per-file error policy.
///
/// ## Development
/// ```bash
/// npx @modelcontextprotocol/inspector cargo run --bin mcp-server-fileread
/// ```
///
/// ## Configuration
/// Add to your MCP client configuration:
/// ```json
/// {
///   "mcpServers": {
///     "fileread": {
///       "command": "mcp-server-fileread",
///       "env": {
///         "RUST_LOG": "info"
///       }
///     }
///   }
/// }
/// ```
///
/// ## Environment Variables
/// - `RUST_LOG`: Controls logging verbosity (trace, debug, info, warn, error)
#[derive(Parser, Debug, Clone)]
#[command(name = "mcp-server-fileread")]
#[command(about = "An MCP server for bounded line-window and batch file reading")]
#[command(version)]
#[command(
    long_about = "A Model Context Protocol (MCP) server that provides bounded file reading. \nread_lines returns a window of lines selected by a 1-based or tail-relative start line; \nread_files reads whole files across a list of paths with per-file error handling. \nThe server takes no arguments: every request carries its own working directory, \nencoding and limits, and returned content is capped at 10MB."
)]
pub struct Cli {}

impl Cli {
    /// Parse CLI arguments, answering --help/--version before serving
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
