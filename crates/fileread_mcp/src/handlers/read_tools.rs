use core::fmt;
use std::sync::Arc;

use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler,
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::*,
    service::RequestContext,
    tool, tool_handler, tool_router,
};

use crate::{
    application::ReaderService,
    domain::ReadOperations,
    errors::ToolResult,
    models::requests::{ReadFilesRequest, ReadLinesRequest},
    service::limits::{DEFAULT_WINDOW_LINES, MAX_WINDOW_LINES},
    service::validation::Validate,
};

/// File Reading MCP Service
///
/// Exposes the bounded line-window and batch readers through the MCP
/// protocol. Uses dependency injection for the read operations.
pub struct FileReadService {
    read_operations: Arc<dyn ReadOperations>,
    tool_router: ToolRouter<FileReadService>,
}

impl FileReadService {
    pub fn new() -> Self {
        Self {
            read_operations: Arc::new(ReaderService::new()),
            tool_router: Self::tool_router(),
        }
    }

    fn create_resource_text(&self, uri: &str, name: &str) -> Resource {
        RawResource::new(uri, name.to_string()).no_annotation()
    }

    fn generate_status_content(&self) -> String {
        r#"File Reading MCP Server Status

Server: Running
Tools Available: 2
Resources Available: 2

Capabilities:
- Windowed line reads with head- and tail-relative positioning
- Batch whole-file reads with per-file error policy
- Per-call text encodings (any WHATWG label, defaults to utf-8)
- 10MB cap on returned content, enforced server-side

Limits:
- max_lines per window: 1 to 10000 (default 200)
- content per call / file: 10MB"#
            .to_string()
    }

    fn generate_help_content(&self) -> String {
        format!(
            r#"File Reading MCP Server Help

TOOLS:

- read_lines: Read a window of lines from a single file
  - file_path: File path, absolute or relative (required)
  - file_encoding: Text encoding label, defaults to utf-8 (optional)
  - working_directory: Base for relative paths, defaults to the server's current directory (optional)
  - begin_line: 1-based start line; negative counts from the end, -1 is the last line (optional, default 1)
  - max_lines: Lines to read, 1 to {max_lines} (optional, default {default_lines})
  - Example: {{"file_path": "logs/app.log", "begin_line": -50, "max_lines": 50}}

- read_files: Read the full contents of one or more files
  - file_paths: Array of file paths (required)
  - file_encodings: Per-file encoding labels aligned with file_paths; null entries mean utf-8 (optional)
  - skip_errors: Skip unreadable files instead of failing the whole call (optional, default true)
  - working_directory: Base for relative paths (optional)
  - Example: {{"file_paths": ["Cargo.toml", "src/main.rs"]}}

RESOURCES:
- fileread://status: Current server status and limits
- fileread://help: This help documentation

NOTES:
- Returned lines never include their trailing line terminators.
- A window whose start lies past the end of the file returns an empty list, not an error.
- A tail offset larger than the file falls back to reading from the first line.
- Content over 10MB is an error, never a silent truncation."#,
            max_lines = MAX_WINDOW_LINES,
            default_lines = DEFAULT_WINDOW_LINES,
        )
    }
}

impl Default for FileReadService {
    fn default() -> Self {
        Self::new()
    }
}

#[tool_router]
impl FileReadService {
    #[tool(
        description = "Read a window of lines from a file with a max size limit of 10MB. begin_line selects the 1-based starting line; negative values count from the end of the file, e.g. -1 means the last line. Returns the selected lines as a list of strings without trailing newlines."
    )]
    async fn read_lines(&self, Parameters(req): Parameters<ReadLinesRequest>) -> ToolResult {
        req.validate()?;

        let result = self.read_operations.read_line_window(&req).await?;

        Ok(CallToolResult::success(vec![Content::text(
            serde_json::to_string_pretty(&result).unwrap(),
        )]))
    }

    #[tool(
        description = "Read the full contents of one or multiple files with a max size limit of 10MB per file. Unreadable files are skipped unless skip_errors is false, in which case the first failure aborts the whole call. Returns a content_list of file_path and content entries."
    )]
    async fn read_files(&self, Parameters(req): Parameters<ReadFilesRequest>) -> ToolResult {
        req.validate()?;

        let result = self.read_operations.read_file_batch(&req).await?;

        Ok(CallToolResult::success(vec![Content::text(
            serde_json::to_string_pretty(&result).unwrap(),
        )]))
    }
}

#[tool_handler]
impl ServerHandler for FileReadService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_resources()
                .build(),
            server_info: Implementation::from_build_env(),
            instructions: Some(
                "File Reading MCP Server for bounded file reads. Tools: read_lines (windowed line reads, tail-relative with negative begin_line), read_files (batch whole-file reads with per-file error policy). Content is capped at 10MB per call. Resources: fileread://status, fileread://help.".to_string(),
            ),
        }
    }

    async fn list_resources(
        &self,
        _request: Option<PaginatedRequestParam>,
        _: RequestContext<RoleServer>,
    ) -> Result<ListResourcesResult, McpError> {
        Ok(ListResourcesResult {
            resources: vec![
                self.create_resource_text("fileread://status", "server-status"),
                self.create_resource_text("fileread://help", "help-documentation"),
            ],
            next_cursor: None,
        })
    }

    async fn read_resource(
        &self,
        ReadResourceRequestParam { uri }: ReadResourceRequestParam,
        _: RequestContext<RoleServer>,
    ) -> Result<ReadResourceResult, McpError> {
        match uri.as_str() {
            "fileread://status" => {
                let status = self.generate_status_content();
                Ok(ReadResourceResult {
                    contents: vec![ResourceContents::text(status, uri)],
                })
            }
            "fileread://help" => {
                let help = self.generate_help_content();
                Ok(ReadResourceResult {
                    contents: vec![ResourceContents::text(help, uri)],
                })
            }
            _ => Err(McpError::resource_not_found(
                format!("Resource not found: {}", uri),
                Some(serde_json::json!({
                    "available_resources": ["fileread://status", "fileread://help"]
                })),
            )),
        }
    }

    async fn list_resource_templates(
        &self,
        _request: Option<PaginatedRequestParam>,
        _: RequestContext<RoleServer>,
    ) -> Result<ListResourceTemplatesResult, McpError> {
        Ok(ListResourceTemplatesResult {
            next_cursor: None,
            resource_templates: Vec::new(),
        })
    }

    async fn initialize(
        &self,
        _request: InitializeRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<InitializeResult, McpError> {
        tracing::info!("File Reading MCP Server initialized successfully");
        Ok(self.get_info())
    }
}

impl fmt::Debug for FileReadService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FileReadService").finish()
    }
}
