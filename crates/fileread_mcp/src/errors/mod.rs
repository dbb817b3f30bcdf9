use rmcp::serde_json::json;

pub type McpError = rmcp::ErrorData;

/// Result type for the read operations
pub type FileReadResult<T> = Result<T, FileReadError>;

/// Type alias for MCP results
pub type McpResult<T> = Result<T, McpError>;

/// Type alias for tool results
pub type ToolResult = McpResult<rmcp::model::CallToolResult>;

// Machine-readable error codes surfaced to MCP clients
const ERROR_INVALID_ARGUMENT: &str = "invalid_argument";
const ERROR_NOT_FOUND: &str = "not_found";
const ERROR_SIZE_EXCEEDED: &str = "size_exceeded";
const ERROR_DECODE: &str = "decode_error";
const ERROR_INTERNAL: &str = "internal";

/// Errors raised by path resolution and the two readers
#[derive(Debug, thiserror::Error)]
pub enum FileReadError {
    #[error("{message}")]
    InvalidArgument { message: String },
    #[error("File '{path}' does not exist or is not readable")]
    NotFound { path: String },
    #[error("Content of '{path}' exceeds maximum size limit of 10MB")]
    SizeExceeded { path: String },
    #[error("Cannot decode '{path}' as '{encoding}'")]
    DecodeError { path: String, encoding: String },
    /// Any other I/O failure, with the original cause attached
    #[error("{context}: {source}")]
    Internal {
        context: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Logging initialization failed: {0}")]
    LoggingInitialization(String),
}

impl From<FileReadError> for McpError {
    fn from(err: FileReadError) -> Self {
        let message = err.to_string();
        match err {
            FileReadError::InvalidArgument { .. } => {
                McpError::invalid_params(message, Some(json!({"code": ERROR_INVALID_ARGUMENT})))
            }
            FileReadError::NotFound { path } => McpError::resource_not_found(
                message,
                Some(json!({"code": ERROR_NOT_FOUND, "path": path})),
            ),
            FileReadError::SizeExceeded { path } => McpError::invalid_request(
                message,
                Some(json!({"code": ERROR_SIZE_EXCEEDED, "path": path})),
            ),
            FileReadError::DecodeError { path, encoding } => McpError::invalid_request(
                message,
                Some(json!({"code": ERROR_DECODE, "path": path, "encoding": encoding})),
            ),
            FileReadError::Internal { .. } | FileReadError::LoggingInitialization(_) => {
                McpError::internal_error(message, Some(json!({"code": ERROR_INTERNAL})))
            }
        }
    }
}
