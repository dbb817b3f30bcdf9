use derive_getters::Getters;
use rmcp::schemars;
use serde::Deserialize;

use crate::{
    errors::{FileReadError, FileReadResult},
    service::limits::{DEFAULT_WINDOW_LINES, MAX_WINDOW_LINES},
    service::validation::Validate,
};

fn default_begin_line() -> i64 {
    1
}

fn default_max_lines() -> i64 {
    DEFAULT_WINDOW_LINES
}

fn default_skip_errors() -> bool {
    true
}

/// Request to read a window of lines from a single file
#[derive(Debug, Deserialize, schemars::JsonSchema, Getters)]
pub struct ReadLinesRequest {
    /// File path to read lines from, absolute or relative
    file_path: String,
    /// File encoding, optional, defaults to utf-8
    #[serde(default)]
    file_encoding: Option<String>,
    /// Working directory for relative paths, optional, defaults to the server's current directory
    #[serde(default)]
    working_directory: Option<String>,
    /// 1-based line to start from; negative counts from the end of the file, e.g. -1 means the last line
    #[serde(default = "default_begin_line")]
    begin_line: i64,
    /// Maximum number of lines to read, between 1 and 10000, defaults to 200
    #[serde(default = "default_max_lines")]
    max_lines: i64,
}

impl Validate for ReadLinesRequest {
    fn validate(&self) -> FileReadResult<()> {
        if self.file_path.trim().is_empty() {
            return Err(FileReadError::InvalidArgument {
                message: "File path must be a non-empty string".to_string(),
            });
        }

        if self.begin_line == 0 {
            return Err(FileReadError::InvalidArgument {
                message: "Begin line must be a non-zero integer".to_string(),
            });
        }

        if !(1..=MAX_WINDOW_LINES).contains(&self.max_lines) {
            return Err(FileReadError::InvalidArgument {
                message: format!(
                    "Max lines must be a positive integer between 1 and {MAX_WINDOW_LINES}"
                ),
            });
        }

        if let Some(dir) = &self.working_directory
            && dir.trim().is_empty()
        {
            return Err(FileReadError::InvalidArgument {
                message: "Working directory must be a non-empty string".to_string(),
            });
        }

        Ok(())
    }
}

/// Request to read the full contents of one or more files
#[derive(Debug, Deserialize, schemars::JsonSchema, Getters)]
pub struct ReadFilesRequest {
    /// File paths to read, absolute or relative
    file_paths: Vec<String>,
    /// Per-file encodings aligned with file_paths; missing or null entries mean utf-8
    #[serde(default)]
    file_encodings: Option<Vec<Option<String>>>,
    /// Whether to skip unreadable files instead of failing the whole call, defaults to true
    #[serde(default = "default_skip_errors")]
    skip_errors: bool,
    /// Working directory for relative paths, optional, defaults to the server's current directory
    #[serde(default)]
    working_directory: Option<String>,
}

impl Validate for ReadFilesRequest {
    fn validate(&self) -> FileReadResult<()> {
        if self.file_paths.is_empty() {
            return Err(FileReadError::InvalidArgument {
                message: "File paths must be a non-empty list of strings".to_string(),
            });
        }

        if let Some(dir) = &self.working_directory
            && dir.trim().is_empty()
        {
            return Err(FileReadError::InvalidArgument {
                message: "Working directory must be a non-empty string".to_string(),
            });
        }

        Ok(())
    }
}
