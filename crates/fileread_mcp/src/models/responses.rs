use rmcp::schemars;
use serde::{Deserialize, Serialize};

/// Result of a line-window read
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct ReadLinesResult {
    /// Resolved path of the file that was read
    pub file_path: String,
    /// The caller's begin_line, echoed back unmodified
    pub begin_line: i64,
    /// Number of lines actually returned
    pub num_lines: usize,
    /// The selected lines, without trailing line terminators
    pub content_lines: Vec<String>,
}

/// One successfully read file in a batch
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct FileContent {
    /// Resolved path of the file
    pub file_path: String,
    /// Full decoded content of the file
    pub content: String,
}

/// Result of a batch read
///
/// Entries keep the relative order of the input paths; skipped files leave
/// no gap.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct ReadFilesResult {
    /// Contents of the files that were read
    pub content_list: Vec<FileContent>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_lines_result_serialization() {
        let result = ReadLinesResult {
            file_path: "/tmp/notes.txt".to_string(),
            begin_line: -2,
            num_lines: 1,
            content_lines: vec!["Line 4".to_string()],
        };

        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"begin_line\":-2"));
        assert!(json.contains("Line 4"));
    }
}
