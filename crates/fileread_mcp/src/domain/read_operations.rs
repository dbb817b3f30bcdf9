use async_trait::async_trait;

use crate::{
    errors::FileReadResult,
    models::requests::{ReadFilesRequest, ReadLinesRequest},
    models::responses::{ReadFilesResult, ReadLinesResult},
};

/// Domain trait for the bounded read operations exposed by the server
///
/// The tool layer validates request shape and hands already-validated
/// requests to an implementation; implementations own path resolution,
/// size caps and decoding.
#[async_trait]
pub trait ReadOperations: Send + Sync {
    /// Read a contiguous window of lines from one file
    ///
    /// The window is selected by `begin_line` (1-based, or negative for
    /// tail-relative) and `max_lines`, streamed in a single pass with a hard
    /// cap on the cumulative bytes returned.
    async fn read_line_window(&self, req: &ReadLinesRequest) -> FileReadResult<ReadLinesResult>;

    /// Read whole files across a list of paths
    ///
    /// Each file is capped individually; per-file failures are skipped or
    /// abort the whole call depending on `skip_errors`.
    async fn read_file_batch(&self, req: &ReadFilesRequest) -> FileReadResult<ReadFilesResult>;
}
