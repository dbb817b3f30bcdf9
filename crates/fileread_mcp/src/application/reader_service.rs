use std::collections::VecDeque;

use async_trait::async_trait;
use tokio::fs::{self, File};
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::{
    domain::ReadOperations,
    errors::{FileReadError, FileReadResult},
    models::requests::{ReadFilesRequest, ReadLinesRequest},
    models::responses::{FileContent, ReadFilesResult, ReadLinesResult},
    service::encoding::FileEncoding,
    service::limits::MAX_CONTENT_BYTES,
    service::validation::Validate,
    utils::path::resolve_path,
};

/// Streaming implementation of the bounded read operations
///
/// Every call opens at most one file handle, reads it in a single forward
/// pass and drops it before returning. No state is shared between calls.
pub struct ReaderService;

impl ReaderService {
    pub fn new() -> Self {
        Self
    }

    /// Working directory for one call: the request's value when present,
    /// otherwise the process current directory captured now.
    fn working_directory(requested: Option<&str>) -> FileReadResult<String> {
        match requested {
            Some(dir) => Ok(dir.to_string()),
            None => std::env::current_dir()
                .map(|dir| dir.to_string_lossy().into_owned())
                .map_err(|source| FileReadError::Internal {
                    context: "Failed to determine current working directory".to_string(),
                    source,
                }),
        }
    }

    /// Read the next raw line (terminator included) into `buf`.
    /// Returns `false` at end of file.
    async fn next_raw_line(
        reader: &mut BufReader<File>,
        buf: &mut Vec<u8>,
        path: &str,
    ) -> FileReadResult<bool> {
        buf.clear();
        let bytes_read =
            reader
                .read_until(b'\n', buf)
                .await
                .map_err(|source| FileReadError::Internal {
                    context: format!("Error reading file '{path}'"),
                    source,
                })?;
        Ok(bytes_read > 0)
    }

    fn strip_line_terminator(line: &str) -> &str {
        line.strip_suffix("\r\n")
            .or_else(|| line.strip_suffix('\n'))
            .unwrap_or(line)
    }

    /// Account one more line against the per-call byte cap.
    /// The terminator still counts; the cap applies to what the file held.
    fn charge_bytes(total: &mut u64, line: &str, path: &str) -> FileReadResult<()> {
        *total += line.len() as u64;
        if *total > MAX_CONTENT_BYTES {
            return Err(FileReadError::SizeExceeded {
                path: path.to_string(),
            });
        }
        Ok(())
    }

    /// Forward window: skip `begin_line - 1` lines without decoding them,
    /// then collect up to `max_lines` lines.
    async fn collect_forward(
        reader: &mut BufReader<File>,
        path: &str,
        encoding: FileEncoding,
        begin_line: u64,
        max_lines: usize,
    ) -> FileReadResult<Vec<String>> {
        let mut buf = Vec::new();

        for _ in 1..begin_line {
            if !Self::next_raw_line(reader, &mut buf, path).await? {
                // The window starts past the end of the file
                return Ok(Vec::new());
            }
        }

        let mut lines = Vec::new();
        let mut total_bytes: u64 = 0;
        while lines.len() < max_lines {
            if !Self::next_raw_line(reader, &mut buf, path).await? {
                break;
            }
            let decoded = encoding.decode(&buf, path)?;
            Self::charge_bytes(&mut total_bytes, &decoded, path)?;
            lines.push(Self::strip_line_terminator(&decoded).to_string());
        }

        Ok(lines)
    }

    /// Tail-relative window: one pass over the file keeping only the last
    /// `k + max_lines` lines in a bounded deque, then slice the window.
    ///
    /// When `k` exceeds the file's line count the slice starts at the first
    /// line, so an overshooting tail offset falls back to reading from the
    /// head.
    async fn collect_tail(
        reader: &mut BufReader<File>,
        path: &str,
        encoding: FileEncoding,
        k: usize,
        max_lines: usize,
    ) -> FileReadResult<Vec<String>> {
        let capacity = k.saturating_add(max_lines);
        let mut window: VecDeque<String> = VecDeque::new();
        let mut buf = Vec::new();

        while Self::next_raw_line(reader, &mut buf, path).await? {
            if window.len() == capacity {
                window.pop_front();
            }
            window.push_back(encoding.decode(&buf, path)?);
        }

        // window.len() == min(total_lines, k + max_lines)
        let collected = window.len();
        let start_idx = collected.saturating_sub(k);
        let take = max_lines.min(k).min(collected - start_idx);

        let mut lines = Vec::with_capacity(take);
        let mut total_bytes: u64 = 0;
        for raw in window.iter().skip(start_idx).take(take) {
            Self::charge_bytes(&mut total_bytes, raw, path)?;
            lines.push(Self::strip_line_terminator(raw).to_string());
        }

        Ok(lines)
    }

    /// Pair each input path with a resolved encoding.
    /// Missing entries and, when errors are skippable, unusable labels fall
    /// back to utf-8.
    fn align_encodings(req: &ReadFilesRequest) -> FileReadResult<Vec<FileEncoding>> {
        let labels = req.file_encodings().as_ref();
        let mut encodings = Vec::with_capacity(req.file_paths().len());

        for (index, path) in req.file_paths().iter().enumerate() {
            let label = labels
                .and_then(|labels| labels.get(index))
                .and_then(|label| label.as_deref());
            match FileEncoding::resolve(label) {
                Ok(encoding) => encodings.push(encoding),
                Err(err) if *req.skip_errors() => {
                    tracing::warn!(path = %path, error = %err, "invalid file encoding, defaulting to utf-8");
                    encodings.push(FileEncoding::default());
                }
                Err(err) => return Err(err),
            }
        }

        Ok(encodings)
    }

    /// Read and decode one whole file, enforcing the per-file size cap
    /// before any bytes are pulled in.
    async fn read_whole_file(resolved: &str, encoding: FileEncoding) -> FileReadResult<String> {
        let metadata = fs::metadata(resolved)
            .await
            .map_err(|_| FileReadError::NotFound {
                path: resolved.to_string(),
            })?;
        if !metadata.is_file() {
            return Err(FileReadError::NotFound {
                path: resolved.to_string(),
            });
        }
        if metadata.len() > MAX_CONTENT_BYTES {
            return Err(FileReadError::SizeExceeded {
                path: resolved.to_string(),
            });
        }

        tracing::debug!(path = %resolved, encoding = encoding.name(), size = metadata.len(), "reading file");

        let bytes = fs::read(resolved)
            .await
            .map_err(|source| FileReadError::Internal {
                context: format!("Error reading file '{resolved}'"),
                source,
            })?;
        encoding.decode(&bytes, resolved)
    }
}

impl Default for ReaderService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ReadOperations for ReaderService {
    async fn read_line_window(&self, req: &ReadLinesRequest) -> FileReadResult<ReadLinesResult> {
        // Limits are enforced here regardless of caller-side validation
        req.validate()?;

        let working_directory = Self::working_directory(req.working_directory().as_deref())?;
        let resolved = resolve_path(req.file_path(), &working_directory)?;
        let encoding = FileEncoding::resolve(req.file_encoding().as_deref())?;

        let metadata = fs::metadata(&resolved)
            .await
            .map_err(|_| FileReadError::NotFound {
                path: resolved.clone(),
            })?;
        if !metadata.is_file() {
            return Err(FileReadError::NotFound { path: resolved });
        }

        tracing::debug!(
            path = %resolved,
            encoding = encoding.name(),
            begin_line = req.begin_line(),
            max_lines = req.max_lines(),
            size = metadata.len(),
            "reading line window"
        );

        let file = File::open(&resolved)
            .await
            .map_err(|source| FileReadError::Internal {
                context: format!("Error opening file '{resolved}'"),
                source,
            })?;
        let mut reader = BufReader::new(file);

        let begin_line = *req.begin_line();
        let max_lines = *req.max_lines() as usize;
        let content_lines = if begin_line < 0 {
            let k = usize::try_from(begin_line.unsigned_abs()).unwrap_or(usize::MAX);
            Self::collect_tail(&mut reader, &resolved, encoding, k, max_lines).await?
        } else {
            Self::collect_forward(&mut reader, &resolved, encoding, begin_line as u64, max_lines)
                .await?
        };

        Ok(ReadLinesResult {
            file_path: resolved,
            begin_line,
            num_lines: content_lines.len(),
            content_lines,
        })
    }

    async fn read_file_batch(&self, req: &ReadFilesRequest) -> FileReadResult<ReadFilesResult> {
        // Limits are enforced here regardless of caller-side validation
        req.validate()?;

        let working_directory = Self::working_directory(req.working_directory().as_deref())?;

        // Resolve every path up front; a malformed entry fails the whole
        // call regardless of skip_errors.
        let mut resolved_paths = Vec::with_capacity(req.file_paths().len());
        for path in req.file_paths() {
            resolved_paths.push(resolve_path(path, &working_directory)?);
        }

        let encodings = Self::align_encodings(req)?;

        let mut content_list = Vec::new();
        for (resolved, encoding) in resolved_paths.into_iter().zip(encodings) {
            match Self::read_whole_file(&resolved, encoding).await {
                Ok(content) => content_list.push(FileContent {
                    file_path: resolved,
                    content,
                }),
                Err(err) if *req.skip_errors() => {
                    tracing::warn!(path = %resolved, error = %err, "skipping unreadable file");
                }
                Err(err) => return Err(err),
            }
        }

        Ok(ReadFilesResult { content_list })
    }
}
