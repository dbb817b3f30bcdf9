/// Hard cap on the bytes a single call may return: cumulative bytes of the
/// selected lines in a window read, and each individual file's size in a
/// batch read.
pub const MAX_CONTENT_BYTES: u64 = 10 * 1024 * 1024;

/// Ceiling on the number of lines a single window may request
pub const MAX_WINDOW_LINES: i64 = 10_000;

/// Lines returned by `read_lines` when the caller does not ask for a count
pub const DEFAULT_WINDOW_LINES: i64 = 200;
