use std::fmt;

use encoding_rs::{Encoding, UTF_8};

use crate::errors::{FileReadError, FileReadResult};

/// A resolved text encoding for one read call
///
/// Models the per-call encoding choice as an explicit type instead of
/// passing raw labels around: resolution happens once, at the edge, and the
/// readers only see a value that is known to decode.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct FileEncoding(&'static Encoding);

impl FileEncoding {
    /// Resolve an optional encoding label
    ///
    /// Absent or blank labels resolve to UTF-8; a label `encoding_rs` does
    /// not recognize is `InvalidArgument`.
    pub fn resolve(label: Option<&str>) -> FileReadResult<Self> {
        match label.map(str::trim) {
            None | Some("") => Ok(Self(UTF_8)),
            Some(label) => Encoding::for_label(label.as_bytes()).map(Self).ok_or_else(|| {
                FileReadError::InvalidArgument {
                    message: format!("Unknown file encoding '{label}'"),
                }
            }),
        }
    }

    /// Canonical name of the underlying encoding
    pub fn name(&self) -> &'static str {
        self.0.name()
    }

    /// Strictly decode a complete byte buffer
    ///
    /// Malformed input is a `DecodeError`, never a replacement character.
    pub fn decode(&self, bytes: &[u8], path: &str) -> FileReadResult<String> {
        self.0
            .decode_without_bom_handling_and_without_replacement(bytes)
            .map(|decoded| decoded.into_owned())
            .ok_or_else(|| FileReadError::DecodeError {
                path: path.to_string(),
                encoding: self.name().to_string(),
            })
    }
}

impl Default for FileEncoding {
    fn default() -> Self {
        Self(UTF_8)
    }
}

impl fmt::Debug for FileEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("FileEncoding").field(&self.name()).finish()
    }
}
