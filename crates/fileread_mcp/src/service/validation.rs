use crate::errors::FileReadResult;

/// Request-level validation, run before any path resolution or I/O
pub trait Validate {
    fn validate(&self) -> FileReadResult<()>;
}
