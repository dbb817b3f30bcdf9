use std::path::{Component, Path, PathBuf};

use crate::errors::{FileReadError, FileReadResult};

/// Expand a leading home directory (~) reference
pub fn expand_home(path: &str) -> String {
    if path.starts_with('~')
        && let Some(home) = dirs::home_dir()
    {
        return path.replacen('~', &home.to_string_lossy(), 1);
    }
    path.to_string()
}

/// Resolve a user-supplied path against a working directory into an
/// absolute, comparison-stable string.
///
/// Surrounding whitespace is trimmed and a leading `~` expanded before the
/// path is joined onto `working_directory` (absolute inputs are kept as-is).
/// `.`/`..` segments and repeated separators are collapsed, and every
/// separator is rewritten to `/` so resolved paths compare equal across
/// platforms. No filesystem access happens here; existence is checked by the
/// readers.
pub fn resolve_path(path: &str, working_directory: &str) -> FileReadResult<String> {
    let trimmed = path.trim();
    if trimmed.is_empty() {
        return Err(FileReadError::InvalidArgument {
            message: "File path must be a non-empty string".to_string(),
        });
    }

    let workdir = working_directory.trim();
    if workdir.is_empty() {
        return Err(FileReadError::InvalidArgument {
            message: "Working directory must be a non-empty string".to_string(),
        });
    }

    let expanded = expand_home(trimmed);
    let absolute = if Path::new(&expanded).is_absolute() {
        PathBuf::from(&expanded)
    } else {
        Path::new(&expand_home(workdir)).join(&expanded)
    };

    Ok(to_forward_slashes(&normalize_path(&absolute)))
}

/// Collapse `.` and `..` components without touching the filesystem
fn normalize_path(path: &Path) -> PathBuf {
    path.components()
        .fold(PathBuf::new(), |mut normalized, component| {
            match component {
                Component::ParentDir => {
                    normalized.pop();
                }
                Component::CurDir => {}
                _ => normalized.push(component),
            }
            normalized
        })
}

fn to_forward_slashes(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_home() {
        if let Some(home) = dirs::home_dir() {
            let home_str = home.to_string_lossy();
            assert_eq!(expand_home("~"), home_str);
            assert_eq!(expand_home("~/notes.txt"), format!("{}/notes.txt", home_str));
        }

        // Paths that don't start with a tilde pass through untouched
        assert_eq!(expand_home("/absolute/path"), "/absolute/path");
        assert_eq!(expand_home("relative/path"), "relative/path");
        assert_eq!(expand_home("/path/with/~inside"), "/path/with/~inside");
    }

    #[test]
    fn test_resolve_absolute_path_ignores_working_directory() {
        let resolved = resolve_path("/var/log/app.log", "/home/user").unwrap();
        assert_eq!(resolved, "/var/log/app.log");
    }

    #[test]
    fn test_resolve_relative_path_joins_working_directory() {
        let resolved = resolve_path("logs/app.log", "/home/user").unwrap();
        assert_eq!(resolved, "/home/user/logs/app.log");
    }

    #[test]
    fn test_resolve_trims_surrounding_whitespace() {
        let resolved = resolve_path("  notes.txt  ", "/home/user").unwrap();
        assert_eq!(resolved, "/home/user/notes.txt");
    }

    #[test]
    fn test_resolve_collapses_dot_segments() {
        let resolved = resolve_path("./a/b/../c/file.txt", "/base").unwrap();
        assert_eq!(resolved, "/base/a/c/file.txt");

        let resolved = resolve_path("/base/./x/../y", "/unused").unwrap();
        assert_eq!(resolved, "/base/y");
    }

    #[test]
    fn test_resolve_expands_home() {
        if let Some(home) = dirs::home_dir() {
            let resolved = resolve_path("~/notes.txt", "/anywhere").unwrap();
            assert_eq!(
                resolved,
                format!("{}/notes.txt", home.to_string_lossy()).replace('\\', "/")
            );
        }
    }

    #[test]
    fn test_resolve_rejects_blank_inputs() {
        assert!(matches!(
            resolve_path("", "/home/user"),
            Err(FileReadError::InvalidArgument { .. })
        ));
        assert!(matches!(
            resolve_path("   ", "/home/user"),
            Err(FileReadError::InvalidArgument { .. })
        ));
        assert!(matches!(
            resolve_path("file.txt", ""),
            Err(FileReadError::InvalidArgument { .. })
        ));
        assert!(matches!(
            resolve_path("file.txt", "   "),
            Err(FileReadError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn test_resolved_paths_are_comparison_stable() {
        let a = resolve_path("a/../b/file.txt", "/root").unwrap();
        let b = resolve_path("b/./file.txt", "/root/").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_normalize_path_keeps_root() {
        let normalized = normalize_path(Path::new("/../../etc/passwd"));
        assert_eq!(normalized, PathBuf::from("/etc/passwd"));
    }
}
