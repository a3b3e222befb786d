//! File pattern resolution using glob

use crate::error::CliError;
use anyhow::{Context, Result};
use glob::glob;
use std::path::PathBuf;

/// Resolve file patterns to actual file paths, sorted and deduplicated
pub fn resolve_patterns(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for pattern in patterns {
        let paths = glob(pattern).map_err(|_| CliError::InvalidPattern(pattern.clone()))?;

        for path_result in paths {
            let path =
                path_result.with_context(|| format!("Error resolving pattern: {pattern}"))?;

            if path.is_file() {
                files.push(path);
            }
        }
    }

    if files.is_empty() {
        return Err(CliError::NoInput.into());
    }

    files.sort();
    files.dedup();

    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_resolve_glob_sorted_and_deduplicated() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("b.txt"), "b").unwrap();
        fs::write(temp_dir.path().join("a.txt"), "a").unwrap();
        fs::create_dir(temp_dir.path().join("dir.txt")).unwrap();

        let pattern = format!("{}/*.txt", temp_dir.path().display());
        let files = resolve_patterns(&[pattern.clone(), pattern]).unwrap();

        assert_eq!(files.len(), 2);
        assert!(files[0].ends_with("a.txt"));
        assert!(files[1].ends_with("b.txt"));
    }

    #[test]
    fn test_no_matches() {
        let err = resolve_patterns(&["/nonexistent/*.txt".to_string()]).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::NoInput)
        ));
    }

    #[test]
    fn test_invalid_pattern() {
        let err = resolve_patterns(&["[invalid".to_string()]).unwrap_err();
        assert!(err.to_string().contains("Invalid file pattern"));
    }
}
