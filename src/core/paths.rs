// src/core/paths.rs

use crate::constants::{OUTPUT_EXTENSION, OUTPUT_PREFIX};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PathError {
    #[error("Project root '{path}' could not be resolved: {source}")]
    ProjectRoot {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Project root '{0}' is not a directory.")]
    NotADirectory(String),
}

/// Resolves the project root given on the command line into an absolute path
/// without the Windows `\\?\` prefix.
pub fn resolve_project_root(path: &Path) -> Result<PathBuf, PathError> {
    let canonical = dunce::canonicalize(path).map_err(|e| PathError::ProjectRoot {
        path: path.display().to_string(),
        source: e,
    })?;
    if !canonical.is_dir() {
        return Err(PathError::NotADirectory(canonical.display().to_string()));
    }
    Ok(canonical)
}

/// Identifies the host platform in output file names: `posix` on Unix, `nt` on
/// Windows, the OS family anywhere else.
pub fn platform_identifier() -> &'static str {
    if cfg!(unix) {
        "posix"
    } else if cfg!(windows) {
        "nt"
    } else {
        std::env::consts::FAMILY
    }
}

/// Returns `<project_root>/<assets_dir>/timings_<name>_<platform>.svg`.
pub fn output_path(project_root: &Path, assets_dir: &str, name: &str) -> PathBuf {
    project_root.join(assets_dir).join(format!(
        "{}_{}_{}.{}",
        OUTPUT_PREFIX,
        name,
        platform_identifier(),
        OUTPUT_EXTENSION
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_output_path_layout() {
        let path = output_path(Path::new("/work/lexical"), "assets", "timings_nodefault");
        let expected = format!("timings_timings_nodefault_{}.svg", platform_identifier());
        assert_eq!(path, Path::new("/work/lexical").join("assets").join(expected));
    }

    #[cfg(unix)]
    #[test]
    fn test_output_path_uses_posix_on_unix() {
        let path = output_path(Path::new("/work/lexical"), "assets", "timings");
        assert_eq!(platform_identifier(), "posix");
        assert_eq!(
            path,
            Path::new("/work/lexical/assets/timings_timings_posix.svg")
        );
    }

    #[cfg(windows)]
    #[test]
    fn test_output_path_uses_nt_on_windows() {
        let path = output_path(Path::new(r"C:\work\lexical"), "assets", "timings");
        assert_eq!(platform_identifier(), "nt");
        assert!(path.ends_with("timings_timings_nt.svg"));
    }

    #[test]
    fn test_resolve_project_root_existing_dir() {
        let dir = TempDir::new().unwrap();
        let resolved = resolve_project_root(dir.path()).unwrap();
        assert!(resolved.is_absolute());
        assert!(resolved.is_dir());
    }

    #[test]
    fn test_resolve_project_root_missing_dir() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("does-not-exist");
        assert!(matches!(
            resolve_project_root(&missing),
            Err(PathError::ProjectRoot { .. })
        ));
    }

    #[test]
    fn test_resolve_project_root_rejects_files() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("Cargo.toml");
        std::fs::write(&file, "").unwrap();
        assert!(matches!(
            resolve_project_root(&file),
            Err(PathError::NotADirectory(_))
        ));
    }
}
