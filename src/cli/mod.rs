pub mod hash;
pub mod list;
pub mod package;
pub mod tasks;

use plugpack::core::path::find_project_root;
use plugpack::core::{PackError, PackResult};
use std::env;
use std::path::PathBuf;

/// Use `--project-dir` as given, otherwise search upward from the current directory
pub fn resolve_project_root(project_dir: Option<PathBuf>) -> PackResult<PathBuf> {
    match project_dir {
        Some(dir) => Ok(dir),
        None => {
            let current_dir = env::current_dir().map_err(|e| {
                PackError::Path(format!("Failed to get current directory: {}", e))
            })?;
            find_project_root(&current_dir)
        }
    }
}
