use crate::core::error::{PackError, PackResult};
use std::path::{Path, PathBuf};

/// Name of the project configuration file
pub const CONFIG_FILE_NAME: &str = "plugpack.yaml";

/// Name of the manifest written next to the packaged artifacts
pub const MANIFEST_FILE_NAME: &str = "config.json";

/// Get the config file path for a project
pub fn config_file(project_root: &Path) -> PathBuf {
    project_root.join(CONFIG_FILE_NAME)
}

/// Get the intermediate manifest path for a variant
/// (`<buildDir>/intermediates/generatePluginConfig/<variant>/config.json`)
pub fn manifest_path(build_dir: &Path, variant: &str) -> PathBuf {
    build_dir
        .join("intermediates")
        .join("generatePluginConfig")
        .join(variant)
        .join(MANIFEST_FILE_NAME)
}

/// Find the project root by looking for plugpack.yaml
///
/// Walks up from `start` until a directory containing the config file is found.
pub fn find_project_root(start: &Path) -> PackResult<PathBuf> {
    let mut current = start.to_path_buf();

    loop {
        if config_file(&current).exists() {
            return Ok(current);
        }

        match current.parent() {
            Some(parent) => current = parent.to_path_buf(),
            None => {
                return Err(PackError::Path(format!(
                    "Could not find {} in {} or any parent directory",
                    CONFIG_FILE_NAME,
                    start.display()
                )));
            }
        }
    }
}

/// Ensure a directory exists, creating it (and its parents) if needed
pub fn ensure_dir(path: &Path) -> PackResult<()> {
    if !path.exists() {
        std::fs::create_dir_all(path)?;
    }
    Ok(())
}
