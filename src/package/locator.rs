//! Resolves where each role's artifact is built and where its stable copy lives.

use crate::config::{ApkConfig, BuildVariant, PackageExtension, PluginApkConfig};
use crate::core::{PackError, PackResult};
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Remediation hint attached to missing-artifact errors
pub const BUILD_FIRST_HINT: &str = "build the plugin first";

const ASSEMBLE_PREFIX: &str = "assemble";

/// Artifact roles that come from a dedicated project
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactRole {
    Manager,
    Loader,
    Runtime,
}

impl ArtifactRole {
    /// Copy order used by the pipeline
    pub const ALL: [ArtifactRole; 3] = [
        ArtifactRole::Manager,
        ArtifactRole::Loader,
        ArtifactRole::Runtime,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ArtifactRole::Manager => "manager",
            ArtifactRole::Loader => "loader",
            ArtifactRole::Runtime => "runtime",
        }
    }

    pub fn config<'v>(&self, variant: &'v BuildVariant) -> &'v ApkConfig {
        match self {
            ArtifactRole::Manager => &variant.manager_apk_config,
            ArtifactRole::Loader => &variant.loader_apk_config,
            ArtifactRole::Runtime => &variant.runtime_apk_config,
        }
    }

    pub fn project_path<'e>(&self, extension: &'e PackageExtension) -> &'e str {
        match self {
            ArtifactRole::Manager => &extension.manager_apk_project_path,
            ArtifactRole::Loader => &extension.loader_apk_project_path,
            ArtifactRole::Runtime => &extension.runtime_apk_project_path,
        }
    }
}

impl fmt::Display for ArtifactRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A located artifact path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedArtifact {
    pub path: PathBuf,
    pub exists: bool,
}

/// Where an artifact is copied from and to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyPlan {
    /// Role label used in logs and errors (`loader`, `plugin demo.apk`, ...)
    pub role: String,
    /// Fresh build output; may be absent
    pub source: PathBuf,
    pub destination_dir: PathBuf,
    pub file_name: String,
}

impl CopyPlan {
    pub fn destination(&self) -> PathBuf {
        self.destination_dir.join(&self.file_name)
    }
}

/// Derive the build output sub-directory from a producing task identifier.
///
/// Takes the last `:` segment, drops a leading `assemble` (any case) and
/// lower-cases the rest: `:app:assembleQaRelease` becomes `qarelease`.
pub fn derive_output_subdir(task: &str) -> Option<String> {
    let last = task.rsplit(':').next()?;
    let stripped = match last.get(..ASSEMBLE_PREFIX.len()) {
        Some(head) if head.eq_ignore_ascii_case(ASSEMBLE_PREFIX) => &last[ASSEMBLE_PREFIX.len()..],
        _ => last,
    };

    if stripped.is_empty() {
        None
    } else {
        Some(stripped.to_lowercase())
    }
}

/// Module segment of a task identifier (`:sample-manager:assembleDebug` -> `sample-manager`)
pub fn module_name(task: &str) -> Option<&str> {
    task.split(':').nth(1).filter(|s| !s.is_empty())
}

/// Computes artifact paths for one project
pub struct FileLocator<'a> {
    project_root: PathBuf,
    extension: &'a PackageExtension,
}

impl<'a> FileLocator<'a> {
    pub fn new(project_root: &Path, extension: &'a PackageExtension) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            extension,
        }
    }

    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Locate the stable copy of a role's artifact.
    ///
    /// With `check_existence`, a missing file is an `ArtifactNotFound` error.
    pub fn locate(
        &self,
        role: ArtifactRole,
        variant: &BuildVariant,
        check_existence: bool,
    ) -> PackResult<ResolvedArtifact> {
        let plan = self.copy_plan(role, variant)?;
        let path = plan.destination();
        debug!("{} file path = {}", role, path.display());
        resolve(path, check_existence)
    }

    /// Locate the stable copy of a plugin APK
    pub fn locate_plugin(
        &self,
        plugin: &PluginApkConfig,
        check_existence: bool,
    ) -> PackResult<ResolvedArtifact> {
        let path = self.plugin_copy_plan(plugin).destination();
        debug!("plugin file path = {}", path.display());
        resolve(path, check_existence)
    }

    /// Source and destination of a role's copy step
    pub fn copy_plan(&self, role: ArtifactRole, variant: &BuildVariant) -> PackResult<CopyPlan> {
        let config = role.config(variant);
        if !config.is_configured() {
            return Err(PackError::configuration(
                role.label(),
                "declared output name is empty",
            ));
        }
        if config.task.is_empty() {
            return Err(PackError::configuration(
                role.label(),
                format!("no producing task configured for '{}'", config.name),
            ));
        }

        let subdir = derive_output_subdir(&config.task).ok_or_else(|| {
            PackError::configuration(
                role.label(),
                format!("cannot derive output directory from task '{}'", config.task),
            )
        })?;

        let project = self.project_root.join(role.project_path(self.extension));
        let source = project
            .join("build")
            .join("outputs")
            .join("apk")
            .join(&subdir)
            .join(&config.name);

        let destination_dir = match role {
            ArtifactRole::Manager => {
                let module = module_name(&config.task).ok_or_else(|| {
                    PackError::configuration(
                        role.label(),
                        format!("task '{}' has no module segment", config.task),
                    )
                })?;
                self.project_root
                    .join(&self.extension.host_manager_apk_path)
                    .join(module)
                    .join(&subdir)
            }
            ArtifactRole::Loader | ArtifactRole::Runtime => {
                project.join("build").join("outputs").join(&subdir)
            }
        };

        Ok(CopyPlan {
            role: role.label().to_string(),
            source,
            destination_dir,
            file_name: config.name.clone(),
        })
    }

    /// Source and destination of a plugin's copy step
    pub fn plugin_copy_plan(&self, plugin: &PluginApkConfig) -> CopyPlan {
        CopyPlan {
            role: format!("plugin {}", plugin.apk_name),
            source: self.project_root.join(&plugin.apk_path),
            destination_dir: self.project_root.join(&plugin.copy_path),
            file_name: plugin.apk_name.clone(),
        }
    }
}

fn resolve(path: PathBuf, check_existence: bool) -> PackResult<ResolvedArtifact> {
    let exists = path.exists();
    if check_existence && !exists {
        return Err(PackError::ArtifactNotFound {
            path,
            hint: BUILD_FIRST_HINT.to_string(),
        });
    }
    Ok(ResolvedArtifact { path, exists })
}
