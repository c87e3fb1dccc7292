use crate::core::path::config_file;
use crate::core::{PackError, PackResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Project-level packaging configuration, read from `plugpack.yaml`.
///
/// Loaded once per run and passed by reference into the pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PackageExtension {
    /// Manager project, relative to the project root
    pub manager_apk_project_path: String,

    /// Host-side store that receives the manager copy, relative to the project root
    pub host_manager_apk_path: String,

    /// Loader project, relative to the project root
    pub loader_apk_project_path: String,

    /// Runtime project, relative to the project root
    pub runtime_apk_project_path: String,

    /// Archive name prefix (`<prefix>-<variant>.zip`), "plugin" when empty
    pub archive_prefix: String,

    /// Directory receiving the archive, `<projectRoot>/build` when empty
    pub destination_dir: String,

    /// Build output root for intermediates, relative to the project root
    pub build_dir: String,

    /// Manifest version, 1 when zero
    pub version: u64,

    /// Manifest UUID, a random one is generated when empty
    pub uuid: String,

    /// Manifest UUID nickname, "1.0" when empty
    pub uuid_nick_name: String,

    /// Host versions this package is compatible with
    pub compact_version: Vec<i64>,

    /// Build variants, in declaration order
    pub build_types: Vec<BuildVariant>,
}

/// A named build configuration such as `debug` or `release`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildVariant {
    pub name: String,
    pub manager_apk_config: ApkConfig,
    pub loader_apk_config: ApkConfig,
    pub runtime_apk_config: ApkConfig,
    pub plugin_apks: Vec<PluginApkConfig>,
}

/// Declared output name plus the task that produces it
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApkConfig {
    /// Output file name, e.g. `loader.apk`. Empty means unconfigured.
    pub name: String,

    /// Producing task identifier, e.g. `:sample-loader:assembleDebug`
    pub task: String,
}

/// One plugin APK
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PluginApkConfig {
    pub part_key: String,
    pub business_name: String,

    /// File name used for the copy and inside the archive
    pub apk_name: String,

    /// Build output, relative to the project root
    pub apk_path: String,

    /// Directory receiving the copy, relative to the project root
    pub copy_path: String,

    /// Task that must have run before the build output exists
    pub build_task: String,

    /// Part keys of plugins this one depends on
    pub depends_on: Vec<String>,

    /// Host packages the plugin may load classes from
    pub host_white_list: Vec<String>,
}

fn default_build_dir() -> String {
    "build".to_string()
}

const DEFAULT_ARCHIVE_PREFIX: &str = "plugin";

impl Default for PackageExtension {
    fn default() -> Self {
        Self {
            manager_apk_project_path: String::new(),
            host_manager_apk_path: String::new(),
            loader_apk_project_path: String::new(),
            runtime_apk_project_path: String::new(),
            archive_prefix: String::new(),
            destination_dir: String::new(),
            build_dir: default_build_dir(),
            version: 0,
            uuid: String::new(),
            uuid_nick_name: String::new(),
            compact_version: Vec::new(),
            build_types: Vec::new(),
        }
    }
}

impl ApkConfig {
    pub fn new(name: impl Into<String>, task: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            task: task.into(),
        }
    }

    pub fn is_configured(&self) -> bool {
        !self.name.is_empty()
    }
}

impl BuildVariant {
    /// Name of the config generation step, e.g. `generateDebugConfig`
    pub fn generate_task_name(&self) -> String {
        format!("generate{}Config", capitalize(&self.name))
    }

    /// Name of the packaging step, e.g. `packageDebugPlugin`
    pub fn package_task_name(&self) -> String {
        format!("package{}Plugin", capitalize(&self.name))
    }
}

impl PackageExtension {
    /// Load `plugpack.yaml` from the project root
    pub fn load(project_root: &Path) -> PackResult<Self> {
        let path = config_file(project_root);
        if !path.exists() {
            return Err(PackError::Path(format!("{} not found", path.display())));
        }

        let content = fs::read_to_string(&path)?;
        Self::from_yaml_str(&content)
    }

    pub fn from_yaml_str(content: &str) -> PackResult<Self> {
        let extension: PackageExtension = serde_yaml::from_str(content)?;
        Ok(extension)
    }

    /// Look up a variant by name
    pub fn variant(&self, name: &str) -> PackResult<&BuildVariant> {
        self.build_types
            .iter()
            .find(|v| v.name == name)
            .ok_or_else(|| {
                let known: Vec<&str> = self.build_types.iter().map(|v| v.name.as_str()).collect();
                PackError::configuration(
                    name,
                    format!("unknown build type (configured: {})", known.join(", ")),
                )
            })
    }

    pub fn archive_prefix(&self) -> &str {
        if self.archive_prefix.is_empty() {
            DEFAULT_ARCHIVE_PREFIX
        } else {
            &self.archive_prefix
        }
    }

    /// Directory receiving the archive
    pub fn destination_dir(&self, project_root: &Path) -> PathBuf {
        if self.destination_dir.is_empty() {
            project_root.join("build")
        } else {
            project_root.join(&self.destination_dir)
        }
    }

    pub fn build_dir(&self, project_root: &Path) -> PathBuf {
        project_root.join(&self.build_dir)
    }

    /// `<prefix>-<variant>.zip`
    pub fn archive_name(&self, variant: &str) -> String {
        format!("{}-{}.zip", self.archive_prefix(), variant)
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
