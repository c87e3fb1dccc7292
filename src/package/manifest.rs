//! `config.json` describing a plugin package.
//!
//! The field names are read by the runtime loader when it installs the
//! package, so they must not change.

use crate::config::{BuildVariant, PackageExtension};
use crate::core::path::ensure_dir;
use crate::core::PackResult;
use crate::package::checksum::ContentHasher;
use crate::package::locator::{ArtifactRole, FileLocator};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

const DEFAULT_VERSION: u64 = 1;
const DEFAULT_UUID_NICK_NAME: &str = "1.0";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginManifest {
    #[serde(rename = "pluginLoader")]
    pub plugin_loader: ArtifactEntry,

    pub runtime: ArtifactEntry,

    pub plugins: Vec<PluginEntry>,

    pub version: u64,

    #[serde(rename = "UUID")]
    pub uuid: String,

    #[serde(rename = "UUID_NickName")]
    pub uuid_nick_name: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub compact_version: Vec<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtifactEntry {
    pub apk_name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hash: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PluginEntry {
    pub business_name: String,
    pub part_key: String,
    pub apk_name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hash: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub depends_on: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub host_white_list: Vec<String>,
}

impl PluginManifest {
    /// Every artifact file name the manifest references, loader first
    pub fn apk_names(&self) -> Vec<&str> {
        let mut names = vec![
            self.plugin_loader.apk_name.as_str(),
            self.runtime.apk_name.as_str(),
        ];
        names.extend(self.plugins.iter().map(|p| p.apk_name.as_str()));
        names
    }
}

/// Builds the manifest from resolved artifacts
pub struct ManifestBuilder {
    project_root: PathBuf,
}

impl ManifestBuilder {
    pub fn new(project_root: &Path) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
        }
    }

    /// Describe the package for `variant`.
    ///
    /// Hashes the stable copies, which must exist by now.
    pub fn build(
        &self,
        variant: &BuildVariant,
        extension: &PackageExtension,
        loader_apk_name: &str,
        runtime_apk_name: &str,
    ) -> PackResult<PluginManifest> {
        let locator = FileLocator::new(&self.project_root, extension);

        let loader = locator.locate(ArtifactRole::Loader, variant, true)?;
        let plugin_loader = ArtifactEntry {
            apk_name: loader_apk_name.to_string(),
            hash: ContentHasher::hash(&loader.path),
        };

        let runtime_file = locator.locate(ArtifactRole::Runtime, variant, true)?;
        let runtime = ArtifactEntry {
            apk_name: runtime_apk_name.to_string(),
            hash: ContentHasher::hash(&runtime_file.path),
        };

        let mut plugins = Vec::with_capacity(variant.plugin_apks.len());
        for plugin in &variant.plugin_apks {
            let resolved = locator.locate_plugin(plugin, true)?;
            plugins.push(PluginEntry {
                business_name: plugin.business_name.clone(),
                part_key: plugin.part_key.clone(),
                apk_name: plugin.apk_name.clone(),
                hash: ContentHasher::hash(&resolved.path),
                depends_on: plugin.depends_on.clone(),
                host_white_list: plugin.host_white_list.clone(),
            });
        }

        let version = if extension.version > 0 {
            extension.version
        } else {
            DEFAULT_VERSION
        };

        let uuid = if extension.uuid.is_empty() {
            let generated = uuid::Uuid::new_v4().to_string().to_uppercase();
            debug!("No UUID configured, generated {}", generated);
            generated
        } else {
            extension.uuid.clone()
        };

        let uuid_nick_name = if extension.uuid_nick_name.is_empty() {
            DEFAULT_UUID_NICK_NAME.to_string()
        } else {
            extension.uuid_nick_name.clone()
        };

        Ok(PluginManifest {
            plugin_loader,
            runtime,
            plugins,
            version,
            uuid,
            uuid_nick_name,
            compact_version: extension.compact_version.clone(),
        })
    }
}

/// Write the manifest as one line of JSON followed by a newline
pub fn write_manifest(manifest: &PluginManifest, path: &Path) -> PackResult<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }

    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer(&mut writer, manifest)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}
