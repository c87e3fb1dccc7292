//! Runs the packaging pipeline and writes the plugin zip.

use crate::config::{BuildVariant, PackageExtension};
use crate::core::path::{ensure_dir, manifest_path, MANIFEST_FILE_NAME};
use crate::core::{PackError, PackResult};
use crate::package::copier::ArtifactCopier;
use crate::package::locator::{ArtifactRole, CopyPlan, FileLocator};
use crate::package::manifest::{write_manifest, ManifestBuilder};
use std::collections::HashSet;
use std::fmt;
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use zip::write::FileOptions;
use zip::{CompressionMethod, DateTime, ZipWriter};

/// Pipeline stages, in the order they run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageStage {
    Init,
    ValidateConfig,
    CopyArtifacts,
    BuildManifest,
    AssembleZip,
    Done,
}

impl fmt::Display for PackageStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PackageStage::Init => "init",
            PackageStage::ValidateConfig => "validate-config",
            PackageStage::CopyArtifacts => "copy-artifacts",
            PackageStage::BuildManifest => "build-manifest",
            PackageStage::AssembleZip => "assemble-zip",
            PackageStage::Done => "done",
        };
        f.write_str(name)
    }
}

/// Packages the loader, runtime and plugin APKs of a variant into a zip
pub struct PackageAssembler<'a> {
    project_root: PathBuf,
    extension: &'a PackageExtension,
}

impl<'a> PackageAssembler<'a> {
    pub fn new(project_root: &Path, extension: &'a PackageExtension) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            extension,
        }
    }

    /// Path of the archive `assemble` writes for a variant
    pub fn archive_path(&self, variant: &BuildVariant) -> PathBuf {
        self.extension
            .destination_dir(&self.project_root)
            .join(self.extension.archive_name(&variant.name))
    }

    /// Path of the intermediate `config.json` for a variant
    pub fn manifest_path(&self, variant: &BuildVariant) -> PathBuf {
        manifest_path(&self.extension.build_dir(&self.project_root), &variant.name)
    }

    /// Tasks the build tool must finish before `assemble` runs, in order,
    /// without duplicates
    pub fn required_tasks(&self, variant: &BuildVariant) -> Vec<String> {
        let mut seen = HashSet::new();
        let plugin_tasks = variant.plugin_apks.iter().map(|p| p.build_task.as_str());
        let role_tasks = ArtifactRole::ALL
            .into_iter()
            .map(|role| role.config(variant))
            .filter(|config| config.is_configured())
            .map(|config| config.task.as_str());

        plugin_tasks
            .chain(role_tasks)
            .filter(|task| !task.is_empty())
            .filter(|task| seen.insert(*task))
            .map(str::to_string)
            .collect()
    }

    /// Assemble every configured variant, stopping at the first failure
    pub fn assemble_all(&self) -> PackResult<Vec<PathBuf>> {
        self.extension
            .build_types
            .iter()
            .map(|variant| self.assemble(variant))
            .collect()
    }

    /// Copy artifacts, write the manifest and zip the package.
    ///
    /// Never treated as up to date: every call redoes all stages and
    /// replaces the previous archive.
    pub fn assemble(&self, variant: &BuildVariant) -> PackResult<PathBuf> {
        enter(variant, PackageStage::Init);
        let locator = FileLocator::new(&self.project_root, self.extension);

        enter(variant, PackageStage::ValidateConfig);
        let plans = self.validate(&locator, variant)?;

        enter(variant, PackageStage::CopyArtifacts);
        for plan in &plans {
            ArtifactCopier::copy(plan)?;
        }

        enter(variant, PackageStage::BuildManifest);
        let manifest = ManifestBuilder::new(&self.project_root).build(
            variant,
            self.extension,
            &variant.loader_apk_config.name,
            &variant.runtime_apk_config.name,
        )?;
        let manifest_file = self.manifest_path(variant);
        write_manifest(&manifest, &manifest_file)?;
        info!("Wrote {}", manifest_file.display());

        enter(variant, PackageStage::AssembleZip);
        let mut members = Vec::with_capacity(variant.plugin_apks.len() + 3);
        for plugin in &variant.plugin_apks {
            let resolved = locator.locate_plugin(plugin, true)?;
            members.push((plugin.apk_name.clone(), resolved.path));
        }
        for role in [ArtifactRole::Runtime, ArtifactRole::Loader] {
            let resolved = locator.locate(role, variant, true)?;
            members.push((role.config(variant).name.clone(), resolved.path));
        }
        members.push((MANIFEST_FILE_NAME.to_string(), manifest_file));

        let archive_path = self.archive_path(variant);
        write_archive(&archive_path, &members)?;
        info!(
            "Packaged {} ({} entries)",
            archive_path.display(),
            members.len()
        );

        enter(variant, PackageStage::Done);
        Ok(archive_path)
    }

    /// Resolve every copy step up front so configuration errors surface
    /// before any file is touched.
    fn validate(
        &self,
        locator: &FileLocator<'_>,
        variant: &BuildVariant,
    ) -> PackResult<Vec<CopyPlan>> {
        let mut plans = Vec::with_capacity(variant.plugin_apks.len() + 3);
        for role in ArtifactRole::ALL {
            plans.push(locator.copy_plan(role, variant)?);
        }

        for (index, plugin) in variant.plugin_apks.iter().enumerate() {
            let role = format!("plugin #{}", index + 1);
            if plugin.apk_name.is_empty() {
                return Err(PackError::configuration(role, "apk_name is empty"));
            }
            if plugin.apk_path.is_empty() {
                return Err(PackError::configuration(
                    role,
                    format!("apk_path is empty for '{}'", plugin.apk_name),
                ));
            }
            plans.push(locator.plugin_copy_plan(plugin));
        }

        let mut names = HashSet::new();
        names.insert(MANIFEST_FILE_NAME);
        let archived = variant
            .plugin_apks
            .iter()
            .map(|p| p.apk_name.as_str())
            .chain([
                variant.runtime_apk_config.name.as_str(),
                variant.loader_apk_config.name.as_str(),
            ]);
        for name in archived {
            if !names.insert(name) {
                return Err(PackError::configuration(
                    variant.name.as_str(),
                    format!("'{}' appears more than once in the archive", name),
                ));
            }
        }

        Ok(plans)
    }
}

fn enter(variant: &BuildVariant, stage: PackageStage) {
    debug!("[{}] {}", variant.package_task_name(), stage);
}

/// Write a flat zip with fixed timestamps so identical inputs give
/// identical bytes
fn write_archive(archive_path: &Path, members: &[(String, PathBuf)]) -> PackResult<()> {
    if let Some(parent) = archive_path.parent() {
        ensure_dir(parent)?;
    }
    if archive_path.exists() {
        fs::remove_file(archive_path)?;
    }

    let options = FileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .last_modified_time(DateTime::default());

    let mut zip = ZipWriter::new(File::create(archive_path)?);
    for (name, path) in members {
        zip.start_file(name.as_str(), options)?;
        let mut input = File::open(path)?;
        io::copy(&mut input, &mut zip)?;
    }
    zip.finish()?;
    Ok(())
}
