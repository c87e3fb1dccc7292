pub mod assembler;
pub mod checksum;
pub mod copier;
pub mod locator;
pub mod manifest;

pub use assembler::{PackageAssembler, PackageStage};
pub use checksum::ContentHasher;
pub use copier::{ArtifactCopier, CopyOutcome};
pub use locator::{ArtifactRole, CopyPlan, FileLocator, ResolvedArtifact};
pub use manifest::{ManifestBuilder, PluginManifest};
