//! Copies build outputs to stable locations.
//!
//! Release builds may wipe the build output directory, so every artifact is
//! copied somewhere that survives. When the fresh output is gone the previous
//! copy is kept as-is.

use crate::core::path::ensure_dir;
use crate::core::{PackError, PackResult};
use crate::package::locator::{CopyPlan, BUILD_FIRST_HINT};
use std::fs::{self, File};
use std::io;
use tracing::info;

/// Result of a copy step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyOutcome {
    /// The destination was replaced with the fresh source
    Updated,
    /// No fresh source; the previous copy was left untouched
    Kept,
}

pub struct ArtifactCopier;

impl ArtifactCopier {
    /// Copy `plan.source` over `plan.destination()`.
    ///
    /// Fails with `MissingArtifact` only when neither the source nor a
    /// previous copy exists.
    pub fn copy(plan: &CopyPlan) -> PackResult<CopyOutcome> {
        let destination = plan.destination();
        let source_exists = plan.source.is_file();

        if !source_exists && !destination.is_file() {
            return Err(PackError::MissingArtifact {
                role: plan.role.clone(),
                path: plan.source.clone(),
                hint: format!(
                    "no previous copy at {} either, {}",
                    destination.display(),
                    BUILD_FIRST_HINT
                ),
            });
        }

        ensure_dir(&plan.destination_dir)?;

        if !source_exists {
            info!(
                "No fresh {} output found, keeping previous copy {}",
                plan.role,
                destination.display()
            );
            return Ok(CopyOutcome::Kept);
        }

        if destination.exists() {
            if fs::canonicalize(&plan.source)? == fs::canonicalize(&destination)? {
                info!(
                    "{} output already at {}, nothing to copy",
                    plan.role,
                    destination.display()
                );
                return Ok(CopyOutcome::Kept);
            }
            fs::remove_file(&destination)?;
        }

        let mut reader = File::open(&plan.source)?;
        let mut writer = File::create(&destination)?;
        io::copy(&mut reader, &mut writer)?;
        writer.sync_all()?;

        info!(
            "Updated {} copy {} -> {}",
            plan.role,
            plan.source.display(),
            destination.display()
        );
        Ok(CopyOutcome::Updated)
    }
}
