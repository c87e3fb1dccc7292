//! Plugpack: packages plugin, loader and runtime APKs into a distributable
//! zip with a `config.json` manifest.
//!
//! This crate provides the packaging pipeline, re-exporting the error type
//! and path helpers from `plugpack-core`.

pub use plugpack_core::{format_error_with_help, ErrorHelp, PackError, PackResult};

/// Core module re-exported from plugpack-core.
pub mod core {
    pub use plugpack_core::core::*;
}

/// Project configuration (`plugpack.yaml`).
pub mod config;

/// Locate, copy, fingerprint and archive artifacts.
pub mod package;
