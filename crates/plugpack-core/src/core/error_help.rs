//! Remediation hints attached to errors for CLI output.

use crate::core::error::PackError;

/// Provides a short, actionable hint for an error
pub trait ErrorHelp {
    fn help(&self) -> Option<String>;
}

impl ErrorHelp for PackError {
    fn help(&self) -> Option<String> {
        match self {
            PackError::Configuration { role, .. } => Some(format!(
                "Set both the output name and the producing task for '{}' in plugpack.yaml",
                role
            )),
            PackError::ArtifactNotFound { hint, .. } => Some(hint.clone()),
            PackError::MissingArtifact { role, hint, .. } => {
                Some(format!("{} (nothing to package for {})", hint, role))
            }
            PackError::Yaml(_) => Some("Check the syntax of plugpack.yaml".to_string()),
            PackError::Path(_) => {
                Some("Run from inside a project that has a plugpack.yaml".to_string())
            }
            PackError::Io(_) | PackError::Json(_) | PackError::Zip(_) => None,
        }
    }
}

/// Format an error together with its help text
pub fn format_error_with_help(error: &PackError) -> String {
    let mut out = format!("Error: {}", error);
    if let Some(help) = error.help() {
        out.push_str(&format!("\n\n  help: {}", help));
    }
    out
}
