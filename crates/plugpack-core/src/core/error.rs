use std::path::PathBuf;
use thiserror::Error;

pub type PackResult<T> = Result<T, PackError>;

#[derive(Error, Debug)]
pub enum PackError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Zip error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("Path error: {0}")]
    Path(String),

    /// A required role is missing or malformed in the configuration.
    /// Raised before any file is touched.
    #[error("Configuration error ({role}): {message}")]
    Configuration { role: String, message: String },

    /// A located artifact was required to exist but does not.
    #[error("{} not found: {hint}", .path.display())]
    ArtifactNotFound { path: PathBuf, hint: String },

    /// Neither a fresh build output nor a previous copy exists for a role.
    #[error("{role} artifact missing: {} ({hint})", .path.display())]
    MissingArtifact {
        role: String,
        path: PathBuf,
        hint: String,
    },
}

impl PackError {
    pub fn configuration(role: impl Into<String>, message: impl Into<String>) -> Self {
        PackError::Configuration {
            role: role.into(),
            message: message.into(),
        }
    }

    /// Path the failure refers to, when it has one.
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            PackError::ArtifactNotFound { path, .. } | PackError::MissingArtifact { path, .. } => {
                Some(path.as_path())
            }
            _ => None,
        }
    }
}
