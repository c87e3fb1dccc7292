//! Core utilities shared by the Plugpack binary and library:
//! the error type, remediation hints and project path helpers.

pub mod core;

pub use self::core::error::{PackError, PackResult};
pub use self::core::error_help::{format_error_with_help, ErrorHelp};
