//! Integration tests for the plugpack CLI.

mod common;
mod hash;
mod list;
mod package;
mod tasks;
