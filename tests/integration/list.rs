//! Tests for `plugpack list`

use super::common::{plugpack_command, sample_project};
use predicates::prelude::*;
use tempfile::TempDir;

#[test]
fn test_list_build_types() {
    let temp = TempDir::new().unwrap();
    sample_project(temp.path());

    plugpack_command()
        .arg("list")
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("debug -> plugin-debug.zip"))
        .stdout(predicate::str::contains("sample-base.apk"));
}
