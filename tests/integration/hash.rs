//! Tests for `plugpack hash`

use super::common::plugpack_command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_hash_file() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("hello.apk");
    fs::write(&file, b"hello").unwrap();

    plugpack_command()
        .arg("hash")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("5D41402ABC4B2A76B9719D911017C592"));
}

#[test]
fn test_hash_missing_file_is_not_an_error() {
    let temp = TempDir::new().unwrap();

    plugpack_command()
        .arg("hash")
        .arg(temp.path().join("missing.apk"))
        .assert()
        .success()
        .stderr(predicate::str::contains("No fingerprint available"));
}
