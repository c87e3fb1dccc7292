//! Tests for `plugpack package`

use super::common::{plugpack_command, sample_project};
use predicates::prelude::*;
use std::fs::{self, File};
use std::io::Read;
use tempfile::TempDir;
use zip::ZipArchive;

#[test]
fn test_package_debug() {
    let temp = TempDir::new().unwrap();
    let project_root = temp.path();
    sample_project(project_root);

    plugpack_command()
        .args(["package", "debug"])
        .current_dir(project_root)
        .assert()
        .success()
        .stdout(predicate::str::contains("plugin-debug.zip"));

    let archive_path = project_root.join("build/plugin-debug.zip");
    let mut archive = ZipArchive::new(File::open(&archive_path).unwrap()).unwrap();
    let mut names: Vec<String> = archive.file_names().map(str::to_string).collect();
    names.sort();
    assert_eq!(
        names,
        vec![
            "config.json",
            "loader.apk",
            "runtime.apk",
            "sample-base.apk",
            "sample-plugin-app.apk",
        ]
    );

    let mut config = String::new();
    archive
        .by_name("config.json")
        .unwrap()
        .read_to_string(&mut config)
        .unwrap();
    let json: serde_json::Value = serde_json::from_str(&config).unwrap();
    assert_eq!(json["version"], 3);
    assert_eq!(json["UUID"], "00000000-0000-0000-0000-000000000001");
    assert_eq!(json["plugins"][1]["hostWhiteList"][0], "com.example.host.lib");

    // Manager goes to the host-side store only
    assert!(project_root
        .join("sample-host/src/main/assets/sample-manager/debug/manager.apk")
        .exists());
    assert!(project_root
        .join("build/intermediates/generatePluginConfig/debug/config.json")
        .exists());
}

#[test]
fn test_package_from_subdirectory() {
    let temp = TempDir::new().unwrap();
    sample_project(temp.path());
    let nested = temp.path().join("sample-loader");

    plugpack_command()
        .args(["package", "debug"])
        .current_dir(&nested)
        .assert()
        .success();

    assert!(temp.path().join("build/plugin-debug.zip").exists());
}

#[test]
fn test_package_all() {
    let temp = TempDir::new().unwrap();
    sample_project(temp.path());

    plugpack_command()
        .args(["package", "--all"])
        .current_dir(temp.path())
        .assert()
        .success();

    assert!(temp.path().join("build/plugin-debug.zip").exists());
}

#[test]
fn test_package_twice_is_identical() {
    let temp = TempDir::new().unwrap();
    sample_project(temp.path());
    let archive_path = temp.path().join("build/plugin-debug.zip");

    plugpack_command()
        .args(["package", "debug"])
        .current_dir(temp.path())
        .assert()
        .success();
    let first = fs::read(&archive_path).unwrap();

    plugpack_command()
        .args(["package", "debug"])
        .current_dir(temp.path())
        .assert()
        .success();
    let second = fs::read(&archive_path).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_package_unknown_variant() {
    let temp = TempDir::new().unwrap();
    sample_project(temp.path());

    plugpack_command()
        .args(["package", "release"])
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown build type"));
}

#[test]
fn test_package_missing_plugin_output() {
    let temp = TempDir::new().unwrap();
    sample_project(temp.path());
    fs::remove_file(
        temp.path()
            .join("sample-plugin/base/build/outputs/apk/debug/base-debug.apk"),
    )
    .unwrap();

    plugpack_command()
        .args(["package", "debug"])
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("base-debug.apk"))
        .stderr(predicate::str::contains("build the plugin first"));

    assert!(!temp.path().join("build/plugin-debug.zip").exists());
}

#[test]
fn test_package_without_config() {
    let temp = TempDir::new().unwrap();

    plugpack_command()
        .args(["--project-dir"])
        .arg(temp.path())
        .args(["package", "debug"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("plugpack.yaml"));
}

#[test]
fn test_project_dir_does_not_search_parents() {
    let temp = TempDir::new().unwrap();
    sample_project(temp.path());
    let nested = temp.path().join("sample-plugin-app");
    fs::create_dir_all(&nested).unwrap();

    plugpack_command()
        .args(["--project-dir"])
        .arg(&nested)
        .args(["package", "debug"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("plugpack.yaml"));

    assert!(!temp.path().join("build/plugin-debug.zip").exists());
}

#[test]
fn test_package_requires_variant_or_all() {
    let temp = TempDir::new().unwrap();
    sample_project(temp.path());

    plugpack_command()
        .arg("package")
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("--all"));
}
