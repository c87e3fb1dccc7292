//! Tests for `plugpack tasks`

use super::common::{plugpack_command, sample_project};
use tempfile::TempDir;

#[test]
fn test_tasks_in_order() {
    let temp = TempDir::new().unwrap();
    sample_project(temp.path());

    let output = plugpack_command()
        .args(["tasks", "debug"])
        .current_dir(temp.path())
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let tasks: Vec<&str> = stdout.lines().collect();
    assert_eq!(
        tasks,
        vec![
            ":sample-plugin:app:assembleDebug",
            ":sample-plugin:base:assembleDebug",
            ":sample-manager:assembleDebug",
            ":sample-loader:assembleDebug",
            ":sample-runtime:assembleDebug",
        ]
    );
}
