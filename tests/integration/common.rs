//! Common utilities for integration tests

use assert_cmd::Command;
use std::fs;
use std::path::Path;

pub fn plugpack_command() -> Command {
    Command::new(env!("CARGO_BIN_EXE_plugpack"))
}

pub const CONFIG: &str = r#"
manager_apk_project_path: sample-manager
host_manager_apk_path: sample-host/src/main/assets
loader_apk_project_path: sample-loader
runtime_apk_project_path: sample-runtime
uuid: 00000000-0000-0000-0000-000000000001
version: 3
build_types:
  - name: debug
    manager_apk_config:
      name: manager.apk
      task: ":sample-manager:assembleDebug"
    loader_apk_config:
      name: loader.apk
      task: ":sample-loader:assembleDebug"
    runtime_apk_config:
      name: runtime.apk
      task: ":sample-runtime:assembleDebug"
    plugin_apks:
      - part_key: sample-plugin-app
        business_name: sample-plugin
        apk_name: sample-plugin-app.apk
        apk_path: sample-plugin/app/build/outputs/apk/debug/app-debug.apk
        copy_path: sample-plugin/app/build/outputs/copy
        build_task: ":sample-plugin:app:assembleDebug"
      - part_key: sample-base
        business_name: sample-plugin
        apk_name: sample-base.apk
        apk_path: sample-plugin/base/build/outputs/apk/debug/base-debug.apk
        copy_path: sample-plugin/base/build/outputs/copy
        build_task: ":sample-plugin:base:assembleDebug"
        host_white_list: [com.example.host.lib]
"#;

fn write(root: &Path, rel: &str, data: &[u8]) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, data).unwrap();
}

/// Write plugpack.yaml plus fresh build outputs for every role
pub fn sample_project(root: &Path) {
    fs::write(root.join("plugpack.yaml"), CONFIG).unwrap();
    write(root, "sample-manager/build/outputs/apk/debug/manager.apk", b"manager");
    write(root, "sample-loader/build/outputs/apk/debug/loader.apk", b"loader");
    write(root, "sample-runtime/build/outputs/apk/debug/runtime.apk", b"runtime");
    write(
        root,
        "sample-plugin/app/build/outputs/apk/debug/app-debug.apk",
        b"plugin app",
    );
    write(
        root,
        "sample-plugin/base/build/outputs/apk/debug/base-debug.apk",
        b"plugin base",
    );
}
