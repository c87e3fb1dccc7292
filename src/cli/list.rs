use super::resolve_project_root;
use plugpack::config::{BuildVariant, PackageExtension};
use plugpack::core::PackResult;
use plugpack::package::ArtifactRole;
use std::path::PathBuf;

pub fn run(project_dir: Option<PathBuf>) -> PackResult<()> {
    let project_root = resolve_project_root(project_dir)?;
    let extension = PackageExtension::load(&project_root)?;

    if extension.build_types.is_empty() {
        println!("No build types configured");
        return Ok(());
    }

    for variant in &extension.build_types {
        print!("{}", describe(variant, &extension));
    }

    Ok(())
}

fn describe(variant: &BuildVariant, extension: &PackageExtension) -> String {
    let mut out = format!(
        "{} -> {}\n",
        variant.name,
        extension.archive_name(&variant.name)
    );
    for role in ArtifactRole::ALL {
        let config = role.config(variant);
        let name = if config.is_configured() {
            config.name.as_str()
        } else {
            "(not configured)"
        };
        out.push_str(&format!("  {:<8} {}\n", role.label(), name));
    }
    for plugin in &variant.plugin_apks {
        out.push_str(&format!("  {:<8} {}\n", "plugin", plugin.apk_name));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use plugpack::config::{ApkConfig, PluginApkConfig};

    #[test]
    fn test_describe_variant() {
        let extension = PackageExtension::default();
        let variant = BuildVariant {
            name: "debug".to_string(),
            manager_apk_config: ApkConfig::new("manager.apk", ":manager:assembleDebug"),
            loader_apk_config: ApkConfig::new("loader.apk", ":loader:assembleDebug"),
            runtime_apk_config: ApkConfig::default(),
            plugin_apks: vec![PluginApkConfig {
                apk_name: "demo.apk".to_string(),
                ..Default::default()
            }],
        };

        let out = describe(&variant, &extension);
        assert!(out.starts_with("debug -> plugin-debug.zip\n"));
        assert!(out.contains("loader   loader.apk"));
        assert!(out.contains("runtime  (not configured)"));
        assert!(out.contains("plugin   demo.apk"));
    }
}
