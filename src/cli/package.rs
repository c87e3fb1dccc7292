use super::resolve_project_root;
use plugpack::config::PackageExtension;
use plugpack::core::{PackError, PackResult};
use plugpack::package::PackageAssembler;
use std::path::PathBuf;

pub fn run(project_dir: Option<PathBuf>, variant: Option<String>, all: bool) -> PackResult<()> {
    let project_root = resolve_project_root(project_dir)?;
    let extension = PackageExtension::load(&project_root)?;
    let assembler = PackageAssembler::new(&project_root, &extension);

    if all {
        if extension.build_types.is_empty() {
            println!("No build types configured");
            return Ok(());
        }
        eprintln!(
            "Packaging {} build type(s)...",
            extension.build_types.len()
        );
        let archives = assembler.assemble_all()?;
        for archive in &archives {
            println!("✓ Packaged: {}", archive.display());
        }
        return Ok(());
    }

    let name = variant.ok_or_else(|| {
        PackError::configuration(
            "package",
            "no build type given; pass a name (e.g. `plugpack package debug`) or --all",
        )
    })?;
    let build_type = extension.variant(&name)?;

    eprintln!("Packaging {}...", build_type.name);
    let archive = assembler.assemble(build_type)?;
    println!("✓ Packaged: {}", archive.display());
    println!("  Manifest: {}", assembler.manifest_path(build_type).display());

    Ok(())
}
