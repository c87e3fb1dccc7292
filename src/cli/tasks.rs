use super::resolve_project_root;
use plugpack::config::PackageExtension;
use plugpack::core::PackResult;
use plugpack::package::PackageAssembler;
use std::path::PathBuf;

pub fn run(project_dir: Option<PathBuf>, variant: String) -> PackResult<()> {
    let project_root = resolve_project_root(project_dir)?;
    let extension = PackageExtension::load(&project_root)?;
    let build_type = extension.variant(&variant)?;

    let assembler = PackageAssembler::new(&project_root, &extension);
    for task in assembler.required_tasks(build_type) {
        println!("{}", task);
    }

    Ok(())
}
