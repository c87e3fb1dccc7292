use plugpack::core::PackResult;
use plugpack::package::ContentHasher;
use std::path::PathBuf;

pub fn run(file: PathBuf) -> PackResult<()> {
    match ContentHasher::hash(&file) {
        Some(digest) => println!("{}  {}", digest, file.display()),
        None => eprintln!("No fingerprint available for {}", file.display()),
    }
    Ok(())
}
