//! MD5 fingerprints for packaged artifacts.

use md5::{Digest, Md5};
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;
use tracing::warn;

const CHUNK_SIZE: usize = 1024;

/// Fingerprints packaged artifacts
pub struct ContentHasher;

impl ContentHasher {
    /// Uppercase hex MD5 of a regular file.
    ///
    /// Returns `None` when the path is not a regular file or cannot be read;
    /// a missing fingerprint never aborts packaging.
    pub fn hash(path: &Path) -> Option<String> {
        if !path.is_file() {
            return None;
        }

        match Self::md5_file(path) {
            Ok(digest) => Some(digest),
            Err(e) => {
                warn!("Failed to hash {}: {}", path.display(), e);
                None
            }
        }
    }

    fn md5_file(path: &Path) -> io::Result<String> {
        let mut file = File::open(path)?;
        let mut hasher = Md5::new();
        let mut buffer = [0u8; CHUNK_SIZE];

        loop {
            let len = file.read(&mut buffer)?;
            if len == 0 {
                break;
            }
            hasher.update(&buffer[..len]);
        }

        Ok(hex::encode_upper(hasher.finalize()))
    }
}
