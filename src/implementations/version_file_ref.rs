use std::path::Path;
use tracing::debug;

use crate::functions::get_hash;
use crate::structures::{Error, VersionFileRef};

impl VersionFileRef {
  /// Checks a downloaded artifact against the size and SHA256 hash listed in the manifest.
  pub fn verify_file(&self, path: &Path) -> Result<bool, Error> {
    let metadata = std::fs::metadata(path).map_err(|source| Error::FilesystemFailure { path: path.to_path_buf(), source })?;
    if metadata.len() != self.size_bytes {
      debug!("Size of {:?} is {} bytes, expected {}", path, metadata.len(), self.size_bytes);
      return Ok(false);
    }
    let hash = get_hash(path)?;
    if !hash.eq_ignore_ascii_case(&self.checksum) {
      debug!("Hash of {:?} is {}, expected {}", path, hash, self.checksum);
      return Ok(false);
    }
    Ok(true)
  }
}
