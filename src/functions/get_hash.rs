use std::{fs::OpenOptions, io::Read, path::Path};
use sha2::{Sha256, Digest};
use crate::structures::Error;

/// Opens a file and calculates it's SHA256 hash
pub(crate) fn get_hash(file_path: &Path) -> Result<String, Error> {
	let filesystem_failure = |source| Error::FilesystemFailure { path: file_path.to_path_buf(), source };
	let mut file = OpenOptions::new().read(true).open(file_path).map_err(filesystem_failure)?;
	let mut hasher = Sha256::new();
	let mut buffer = [0u8; 4096];
	loop {
		let read = file.read(&mut buffer).map_err(filesystem_failure)?;
		if read == 0 {
			break;
		}
		hasher.update(&buffer[..read]);
	}
	Ok(hex::encode_upper(hasher.finalize()))
}
