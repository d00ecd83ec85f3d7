use std::path::{Path, PathBuf};
use tracing::{debug, trace};

use crate::structures::Error;

/// Directory names that are never descended into, at any depth
pub const EXCLUDED_DIRECTORIES: [&str; 6] = ["node_modules", ".git", "dist", "build", "wailsjs", ".react-router"];

/// Recursively lists every file below `root`, relative to `root`.
///
/// Children of a directory are visited in file name order, subdirectories are expanded in place.
/// Anything that isn't a directory, including symlinks, is listed without being followed.
pub fn scan_directory(root: &Path) -> Result<Vec<PathBuf>, Error> {
  let mut files = Vec::new();
  read_dir(root, Path::new(""), &mut files)?;
  debug!("Found {} files in {:?}", files.len(), root);
  Ok(files)
}

fn read_dir(root: &Path, relative: &Path, files: &mut Vec<PathBuf>) -> Result<(), Error> {
  let dir = root.join(relative);
  let filesystem_failure = |source| Error::FilesystemFailure { path: dir.clone(), source };

  let mut entries = std::fs::read_dir(&dir)
    .map_err(filesystem_failure)?
    .collect::<Result<Vec<_>, _>>()
    .map_err(filesystem_failure)?;
  entries.sort_by_key(|entry| entry.file_name());

  for entry in entries {
    let name = entry.file_name();
    if EXCLUDED_DIRECTORIES.iter().any(|excluded| name == *excluded) {
      trace!("Skipping {:?}", dir.join(&name));
      continue;
    }
    let path = relative.join(&name);
    if entry.file_type().map_err(filesystem_failure)?.is_dir() {
      read_dir(root, &path, files)?;
    } else {
      files.push(path);
    }
  }
  Ok(())
}
