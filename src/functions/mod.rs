mod decode_manifest;
mod download_file;
mod get_hash;
mod scan_directory;

pub use decode_manifest::decode_manifest as decode_manifest;
pub(crate) use download_file::download_file as download_file;
pub(crate) use get_hash::get_hash as get_hash;
pub use scan_directory::{scan_directory, EXCLUDED_DIRECTORIES};
