extern crate json;
extern crate sha2;
extern crate hex;
extern crate url;
extern crate download_async;

//Modules
mod app_state_builder;
mod functions;
mod implementations;
mod structures;
pub mod traits;
mod tests;

pub use crate::app_state_builder::AppStateBuilder;
pub use crate::functions::{decode_manifest, scan_directory, EXCLUDED_DIRECTORIES};
pub use crate::structures::{AppState, Error, FetchError, GameVersion, HttpManifestSource, ManifestFetcher, NetworkFailure, VersionCatalog, VersionFileRef};
