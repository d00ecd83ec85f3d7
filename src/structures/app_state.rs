use std::path::PathBuf;
use std::sync::{Arc, RwLock};

use crate::structures::{ManifestFetcher, VersionCatalog};

/// State the host application keeps for the lifetime of the process.
pub struct AppState {
  pub(crate) project_root: PathBuf,
  pub(crate) fetcher: ManifestFetcher,
  /// Only ever replaced as a whole, readers hold on to their own `Arc`
  pub(crate) catalog: RwLock<Arc<VersionCatalog>>,
}
