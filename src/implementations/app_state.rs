use std::sync::{Arc, PoisonError};
use tracing::{info, warn};

use crate::functions::scan_directory;
use crate::structures::{AppState, Error, VersionCatalog};

impl AppState {
  /// Populates the catalog, a failed load leaves an empty catalog behind instead of failing the host.
  pub async fn startup(&self) {
    match self.fetcher.load().await {
      Ok(catalog) => self.replace_catalog(catalog),
      Err(e) => {
        warn!("Couldn't load game versions, continuing without any: {}", e);
        self.replace_catalog(VersionCatalog::default());
      }
    }
  }

  /// Fetches the manifest again, the current catalog is kept if that fails.
  pub async fn reload(&self) -> Result<(), Error> {
    let catalog = self.fetcher.load().await?;
    self.replace_catalog(catalog);
    Ok(())
  }

  /// Every file of the project, relative to the project root.
  pub fn list_files(&self) -> Result<Vec<String>, Error> {
    let files = scan_directory(&self.project_root)?;
    Ok(files.into_iter().map(|file| file.to_string_lossy().into_owned()).collect())
  }

  /// The catalog as loaded during startup, this never fetches.
  pub fn game_versions(&self) -> Arc<VersionCatalog> {
    let catalog = self.catalog.read().unwrap_or_else(PoisonError::into_inner);
    Arc::clone(&catalog)
  }

  pub fn project_root(&self) -> &std::path::Path {
    &self.project_root
  }

  fn replace_catalog(&self, catalog: VersionCatalog) {
    info!("Holding {} game versions", catalog.len());
    let catalog = Arc::new(catalog);
    *self.catalog.write().unwrap_or_else(PoisonError::into_inner) = catalog;
  }
}
