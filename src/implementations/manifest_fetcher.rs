use std::sync::Arc;
use tracing::{info, instrument};

use crate::functions::decode_manifest;
use crate::structures::{FetchError, ManifestFetcher, VersionCatalog};
use crate::traits::ManifestSource;

impl ManifestFetcher {
  pub fn new(source: impl ManifestSource + 'static) -> Self {
    Self {
      source: Arc::new(source),
    }
  }

  /// Fetches the manifest once and builds a fresh catalog out of it, no retries are attempted.
  #[instrument(skip(self))]
  pub async fn load(&self) -> Result<VersionCatalog, FetchError> {
    let bytes = self.source.fetch().await?;
    let catalog = decode_manifest(&bytes)?;
    info!("Loaded {} game versions", catalog.len());
    Ok(catalog)
  }
}

impl std::fmt::Debug for ManifestFetcher {
  fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
    f.debug_struct("ManifestFetcher").finish_non_exhaustive()
  }
}
