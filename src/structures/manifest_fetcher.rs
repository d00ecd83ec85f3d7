use std::sync::Arc;

use crate::traits::ManifestSource;

/// Retrieves the version manifest from a [`ManifestSource`] and decodes it.
#[derive(Clone)]
pub struct ManifestFetcher {
  pub(crate) source: Arc<dyn ManifestSource>,
}
