use std::path::PathBuf;
use std::sync::{Arc, RwLock};

use crate::structures::{AppState, Error, HttpManifestSource, ManifestFetcher, VersionCatalog};
use crate::traits::ManifestSource;

pub struct AppStateBuilder {
  pub(crate) project_root: PathBuf,
  pub(crate) manifest_url: String,
  pub(crate) manifest_source: Option<ManifestFetcher>,
}

impl AppStateBuilder {
    pub fn new() -> Self {
        Self {
            project_root: PathBuf::from("."),
            manifest_url: HttpManifestSource::MANIFEST_URL.to_string(),
            manifest_source: None,
        }
    }

    pub fn set_project_root(&mut self, project_root: impl Into<PathBuf>) -> &mut Self {
        self.project_root = project_root.into();
        self
    }

    pub fn set_manifest_url(&mut self, manifest_url: String) -> &mut Self {
        self.manifest_url = manifest_url;
        self
    }

    /// Replaces the HTTP download of the manifest, `set_manifest_url` is ignored afterwards.
    pub fn set_manifest_source(&mut self, manifest_source: impl ManifestSource + 'static) -> &mut Self {
        self.manifest_source = Some(ManifestFetcher::new(manifest_source));
        self
    }

    pub fn build(self) -> Result<AppState, Error> {
        let fetcher = match self.manifest_source {
            Some(fetcher) => fetcher,
            None => ManifestFetcher::new(HttpManifestSource::new(&self.manifest_url)?),
        };
        Ok(AppState {
            project_root: self.project_root,
            fetcher,
            catalog: RwLock::new(Arc::new(VersionCatalog::default())),
        })
    }
}

impl Default for AppStateBuilder {
    fn default() -> Self {
        Self::new()
    }
}
