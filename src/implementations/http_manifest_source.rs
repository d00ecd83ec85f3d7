use async_trait::async_trait;

use crate::functions::download_file;
use crate::structures::{Error, HttpManifestSource};
use crate::traits::ManifestSource;

impl HttpManifestSource {
  /// Manifest listing every released game version
  pub const MANIFEST_URL: &'static str = "https://raw.githubusercontent.com/CRModders/CosmicArchive/main/versions.json";

  pub fn new(url: &str) -> Result<Self, Error> {
    Ok(Self {
      url: url::Url::parse(url)?,
    })
  }

  pub fn url(&self) -> &url::Url {
    &self.url
  }
}

#[async_trait]
impl ManifestSource for HttpManifestSource {
  async fn fetch(&self) -> Result<Vec<u8>, Error> {
    let response = download_file(self.url.as_str()).await?;
    Ok(response.into_body())
  }
}
