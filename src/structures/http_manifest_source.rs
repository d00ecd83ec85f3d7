/// Fetches the version manifest with a single HTTP GET.
#[derive(Debug, Clone)]
pub struct HttpManifestSource {
  pub(crate) url: url::Url,
}
