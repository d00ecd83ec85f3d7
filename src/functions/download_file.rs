use tracing::{instrument, trace};

use crate::structures::{Error, Response};

/// Downloads `url` into memory. Responses other than 200 and 206 come back from
/// download_async as a status error, which turns into a network failure carrying the status.
#[instrument]
pub(crate) async fn download_file(url: &str) -> Result<Response, Error> {
  let uri = url.parse::<download_async::http::Uri>()?;
  let mut downloader = download_async::Downloader::new();
  if uri.scheme_str() == Some("http") {
    downloader.allow_http();
  }
  downloader.use_uri(uri);
  let mut buffer = vec![];
  let parts = downloader.download(download_async::Body::empty(), &mut buffer).await?;
  let response = Response::new(parts, buffer);
  trace!("{} responded with {} bytes, content-length: {:?}", url, response.body.len(), response.headers().get("content-length"));
  Ok(response)
}
