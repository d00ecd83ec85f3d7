use std::path::PathBuf;

/// Result type returned by [`crate::ManifestFetcher::load`].
pub type FetchError = Error;

#[derive(Debug)]
pub enum Error {
  /// Transport, connection or body-read failure while fetching the manifest
  NetworkFailure(NetworkFailure),
  /// The manifest body is not a JSON object
  ParseFailure(json::Error),
  /// Valid JSON, but without a `versions` array at the top level
  MalformedManifest(String),
  /// A single version record is missing or mistyping a required field.
  /// `index` is the position of the record inside `versions`.
  MalformedEntry {
    index: usize,
    field: String,
    reason: String,
  },
  /// A directory could not be listed while scanning
  FilesystemFailure {
    path: PathBuf,
    source: std::io::Error,
  },
  /// The configured manifest url is not a well-formed URI
  InvalidManifestUrl(url::ParseError),
}

#[derive(Debug)]
pub enum NetworkFailure {
  InvalidUri(download_async::http::uri::InvalidUri),
  HttpError(download_async::http::Error),
  DownloadError(download_async::Error),
  UnsuccessfulStatus(download_async::http::StatusCode),
}
