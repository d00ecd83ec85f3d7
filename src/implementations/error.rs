use crate::structures::{Error, NetworkFailure};

impl std::error::Error for Error {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      Self::NetworkFailure(NetworkFailure::InvalidUri(error)) => Some(error),
      Self::NetworkFailure(NetworkFailure::HttpError(error)) => Some(error),
      Self::NetworkFailure(NetworkFailure::DownloadError(error)) => Some(error),
      Self::NetworkFailure(NetworkFailure::UnsuccessfulStatus(_)) => None,
      Self::ParseFailure(error) => Some(error),
      Self::FilesystemFailure { source, .. } => Some(source),
      Self::InvalidManifestUrl(error) => Some(error),
      Self::MalformedManifest(_) | Self::MalformedEntry { .. } => None,
    }
  }
}

impl std::fmt::Display for Error {
  #[inline(always)]
  fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
    match self {
      Self::NetworkFailure(failure) => write!(f, "Couldn't retrieve the version manifest: {}", failure),
      Self::ParseFailure(error) => write!(f, "Version manifest is not a JSON object: {}", error),
      Self::MalformedManifest(reason) => write!(f, "Malformed version manifest: {}", reason),
      Self::MalformedEntry { index, field, reason } => write!(f, "Malformed entry #{} in version manifest, field \"{}\": {}", index, field, reason),
      Self::FilesystemFailure { path, source } => write!(f, "Couldn't read directory {:?}: {}", path, source),
      Self::InvalidManifestUrl(error) => write!(f, "Invalid manifest url: {}", error),
    }
  }
}

impl std::fmt::Display for NetworkFailure {
  #[inline(always)]
  fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
    match self {
      Self::InvalidUri(error) => write!(f, "invalid uri: {}", error),
      Self::HttpError(error) => write!(f, "http error: {}", error),
      // download_async::Error displays as an empty string
      Self::DownloadError(error) => write!(f, "download failed: {:?}", error),
      Self::UnsuccessfulStatus(status) => write!(f, "server responded with {}", status),
    }
  }
}

impl From<download_async::http::uri::InvalidUri> for Error {
  #[track_caller]
  #[inline(always)]
  fn from(error: download_async::http::uri::InvalidUri) -> Self {
    log_error(&error);
    Self::NetworkFailure(NetworkFailure::InvalidUri(error))
  }
}

impl From<download_async::http::Error> for Error {
  #[track_caller]
  #[inline(always)]
  fn from(error: download_async::http::Error) -> Self {
    log_error(&error);
    Self::NetworkFailure(NetworkFailure::HttpError(error))
  }
}

impl From<download_async::Error> for Error {
  #[track_caller]
  #[inline(always)]
  fn from(error: download_async::Error) -> Self {
    match error {
      download_async::Error::StatusError(status) => {
        tracing::error!("Server responded with {}", status);
        Self::NetworkFailure(NetworkFailure::UnsuccessfulStatus(status))
      },
      error => {
        log_error(&error);
        Self::NetworkFailure(NetworkFailure::DownloadError(error))
      }
    }
  }
}

impl From<json::Error> for Error {
  #[track_caller]
  #[inline(always)]
  fn from(error: json::Error) -> Self {
    log_error(&error);
    Self::ParseFailure(error)
  }
}

impl From<std::string::FromUtf8Error> for Error {
  #[track_caller]
  #[inline(always)]
  fn from(error: std::string::FromUtf8Error) -> Self {
    log_error(&error);
    Self::ParseFailure(json::Error::FailedUtf8Parsing)
  }
}

impl From<url::ParseError> for Error {
  #[track_caller]
  #[inline(always)]
  fn from(error: url::ParseError) -> Self {
    log_error(&error);
    Self::InvalidManifestUrl(error)
  }
}

#[track_caller]
fn log_error(error: &(impl std::error::Error + ?Sized)) {
  tracing::error!("{:?}", error);
}
