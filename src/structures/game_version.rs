use crate::structures::VersionFileRef;

/// A single entry of the version manifest
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameVersion {
  pub id: String,
  /// Free-form release channel, e.g. "release" or "snapshot"
  pub kind: String,
  pub release_timestamp: i64,
  /// `None` when the version doesn't ship a client
  pub client_artifact: Option<VersionFileRef>,
  /// `None` when the version doesn't ship a server
  pub server_artifact: Option<VersionFileRef>,
}
