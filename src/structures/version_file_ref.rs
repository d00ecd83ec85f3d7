/// One downloadable artifact of a game version, e.g. the client or server jar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionFileRef {
  /// Download location, validated to be a well-formed URI
  pub url: String,
  /// Hex-encoded SHA256 hash of the artifact
  pub checksum: String,
  pub size_bytes: u64,
}
