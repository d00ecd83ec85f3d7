use crate::structures::GameVersion;

/// All versions of the manifest, in the order the manifest lists them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VersionCatalog {
  pub(crate) versions: Vec<GameVersion>,
}
