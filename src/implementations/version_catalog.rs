use crate::structures::{GameVersion, VersionCatalog};

impl VersionCatalog {
  pub fn new(versions: Vec<GameVersion>) -> Self {
    Self {
      versions
    }
  }

  pub fn len(&self) -> usize {
    self.versions.len()
  }

  pub fn is_empty(&self) -> bool {
    self.versions.is_empty()
  }

  pub fn iter(&self) -> std::slice::Iter<'_, GameVersion> {
    self.versions.iter()
  }

  pub fn as_slice(&self) -> &[GameVersion] {
    &self.versions
  }

  /// Looks up a version by id, if the manifest contains the id more than once the last entry wins.
  pub fn get(&self, id: &str) -> Option<&GameVersion> {
    self.versions.iter().rev().find(|version| version.id == id)
  }

  /// Versions that can be launched as a client, i.e. that have a client artifact with a download url.
  pub fn client_versions(&self) -> impl Iterator<Item = &GameVersion> {
    self.versions.iter().filter(|version| version.has_client())
  }

  /// Client versions that should be offered when creating a new instance.
  pub fn selectable_versions(&self) -> impl Iterator<Item = &GameVersion> {
    self.client_versions().filter(|version| !version.is_experimental())
  }

  /// The version preselected when creating a new instance: the first selectable one.
  pub fn default_version(&self) -> Option<&GameVersion> {
    self.selectable_versions().next()
  }
}

impl<'a> IntoIterator for &'a VersionCatalog {
  type Item = &'a GameVersion;
  type IntoIter = std::slice::Iter<'a, GameVersion>;

  fn into_iter(self) -> Self::IntoIter {
    self.versions.iter()
  }
}

impl From<Vec<GameVersion>> for VersionCatalog {
  fn from(versions: Vec<GameVersion>) -> Self {
    Self::new(versions)
  }
}
