use crate::structures::GameVersion;

impl GameVersion {
  /// Whether a client artifact with a non-empty download url exists.
  pub fn has_client(&self) -> bool {
    self.client_artifact.as_ref().is_some_and(|client| !client.url.is_empty())
  }

  pub fn has_server(&self) -> bool {
    self.server_artifact.as_ref().is_some_and(|server| !server.url.is_empty())
  }

  /// Ids ending with a letter, e.g. `0.1.2a`, belong to experimental builds.
  pub fn is_experimental(&self) -> bool {
    self.id.chars().last().is_some_and(|last| last.is_ascii_alphabetic())
  }
}

#[cfg(test)]
mod tests {
  use crate::structures::GameVersion;

  fn with_id(id: &str) -> GameVersion {
    GameVersion {
      id: id.to_string(),
      kind: "pre-alpha".to_string(),
      release_timestamp: 1_700_000_000,
      client_artifact: None,
      server_artifact: None,
    }
  }

  #[test]
  fn experimental_ids_end_with_a_letter() {
    assert!(with_id("0.1.2a").is_experimental());
    assert!(with_id("0.3.0-Z").is_experimental());
    assert!(!with_id("0.3.1").is_experimental());
    assert!(!with_id("").is_experimental());
  }

  #[test]
  fn missing_artifacts_are_not_available() {
    let version = with_id("0.3.1");
    assert!(!version.has_client());
    assert!(!version.has_server());
  }
}
