#[cfg(test)]
mod tests {
  use std::sync::atomic::{AtomicUsize, Ordering};
  use std::sync::Arc;

  use async_trait::async_trait;
  use tokio::io::{AsyncReadExt, AsyncWriteExt};

  use crate::traits::ManifestSource;
  use crate::{AppState, AppStateBuilder, Error};

  const MANIFEST: &str = r#"{"versions":[
    {"id":"0.3.2a","type":"pre_alpha","releaseTime":1717200000,"client":{"url":"https://example.com/0.3.2a/client.jar","sha256":"aa","size":10}},
    {"id":"0.3.1","type":"pre_alpha","releaseTime":1717100000,"client":{"url":"https://example.com/0.3.1/client.jar","sha256":"bb","size":20},"server":{"url":"https://example.com/0.3.1/server.jar","sha256":"cc","size":30}},
    {"id":"0.3.0","type":"pre_alpha","releaseTime":1717000000,"server":{"url":"https://example.com/0.3.0/server.jar","sha256":"dd","size":40}}
  ]}"#;

  /// Serves a fixed sequence of bodies, one per fetch, the last one repeating.
  struct StaticSource {
    bodies: Vec<&'static str>,
    fetches: Arc<AtomicUsize>,
  }

  #[async_trait]
  impl ManifestSource for StaticSource {
    async fn fetch(&self) -> Result<Vec<u8>, Error> {
      let fetch = self.fetches.fetch_add(1, Ordering::SeqCst);
      let body = self.bodies[fetch.min(self.bodies.len() - 1)];
      Ok(body.as_bytes().to_vec())
    }
  }

  fn state_with(bodies: Vec<&'static str>) -> (AppState, Arc<AtomicUsize>) {
    let fetches = Arc::new(AtomicUsize::new(0));
    let mut builder = AppStateBuilder::new();
    builder.set_manifest_source(StaticSource { bodies, fetches: fetches.clone() });
    (builder.build().unwrap(), fetches)
  }

  fn runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_multi_thread().enable_all().build().unwrap()
  }

  #[test]
  fn startup_populates_catalog() {
    let (state, fetches) = state_with(vec![MANIFEST]);
    assert!(state.game_versions().is_empty());

    runtime().block_on(state.startup());

    let catalog = state.game_versions();
    let ids: Vec<&str> = catalog.iter().map(|version| version.id.as_str()).collect();
    assert_eq!(ids, vec!["0.3.2a", "0.3.1", "0.3.0"]);
    assert_eq!(catalog.default_version().map(|version| version.id.as_str()), Some("0.3.1"));

    // reading the catalog never fetches again
    let _ = state.game_versions();
    assert_eq!(fetches.load(Ordering::SeqCst), 1);
  }

  #[test]
  fn startup_runs_on_a_background_task() {
    let (state, fetches) = state_with(vec![MANIFEST]);
    let state = Arc::new(state);
    let rt = runtime();

    let background = state.clone();
    rt.block_on(async move {
      tokio::spawn(async move { background.startup().await }).await
    }).unwrap();

    assert_eq!(state.game_versions().len(), 3);
    assert_eq!(fetches.load(Ordering::SeqCst), 1);
  }

  #[test]
  fn startup_falls_back_to_empty_catalog() {
    let (state, _) = state_with(vec!["not json"]);
    runtime().block_on(state.startup());
    assert!(state.game_versions().is_empty());

    let (state, _) = state_with(vec![r#"{"versions":[{"type":"release","releaseTime":1}]}"#]);
    runtime().block_on(state.startup());
    assert!(state.game_versions().is_empty());
  }

  #[test]
  fn unreachable_manifest_falls_back_to_empty_catalog() {
    let mut builder = AppStateBuilder::new();
    builder.set_manifest_url("http://127.0.0.1:1/versions.json".to_string());
    let state = builder.build().unwrap();

    runtime().block_on(state.startup());
    assert!(state.game_versions().is_empty());
  }

  #[test]
  fn not_found_manifest_is_reported_with_status() {
    let rt = runtime();
    let url = rt.block_on(async {
      let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
      let address = listener.local_addr().unwrap();
      tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut request = [0u8; 1024];
        let _ = socket.read(&mut request).await;
        socket.write_all(b"HTTP/1.1 404 Not Found\r\ncontent-length: 0\r\nconnection: close\r\n\r\n").await.unwrap();
        socket.shutdown().await.unwrap();
      });
      format!("http://{}/versions.json", address)
    });
    let mut builder = AppStateBuilder::new();
    builder.set_manifest_url(url);
    let state = builder.build().unwrap();

    let error = rt.block_on(state.reload()).unwrap_err();
    assert!(matches!(error, Error::NetworkFailure(_)));
    assert!(error.to_string().contains("404"), "{}", error);
    assert!(state.game_versions().is_empty());
  }

  #[test]
  fn reload_replaces_catalog_wholesale() {
    let (state, _) = state_with(vec![MANIFEST, r#"{"versions":[{"id":"0.4.0","type":"pre_alpha","releaseTime":1718000000}]}"#]);
    let rt = runtime();
    rt.block_on(state.startup());
    let before = state.game_versions();

    rt.block_on(state.reload()).unwrap();
    let after = state.game_versions();

    assert_eq!(before.len(), 3);
    assert_eq!(after.len(), 1);
    assert!(after.get("0.3.1").is_none());
    assert_eq!(after.get("0.4.0").map(|version| version.release_timestamp), Some(1718000000));
  }

  #[test]
  fn failed_reload_keeps_current_catalog() {
    let (state, _) = state_with(vec![MANIFEST, r#"{"latest":{}}"#]);
    let rt = runtime();
    rt.block_on(state.startup());

    let result = rt.block_on(state.reload());
    assert!(matches!(result, Err(Error::MalformedManifest(_))));
    assert_eq!(state.game_versions().len(), 3);
  }

  #[test]
  fn list_files_uses_project_root() {
    let directory = tempfile::tempdir().unwrap();
    std::fs::create_dir_all(directory.path().join("frontend/node_modules/react")).unwrap();
    std::fs::write(directory.path().join("frontend/node_modules/react/index.js"), b"").unwrap();
    std::fs::write(directory.path().join("frontend/index.html"), b"").unwrap();
    std::fs::write(directory.path().join("main.go"), b"").unwrap();

    let mut builder = AppStateBuilder::new();
    builder.set_project_root(directory.path());
    let state = builder.build().unwrap();

    let expected_nested = std::path::Path::new("frontend").join("index.html").to_string_lossy().into_owned();
    assert_eq!(state.list_files().unwrap(), vec![expected_nested, "main.go".to_string()]);
  }

  #[test]
  fn list_files_reports_missing_root() {
    let directory = tempfile::tempdir().unwrap();
    let mut builder = AppStateBuilder::new();
    builder.set_project_root(directory.path().join("gone"));
    let state = builder.build().unwrap();

    assert!(matches!(state.list_files(), Err(Error::FilesystemFailure { .. })));
  }

  #[test]
  fn builder_rejects_malformed_url() {
    let mut builder = AppStateBuilder::new();
    builder.set_manifest_url("://versions.json".to_string());
    assert!(matches!(builder.build(), Err(Error::InvalidManifestUrl(_))));
  }
}
