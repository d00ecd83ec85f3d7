use launcher_core::AppStateBuilder;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
  tracing_subscriber::fmt().with_env_filter(filter).init();

  let state = match AppStateBuilder::new().build() {
    Ok(state) => state,
    Err(e) => {
      error!("Couldn't set up the launcher: {}", e);
      std::process::exit(1);
    }
  };
  state.startup().await;

  let catalog = state.game_versions();
  match catalog.default_version() {
    Some(version) => info!("Default game version: {}", version.id),
    None => info!("No game versions available"),
  }
  for version in catalog.selectable_versions() {
    println!("{}\t{}\t{}", version.id, version.kind, version.release_timestamp);
  }

  match state.list_files() {
    Ok(files) => files.iter().for_each(|file| println!("{}", file)),
    Err(e) => error!("Couldn't list project files: {}", e),
  }
}
