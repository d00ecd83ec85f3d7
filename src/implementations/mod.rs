mod app_state;
mod error;
mod game_version;
mod http_manifest_source;
mod manifest_fetcher;
mod response;
mod version_catalog;
mod version_file_ref;
