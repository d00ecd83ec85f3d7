pub mod error;
pub use error::{Error, FetchError, NetworkFailure};

pub mod version_file_ref;
pub use version_file_ref::VersionFileRef;

pub mod game_version;
pub use game_version::GameVersion;

pub mod version_catalog;
pub use version_catalog::VersionCatalog;

pub mod response;
pub use response::Response;

pub mod http_manifest_source;
pub use http_manifest_source::HttpManifestSource;

pub mod manifest_fetcher;
pub use manifest_fetcher::ManifestFetcher;

pub mod app_state;
pub use app_state::AppState;
