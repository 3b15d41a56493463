mod fake_downloader;
mod fake_git;
mod fake_package_cache;
mod recording_runner;
mod static_credentials;

pub use fake_downloader::FakeDownloader;
pub use fake_git::FakeGit;
pub use fake_package_cache::FakePackageCache;
pub use recording_runner::RecordingRunner;
pub use static_credentials::StaticCredentials;
