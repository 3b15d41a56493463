pub mod conan_cli;
pub mod credential_prompt;
pub mod env_credentials;
pub mod git_command;
pub mod http_downloader;
pub mod process;
pub mod properties_file;

pub use conan_cli::ConanCli;
pub use credential_prompt::DialoguerCredentialPrompt;
pub use env_credentials::EnvCredentialProvider;
pub use git_command::GitCommandAdapter;
pub use http_downloader::HttpDownloader;
pub use process::SystemProcessRunner;
pub use properties_file::PropertiesFile;
