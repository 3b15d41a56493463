//! CLI adapters for the `conan-export` and `publish-android` binaries.

pub mod export;
pub mod publish;

use tracing_subscriber::EnvFilter;

use crate::domain::AppError;

/// Plain, timestamp-free log lines on stderr. `RUST_LOG` overrides the level.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

fn exit_on_error(result: Result<(), AppError>) {
    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
