use std::path::PathBuf;

use clap::Parser;

use crate::app::api;
use crate::domain::AppError;

#[derive(Parser)]
#[command(name = "publish-android")]
#[command(version)]
#[command(
    about = "Provision the build toolchain and publish the Android library",
    long_about = None
)]
struct Cli {
    /// Library repository root (defaults to the current directory)
    #[arg(short = 'C', long)]
    project_dir: Option<PathBuf>,
    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

pub fn run() {
    let cli = Cli::parse();
    super::init_logging(cli.verbose);
    super::exit_on_error(run_publish(cli));
}

fn run_publish(cli: Cli) -> Result<(), AppError> {
    let project_dir = match cli.project_dir {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    let report = api::publish_android(project_dir)?;
    if let Some(toolchain) = &report.toolchain {
        println!("✅ Rust toolchain {}", toolchain);
    }
    if !report.installed_targets.is_empty() {
        println!("✅ Added Rust targets: {}", report.installed_targets.join(", "));
    }
    println!("✅ Android SDK at {}", report.sdk_root.display());
    println!("✅ CMake at {}", report.cmake_root.display());
    println!("✅ Published Android library");
    Ok(())
}
