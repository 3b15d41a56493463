use std::path::PathBuf;

use clap::Parser;

use crate::app::api;
use crate::domain::AppError;

#[derive(Parser)]
#[command(name = "conan-export")]
#[command(version)]
#[command(
    about = "Export library versions listed in conandata.yml into the local Conan cache",
    long_about = None
)]
struct Cli {
    /// Version to export, or `all`. Defaults to the branch tip plus the latest version
    #[arg(value_name = "VERSION")]
    target: Option<String>,
    /// Project root holding conandata.yml (defaults to the current directory)
    #[arg(short = 'C', long)]
    project_dir: Option<PathBuf>,
    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

pub fn run() {
    let cli = Cli::parse();
    super::init_logging(cli.verbose);
    super::exit_on_error(run_export(cli));
}

fn run_export(cli: Cli) -> Result<(), AppError> {
    let project_dir = match cli.project_dir {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    let report = api::export_versions(project_dir, cli.target.as_deref())?;
    for version in &report.exported {
        println!("✅ Exported {} from {}", version.label, version.revision);
    }
    Ok(())
}
