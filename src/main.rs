use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

mod cli;

#[derive(Parser)]
#[command(name = "plugpack")]
#[command(about = "Package plugin, loader and runtime APKs into a distributable zip")]
#[command(version)]
struct Cli {
    /// Project directory (defaults to the nearest parent with plugpack.yaml)
    #[arg(short = 'C', long, global = true)]
    project_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Copy artifacts, write config.json and build the plugin zip
    Package {
        /// Build type to package (e.g. debug, release)
        variant: Option<String>,
        /// Package every configured build type
        #[arg(short, long, conflicts_with = "variant")]
        all: bool,
    },
    /// List configured build types
    List,
    /// Print the tasks that must run before packaging a build type
    Tasks {
        /// Build type
        variant: String,
    },
    /// Print the MD5 fingerprint of a file
    Hash {
        /// File to hash
        file: PathBuf,
    },
}

fn main() -> ExitCode {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let project_dir = cli.project_dir;

    let result = match cli.command {
        Commands::Package { variant, all } => cli::package::run(project_dir, variant, all),
        Commands::List => cli::list::run(project_dir),
        Commands::Tasks { variant } => cli::tasks::run(project_dir, variant),
        Commands::Hash { file } => cli::hash::run(file),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\n{}", plugpack::format_error_with_help(&e));
            ExitCode::FAILURE
        }
    }
}
