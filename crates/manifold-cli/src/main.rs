//! Manifold CLI - fetch release manifests and split them per template

use clap::{Parser, Subcommand};
use manifold_kube::GetOptions;
use std::path::PathBuf;
use std::process::ExitCode;

mod commands;
mod config;
mod error;
mod exit_codes;

use error::{CliError, Result};

#[derive(Parser)]
#[command(name = "manifold")]
#[command(author = "Manifold Contributors")]
#[command(version)]
#[command(about = "Fetch release manifests and split them into per-template files", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable debug output
    #[arg(long, global = true)]
    debug: bool,

    /// Release storage directory
    #[arg(long, global = true, env = config::STORAGE_DIR_ENV)]
    storage_dir: Option<PathBuf>,

    /// Namespace of the release
    #[arg(short, long, global = true, env = "MANIFOLD_NAMESPACE", default_value = "default")]
    namespace: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Download extended information of a named release
    Get {
        #[command(subcommand)]
        command: GetCommands,
    },
}

#[derive(Subcommand)]
enum GetCommands {
    /// Download the manifest for a named release
    #[command(long_about = commands::get_manifest::LONG_ABOUT)]
    Manifest {
        /// Release name
        #[arg(value_name = "RELEASE_NAME")]
        name: String,

        /// Get the named release with revision (0 for the latest)
        #[arg(long, default_value_t = 0)]
        revision: u32,

        /// Only write manifests rendered from the given templates
        #[arg(short = 's', long = "show-only", value_name = "TEMPLATE")]
        show_only: Vec<String>,
    },
}

async fn run(cli: Cli) -> Result<()> {
    let storage = config::open_storage(cli.storage_dir.as_deref());

    match cli.command {
        Commands::Get {
            command:
                GetCommands::Manifest {
                    name,
                    revision,
                    show_only,
                },
        } => {
            let options = GetOptions::new(name, cli.namespace).with_revision(revision);
            commands::get_manifest::run(&storage, &options, &show_only).await?;
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    miette::set_panic_hook();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version also arrive here
            let code = if e.use_stderr() {
                exit_codes::USAGE_ERROR
            } else {
                exit_codes::SUCCESS
            };
            let _ = e.print();
            return ExitCode::from(code as u8);
        }
    };

    if cli.debug {
        // SAFETY: We're the only thread at this point (start of main)
        unsafe { std::env::set_var("RUST_BACKTRACE", "1") };
    }
    config::init_tracing(cli.debug);

    let result = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| CliError::internal(format!("failed to start runtime: {}", e)))
        .and_then(|runtime| runtime.block_on(run(cli)));

    match result {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            let code = err.exit_code();
            eprintln!("{:?}", miette::Report::new(err));
            ExitCode::from(code as u8)
        }
    }
}
