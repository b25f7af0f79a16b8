// gdbind-cli: command-line entry point for the gdbind generator.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "gdbind", about = "gdbind: engine class bindings for Rust")]
struct Cli {
    /// Log every skipped method and class.
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the class façades from the engine's extension_api.json.
    Generate {
        /// Path to gdbind.toml.
        #[arg(long, default_value = "gdbind.toml")]
        config: PathBuf,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();

    match cli.command {
        Commands::Generate { config } => match gdbind_codegen::run_generate(&config) {
            Ok(summary) => {
                log::info!(
                    "generated {} classes in {} modules under {}",
                    summary.classes,
                    summary.modules,
                    summary.out_dir.display()
                );
                ExitCode::SUCCESS
            }
            Err(err) => {
                log::error!("{err}");
                ExitCode::FAILURE
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn config_defaults_to_the_working_directory() {
        let cli = Cli::try_parse_from(["gdbind", "generate"]).unwrap();
        let Commands::Generate { config } = cli.command;
        assert_eq!(config, PathBuf::from("gdbind.toml"));
        assert!(!cli.verbose);

        let cli =
            Cli::try_parse_from(["gdbind", "-v", "generate", "--config", "x/gdbind.toml"]).unwrap();
        let Commands::Generate { config } = cli.command;
        assert_eq!(config, PathBuf::from("x/gdbind.toml"));
        assert!(cli.verbose);
    }
}
