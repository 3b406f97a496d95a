//! mle-console - Terminal reports for experiment logging
//!
//! CLI entry point: prints any of the logger reports from flags, TOML run
//! descriptors and JSON tick values.

// Allow multiple crate versions from dependencies (can't easily control)
#![allow(clippy::multiple_crate_versions)]

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use mle_console::{ColorMode, Reporter, ReporterConfig, RunDescriptor, StoragePaths, Tick};

/// Terminal reports for experiment logging
///
/// Prints the welcome banner, run startup summary, per-tick update rows,
/// storage summaries and reload notices of an experiment logger.
#[derive(Parser, Debug)]
#[command(name = "mle-console", version, about)]
struct Cli {
    /// Path to a reporter configuration TOML file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Display width in columns (overrides the config file)
    #[arg(long, global = true)]
    width: Option<usize>,

    /// When to use colours (overrides the config file)
    #[arg(long, global = true, value_enum)]
    color: Option<ColorMode>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the welcome banner
    Welcome,

    /// Print the startup summary of a run
    Startup {
        /// Run descriptor TOML file
        #[arg(long)]
        run: PathBuf,
    },

    /// Print one tick update row
    Update {
        /// Time variable names, in column order
        #[arg(long, value_delimiter = ',')]
        time_vars: Vec<String>,

        /// Stat variable names, in column order
        #[arg(long, value_delimiter = ',')]
        stat_vars: Vec<String>,

        /// Time values as a JSON object
        #[arg(long, default_value = "{}")]
        time: String,

        /// Stat values as a JSON object
        #[arg(long, default_value = "{}")]
        stats: String,

        /// Print the header row
        #[arg(long)]
        header: bool,
    },

    /// Print where artifacts were stored
    Storage {
        /// Stored figure
        #[arg(long)]
        fig: Option<PathBuf>,

        /// Stored extra object
        #[arg(long)]
        extra: Option<PathBuf>,

        /// Initial model checkpoint
        #[arg(long)]
        init_model: Option<PathBuf>,

        /// Most recent model checkpoint
        #[arg(long)]
        final_model: Option<PathBuf>,

        /// Latest every-k checkpoint
        #[arg(long)]
        every_k: Option<PathBuf>,

        /// Latest top-k checkpoint
        #[arg(long)]
        top_k: Option<PathBuf>,

        /// Also list initial and final model checkpoints
        #[arg(long)]
        print_first: bool,
    },

    /// Log that an experiment directory was reloaded
    Reload {
        /// Reloaded experiment directory
        experiment_dir: String,
    },
}

/// Load the config file (if any) and apply command-line overrides.
fn load_config(cli: &Cli) -> Result<ReporterConfig> {
    let config = match &cli.config {
        Some(path) => ReporterConfig::from_path(path)
            .with_context(|| format!("Failed to load config from '{}'", path.display()))?,
        None => ReporterConfig::default(),
    };
    config.with_overrides(cli.width, cli.color)
}

/// Dispatch a subcommand to the reporter.
fn run_command<W: Write>(reporter: &mut Reporter<W>, command: Command) -> Result<()> {
    match command {
        Command::Welcome => reporter.print_welcome(),
        Command::Startup { run } => {
            let descriptor = RunDescriptor::from_path(&run)
                .with_context(|| format!("Failed to load run from '{}'", run.display()))?;
            reporter.print_startup(&descriptor)?;
            if descriptor.reload {
                reporter.print_reload(&descriptor.experiment_dir)?;
            }
            Ok(())
        }
        Command::Update {
            time_vars,
            stat_vars,
            time,
            stats,
            header,
        } => {
            let tick = Tick::from_json(&time, &stats).context("Failed to read tick values")?;
            reporter.print_update(time_vars.as_slice(), stat_vars.as_slice(), &tick, header)
        }
        Command::Storage {
            fig,
            extra,
            init_model,
            final_model,
            every_k,
            top_k,
            print_first,
        } => {
            let paths = StoragePaths {
                fig,
                extra,
                init_model,
                final_model,
                every_k_model: every_k,
                top_k_model: top_k,
            };
            reporter.print_storage(&paths, print_first)
        }
        Command::Reload { experiment_dir } => reporter.print_reload(&experiment_dir),
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let config = load_config(&cli)?;
    let mut reporter = Reporter::stdout(&config);
    run_command(&mut reporter, cli.command)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn plain_reporter() -> Reporter<Vec<u8>> {
        let config = ReporterConfig {
            width: 100,
            color: ColorMode::Never,
        };
        Reporter::new(Vec::new(), &config)
    }

    fn run(args: &[&str]) -> Result<String> {
        let cli = Cli::try_parse_from(args)?;
        let mut reporter = plain_reporter();
        run_command(&mut reporter, cli.command)?;
        Ok(String::from_utf8(reporter.into_inner())?)
    }

    #[test]
    fn test_load_config_defaults() {
        let cli = Cli::try_parse_from(["mle-console", "welcome"]).unwrap();
        assert_eq!(load_config(&cli).unwrap(), ReporterConfig::default());
    }

    #[test]
    fn test_load_config_flags_override_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("console.toml");
        std::fs::write(&path, "width = 120\ncolor = \"always\"").unwrap();

        let cli = Cli::try_parse_from([
            "mle-console",
            "--config",
            path.to_str().unwrap(),
            "--color",
            "never",
            "welcome",
        ])
        .unwrap();
        let config = load_config(&cli).unwrap();
        assert_eq!(config.width, 120);
        assert_eq!(config.color, ColorMode::Never);
    }

    #[test]
    fn test_load_config_rejects_bad_width() {
        let cli = Cli::try_parse_from(["mle-console", "--width", "5", "welcome"]).unwrap();
        assert!(load_config(&cli).is_err());
    }

    #[test]
    fn test_update_command() {
        let out = run(&[
            "mle-console",
            "update",
            "--time-vars",
            "num_updates,num_epochs",
            "--stat-vars",
            "loss",
            "--time",
            r#"{"num_updates": 20}"#,
            "--stats",
            r#"{"loss": 1.23456}"#,
            "--header",
        ])
        .unwrap();
        assert!(out.contains("num_updates"));
        assert!(out.contains("20"));
        assert!(out.contains("---"));
        assert!(out.contains("1.235"));
    }

    #[test]
    fn test_update_command_rejects_text_stat() {
        let err = run(&[
            "mle-console",
            "update",
            "--stat-vars",
            "loss",
            "--stats",
            r#"{"loss": "high"}"#,
        ])
        .unwrap_err();
        assert!(format!("{err:#}").contains("invalid input"));
    }

    #[test]
    fn test_storage_command_respects_print_first() {
        let args = [
            "mle-console",
            "storage",
            "--init-model",
            "models/init.pt",
            "--top-k",
            "models/top_k_0.pt",
        ];
        let out = run(&args).unwrap();
        assert!(!out.contains("models/init.pt"));
        assert!(out.contains("models/top_k_0.pt"));

        let mut with_first = args.to_vec();
        with_first.push("--print-first");
        let out = run(&with_first).unwrap();
        assert!(out.contains("models/init.pt"));
    }

    #[test]
    fn test_storage_command_without_paths_is_silent() {
        assert!(run(&["mle-console", "storage"]).unwrap().is_empty());
    }

    #[test]
    fn test_startup_command_prints_reload_notice() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("run.toml");
        std::fs::write(
            &path,
            "experiment_dir = \"experiments/\"\nreload = true\n[checkpoint]\nevery_k = 10\n",
        )
        .unwrap();

        let out = run(&["mle-console", "startup", "--run", path.to_str().unwrap()]).unwrap();
        assert!(out.contains("Every k-th ckpt: 10"));
        assert!(out.trim_end().ends_with("Reloaded log from experiments/"));
    }

    #[test]
    fn test_startup_command_missing_file() {
        let err = run(&["mle-console", "startup", "--run", "does/not/exist.toml"]).unwrap_err();
        assert!(err.to_string().contains("Failed to load run"));
    }

    #[test]
    fn test_reload_command() {
        let out = run(&["mle-console", "reload", "experiments/"]).unwrap();
        assert!(out.ends_with("Reloaded log from experiments/\n"));
    }

    #[test]
    fn test_welcome_command() {
        let out = run(&["mle-console", "welcome"]).unwrap();
        assert!(out.contains("Logger v"));
    }
}
