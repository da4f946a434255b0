//! CLI entry point for topreco.
//!
//! This module is intentionally thin: it handles argument parsing, I/O, and exit codes.
//! Path, timestamp, and matching logic lives in `topreco-common`; settings in `topreco-settings`.

mod logging;

use std::io::BufRead;

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, Subcommand};
use time::UtcOffset;
use topreco_common::{OsEnv, SampleMatcher, missing_env_diagnostic};
use topreco_settings::{Overrides, ResolvedConfig, TopRecoConfigV1};

#[derive(Parser, Debug)]
#[command(
    name = "topreco",
    version,
    about = "Installation paths, run timestamps, and sample selection for TopReco analyses"
)]
struct Cli {
    /// Path to topreco config TOML (a missing file means defaults).
    #[arg(long, default_value = "topreco.toml", global = true)]
    config: Utf8PathBuf,

    /// Override the variable holding the installation root.
    #[arg(long, global = true)]
    env_var: Option<String>,

    /// Increase log verbosity (TOPRECO_LOG takes precedence).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the installation root.
    CmsswBase,

    /// Print the data directory of an analysis package.
    DataPath {
        /// Package below src/Analysis (default TopReco).
        #[arg(long)]
        package: Option<String>,
    },

    /// Print a YYYY-MM-DD_HHhMMmSSs timestamp.
    Timestamp {
        /// Seconds since the Unix epoch (default: now).
        #[arg(long, allow_hyphen_values = true)]
        epoch: Option<i64>,

        /// Use UTC instead of the local timezone.
        #[arg(long)]
        utc: bool,
    },

    /// Test candidate names against a reference list.
    Match {
        /// exact, prefix, or wildcard.
        #[arg(long)]
        mode: Option<String>,

        /// Reference string (repeatable, order matters for prefix mode).
        #[arg(long = "ref", required = true)]
        refs: Vec<String>,

        /// Names to test.
        candidates: Vec<String>,
    },

    /// Print the samples kept by the include/exclude selection.
    Select {
        /// exact, prefix, or wildcard.
        #[arg(long)]
        mode: Option<String>,

        /// Include reference (repeatable; replaces the config list).
        #[arg(long)]
        include: Vec<String>,

        /// Exclude reference (repeatable; replaces the config list).
        #[arg(long)]
        exclude: Vec<String>,

        /// Sample names; read one per line from stdin when omitted.
        samples: Vec<String>,
    },

    /// Print the JSON schema of topreco.toml.
    Schema,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    if let Err(err) = run(&cli) {
        if let Some(topreco_common::Error::MissingEnvVar { name }) =
            err.downcast_ref::<topreco_common::Error>()
        {
            eprint!("{}", missing_env_diagnostic(name));
        } else {
            eprintln!("topreco error: {err:#}");
        }
        std::process::exit(1);
    }
    Ok(())
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    match &cli.cmd {
        Commands::CmsswBase => {
            let resolved = load_settings(cli, Overrides::default())?;
            let base = topreco_common::env::resolve_env_path(&OsEnv, &resolved.env_var)?;
            println!("{base}");
        }
        Commands::DataPath { package } => {
            let overrides = Overrides {
                package: package.clone(),
                ..Overrides::default()
            };
            let resolved = load_settings(cli, overrides)?;
            let path = topreco_common::data_path(&OsEnv, &resolved.env_var, &resolved.package)?;
            println!("{path}");
        }
        Commands::Timestamp { epoch, utc } => {
            let secs = match epoch {
                Some(secs) => *secs,
                None => time::OffsetDateTime::now_utc().unix_timestamp(),
            };
            let s = if *utc {
                topreco_common::format_timestamp_with_offset(secs, UtcOffset::UTC)
            } else {
                topreco_common::timestamp_to_string(secs)
            }
            .map_err(topreco_common::Error::from)
            .context("format timestamp")?;
            println!("{s}");
        }
        Commands::Match {
            mode,
            refs,
            candidates,
        } => {
            let overrides = Overrides {
                mode: mode.clone(),
                ..Overrides::default()
            };
            let resolved = load_settings(cli, overrides)?;
            let matcher = SampleMatcher::new(resolved.mode, refs.iter().cloned());
            for candidate in candidates {
                println!("{candidate}\t{}", matcher.matches(candidate));
            }
        }
        Commands::Select {
            mode,
            include,
            exclude,
            samples,
        } => {
            let overrides = Overrides {
                mode: mode.clone(),
                include: include.clone(),
                exclude: exclude.clone(),
                ..Overrides::default()
            };
            let resolved = load_settings(cli, overrides)?;
            let filter = resolved.sample_filter();
            let samples = if samples.is_empty() {
                read_stdin_lines().context("read samples from stdin")?
            } else {
                samples.clone()
            };
            for sample in filter.select(samples.iter().map(String::as_str)) {
                println!("{sample}");
            }
        }
        Commands::Schema => {
            let schema = topreco_settings::config_schema();
            let text = serde_json::to_string_pretty(&schema).context("serialize schema")?;
            println!("{text}");
        }
    }
    Ok(())
}

fn load_settings(cli: &Cli, mut overrides: Overrides) -> anyhow::Result<ResolvedConfig> {
    overrides.env_var = cli.env_var.clone();
    let cfg = read_config(&cli.config)?;
    let resolved = topreco_settings::resolve_config(cfg, overrides).context("resolve config")?;
    tracing::debug!(
        env_var = %resolved.env_var,
        package = %resolved.package,
        mode = %resolved.mode,
        "resolved settings"
    );
    Ok(resolved)
}

fn read_config(path: &Utf8Path) -> anyhow::Result<TopRecoConfigV1> {
    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(%path, "no config file, using defaults");
            return Ok(TopRecoConfigV1::default());
        }
        Err(err) => return Err(err).with_context(|| format!("read config: {path}")),
    };
    if text.trim().is_empty() {
        return Ok(TopRecoConfigV1::default());
    }
    topreco_settings::parse_config_toml(&text).with_context(|| format!("parse config: {path}"))
}

fn read_stdin_lines() -> anyhow::Result<Vec<String>> {
    let stdin = std::io::stdin();
    let mut out = Vec::new();
    for line in stdin.lock().lines() {
        let line = line?;
        let name = line.trim();
        if !name.is_empty() {
            out.push(name.to_string());
        }
    }
    Ok(out)
}
