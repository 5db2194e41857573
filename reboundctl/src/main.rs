use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use rebound_config::{ConfigSource, ScrollConfig};
use reboundctl::{Script, simulate};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(
    name = "reboundctl",
    version,
    about = "Replay gesture scripts through the rebound motion engine"
)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace). `RUST_LOG` wins when set.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run a gesture script and report frames and events
    Simulate {
        /// TOML or JSON gesture script
        script: PathBuf,
        /// Scroll config file; falls back to REBOUND_CONFIG_PATH,
        /// REBOUND_CONFIG_JSON, then rebound.toml in the working directory
        #[arg(long, short)]
        config: Option<PathBuf>,
        #[arg(long, default_value_t = 60)]
        fps: u32,
        #[arg(long, value_enum, default_value = "table")]
        format: OutputFormat,
    },
    /// Validate a scroll config and list suspicious combinations
    Check {
        #[arg(long, short)]
        config: Option<PathBuf>,
    },
    /// Print a preset config as TOML
    Defaults {
        #[arg(long, value_enum, default_value = "list")]
        preset: Preset,
    },
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum Preset {
    /// Vertical list with momentum and bounce
    List,
    /// Horizontal slides paging by viewport width
    Slides,
    /// Vertical item picker
    Picker,
}

impl From<Preset> for ScrollConfig {
    fn from(val: Preset) -> Self {
        match val {
            Preset::List => ScrollConfig::vertical_list(),
            Preset::Slides => ScrollConfig::horizontal_slides(),
            Preset::Picker => ScrollConfig::picker(),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut stdout = io::stdout().lock();
    match cli.command {
        Command::Simulate {
            script,
            config,
            fps,
            format,
        } => {
            let config = load_config(config.as_deref())?;
            let options = config.resolve().context("invalid scroll config")?;
            let script = Script::load(&script)?;
            let report = simulate(options, &script, fps)
                .context("simulation failed")?;
            match format {
                OutputFormat::Table => report.write_table(&mut stdout)?,
                OutputFormat::Json => {
                    writeln!(stdout, "{}", report.to_json()?)?
                }
            }
        }
        Command::Check { config } => {
            let config = load_config(config.as_deref())?;
            config.validate().context("invalid scroll config")?;
            let warnings = config.warnings();
            if warnings.is_empty() {
                writeln!(stdout, "config ok")?;
            } else {
                for warning in &warnings.items {
                    match warning.hint {
                        Some(hint) => writeln!(
                            stdout,
                            "warning: {} (hint: {hint})",
                            warning.message
                        )?,
                        None => writeln!(stdout, "warning: {}", warning.message)?,
                    }
                }
                writeln!(stdout, "config ok with {} warning(s)", warnings.items.len())?;
            }
        }
        Command::Defaults { preset } => {
            let config = ScrollConfig::from(preset);
            write!(stdout, "{}", config.to_toml_string()?)?;
        }
    }
    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<ScrollConfig> {
    if let Some(path) = path {
        if !path.exists() {
            bail!("config file {} does not exist", path.display());
        }
        let config = ScrollConfig::load_from_path(path)?;
        info!(path = %path.display(), "loaded scroll config");
        return Ok(config);
    }
    let (config, source) = ScrollConfig::load_from_env()?;
    match source {
        ConfigSource::Default => debug!("using default scroll config"),
        other => info!(source = ?other, "loaded scroll config"),
    }
    Ok(config)
}

fn init_tracing(verbose: u8) {
    let fallback = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| fallback.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}
