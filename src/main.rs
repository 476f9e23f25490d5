use anyhow::{Context, Result};
use bank_reducer::config::TellerConfig;
use bank_reducer::script::{ActionScript, ScriptError};
use bank_reducer::store::AccountStore;
use bank_reducer::teller::Button;
use clap::{Parser, Subcommand};
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "bank-reducer", version, about = "Drive a toy bank account through its reducer")]
struct Cli {
    /// Log every transition to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Apply a JSON action script and print each resulting state
    Run {
        /// Script file, or `-` for stdin
        script: PathBuf,
    },
    /// Press teller buttons in order
    Press {
        /// Teller config file (defaults to <config_dir>/bank-reducer/teller.toml)
        #[arg(long)]
        config: Option<PathBuf>,

        #[arg(value_enum, required = true)]
        buttons: Vec<Button>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut out = io::stdout().lock();
    match cli.command {
        Command::Run { script } => {
            let content = read_script(&script)?;
            if let Err(err) = run_script(&content, &mut out) {
                if let Some(ScriptError::Invalid(violations)) = err.downcast_ref::<ScriptError>() {
                    for violation in violations {
                        eprintln!("{violation}");
                    }
                }
                return Err(err.context(format!("Rejected script '{}'", script.display())));
            }
            Ok(())
        }
        Command::Press { config, buttons } => {
            let config = match &config {
                Some(path) => TellerConfig::load_from(path)?,
                None => TellerConfig::load()?,
            };
            press(&buttons, &config, &mut out)
        }
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn read_script(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut content = String::new();
        io::stdin()
            .read_to_string(&mut content)
            .context("Failed to read script from stdin")?;
        return Ok(content);
    }
    std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read script '{}'", path.display()))
}

/// Apply a JSON script from a fresh account, writing one JSON state per line.
///
/// An invalid script writes nothing and fails with
/// [`ScriptError::Invalid`] listing every bad entry.
fn run_script(content: &str, out: &mut impl Write) -> Result<()> {
    let script = ActionScript::from_json(content)?;
    let mut store = AccountStore::default();
    let states = store.run_script(&script)?;

    for state in &states {
        serde_json::to_writer(&mut *out, state)?;
        writeln!(out)?;
    }
    Ok(())
}

/// Press buttons on a fresh account, writing one JSON line per press.
fn press(buttons: &[Button], config: &TellerConfig, out: &mut impl Write) -> Result<()> {
    let mut store = AccountStore::default();

    for &button in buttons {
        let outcome = store.apply(button.action(config));
        let line = serde_json::json!({
            "button": button,
            "state": outcome.into_state(),
            "rejected": outcome.rejection(),
        });
        writeln!(out, "{line}")?;
    }
    Ok(())
}
