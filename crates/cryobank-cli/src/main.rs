use std::path::PathBuf;

use clap::{Parser, Subcommand};
use eyre::Result;
use tracing_subscriber::EnvFilter;

use cryobank_cli::commands::{self, EvaluateOptions};
use cryobank_cli::config::{self, CryobankConfig, LogFormat};

#[derive(Parser)]
#[command(name = "cryobank")]
#[command(about = "Fertility treatment recommendation and note composition")]
struct Cli {
    /// Log output format (overrides the config file)
    #[arg(long, global = true, value_enum)]
    log_format: Option<LogFormat>,

    /// Config file location
    #[arg(long, global = true, env = config::CONFIG_ENV)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Recommend IUI or IVF for a diagnosis form (JSON)
    Evaluate {
        /// Form JSON file, `-` or omitted for stdin
        #[arg(long, short)]
        input: Option<PathBuf>,
        /// Patient reference used in the note and audit trail
        #[arg(long)]
        patient: Option<String>,
        /// Apply the recommendation to the selected treatment
        #[arg(long)]
        apply: bool,
        /// Compose the clinical note
        #[arg(long)]
        note: bool,
        /// Print the full report as JSON
        #[arg(long)]
        json: bool,
        /// Diagnosis codes (e.g. TF,MF), replacing the ones on the form
        #[arg(long, value_delimiter = ',')]
        codes: Vec<String>,
        /// Clinician notes, replacing the ones on the form
        #[arg(long)]
        notes: Option<String>,
    },
    /// Manage the config file
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Print the effective config
    Show,
    /// Write a fresh config file
    Init {
        /// Clinician name used on notes
        #[arg(long)]
        clinician: Option<String>,
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

fn init_tracing(format: LogFormat) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    // Logs go to stderr so `--json` output on stdout stays machine-readable.
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    match format {
        LogFormat::Text => builder.init(),
        LogFormat::Json => builder.json().init(),
    }
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    let config_path = match cli.config {
        Some(path) => path,
        None => config::config_path()?,
    };
    let config = config::load_or_default(&config_path)?;
    init_tracing(cli.log_format.unwrap_or(config.log_format));

    match cli.command {
        Commands::Evaluate {
            input,
            patient,
            apply,
            note,
            json,
            codes,
            notes,
        } => {
            let form = commands::read_form(input.as_deref())?;
            let options = EvaluateOptions {
                patient,
                apply,
                note,
                codes,
                notes,
            };
            let report = commands::evaluate_form(&form, &options, &config)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print!("{}", commands::format_report(&report));
            }
        }
        Commands::Config { command } => match command {
            ConfigCommands::Show => {
                println!("{}", serde_json::to_string_pretty(&config)?);
            }
            ConfigCommands::Init { clinician, force } => {
                if config_path.exists() && !force {
                    return Err(eyre::eyre!(
                        "config already exists at {} (use --force to overwrite)",
                        config_path.display()
                    ));
                }
                let fresh = CryobankConfig {
                    clinician: clinician.unwrap_or(config.clinician),
                    ..CryobankConfig::default()
                };
                config::save_config(&config_path, &fresh)?;
                println!("wrote {}", config_path.display());
            }
        },
    }

    Ok(())
}
