mod commands;
mod config;
mod output;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use config::{Config, OutputFormat, DEFAULT_CONFIG_FILE};

#[derive(Parser)]
#[command(name = "gradedesk")]
#[command(version, about = "GradeDesk CLI - check teacher registration forms", long_about = None)]
struct Cli {
    /// Config file
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Output format (overrides the config file)
    #[arg(long, global = true, value_enum)]
    format: Option<OutputFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a whole registration form and report every field
    Check(CheckArgs),

    /// Show the password requirement checklist
    Password {
        /// Password to check
        password: String,

        /// Full name entered on the form
        #[arg(long, default_value = "")]
        full_name: String,

        /// Email entered on the form
        #[arg(long, default_value = "")]
        email: String,

        /// Username entered on the form
        #[arg(long, default_value = "")]
        username: String,
    },

    /// Format a phone number with the registration page mask
    Mask {
        /// Phone number as typed
        phone: String,
    },
}

#[derive(Args, Debug, Default)]
pub struct CheckArgs {
    /// Form values as a .toml or .json file
    file: Option<PathBuf>,

    #[arg(long)]
    full_name: Option<String>,

    #[arg(long)]
    phone: Option<String>,

    #[arg(long)]
    email: Option<String>,

    #[arg(long)]
    username: Option<String>,

    /// Password (password1)
    #[arg(long)]
    password: Option<String>,

    /// Password confirmation (password2)
    #[arg(long)]
    confirm: Option<String>,
}

fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    let mut config = Config::load(&cli.config)?;
    if let Some(format) = cli.format {
        config.output.format = format;
    }
    if cli.no_color {
        config.output.color = false;
    }

    init_tracing(&config.log.level);
    if !config.output.color {
        colored::control::set_override(false);
    }
    tracing::debug!(config = ?cli.config, format = ?config.output.format, "configuration loaded");

    // Execute command
    match cli.command {
        Commands::Check(args) => {
            commands::check::execute(args, config.output.format)?;
        }
        Commands::Password {
            password,
            full_name,
            email,
            username,
        } => {
            commands::password::execute(
                &password,
                &full_name,
                &email,
                &username,
                config.output.format,
            )?;
        }
        Commands::Mask { phone } => {
            commands::mask::execute(&phone, config.output.format)?;
        }
    }

    Ok(())
}
