//! Reference host for the create-user form.

mod host;

use std::io;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::error;

use common::{init_tracing, AppResult, FormConfig};
use create_user_form::SubmitOutcome;

/// Exit code when a submission was rejected
const EXIT_REJECTED: u8 = 2;

#[derive(Parser)]
#[command(name = "create-user")]
#[command(about = "Create a user through the registration form")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Validation mode: accumulate or first
    #[arg(long, global = true)]
    mode: Option<String>,

    /// Minimum password length
    #[arg(long, global = true)]
    min_length: Option<usize>,

    /// Maximum password length
    #[arg(long, global = true)]
    max_length: Option<usize>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Prompt for credentials until a user is created
    Interactive,
    /// Submit one username/password pair
    Submit {
        #[arg(long)]
        username: String,
        #[arg(long, env = "CREATE_USER_PASSWORD", hide_env_values = true)]
        password: String,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the active password rules
    Rules,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Load configuration, then apply command-line overrides
    let mut config = FormConfig::from_env();
    if let Some(mode) = cli.mode {
        config.validation_mode = mode;
    }
    if let Some(min) = cli.min_length {
        config.password_min_length = min;
    }
    if let Some(max) = cli.max_length {
        config.password_max_length = max;
    }

    init_tracing(cli.verbose, &config.log_level);
    tracing::debug!(?config, "Configuration loaded");

    match run(cli.command, &config) {
        Ok(code) => code,
        Err(e) => {
            error!("Command failed: {}", e);
            eprintln!("{}", e.user_message());
            ExitCode::FAILURE
        }
    }
}

fn run(command: Commands, config: &FormConfig) -> AppResult<ExitCode> {
    let options = config.validation_options()?;
    let mut stdout = io::stdout().lock();

    match command {
        Commands::Interactive => {
            let created = host::run_interactive(options, io::stdin().lock(), &mut stdout)?;
            Ok(if created {
                ExitCode::SUCCESS
            } else {
                ExitCode::from(EXIT_REJECTED)
            })
        }
        Commands::Submit {
            username,
            password,
            json,
        } => match host::submit_once(options, &username, &password, json, &mut stdout)? {
            SubmitOutcome::Created => Ok(ExitCode::SUCCESS),
            SubmitOutcome::Rejected => Ok(ExitCode::from(EXIT_REJECTED)),
        },
        Commands::Rules => {
            host::print_rules(&options, &mut stdout)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}
