use anyhow::Result;
use clap::{Parser, Subcommand};

use bank_account::cli::{handle_history_command, handle_run_command, RunArgs};
use bank_account::config::{AccountPaths, Settings};

#[derive(Parser)]
#[command(
    name = "account",
    version,
    about = "In-memory bank account with validated deposits and withdrawals",
    long_about = "Runs deposits and withdrawals against a fresh bank account. \
                  Negative amounts and overdrafts are rejected, and every \
                  operation is written to an audit log."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply a sequence of operations to a new account
    Run(RunArgs),

    /// Show recent audit log entries
    #[command(alias = "log")]
    History {
        /// Number of entries to show
        #[arg(short = 'n', long)]
        count: Option<usize>,
    },

    /// Write default settings
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = AccountPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    match cli.command {
        Some(Commands::Run(args)) => {
            handle_run_command(&paths, &settings, args)?;
        }
        Some(Commands::History { count }) => {
            handle_history_command(&paths, &settings, count)?;
        }
        Some(Commands::Init) => {
            settings.save(&paths)?;
            println!("Initialized bank-account at: {}", paths.base_dir().display());
        }
        Some(Commands::Config) => {
            println!("bank-account Configuration");
            println!("==========================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Audit log:      {}", paths.audit_log().display());
            println!(
                "Initialized:    {}",
                if paths.is_initialized() { "Yes" } else { "No" }
            );
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Audit enabled:   {}", settings.audit_enabled);
            println!("  History length:  {}", settings.audit_recent_count);
        }
        None => {
            println!("account - in-memory bank account");
            println!();
            println!("Run 'account --help' for usage information.");
            println!("Example: account run deposit:1000 withdraw:500 balance");
        }
    }

    Ok(())
}
