//! CLI definitions and entry point

use clap::{Parser, Subcommand};

use super::commands::{self, Context};
use screener::output::OutputMode;

/// screener - Screen literature-review articles one at a time
#[derive(Parser, Debug)]
#[command(
    name = "screener",
    version,
    about = "Screen literature-review articles one at a time",
    long_about = "Screen articles assigned to you in a spreadsheet-backed review.\n\n\
                  Log in with your name and role, step through your queue and record\n\
                  include/exclude decisions with a reason. Decisions are written back\n\
                  to the spreadsheet as you go."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// API endpoint (overrides SCREENER_API_URL and config.toml)
    #[arg(long, global = true, value_name = "URL")]
    pub api_url: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write a config file with the API endpoint and default reasons
    Init {
        /// Overwrite an existing config file
        #[arg(short, long)]
        force: bool,
    },

    /// List reviewers known to the spreadsheet
    Reviewers,

    /// Log in and review your assigned articles
    Review {
        /// Your name as listed by `screener reviewers`
        #[arg(short, long)]
        reviewer: Option<String>,

        /// Role: C1 (first reviewer) or C2 (second reviewer)
        #[arg(long)]
        role: Option<String>,
    },

    /// Show your progress summary
    Summary {
        /// Reviewer name (defaults to the saved login)
        #[arg(short, long)]
        reviewer: Option<String>,

        /// Role (defaults to the saved login)
        #[arg(long)]
        role: Option<String>,
    },

    /// Show the saved login and configured endpoint
    Status,

    /// Show the reason catalog
    Reasons {
        /// Role to show reasons for (defaults to the saved login, else C1)
        #[arg(long)]
        role: Option<String>,
    },

    /// Forget the saved login
    Logout,

    /// Show version
    Version,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };
    let ctx = Context {
        mode: output_mode,
        api_url: cli.api_url,
    };

    match cli.command {
        Some(Command::Init { force }) => commands::init(&ctx, force),
        Some(Command::Reviewers) => commands::reviewers(&ctx),
        Some(Command::Review { reviewer, role }) => {
            commands::review(&ctx, reviewer.as_deref(), role.as_deref())
        },
        Some(Command::Summary { reviewer, role }) => {
            commands::summary(&ctx, reviewer.as_deref(), role.as_deref())
        },
        Some(Command::Status) => commands::status(&ctx),
        Some(Command::Reasons { role }) => commands::reasons(&ctx, role.as_deref()),
        Some(Command::Logout) => commands::logout(&ctx),
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION")
                    })
                );
            } else {
                println!("screener v{}", env!("CARGO_PKG_VERSION"));
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION"),
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("screener v{}", env!("CARGO_PKG_VERSION"));
                println!("\nRun 'screener --help' for usage");
                println!("Run 'screener init --api-url <URL>' to get started");
            }
            Ok(())
        },
    }
}
