mod commands;
pub mod config;
mod formatting;
mod game;
mod roster;
mod tui;

use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use roster::RosterStore;

// Default Configuration Constants
/// Default log level when not specified
const DEFAULT_LOG_LEVEL: &str = "info";

/// Default log file path (no logging to file)
const DEFAULT_LOG_FILE: &str = "/dev/null";

#[derive(Parser)]
#[command(name = "touchline")]
#[command(
    about = "Terminal match scoreboard",
    long_about = "Terminal match scoreboard\n\nIf no command is specified, the program starts the interactive scoreboard."
)]
struct Cli {
    /// Set log level (trace, debug, info, warn, error)
    #[arg(short = 'L', long, global = true, default_value = DEFAULT_LOG_LEVEL)]
    log_level: String,

    /// Log file path (default: /dev/null for no logging)
    #[arg(short = 'F', long, global = true, default_value = DEFAULT_LOG_FILE)]
    log_file: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage the persisted player roster
    Roster {
        #[command(subcommand)]
        command: RosterCommands,
    },
    /// Display current configuration
    Config,
}

#[derive(Subcommand)]
enum RosterCommands {
    /// List all players
    List,
    /// Add a player (id is assigned automatically)
    Add {
        /// Player name
        name: String,
    },
    /// Remove a player by id
    Remove {
        /// Player id as shown by `roster list`
        id: String,
    },
}

fn init_logging(log_level: &str, log_file: &str) {
    let level = match log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };
    let file = match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)
    {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Failed to open log file {}: {}", log_file, e);
            return;
        }
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", e);
    }
}

/// Handle the config command - display current configuration
fn handle_config_command() {
    let cfg = config::read();

    let (path_str, exists) = match config::get_config_path() {
        Some(path) => {
            let exists = path.exists();
            (path.display().to_string(), exists)
        }
        None => ("Unable to determine config path".to_string(), false),
    };

    println!(
        "Configuration File: {} (Exists: {})",
        path_str,
        if exists { "yes" } else { "no" }
    );
    println!();
    println!("Current Configuration:");
    println!("=====================");
    println!("log_level: {}", cfg.log_level);
    println!("log_file: {}", cfg.log_file);
    println!(
        "half_length_secs: {} seconds ({} minutes)",
        cfg.half_length_secs,
        cfg.half_length_secs / 60
    );
    println!("team_us: {}", cfg.team_us);
    println!("team_them: {}", cfg.team_them);
    println!("time_format: {}", cfg.time_format);
    println!();
    println!("[theme]");
    println!("us_fg: {:?}", cfg.theme.us_fg);
    println!("them_fg: {:?}", cfg.theme.them_fg);
    println!("clock_running_fg: {:?}", cfg.theme.clock_running_fg);
    println!("accent_fg: {:?}", cfg.theme.accent_fg);
}

/// Resolve log configuration from CLI args and config file
/// CLI arguments take precedence over config file
fn resolve_log_config<'a>(cli: &'a Cli, config: &'a config::Config) -> (&'a str, &'a str) {
    let log_level = if cli.log_level != DEFAULT_LOG_LEVEL {
        cli.log_level.as_str()
    } else {
        config.log_level.as_str()
    };

    let log_file = if cli.log_file != DEFAULT_LOG_FILE {
        cli.log_file.as_str()
    } else {
        config.log_file.as_str()
    };

    (log_level, log_file)
}

/// Run the interactive scoreboard
async fn run_tui_mode(config: config::Config) -> Result<(), std::io::Error> {
    let state = tui::AppState::new(config, RosterStore::open());
    tui::run(state).await
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = config::read();

    let (log_level, log_file) = resolve_log_config(&cli, &config);
    init_logging(log_level, log_file);

    match cli.command {
        None => run_tui_mode(config).await?,
        Some(Commands::Config) => handle_config_command(),
        Some(Commands::Roster { command }) => {
            let store = RosterStore::open();
            match command {
                RosterCommands::List => commands::roster::list(&store)?,
                RosterCommands::Add { name } => commands::roster::add(&store, name)?,
                RosterCommands::Remove { id } => commands::roster::remove(&store, id)?,
            }
        }
    }

    Ok(())
}
