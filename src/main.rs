//! Cursor Pool client - CLI entry point
//!
//! `cpc` is a diagnostic front end over the client library: it talks to the
//! bridge daemon over its Unix socket and prints command results to stdout.
//! Operation failures print as `error: <message>` on stderr with a failing
//! exit code.

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Duration;

use cursor_pool_client::config::error::ConfigError;
use cursor_pool_client::config::{default, loader::ConfigLoader, xdg};
use cursor_pool_client::{logging, ClientConfig, PoolClient};

/// Cursor Pool bridge client
#[derive(Parser)]
#[command(name = "cpc")]
#[command(version, about = "Cursor Pool bridge client")]
struct Cli {
    /// Socket path of the bridge daemon (overrides config)
    #[arg(long, global = true)]
    socket: Option<PathBuf>,

    /// Configuration file to load instead of the default location
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the cpc CLI
#[derive(Subcommand)]
enum Commands {
    /// Show bridge reachability and Cursor process state
    Status,

    /// Check whether a Cursor process is running (exit code 1 when running)
    Check,

    /// Wait until no Cursor process is running
    WaitClose {
        /// Deadline override, e.g. "5s" or "500ms" (default from config)
        #[arg(long, value_parser = humantime::parse_duration)]
        timeout: Option<Duration>,
    },

    /// Print the machine identifiers Cursor currently reports
    MachineIds,

    /// Show profile and quota for an account
    UserInfo {
        /// API token of the account
        #[arg(long)]
        token: String,
    },

    /// Show per-tier usage counters for an account
    Usage {
        /// API token of the account
        #[arg(long)]
        token: String,
    },

    /// Print the disclaimer text
    Disclaimer,

    /// Manage the configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Actions for the `config` subcommand.
#[derive(Subcommand)]
enum ConfigAction {
    /// Create a default configuration file
    Init,
    /// Show configuration file path
    Path,
    /// Show the loaded configuration and the resolved socket path
    Show,
}

#[tokio::main]
async fn main() -> ExitCode {
    // Parse CLI arguments before logging init so argument errors reach the
    // terminal unformatted.
    let cli = Cli::parse();
    logging::init();

    match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let Cli {
        socket,
        config,
        command,
    } = cli;
    let config_path = config.as_deref();
    let socket_override = socket.as_deref();

    match command {
        Commands::Config { action } => run_config_command(action, config_path),
        Commands::Status => {
            let (config, client) = connect(config_path, socket_override)?;
            Ok(run_status_command(&client, &config.resolve_socket_path()).await)
        }
        Commands::Check => {
            let (_, client) = connect(config_path, socket_override)?;
            run_check_command(&client).await
        }
        Commands::WaitClose { timeout } => {
            let (_, client) = connect(config_path, socket_override)?;
            run_wait_close_command(&client, timeout).await
        }
        Commands::MachineIds => {
            let (_, client) = connect(config_path, socket_override)?;
            run_machine_ids_command(&client).await
        }
        Commands::UserInfo { token } => {
            let (_, client) = connect(config_path, socket_override)?;
            run_user_info_command(&client, &token).await
        }
        Commands::Usage { token } => {
            let (_, client) = connect(config_path, socket_override)?;
            run_usage_command(&client, &token).await
        }
        Commands::Disclaimer => {
            let (_, client) = connect(config_path, socket_override)?;
            run_disclaimer_command(&client).await
        }
    }
}

/// Loads the configuration and applies the `--socket` override.
fn load_config(
    config_path: Option<&Path>,
    socket: Option<&Path>,
) -> Result<ClientConfig, ConfigError> {
    let mut config = match config_path {
        Some(path) => ConfigLoader::load_from_path(path)?,
        None => ConfigLoader::load_default()?,
    };
    if let Some(socket) = socket {
        config.socket_path = socket.display().to_string();
    }
    Ok(config)
}

fn connect(
    config_path: Option<&Path>,
    socket: Option<&Path>,
) -> Result<(ClientConfig, PoolClient), ConfigError> {
    let config = load_config(config_path, socket)?;
    let client = PoolClient::new(&config);
    Ok((config, client))
}

/// Probes the bridge and displays reachability and Cursor state.
///
/// Returns `ExitCode::SUCCESS` if the bridge answered, `ExitCode::FAILURE`
/// if it is unreachable.
async fn run_status_command(client: &PoolClient, socket: &Path) -> ExitCode {
    println!("Cursor Pool bridge");
    println!("  Socket: {}", socket.display());
    match client.check_cursor_running().await {
        Ok(running) => {
            println!("  Bridge: reachable");
            println!("  Cursor: {}", if running { "running" } else { "not running" });
            ExitCode::SUCCESS
        }
        Err(e) => {
            println!("  Bridge: not reachable ({e})");
            ExitCode::FAILURE
        }
    }
}

async fn run_check_command(client: &PoolClient) -> Result<ExitCode, Box<dyn std::error::Error>> {
    if client.check_cursor_running().await? {
        println!("running");
        Ok(ExitCode::FAILURE)
    } else {
        println!("not running");
        Ok(ExitCode::SUCCESS)
    }
}

async fn run_wait_close_command(
    client: &PoolClient,
    timeout: Option<Duration>,
) -> Result<ExitCode, Box<dyn std::error::Error>> {
    match timeout {
        Some(limit) => client.wait_for_cursor_close_within(limit).await?,
        None => client.wait_for_cursor_close().await?,
    }
    println!("Cursor closed");
    Ok(ExitCode::SUCCESS)
}

async fn run_machine_ids_command(
    client: &PoolClient,
) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let ids = client.get_machine_ids().await?;
    println!("machineId:    {}", ids.machine_id);
    println!("macMachineId: {}", ids.mac_machine_id);
    println!("devDeviceId:  {}", ids.dev_device_id);
    println!("sqmId:        {}", ids.sqm_id);
    Ok(ExitCode::SUCCESS)
}

async fn run_user_info_command(
    client: &PoolClient,
    token: &str,
) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let info = client.get_user_info(token).await?;
    println!("Username: {}", info.username);
    println!("Level:    {}", info.level);
    println!(
        "Usage:    {} / {} ({} remaining)",
        info.used_count,
        info.total_count,
        info.remaining_count()
    );
    if !info.expire_time.is_empty() {
        println!("Expires:  {}", info.expire_time);
    }
    if info.is_expired {
        println!("Status:   expired");
    }
    Ok(ExitCode::SUCCESS)
}

async fn run_usage_command(
    client: &PoolClient,
    token: &str,
) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let usage = client.get_usage(token).await?;
    println!(
        "Premium:  {}",
        format_quota(usage.premium_used, usage.premium_limit)
    );
    println!(
        "Standard: {}",
        format_quota(usage.standard_used, usage.standard_limit)
    );
    Ok(ExitCode::SUCCESS)
}

async fn run_disclaimer_command(
    client: &PoolClient,
) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let disclaimer = client.get_disclaimer().await?;
    println!("{}", disclaimer.content);
    Ok(ExitCode::SUCCESS)
}

fn run_config_command(
    action: ConfigAction,
    config_path: Option<&Path>,
) -> Result<ExitCode, Box<dyn std::error::Error>> {
    match action {
        ConfigAction::Init => {
            let path = default::create_default_config()?;
            println!("Created configuration at {}", path.display());
        }
        ConfigAction::Path => {
            println!("{}", xdg::config_path().display());
        }
        ConfigAction::Show => {
            let config = load_config(config_path, None)?;
            println!("{config:#?}");
            println!("resolved socket: {}", config.resolve_socket_path().display());
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn format_quota(used: i64, limit: Option<i64>) -> String {
    match limit {
        Some(limit) => format!("{used} / {limit}"),
        None => format!("{used} / unlimited"),
    }
}
