// Configuration management for the route table viewer
// Supports CLI arguments, config file (TOML), and environment variables

use clap::Parser;
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, SocketAddr};
use std::path::{Path, PathBuf};
use tracing::Level;

use crate::error::{AppError, AppResult};
use crate::routes::{Route, sample_routes};

/// Route Table Viewer - Sortable IPv4 routing table in the browser
#[derive(Parser, Debug, Clone)]
#[command(name = "route-table-viewer")]
#[command(author, version, about, long_about = None)]
pub struct CliArgs {
    /// Web server port
    #[arg(short, long, env = "RTV_PORT")]
    pub port: Option<u16>,

    /// Bind address
    #[arg(short, long, env = "RTV_BIND")]
    pub bind: Option<String>,

    /// Logging level (error, warn, info, debug, trace)
    #[arg(short, long, env = "RTV_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Path to configuration file
    #[arg(short, long, env = "RTV_CONFIG")]
    pub config: Option<PathBuf>,

    /// Directory holding the web UI
    #[arg(long, env = "RTV_STATIC_DIR")]
    pub static_dir: Option<PathBuf>,
}

/// Configuration file structure (TOML format)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ConfigFile {
    /// Server settings
    #[serde(default)]
    pub server: ServerConfig,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Seed routes; the built-in sample table is used when empty
    #[serde(default)]
    pub routes: Vec<Route>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Web server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Bind address (default: 127.0.0.1)
    #[serde(default = "default_bind_address")]
    pub bind_address: String,

    /// Directory served under /static
    #[serde(default = "default_static_dir")]
    pub static_dir: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
}

// Default value functions
fn default_port() -> u16 {
    8080
}
fn default_bind_address() -> String {
    "127.0.0.1".to_string()
}
fn default_static_dir() -> PathBuf {
    PathBuf::from("src/web/static")
}
fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            port: default_port(),
            bind_address: default_bind_address(),
            static_dir: default_static_dir(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            level: default_log_level(),
        }
    }
}

/// Merged configuration from all sources
#[derive(Debug, Clone)]
pub struct Config {
    pub addr: SocketAddr,
    pub log_level: Level,
    pub static_dir: PathBuf,
    pub routes: Vec<Route>,
}

impl Config {
    /// Load configuration from all sources (CLI args, config file, defaults)
    /// Priority: CLI args > Environment variables > Config file > Defaults
    pub fn load() -> AppResult<Self> {
        let cli_args = CliArgs::parse();

        let config_file = match &cli_args.config {
            Some(config_path) => read_config_file(config_path)?,
            None => {
                // Try loading from default locations
                let default_paths = [
                    PathBuf::from("config.toml"),
                    PathBuf::from("route-table-viewer.toml"),
                ];

                match default_paths.iter().find(|path| path.exists()) {
                    Some(path) => read_config_file(path)?,
                    None => ConfigFile::default(),
                }
            }
        };

        Self::merge(cli_args, config_file)
    }

    /// Merge CLI arguments over the config file
    pub fn merge(cli_args: CliArgs, config_file: ConfigFile) -> AppResult<Self> {
        let port = cli_args.port.unwrap_or(config_file.server.port);
        let bind_address = cli_args.bind.unwrap_or(config_file.server.bind_address);
        let ip: IpAddr = bind_address
            .parse()
            .map_err(|_| AppError::Config(format!("Invalid bind address: {}", bind_address)))?;

        let log_level = parse_log_level(
            cli_args
                .log_level
                .as_deref()
                .unwrap_or(&config_file.logging.level),
        )?;

        let static_dir = cli_args.static_dir.unwrap_or(config_file.server.static_dir);

        let routes = if config_file.routes.is_empty() {
            sample_routes()
        } else {
            config_file.routes
        };

        Ok(Config {
            addr: SocketAddr::new(ip, port),
            log_level,
            static_dir,
            routes,
        })
    }
}

fn read_config_file(path: &Path) -> AppResult<ConfigFile> {
    tracing::info!("Loading configuration from: {}", path.display());
    let config_content = std::fs::read_to_string(path)?;
    Ok(toml::from_str::<ConfigFile>(&config_content)?)
}

fn parse_log_level(level_str: &str) -> AppResult<Level> {
    match level_str.to_lowercase().as_str() {
        "error" => Ok(Level::ERROR),
        "warn" => Ok(Level::WARN),
        "info" => Ok(Level::INFO),
        "debug" => Ok(Level::DEBUG),
        "trace" => Ok(Level::TRACE),
        _ => Err(AppError::Config(format!("Invalid log level: {}", level_str))),
    }
}
