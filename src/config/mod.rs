mod parser;

use std::path::PathBuf;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::cli::Cli;
use crate::constants::{DEFAULT_ADDRESS, DEFAULT_WRAP_WIDTH};

pub use parser::{default_config_path, load_file_config, ConfigError};

/// Format rendered conversations are written in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Decorated, word-wrapped transcript
    #[default]
    Plain,
    /// Message list re-encoded as JSON
    Json,
}

/// Where rendered conversations go
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    Stdout,
    /// A file that must not exist before the first write
    File(PathBuf),
}

/// Rendering settings, fixed for the lifetime of the process
#[derive(Debug, Clone)]
pub struct RenderConfig {
    pub format: OutputFormat,
    /// Whether ANSI styling is wanted; ignored when writing to a file
    pub color: bool,
    pub target: Target,
    /// Column width plain transcripts are wrapped to
    pub width: usize,
}

impl RenderConfig {
    /// Creates a render configuration with the default wrap width
    ///
    /// An empty `filepath` is treated as absent.
    pub fn new(format: OutputFormat, color: bool, filepath: Option<PathBuf>) -> Self {
        let target = match filepath {
            Some(path) if !path.as_os_str().is_empty() => Target::File(path),
            _ => Target::Stdout,
        };
        RenderConfig {
            format,
            color,
            target,
            width: DEFAULT_WRAP_WIDTH,
        }
    }
}

/// Listener settings
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub address: String,
    pub log_requests: bool,
}

/// Optional settings read from a YAML file
#[derive(Debug, Deserialize, Default, Clone, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    /// Address to listen on
    pub address: Option<String>,
    /// Output format: plain or json
    pub format: Option<OutputFormat>,
    /// Disable colored output
    pub no_color: Option<bool>,
    /// Destination file for rendered messages
    pub filepath: Option<PathBuf>,
    /// Log every incoming HTTP request
    pub log_requests: Option<bool>,
}

/// Fully resolved settings for one run
#[derive(Debug, Clone)]
pub struct Settings {
    pub server: ServerConfig,
    pub render: RenderConfig,
}

impl Settings {
    /// Merges command line flags over file settings over defaults
    pub fn resolve(cli: &Cli, file: FileConfig) -> Self {
        let no_color = cli.no_color || file.no_color.unwrap_or(false);
        let format = cli.format.or(file.format).unwrap_or_default();
        let filepath = cli.filepath.clone().or(file.filepath);

        Settings {
            server: ServerConfig {
                address: cli
                    .address
                    .clone()
                    .or(file.address)
                    .unwrap_or_else(|| DEFAULT_ADDRESS.to_string()),
                log_requests: cli.log_requests || file.log_requests.unwrap_or(false),
            },
            render: RenderConfig::new(format, !no_color, filepath),
        }
    }
}
