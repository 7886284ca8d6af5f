use std::path::PathBuf;

use clap::Parser;

use crate::config::OutputFormat;

/// Command line interface for the application
///
/// Flags left unset fall back to the config file, then to built-in defaults.
#[derive(Parser, Debug)]
#[command(name = "promptscope", version)]
#[command(about = "Prints chat completion payloads sent by API clients as readable transcripts")]
pub struct Cli {
    /// Address to listen on (default: localhost:8080)
    #[arg(long, env = "PROMPTSCOPE_ADDRESS")]
    pub address: Option<String>,

    /// Messages output format (default: plain)
    #[arg(long, value_enum, env = "PROMPTSCOPE_FORMAT")]
    pub format: Option<OutputFormat>,

    /// Disable colored output
    #[arg(long, env = "PROMPTSCOPE_NO_COLOR")]
    pub no_color: bool,

    /// If specified, messages are saved to this file instead of stdout.
    /// The file must not exist yet. Example: /path/to/file.json
    #[arg(long, env = "PROMPTSCOPE_FILEPATH")]
    pub filepath: Option<PathBuf>,

    /// Log every incoming HTTP request
    #[arg(long)]
    pub log_requests: bool,

    /// Sets the logging verbosity level for the application
    /// Possible values: "error", "warn", "info", "debug", "trace"
    /// Default: "info"
    #[arg(long, default_value_t = String::from("info"))]
    pub logging_level: String,

    /// Also write logs to a daily rotating file in the "logs" directory
    #[arg(long)]
    pub log_file: bool,

    /// Path to a YAML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}
