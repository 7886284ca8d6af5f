use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use super::FileConfig;
use crate::constants::{APP_DIR_NAME, CONFIG_FILE_NAME};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse config file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

/// Loads settings from a YAML file
///
/// # Arguments
///
/// * `file_path` - Path to the YAML configuration file
///
/// # Errors
///
/// Returns an error if:
/// * The file cannot be read
/// * The YAML content cannot be parsed into a FileConfig
pub fn load_file_config(file_path: &Path) -> Result<FileConfig, ConfigError> {
    let yaml_str = fs::read_to_string(file_path).map_err(|source| ConfigError::Read {
        path: file_path.to_path_buf(),
        source,
    })?;
    // An empty file is a valid, empty configuration
    if yaml_str.trim().is_empty() {
        return Ok(FileConfig::default());
    }
    let config: FileConfig = serde_yaml::from_str(&yaml_str).map_err(|source| ConfigError::Parse {
        path: file_path.to_path_buf(),
        source,
    })?;
    info!("Loaded configuration from {}", file_path.display());
    Ok(config)
}

/// Returns the per-user config file path if one exists
pub fn default_config_path() -> Option<PathBuf> {
    let path = dirs::config_dir()?.join(APP_DIR_NAME).join(CONFIG_FILE_NAME);
    path.is_file().then_some(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;
    use std::io::Write;

    #[test]
    fn test_load_file_config() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "address: 127.0.0.1:3000\nformat: json\nno_color: true\nfilepath: /tmp/chat.json"
        )
        .unwrap();

        let config = load_file_config(file.path()).unwrap();
        assert_eq!(config.address.as_deref(), Some("127.0.0.1:3000"));
        assert_eq!(config.format, Some(OutputFormat::Json));
        assert_eq!(config.no_color, Some(true));
        assert_eq!(config.filepath, Some(PathBuf::from("/tmp/chat.json")));
        assert_eq!(config.log_requests, None);
    }

    #[test]
    fn test_load_empty_file_config() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let config = load_file_config(file.path()).unwrap();
        assert!(config.format.is_none());
    }

    #[test]
    fn test_load_file_config_errors() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.yaml");
        assert!(matches!(
            load_file_config(&missing),
            Err(ConfigError::Read { .. })
        ));

        let bad = dir.path().join("bad.yaml");
        fs::write(&bad, "format: markdown\n").unwrap();
        assert!(matches!(load_file_config(&bad), Err(ConfigError::Parse { .. })));

        let unknown = dir.path().join("unknown.yaml");
        fs::write(&unknown, "colour: false\n").unwrap();
        assert!(matches!(
            load_file_config(&unknown),
            Err(ConfigError::Parse { .. })
        ));
    }
}
