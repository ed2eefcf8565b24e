use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::{Result, StockroomError};

/// Optional settings file (`stockroom.yaml`). Every field has a built-in
/// default; CLI flags take precedence over the file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StockroomConfig {
    /// Catalog data file used by Save and Load.
    pub data_file: Option<PathBuf>,
    /// Log level directive for the tracing subscriber.
    pub log_level: Option<String>,
}

impl StockroomConfig {
    /// Load settings from `path`. A missing file yields the defaults; an
    /// unreadable or unparseable file is an error.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| {
            StockroomError::Config(format!("Failed to read config file {}: {}", path.display(), e))
        })?;
        let config = serde_yaml_ng::from_str(&content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_yields_defaults() {
        let config = StockroomConfig::load(Path::new("/nonexistent/stockroom.yaml")).unwrap();
        assert_eq!(config.data_file, None);
        assert_eq!(config.log_level, None);
    }

    #[test]
    fn test_load_full_config() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("stockroom.yaml");
        std::fs::write(&path, "data_file: /tmp/items.txt\nlog_level: debug\n").unwrap();

        let config = StockroomConfig::load(&path).unwrap();
        assert_eq!(config.data_file, Some(PathBuf::from("/tmp/items.txt")));
        assert_eq!(config.log_level, Some("debug".to_string()));
    }

    #[test]
    fn test_malformed_config_errors() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("stockroom.yaml");
        std::fs::write(&path, "data_file: [not: valid").unwrap();

        assert!(StockroomConfig::load(&path).is_err());
    }
}
