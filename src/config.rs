use crate::error::{Result, UserGraphError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = ".usergraph.yml";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerSettings,

    #[serde(default)]
    pub seed: SeedSettings,

    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Serve the GraphiQL explorer on `GET /graphql`.
    #[serde(default = "default_true")]
    pub graphiql: bool,

    /// Development posture: debug-level logging.
    #[serde(default = "default_true")]
    pub debug: bool,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    5001
}

fn default_true() -> bool {
    true
}

fn default_seed_count() -> usize {
    10
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            graphiql: default_true(),
            debug: default_true(),
        }
    }
}

impl ServerSettings {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeedSettings {
    #[serde(default = "default_seed_count")]
    pub users: usize,

    #[serde(default = "default_seed_count")]
    pub humans: usize,

    #[serde(default = "default_seed_count")]
    pub droids: usize,
}

impl Default for SeedSettings {
    fn default() -> Self {
        Self {
            users: default_seed_count(),
            humans: default_seed_count(),
            droids: default_seed_count(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoggingSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

impl AppConfig {
    /// Load from an explicit path, or search upward from `start_path`.
    /// With no explicit path and no file found, the defaults are used.
    pub fn load(explicit: Option<&Path>, start_path: &Path) -> Result<Self> {
        let config_path = match explicit {
            Some(path) if !path.exists() => {
                return Err(UserGraphError::Config(format!(
                    "Config file not found: {}",
                    path.display()
                )));
            }
            Some(path) => path.to_path_buf(),
            None => match Self::find_config_file(start_path) {
                Some(path) => path,
                None => return Ok(Self::default()),
            },
        };

        Self::load_file(&config_path)
    }

    pub fn load_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: AppConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    pub fn find_config_file(start_path: &Path) -> Option<PathBuf> {
        let mut current = start_path.to_path_buf();
        loop {
            let config_path = current.join(CONFIG_FILE_NAME);
            if config_path.exists() {
                return Some(config_path);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_yaml::to_string(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.server.bind_addr(), "127.0.0.1:5001");
        assert!(config.server.graphiql);
        assert!(config.server.debug);
        assert_eq!(config.seed.users, 10);
        assert_eq!(config.seed.humans, 10);
        assert_eq!(config.seed.droids, 10);
        assert!(config.logging.file.is_none());
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config = AppConfig::load(None, temp_dir.path()).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_explicit_missing_file_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("nope.yml");
        let err = AppConfig::load(Some(&missing), temp_dir.path()).unwrap_err();
        assert!(matches!(err, UserGraphError::Config(_)));
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(
            temp_dir.path().join(CONFIG_FILE_NAME),
            "server:\n  port: 8080\nseed:\n  users: 3\n",
        )
        .unwrap();

        let nested = temp_dir.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();

        let config = AppConfig::load(None, &nested).unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.seed.users, 3);
        assert_eq!(config.seed.droids, 10);
    }

    #[test]
    fn test_save_and_reload() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(CONFIG_FILE_NAME);
        let mut config = AppConfig::default();
        config.server.graphiql = false;
        config.logging.file = Some(PathBuf::from("logs/usergraph.log"));
        config.save(&path).unwrap();

        let loaded = AppConfig::load_file(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_invalid_yaml_is_reported() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "server: [not, a, map]\n").unwrap();
        let err = AppConfig::load(Some(&path), temp_dir.path()).unwrap_err();
        assert!(matches!(err, UserGraphError::Yaml(_)));
    }
}
