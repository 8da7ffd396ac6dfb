//! Configuration management for repokeep
//!
//! Configuration is loaded with the following priority (highest to lowest):
//! 1. CLI flags
//! 2. Environment variables (REPOKEEP_*)
//! 3. Config file (~/.config/repokeep/config.toml)
//! 4. Default values

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Git invocation configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct GitConfig {
    /// Name or path of the git executable
    pub program: String,

    /// Default remote name
    pub remote: String,
}

impl Default for GitConfig {
    fn default() -> Self {
        Self {
            program: "git".to_string(),
            remote: "origin".to_string(),
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Git configuration
    pub git: GitConfig,
}

impl Config {
    /// Load configuration from the default config file location
    ///
    /// Returns default config if file doesn't exist
    pub fn load() -> Result<Self> {
        let config_path = Self::default_config_path();

        if let Some(path) = config_path {
            if path.exists() {
                return Self::load_from_file(&path);
            }
        }

        Ok(Self::default())
    }

    /// Load configuration from a specific file
    pub fn load_from_file(path: &PathBuf) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(Error::Io)?;
        toml::from_str(&contents)
            .map_err(|e| Error::Config(format!("Failed to parse config: {}", e)))
    }

    /// Get the default config file path
    ///
    /// Returns `~/.config/repokeep/config.toml` on Unix
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("repokeep").join("config.toml"))
    }

    /// Apply environment variable overrides
    ///
    /// Supported variables:
    /// - REPOKEEP_GIT_PATH: Name or path of the git executable
    /// - REPOKEEP_REMOTE: Default remote name
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(program) = std::env::var("REPOKEEP_GIT_PATH") {
            self.git.program = program;
        }

        if let Ok(remote) = std::env::var("REPOKEEP_REMOTE") {
            self.git.remote = remote;
        }

        self
    }

    /// Apply CLI flag overrides
    pub fn with_cli_overrides(mut self, git_path: Option<String>, remote: Option<String>) -> Self {
        if let Some(program) = git_path {
            self.git.program = program;
        }

        if let Some(remote) = remote {
            self.git.remote = remote;
        }

        self
    }

    /// Load configuration with all overrides applied
    ///
    /// Priority: CLI > env > config file > defaults
    pub fn load_with_overrides(git_path: Option<String>, remote: Option<String>) -> Result<Self> {
        Ok(Self::load()?
            .with_env_overrides()
            .with_cli_overrides(git_path, remote))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.git.program, "git");
        assert_eq!(config.git.remote, "origin");
    }

    #[test]
    fn test_cli_overrides() {
        let config = Config::default()
            .with_cli_overrides(Some("/custom/git".to_string()), Some("upstream".to_string()));

        assert_eq!(config.git.program, "/custom/git");
        assert_eq!(config.git.remote, "upstream");
    }

    #[test]
    fn test_parse_toml() {
        let toml = r#"
[git]
program = "/usr/local/bin/git"
remote = "upstream"
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.git.program, "/usr/local/bin/git");
        assert_eq!(config.git.remote, "upstream");
    }

    #[test]
    fn test_partial_toml() {
        let toml = r#"
[git]
remote = "upstream"
"#;
        let config: Config = toml::from_str(toml).unwrap();
        // program should use default
        assert_eq!(config.git.program, "git");
        assert_eq!(config.git.remote, "upstream");
    }
}
