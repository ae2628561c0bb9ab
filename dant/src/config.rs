//! `dant.toml` loading.
//!
//! Every table and field is optional; anything left out takes its default.
//!
//! ```toml
//! verbose = false
//!
//! [files]
//! extensions = ["dan"]
//! recursive = true
//!
//! [check]
//! jobs = 8
//! fail_fast = false
//!
//! [output]
//! format = "text"
//! color = true
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{DantError, Result};

/// Name looked up in each search directory.
pub const CONFIG_FILE_NAME: &str = "dant.toml";

/// Worker count used if the CPU count comes back as zero.
const FALLBACK_JOBS: usize = 4;

/// Settings shared by all commands.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Log at debug level.
    pub verbose: bool,
    /// Which files count as DAN documents.
    pub files: FilesConfig,
    /// Defaults for `dant check`.
    pub check: CheckConfig,
    /// Defaults for printed output.
    pub output: OutputConfig,
}

/// Directory walking rules.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct FilesConfig {
    /// Extensions picked up inside directories, with or without the dot.
    pub extensions: Vec<String>,
    /// Walk subdirectories too.
    pub recursive: bool,
}

impl Default for FilesConfig {
    fn default() -> Self {
        Self {
            extensions: dan_lex::language::FILE_EXTENSIONS
                .iter()
                .map(|ext| ext.to_string())
                .collect(),
            recursive: true,
        }
    }
}

/// `dant check` defaults.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CheckConfig {
    /// Worker threads.
    pub jobs: usize,
    /// Start no new file once one has failed.
    pub fail_fast: bool,
}

impl Default for CheckConfig {
    fn default() -> Self {
        let jobs = match num_cpus::get() {
            0 => FALLBACK_JOBS,
            n => n,
        };
        Self {
            jobs,
            fail_fast: false,
        }
    }
}

/// Output defaults.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    /// `text` or `json`.
    pub format: String,
    /// Allow ANSI colors on a terminal.
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: "text".to_string(),
            color: true,
        }
    }
}

impl Config {
    /// Load the first `dant.toml` found in the working directory,
    /// `~/.config/dant/` or the platform config directory. Defaults if none
    /// exists.
    pub fn load() -> Result<Self> {
        match Self::search_paths().into_iter().find(|path| path.is_file()) {
            Some(path) => Self::load_from_path(&path),
            None => {
                debug!("no {} found, using defaults", CONFIG_FILE_NAME);
                Ok(Self::default())
            },
        }
    }

    /// Load an explicit file. Unlike [`Config::load`], a missing file is an
    /// error.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "loading configuration");
        let content = std::fs::read_to_string(path).map_err(|e| {
            DantError::Config(format!("Cannot read {}: {}", path.display(), e))
        })?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| DantError::Config(format!("Failed to parse configuration: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Candidate locations, in lookup order.
    fn search_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from(CONFIG_FILE_NAME)];
        paths.extend(dirs::home_dir().map(|home| home.join(".config").join("dant")));
        paths.extend(dirs::config_dir().map(|dir| dir.join("dant")));
        for dir in paths.iter_mut().skip(1) {
            dir.push(CONFIG_FILE_NAME);
        }
        paths
    }

    /// Reject values no command can work with.
    pub fn validate(&self) -> Result<()> {
        let problem = if !matches!(self.output.format.as_str(), "text" | "json") {
            format!(
                "output.format must be \"text\" or \"json\", got \"{}\"",
                self.output.format
            )
        } else if self.check.jobs == 0 {
            "check.jobs must be at least 1".to_string()
        } else if self.files.extensions.is_empty() {
            "files.extensions must list at least one extension".to_string()
        } else {
            return Ok(());
        };
        Err(DantError::Config(problem))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, content: &str) -> PathBuf {
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert!(!config.verbose);
        assert_eq!(config.files.extensions, vec![".dan"]);
        assert!(config.files.recursive);
        assert!(config.check.jobs >= 1);
        assert!(!config.check.fail_fast);
        assert_eq!(config.output.format, "text");
        assert!(config.output.color);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_saved_config_loads_back() {
        let config = Config {
            verbose: true,
            files: FilesConfig {
                extensions: vec![".dan".to_string(), "cfg".to_string()],
                recursive: false,
            },
            check: CheckConfig {
                jobs: 2,
                fail_fast: true,
            },
            output: OutputConfig {
                format: "json".to_string(),
                color: false,
            },
        };
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, &toml::to_string_pretty(&config).unwrap());

        assert_eq!(Config::load_from_path(&path).unwrap(), config);
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "[check]\nfail_fast = true\n");

        let config = Config::load_from_path(&path).unwrap();
        assert!(config.check.fail_fast);
        assert_eq!(config.check.jobs, CheckConfig::default().jobs);
        assert_eq!(config.output, OutputConfig::default());
        assert_eq!(config.files, FilesConfig::default());
    }

    #[test]
    fn test_missing_explicit_file() {
        let result = Config::load_from_path(Path::new("/nonexistent/dant.toml"));
        assert!(matches!(result, Err(DantError::Config(_))));
    }

    #[test]
    fn test_malformed_file() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "verbose = \"yes\"");

        let err = Config::load_from_path(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse configuration"));
    }

    #[test]
    fn test_unknown_format_rejected() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "[output]\nformat = \"yaml\"\n");

        let err = Config::load_from_path(&path).unwrap_err();
        assert!(err.to_string().contains("yaml"));
    }

    #[test]
    fn test_zero_jobs_and_empty_extensions_rejected() {
        let mut config = Config::default();
        config.check.jobs = 0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.files.extensions.clear();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_search_paths_end_in_file_name() {
        let paths = Config::search_paths();
        assert_eq!(paths[0], PathBuf::from(CONFIG_FILE_NAME));
        assert!(paths.iter().all(|p| p.ends_with(CONFIG_FILE_NAME)));
    }
}
