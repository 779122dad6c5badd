//! Global configuration for nodeplan (stored in ~/.config/nodeplan/config.toml)
//!
//! ```toml
//! network = "/home/me/bdo/network.toml"
//! owned = "/home/me/bdo/owned"
//! ```
//!
//! Precedence for each path: command line (or its environment variable),
//! then this file, then the defaults in the working directory.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{NodeplanError, Result};

const CONFIG_DIR: &str = "nodeplan";
const CONFIG_FILE: &str = "config.toml";
const CONFIG_DIR_ENV_VAR: &str = "NODEPLAN_CONFIG_DIR";

pub const DEFAULT_NETWORK_FILE: &str = "network.toml";
pub const DEFAULT_OWNED_FILE: &str = "owned";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owned: Option<PathBuf>,
}

/// Files a run reads, after applying precedence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPaths {
    pub network: PathBuf,
    pub owned: PathBuf,
}

impl GlobalConfig {
    fn config_path() -> Result<PathBuf> {
        // Allow environment variable override for testing
        let config_dir = if let Ok(env_dir) = std::env::var(CONFIG_DIR_ENV_VAR) {
            PathBuf::from(env_dir)
        } else {
            dirs::config_dir()
                .ok_or_else(|| {
                    NodeplanError::Other("unable to determine config directory".to_string())
                })?
                .join(CONFIG_DIR)
        };

        Ok(config_dir.join(CONFIG_FILE))
    }

    /// Load the global config; a missing file yields the defaults.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| {
            NodeplanError::Other(format!(
                "failed to read global config from {}: {}",
                path.display(),
                e
            ))
        })?;

        toml::from_str(&content).map_err(|e| {
            NodeplanError::Other(format!(
                "failed to parse global config from {}: {}",
                path.display(),
                e
            ))
        })
    }

    /// Apply precedence. Relative paths are taken from `root`.
    pub fn resolve(
        &self,
        root: &Path,
        network: Option<&Path>,
        owned: Option<&Path>,
    ) -> ResolvedPaths {
        let pick = |flag: Option<&Path>, configured: &Option<PathBuf>, default: &str| {
            let path = flag
                .map(Path::to_path_buf)
                .or_else(|| configured.clone())
                .unwrap_or_else(|| PathBuf::from(default));
            if path.is_absolute() {
                path
            } else {
                root.join(path)
            }
        };

        ResolvedPaths {
            network: pick(network, &self.network, DEFAULT_NETWORK_FILE),
            owned: pick(owned, &self.owned, DEFAULT_OWNED_FILE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_config_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = GlobalConfig::load_from(&dir.path().join(CONFIG_FILE)).unwrap();
        assert_eq!(config, GlobalConfig::default());
    }

    #[test]
    fn test_load_paths_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "network = \"/data/network.toml\"\n").unwrap();

        let config = GlobalConfig::load_from(&path).unwrap();
        assert_eq!(config.network, Some(PathBuf::from("/data/network.toml")));
        assert_eq!(config.owned, None);
    }

    #[test]
    fn test_invalid_config_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "network = [").unwrap();

        let err = GlobalConfig::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("failed to parse global config"));
    }

    #[test]
    fn test_resolve_precedence() {
        let root = Path::new("/work");
        let config = GlobalConfig {
            network: Some(PathBuf::from("/data/network.toml")),
            owned: Some(PathBuf::from("mine")),
        };

        let resolved = config.resolve(root, None, None);
        assert_eq!(resolved.network, PathBuf::from("/data/network.toml"));
        assert_eq!(resolved.owned, PathBuf::from("/work/mine"));

        let resolved = config.resolve(root, Some(Path::new("other.toml")), None);
        assert_eq!(resolved.network, PathBuf::from("/work/other.toml"));

        let resolved = GlobalConfig::default().resolve(root, None, None);
        assert_eq!(resolved.network, PathBuf::from("/work/network.toml"));
        assert_eq!(resolved.owned, PathBuf::from("/work/owned"));
    }
}
