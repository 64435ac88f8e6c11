//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use espr_commerce::Storefront;
use espr_storage::{FileStore, Storage};

use crate::config::CliConfig;
use crate::output::Output;

/// Config file names searched for, in order, in each directory.
const CONFIG_NAMES: [&str; 3] = ["espr.toml", ".espr.toml", "espr.json"];

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: CliConfig,
    /// Config file in use, if any.
    pub config_path: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
    /// Resolved store file.
    pub data_file: PathBuf,
}

impl Context {
    /// Load context from an explicit config path, or the nearest config
    /// file in the directory tree.
    pub fn load(config_path: Option<&str>, data_file: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (config_path, config) = match config_path {
            Some(path) => {
                let path = PathBuf::from(path);
                let config = CliConfig::load(&path)?;
                (Some(path), config)
            }
            None => match find_config(&cwd)? {
                Some((path, config)) => (Some(path), config),
                None => (None, CliConfig::default()),
            },
        };

        let data_file = resolve_path(&cwd, data_file.unwrap_or(config.data_file.as_str()));

        Ok(Self {
            config,
            config_path,
            output,
            data_file,
        })
    }

    /// Open the store file and build the storefront over it.
    pub fn storefront(&self) -> Result<Storefront> {
        let store = FileStore::open(&self.data_file).with_context(|| {
            format!("Failed to open store file: {}", self.data_file.display())
        })?;
        Ok(Storefront::new(Storage::new(store), &self.config.storefront))
    }
}

/// Find the nearest config file walking up from `start`.
fn find_config(start: &Path) -> Result<Option<(PathBuf, CliConfig)>> {
    for dir in start.ancestors() {
        for name in CONFIG_NAMES {
            let path = dir.join(name);
            if path.is_file() {
                let config = CliConfig::load(&path)?;
                return Ok(Some((path, config)));
            }
        }
    }
    Ok(None)
}

/// Resolve a path relative to `cwd`.
fn resolve_path(cwd: &Path, path: &str) -> PathBuf {
    let path = PathBuf::from(path);
    if path.is_absolute() {
        path
    } else {
        cwd.join(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_config_walks_up() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("espr.toml"), "latency_ms = 42").unwrap();
        let nested = dir.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();

        let (path, config) = find_config(&nested).unwrap().unwrap();
        assert_eq!(path, dir.path().join("espr.toml"));
        assert_eq!(config.latency_ms, 42);
    }

    #[test]
    fn test_nearest_config_wins() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("espr.toml"), "latency_ms = 1").unwrap();
        let nested = dir.path().join("shop");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(nested.join("espr.json"), r#"{"latency_ms": 2}"#).unwrap();

        let (path, config) = find_config(&nested).unwrap().unwrap();
        assert_eq!(path, nested.join("espr.json"));
        assert_eq!(config.latency_ms, 2);
    }

    #[test]
    fn test_resolve_path() {
        let cwd = Path::new("/srv/shop");
        assert_eq!(resolve_path(cwd, "data/store.json"), cwd.join("data/store.json"));
        assert_eq!(resolve_path(cwd, "/tmp/store.json"), PathBuf::from("/tmp/store.json"));
    }
}
