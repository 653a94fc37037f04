use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

const CONFIG_FILE_NAME: &str = "config.toml";
const DEFAULT_PORT: u16 = 8000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    pub port: u16,
    pub open_browser: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_dir: Option<PathBuf>,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            open_browser: true,
            public_dir: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigLoad {
    pub config: CliConfig,
    pub file: PathBuf,
    pub created: bool,
}

/// Startup never aborts over the config file: any problem is logged and the
/// built-in defaults are used for this run.
pub fn load_or_default(dir: Result<PathBuf>) -> CliConfig {
    match dir.and_then(|dir| load_or_create(&dir)) {
        Ok(load) => {
            if load.created {
                tracing::info!(
                    path = %load.file.display(),
                    port = load.config.port,
                    "created default config"
                );
            }
            load.config
        }
        Err(err) => {
            tracing::warn!(error = %format!("{err:#}"), "config unavailable; using defaults");
            CliConfig::default()
        }
    }
}

pub fn load_or_create(dir: &Path) -> Result<ConfigLoad> {
    fs::create_dir_all(dir).with_context(|| format!("create config dir {}", dir.display()))?;
    let file = dir.join(CONFIG_FILE_NAME);

    if file.exists() {
        let contents = fs::read_to_string(&file)
            .with_context(|| format!("read config {}", file.display()))?;
        let config: CliConfig = toml::from_str(&contents)
            .with_context(|| format!("parse config {}", file.display()))?;
        return Ok(ConfigLoad {
            config,
            file,
            created: false,
        });
    }

    let config = CliConfig::default();
    let contents = toml::to_string_pretty(&config).context("serialize config")?;
    fs::write(&file, contents).with_context(|| format!("write config {}", file.display()))?;

    Ok(ConfigLoad {
        config,
        file,
        created: true,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creates_defaults_on_first_run() {
        let temp_dir = tempfile::tempdir().expect("tempdir");
        let dir = temp_dir.path().join("todo");

        let first = load_or_create(&dir).expect("create");
        assert!(first.created);
        assert_eq!(first.config, CliConfig::default());
        assert!(first.file.is_file());

        let second = load_or_create(&dir).expect("load");
        assert!(!second.created);
        assert_eq!(second.config, first.config);
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let temp_dir = tempfile::tempdir().expect("tempdir");
        fs::write(
            temp_dir.path().join(CONFIG_FILE_NAME),
            "port = 9000\npublic_dir = \"/srv/todo\"\n",
        )
        .expect("write config");

        let loaded = load_or_create(temp_dir.path()).expect("load");
        assert_eq!(loaded.config.port, 9000);
        assert!(loaded.config.open_browser);
        assert_eq!(loaded.config.public_dir, Some(PathBuf::from("/srv/todo")));
    }

    #[test]
    fn unusable_config_dir_falls_back_to_defaults() {
        let temp_dir = tempfile::tempdir().expect("tempdir");
        let blocker = temp_dir.path().join("not-a-dir");
        fs::write(&blocker, b"file").expect("write blocker");

        let config = load_or_default(Ok(blocker.join("todo")));
        assert_eq!(config, CliConfig::default());

        let config = load_or_default(Err(anyhow::anyhow!("no home directory")));
        assert_eq!(config, CliConfig::default());
    }

    #[test]
    fn load_or_default_reads_existing_file() {
        let temp_dir = tempfile::tempdir().expect("tempdir");
        fs::write(temp_dir.path().join(CONFIG_FILE_NAME), "port = 9100
").expect("write");
        let config = load_or_default(Ok(temp_dir.path().to_path_buf()));
        assert_eq!(config.port, 9100);
    }

    #[test]
    fn invalid_file_is_an_error() {
        let temp_dir = tempfile::tempdir().expect("tempdir");
        fs::write(temp_dir.path().join(CONFIG_FILE_NAME), "port = \"eighty\"")
            .expect("write config");
        let err = load_or_create(temp_dir.path()).expect_err("bad config");
        assert!(format!("{err:#}").contains("parse config"));
    }
}
