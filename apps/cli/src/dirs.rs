use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::{BaseDirs, ProjectDirs};
use todo_app::{APP_NAME, AppPaths};

const PUBLIC_DIR_NAME: &str = "public";
const PUBLIC_DIR_ENV: &str = "TODO_PUBLIC_DIR";

pub fn config_dir() -> Result<PathBuf> {
    ProjectDirs::from("", "", APP_NAME)
        .map(|dirs| dirs.config_dir().to_path_buf())
        .context("could not determine a per-user config directory")
}

pub fn resolve_data_paths(data_dir: Option<&Path>) -> Result<AppPaths> {
    match data_dir {
        Some(dir) => Ok(AppPaths::new(expand_home_path(dir))),
        None => Ok(AppPaths::resolve(APP_NAME)?),
    }
}

/// First match wins: CLI flag, config file, `TODO_PUBLIC_DIR`,
/// `public/` next to the executable, then `./public`.
pub fn resolve_public_dir(cli: Option<&Path>, config: Option<&Path>) -> PathBuf {
    let env_override = std::env::var_os(PUBLIC_DIR_ENV).map(PathBuf::from);
    let exe_dir = std::env::current_exe()
        .ok()
        .and_then(|path| path.parent().map(PathBuf::from));
    resolve_public_dir_with(cli.or(config).map(Path::to_path_buf), env_override, exe_dir)
}

fn resolve_public_dir_with(
    explicit: Option<PathBuf>,
    env_override: Option<PathBuf>,
    exe_dir: Option<PathBuf>,
) -> PathBuf {
    if let Some(dir) = explicit.or(env_override) {
        return expand_home_path(&dir);
    }
    if let Some(dir) = exe_dir {
        let candidate = dir.join(PUBLIC_DIR_NAME);
        if candidate.is_dir() {
            return candidate;
        }
    }
    PathBuf::from(PUBLIC_DIR_NAME)
}

pub fn expand_home_path(path: &Path) -> PathBuf {
    let Some(home) = BaseDirs::new().map(|dirs| dirs.home_dir().to_path_buf()) else {
        return path.to_path_buf();
    };
    if path == Path::new("~") {
        return home;
    }
    match path.strip_prefix("~") {
        Ok(rest) => home.join(rest),
        Err(_) => path.to_path_buf(),
    }
}
