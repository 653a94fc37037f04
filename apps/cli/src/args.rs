use std::path::PathBuf;

use clap::Parser;

use crate::config::CliConfig;

#[derive(Debug, Parser)]
#[command(
    name = "todo-server",
    version,
    about = "Serve the local to-do list on 127.0.0.1 and open it in a browser"
)]
pub struct CliArgs {
    /// Port to listen on; the configured port is used when absent or invalid
    pub port: Option<String>,

    /// Do not open the browser automatically
    #[arg(long)]
    pub no_open: bool,

    /// Serve front-end files from this directory
    #[arg(long, value_name = "DIR")]
    pub public_dir: Option<PathBuf>,

    /// Store todo.json in this directory instead of the per-user data dir
    #[arg(long, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,
}

impl CliArgs {
    pub fn effective_port(&self, config: &CliConfig) -> u16 {
        let Some(raw) = self.port.as_deref() else {
            return config.port;
        };
        match raw.trim().parse::<u16>() {
            Ok(port) => port,
            Err(_) => {
                tracing::warn!(value = raw, fallback = config.port, "ignoring invalid port");
                config.port
            }
        }
    }

    pub fn should_open_browser(&self, config: &CliConfig) -> bool {
        !self.no_open && config.open_browser
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> CliArgs {
        CliArgs::try_parse_from(std::iter::once("todo-server").chain(argv.iter().copied()))
            .expect("parse args")
    }

    #[test]
    fn positional_port_overrides_config() {
        let args = parse(&["9123"]);
        assert_eq!(args.effective_port(&CliConfig::default()), 9123);
    }

    #[test]
    fn missing_or_invalid_port_uses_config() {
        let config = CliConfig::default();
        assert_eq!(parse(&[]).effective_port(&config), 8000);
        assert_eq!(parse(&["not-a-port"]).effective_port(&config), 8000);
        assert_eq!(parse(&["70000"]).effective_port(&config), 8000);
    }

    #[test]
    fn flags_are_parsed() {
        let args = parse(&["--no-open", "--public-dir", "web", "--data-dir", "/tmp/todo", "8080"]);
        assert!(args.no_open);
        assert_eq!(args.public_dir, Some(PathBuf::from("web")));
        assert_eq!(args.data_dir, Some(PathBuf::from("/tmp/todo")));
        assert_eq!(args.port.as_deref(), Some("8080"));
        assert!(!args.should_open_browser(&CliConfig::default()));
    }

    #[test]
    fn config_can_disable_browser() {
        let config = CliConfig {
            open_browser: false,
            ..CliConfig::default()
        };
        assert!(!parse(&[]).should_open_browser(&config));
        assert!(parse(&[]).should_open_browser(&CliConfig::default()));
    }
}
