//! Command line flags.

use std::path::PathBuf;

use clap::Parser;

use crate::config::DEFAULT_CONFIG_FILE;

#[derive(Debug, Clone, Parser)]
#[command(name = "vanity-urls")]
#[command(about = "Serves Go vanity import paths", long_about = None)]
pub struct Flags {
    /// Config file path
    #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// HTTP server listen address (defaults to $PORT, then the config file)
    #[arg(short, long)]
    pub listen: Option<String>,

    /// HTTP request timeout in seconds
    #[arg(short, long)]
    pub timeout: Option<u64>,

    /// Show version and exit
    #[arg(short = 'v', long)]
    pub show_version: bool,
}

impl Flags {
    /// Pick the listen address: flag, then `port` (from `$PORT`), then config.
    pub fn listen_address(&self, port: Option<&str>, configured: &str) -> String {
        let addr = match (&self.listen, port.filter(|p| !p.is_empty())) {
            (Some(listen), _) => listen.clone(),
            (None, Some(port)) => format!(":{}", port),
            (None, None) => configured.to_string(),
        };
        normalize_listen_address(&addr)
    }
}

/// Expand a bare `:port` into an all-interfaces bind address.
pub fn normalize_listen_address(addr: &str) -> String {
    if addr.starts_with(':') {
        format!("0.0.0.0{}", addr)
    } else {
        addr.to_string()
    }
}
