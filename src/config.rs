//! Usage: CLI/env configuration for the relay binary.

use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, Parser)]
#[command(
    name = "prompt-relay",
    version,
    about = "Forwards prompts to a local Ollama instance and audit-logs each exchange"
)]
pub struct Config {
    /// Address the HTTP listener binds to.
    #[arg(long, env = "RELAY_LISTEN_ADDR", default_value = "0.0.0.0:8000")]
    pub listen_addr: SocketAddr,

    /// Base URL of the Ollama instance.
    #[arg(
        long,
        env = "RELAY_UPSTREAM_BASE_URL",
        default_value = "http://localhost:11434"
    )]
    pub upstream_base_url: String,

    /// Model name sent with every generate call.
    #[arg(long, env = "RELAY_MODEL", default_value = "llama2")]
    pub model: String,

    /// Upstream send timeout in seconds; 0 disables the timeout.
    #[arg(long, env = "RELAY_UPSTREAM_TIMEOUT_SECS", default_value_t = 120)]
    pub upstream_timeout_secs: u32,

    /// Directory holding the audit log and rolled diagnostic logs.
    #[arg(long, env = "RELAY_LOG_DIR", default_value = "logs")]
    pub log_dir: PathBuf,

    /// Days to keep rolled diagnostic log files.
    #[arg(long, env = "RELAY_LOG_RETENTION_DAYS", default_value_t = 7)]
    pub log_retention_days: u32,
}

impl Config {
    pub fn upstream_timeout(&self) -> Option<Duration> {
        if self.upstream_timeout_secs == 0 {
            None
        } else {
            Some(Duration::from_secs(self.upstream_timeout_secs as u64))
        }
    }

    pub fn generate_url(&self) -> String {
        format!(
            "{}/api/generate",
            self.upstream_base_url.trim_end_matches('/')
        )
    }
}
