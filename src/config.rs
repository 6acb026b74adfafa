use clap::Parser;
use std::num::NonZeroUsize;
use std::path::PathBuf;

/// Server configuration. Every flag falls back to an environment variable.
#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    #[arg(long, env = "BIND_ADDR", default_value = "127.0.0.1:5000", help = "Address to listen on")]
    pub bind: String,
    #[arg(long, env = "WORKERS", default_value = "4", help = "HTTP worker threads")]
    pub workers: NonZeroUsize,
    #[arg(long, env = "RPS_SEED", help = "Seed the opponent for a reproducible sequence")]
    pub seed: Option<u64>,
    #[arg(long, env = "LOG_DIR", default_value = "logs", help = "Directory for log files")]
    pub logs: PathBuf,
}
