use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;
use tracing::Level;

#[derive(Debug, Parser)]
#[command(name = "sole_catalog")]
#[command(about = "Serves the shoe catalog as server-rendered HTML")]
pub struct Args {
    /// Address to listen on
    #[arg(long, env = "SOLE_ADDR", default_value = "127.0.0.1:3000")]
    pub addr: SocketAddr,

    /// Path to a catalog JSON file (uses the bundled catalog when omitted)
    #[arg(short, long, env = "SOLE_CATALOG")]
    pub catalog: Option<PathBuf>,

    /// Maximum number of worker threads
    #[arg(short, long, default_value_t = 8)]
    pub workers: usize,

    /// Log level
    #[arg(short, long, default_value = "info", value_parser = clap::value_parser!(Level))]
    pub log_level: Level,
}
