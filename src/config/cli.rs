use crate::domain::model::XidProperty;
use clap::Parser;

#[derive(Debug, Clone, Default, Parser)]
#[command(name = "xid-fetch")]
#[command(about = "Print Unicode XID code points as char literal patterns")]
pub struct CliConfig {
    /// Identifier property to fetch: xid-start (default) or xid-continue
    #[arg(long)]
    pub property: Option<XidProperty>,

    /// List service endpoint, without query string
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Request timeout in seconds
    #[arg(long, value_name = "SECONDS")]
    pub timeout: Option<u64>,

    /// Write the line to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<String>,

    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}
