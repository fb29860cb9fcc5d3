use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Default)]
#[command(
    name = "folder2rss",
    about = "Serve folders of media files as podcast RSS feeds",
    long_about = None,
    version,
)]
pub struct Args {
    /// URL scheme advertised in feed links [default: http]
    #[arg(long)]
    pub scheme: Option<String>,

    /// Host to bind and to advertise in feed links [default: 127.0.0.1]
    #[arg(long)]
    pub host: Option<String>,

    /// HTTP port to listen on [default: 8000]
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Media root; every direct subfolder becomes a feed [default: podcasts]
    #[arg(short, long, value_name = "DIR")]
    pub directory: Option<PathBuf>,

    /// URL prefix the server is mounted under, e.g. behind a reverse proxy
    #[arg(short, long)]
    pub subfolder: Option<String>,

    /// Log level used when RUST_LOG is unset [default: INFO]
    #[arg(long)]
    pub loglevel: Option<String>,

    /// Path to TOML config file (overrides default search: ./folder2rss.toml, ~/.config/folder2rss/config.toml)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}
