use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;
use url::Url;


#[derive(Debug, Parser)]
pub struct Args {
    #[arg(long)]
    #[arg(default_value = "http://127.0.0.1:7280")]
    pub quickwit_url: Url,
    #[arg(long)]
    #[arg(default_value = "0.0.0.0:3030")]
    pub listen_address: SocketAddr,
    #[arg(long)]
    pub jwt_signing_key: String,
    /// Origins allowed by the CORS policy. Repeat the flag for each origin.
    #[arg(long = "allowed-origin")]
    #[arg(default_values_t = default_allowed_origins())]
    pub allowed_origins: Vec<String>,
    /// How often the featured-ad expiry sweep runs, in seconds.
    #[arg(long)]
    #[arg(default_value_t = 300)]
    pub sweep_interval_secs: u64,
    /// Optional NDJSON file of listings to load at startup.
    #[arg(long)]
    pub seed: Option<PathBuf>,
}

fn default_allowed_origins() -> Vec<String> {
    vec![
        String::from("http://127.0.0.1:3000"),
        String::from("http://localhost:3000"),
    ]
}
