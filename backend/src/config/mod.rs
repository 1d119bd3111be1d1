use dotenv::dotenv;
use serde::Deserialize;
use std::net::SocketAddr;
use std::path::PathBuf;

use crate::error::Result;

#[derive(Clone, Debug, Deserialize)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Directory holding the three catalog tables.
    pub data_dir: PathBuf,
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        dotenv().ok(); // Load .env file if present
        let settings = ::config::Config::builder()
            .set_default("host", "127.0.0.1")?
            .set_default("port", 8000)?
            .set_default("data_dir", "data")?
            .add_source(::config::Environment::with_prefix("VALUATION"))
            .build()?;
        Ok(settings.try_deserialize()?)
    }

    pub fn socket_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| crate::Error::InvalidInput(format!("bad listen address: {}", e)))
    }
}
