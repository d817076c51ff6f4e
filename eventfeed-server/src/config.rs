//! Server configuration from the environment.

use anyhow::{Context, Result};

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_STORE_URL: &str = "https://eventfeed-default-rtdb.firebaseio.com/events.json";

/// Runtime settings for the server binary.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub store_url: String,
}

impl ServerConfig {
    /// Read `EVENTFEED_PORT` and `EVENTFEED_STORE_URL`, falling back to
    /// the compiled defaults.
    pub fn from_env() -> Result<Self> {
        let port = match std::env::var("EVENTFEED_PORT") {
            Ok(raw) => raw
                .parse()
                .with_context(|| format!("invalid EVENTFEED_PORT value '{raw}'"))?,
            Err(_) => DEFAULT_PORT,
        };

        let store_url =
            std::env::var("EVENTFEED_STORE_URL").unwrap_or_else(|_| DEFAULT_STORE_URL.to_string());

        Ok(ServerConfig { port, store_url })
    }
}
