//! Environment configuration for the webhook server.

use std::env;

const DEFAULT_PORT: u16 = 3000;

/// Everything the server boundary needs, read once at startup. The
/// signing secret is an explicit `Option` so "verification disabled" is
/// a visible state, not an implicit global.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub signing_secret: Option<String>,
}

impl ServerConfig {
    pub fn from_env() -> ServerConfig {
        let port = env::var("PORT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_PORT);

        let signing_secret = env::var("SIGNING_SECRET").ok().filter(|s| !s.is_empty());

        ServerConfig {
            port,
            signing_secret,
        }
    }
}

impl Default for ServerConfig {
    fn default() -> ServerConfig {
        ServerConfig {
            port: DEFAULT_PORT,
            signing_secret: None,
        }
    }
}
