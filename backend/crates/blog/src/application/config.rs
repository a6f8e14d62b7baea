//! Application Configuration

use std::time::Duration;

/// Re-export cookie types from platform
pub use platform::cookie::{CookieConfig, SameSite};

/// Web application configuration
#[derive(Debug, Clone)]
pub struct WebConfig {
    /// Session cookie attributes (name, HttpOnly, path, ...)
    pub cookie: CookieConfig,
    /// Process-wide signing secret; rotating it invalidates every
    /// outstanding cookie at once.
    pub session_secret: String,
    /// Session TTL (1 day)
    pub session_ttl: Duration,
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            cookie: CookieConfig::default(),
            session_secret: String::new(),
            session_ttl: Duration::from_secs(86400),
        }
    }
}

impl WebConfig {
    /// Create config with a random session secret (for development)
    pub fn with_random_secret() -> Self {
        let secret = platform::crypto::sha256_hex(&platform::crypto::random_bytes(32));
        Self {
            session_secret: secret,
            ..Default::default()
        }
    }

    /// Create config for development
    pub fn development() -> Self {
        Self::with_random_secret()
    }

    /// Session TTL in whole seconds, as used for cookie Max-Age.
    pub fn session_ttl_secs(&self) -> i64 {
        self.session_ttl.as_secs() as i64
    }
}
