//! Runtime configuration for the HTTP listener.

use std::net::SocketAddr;

/// Address used when none is configured.
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8000";

/// Largest request body accepted by default, in bytes (2 MiB).
pub const DEFAULT_BODY_LIMIT: usize = 2 * 1024 * 1024;

/// Settings for [`crate::serve`] and [`crate::router`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListenerConfig {
    /// Socket address the server binds to.
    pub bind_addr: SocketAddr,
    /// Maximum accepted request body size, in bytes. Larger bodies get 413.
    pub body_limit: usize,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 8000)),
            body_limit: DEFAULT_BODY_LIMIT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_documented_address() {
        let config = ListenerConfig::default();
        let documented: SocketAddr = DEFAULT_BIND_ADDR.parse().expect("valid address");
        assert_eq!(config.bind_addr, documented);
        assert_eq!(config.body_limit, DEFAULT_BODY_LIMIT);
    }
}
