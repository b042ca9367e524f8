use crate::daemon::ConnectionError;
use std::fmt::Display;
use std::str::FromStr;

pub const DEFAULT_ENDPOINT: &str = "unix:///var/run/docker.sock";

/// Where the daemon lives and which transport reaches it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    /// Path to a Unix domain socket
    Unix(String),
    /// Windows named pipe path, e.g. `//./pipe/docker_engine`
    NamedPipe(String),
    /// Plain HTTP address, always normalized to `http://host[:port]`
    Http(String),
}

impl FromStr for Endpoint {
    type Err = ConnectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Err(ConnectionError::new("daemon endpoint is empty"));
        }
        if s.starts_with('/') {
            return Ok(Endpoint::Unix(s.to_string()));
        }
        if let Some(path) = s.strip_prefix("unix://") {
            if path.is_empty() {
                return Err(ConnectionError::new(format!("invalid daemon endpoint '{}': missing socket path", s)));
            }
            return Ok(Endpoint::Unix(path.to_string()));
        }
        if let Some(path) = s.strip_prefix("npipe://") {
            if path.is_empty() {
                return Err(ConnectionError::new(format!("invalid daemon endpoint '{}': missing pipe path", s)));
            }
            return Ok(Endpoint::NamedPipe(path.to_string()));
        }
        if let Some(address) = s.strip_prefix("tcp://").or_else(|| s.strip_prefix("http://")) {
            let host = address.split('/').next().unwrap_or_default();
            if host.is_empty() || host.starts_with(':') {
                return Err(ConnectionError::new(format!("invalid daemon endpoint '{}': missing host", s)));
            }
            return Ok(Endpoint::Http(format!("http://{}", address.trim_end_matches('/'))));
        }
        if s.starts_with("https://") {
            return Err(ConnectionError::new(format!("unsupported daemon endpoint '{}': TLS connections are not supported", s)));
        }
        Err(ConnectionError::new(format!(
            "unsupported daemon endpoint '{}': expected a socket path or a unix://, tcp:// or http:// URL",
            s
        )))
    }
}

impl Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Endpoint::Unix(path) => write!(f, "unix://{}", path),
            Endpoint::NamedPipe(path) => write!(f, "npipe://{}", path),
            Endpoint::Http(address) => write!(f, "{}", address),
        }
    }
}
