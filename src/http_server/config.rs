//! HTTP Server Configuration
//!
//! Bind address, mirror file location, static asset directory, and CORS.
//! Every field has a default so an empty `{}` config file is valid.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpServerConfig {
    /// Host to bind to (default: "127.0.0.1")
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind to (default: 5000)
    #[serde(default = "default_port")]
    pub port: u16,

    /// JSON mirror of the book collection (default: "books.json")
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,

    /// Directory holding `data.json` for `/static/data` (default: "static")
    #[serde(default = "default_static_dir")]
    pub static_dir: PathBuf,

    /// CORS allowed origins. Empty means any origin.
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_data_file() -> PathBuf {
    PathBuf::from("books.json")
}

fn default_static_dir() -> PathBuf {
    PathBuf::from("static")
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            data_file: default_data_file(),
            static_dir: default_static_dir(),
            cors_origins: Vec::new(),
        }
    }
}

impl HttpServerConfig {
    /// Create a new config with specified port
    pub fn with_port(port: u16) -> Self {
        Self {
            port,
            ..Default::default()
        }
    }

    /// Get the socket address string
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Reject values the server cannot start with
    pub fn validate(&self) -> Result<(), String> {
        if self.host.trim().is_empty() {
            return Err("host must not be empty".to_string());
        }
        if self.port == 0 {
            return Err("port must be > 0".to_string());
        }
        if self.data_file.as_os_str().is_empty() {
            return Err("data_file must not be empty".to_string());
        }
        Ok(())
    }
}
