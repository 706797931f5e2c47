//! CLI command implementations
//!
//! Boot order for `serve`: config, catalog load, runtime, bind. Any failure
//! before the server is listening is fatal.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::catalog::BookStore;
use crate::http_server::{HttpServer, HttpServerConfig};
use crate::observability::{Event, Logger};

use super::args::Command;
use super::errors::{CliError, CliResult};

/// Parse args and dispatch
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Init { config } => init(&config),
        Command::Serve { config, host, port } => serve(&config, host, port),
    }
}

/// Load the JSON config file. A missing file means all defaults.
pub fn load_config(path: &Path) -> CliResult<HttpServerConfig> {
    let config = match fs::read_to_string(path) {
        Ok(content) => serde_json::from_str(&content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?,
        Err(e) if e.kind() == ErrorKind::NotFound => HttpServerConfig::default(),
        Err(e) => {
            return Err(CliError::config_error(format!(
                "Failed to read config {}: {}",
                path.display(),
                e
            )))
        }
    };

    Ok(config)
}

fn validated(config: HttpServerConfig) -> CliResult<HttpServerConfig> {
    config.validate().map_err(CliError::config_error)?;
    Ok(config)
}

/// Create an empty catalog file and the static asset directory.
///
/// Refuses to touch an existing catalog file.
pub fn init(config_path: &Path) -> CliResult<()> {
    let config = validated(load_config(config_path)?)?;

    if config.data_file.exists() {
        return Err(CliError::already_initialized(&config.data_file));
    }

    let store = BookStore::empty(&config.data_file);
    store.save()?;
    fs::create_dir_all(&config.static_dir)?;

    println!("Initialized catalog at {}", store.path().display());
    Ok(())
}

/// Load the catalog and serve HTTP until Ctrl-C
pub fn serve(config_path: &Path, host: Option<String>, port: Option<u16>) -> CliResult<()> {
    let config_display = config_path.display().to_string();
    Logger::event(Event::BootStart, &[("config", config_display.as_str())]);

    let mut config = load_config(config_path)?;
    if let Some(host) = host {
        config.host = host;
    }
    if let Some(port) = port {
        config.port = port;
    }
    let config = validated(config)?;

    Logger::event(
        Event::ConfigLoaded,
        &[
            ("addr", config.socket_addr().as_str()),
            ("data_file", config.data_file.display().to_string().as_str()),
            ("static_dir", config.static_dir.display().to_string().as_str()),
        ],
    );

    let store = BookStore::load(&config.data_file).map_err(|e| {
        let error = e.to_string();
        Logger::event(Event::BootFailed, &[("code", e.code()), ("error", error.as_str())]);
        CliError::from(e)
    })?;

    let server = HttpServer::new(config, store);

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        server
            .start()
            .await
            .map_err(|e| CliError::boot_failed(format!("HTTP server failed: {}", e)))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_config(temp: &TempDir, body: serde_json::Value) -> std::path::PathBuf {
        let path = temp.path().join("bookshelf.json");
        fs::write(&path, body.to_string()).unwrap();
        path
    }

    #[test]
    fn test_missing_config_uses_defaults() {
        let temp = TempDir::new().unwrap();
        let config = load_config(&temp.path().join("absent.json")).unwrap();
        assert_eq!(config.port, 5000);
    }

    #[test]
    fn test_invalid_config_json_fails() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("bookshelf.json");
        fs::write(&path, "{ port: ").unwrap();

        let err = load_config(&path).unwrap_err();
        assert_eq!(err.code_str(), "BOOKSHELF_CLI_CONFIG_ERROR");
    }

    #[test]
    fn test_init_creates_empty_catalog_and_static_dir() {
        let temp = TempDir::new().unwrap();
        let data_file = temp.path().join("data/books.json");
        let static_dir = temp.path().join("static");
        let config = write_config(
            &temp,
            serde_json::json!({"data_file": data_file, "static_dir": static_dir}),
        );

        init(&config).unwrap();

        assert_eq!(fs::read_to_string(&data_file).unwrap(), "[]");
        assert!(static_dir.is_dir());
        assert!(BookStore::load(&data_file).unwrap().is_empty());
    }

    #[test]
    fn test_init_refuses_existing_catalog() {
        let temp = TempDir::new().unwrap();
        let data_file = temp.path().join("books.json");
        fs::write(&data_file, "[]").unwrap();
        let config = write_config(
            &temp,
            serde_json::json!({
                "data_file": data_file,
                "static_dir": temp.path().join("static"),
            }),
        );

        let err = init(&config).unwrap_err();
        assert_eq!(err.code_str(), "BOOKSHELF_CLI_ALREADY_INITIALIZED");
    }

    #[test]
    fn test_serve_fails_on_malformed_catalog() {
        let temp = TempDir::new().unwrap();
        let data_file = temp.path().join("books.json");
        fs::write(&data_file, "not json").unwrap();
        let config = write_config(&temp, serde_json::json!({"data_file": data_file}));

        let err = serve(&config, None, Some(1)).unwrap_err();
        assert_eq!(err.code_str(), "BOOKSHELF_CLI_BOOT_FAILED");
    }

    #[test]
    fn test_serve_rejects_port_zero_override() {
        let temp = TempDir::new().unwrap();
        let config = write_config(&temp, serde_json::json!({}));

        let err = serve(&config, None, Some(0)).unwrap_err();
        assert_eq!(err.code_str(), "BOOKSHELF_CLI_CONFIG_ERROR");
    }
}
