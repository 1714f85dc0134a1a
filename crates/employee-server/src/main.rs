//! Main entry point for the employee dashboard preview server

use clap::Parser;
use employee_server::{Config, LogFormat, Overrides, Result, build_router, init_logging};
use std::path::PathBuf;
use tokio::net::TcpListener;
use tracing::{error, info, warn};

/// Command line interface for the preview server
#[derive(Debug, Parser)]
#[command(
    name = "employee-server",
    version = env!("CARGO_PKG_VERSION"),
    about = "Serve the built employee dashboard bundle"
)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Host to bind to
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on
    #[arg(short, long, env = "PORT")]
    port: Option<u16>,

    /// Directory containing index.html and the wasm bundle
    #[arg(long, value_name = "DIR")]
    static_dir: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long)]
    log_level: Option<String>,

    /// Log format
    #[arg(long, value_enum)]
    log_format: Option<LogFormat>,

    /// Shorthand for --log-format json
    #[arg(long, conflicts_with = "log_format")]
    json: bool,
}

impl Cli {
    fn overrides(&self) -> Overrides {
        Overrides {
            host: self.host.clone(),
            port: self.port,
            static_dir: self.static_dir.clone(),
            log_level: self.log_level.clone(),
            log_format: if self.json {
                Some(LogFormat::Json)
            } else {
                self.log_format
            },
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists (for development convenience)
    if let Err(e) = dotenvy::dotenv() {
        // It's okay if .env doesn't exist
        eprintln!("Note: .env file not loaded: {e}");
    }

    let cli = Cli::parse();

    let config = Config::load(cli.config.as_deref())?.with_overrides(cli.overrides())?;

    init_logging(&config.logging)?;

    let addr = config.server.socket_addr()?;
    let index = config.server.index_file();

    info!(
        version = env!("CARGO_PKG_VERSION"),
        static_dir = %config.server.static_dir.display(),
        "Employee dashboard preview server starting"
    );
    if !index.is_file() {
        warn!(
            path = %index.display(),
            "index.html not found; build the web bundle first (trunk build)"
        );
    }

    let app = build_router(&config.server);

    let listener = TcpListener::bind(addr)
        .await
        .inspect_err(|e| error!(%addr, error = %e, "Failed to bind"))?;

    info!("🌐 Dashboard: http://{addr}");
    info!("💚 Health:    http://{addr}/health");

    // Start the server with graceful shutdown
    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("👋 Server shutdown complete");
    Ok(())
}

/// Handle graceful shutdown signals
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received Ctrl+C, shutting down gracefully...");
        },
        () = terminate => {
            info!("Received terminate signal, shutting down gracefully...");
        },
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_json_flag_selects_json() {
        let cli = Cli::try_parse_from(["employee-server", "--json", "--port", "8081"]).unwrap();
        let overrides = cli.overrides();
        assert_eq!(overrides.log_format, Some(LogFormat::Json));
        assert_eq!(overrides.port, Some(8081));
        assert!(overrides.host.is_none());
    }

    #[test]
    fn test_log_format_flag() {
        let cli = Cli::try_parse_from(["employee-server", "--log-format", "pretty"]).unwrap();
        assert_eq!(cli.overrides().log_format, Some(LogFormat::Pretty));
    }

    #[test]
    fn test_json_conflicts_with_log_format() {
        assert!(Cli::try_parse_from(["employee-server", "--json", "--log-format", "pretty"]).is_err());
    }
}
