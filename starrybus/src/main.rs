use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use starrybus::board::{ArrivalSource, Board, Poller, TerminalScreen};
use starrybus::config::{BoardConfig, ConfigError};
use starrybus::datamall::{DataMallClient, DataMallConfig, DataMallError, MockDataMallClient};
use starrybus::domain::Stop;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Errors that stop the board before or while it runs.
#[derive(Debug, thiserror::Error)]
enum StartupError {
    #[error("must set environment variable {0}")]
    MissingEnv(&'static str),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    DataMall(#[from] DataMallError),

    #[error("failed to draw board: {0}")]
    Display(#[from] std::io::Error),
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Load .env file (ignore if not present)
    let _ = dotenvy::dotenv();

    // Logs go to stderr so they never interleave with the board on stdout
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), StartupError> {
    let config_path = match std::env::var_os("STARRYBUS_CONFIG") {
        Some(path) => PathBuf::from(path),
        None => BoardConfig::default_path()?,
    };
    let config = BoardConfig::load(&config_path)?;
    info!(
        path = %config_path.display(),
        stops = config.stops.len(),
        buses = config.buses.len(),
        "Loaded configuration"
    );

    let board = Board::new(config.layout, config.buses);
    let shutdown = CancellationToken::new();

    let ctrl_c = shutdown.clone();
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => ctrl_c.cancel(),
            Err(e) => warn!(error = %e, "Could not listen for Ctrl-C"),
        }
    });

    // Serve canned responses when a mock directory is given
    if let Some(dir) = std::env::var_os("STARRYBUS_MOCK_DIR") {
        let source = MockDataMallClient::from_dir(&dir)?;
        info!(dir = %PathBuf::from(dir).display(), "Using mock DataMall data");
        return show_stops(source, config.stops, board, shutdown).await;
    }

    let api_key = std::env::var("API_KEY")
        .ok()
        .filter(|key| !key.is_empty())
        .ok_or(StartupError::MissingEnv("API_KEY"))?;

    let mut datamall_config = DataMallConfig::new(api_key);
    if let Ok(url) = std::env::var("DATAMALL_BASE_URL") {
        datamall_config = datamall_config.with_base_url(url);
    }
    let source = DataMallClient::new(datamall_config)?;

    show_stops(source, config.stops, board, shutdown).await
}

async fn show_stops<S>(
    source: S,
    stops: Vec<Stop>,
    board: Board,
    shutdown: CancellationToken,
) -> Result<(), StartupError>
where
    S: ArrivalSource + Send + Sync + 'static,
{
    let mut screen = TerminalScreen::stdout();
    Poller::new(Arc::new(source), stops)
        .run(board, &mut screen, shutdown)
        .await?;
    Ok(())
}
