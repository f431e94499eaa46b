use std::{path::Path, process::ExitCode, sync::Arc};

use tokio::net::TcpListener;
use todo_server::{config::load_env_file, logging, Config, SqliteStore};

#[tokio::main]
async fn main() -> ExitCode {
    if let Err(err) = load_env_file(Path::new(".env")) {
        logging::init(tracing::Level::INFO);
        tracing::error!("configuration error: {err}");
        return ExitCode::FAILURE;
    }

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            logging::init(tracing::Level::INFO);
            tracing::error!("configuration error: {err}");
            return ExitCode::FAILURE;
        }
    };
    logging::init(config.log_level);
    tracing::info!("starting todo-server");

    let store = match SqliteStore::connect(&config.database_url).await {
        Ok(store) => store,
        Err(err) => {
            tracing::error!("failed to connect to database: {err}");
            return ExitCode::FAILURE;
        }
    };
    tracing::info!("database connected");

    if let Err(err) = store.migrate().await {
        tracing::error!("schema setup failed: {err}");
        return ExitCode::FAILURE;
    }
    tracing::info!("schema ready");

    let listener = match TcpListener::bind(config.addr).await {
        Ok(listener) => listener,
        Err(err) => {
            tracing::error!(addr = %config.addr, "failed to bind: {err}");
            return ExitCode::FAILURE;
        }
    };
    tracing::info!(addr = %config.addr, "listening");

    match todo_server::run(listener, Arc::new(store)).await {
        Ok(()) => {
            tracing::info!("todo-server stopped");
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!("server error: {err}");
            ExitCode::FAILURE
        }
    }
}
