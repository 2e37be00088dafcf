use std::process::ExitCode;

use dotenvy::dotenv;
use tracing::{error, info};

use common::utils::logging::{init_logging, LogFormat};

fn main() -> ExitCode {
    // .env first so RUST_LOG, LOG_FORMAT and DATABASE_URL take effect
    dotenv().ok();
    init_logging(LogFormat::from_env());

    let cfg = match server::startup::load_config() {
        Ok(cfg) => cfg,
        Err(e) => {
            error!(error = %e, "invalid configuration");
            return ExitCode::FAILURE;
        }
    };

    let mut builder = tokio::runtime::Builder::new_multi_thread();
    builder.enable_all();
    if let Some(w) = cfg.server.worker_threads {
        builder.worker_threads(w);
    }
    let rt = match builder.build() {
        Ok(rt) => rt,
        Err(e) => {
            error!(error = %e, "failed to build tokio runtime");
            return ExitCode::FAILURE;
        }
    };

    info!(version = env!("CARGO_PKG_VERSION"), threads = ?cfg.server.worker_threads, "client registry starting");
    match rt.block_on(server::run(cfg)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "server exited with error");
            ExitCode::FAILURE
        }
    }
}
