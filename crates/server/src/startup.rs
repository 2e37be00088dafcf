use std::{net::SocketAddr, sync::Arc};

use axum::Router;
use configs::{AppConfig, ServerConfig};
use migration::MigratorTrait;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::routes::{self, ServerState};
use service::client::{policy::ValidationPolicy, repo::seaorm::SeaOrmClientRepository, ClientService};
use service::password::PasswordHashing;

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Load the config file at `CONFIG_PATH` (default `config.toml`).
pub fn load_config() -> anyhow::Result<AppConfig> {
    load_config_from(&configs::config_path())
}

/// Environment variables are used only when the file does not exist. A file
/// that fails to parse or validate is an error.
pub fn load_config_from(path: &str) -> anyhow::Result<AppConfig> {
    let mut cfg = match configs::load_optional(path)? {
        Some(cfg) => cfg,
        None => {
            warn!(path, "config file not found; using environment");
            AppConfig::from_env()
        }
    };
    cfg.normalize_and_validate()?;
    Ok(cfg)
}

fn bind_addr(server: &ServerConfig) -> anyhow::Result<SocketAddr> {
    Ok(format!("{}:{}", server.host, server.port).parse()?)
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("received Ctrl+C, shutting down");
    }
}

/// Connect, migrate and serve until Ctrl+C.
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    // The pool lives as long as the repository
    let db = models::db::connect_with_config(&cfg.database).await?;
    migration::Migrator::up(&db, None).await?;

    let hasher = PasswordHashing::new(&cfg.security)?;
    let policy = ValidationPolicy::from(&cfg.validation);
    let repo = Arc::new(SeaOrmClientRepository { db });
    let state = ServerState { clients: Arc::new(ClientService::with_config(repo, hasher, policy)) };

    let app: Router = routes::build_router(state, build_cors());

    let addr = bind_addr(&cfg.server)?;
    info!(%addr, "starting client registry server");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).with_graceful_shutdown(shutdown_signal()).await?;
    info!("server stopped");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_config(contents: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("client_registry_{}.toml", uuid::Uuid::new_v4()));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn bind_addr_parses_host_and_port() {
        let s = ServerConfig { host: "127.0.0.1".into(), port: 8081, worker_threads: None };
        assert_eq!(bind_addr(&s).unwrap().port(), 8081);
        let bad = ServerConfig { host: "not a host".into(), port: 1, worker_threads: None };
        assert!(bind_addr(&bad).is_err());
    }

    #[test]
    fn invalid_config_file_is_an_error() {
        let path = temp_config(
            r#"
[server]
host = "0.0.0.0"
port = 9999

[database]
url = "postgres://localhost/clients"

[security]
hash_iterations = 0

[validation]
check_email_format = true
min_password_len = 12
"#,
        );
        let res = load_config_from(path.to_str().unwrap());
        std::fs::remove_file(&path).ok();
        assert!(res.is_err());
    }

    #[test]
    fn unparsable_config_file_is_an_error() {
        let path = temp_config("[server\nport = 9999\n");
        let res = load_config_from(path.to_str().unwrap());
        std::fs::remove_file(&path).ok();
        assert!(res.is_err());
    }

    #[test]
    fn valid_config_file_is_used_as_written() {
        let path = temp_config(
            r#"
[server]
host = "0.0.0.0"
port = 9999

[database]
url = "postgres://localhost/clients"

[validation]
check_email_format = true
min_password_len = 12
"#,
        );
        let cfg = load_config_from(path.to_str().unwrap());
        std::fs::remove_file(&path).ok();
        let cfg = cfg.unwrap();
        assert_eq!(cfg.server.port, 9999);
        assert!(cfg.validation.check_email_format);
        assert_eq!(cfg.validation.min_password_len, 12);
    }
}
