mod args;
mod config;
mod dirs;
mod logging;
mod seed;

use std::io;
use std::net::SocketAddr;
use std::path::Path;
use std::process::Command;

use app_api::AppContext;
use chrono::{FixedOffset, Local, Offset};
use fleet_app::{AppConfig, AppPaths, AppState, ensure_app_data_dir};
use http_api::{ChatRelay, HttpState, generate_csrf_token};
use tracing::{info, warn};

use crate::args::Command as CliCommand;
use crate::config::CliConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let command = args::parse_args().map_err(|err| {
        eprintln!("{err}");
        args::print_help();
        io::Error::new(io::ErrorKind::InvalidInput, "invalid arguments")
    })?;

    match command {
        CliCommand::SeedDepartments { out } => seed_departments(&out),
        CliCommand::Serve { port, no_open } => serve(port, no_open).await,
    }
}

fn seed_departments(out: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let written = seed::write_departments_csv(out)?;
    println!("{} generated with {written} departments", out.display());
    Ok(())
}

async fn serve(port: Option<u16>, no_open: bool) -> Result<(), Box<dyn std::error::Error>> {
    let config = config::load_or_create().map_err(io::Error::other)?;
    logging::init_logging(&config.config);
    if config.created {
        info!(
            path = %config.paths.file.display(),
            port = config.config.port,
            "created default config"
        );
    }

    let data_dir = dirs::resolve_data_dir().map_err(io::Error::other)?;
    info!(dir = %data_dir.display(), "using data dir");

    let port = port.unwrap_or(config.config.port);
    let (listener, actual_port, used_fallback) = bind_port(port).await?;
    if used_fallback {
        warn!(
            configured = port,
            actual = actual_port,
            "configured port unavailable, using fallback for this run"
        );
    }

    let paths = AppPaths::new(data_dir.clone());
    ensure_app_data_dir(&paths).map_err(|err| io::Error::other(err.to_string()))?;

    let app_state = AppState::new(AppConfig {
        db_path: paths.db_path,
        storage_dir: paths.storage_dir,
        public_base_url: config.config.public_base_url_for(actual_port),
        utc_offset: reporting_offset(&config.config),
    });
    app_state
        .initialize()
        .map_err(|err| io::Error::other(format!("failed to initialize database: {}", err)))?;

    let chat = ChatRelay::from_env(config.config.chat_endpoint.clone());
    if !chat.is_configured() {
        warn!("HF_API_KEY is not set; chat requests will fail");
    }

    let context = AppContext {
        app_state,
        app_data_dir: data_dir,
    };
    let csrf_token = generate_csrf_token();
    let state = HttpState::new(context, csrf_token.clone(), chat);
    let router = http_api::router(state);

    let url = format!("http://127.0.0.1:{actual_port}");
    println!("Fleet Manager is running at {url}");
    println!("API token ({}): {csrf_token}", http_api::CSRF_HEADER);
    println!("Press Ctrl+C to stop.");

    if !no_open && let Err(err) = open_url(&url) {
        warn!(error = %err, "failed to open browser");
    }

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("server stopped");
    Ok(())
}

fn reporting_offset(config: &CliConfig) -> FixedOffset {
    config
        .utc_offset_minutes
        .and_then(|minutes| FixedOffset::east_opt(minutes * 60))
        .unwrap_or_else(|| Local::now().offset().fix())
}

async fn bind_port(port: u16) -> Result<(tokio::net::TcpListener, u16, bool), io::Error> {
    if port == 0 {
        let listener = tokio::net::TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let actual_port = listener.local_addr()?.port();
        return Ok((listener, actual_port, false));
    }

    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => Ok((listener, port, false)),
        Err(_) => {
            let listener =
                tokio::net::TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
            let actual_port = listener.local_addr()?.port();
            Ok((listener, actual_port, true))
        }
    }
}

fn open_url(url: &str) -> Result<(), io::Error> {
    let opener = if cfg!(target_os = "macos") {
        "open"
    } else {
        "xdg-open"
    };
    let status = Command::new(opener).arg(url).status()?;
    if status.success() {
        Ok(())
    } else {
        Err(io::Error::other(format!("{opener} command failed")))
    }
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
}
