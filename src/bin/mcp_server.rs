//! Browser MCP Server
//!
//! This binary provides a Model Context Protocol (MCP) server that exposes a
//! single Chrome or Firefox session to AI assistants and other MCP clients.

use anyhow::Context;
use browser_mcp::{BrowserServer, BrowserSession, LaunchOptions, ServerLoop, browser::config::DEFAULT_WEBDRIVER_URL};
use clap::{Parser, ValueEnum};
use rmcp::{
    ServiceExt,
    transport::{
        stdio,
        streamable_http_server::{StreamableHttpService, session::local::LocalSessionManager},
    },
};
use std::{future::IntoFuture, sync::Arc};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Transport {
    /// Standard input/output transport (default)
    Stdio,
    /// HTTP streamable transport
    Http,
}

#[derive(Parser)]
#[command(name = "browser-mcp")]
#[command(version)]
#[command(about = "Browser automation MCP server", long_about = None)]
struct Cli {
    /// Launch browser in headed mode (default: headless)
    #[arg(long, short = 'H')]
    headed: bool,

    /// Path to custom Chrome executable
    #[arg(long, value_name = "PATH")]
    executable_path: Option<String>,

    /// Persistent Chrome profile directory
    #[arg(long, value_name = "DIR")]
    user_data_dir: Option<String>,

    /// Disable the Chrome sandbox (needed when running as root in containers)
    #[arg(long)]
    no_sandbox: bool,

    /// WebDriver endpoint for Firefox sessions (geckodriver)
    #[arg(long, value_name = "URL", default_value = DEFAULT_WEBDRIVER_URL)]
    webdriver_url: String,

    /// Browser window size
    #[arg(long, value_name = "WIDTHxHEIGHT", default_value = "1280x800", value_parser = parse_window_size)]
    window_size: (u32, u32),

    /// Transport type to use
    #[arg(long, short = 't', value_enum, default_value = "stdio")]
    transport: Transport,

    /// Port for HTTP transport (default: 3000)
    #[arg(long, short = 'p', default_value = "3000")]
    port: u16,

    /// HTTP streamable endpoint path (default: /mcp)
    #[arg(long, default_value = "/mcp")]
    http_path: String,
}

impl Cli {
    fn launch_options(&self) -> LaunchOptions {
        let mut options = LaunchOptions::new()
            .headless(!self.headed)
            .window_size(self.window_size.0, self.window_size.1)
            .sandbox(!self.no_sandbox)
            .webdriver_url(self.webdriver_url.clone());

        if let Some(ref path) = self.executable_path {
            options = options.chrome_path(path);
        }
        if let Some(ref dir) = self.user_data_dir {
            options = options.user_data_dir(dir);
        }
        options
    }
}

fn parse_window_size(value: &str) -> Result<(u32, u32), String> {
    let (width, height) = value
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got '{}'", value))?;
    let width: u32 = width.trim().parse().map_err(|_| format!("invalid width '{}'", width))?;
    let height: u32 = height.trim().parse().map_err(|_| format!("invalid height '{}'", height))?;
    Ok((width, height))
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Logs go to stderr; stdout belongs to the stdio transport
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let session = Arc::new(BrowserSession::new(cli.launch_options()));

    log::info!("Browser MCP Server v{}", env!("CARGO_PKG_VERSION"));
    log_launch_options(session.options());

    let server_loop = Arc::new(ServerLoop::new(session.clone()));
    let service = BrowserServer::with_session(session);

    let served = match cli.transport {
        Transport::Stdio => serve_stdio(service, &server_loop).await,
        Transport::Http => serve_http(service, &server_loop, cli.port, &cli.http_path).await,
    };

    // Either runs the shutdown routine or waits for the signal handler's run to finish
    server_loop.shutdown().await;

    // The stdin reader thread stays blocked in read() and SSE streams stay open,
    // so the runtime is never dropped
    let code = match served {
        Ok(()) => 0,
        Err(e) => {
            log::error!("{:#}", e);
            1
        }
    };
    std::process::exit(code)
}

fn log_launch_options(options: &LaunchOptions) {
    log::info!("Browser mode: {}", if options.headless { "headless" } else { "headed" });
    if let Some(ref path) = options.chrome_path {
        log::info!("Chrome executable: {}", path.display());
    }
    if let Some(ref dir) = options.user_data_dir {
        log::info!("User data directory: {}", dir.display());
    }
    log::info!("Firefox WebDriver endpoint: {}", options.webdriver_url);
}

async fn serve_stdio(service: BrowserServer, server_loop: &Arc<ServerLoop>) -> anyhow::Result<()> {
    log::info!("Transport: stdio");
    let running = service
        .serve_with_ct(stdio(), server_loop.cancellation_token())
        .await
        .context("Failed to start stdio transport")?;
    server_loop.mark_running();
    spawn_signal_handler(server_loop.clone());

    let quit_reason = running.waiting().await.context("stdio transport task failed")?;
    log::info!("Server quit with reason: {:?}", quit_reason);
    Ok(())
}

async fn serve_http(
    service: BrowserServer,
    server_loop: &Arc<ServerLoop>,
    port: u16,
    http_path: &str,
) -> anyhow::Result<()> {
    log::info!("Transport: HTTP streamable");
    let bind_addr = format!("127.0.0.1:{}", port);

    // Every HTTP session gets a clone sharing the one browser
    let service_factory = move || Ok::<_, std::io::Error>(service.clone());
    let http_service = StreamableHttpService::new(
        service_factory,
        LocalSessionManager::default().into(),
        Default::default(),
    );
    let router = axum::Router::new().nest_service(http_path, http_service);

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", bind_addr))?;
    log::info!("Ready to accept MCP connections at http://{}{}", bind_addr, http_path);
    server_loop.mark_running();
    spawn_signal_handler(server_loop.clone());

    // Open SSE streams never finish, so stop serving instead of draining connections
    tokio::select! {
        served = axum::serve(listener, router).into_future() => served.context("HTTP server failed")?,
        _ = server_loop.cancelled() => log::info!("HTTP transport stopped"),
    }
    Ok(())
}

/// The first SIGINT/SIGTERM runs the shutdown routine; a second one exits without waiting for it
fn spawn_signal_handler(server_loop: Arc<ServerLoop>) {
    tokio::spawn(async move {
        if let Err(e) = shutdown_signal().await {
            log::warn!("{:#}", e);
            return;
        }

        let shutdown = tokio::spawn(async move { server_loop.shutdown().await });
        tokio::select! {
            _ = shutdown => {}
            Ok(()) = shutdown_signal() => {
                log::warn!("Second signal received, exiting before cleanup finished");
                std::process::exit(130);
            }
        }
    });
}

#[cfg(unix)]
async fn shutdown_signal() -> anyhow::Result<()> {
    use tokio::signal::unix::{SignalKind, signal};

    let mut sigterm = signal(SignalKind::terminate()).context("Failed to install SIGTERM handler")?;
    let mut sigint = signal(SignalKind::interrupt()).context("Failed to install SIGINT handler")?;

    tokio::select! {
        _ = sigterm.recv() => log::info!("Received SIGTERM"),
        _ = sigint.recv() => log::info!("Received SIGINT"),
    }
    Ok(())
}

#[cfg(not(unix))]
async fn shutdown_signal() -> anyhow::Result<()> {
    tokio::signal::ctrl_c().await.context("Failed to listen for Ctrl+C")?;
    log::info!("Received Ctrl+C");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_window_size() {
        assert_eq!(parse_window_size("1024x768"), Ok((1024, 768)));
        assert_eq!(parse_window_size("800X600"), Ok((800, 600)));
        assert!(parse_window_size("1024").is_err());
        assert!(parse_window_size("widexhigh").is_err());
    }

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["mcp-server"]);
        let options = cli.launch_options();

        assert!(options.headless);
        assert!(options.sandbox);
        assert_eq!((options.window_width, options.window_height), (1280, 800));
        assert_eq!(options.webdriver_url, DEFAULT_WEBDRIVER_URL);
        assert!(matches!(cli.transport, Transport::Stdio));
    }

    #[test]
    fn test_cli_overrides() {
        let cli = Cli::parse_from([
            "mcp-server",
            "--headed",
            "--no-sandbox",
            "--executable-path",
            "/opt/chrome/chrome",
            "--window-size",
            "640x480",
            "--transport",
            "http",
            "--port",
            "8080",
        ]);
        let options = cli.launch_options();

        assert!(!options.headless);
        assert!(!options.sandbox);
        assert_eq!(options.chrome_path.as_deref(), Some(std::path::Path::new("/opt/chrome/chrome")));
        assert_eq!((options.window_width, options.window_height), (640, 480));
        assert!(matches!(cli.transport, Transport::Http));
        assert_eq!(cli.port, 8080);
    }
}
