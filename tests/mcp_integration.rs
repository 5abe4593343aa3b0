//! End-to-end tests: an rmcp client talks to `BrowserServer` over an in-memory duplex pipe.
//! The browser itself is replaced by an in-memory driver so no Chrome/geckodriver is needed.

use async_trait::async_trait;
use browser_mcp::{
    BrowserServer, BrowserSession, Engine, LaunchOptions, ServerLoop, ServerState,
    browser::{BrowserDriver, BrowserLauncher},
};
use rmcp::{
    ServiceExt,
    model::{CallToolRequestParam, CallToolResult, RawContent},
    service::{RoleClient, RunningService},
};
use serde_json::{Value, json};
use std::sync::Arc;

const PAGE: &str = "Example Domain\nThis domain is for use in illustrative examples in documents.";

struct StaticPageLauncher;

struct StaticPageDriver {
    loaded: bool,
}

#[async_trait]
impl BrowserLauncher for StaticPageLauncher {
    async fn launch(&self, _engine: Engine, _options: &LaunchOptions) -> anyhow::Result<Box<dyn BrowserDriver>> {
        Ok(Box::new(StaticPageDriver { loaded: false }))
    }
}

#[async_trait]
impl BrowserDriver for StaticPageDriver {
    async fn navigate(&mut self, url: &str) -> anyhow::Result<()> {
        if !url.starts_with("https://") {
            anyhow::bail!("invalid argument: '{}' is not a valid URL", url);
        }
        self.loaded = true;
        Ok(())
    }

    async fn body_text(&mut self) -> anyhow::Result<String> {
        Ok(if self.loaded { PAGE.to_string() } else { String::new() })
    }

    async fn quit(&mut self) -> anyhow::Result<()> {
        Ok(())
    }
}

fn new_session() -> Arc<BrowserSession> {
    Arc::new(BrowserSession::with_launcher(LaunchOptions::default(), Arc::new(StaticPageLauncher)))
}

async fn connect(session: Arc<BrowserSession>) -> RunningService<RoleClient, ()> {
    let (server_io, client_io) = tokio::io::duplex(64 * 1024);

    tokio::spawn(async move {
        let server = BrowserServer::with_session(session).serve(server_io).await?;
        server.waiting().await?;
        anyhow::Ok(())
    });

    ().serve(client_io).await.expect("client failed to initialize")
}

async fn call(client: &RunningService<RoleClient, ()>, name: &str, arguments: Value) -> CallToolResult {
    client
        .call_tool(CallToolRequestParam { name: name.to_string().into(), arguments: arguments.as_object().cloned() })
        .await
        .expect("tools/call should never fail at the protocol level")
}

fn text_of(result: &CallToolResult) -> String {
    match &result.content[0].raw {
        RawContent::Text(text) => text.text.clone(),
        other => panic!("expected text content, got {:?}", other),
    }
}

#[tokio::test]
async fn test_lists_browser_tools() {
    let client = connect(new_session()).await;

    let tools = client.list_all_tools().await.unwrap();
    let names: Vec<&str> = tools.iter().map(|tool| &*tool.name).collect();
    assert_eq!(names, vec!["browser_start", "browser_navigate", "browser_read_text", "browser_close"]);

    let start = &tools[0];
    assert_eq!(start.input_schema["type"], "object");
    assert_eq!(start.input_schema["properties"]["browser_name"]["type"], "string");
    assert_eq!(start.input_schema["required"], json!(["browser_name"]));

    client.cancel().await.unwrap();
}

#[tokio::test]
async fn test_start_on_fresh_process() {
    let client = connect(new_session()).await;

    let result = call(&client, "browser_start", json!({ "browser_name": "chrome" })).await;

    assert_eq!(result.is_error, Some(false));
    assert_eq!(text_of(&result), "Browser started successfully.");
    client.cancel().await.unwrap();
}

#[tokio::test]
async fn test_second_start_keeps_first_browser() {
    let session = new_session();
    let client = connect(session.clone()).await;

    call(&client, "browser_start", json!({ "browser_name": "chrome" })).await;
    let result = call(&client, "browser_start", json!({ "browser_name": "firefox" })).await;

    assert_eq!(result.is_error, Some(true));
    assert!(text_of(&result).contains("already running"));
    assert_eq!(session.engine().await, Some(Engine::Chrome));
    client.cancel().await.unwrap();
}

#[tokio::test]
async fn test_navigate_before_start() {
    let client = connect(new_session()).await;

    let result = call(&client, "browser_navigate", json!({ "url": "https://example.com" })).await;

    assert_eq!(result.is_error, Some(true));
    assert!(text_of(&result).contains("not started"));
    client.cancel().await.unwrap();
}

#[tokio::test]
async fn test_unsupported_browser() {
    let session = new_session();
    let client = connect(session.clone()).await;

    let result = call(&client, "browser_start", json!({ "browser_name": "safari" })).await;

    assert_eq!(result.is_error, Some(true));
    assert_eq!(text_of(&result), "Error unsupported browser: safari");
    assert_eq!(session.engine().await, None);
    client.cancel().await.unwrap();
}

#[tokio::test]
async fn test_close_twice() {
    let client = connect(new_session()).await;

    call(&client, "browser_start", json!({ "browser_name": "chrome" })).await;
    let first = call(&client, "browser_close", json!({})).await;
    let second = call(&client, "browser_close", json!({})).await;

    assert_eq!(first.is_error, Some(false));
    assert_eq!(second.is_error, Some(true));
    assert!(text_of(&second).contains("not started"));
    client.cancel().await.unwrap();
}

#[tokio::test]
async fn test_read_text_after_navigate() {
    let client = connect(new_session()).await;

    call(&client, "browser_start", json!({ "browser_name": "Firefox" })).await;
    let navigated = call(&client, "browser_navigate", json!({ "url": "https://example.com" })).await;
    let result = call(&client, "browser_read_text", json!({})).await;

    assert_eq!(navigated.is_error, Some(false));
    assert_eq!(result.is_error, Some(false));
    assert_eq!(text_of(&result), PAGE);
    client.cancel().await.unwrap();
}

#[tokio::test]
async fn test_driver_failure_is_a_tool_error() {
    let client = connect(new_session()).await;

    call(&client, "browser_start", json!({ "browser_name": "chrome" })).await;
    let result = call(&client, "browser_navigate", json!({ "url": "example" })).await;

    assert_eq!(result.is_error, Some(true));
    assert!(text_of(&result).starts_with("Error navigating to url:"));
    client.cancel().await.unwrap();
}

#[tokio::test]
async fn test_unknown_tool_and_bad_arguments() {
    let client = connect(new_session()).await;

    let unknown = call(&client, "BROWSER_START", json!({ "browser_name": "chrome" })).await;
    assert_eq!(unknown.is_error, Some(true));
    assert!(text_of(&unknown).contains("unknown tool"));

    let missing = call(&client, "browser_navigate", json!({})).await;
    assert_eq!(missing.is_error, Some(true));
    assert!(text_of(&missing).contains("invalid arguments"));

    client.cancel().await.unwrap();
}

#[tokio::test]
async fn test_shutdown_closes_browser_and_transport() {
    let session = new_session();
    let server_loop = ServerLoop::new(session.clone());
    let (server_io, client_io) = tokio::io::duplex(64 * 1024);

    let server = tokio::spawn({
        let session = session.clone();
        let ct = server_loop.cancellation_token();
        async move {
            let running = BrowserServer::with_session(session).serve_with_ct(server_io, ct).await?;
            running.waiting().await?;
            anyhow::Ok(())
        }
    });
    let client = ().serve(client_io).await.unwrap();
    server_loop.mark_running();
    assert_eq!(server_loop.state(), ServerState::Running);

    call(&client, "browser_start", json!({ "browser_name": "chrome" })).await;
    assert!(server_loop.shutdown().await);

    assert_eq!(server_loop.state(), ServerState::Stopped);
    assert_eq!(session.engine().await, None);
    server.await.unwrap().unwrap();
}
