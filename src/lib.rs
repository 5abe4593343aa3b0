//! # browser-mcp
//!
//! A Model Context Protocol (MCP) server that lets an AI agent drive a single
//! browser session: start Chrome or Firefox, navigate, read the page text, close.
//!
//! ## Running the MCP Server
//!
//! ```bash
//! # Headless, over stdio
//! cargo run --bin mcp-server
//!
//! # Visible browser, streamable HTTP on port 3000
//! cargo run --bin mcp-server -- --headed --transport http
//! ```
//!
//! Chrome is launched directly over the DevTools protocol. Firefox sessions go
//! through a WebDriver server, so start `geckodriver` first (default
//! `http://localhost:4444`, see `--webdriver-url`).
//!
//! ## Tools
//!
//! | Tool                | Arguments                         | Effect                          |
//! |---------------------|-----------------------------------|---------------------------------|
//! | `browser_start`     | `browser_name`: chrome / firefox  | launches the browser            |
//! | `browser_navigate`  | `url`                             | loads the URL                   |
//! | `browser_read_text` |                                   | returns the visible body text   |
//! | `browser_close`     |                                   | closes the browser              |
//!
//! Every call returns a text result. Failures have `isError` set and their
//! text starts with `Error`.
//!
//! ## Library Usage
//!
//! ```rust,no_run
//! use browser_mcp::{BrowserSession, LaunchOptions};
//! use browser_mcp::tools::{Dispatcher, ToolCallRequest};
//! use serde_json::json;
//! use std::sync::Arc;
//!
//! # async fn run() {
//! let session = Arc::new(BrowserSession::new(LaunchOptions::default()));
//! let dispatcher = Dispatcher::with_defaults(session);
//!
//! let result = dispatcher
//!     .handle(ToolCallRequest::from_json("browser_start", json!({"browser_name": "chrome"})))
//!     .await;
//! assert!(!result.is_error);
//! # }
//! ```
//!
//! ## Module Overview
//!
//! - [`browser`]: engines, driver backends and the shared [`BrowserSession`]
//! - [`tools`]: tool definitions, registry and dispatcher
//! - [`error`]: error types and result aliases
//! - [`server`]: process lifecycle and shutdown
//! - [`mcp`]: MCP server handler (requires `mcp-handler` feature)

pub mod browser;
pub mod error;
pub mod server;
pub mod tools;

#[cfg(feature = "mcp-handler")]
pub mod mcp;

pub use browser::{BrowserSession, Engine, LaunchOptions};
pub use error::{BrowserError, ErrorKind, Result};
pub use server::{ServerLoop, ServerState};
pub use tools::{Dispatcher, Tool, ToolCallRequest, ToolCallResult, ToolContext, ToolRegistry, ToolSpec};

#[cfg(feature = "mcp-handler")]
pub use mcp::BrowserServer;
#[cfg(feature = "mcp-handler")]
pub use rmcp::ServiceExt;
