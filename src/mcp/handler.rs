use crate::browser::{BrowserSession, LaunchOptions};
use crate::mcp::{convert_result, to_mcp_tool};
use crate::tools::{Dispatcher, ToolCallRequest};
use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler,
    model::{
        CallToolRequestParam, CallToolResult, Implementation, ListToolsResult, PaginatedRequestParam,
        ServerCapabilities, ServerInfo, Tool as McpTool,
    },
    service::RequestContext,
};
use std::sync::Arc;

const INSTRUCTIONS: &str = "Controls a single browser session. Call browser_start with browser_name \
     'chrome' or 'firefox' first, then browser_navigate to load a URL and browser_read_text to read \
     the visible page text. Call browser_close when done. Only one browser can run at a time.";

/// MCP server exposing the browser tools.
///
/// Clones share the same dispatcher and therefore the same browser session,
/// so every transport connection drives the one browser this process owns.
#[derive(Clone)]
pub struct BrowserServer {
    dispatcher: Arc<Dispatcher>,
}

impl BrowserServer {
    /// Server whose browser is launched on demand with `options`
    pub fn with_options(options: LaunchOptions) -> Self {
        Self::with_session(Arc::new(BrowserSession::new(options)))
    }

    pub fn with_session(session: Arc<BrowserSession>) -> Self {
        Self::with_dispatcher(Dispatcher::with_defaults(session))
    }

    pub fn with_dispatcher(dispatcher: Dispatcher) -> Self {
        Self { dispatcher: Arc::new(dispatcher) }
    }

    pub fn session(&self) -> &Arc<BrowserSession> {
        self.dispatcher.session()
    }

    /// Tools as advertised by `tools/list`
    pub fn tools(&self) -> Vec<McpTool> {
        self.dispatcher.tools().map(to_mcp_tool).collect()
    }

    /// Run one tool call. Failures come back as results with `is_error` set, never as protocol errors.
    pub async fn call(&self, request: CallToolRequestParam) -> CallToolResult {
        let request = ToolCallRequest::new(request.name.into_owned(), request.arguments.unwrap_or_default());
        convert_result(self.dispatcher.handle(request).await)
    }
}

impl ServerHandler for BrowserServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: env!("CARGO_PKG_NAME").into(),
                version: env!("CARGO_PKG_VERSION").into(),
                ..Default::default()
            },
            instructions: Some(INSTRUCTIONS.into()),
            ..Default::default()
        }
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, McpError> {
        Ok(ListToolsResult::with_all_items(self.tools()))
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        Ok(self.call(request).await)
    }
}
