//! MCP (Model Context Protocol) server implementation for browser automation
//!
//! [`BrowserServer`] advertises the tool registry over MCP and hands every
//! `tools/call` request to the [`Dispatcher`](crate::tools::Dispatcher).

pub mod handler;
pub use handler::BrowserServer;

use crate::tools::{ToolCallResult, ToolSpec};
use rmcp::model::{CallToolResult, Content, Tool as McpTool};
use std::sync::Arc;

/// Describe a registered tool the way MCP clients expect it
fn to_mcp_tool(spec: &ToolSpec) -> McpTool {
    McpTool::new(spec.name.clone(), spec.description.clone(), Arc::new(spec.input_schema.clone()))
}

/// Convert a dispatcher result to an MCP CallToolResult
fn convert_result(result: ToolCallResult) -> CallToolResult {
    if result.is_error {
        CallToolResult::error(vec![Content::text(result.text)])
    } else {
        CallToolResult::success(vec![Content::text(result.text)])
    }
}
