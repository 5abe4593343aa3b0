use crate::error::Result;
use crate::tools::{Tool, ToolContext};
use async_trait::async_trait;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CloseParams {}

#[derive(Default)]
pub struct CloseTool;

#[async_trait]
impl Tool for CloseTool {
    type Params = CloseParams;

    fn name(&self) -> &str {
        "browser_close"
    }

    fn description(&self) -> &str {
        "Close the browser"
    }

    async fn execute_typed(&self, _params: CloseParams, context: &ToolContext<'_>) -> Result<String> {
        context.session.close().await
    }
}
