use crate::error::Result;
use crate::tools::{Tool, ToolContext};
use async_trait::async_trait;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Parameters for reading page text (no parameters needed)
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ReadTextParams {}

#[derive(Default)]
pub struct ReadTextTool;

#[async_trait]
impl Tool for ReadTextTool {
    type Params = ReadTextParams;

    fn name(&self) -> &str {
        "browser_read_text"
    }

    fn description(&self) -> &str {
        "Read the visible text of the current page body. The browser must be started first"
    }

    async fn execute_typed(&self, _params: ReadTextParams, context: &ToolContext<'_>) -> Result<String> {
        context.session.read_text().await
    }
}
