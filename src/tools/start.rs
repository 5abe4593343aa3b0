use crate::error::Result;
use crate::tools::{Tool, ToolContext};
use async_trait::async_trait;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Parameters for the start tool
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct StartParams {
    /// Name of the browser to launch. Supported values: 'chrome', 'firefox'
    pub browser_name: String,
}

/// Tool for launching the browser session
#[derive(Default)]
pub struct StartTool;

#[async_trait]
impl Tool for StartTool {
    type Params = StartParams;

    fn name(&self) -> &str {
        "browser_start"
    }

    fn description(&self) -> &str {
        "Launches a new browser instance. Supports Chrome and Firefox browsers"
    }

    async fn execute_typed(&self, params: StartParams, context: &ToolContext<'_>) -> Result<String> {
        context.session.start(&params.browser_name).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_params() {
        let params: StartParams = serde_json::from_value(serde_json::json!({ "browser_name": "Chrome" })).unwrap();
        assert_eq!(params.browser_name, "Chrome");

        assert!(serde_json::from_value::<StartParams>(serde_json::json!({})).is_err());
        assert!(serde_json::from_value::<StartParams>(serde_json::json!({ "browser_name": 7 })).is_err());
    }

    #[test]
    fn test_start_tool_metadata() {
        let tool = StartTool;
        assert_eq!(tool.name(), "browser_start");

        let schema = tool.parameters_schema();
        assert_eq!(schema["type"], "object");
        assert_eq!(schema["properties"]["browser_name"]["type"], "string");
        assert_eq!(schema["required"], serde_json::json!(["browser_name"]));
    }
}
