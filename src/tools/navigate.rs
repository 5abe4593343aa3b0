use crate::error::Result;
use crate::tools::{Tool, ToolContext};
use async_trait::async_trait;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Parameters for the navigate tool
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct NavigateParams {
    /// The complete URL to navigate to (e.g., https://example.com)
    pub url: String,
}

/// Tool for navigating to a URL
#[derive(Default)]
pub struct NavigateTool;

#[async_trait]
impl Tool for NavigateTool {
    type Params = NavigateParams;

    fn name(&self) -> &str {
        "browser_navigate"
    }

    fn description(&self) -> &str {
        "Navigate the browser to a specified URL. The browser must be started first"
    }

    async fn execute_typed(&self, params: NavigateParams, context: &ToolContext<'_>) -> Result<String> {
        context.session.navigate(&params.url).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigate_params() {
        let json = serde_json::json!({
            "url": "https://example.com"
        });

        let params: NavigateParams = serde_json::from_value(json).unwrap();
        assert_eq!(params.url, "https://example.com");
    }

    #[test]
    fn test_navigate_params_missing_url() {
        assert!(serde_json::from_value::<NavigateParams>(serde_json::json!({ "href": "x" })).is_err());
    }

    #[test]
    fn test_navigate_tool_metadata() {
        let tool = NavigateTool;
        assert_eq!(tool.name(), "browser_navigate");
        let schema = tool.parameters_schema();
        assert_eq!(schema["properties"]["url"]["type"], "string");
        assert_eq!(schema["required"], serde_json::json!(["url"]));
    }
}
