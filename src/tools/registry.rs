use crate::error::{BrowserError, Result};
use crate::tools::{Tool, ToolContext, ToolSpec, close::CloseTool, navigate::NavigateTool, read_text::ReadTextTool,
                   start::StartTool};
use async_trait::async_trait;
use serde_json::{Map, Value};

/// Object-safe view of a [`Tool`]: decodes the argument bundle, then runs the tool
#[async_trait]
trait DynTool: Send + Sync {
    async fn execute(&self, arguments: Map<String, Value>, context: &ToolContext<'_>) -> Result<String>;
}

#[async_trait]
impl<T: Tool + 'static> DynTool for T {
    async fn execute(&self, arguments: Map<String, Value>, context: &ToolContext<'_>) -> Result<String> {
        let params: T::Params =
            serde_json::from_value(Value::Object(arguments)).map_err(|e| BrowserError::InvalidArguments {
                tool: self.name().to_string(),
                reason: e.to_string(),
            })?;
        self.execute_typed(params, context).await
    }
}

struct RegisteredTool {
    spec: ToolSpec,
    tool: Box<dyn DynTool>,
}

/// Ordered set of tools, looked up by exact name
#[derive(Default)]
pub struct ToolRegistry {
    tools: Vec<RegisteredTool>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the four browser tools
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(StartTool);
        registry.register(NavigateTool);
        registry.register(ReadTextTool);
        registry.register(CloseTool);
        registry
    }

    /// Add a tool. A tool registered under an existing name replaces it.
    pub fn register<T: Tool + 'static>(&mut self, tool: T) {
        let spec = ToolSpec {
            name: tool.name().to_string(),
            description: tool.description().to_string(),
            input_schema: tool.parameters_schema(),
        };
        let entry = RegisteredTool { spec, tool: Box::new(tool) };

        match self.tools.iter_mut().find(|existing| existing.spec.name == entry.spec.name) {
            Some(existing) => *existing = entry,
            None => self.tools.push(entry),
        }
    }

    pub fn get(&self, name: &str) -> Option<&ToolSpec> {
        self.find(name).map(|entry| &entry.spec)
    }

    pub fn specs(&self) -> impl Iterator<Item = &ToolSpec> {
        self.tools.iter().map(|entry| &entry.spec)
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Decode `arguments` for the tool named `name` and run it
    pub async fn execute(&self, name: &str, arguments: Map<String, Value>, context: &ToolContext<'_>) -> Result<String> {
        let entry = self.find(name).ok_or_else(|| BrowserError::UnknownTool(name.to_string()))?;
        entry.tool.execute(arguments, context).await
    }

    fn find(&self, name: &str) -> Option<&RegisteredTool> {
        self.tools.iter().find(|entry| entry.spec.name == name)
    }
}
