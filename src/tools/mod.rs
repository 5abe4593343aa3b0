//! Browser automation tools
//!
//! Each tool declares a typed parameter struct; its JSON schema is what the
//! calling agent sees, and the same struct is what incoming arguments are
//! decoded into before the tool runs.

pub mod close;
pub mod dispatcher;
pub mod navigate;
pub mod read_text;
pub mod registry;
pub mod start;

pub use dispatcher::Dispatcher;
pub use registry::ToolRegistry;

use crate::{browser::BrowserSession, error::Result};
use async_trait::async_trait;
use schemars::JsonSchema;
use serde::{Serialize, de::DeserializeOwned};
use serde_json::{Map, Value};

/// Context handed to a tool while it runs
pub struct ToolContext<'a> {
    pub session: &'a BrowserSession,
}

impl<'a> ToolContext<'a> {
    pub fn new(session: &'a BrowserSession) -> Self {
        Self { session }
    }
}

/// A browser operation that can be invoked by name
#[async_trait]
pub trait Tool: Send + Sync {
    type Params: DeserializeOwned + JsonSchema + Send;

    fn name(&self) -> &str;

    fn description(&self) -> &str;

    /// JSON schema of [`Tool::Params`], always an object with a `properties` map
    fn parameters_schema(&self) -> Map<String, Value> {
        let schema = serde_json::to_value(schemars::schema_for!(Self::Params)).unwrap_or(Value::Null);
        let mut object = match schema {
            Value::Object(object) => object,
            _ => Map::new(),
        };
        object.entry("type").or_insert_with(|| Value::String("object".to_string()));
        object.entry("properties").or_insert_with(|| Value::Object(Map::new()));
        object
    }

    async fn execute_typed(&self, params: Self::Params, context: &ToolContext<'_>) -> Result<String>;
}

/// Advertised description of a registered tool
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToolSpec {
    pub name: String,
    pub description: String,
    pub input_schema: Map<String, Value>,
}

/// One named parameter from a tool's schema
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterSpec {
    pub name: String,
    pub type_tag: String,
    pub required: bool,
}

impl ToolSpec {
    /// Parameters declared in the input schema, in schema order
    pub fn parameters(&self) -> Vec<ParameterSpec> {
        let required: Vec<&str> = self
            .input_schema
            .get("required")
            .and_then(Value::as_array)
            .map(|names| names.iter().filter_map(Value::as_str).collect())
            .unwrap_or_default();

        self.input_schema
            .get("properties")
            .and_then(Value::as_object)
            .map(|properties| {
                properties
                    .iter()
                    .map(|(name, property)| ParameterSpec {
                        name: name.clone(),
                        type_tag: property.get("type").and_then(Value::as_str).unwrap_or("any").to_string(),
                        required: required.contains(&name.as_str()),
                    })
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// An inbound tool invocation
#[derive(Debug, Clone, PartialEq)]
pub struct ToolCallRequest {
    pub tool_name: String,
    pub arguments: Map<String, Value>,
}

impl ToolCallRequest {
    pub fn new(tool_name: impl Into<String>, arguments: Map<String, Value>) -> Self {
        Self { tool_name: tool_name.into(), arguments }
    }

    /// Build a request from any JSON value; non-object arguments become an empty bundle
    pub fn from_json(tool_name: impl Into<String>, arguments: Value) -> Self {
        let arguments = match arguments {
            Value::Object(map) => map,
            _ => Map::new(),
        };
        Self::new(tool_name, arguments)
    }
}

/// What the calling agent gets back for every call
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToolCallResult {
    pub text: String,
    pub is_error: bool,
}

impl ToolCallResult {
    pub fn success(text: impl Into<String>) -> Self {
        Self { text: text.into(), is_error: false }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self { text: text.into(), is_error: true }
    }
}

impl From<Result<String>> for ToolCallResult {
    fn from(outcome: Result<String>) -> Self {
        match outcome {
            Ok(text) => ToolCallResult::success(text),
            Err(e) => ToolCallResult::error(e.to_string()),
        }
    }
}
