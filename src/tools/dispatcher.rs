use crate::browser::BrowserSession;
use crate::tools::{ToolCallRequest, ToolCallResult, ToolContext, ToolRegistry, ToolSpec};
use std::sync::Arc;

/// Routes tool calls to the registry and turns every outcome into a [`ToolCallResult`].
///
/// The registry is fixed once the dispatcher is built; only the browser session
/// behind it carries mutable state.
pub struct Dispatcher {
    registry: ToolRegistry,
    session: Arc<BrowserSession>,
}

impl Dispatcher {
    pub fn new(registry: ToolRegistry, session: Arc<BrowserSession>) -> Self {
        Self { registry, session }
    }

    /// Dispatcher over the default browser tools
    pub fn with_defaults(session: Arc<BrowserSession>) -> Self {
        Self::new(ToolRegistry::with_defaults(), session)
    }

    pub fn session(&self) -> &Arc<BrowserSession> {
        &self.session
    }

    pub fn tools(&self) -> impl Iterator<Item = &ToolSpec> {
        self.registry.specs()
    }

    pub async fn handle(&self, request: ToolCallRequest) -> ToolCallResult {
        log::debug!("Tool call: {} {:?}", request.tool_name, request.arguments);

        let context = ToolContext::new(&self.session);
        let outcome = self.registry.execute(&request.tool_name, request.arguments, &context).await;

        if let Err(e) = &outcome {
            log::debug!("Tool {} failed: {}", request.tool_name, e);
        }
        outcome.into()
    }
}
