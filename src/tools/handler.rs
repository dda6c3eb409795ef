use async_trait::async_trait;
use serde_json::Value;
use tokio_util::sync::CancellationToken;

use super::definition::ToolDefinition;
use crate::error::ToolError;

/// A tool's execution handler. Invocations are independent; implementors
/// hold only read-only state.
#[async_trait]
pub trait ToolHandler: Send + Sync {
    async fn call(&self, input: &Value, cancel: &CancellationToken) -> Result<String, ToolError>;
}

/// A registrable tool: definition for discovery + handler for execution.
pub struct Tool {
    pub definition: ToolDefinition,
    pub(crate) handler: Box<dyn ToolHandler>,
}

impl Tool {
    pub fn new(definition: ToolDefinition, handler: impl ToolHandler + 'static) -> Self {
        Self {
            definition,
            handler: Box::new(handler),
        }
    }

    pub fn name(&self) -> &str {
        &self.definition.name
    }

    pub async fn call(&self, input: &Value, cancel: &CancellationToken) -> Result<String, ToolError> {
        self.handler.call(input, cancel).await
    }
}
