use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use tokio_util::sync::CancellationToken;

use super::handler::{Tool, ToolHandler};
use crate::client::ApiClient;
use crate::endpoints::Endpoint;
use crate::error::ToolError;

/// Handler bound to one endpoint row and the shared client.
pub struct EndpointTool {
    endpoint: &'static Endpoint,
    client: Arc<ApiClient>,
}

impl EndpointTool {
    pub fn new(endpoint: &'static Endpoint, client: Arc<ApiClient>) -> Self {
        Self { endpoint, client }
    }

    pub fn into_tool(self) -> Tool {
        Tool::new(self.endpoint.definition(), self)
    }
}

#[async_trait]
impl ToolHandler for EndpointTool {
    async fn call(&self, input: &Value, cancel: &CancellationToken) -> Result<String, ToolError> {
        self.client.execute(self.endpoint, input, cancel).await
    }
}
