use std::sync::Arc;

use serde_json::{json, Value};
use tokio_util::sync::CancellationToken;

use super::definition::ToolDefinition;
use super::endpoint::EndpointTool;
use super::handler::{Tool, ToolHandler};
use crate::client::ApiClient;
use crate::config::ApiConfig;
use crate::endpoints;
use crate::error::ToolError;

/// Catalog of available tools. Built once at startup, read-only afterwards.
pub struct ToolRegistry {
    tools: Vec<Tool>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self { tools: Vec::new() }
    }

    /// Every accounts and creatives tool, sharing one client built from
    /// `config`.
    pub fn for_api(config: ApiConfig) -> Self {
        Self::for_client(Arc::new(ApiClient::new(config)))
    }

    pub fn for_client(client: Arc<ApiClient>) -> Self {
        endpoints::all().fold(Self::new(), |registry, endpoint| {
            registry.register(EndpointTool::new(endpoint, client.clone()).into_tool())
        })
    }

    /// Register a tool under its definition's name.
    pub fn add(self, definition: ToolDefinition, handler: impl ToolHandler + 'static) -> Self {
        self.register(Tool::new(definition, handler))
    }

    pub fn register(mut self, tool: Tool) -> Self {
        self.tools.push(tool);
        self
    }

    pub fn tools(&self) -> &[Tool] {
        &self.tools
    }

    pub fn get(&self, name: &str) -> Option<&Tool> {
        self.tools.iter().find(|t| t.name() == name)
    }

    pub fn definitions(&self) -> Vec<&ToolDefinition> {
        self.tools.iter().map(|t| &t.definition).collect()
    }

    /// All tool schemas in registration order.
    pub fn schemas(&self) -> Vec<Value> {
        self.tools.iter().map(|t| t.definition.schema()).collect()
    }

    pub fn schema(&self, name: &str) -> Option<Value> {
        self.get(name).map(|t| t.definition.schema())
    }

    /// Dispatch to a tool's handler by name.
    pub async fn execute(
        &self,
        name: &str,
        input: &Value,
        cancel: &CancellationToken,
    ) -> Result<String, ToolError> {
        let tool = self
            .get(name)
            .ok_or_else(|| ToolError::UnknownTool(name.to_string()))?;
        tool.call(input, cancel).await
    }

    /// Search tools by query. Matches against name and description and
    /// returns compact summaries (name + description, no input_schema).
    pub fn search(&self, query: &str) -> Vec<Value> {
        let query_lower = query.to_lowercase();
        let terms: Vec<&str> = query_lower.split_whitespace().collect();

        self.tools
            .iter()
            .filter(|t| {
                let haystack = format!(
                    "{} {}",
                    t.definition.name.to_lowercase(),
                    t.definition.description.to_lowercase()
                );
                terms.iter().any(|term| haystack.contains(term))
            })
            .map(|t| {
                json!({
                    "name": t.definition.name,
                    "description": t.definition.description,
                })
            })
            .collect()
    }

    pub fn tool_names(&self) -> Vec<&str> {
        self.tools.iter().map(|t| t.name()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}
