pub mod definition;
pub mod endpoint;
pub mod handler;
pub mod registry;

pub use definition::{ParamKind, ToolDefinition, ToolParam};
pub use endpoint::EndpointTool;
pub use handler::{Tool, ToolHandler};
pub use registry::ToolRegistry;
