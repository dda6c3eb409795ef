//! Tool adapters for the Ad Exchange Buyer REST API (accounts and creatives).
//!
//! [`ToolRegistry::for_api`] builds the full tool list from an [`ApiConfig`].
//! A host runtime lists the definitions once and dispatches invocations to
//! [`ToolRegistry::execute`]; each call is a single HTTP round trip.

pub mod client;
pub mod config;
pub mod endpoints;
pub mod error;
pub mod models;
pub mod tools;

pub use client::ApiClient;
pub use config::ApiConfig;
pub use endpoints::{Endpoint, Schema, Verb};
pub use error::{ConfigError, ToolError};
pub use models::{Account, AccountsList, Creative, CreativesList};
pub use tools::{ParamKind, Tool, ToolDefinition, ToolHandler, ToolParam, ToolRegistry};
