//! Declarative endpoint table. Each row carries everything the executor in
//! [`crate::client`] needs to turn an argument object into one HTTP call.

pub mod accounts;
pub mod creatives;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::ToolError;
use crate::models::{Account, AccountsList, Creative, CreativesList};
use crate::tools::{ToolDefinition, ToolParam};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    Get,
    Post,
    Patch,
    Put,
}

impl Verb {
    pub fn as_method(&self) -> reqwest::Method {
        match self {
            Verb::Get => reqwest::Method::GET,
            Verb::Post => reqwest::Method::POST,
            Verb::Patch => reqwest::Method::PATCH,
            Verb::Put => reqwest::Method::PUT,
        }
    }
}

/// Which wire record a request or response body is coerced through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Schema {
    Account,
    AccountsList,
    Creative,
    CreativesList,
}

impl Schema {
    /// Coerce an argument object into this record and serialize it.
    /// Unknown keys are dropped; mistyped known keys are an error.
    pub fn encode_body(self, fields: Map<String, Value>) -> Result<Vec<u8>, ToolError> {
        let value = Value::Object(fields);
        match self {
            Schema::Account => encode_as::<Account>(value),
            Schema::AccountsList => encode_as::<AccountsList>(value),
            Schema::Creative => encode_as::<Creative>(value),
            Schema::CreativesList => encode_as::<CreativesList>(value),
        }
    }

    /// Pretty-print `body` as this record. `None` when it doesn't decode.
    pub fn reformat(self, body: &str) -> Option<Result<String, serde_json::Error>> {
        match self {
            Schema::Account => reformat_as::<Account>(body),
            Schema::AccountsList => reformat_as::<AccountsList>(body),
            Schema::Creative => reformat_as::<Creative>(body),
            Schema::CreativesList => reformat_as::<CreativesList>(body),
        }
    }
}

fn encode_as<T: DeserializeOwned + Serialize>(value: Value) -> Result<Vec<u8>, ToolError> {
    let typed: T =
        serde_json::from_value(value).map_err(|e| ToolError::ConvertArguments(e.to_string()))?;
    serde_json::to_vec(&typed).map_err(|e| ToolError::EncodeBody(e.to_string()))
}

fn reformat_as<T: DeserializeOwned + Serialize>(
    body: &str,
) -> Option<Result<String, serde_json::Error>> {
    let decoded: T = serde_json::from_str(body).ok()?;
    Some(serde_json::to_string_pretty(&decoded))
}

/// One REST endpoint exposed as a tool.
#[derive(Debug)]
pub struct Endpoint {
    pub tool_name: &'static str,
    pub description: &'static str,
    pub verb: Verb,
    /// Relative to the base URL; `{name}` segments are filled from arguments.
    pub path: &'static str,
    pub path_params: &'static [&'static str],
    /// Arguments forwarded verbatim into the query string, in this order.
    pub query_params: &'static [&'static str],
    pub request: Option<Schema>,
    pub response: Schema,
    pub params: &'static [ToolParam],
}

impl Endpoint {
    pub fn definition(&self) -> ToolDefinition {
        ToolDefinition::new(self.tool_name, self.description).with_params(self.params.iter().cloned())
    }
}

/// Every endpoint, in registration order.
pub fn all() -> impl Iterator<Item = &'static Endpoint> {
    accounts::ENDPOINTS.iter().chain(creatives::ENDPOINTS.iter())
}
