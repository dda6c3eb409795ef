/// Everything a tool invocation can fail with. The `Display` text is what the
/// host runtime surfaces as the error result.
#[derive(Debug, thiserror::Error)]
pub enum ToolError {
    #[error("Invalid arguments object")]
    InvalidArguments,
    #[error("Missing required path parameter: {0}")]
    MissingPathParameter(String),
    #[error("Invalid path parameter: {0}")]
    InvalidPathParameter(String),
    #[error("Failed to convert arguments to request type: {0}")]
    ConvertArguments(String),
    #[error("Failed to encode request body: {0}")]
    EncodeBody(String),
    #[error("Request failed: {0}")]
    Request(String),
    #[error("Failed to read response body: {0}")]
    ReadBody(String),
    #[error("API error: {body}")]
    Api { status: u16, body: String },
    #[error("Failed to format JSON: {0}")]
    FormatJson(String),
    #[error("Request cancelled")]
    Cancelled,
    #[error("Unknown tool: {0}")]
    UnknownTool(String),
}

impl ToolError {
    /// True when the failure was detected before any HTTP request was sent.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidArguments
                | Self::MissingPathParameter(_)
                | Self::InvalidPathParameter(_)
                | Self::ConvertArguments(_)
                | Self::EncodeBody(_)
                | Self::UnknownTool(_)
        )
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid base URL {url:?}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}
