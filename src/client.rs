use reqwest::header::{ACCEPT, CONTENT_TYPE};
use serde_json::{Map, Value};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};
use url::Url;

use crate::config::ApiConfig;
use crate::endpoints::Endpoint;
use crate::error::ToolError;

/// Executes endpoint rows against the remote API. One instance (and one
/// connection pool) is shared by every tool.
pub struct ApiClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Self {
        Self::with_client(reqwest::Client::new(), config)
    }

    pub fn with_client(http: reqwest::Client, config: ApiConfig) -> Self {
        Self { http, config }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Validate `args`, perform one HTTP round trip for `endpoint` and
    /// return the response re-encoded as indented JSON, or the raw body
    /// when it doesn't decode as the endpoint's response record.
    pub async fn execute(
        &self,
        endpoint: &Endpoint,
        args: &Value,
        cancel: &CancellationToken,
    ) -> Result<String, ToolError> {
        let args = args.as_object().ok_or(ToolError::InvalidArguments)?;
        let url = self.build_url(endpoint, args)?;

        let body = match endpoint.request {
            Some(schema) => {
                let mut fields = args.clone();
                for name in endpoint.path_params {
                    fields.remove(*name);
                }
                Some(schema.encode_body(fields)?)
            }
            None => None,
        };

        if cancel.is_cancelled() {
            return Err(ToolError::Cancelled);
        }

        let method = endpoint.verb.as_method();
        debug!(
            tool = endpoint.tool_name,
            method = %method,
            path = url.path(),
            "sending request"
        );

        let mut request = self
            .http
            .request(method, url)
            .header(ACCEPT, "application/json");
        if let Some(body) = body {
            request = request.header(CONTENT_TYPE, "application/json").body(body);
        }

        let (status, text) = tokio::select! {
            result = send(request) => result?,
            _ = cancel.cancelled() => {
                info!(tool = endpoint.tool_name, "request cancelled");
                return Err(ToolError::Cancelled);
            }
        };

        if status >= 400 {
            warn!(tool = endpoint.tool_name, status, "API returned error status");
            return Err(ToolError::Api { status, body: text });
        }

        match endpoint.response.reformat(&text) {
            Some(pretty) => pretty.map_err(|e| ToolError::FormatJson(e.to_string())),
            None => {
                debug!(
                    tool = endpoint.tool_name,
                    "response did not match schema, returning raw body"
                );
                Ok(text)
            }
        }
    }

    /// Base URL + filled path template + forwarded query + credentials.
    pub(crate) fn build_url(
        &self,
        endpoint: &Endpoint,
        args: &Map<String, Value>,
    ) -> Result<Url, ToolError> {
        let mut url = self.config.base_url().clone();
        {
            // ApiConfig::new rejects URLs that cannot carry a path.
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| ToolError::Request("base URL cannot carry a path".into()))?;
            segments.pop_if_empty();
            for segment in endpoint.path.split('/').filter(|s| !s.is_empty()) {
                match segment.strip_prefix('{').and_then(|s| s.strip_suffix('}')) {
                    Some(name) => {
                        segments.push(&path_value(args, name)?);
                    }
                    None => {
                        segments.push(segment);
                    }
                }
            }
        }

        let mut pairs: Vec<(&str, String)> = endpoint
            .query_params
            .iter()
            .filter_map(|name| {
                args.get(*name)
                    .and_then(query_value)
                    .map(|value| (*name, value))
            })
            .collect();
        if let Some(key) = self.config.api_key() {
            pairs.push(("key", key.to_string()));
        }
        if let Some(token) = self.config.bearer_token() {
            pairs.push(("oauth_token", token.to_string()));
        }
        if !pairs.is_empty() {
            url.query_pairs_mut().extend_pairs(pairs);
        }

        Ok(url)
    }
}

async fn send(request: reqwest::RequestBuilder) -> Result<(u16, String), ToolError> {
    // without_url keeps credentials in the query string out of error text.
    let resp = request
        .send()
        .await
        .map_err(|e| ToolError::Request(e.without_url().to_string()))?;
    let status = resp.status().as_u16();
    let text = resp
        .text()
        .await
        .map_err(|e| ToolError::ReadBody(e.without_url().to_string()))?;
    Ok((status, text))
}

/// Strings are used as-is, integers in decimal.
fn path_value(args: &Map<String, Value>, name: &str) -> Result<String, ToolError> {
    match args.get(name) {
        None => Err(ToolError::MissingPathParameter(name.to_string())),
        Some(Value::String(s)) if !s.is_empty() => Ok(s.clone()),
        Some(Value::Number(n)) if n.is_i64() || n.is_u64() => Ok(n.to_string()),
        Some(_) => Err(ToolError::InvalidPathParameter(name.to_string())),
    }
}

fn query_value(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::endpoints::{accounts, creatives};
    use axum::http::{HeaderMap, Method, StatusCode, Uri};
    use axum::Router;
    use serde_json::json;
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    // --- Mock server ---

    #[derive(Debug, Clone)]
    struct Recorded {
        method: Method,
        path: String,
        query: Option<String>,
        headers: HeaderMap,
        body: String,
    }

    struct MockApi {
        base_url: String,
        requests: Arc<Mutex<Vec<Recorded>>>,
    }

    impl MockApi {
        async fn start(status: StatusCode, body: &'static str) -> Self {
            Self::start_with_delay(status, body, Duration::ZERO).await
        }

        async fn start_with_delay(status: StatusCode, body: &'static str, delay: Duration) -> Self {
            let requests = Arc::new(Mutex::new(Vec::new()));
            let log = requests.clone();
            let app = Router::new().fallback(
                move |method: Method, uri: Uri, headers: HeaderMap, payload: String| {
                    let log = log.clone();
                    async move {
                        log.lock().unwrap().push(Recorded {
                            method,
                            path: uri.path().to_string(),
                            query: uri.query().map(str::to_string),
                            headers,
                            body: payload,
                        });
                        tokio::time::sleep(delay).await;
                        (status, body.to_string())
                    }
                },
            );

            let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
            let addr = listener.local_addr().unwrap();
            tokio::spawn(async move {
                axum::serve(listener, app).await.unwrap();
            });

            Self {
                base_url: format!("http://{addr}/adexchangebuyer/v1.4"),
                requests,
            }
        }

        fn client(&self) -> ApiClient {
            ApiClient::new(
                ApiConfig::new(&self.base_url)
                    .unwrap()
                    .with_api_key("K")
                    .with_bearer_token("T"),
            )
        }

        fn hits(&self) -> usize {
            self.requests.lock().unwrap().len()
        }

        fn last(&self) -> Recorded {
            self.requests.lock().unwrap().last().cloned().unwrap()
        }
    }

    fn endpoint(name: &str) -> &'static Endpoint {
        crate::endpoints::all()
            .find(|e| e.tool_name == name)
            .unwrap()
    }

    fn offline_client() -> ApiClient {
        ApiClient::new(
            ApiConfig::new("https://ads.example.com/v1.4")
                .unwrap()
                .with_api_key("K")
                .with_bearer_token("T"),
        )
    }

    // --- URL construction ---

    #[test]
    fn credentials_follow_forwarded_query_in_order() {
        let args = json!({"maxResults": 10, "pageToken": "abc"});
        let url = offline_client()
            .build_url(endpoint("get_creatives"), args.as_object().unwrap())
            .unwrap();
        assert_eq!(url.path(), "/v1.4/creatives");
        assert_eq!(url.query(), Some("maxResults=10&pageToken=abc&key=K&oauth_token=T"));
    }

    #[test]
    fn no_query_without_credentials_or_forwarded_params() {
        let client = ApiClient::new(ApiConfig::new("https://ads.example.com/v1.4/").unwrap());
        let url = client
            .build_url(&accounts::ENDPOINTS[0], &Map::new())
            .unwrap();
        assert_eq!(url.as_str(), "https://ads.example.com/v1.4/accounts");
    }

    #[test]
    fn path_params_accept_strings_and_integers() {
        let args = json!({"accountId": 42, "buyerCreativeId": "banner 1"});
        let url = offline_client()
            .build_url(
                endpoint("get_creatives_accountId_buyerCreativeId"),
                args.as_object().unwrap(),
            )
            .unwrap();
        assert_eq!(url.path(), "/v1.4/creatives/42/banner%201");
    }

    #[test]
    fn wrongly_typed_path_param_is_invalid() {
        for bad in [json!(true), json!(1.5), json!(""), json!({"x": 1})] {
            let args = json!({"id": bad});
            let err = offline_client()
                .build_url(endpoint("get_accounts_id"), args.as_object().unwrap())
                .unwrap_err();
            assert_eq!(err.to_string(), "Invalid path parameter: id");
        }
    }

    #[test]
    fn unrecognized_args_are_not_forwarded() {
        let args = json!({"statusFilter": "approved", "other": "x", "pageToken": null});
        let url = offline_client()
            .build_url(endpoint("get_creatives"), args.as_object().unwrap())
            .unwrap();
        assert_eq!(url.query(), Some("statusFilter=approved&key=K&oauth_token=T"));
    }

    // --- Validation (no HTTP) ---

    #[tokio::test]
    async fn missing_path_param_makes_no_request() {
        let mock = MockApi::start(StatusCode::OK, "{}").await;
        let client = mock.client();
        let cancel = CancellationToken::new();

        for ep in crate::endpoints::all().filter(|e| !e.path_params.is_empty()) {
            let err = client.execute(ep, &json!({}), &cancel).await.unwrap_err();
            assert!(
                err.to_string().contains("Missing required path parameter"),
                "{}: {err}",
                ep.tool_name
            );
        }
        assert_eq!(mock.hits(), 0);
    }

    #[tokio::test]
    async fn non_object_arguments_make_no_request() {
        let mock = MockApi::start(StatusCode::OK, "{}").await;
        let client = mock.client();
        let cancel = CancellationToken::new();

        for ep in crate::endpoints::all() {
            for args in [json!(null), json!([1, 2]), json!("id=1")] {
                let err = client.execute(ep, &args, &cancel).await.unwrap_err();
                assert_eq!(err.to_string(), "Invalid arguments object");
            }
        }
        assert_eq!(mock.hits(), 0);
    }

    #[tokio::test]
    async fn mistyped_body_field_makes_no_request() {
        let mock = MockApi::start(StatusCode::OK, "{}").await;
        let err = mock
            .client()
            .execute(
                endpoint("post_creatives"),
                &json!({"width": "wide"}),
                &CancellationToken::new(),
            )
            .await
            .unwrap_err();
        assert!(matches!(err, ToolError::ConvertArguments(_)));
        assert_eq!(mock.hits(), 0);
    }

    // --- Round trips ---

    #[tokio::test]
    async fn list_forwards_query_and_pretty_prints() {
        let mock = MockApi::start(
            StatusCode::OK,
            r#"{"kind":"adexchangebuyer#creativesList","nextPageToken":"n2","items":[{"accountId":1}]}"#,
        )
        .await;
        let text = mock
            .client()
            .execute(
                endpoint("get_creatives"),
                &json!({"maxResults": 10, "pageToken": "abc"}),
                &CancellationToken::new(),
            )
            .await
            .unwrap();

        let req = mock.last();
        assert_eq!(req.method, Method::GET);
        assert_eq!(req.path, "/adexchangebuyer/v1.4/creatives");
        let query = req.query.unwrap();
        assert!(query.contains("maxResults=10"));
        assert!(query.contains("pageToken=abc"));
        assert!(query.find("key=K").unwrap() < query.find("oauth_token=T").unwrap());
        assert_eq!(req.headers["accept"], "application/json");

        assert!(text.contains('\n'));
        let parsed: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed["nextPageToken"], "n2");
    }

    #[tokio::test]
    async fn patch_sends_typed_body_without_path_params() {
        let mock = MockApi::start(StatusCode::OK, r#"{"id":7,"maximumTotalQps":500}"#).await;
        mock.client()
            .execute(
                endpoint("patch_accounts_id"),
                &json!({"id": "7", "maximumTotalQps": 500, "notAField": 1}),
                &CancellationToken::new(),
            )
            .await
            .unwrap();

        let req = mock.last();
        assert_eq!(req.method, Method::PATCH);
        assert_eq!(req.path, "/adexchangebuyer/v1.4/accounts/7");
        assert_eq!(req.headers["content-type"], "application/json");
        let sent: Value = serde_json::from_str(&req.body).unwrap();
        assert_eq!(sent, json!({"maximumTotalQps": 500}));
    }

    #[tokio::test]
    async fn update_uses_put() {
        let mock = MockApi::start(StatusCode::OK, r#"{"id":7}"#).await;
        mock.client()
            .execute(
                endpoint("put_accounts_id"),
                &json!({"id": 7, "cookieMatchingUrl": "https://cm.example.com"}),
                &CancellationToken::new(),
            )
            .await
            .unwrap();
        let req = mock.last();
        assert_eq!(req.method, Method::PUT);
        assert_eq!(req.path, "/adexchangebuyer/v1.4/accounts/7");
    }

    #[tokio::test]
    async fn insert_posts_creative() {
        let mock = MockApi::start(StatusCode::OK, r#"{"accountId":1,"status":"NOT_CHECKED"}"#).await;
        let text = mock
            .client()
            .execute(
                creatives::ENDPOINTS
                    .iter()
                    .find(|e| e.tool_name == "post_creatives")
                    .unwrap(),
                &json!({"accountId": 1, "buyerCreativeId": "b", "HTMLSnippet": "<p/>"}),
                &CancellationToken::new(),
            )
            .await
            .unwrap();

        let req = mock.last();
        assert_eq!(req.method, Method::POST);
        let sent: Value = serde_json::from_str(&req.body).unwrap();
        assert_eq!(sent["HTMLSnippet"], "<p/>");
        assert!(text.contains("NOT_CHECKED"));
    }

    #[tokio::test]
    async fn error_status_returns_raw_body() {
        let mock = MockApi::start(StatusCode::FORBIDDEN, r#"{"error":"forbidden"}"#).await;
        let err = mock
            .client()
            .execute(
                endpoint("get_accounts"),
                &json!({}),
                &CancellationToken::new(),
            )
            .await
            .unwrap_err();
        match err {
            ToolError::Api { status, ref body } => {
                assert_eq!(status, 403);
                assert_eq!(body, r#"{"error":"forbidden"}"#);
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(err.to_string().contains("forbidden"));
    }

    #[tokio::test]
    async fn undecodable_success_body_passes_through() {
        let mock = MockApi::start(StatusCode::OK, "<html>not json").await;
        let text = mock
            .client()
            .execute(
                endpoint("get_accounts_id"),
                &json!({"id": 1}),
                &CancellationToken::new(),
            )
            .await
            .unwrap();
        assert_eq!(text, "<html>not json");
    }

    #[tokio::test]
    async fn transport_failure_is_reported() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = ApiClient::new(
            ApiConfig::new(&format!("http://{addr}"))
                .unwrap()
                .with_api_key("secret"),
        );
        let err = client
            .execute(
                endpoint("get_accounts"),
                &json!({}),
                &CancellationToken::new(),
            )
            .await
            .unwrap_err();
        assert!(matches!(err, ToolError::Request(_)));
        assert!(!err.to_string().contains("secret"));
    }

    // --- Cancellation ---

    #[tokio::test]
    async fn cancellation_aborts_in_flight_request() {
        let mock =
            MockApi::start_with_delay(StatusCode::OK, "{}", Duration::from_secs(30)).await;
        let client = mock.client();
        let cancel = CancellationToken::new();

        let trigger = cancel.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(50)).await;
            trigger.cancel();
        });

        let result = tokio::time::timeout(
            Duration::from_secs(5),
            client.execute(endpoint("get_accounts"), &json!({}), &cancel),
        )
        .await
        .expect("cancellation should return promptly");
        assert!(matches!(result, Err(ToolError::Cancelled)));
    }

    #[tokio::test]
    async fn cancelled_token_makes_no_request() {
        let mock = MockApi::start(StatusCode::OK, "{}").await;
        let cancel = CancellationToken::new();
        cancel.cancel();
        let err = mock
            .client()
            .execute(endpoint("get_accounts"), &json!({}), &cancel)
            .await
            .unwrap_err();
        assert!(matches!(err, ToolError::Cancelled));
        assert_eq!(mock.hits(), 0);
    }
}
