use std::env;
use std::time::{Duration, Instant};

use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::{Client as ReqwestClient, Response, header};
use serde::Deserialize;
use url::Url;

use crate::error::{Error, Result};
use crate::observability::{CLIENT_REQUESTS, CLIENT_REQUEST_DURATION, CLIENT_REQUEST_ERRORS};
use crate::types::{GenerateContentRequest, GenerateContentResponse, Model};

const DEFAULT_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta/";

/// Environment variable that carries the service credential.
pub const API_KEY_ENV: &str = "FOLIO_API_KEY";

/// Something that can answer a `generateContent` request.
///
/// [`Gemini`] is the HTTP implementation; tests substitute scripted ones.
#[async_trait::async_trait]
pub trait ContentGenerator: Send + Sync {
    /// Issue one request and return the raw response.
    async fn generate_content(
        &self,
        model: &Model,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse>;
}

/// Client for the generative-language REST API.
#[derive(Debug, Clone)]
pub struct Gemini {
    api_key: String,
    client: ReqwestClient,
    base_url: Url,
    timeout: Option<Duration>,
}

impl Gemini {
    /// Create a new client.
    ///
    /// The API key can be provided directly or read from the `FOLIO_API_KEY`
    /// environment variable. When neither is present the key is empty; the
    /// service will reject requests, which callers see as an authentication
    /// error.
    pub fn new(api_key: Option<String>) -> Result<Self> {
        Self::with_options(api_key, None, None)
    }

    /// Create a new client with custom settings.
    ///
    /// No timeout is applied unless one is given.
    pub fn with_options(
        api_key: Option<String>,
        base_url: Option<String>,
        timeout: Option<Duration>,
    ) -> Result<Self> {
        let api_key = api_key
            .or_else(|| env::var(API_KEY_ENV).ok())
            .unwrap_or_default();

        let mut base_url = base_url.unwrap_or_else(|| DEFAULT_API_URL.to_string());
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        let base_url = Url::parse(&base_url)?;

        let mut builder = ReqwestClient::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(|e| {
            Error::http_client(
                format!("Failed to build HTTP client: {}", e),
                Some(Box::new(e)),
            )
        })?;

        Ok(Self {
            api_key,
            client,
            base_url,
            timeout,
        })
    }

    /// True when a non-empty credential is configured.
    pub fn has_api_key(&self) -> bool {
        !self.api_key.is_empty()
    }

    /// The `generateContent` endpoint for a model.
    pub fn endpoint(&self, model: &Model) -> Result<Url> {
        let model = model.to_string();
        let model = model.strip_prefix("models/").unwrap_or(&model);
        Ok(self
            .base_url
            .join(&format!("models/{model}:generateContent"))?)
    }

    /// Create and return default headers for API requests.
    fn default_headers(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );
        headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));
        let key = HeaderValue::from_str(&self.api_key)
            .map_err(|_| Error::authentication("API key contains invalid header characters"))?;
        headers.insert("x-goog-api-key", key);
        Ok(headers)
    }

    /// Process API response errors and convert to our Error type
    async fn process_error_response(response: Response) -> Error {
        let status_code = response.status().as_u16();

        let retry_after = response
            .headers()
            .get("retry-after")
            .and_then(|val| val.to_str().ok())
            .and_then(|val| val.parse::<u64>().ok());

        match response.text().await {
            Ok(body) => error_from_status(status_code, &body, retry_after),
            Err(e) => Error::http_client(
                format!("Failed to read error response: {}", e),
                Some(Box::new(e)),
            ),
        }
    }

    /// Send a request and get the complete response.
    pub async fn send(
        &self,
        model: &Model,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse> {
        let url = self.endpoint(model)?;
        CLIENT_REQUESTS.click();
        let start = Instant::now();
        let result = self.send_inner(url, request).await;
        CLIENT_REQUEST_DURATION.add(start.elapsed().as_secs_f64());
        if result.is_err() {
            CLIENT_REQUEST_ERRORS.click();
        }
        result
    }

    async fn send_inner(
        &self,
        url: Url,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse> {
        let response = self
            .client
            .post(url)
            .headers(self.default_headers()?)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    Error::timeout(
                        format!("Request timed out: {}", e),
                        self.timeout.map(|t| t.as_secs_f64()),
                    )
                } else if e.is_connect() {
                    Error::connection(format!("Connection error: {}", e), Some(Box::new(e)))
                } else {
                    Error::http_client(format!("Request failed: {}", e), Some(Box::new(e)))
                }
            })?;

        if !response.status().is_success() {
            return Err(Self::process_error_response(response).await);
        }

        response
            .json::<GenerateContentResponse>()
            .await
            .map_err(|e| {
                Error::serialization(
                    format!("Failed to parse response: {}", e),
                    Some(Box::new(e)),
                )
            })
    }
}

#[async_trait::async_trait]
impl ContentGenerator for Gemini {
    async fn generate_content(
        &self,
        model: &Model,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse> {
        self.send(model, request).await
    }
}

/// Map a non-success status and body onto an [`Error`].
///
/// The service reports failures as
/// `{"error": {"code": 400, "message": "...", "status": "INVALID_ARGUMENT"}}`;
/// bodies that do not parse are used verbatim as the message.
fn error_from_status(status_code: u16, body: &str, retry_after: Option<u64>) -> Error {
    #[derive(Deserialize)]
    struct ErrorResponse {
        error: Option<ErrorDetail>,
    }

    #[derive(Deserialize)]
    struct ErrorDetail {
        message: Option<String>,
        status: Option<String>,
    }

    let detail = serde_json::from_str::<ErrorResponse>(body)
        .ok()
        .and_then(|e| e.error);
    let error_type = detail.as_ref().and_then(|e| e.status.clone());
    let error_message = detail
        .and_then(|e| e.message)
        .unwrap_or_else(|| body.to_string());

    match status_code {
        400 => Error::bad_request(error_message, error_type),
        401 => Error::authentication(error_message),
        403 => Error::permission(error_message),
        404 => Error::not_found(error_message, Some("model".to_string()), None),
        408 => Error::timeout(error_message, None),
        429 => Error::rate_limit(error_message, retry_after),
        500 => Error::internal_server(error_message),
        502..=504 => Error::service_unavailable(error_message, retry_after),
        _ => Error::api(status_code, error_type, error_message),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::KnownModel;

    #[test]
    fn client_creation() {
        let client = Gemini::new(Some("test-key".to_string())).unwrap();
        assert_eq!(client.api_key, "test-key");
        assert_eq!(client.base_url.as_str(), DEFAULT_API_URL);
        assert_eq!(client.timeout, None);
        assert!(client.has_api_key());

        let client = Gemini::with_options(
            Some("test-key".to_string()),
            Some("https://proxy.example.com/gemini".to_string()),
            Some(Duration::from_secs(30)),
        )
        .unwrap();
        assert_eq!(client.base_url.as_str(), "https://proxy.example.com/gemini/");
        assert_eq!(client.timeout, Some(Duration::from_secs(30)));
    }

    #[test]
    fn empty_key_is_allowed() {
        let client = Gemini::new(Some(String::new())).unwrap();
        assert!(!client.has_api_key());
        assert!(client.default_headers().is_ok());
    }

    #[test]
    fn invalid_base_url() {
        let err = Gemini::with_options(Some("k".into()), Some("not a url".into()), None)
            .unwrap_err();
        assert!(matches!(err, Error::Url { .. }));
    }

    #[test]
    fn endpoint_for_models() {
        let client = Gemini::new(Some("k".to_string())).unwrap();
        let url = client
            .endpoint(&Model::Known(KnownModel::Gemini3FlashPreview))
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-3-flash-preview:generateContent"
        );

        let url = client
            .endpoint(&Model::Custom("models/tuned-001".to_string()))
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://generativelanguage.googleapis.com/v1beta/models/tuned-001:generateContent"
        );
    }

    #[test]
    fn status_mapping_uses_service_error_body() {
        let body = r#"{"error": {"code": 400, "message": "API key not valid", "status": "INVALID_ARGUMENT"}}"#;
        match error_from_status(400, body, None) {
            Error::BadRequest { message, param } => {
                assert_eq!(message, "API key not valid");
                assert_eq!(param.as_deref(), Some("INVALID_ARGUMENT"));
            }
            other => panic!("unexpected error: {other:?}"),
        }

        assert!(error_from_status(401, "{}", None).is_authentication());
        assert!(error_from_status(429, "slow", Some(7)).is_rate_limit());
        assert!(error_from_status(503, "busy", None).is_server_error());
        assert_eq!(error_from_status(418, "teapot", None).status_code(), Some(418));
    }

    #[test]
    fn unparseable_body_becomes_message() {
        match error_from_status(500, "upstream exploded", None) {
            Error::InternalServer { message } => assert_eq!(message, "upstream exploded"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn unreachable_host_is_transport_error() {
        let client = Gemini::with_options(
            Some("k".to_string()),
            Some("http://127.0.0.1:1/".to_string()),
            Some(Duration::from_secs(5)),
        )
        .unwrap();
        let request = GenerateContentRequest::from_history(&[], "hello");
        let err = client.send(&Model::default(), &request).await.unwrap_err();
        assert!(err.is_transport());
    }
}
