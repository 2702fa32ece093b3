use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::{Client as ReqwestClient, Response, header};
use serde::Deserialize;
use std::time::Duration;

use url::Url;

use crate::error::{Error, Result};
use crate::observability::{CLIENT_REQUEST_ERRORS, CLIENT_REQUESTS};
use crate::token::TokenStore;
use crate::types::{ChatRequest, ChatResponse, LoginRequest, LoginResponse};

const DEFAULT_BASE_URL: &str = "http://localhost:8000/";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// The two backend calls, as a trait so screens can take the backend by
/// bound instead of reaching for an ambient client. Tests substitute stubs.
#[async_trait::async_trait]
pub trait ChatApi: Send + Sync {
    /// Exchanges credentials for a session token.
    async fn login(&self, username: &str, password: &str) -> Result<LoginResponse>;

    /// Sends one chat message and returns the backend's reply.
    async fn chat(&self, message: &str) -> Result<ChatResponse>;
}

/// Client for the Finsight backend.
///
/// Holds a configured HTTP client with a fixed base URL and a handle to the
/// token store. The current token is read immediately before every dispatch;
/// when none is stored the authorization header is simply omitted.
#[derive(Debug, Clone)]
pub struct Finsight {
    client: ReqwestClient,
    base_url: String,
    timeout: Duration,
    tokens: TokenStore,
}

impl Finsight {
    /// Create a new client against the default backend address.
    pub fn new(tokens: TokenStore) -> Result<Self> {
        Self::with_options(tokens, None, None)
    }

    /// Create a new client with custom settings.
    pub fn with_options(
        tokens: TokenStore,
        base_url: Option<String>,
        timeout: Option<Duration>,
    ) -> Result<Self> {
        let base_url = match base_url {
            Some(mut url) => {
                Url::parse(&url)?;
                if !url.ends_with('/') {
                    url.push('/');
                }
                url
            }
            None => DEFAULT_BASE_URL.to_string(),
        };

        let timeout = timeout.unwrap_or(DEFAULT_TIMEOUT);
        let client = ReqwestClient::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| {
                Error::http_client(
                    format!("Failed to build HTTP client: {}", e),
                    Some(Box::new(e)),
                )
            })?;

        Ok(Self {
            client,
            base_url,
            timeout,
            tokens,
        })
    }

    /// Returns the configured base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Create headers for a request, attaching the bearer token when stored.
    fn request_headers(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );
        headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));
        if let Some(token) = self.tokens.get()? {
            let value = HeaderValue::from_str(&format!("Bearer {}", token)).map_err(|_| {
                Error::validation(
                    "stored token contains characters not allowed in a header",
                    Some("token".to_string()),
                )
            })?;
            headers.insert(header::AUTHORIZATION, value);
        }
        Ok(headers)
    }

    fn dispatch_error(&self, e: reqwest::Error) -> Error {
        CLIENT_REQUEST_ERRORS.click();
        if e.is_timeout() {
            Error::timeout(
                format!("Request timed out: {}", e),
                Some(self.timeout.as_secs_f64()),
            )
        } else if e.is_connect() {
            Error::connection(format!("Connection error: {}", e), Some(Box::new(e)))
        } else {
            Error::http_client(format!("Request failed: {}", e), Some(Box::new(e)))
        }
    }

    /// Process backend response errors and convert to our Error type.
    async fn process_error_response(response: Response) -> Error {
        let status = response.status();
        let status_code = status.as_u16();

        let request_id = response
            .headers()
            .get("x-request-id")
            .and_then(|val| val.to_str().ok())
            .map(String::from);

        // FastAPI-style error bodies carry a `detail` field.
        #[derive(Deserialize)]
        struct ErrorResponse {
            detail: Option<String>,
        }

        let error_body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                return Error::http_client(
                    format!("Failed to read error response: {}", e),
                    Some(Box::new(e)),
                );
            }
        };

        let error_message = serde_json::from_str::<ErrorResponse>(&error_body)
            .ok()
            .and_then(|e| e.detail)
            .unwrap_or_else(|| error_body.clone());

        match status_code {
            400 => Error::bad_request(error_message, None),
            401 | 403 => Error::authentication(error_message),
            408 => Error::timeout(error_message, None),
            500..=599 => Error::internal_server(error_message, request_id),
            _ => Error::api(status_code, error_message, request_id),
        }
    }
}

#[async_trait::async_trait]
impl ChatApi for Finsight {
    /// Exchanges credentials for a session token.
    ///
    /// Any non-2xx status is treated as invalid credentials; the specific
    /// cause is not distinguished to the caller.
    async fn login(&self, username: &str, password: &str) -> Result<LoginResponse> {
        let url = format!("{}login", self.base_url);
        let body = LoginRequest::new(username, password);

        CLIENT_REQUESTS.click();
        let response = self
            .client
            .post(&url)
            .headers(self.request_headers()?)
            .json(&body)
            .send()
            .await
            .map_err(|e| self.dispatch_error(e))?;

        if !response.status().is_success() {
            CLIENT_REQUEST_ERRORS.click();
            let inner = Self::process_error_response(response).await;
            return Err(Error::authentication(format!(
                "login rejected: {}",
                inner
            )));
        }

        response.json::<LoginResponse>().await.map_err(|e| {
            Error::serialization(
                format!("Failed to parse login response: {}", e),
                Some(Box::new(e)),
            )
        })
    }

    /// Sends one chat message and returns the backend's reply.
    async fn chat(&self, message: &str) -> Result<ChatResponse> {
        let url = format!("{}chat", self.base_url);
        let body = ChatRequest::new(message);

        CLIENT_REQUESTS.click();
        let response = self
            .client
            .post(&url)
            .headers(self.request_headers()?)
            .json(&body)
            .send()
            .await
            .map_err(|e| self.dispatch_error(e))?;

        if !response.status().is_success() {
            CLIENT_REQUEST_ERRORS.click();
            return Err(Self::process_error_response(response).await);
        }

        response.json::<ChatResponse>().await.map_err(|e| {
            Error::serialization(
                format!("Failed to parse chat response: {}", e),
                Some(Box::new(e)),
            )
        })
    }
}
