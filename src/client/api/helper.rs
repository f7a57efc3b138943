use reqwest::{RequestBuilder, Response};
use serde::de::DeserializeOwned;

use crate::{client::model::error::ApiError, model::api::ErrorDto};

/// HTTP client for the API, carrying the base URL and an optional bearer token.
///
/// Cloning is cheap; the underlying connection pool is shared.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    /// Creates a client for the API at `base_url` (no trailing slash).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            token: None,
        }
    }

    /// Returns a copy of the client that authenticates with `token`.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Creates a GET request for `path`, with the bearer token when present.
    pub fn get(&self, path: &str) -> RequestBuilder {
        self.authorize(self.http.get(self.url(path)))
    }

    /// Creates a POST request for `path`, with the bearer token when present.
    pub fn post(&self, path: &str) -> RequestBuilder {
        self.authorize(self.http.post(self.url(path)))
    }

    /// Creates a PUT request for `path`, with the bearer token when present.
    pub fn put(&self, path: &str) -> RequestBuilder {
        self.authorize(self.http.put(self.url(path)))
    }

    /// Creates a DELETE request for `path`, with the bearer token when present.
    pub fn delete(&self, path: &str) -> RequestBuilder {
        self.authorize(self.http.delete(self.url(path)))
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }
}

/// Sends a request, mapping transport failures to `ApiError` with status 0.
pub async fn send_request(request: RequestBuilder) -> Result<Response, ApiError> {
    request.send().await.map_err(|e| ApiError {
        status: 0,
        message: format!("Failed to send request: {}", e),
    })
}

/// Parses an API response into `T` with consistent error handling.
///
/// Non-2xx responses are converted into `ApiError`, using the API's error
/// body when it parses and the raw text otherwise.
pub async fn parse_response<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status().as_u16();

    if (200..300).contains(&status) {
        response.json::<T>().await.map_err(|e| ApiError {
            status: 0,
            message: format!("Failed to parse response: {}", e),
        })
    } else {
        Err(error_from_response(status, response).await)
    }
}

/// Parses responses whose success carries no body (204 No Content, etc.).
pub async fn parse_empty_response(response: Response) -> Result<(), ApiError> {
    let status = response.status().as_u16();

    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(error_from_response(status, response).await)
    }
}

async fn error_from_response(status: u16, response: Response) -> ApiError {
    let message = match response.text().await {
        Ok(body) => serde_json::from_str::<ErrorDto>(&body)
            .map(|dto| dto.error)
            .unwrap_or(body),
        Err(_) => "Unknown error".to_string(),
    };

    ApiError { status, message }
}
