use crate::error::{FtkError, Result};
use crate::figma::api_types::{FigmaFile, NodesResponse, StylesResponse};
#[cfg(test)]
use reqwest::header::HeaderMap;
use reqwest::{header::RETRY_AFTER, Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;
use url::Url;

#[derive(Debug, Clone)]
pub enum FigmaAuth {
    PersonalAccessToken(String),
    OAuthToken(String),
}

impl FigmaAuth {
    /// `FIGMA_TOKEN`, then `FIGMA_API_KEY`, then `FIGMA_OAUTH_TOKEN`.
    pub fn from_env() -> Option<Self> {
        for var in ["FIGMA_TOKEN", "FIGMA_API_KEY"] {
            if let Ok(token) = std::env::var(var) {
                if !token.is_empty() {
                    return Some(Self::PersonalAccessToken(token));
                }
            }
        }

        if let Ok(token) = std::env::var("FIGMA_OAUTH_TOKEN") {
            if !token.is_empty() {
                return Some(Self::OAuthToken(token));
            }
        }

        None
    }

    fn apply(&self, builder: RequestBuilder) -> RequestBuilder {
        match self {
            FigmaAuth::PersonalAccessToken(token) => builder.header("X-FIGMA-TOKEN", token),
            FigmaAuth::OAuthToken(token) => builder.bearer_auth(token),
        }
    }

    #[cfg(test)]
    fn apply_to_header_map(&self, headers: &mut HeaderMap) {
        match self {
            FigmaAuth::PersonalAccessToken(token) => {
                headers.insert("X-FIGMA-TOKEN", token.parse().unwrap());
            }
            FigmaAuth::OAuthToken(token) => {
                headers.insert(
                    reqwest::header::AUTHORIZATION,
                    format!("Bearer {token}").parse().unwrap(),
                );
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct FigmaClient {
    http: Client,
    auth: FigmaAuth,
    base_url: Url,
}

impl FigmaClient {
    pub fn new(auth: FigmaAuth) -> Result<Self> {
        Self::with_base_url_and_timeout(auth, crate::config::DEFAULT_BASE_URL, None)
    }

    pub fn with_base_url_and_timeout(
        auth: FigmaAuth,
        base_url: impl AsRef<str>,
        timeout: Option<Duration>,
    ) -> Result<Self> {
        let base_url = Url::parse(base_url.as_ref())?;

        // No total timeout unless one is configured.
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().map_err(FtkError::Network)?;

        Ok(Self {
            http,
            auth,
            base_url,
        })
    }

    /// Published styles of a file (`GET /v1/files/:key/styles`).
    pub async fn fetch_styles(&self, file_key: &str) -> Result<StylesResponse> {
        validate_file_key(file_key)?;
        let url = self.endpoint(&format!("/v1/files/{file_key}/styles"))?;
        self.send_json(url).await
    }

    /// The full document tree of a file.
    pub async fn fetch_file(&self, file_key: &str) -> Result<FigmaFile> {
        validate_file_key(file_key)?;
        let url = self.endpoint(&format!("/v1/files/{file_key}"))?;
        self.send_json(url).await
    }

    /// One node subtree, including vector geometry.
    pub async fn fetch_node(&self, file_key: &str, node_id: &str) -> Result<NodesResponse> {
        validate_file_key(file_key)?;
        if node_id.trim().is_empty() {
            return Err(FtkError::Config(
                "node id cannot be empty when fetching nodes from Figma".into(),
            ));
        }

        let mut url = self.endpoint(&format!("/v1/files/{file_key}/nodes"))?;
        url.query_pairs_mut()
            .append_pair("ids", node_id)
            .append_pair("geometry", "paths");
        self.send_json(url).await
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        self.base_url.join(path).map_err(FtkError::InvalidUrl)
    }

    async fn send_json<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        tracing::debug!(%url, "GET");
        let request = self.auth.apply(self.http.get(url));
        let response = request.send().await.map_err(FtkError::Network)?;
        let status = response.status();
        let retry_after = response
            .headers()
            .get(RETRY_AFTER)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned);

        let body = response.text().await.unwrap_or_default();

        if status.is_success() {
            return serde_json::from_str(&body).map_err(FtkError::Serialization);
        }

        tracing::error!(status = status.as_u16(), body = %body, "Figma API request failed");
        Err(FtkError::figma_api(
            Some(status),
            error_message(status, &body, retry_after.as_deref()),
        ))
    }
}

fn validate_file_key(file_key: &str) -> Result<()> {
    if file_key.trim().is_empty() {
        return Err(FtkError::Config("Figma file key must not be empty".into()));
    }
    Ok(())
}

fn error_message(status: StatusCode, body: &str, retry_after: Option<&str>) -> String {
    let fallback = format!("Figma API returned status {}", status.as_u16());
    let parsed = serde_json::from_str::<Value>(body).ok();
    let from_body = parsed
        .as_ref()
        .and_then(|value| value.get("err").or_else(|| value.get("message")))
        .and_then(Value::as_str)
        .map(str::to_owned);

    match (status, retry_after, from_body) {
        (StatusCode::TOO_MANY_REQUESTS, Some(retry), Some(msg)) => {
            format!("{msg} (rate limited, retry after {retry}s)")
        }
        (StatusCode::TOO_MANY_REQUESTS, Some(retry), None) => {
            format!("rate limited by Figma API, retry after {retry}s")
        }
        (_, _, Some(msg)) => msg,
        _ => fallback,
    }
}
