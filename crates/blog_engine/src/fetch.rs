use std::time::Duration;

use blog_logging::blog_debug;
use futures_util::StreamExt;
use reqwest::header::CONTENT_TYPE;
use url::Url;

use crate::{ApiArticle, FailureKind, FetchError};

pub const DEV_TO_ARTICLES_URL: &str = "https://dev.to/api/articles";

#[derive(Debug, Clone)]
pub struct FetchSettings {
    pub api_base_url: String,
    pub per_page: u32,
    pub connect_timeout: Duration,
    /// Whole-request deadline. `None` waits for the server indefinitely.
    pub request_timeout: Option<Duration>,
    pub max_bytes: u64,
    pub allowed_content_types: Vec<String>,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            api_base_url: DEV_TO_ARTICLES_URL.to_string(),
            per_page: 6,
            connect_timeout: Duration::from_secs(10),
            request_timeout: None,
            max_bytes: 5 * 1024 * 1024,
            allowed_content_types: vec!["application/json".to_string()],
        }
    }
}

#[async_trait::async_trait]
pub trait ArticleFetcher: Send + Sync {
    async fn fetch_page(&self, page: u32) -> Result<Vec<ApiArticle>, FetchError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestArticleFetcher {
    settings: FetchSettings,
    client: reqwest::Client,
}

impl ReqwestArticleFetcher {
    pub fn new(settings: FetchSettings) -> Result<Self, FetchError> {
        let mut builder = reqwest::Client::builder().connect_timeout(settings.connect_timeout);
        if let Some(timeout) = settings.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|err| FetchError::new(FailureKind::Network, err.to_string()))?;
        Ok(Self { settings, client })
    }

    /// `{api_base_url}?per_page={per_page}&page={page}`
    pub fn page_url(&self, page: u32) -> Result<Url, FetchError> {
        let mut url = Url::parse(&self.settings.api_base_url)
            .map_err(|err| FetchError::new(FailureKind::InvalidUrl, err.to_string()))?;
        url.query_pairs_mut()
            .append_pair("per_page", &self.settings.per_page.to_string())
            .append_pair("page", &page.to_string());
        Ok(url)
    }

    fn is_content_type_allowed(&self, content_type: &str) -> bool {
        let ct = content_type.split(';').next().unwrap_or(content_type).trim();
        self.settings
            .allowed_content_types
            .iter()
            .any(|allowed| allowed.eq_ignore_ascii_case(ct))
    }

    fn too_large(&self, actual: u64) -> FetchError {
        FetchError::from_kind(FailureKind::TooLarge {
            max_bytes: self.settings.max_bytes,
            actual: Some(actual),
        })
    }
}

#[async_trait::async_trait]
impl ArticleFetcher for ReqwestArticleFetcher {
    async fn fetch_page(&self, page: u32) -> Result<Vec<ApiArticle>, FetchError> {
        let url = self.page_url(page)?;
        blog_debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::from_kind(FailureKind::HttpStatus(
                status.as_u16(),
            )));
        }

        if let Some(content_len) = response.content_length() {
            if content_len > self.settings.max_bytes {
                return Err(self.too_large(content_len));
            }
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok());
        if let Some(ct) = content_type {
            if !self.is_content_type_allowed(ct) {
                return Err(FetchError::from_kind(FailureKind::UnsupportedContentType {
                    content_type: ct.to_string(),
                }));
            }
        }

        let mut bytes = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(map_reqwest_error)?;
            let next_len = bytes.len() as u64 + chunk.len() as u64;
            if next_len > self.settings.max_bytes {
                return Err(self.too_large(next_len));
            }
            bytes.extend_from_slice(&chunk);
        }

        serde_json::from_slice::<Vec<ApiArticle>>(&bytes).map_err(|err| {
            FetchError::new(
                FailureKind::Decode,
                format!("Failed to fetch posts ({}: {err})", FailureKind::Decode),
            )
        })
    }
}

fn map_reqwest_error(err: reqwest::Error) -> FetchError {
    let kind = if err.is_timeout() {
        FailureKind::Timeout
    } else {
        FailureKind::Network
    };
    FetchError::new(kind.clone(), format!("Failed to fetch posts ({kind}: {err})"))
}
