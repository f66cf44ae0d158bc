//! HTTP client for the quotation services

use std::time::Duration;

use log::{debug, info};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT};
use serde::Deserialize;
use url::Url;

use quoteforge_model::CompanyProfile;

use crate::error::{ApiError, ApiResult};
use crate::upload::{mime_type, validate_logo};

/// Default user agent string
const DEFAULT_USER_AGENT: &str = concat!("QuoteForge/", env!("CARGO_PKG_VERSION"));

/// Default timeout in seconds
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Maximum number of redirects to follow
const MAX_REDIRECTS: usize = 10;

/// API client configuration
pub struct ClientConfig {
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    token: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UploadResponse {
    image_url: String,
}

/// Client for the company profile, upload and auth services
#[derive(Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: Url,
    token: Option<String>,
}

impl ApiClient {
    /// Create a client for the service at `base_url` with default settings
    pub fn new(base_url: &str) -> ApiResult<Self> {
        Self::with_config(base_url, ClientConfig::default())
    }

    /// Create a client with custom configuration
    pub fn with_config(base_url: &str, config: ClientConfig) -> ApiResult<Self> {
        let base_url = Url::parse(base_url)?;

        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static(DEFAULT_USER_AGENT));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_secs))
            .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS))
            .build()
            .map_err(|e| ApiError::RequestFailed(e.to_string()))?;

        Ok(Self {
            client,
            base_url,
            token: None,
        })
    }

    /// Set the bearer credential used for authenticated endpoints
    pub fn set_token(&mut self, token: impl Into<String>) {
        self.token = Some(token.into());
    }

    /// Whether a bearer credential is set
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    fn endpoint(&self, path: &str) -> ApiResult<Url> {
        Ok(self.base_url.join(path)?)
    }

    fn bearer(&self) -> ApiResult<&str> {
        self.token.as_deref().ok_or(ApiError::Unauthorized)
    }

    /// Register a new account
    pub async fn register(&self, name: &str, email: &str, password: &str) -> ApiResult<()> {
        let url = self.endpoint("api/auth/register")?;
        info!("POST {}", url);

        let response = self
            .client
            .post(url)
            .json(&serde_json::json!({ "name": name, "email": email, "password": password }))
            .send()
            .await?;

        check_status(response.status().as_u16())
    }

    /// Log in and return the bearer token
    pub async fn login(&mut self, email: &str, password: &str) -> ApiResult<String> {
        let url = self.endpoint("api/auth/login")?;
        info!("POST {}", url);

        let response = self
            .client
            .post(url)
            .json(&serde_json::json!({ "email": email, "password": password }))
            .send()
            .await?;

        check_status(response.status().as_u16())?;

        let body: TokenResponse = response
            .json()
            .await
            .map_err(|e| ApiError::BadResponse(e.to_string()))?;
        self.token = Some(body.token.clone());
        Ok(body.token)
    }

    /// Fetch the caller's company profile
    ///
    /// The service returns an empty object when no profile has been
    /// stored yet; that deserializes to the default (empty) profile.
    pub async fn fetch_company(&self) -> ApiResult<CompanyProfile> {
        let url = self.endpoint("api/company")?;
        let token = self.bearer()?;
        info!("GET {}", url);

        let response = self.client.get(url).bearer_auth(token).send().await?;
        check_status(response.status().as_u16())?;

        let profile: CompanyProfile = response
            .json()
            .await
            .map_err(|e| ApiError::BadResponse(e.to_string()))?;
        debug!("Fetched company profile for {}", display_name(&profile));
        Ok(profile)
    }

    /// Upsert the caller's company profile
    pub async fn save_company(&self, profile: &CompanyProfile) -> ApiResult<CompanyProfile> {
        let url = self.endpoint("api/company")?;
        let token = self.bearer()?;
        info!("POST {}", url);

        let response = self
            .client
            .post(url)
            .bearer_auth(token)
            .json(profile)
            .send()
            .await?;
        check_status(response.status().as_u16())?;

        response
            .json()
            .await
            .map_err(|e| ApiError::BadResponse(e.to_string()))
    }

    /// Upload a logo image and return its public URL
    ///
    /// The bytes are validated locally first: at most 1 MiB and sniffable
    /// as an image. Validation failures never reach the network.
    pub async fn upload_logo(&self, file_name: &str, bytes: Vec<u8>) -> ApiResult<String> {
        let format = validate_logo(&bytes)?;

        let url = self.endpoint("api/upload/logo")?;
        let token = self.bearer()?;
        info!("POST {} ({} bytes)", url, bytes.len());

        let part = reqwest::multipart::Part::bytes(bytes)
            .file_name(file_name.to_string())
            .mime_str(mime_type(format))
            .map_err(|e| ApiError::RequestFailed(e.to_string()))?;
        let form = reqwest::multipart::Form::new().part("logo", part);

        let response = self
            .client
            .post(url)
            .bearer_auth(token)
            .multipart(form)
            .send()
            .await?;
        check_status(response.status().as_u16())?;

        let body: UploadResponse = response
            .json()
            .await
            .map_err(|e| ApiError::BadResponse(e.to_string()))?;
        info!("Logo uploaded: {}", body.image_url);
        Ok(body.image_url)
    }
}

/// Map an HTTP status to an error, passing 2xx through
fn check_status(status: u16) -> ApiResult<()> {
    match status {
        200..=299 => Ok(()),
        401 | 403 => Err(ApiError::Unauthorized),
        _ => Err(ApiError::HttpError { status }),
    }
}

fn display_name(profile: &CompanyProfile) -> &str {
    if profile.name.is_empty() {
        "(unnamed)"
    } else {
        &profile.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_status() {
        assert!(check_status(200).is_ok());
        assert!(check_status(204).is_ok());
        assert!(matches!(check_status(401), Err(ApiError::Unauthorized)));
        assert!(matches!(check_status(403), Err(ApiError::Unauthorized)));
        assert!(matches!(check_status(500), Err(ApiError::HttpError { status: 500 })));
    }

    #[test]
    fn test_endpoint_joins_base_url() {
        let client = ApiClient::new("http://localhost:5000/").unwrap();
        let url = client.endpoint("api/company").unwrap();
        assert_eq!(url.as_str(), "http://localhost:5000/api/company");
    }

    #[test]
    fn test_unauthenticated_calls_need_token() {
        let client = ApiClient::new("http://localhost:5000/").unwrap();
        assert!(!client.is_authenticated());
        assert!(matches!(client.bearer(), Err(ApiError::Unauthorized)));
    }

    #[test]
    fn test_upload_response_shape() {
        let body: UploadResponse =
            serde_json::from_str(r#"{"imageUrl":"https://cdn.example/logos/1_a.png"}"#).unwrap();
        assert_eq!(body.image_url, "https://cdn.example/logos/1_a.png");
    }

    #[tokio::test]
    async fn test_oversized_upload_rejected_without_network() {
        // Unroutable base URL: if validation let the request through,
        // this would fail with a connection error instead.
        let mut client = ApiClient::new("http://localhost:1/").unwrap();
        client.set_token("test-token");

        let bytes = vec![0_u8; 2 * 1024 * 1024];
        let err = client.upload_logo("logo.png", bytes).await.unwrap_err();
        assert!(matches!(err, ApiError::FileTooLarge { .. }));
    }
}
