//! CoinJar REST API client implementation.

use std::sync::Arc;

use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue, USER_AGENT};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_tracing::TracingMiddleware;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::auth::{CredentialsProvider, StaticCredentials, authorization_header};
use crate::error::{CoinJarError, Resource};
use crate::rest::endpoints::COINJAR_BASE_URL;
use crate::rest::envelope::unwrap_envelope;
use crate::rest::not_found::classify_not_found;
use crate::types::Pagination;

/// The CoinJar REST API client.
///
/// Every call is one authenticated GET. The client holds no mutable state;
/// clones share the underlying connection pool and can be used from many
/// tasks at once.
///
/// # Example
///
/// ```rust,no_run
/// use coinjar_api_client::rest::CoinJarRestClient;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = CoinJarRestClient::new("my_api_key");
///
///     let user = client.account().await?;
///     println!("{} has {} BTC available", user.full_name, user.available_balance);
///
///     Ok(())
/// }
/// ```
///
/// To point the client at a different host, use the builder:
///
/// ```rust,no_run
/// use coinjar_api_client::rest::CoinJarRestClient;
/// use coinjar_api_client::auth::EnvCredentials;
/// use std::sync::Arc;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = CoinJarRestClient::builder()
///         .base_url("http://localhost:8080/v1")
///         .credentials(Arc::new(EnvCredentials::from_env()))
///         .build();
///
///     let rate = client.fair_rate("AUD").await?;
///     println!("Spot: {}", rate.spot);
///
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct CoinJarRestClient {
    http_client: ClientWithMiddleware,
    base_url: String,
    credentials: Option<Arc<dyn CredentialsProvider>>,
}

impl CoinJarRestClient {
    /// Create a client for the production endpoint using the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::builder().api_key(api_key).build()
    }

    /// Create a new client builder.
    pub fn builder() -> CoinJarRestClientBuilder {
        CoinJarRestClientBuilder::new()
    }

    /// The base URL requests are resolved against.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Perform an authenticated GET and return the raw response body.
    ///
    /// The HTTP status is not inspected: CoinJar reports most failures in the
    /// body, so interpretation is left to the caller.
    pub async fn get_raw(&self, path: &str) -> Result<Vec<u8>, CoinJarError> {
        self.send(path, None).await
    }

    /// Perform an authenticated GET with URL-encoded query parameters.
    ///
    /// # Arguments
    ///
    /// * `path` - Path relative to the base URL, e.g. `"payments.json"`.
    /// * `params` - Any serializable key/value structure, such as
    ///   [`Pagination`](crate::types::Pagination).
    pub async fn get_raw_with_params<Q>(
        &self,
        path: &str,
        params: &Q,
    ) -> Result<Vec<u8>, CoinJarError>
    where
        Q: Serialize + ?Sized,
    {
        let query_string = serde_urlencoded::to_string(params)
            .map_err(|e| CoinJarError::InvalidRequest(e.to_string()))?;
        self.send(path, Some(query_string)).await
    }

    /// GET a flat JSON object with no envelope.
    pub(crate) async fn get_flat<T>(&self, path: &str) -> Result<T, CoinJarError>
    where
        T: DeserializeOwned,
    {
        let body = self.get_raw(path).await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// GET a payload wrapped in a one-field envelope.
    pub(crate) async fn get_enveloped<T>(
        &self,
        path: &str,
        key: &'static str,
    ) -> Result<T, CoinJarError>
    where
        T: DeserializeOwned,
    {
        let body = self.get_raw(path).await?;
        unwrap_envelope(&body, key)
    }

    /// GET one page of a list endpoint wrapped in a one-field envelope.
    pub(crate) async fn get_page<T>(
        &self,
        path: &str,
        page: &Pagination,
        key: &'static str,
    ) -> Result<Vec<T>, CoinJarError>
    where
        T: DeserializeOwned,
    {
        let body = self.get_raw_with_params(path, page).await?;
        unwrap_envelope(&body, key)
    }

    /// GET a single record, applying the resource's not-found rule first.
    pub(crate) async fn get_resource<T>(
        &self,
        resource: Resource,
        path: &str,
        key: &'static str,
    ) -> Result<T, CoinJarError>
    where
        T: DeserializeOwned,
    {
        let body = self.get_raw(path).await?;
        classify_not_found(resource, &body)?;
        unwrap_envelope(&body, key)
    }

    async fn send(&self, path: &str, query: Option<String>) -> Result<Vec<u8>, CoinJarError> {
        let credentials = self
            .credentials
            .as_ref()
            .ok_or(CoinJarError::MissingCredentials)?;

        let mut auth_value =
            HeaderValue::from_str(&authorization_header(credentials.get_credentials()))
                .map_err(|_| {
                    CoinJarError::InvalidRequest("API key is not a valid header value".to_string())
                })?;
        auth_value.set_sensitive(true);

        let url = self.request_url(path, query.as_deref())?;
        let response = self
            .http_client
            .get(url)
            .header(AUTHORIZATION, auth_value)
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await?;
        debug!(path, %status, len = body.len(), "CoinJar response received");

        Ok(body.to_vec())
    }

    fn request_url(&self, path: &str, query: Option<&str>) -> Result<Url, CoinJarError> {
        let mut url = Url::parse(&format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        ))?;
        if let Some(query) = query.filter(|q| !q.is_empty()) {
            url.set_query(Some(query));
        }
        Ok(url)
    }
}

impl std::fmt::Debug for CoinJarRestClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CoinJarRestClient")
            .field("base_url", &self.base_url)
            .field("has_credentials", &self.credentials.is_some())
            .finish()
    }
}

/// Builder for [`CoinJarRestClient`].
pub struct CoinJarRestClientBuilder {
    base_url: String,
    credentials: Option<Arc<dyn CredentialsProvider>>,
    user_agent: Option<String>,
}

impl CoinJarRestClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            base_url: COINJAR_BASE_URL.to_string(),
            credentials: None,
            user_agent: None,
        }
    }

    /// Set the base URL (useful for testing with a mock server).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the credentials provider.
    pub fn credentials(mut self, credentials: Arc<dyn CredentialsProvider>) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Use a fixed API key.
    pub fn api_key(self, api_key: impl Into<String>) -> Self {
        self.credentials(Arc::new(StaticCredentials::new(api_key)))
    }

    /// Set a custom user agent.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Build the client.
    pub fn build(self) -> CoinJarRestClient {
        let mut headers = HeaderMap::new();
        let user_agent = self
            .user_agent
            .unwrap_or_else(|| format!("coinjar-api-client/{}", env!("CARGO_PKG_VERSION")));
        let header_value = HeaderValue::from_str(&user_agent)
            .unwrap_or_else(|_| HeaderValue::from_static("coinjar-api-client"));
        headers.insert(USER_AGENT, header_value);

        let reqwest_client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        // Build the HTTP client with tracing middleware.
        let client = ClientBuilder::new(reqwest_client)
            .with(TracingMiddleware::default())
            .build();

        CoinJarRestClient {
            http_client: client,
            base_url: self.base_url,
            credentials: self.credentials,
        }
    }
}

impl Default for CoinJarRestClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
