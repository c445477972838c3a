use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::{Client, Request as ReqwestRequest, Response as ReqwestResponse};
use tower::{Layer, Service};

use crate::error::WahaError;
use crate::types::ApiKey;

use super::waha_client::{
    WahaClient, DEFAULT_BASE_URL, DEFAULT_CONNECT_TIMEOUT_SECS, DEFAULT_TIMEOUT_SECS,
};

type MiddlewareFuture =
    Pin<Box<dyn Future<Output = Result<ReqwestResponse, reqwest::Error>> + Send>>;
type MiddlewareExecutor = Arc<dyn Fn(ReqwestRequest) -> MiddlewareFuture + Send + Sync>;

/// Builder for [`WahaClient`]
///
/// # Example
///
/// ```rust
/// use waha_sdk::WahaClient;
/// use waha_sdk::types::ApiKey;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = WahaClient::builder()
///     .base_url("http://localhost:3000")
///     .api_key(ApiKey::new("your-api-key")?)
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[must_use]
#[derive(Default)]
pub struct WahaClientBuilder<M = ()> {
    base_url: Option<String>,
    api_key: Option<ApiKey>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    middleware: Option<M>,
}

impl<M> std::fmt::Debug for WahaClientBuilder<M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WahaClientBuilder")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key)
            .field("timeout", &self.timeout)
            .field("connect_timeout", &self.connect_timeout)
            .field("middleware", &self.middleware.as_ref().map(|_| ".."))
            .finish_non_exhaustive()
    }
}

impl<M> WahaClientBuilder<M> {
    /// Set the base URL of the WAHA server
    ///
    /// Default: `http://localhost:3000`. A trailing slash is stripped.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the API key sent as `X-Api-Key` on every request
    ///
    /// Without a key no `X-Api-Key` header is sent at all.
    pub fn api_key(mut self, key: ApiKey) -> Self {
        self.api_key = Some(key);
        self
    }

    /// Set the total timeout for requests
    ///
    /// Default: 30 seconds. Must be non-zero.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the connection timeout
    ///
    /// Default: 10 seconds
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Layer a tower middleware stack over the client
    ///
    /// Every request issued by the dispatcher flows through the layered
    /// service, e.g. [`LoggingMiddleware`](crate::middleware::LoggingMiddleware).
    pub fn with_middleware<M2>(self, middleware: M2) -> WahaClientBuilder<M2>
    where
        M2: Layer<WahaClient> + Clone + Send + Sync + 'static,
    {
        WahaClientBuilder {
            base_url: self.base_url,
            api_key: self.api_key,
            timeout: self.timeout,
            connect_timeout: self.connect_timeout,
            middleware: Some(middleware),
        }
    }

    /// Build the [`WahaClient`]
    ///
    /// # Errors
    /// Returns [`WahaError::Config`] when the base URL has no HTTP scheme,
    /// the timeout is zero, or the API key is not a valid header value.
    pub fn build(self) -> Result<WahaClient, WahaError>
    where
        M: Layer<WahaClient> + Clone + Send + Sync + 'static,
        M::Service: Service<ReqwestRequest, Response = ReqwestResponse, Error = reqwest::Error>
            + Clone
            + Send
            + Sync
            + 'static,
        <M::Service as Service<ReqwestRequest>>::Future: Send + 'static,
    {
        let base_url = self
            .base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(WahaError::Config(format!(
                "base_url must start with http:// or https://, got: {}",
                base_url
            )));
        }

        let base_url = base_url.trim_end_matches('/').to_string();

        let timeout = self
            .timeout
            .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        if timeout.is_zero() {
            return Err(WahaError::Config("timeout must be non-zero".to_string()));
        }
        let connect_timeout = self
            .connect_timeout
            .unwrap_or(Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS));

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        if let Some(key) = &self.api_key {
            let mut value = HeaderValue::from_str(key.as_str())
                .map_err(|_| WahaError::Config("api_key is not a valid header value".to_string()))?;
            value.set_sensitive(true);
            headers.insert("X-Api-Key", value);
        }

        let http = Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .connect_timeout(connect_timeout)
            .build()?;

        let mut client = WahaClient::new(http, base_url, self.api_key);

        if let Some(middleware) = self.middleware {
            let service = middleware.layer(client.clone());
            let executor = make_middleware_executor(service);
            client = client.with_middleware_executor(executor);
        }

        Ok(client)
    }
}

fn make_middleware_executor<S>(service: S) -> MiddlewareExecutor
where
    S: Service<ReqwestRequest, Response = ReqwestResponse, Error = reqwest::Error>
        + Clone
        + Send
        + Sync
        + 'static,
    S::Future: Send + 'static,
{
    let service = Arc::new(service);

    Arc::new(move |request: ReqwestRequest| {
        let mut service = (*service).clone();
        Box::pin(async move { service.call(request).await })
    })
}

#[cfg(test)]
mod tests {
    use std::future::Future;
    use std::pin::Pin;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;
    use std::task::{Context, Poll};

    use tower::{Layer, Service};
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    #[test]
    fn test_builder_default_values() {
        let client = WahaClient::builder().build().unwrap();

        assert_eq!(client.base_url(), DEFAULT_BASE_URL);
        assert!(!client.has_api_key());
    }

    #[test]
    fn test_builder_strips_trailing_slash() {
        let client = WahaClient::builder()
            .base_url("http://localhost:3000/")
            .build()
            .unwrap();

        assert_eq!(client.base_url(), "http://localhost:3000");
    }

    #[test]
    fn test_builder_rejects_missing_scheme() {
        let result = WahaClient::builder().base_url("localhost:3000").build();
        assert!(matches!(result, Err(WahaError::Config(_))));
    }

    #[test]
    fn test_builder_rejects_zero_timeout() {
        let result = WahaClient::builder()
            .timeout(Duration::from_secs(0))
            .build();
        assert!(matches!(result, Err(WahaError::Config(_))));
    }

    #[test]
    fn test_builder_custom_values() {
        let client = WahaClient::builder()
            .base_url("https://waha.example.com")
            .api_key(ApiKey::new("secret").unwrap())
            .timeout(Duration::from_secs(60))
            .connect_timeout(Duration::from_secs(5))
            .build()
            .unwrap();

        assert_eq!(client.base_url(), "https://waha.example.com");
        assert!(client.has_api_key());
    }

    #[tokio::test]
    async fn test_middleware_configured_and_executes() {
        #[derive(Clone)]
        struct FlagLayer {
            flag: Arc<AtomicBool>,
        }

        impl Layer<WahaClient> for FlagLayer {
            type Service = FlagService;

            fn layer(&self, inner: WahaClient) -> Self::Service {
                FlagService {
                    inner,
                    flag: Arc::clone(&self.flag),
                }
            }
        }

        #[derive(Clone)]
        struct FlagService {
            inner: WahaClient,
            flag: Arc<AtomicBool>,
        }

        impl Service<ReqwestRequest> for FlagService {
            type Response = ReqwestResponse;
            type Error = reqwest::Error;
            type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

            fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
                Poll::Ready(Ok(()))
            }

            fn call(&mut self, req: ReqwestRequest) -> Self::Future {
                self.flag.store(true, Ordering::SeqCst);
                let mut inner = self.inner.clone();
                Box::pin(async move { inner.call(req).await })
            }
        }

        let middleware_invoked = Arc::new(AtomicBool::new(false));
        let layer = FlagLayer {
            flag: Arc::clone(&middleware_invoked),
        };

        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/sessions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
            .mount(&mock_server)
            .await;

        let client = WahaClient::builder()
            .base_url(mock_server.uri())
            .with_middleware(layer)
            .build()
            .unwrap();

        let _ = client.sessions().list(false).await.unwrap();

        assert!(middleware_invoked.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn test_builder_with_logging_middleware_builds() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/sessions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
            .mount(&mock_server)
            .await;

        let client = WahaClient::builder()
            .base_url(mock_server.uri())
            .with_middleware(crate::middleware::LoggingMiddleware::new())
            .build()
            .unwrap();

        let result = client.sessions().list(false).await;
        assert!(result.is_ok());
    }
}
