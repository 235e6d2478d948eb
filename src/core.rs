use governor::{
    Quota, RateLimiter, clock::DefaultClock, middleware::NoOpMiddleware, state::InMemoryState,
    state::NotKeyed,
};
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue, USER_AGENT};
use serde_json::{Map, Value};
use std::fmt;
use std::fs;
use std::io::Cursor;
use std::num::NonZeroU32;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::Mutex;
use zip::ZipArchive;

use super::config::{OpenDartConfig, Settings};
use super::error::{OpenDartError, Result};
use super::observer::{DartObserver, NoopObserver};
use super::parsing::xml::parse_status_envelope;
use super::registry::CorporationRegistry;

/// Query parameter carrying the API key on every OpenDART request.
pub(crate) const CREDENTIAL_FIELD: &str = "crtfc_key";

/// Status value the API uses for success.
pub(crate) const SUCCESS_STATUS: &str = "000";

/// Local file header signature that starts every ZIP archive.
const ZIP_MAGIC: &[u8] = b"PK\x03\x04";

type Governor = RateLimiter<NotKeyed, InMemoryState, DefaultClock, NoOpMiddleware>;

/// A fetched web page with the content type it was served with.
#[derive(Debug, Clone)]
pub(crate) struct Page {
    pub body: Vec<u8>,
    pub content_type: Option<String>,
}

/// Client context for the OpenDART API and the DART website.
///
/// `OpenDart` owns the client state: the API key, the persisted
/// [`Settings`], the data directory, the rename toggle and the lazily loaded
/// corporation registry.
/// It is meant to have a single owner. Operations that change that state take
/// `&mut self`; read operations take `&self` and may be awaited one at a time.
///
/// Requests are paced by a token bucket (10 per second by default). Nothing is
/// retried: a failed call returns an error, or an empty table with the
/// endpoint's columns when the service itself reported the failure.
///
/// # Examples
///
/// ```ignore
/// use opendartkit::{OpenDart, OpenDartConfig, PeriodicReport, PeriodicReportOperations, ReportCode, ReportQuery};
///
/// let dart = OpenDart::with_config(OpenDartConfig::new("your-api-key", "./Data"))?;
/// let query = ReportQuery::new("00126380", 2023, ReportCode::Annual);
/// let dividends = dart.periodic_report(PeriodicReport::DividendDetail, &query).await?;
/// println!("{} rows", dividends.len());
/// ```
#[derive(Clone)]
pub struct OpenDart {
    /// HTTP client for making requests
    pub(crate) client: reqwest::Client,

    /// Token bucket rate limiter
    pub(crate) rate_limiter: Arc<Governor>,

    /// Base URL for OpenDART REST endpoints
    pub(crate) api_url: String,

    /// Base URL for the DART website
    pub(crate) dart_url: String,

    pub(crate) api_key: String,
    pub(crate) settings: Settings,
    pub(crate) settings_path: PathBuf,
    pub(crate) data_dir: PathBuf,

    /// Whether tables use display names instead of API field names
    pub(crate) rename_columns: bool,

    /// Loaded corporation registry, if any
    pub(crate) registry: Arc<Mutex<Option<Arc<CorporationRegistry>>>>,

    pub(crate) observer: Arc<dyn DartObserver>,
}

impl fmt::Debug for OpenDart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenDart")
            .field("api_url", &self.api_url)
            .field("dart_url", &self.dart_url)
            .field("data_dir", &self.data_dir)
            .field("rename_columns", &self.rename_columns)
            .finish_non_exhaustive()
    }
}

impl OpenDart {
    /// Creates a client with default settings and the given API key.
    ///
    /// Downloads and caches go to `./Data`; settings are kept in
    /// `./Config/opendart_config.json`.
    pub fn new(api_key: &str) -> Result<Self> {
        let config = OpenDartConfig {
            api_key: Some(api_key.to_string()),
            ..OpenDartConfig::default()
        };
        Self::with_config(config)
    }

    /// Creates a client from a custom configuration.
    ///
    /// The settings file is loaded (and created with defaults if missing) and
    /// the data directory is created. When `config.api_key` is `None` the key
    /// stored in the settings file is used.
    ///
    /// # Errors
    ///
    /// Returns `OpenDartError::ConfigError` if the user agent is malformed, the
    /// rate limit is zero or the HTTP client cannot be built, and
    /// `OpenDartError::FileError` if the settings file or data directory cannot
    /// be created.
    pub fn with_config(config: OpenDartConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&config.user_agent)
                .map_err(|e| OpenDartError::ConfigError(format!("Invalid user agent: {}", e)))?,
        );

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .build()
            .map_err(|e| {
                OpenDartError::ConfigError(format!("Failed to build HTTP client: {}", e))
            })?;

        let rate_limiter = Arc::new(RateLimiter::direct(Quota::per_second(
            NonZeroU32::new(config.rate_limit).ok_or_else(|| {
                OpenDartError::ConfigError("Rate limit must be greater than zero".to_string())
            })?,
        )));

        let settings = Settings::load(&config.settings_path)?;
        fs::create_dir_all(&config.data_dir)?;

        let api_key = config
            .api_key
            .unwrap_or_else(|| settings.api_key.clone());

        Ok(OpenDart {
            client,
            rate_limiter,
            api_url: config.base_urls.api.trim_end_matches('/').to_string(),
            dart_url: config.base_urls.dart.trim_end_matches('/').to_string(),
            api_key,
            settings,
            settings_path: config.settings_path,
            data_dir: config.data_dir,
            rename_columns: true,
            registry: Arc::new(Mutex::new(None)),
            observer: Arc::new(NoopObserver),
        })
    }

    /// Returns the API key used for requests.
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Replaces the API key, persists it and drops the loaded registry.
    ///
    /// The registry is fetched again under the new key on the next load.
    pub fn set_api_key(&mut self, key: impl Into<String>) -> Result<()> {
        self.api_key = key.into();
        self.settings.api_key = self.api_key.clone();
        self.settings.save(&self.settings_path)?;
        self.registry = Arc::new(Mutex::new(None));
        tracing::info!("api key updated");
        Ok(())
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Directory holding the registry cache and downloaded documents.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn rename_columns(&self) -> bool {
        self.rename_columns
    }

    /// Chooses display names (`true`, the default) or API field names for table columns.
    pub fn set_rename_columns(&mut self, enable: bool) {
        self.rename_columns = enable;
    }

    /// Installs the observer that receives error and download events.
    pub fn set_observer(&mut self, observer: Arc<dyn DartObserver>) {
        self.observer = observer;
    }

    /// Returns the base URL for OpenDART endpoints.
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Returns the base URL for the DART website.
    pub fn dart_url(&self) -> &str {
        &self.dart_url
    }

    pub(crate) fn endpoint_url(&self, path: &str) -> String {
        format!("{}/{}", self.api_url, path)
    }

    /// Prepends the credential to `params`.
    pub(crate) fn credential_params(&self, params: &[(String, String)]) -> Vec<(String, String)> {
        let mut merged = Vec::with_capacity(params.len() + 1);
        merged.push((CREDENTIAL_FIELD.to_string(), self.api_key.clone()));
        merged.extend(params.iter().cloned());
        merged
    }

    /// Records an API error and returns it as a typed error.
    pub(crate) fn api_error(&self, status: i32, message: impl Into<String>) -> OpenDartError {
        let message = message.into();
        tracing::error!("response exception({}) - {}", status, message);
        self.observer.on_api_error(status, &message);
        OpenDartError::Api { status, message }
    }

    /// Checks the `status` field of an OpenDART JSON body.
    pub(crate) fn check_status(&self, body: &Map<String, Value>) -> Result<()> {
        let status = match body.get("status").and_then(Value::as_str) {
            Some(status) => status,
            None => {
                return Err(OpenDartError::InvalidResponse(
                    "response has no status field".to_string(),
                ));
            }
        };
        if status == SUCCESS_STATUS {
            return Ok(());
        }

        let message = body
            .get("message")
            .and_then(Value::as_str)
            .unwrap_or_default();
        Err(self.api_error(status.trim().parse().unwrap_or(-1), message))
    }

    /// Sends a request, logging status, elapsed time and URL.
    async fn send(&self, request: reqwest::RequestBuilder, method: &str) -> Result<reqwest::Response> {
        self.rate_limiter.until_ready().await;

        let request = request.build().map_err(OpenDartError::RequestError)?;
        let url = redact_credential(request.url().as_str());
        let started = Instant::now();

        let response = match self.client.execute(request).await {
            Ok(response) => response,
            Err(e) => {
                tracing::error!("request exception - {} ({})", e, url);
                self.observer.on_request_error(&url, &e.to_string());
                return Err(OpenDartError::RequestError(e));
            }
        };

        tracing::info!(
            "{} <status:{}> <elapsed:{}ms> <url:{}>",
            method,
            response.status().as_u16(),
            started.elapsed().as_millis(),
            url
        );

        match response.status() {
            reqwest::StatusCode::OK => Ok(response),
            reqwest::StatusCode::NOT_FOUND => Err(OpenDartError::NotFound),
            other_status => {
                let error_body = response
                    .text()
                    .await
                    .unwrap_or_else(|_| "Failed to read error body".to_string());

                Err(OpenDartError::InvalidResponse(format!(
                    "Unexpected status code: {} for URL: {}. Response preview: {}",
                    other_status,
                    url,
                    error_body.chars().take(200).collect::<String>()
                )))
            }
        }
    }

    /// Fetches raw bytes from `url` with the given query parameters.
    pub(crate) async fn get_bytes(&self, url: &str, params: &[(String, String)]) -> Result<Vec<u8>> {
        let response = self.send(self.client.get(url).query(params), "get").await?;
        response
            .bytes()
            .await
            .map(|b| b.to_vec())
            .map_err(OpenDartError::RequestError)
    }

    /// Fetches a web page, keeping the served content type for charset detection.
    pub(crate) async fn get_page(&self, url: &str, params: &[(String, String)]) -> Result<Page> {
        let response = self.send(self.client.get(url).query(params), "get").await?;
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body = response
            .bytes()
            .await
            .map_err(OpenDartError::RequestError)?
            .to_vec();
        Ok(Page { body, content_type })
    }

    /// Fetches text from `url`, decoded with the charset the server reports.
    pub(crate) async fn get_text(&self, url: &str, params: &[(String, String)]) -> Result<String> {
        let response = self.send(self.client.get(url).query(params), "get").await?;
        response.text().await.map_err(OpenDartError::RequestError)
    }

    /// Posts a form and returns the response text.
    pub(crate) async fn post_form(&self, url: &str, form: &[(String, String)]) -> Result<String> {
        let response = self.send(self.client.post(url).form(form), "post").await?;
        response.text().await.map_err(OpenDartError::RequestError)
    }

    /// Calls a JSON endpoint and returns the body once its status is checked.
    ///
    /// # Errors
    ///
    /// * `OpenDartError::Api` - the body carries a non-success status
    /// * `OpenDartError::JsonError` - the body is not a JSON object
    /// * transport and HTTP status errors from the request itself
    pub(crate) async fn get_json(
        &self,
        path: &str,
        params: &[(String, String)],
    ) -> Result<Map<String, Value>> {
        let url = self.endpoint_url(path);
        let bytes = self.get_bytes(&url, &self.credential_params(params)).await?;
        let body: Map<String, Value> = serde_json::from_slice(&bytes)?;
        self.check_status(&body)?;
        Ok(body)
    }

    /// Calls an endpoint that answers with a ZIP archive.
    ///
    /// When the body is not a ZIP archive it is read as the XML status
    /// envelope the service sends on failure.
    pub(crate) async fn get_zip(
        &self,
        path: &str,
        params: &[(String, String)],
    ) -> Result<ZipArchive<Cursor<Vec<u8>>>> {
        let url = self.endpoint_url(path);
        let bytes = self.get_bytes(&url, &self.credential_params(params)).await?;
        self.open_zip(bytes)
    }

    pub(crate) fn open_zip(&self, bytes: Vec<u8>) -> Result<ZipArchive<Cursor<Vec<u8>>>> {
        if !bytes.starts_with(ZIP_MAGIC) {
            return Err(self.non_zip_error(&bytes));
        }
        Ok(ZipArchive::new(Cursor::new(bytes))?)
    }

    /// Turns a body that should have been a ZIP archive into the matching error.
    pub(crate) fn non_zip_error(&self, bytes: &[u8]) -> OpenDartError {
        match parse_status_envelope(bytes) {
            Some((0, message)) => OpenDartError::InvalidResponse(format!(
                "expected a ZIP archive, got status 0: {}",
                message
            )),
            Some((status, message)) => self.api_error(status, message),
            None => OpenDartError::InvalidResponse(format!(
                "expected a ZIP archive, got: {}",
                String::from_utf8_lossy(&bytes[..bytes.len().min(200)])
            )),
        }
    }

    /// Extracts every entry of `archive` below `dest`, returning the entry names.
    pub(crate) fn extract_zip(
        &self,
        archive: &mut ZipArchive<Cursor<Vec<u8>>>,
        dest: &Path,
    ) -> Result<Vec<String>> {
        let names: Vec<String> = archive.file_names().map(str::to_string).collect();
        tracing::info!("filenames in zip file contents: {}", names.join(", "));
        fs::create_dir_all(dest)?;
        archive.extract(dest)?;
        tracing::info!("extracted {} file(s) to {}", names.len(), dest.display());
        Ok(names)
    }
}

/// Masks the credential value in a URL before it is logged.
pub(crate) fn redact_credential(url: &str) -> String {
    let marker = format!("{}=", CREDENTIAL_FIELD);
    match url.find(&marker) {
        Some(start) => {
            let value_start = start + marker.len();
            let value_end = url[value_start..]
                .find('&')
                .map(|i| value_start + i)
                .unwrap_or(url.len());
            format!("{}***{}", &url[..value_start], &url[value_end..])
        }
        None => url.to_string(),
    }
}
