use std::fs;
use std::path::Path;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use chrono::{SecondsFormat, Utc};
use reqwest::{Client as HttpClient, Identity, Response, header};
use serde_json::{Value, json};
use url::Url;

use crate::Result;
use crate::config::ClientConfig;
use crate::error::Error;
use crate::logger::Logger;
use crate::payload::DualDeliveryPayload;
use crate::types::{ApiResponse, SpoolSubmission};

/// Spool identifier returned by mock-mode submissions.
pub const MOCK_SPOOL_ID: &str = "mock-spool-123";

const SUBMIT_PATH: &str = "endpoint-spool/dualDelivery";
const STATUS_PATH: &str = "endpoint-spool/status";

const SUBMIT_OK: &str = "Document submitted to spool service successfully";
const SUBMIT_FAILED: &str = "Failed to submit document to BriefButler spool service";
const STATUS_OK: &str = "Spool status retrieved successfully";
const STATUS_FAILED: &str = "Failed to get spool status from BriefButler";

/// Client for the BriefButler spool (dual delivery) service.
///
/// The client authenticates with a TLS client certificate. A failure to load
/// the certificate degrades construction instead of failing it: the client is
/// built without an identity and the provider rejects calls server-side.
///
/// Both operations resolve to an [`ApiResponse`] envelope; no error escapes
/// them as `Err` or a panic.
#[derive(Debug)]
pub struct BriefButlerClient {
    api_url: Url,
    http: HttpClient,
    log: Logger,
    mock_mode: bool,
}

impl BriefButlerClient {
    /// Creates a client from the `BRIEFBUTLER_*` environment variables.
    pub fn from_env() -> Result<Self> {
        Self::new(ClientConfig::from_env()?)
    }

    /// Creates a client with the log level taken from `LOG_LEVEL`.
    pub fn new(config: ClientConfig) -> Result<Self> {
        Self::with_logger(config, Logger::from_env())
    }

    /// Creates a client with an explicit logger.
    pub fn with_logger(config: ClientConfig, log: Logger) -> Result<Self> {
        log.info("initializing with certificate authentication");
        log.info(&format!(
            "using certificate: {}",
            config.certificate_path.display()
        ));
        log.info(&format!("using key: {}", config.key_path.display()));

        let http = build_http_client(&config, &log)?;

        if config.mock_mode {
            log.warn("initialized in MOCK MODE, no real API calls will be made");
        } else {
            log.info(&format!("initialized with API URL: {}", config.api_url));
        }

        Ok(Self {
            api_url: config.api_url,
            http,
            log,
            mock_mode: config.mock_mode,
        })
    }

    /// Routes subsequent operations to canned responses.
    ///
    /// Takes effect for the next call; an in-flight call is unaffected.
    pub fn enable_mock_mode(&mut self) {
        self.mock_mode = true;
        self.log.info("mock mode enabled");
    }

    /// Routes subsequent operations back to the live API.
    pub fn disable_mock_mode(&mut self) {
        self.mock_mode = false;
        self.log.info("mock mode disabled");
    }

    #[must_use]
    pub const fn mock_mode(&self) -> bool {
        self.mock_mode
    }

    /// Submits a PDF document to the spool service for dual delivery.
    ///
    /// The document is read synchronously, base64-encoded, and posted in one
    /// request. A missing document, a transport failure, and a non-2xx
    /// response all normalize into a failure envelope.
    pub async fn submit_spool(&self, submission: &SpoolSubmission) -> ApiResponse {
        if self.mock_mode {
            self.log.debug("returning mock response for submit_spool");
            return ApiResponse::success(
                json!({
                    "spool_id": MOCK_SPOOL_ID,
                    "status": "processing",
                    "timestamp": now_iso(),
                }),
                "Document submitted to spool successfully (MOCK)",
            );
        }

        let document_path = &submission.document_path;
        self.log.debug(&format!(
            "reading PDF file from {}",
            document_path.display()
        ));
        if !document_path.exists() {
            let error = format!("PDF file not found at {}", document_path.display());
            self.log.error(&error);
            return ApiResponse::failure(error, SUBMIT_FAILED);
        }

        let payload = match self.build_payload(submission) {
            Ok(payload) => payload,
            Err(err) => {
                self.log
                    .error(&format!("error submitting document: {err}"));
                return ApiResponse::failure(err.to_string(), SUBMIT_FAILED);
            }
        };
        let url = match self.endpoint(SUBMIT_PATH) {
            Ok(url) => url,
            Err(err) => {
                self.log
                    .error(&format!("error submitting document: {err}"));
                return ApiResponse::failure(err.to_string(), SUBMIT_FAILED);
            }
        };

        self.log
            .debug(&format!("making request to endpoint: {SUBMIT_PATH}"));
        match self.http.post(url).json(&payload).send().await {
            Ok(response) => self.normalize(response, SUBMIT_OK, SUBMIT_FAILED).await,
            Err(err) => {
                self.log
                    .error(&format!("error with endpoint {SUBMIT_PATH}: {err}"));
                ApiResponse::failure(err.to_string(), SUBMIT_FAILED)
            }
        }
    }

    /// Retrieves the delivery status of a spool submission.
    ///
    /// The id is used verbatim; no format validation is applied.
    pub async fn spool_status(&self, spool_id: &str) -> ApiResponse {
        if self.mock_mode {
            self.log.debug("returning mock response for spool_status");
            return ApiResponse::success(
                json!({
                    "spool_id": spool_id,
                    "status": "processing",
                    "timestamp": now_iso(),
                }),
                "Spool status retrieved successfully (MOCK)",
            );
        }

        self.log
            .debug(&format!("getting status for spool ID: {spool_id}"));
        let path = format!("{STATUS_PATH}/{spool_id}");
        let url = match self.endpoint(&path) {
            Ok(url) => url,
            Err(err) => {
                self.log
                    .error(&format!("error getting spool status: {err}"));
                return ApiResponse::failure(err.to_string(), STATUS_FAILED);
            }
        };

        self.log
            .debug(&format!("making request to endpoint: {path}"));
        match self.http.get(url).send().await {
            Ok(response) => self.normalize(response, STATUS_OK, STATUS_FAILED).await,
            Err(err) => {
                self.log
                    .error(&format!("error with endpoint {path}: {err}"));
                ApiResponse::failure(err.to_string(), STATUS_FAILED)
            }
        }
    }

    fn build_payload(&self, submission: &SpoolSubmission) -> Result<DualDeliveryPayload> {
        let bytes = fs::read(&submission.document_path)?;
        let content = BASE64.encode(bytes);
        let filename = submission.document_path.file_name().map_or_else(
            || "document.pdf".to_owned(),
            |name| name.to_string_lossy().into_owned(),
        );

        Ok(DualDeliveryPayload::build(
            submission,
            content,
            filename,
            Utc::now().timestamp_millis(),
        ))
    }

    async fn normalize(
        &self,
        response: Response,
        ok_message: &str,
        failed_message: &str,
    ) -> ApiResponse {
        let status = response.status();
        if status.is_success() {
            self.log.debug("response successfully received");
            return match response.text().await {
                // Any 2xx is a success; a non-JSON body is passed through
                // verbatim as a string instead of failing the operation.
                Ok(text) => {
                    let data = serde_json::from_str(&text).unwrap_or(Value::String(text));
                    ApiResponse::success(data, ok_message)
                }
                Err(err) => ApiResponse::failure(err.to_string(), failed_message),
            };
        }

        self.log.error(&format!("response status: {status}"));
        let body = response.json::<Value>().await.unwrap_or(Value::Null);
        self.log.error_with("response data:", &body);

        let error = body.get("message").and_then(Value::as_str).map_or_else(
            || format!("request failed with status code {}", status.as_u16()),
            str::to_owned,
        );
        ApiResponse::failure(error, failed_message)
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        Ok(self.api_url.join(path)?)
    }
}

fn now_iso() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn build_http_client(config: &ClientConfig, log: &Logger) -> Result<HttpClient> {
    let mut headers = header::HeaderMap::new();
    headers.insert(
        header::ACCEPT,
        header::HeaderValue::from_static("application/json"),
    );
    headers.insert(
        header::CONTENT_TYPE,
        header::HeaderValue::from_static("application/json"),
    );

    let mut builder = HttpClient::builder()
        .timeout(config.timeout)
        .default_headers(headers);

    if config.danger_accept_invalid_certs {
        log.warn("server certificate verification is DISABLED");
        builder = builder.danger_accept_invalid_certs(true);
    }

    if !config.mock_mode {
        match load_identity(&config.certificate_path, &config.key_path) {
            Ok(identity) => {
                builder = builder.identity(identity);
                log.info("certificate and key loaded successfully");
            }
            Err(err) => {
                // Degraded construction: calls will fail provider-side auth.
                log.error(&format!("error loading certificate: {err}"));
                log.warn("initializing without certificate, API calls may fail");
            }
        }
    }

    builder
        .build()
        .map_err(|e| Error::transport(format!("failed to build HTTP client: {e}")))
}

fn load_identity(certificate_path: &Path, key_path: &Path) -> Result<Identity> {
    if !certificate_path.exists() || !key_path.exists() {
        return Err(Error::certificate(format!(
            "certificate or key file not found at {} or {}",
            certificate_path.display(),
            key_path.display()
        )));
    }

    let mut pem = fs::read(certificate_path)?;
    pem.extend(fs::read(key_path)?);
    Identity::from_pem(&pem)
        .map_err(|e| Error::certificate(format!("invalid certificate or key: {e}")))
}
