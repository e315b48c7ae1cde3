use std::env;
use std::path::PathBuf;
use std::time::Duration;

use url::Url;

use crate::Result;
use crate::error::Error;

/// Demo endpoint used when `BRIEFBUTLER_API_URL` is not set.
pub const DEFAULT_API_URL: &str = "https://demodelivery.briefbutler.com";

/// Overall per-request timeout.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

const DEFAULT_CERTIFICATE_PATH: &str = "certificates/converted/cert.crt";
const DEFAULT_KEY_PATH: &str = "certificates/converted/key.key";

/// Connector configuration, typically read from the environment.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    pub api_url: Url,
    /// When set, operations return canned responses and no network calls are
    /// made.
    pub mock_mode: bool,
    /// PEM client certificate presented for mutual TLS.
    pub certificate_path: PathBuf,
    /// PEM private key matching [`Self::certificate_path`].
    pub key_path: PathBuf,
    pub timeout: Duration,
    /// Disables server certificate verification for the TLS session.
    ///
    /// The demo endpoint presents a certificate some trust stores reject;
    /// enabling this weakens transport security and must be a deliberate,
    /// explicit choice. There is no environment toggle for it.
    pub danger_accept_invalid_certs: bool,
}

impl ClientConfig {
    /// Creates a configuration with defaults for everything but the endpoint.
    #[must_use]
    pub fn new(api_url: Url) -> Self {
        Self {
            api_url,
            mock_mode: false,
            certificate_path: PathBuf::from(DEFAULT_CERTIFICATE_PATH),
            key_path: PathBuf::from(DEFAULT_KEY_PATH),
            timeout: REQUEST_TIMEOUT,
            danger_accept_invalid_certs: false,
        }
    }

    /// Reads the `BRIEFBUTLER_*` variables, falling back to the demo defaults.
    ///
    /// Mock mode is enabled only by the exact value `true`; anything else
    /// (including unset) selects the live path.
    pub fn from_env() -> Result<Self> {
        let api_url =
            env::var("BRIEFBUTLER_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_owned());
        let api_url = Url::parse(&api_url)
            .map_err(|e| Error::config(format!("invalid BRIEFBUTLER_API_URL `{api_url}`: {e}")))?;

        let mut config = Self::new(api_url);
        config.mock_mode = env::var("BRIEFBUTLER_TEST_MODE").is_ok_and(|value| value == "true");
        if let Ok(path) = env::var("BRIEFBUTLER_CERTIFICATE_PATH") {
            config.certificate_path = PathBuf::from(path);
        }
        if let Ok(path) = env::var("BRIEFBUTLER_KEY_PATH") {
            config.key_path = PathBuf::from(path);
        }
        Ok(config)
    }
}
