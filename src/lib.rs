//! Client for the BriefButler document delivery (spool) service.
//!
//! This crate intentionally implements only the thin connector surface:
//! - build an HTTP client presenting a TLS client certificate (mutual TLS)
//! - submit a PDF for dual (print + electronic) delivery
//! - query delivery status for a spool id
//!
//! A mock mode short-circuits both operations with canned responses for
//! offline testing. Every operation resolves to an [`ApiResponse`] envelope;
//! failures are reported in-band, never as errors or panics.
//!
//! ```no_run
//! use briefbutler_client::{BriefButlerClient, SpoolSubmission};
//!
//! # async fn run() -> briefbutler_client::Result<()> {
//! let client = BriefButlerClient::from_env()?;
//! let submission = SpoolSubmission::builder()
//!     .document_path("invoices/2024-001.pdf")
//!     .recipient_name("Anna Huber")
//!     .recipient_street("Landstrasse 12")
//!     .recipient_city("Linz")
//!     .recipient_zip("4020")
//!     .recipient_country("AT")
//!     .sender_name("Max Muster")
//!     .sender_street("Hauptplatz 1")
//!     .sender_city("Graz")
//!     .sender_zip("8010")
//!     .sender_country("AT")
//!     .build();
//!
//! let result = client.submit_spool(&submission).await;
//! if result.success {
//!     println!("submitted: {:?}", result.data);
//! }
//! # Ok(())
//! # }
//! ```

mod client;
mod config;
mod error;
mod logger;
mod payload;
mod types;

pub use client::{BriefButlerClient, MOCK_SPOOL_ID};
pub use config::{ClientConfig, DEFAULT_API_URL, REQUEST_TIMEOUT};
pub use error::{Error, Kind as ErrorKind};
pub use logger::{Level, Logger};
pub use types::{ApiResponse, DeliveryDetails, SpoolSubmission, StatusEvent, StatusRecord};

/// Convenience alias used throughout the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;
