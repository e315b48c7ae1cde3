use std::path::PathBuf;

use bon::Builder;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One dual-delivery submission handed to the spool service.
///
/// Transient by design: build it, submit it, drop it. Nothing is persisted
/// client-side and no identifier is assigned until the provider responds.
#[derive(Builder, Clone, Debug)]
#[builder(on(String, into), on(PathBuf, into))]
pub struct SpoolSubmission {
    /// Path to the PDF document to deliver.
    pub document_path: PathBuf,
    pub recipient_name: String,
    pub recipient_street: String,
    pub recipient_city: String,
    pub recipient_zip: String,
    pub recipient_country: String,
    pub recipient_state: Option<String>,
    pub recipient_email: Option<String>,
    pub recipient_phone: Option<String>,
    pub sender_name: String,
    pub sender_street: String,
    pub sender_city: String,
    pub sender_zip: String,
    pub sender_country: String,
    pub sender_state: Option<String>,
    /// Caller reference; doubles as cost center and subject when present.
    pub reference: Option<String>,
    pub color_print: Option<bool>,
    pub duplex_print: Option<bool>,
    /// Delivery priority, e.g. `normal` or `priority`.
    pub priority: Option<String>,
    /// Provider-side delivery profile, `briefbutler-test` when unset.
    pub delivery_profile: Option<String>,
}

/// Uniform result envelope returned by every client operation.
///
/// Success implies `data` may be present; failure implies `error` is present.
/// The envelope is never partially filled beyond that.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct ApiResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub message: String,
}

impl ApiResponse {
    pub(crate) fn success(data: Value, message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            message: message.into(),
        }
    }

    pub(crate) fn failure(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.into()),
            message: message.into(),
        }
    }

    /// Deserializes `data` into a typed view, `None` when absent or mismatched.
    #[must_use]
    pub fn decode_data<T: DeserializeOwned>(&self) -> Option<T> {
        self.data
            .clone()
            .and_then(|data| serde_json::from_value(data).ok())
    }
}

/// Delivery status as reported by the provider for one spool id.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusRecord {
    pub tracking_id: String,
    pub status: String,
    pub timestamp: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<DeliveryDetails>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_arrival: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_location: Option<String>,
    /// Ordered oldest-first, as delivered by the provider.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub events: Option<Vec<StatusEvent>>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct StatusEvent {
    pub date: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}
