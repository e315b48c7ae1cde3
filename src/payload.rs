//! Wire shape for `POST /endpoint-spool/dualDelivery`.
//!
//! Field names and defaults follow the provider's spool API documentation.
//! The name-split heuristic and the hardcoded `AT` country code are preserved
//! connector behavior, not local inventions.

use serde::Serialize;

use crate::types::SpoolSubmission;

const DEFAULT_DELIVERY_PROFILE: &str = "briefbutler-test";
const DEFAULT_COSTCENTER: &str = "default-costcenter";
const DEFAULT_SUBJECT: &str = "Document Delivery";
const COUNTRY_CODE: &str = "AT";
const PDF_MIME: &str = "application/pdf";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct DualDeliveryPayload {
    pub metadata: Metadata,
    pub configuration: Configuration,
    pub receiver: Receiver,
    pub sender: SenderBlock,
    pub subject: String,
    pub documents: Vec<Document>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Metadata {
    pub delivery_id: String,
    pub case_id: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Configuration {
    pub delivery_profile: String,
    pub allow_email: bool,
    pub costcenter: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Receiver {
    pub email: String,
    pub recipient: Person,
    pub postal_address: PostalAddress,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SenderBlock {
    pub person: Person,
    pub postal_address: PostalAddress,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Person {
    pub physical_person: PhysicalPerson,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PhysicalPerson {
    pub family_name: String,
    pub given_name: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PostalAddress {
    pub street: String,
    pub postal_code: String,
    pub city: String,
    pub country_code: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Document {
    /// Base64-encoded file contents.
    pub content: String,
    pub mime_type: String,
    pub name: String,
    pub document_id: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl DualDeliveryPayload {
    /// Shapes one submission into the provider's nested JSON payload.
    ///
    /// `stamp_millis` feeds the generated delivery/case/document ids so tests
    /// can pin them.
    pub(crate) fn build(
        submission: &SpoolSubmission,
        content: String,
        filename: String,
        stamp_millis: i64,
    ) -> Self {
        let (recipient_given, recipient_family) = split_name(&submission.recipient_name);
        let (sender_given, sender_family) = split_name(&submission.sender_name);
        let reference = submission.reference.as_deref();

        Self {
            metadata: Metadata {
                delivery_id: format!("Delivery_{stamp_millis}"),
                case_id: format!("Case_{stamp_millis}"),
            },
            configuration: Configuration {
                delivery_profile: submission
                    .delivery_profile
                    .clone()
                    .unwrap_or_else(|| DEFAULT_DELIVERY_PROFILE.to_owned()),
                allow_email: true,
                costcenter: reference.unwrap_or(DEFAULT_COSTCENTER).to_owned(),
            },
            receiver: Receiver {
                email: submission.recipient_email.clone().unwrap_or_default(),
                recipient: Person {
                    physical_person: PhysicalPerson {
                        family_name: recipient_family,
                        given_name: recipient_given,
                    },
                },
                postal_address: PostalAddress {
                    street: submission.recipient_street.clone(),
                    postal_code: submission.recipient_zip.clone(),
                    city: submission.recipient_city.clone(),
                    country_code: COUNTRY_CODE.to_owned(),
                },
            },
            sender: SenderBlock {
                person: Person {
                    physical_person: PhysicalPerson {
                        family_name: sender_family,
                        given_name: sender_given,
                    },
                },
                postal_address: PostalAddress {
                    street: submission.sender_street.clone(),
                    postal_code: submission.sender_zip.clone(),
                    city: submission.sender_city.clone(),
                    country_code: COUNTRY_CODE.to_owned(),
                },
            },
            subject: reference.unwrap_or(DEFAULT_SUBJECT).to_owned(),
            documents: vec![Document {
                content,
                mime_type: PDF_MIME.to_owned(),
                name: filename,
                document_id: format!("doc_{stamp_millis}"),
                kind: "Standard".to_owned(),
            }],
        }
    }
}

/// First whitespace token as given name, last token as family name.
///
/// Multi-word family names ("Van der Berg") lose their middle tokens; a
/// single-token or empty name is used for both fields.
pub(crate) fn split_name(name: &str) -> (String, String) {
    let mut tokens = name.split_whitespace();
    let given = tokens.next().unwrap_or(name);
    let family = tokens.last().unwrap_or(given);
    (given.to_owned(), family.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SpoolSubmission;

    fn sample_submission() -> SpoolSubmission {
        SpoolSubmission::builder()
            .document_path("invoices/2024-001.pdf")
            .recipient_name("Anna Maria Huber")
            .recipient_street("Landstrasse 12")
            .recipient_city("Linz")
            .recipient_zip("4020")
            .recipient_country("AT")
            .sender_name("Max Muster")
            .sender_street("Hauptplatz 1")
            .sender_city("Graz")
            .sender_zip("8010")
            .sender_country("AT")
            .build()
    }

    #[test]
    fn splits_given_and_family_name() {
        assert_eq!(
            split_name("Anna Maria Huber"),
            ("Anna".to_owned(), "Huber".to_owned()),
            "middle tokens are dropped"
        );
        assert_eq!(
            split_name("Cher"),
            ("Cher".to_owned(), "Cher".to_owned()),
            "single token fills both fields"
        );
        assert_eq!(
            split_name(""),
            (String::new(), String::new()),
            "empty name stays empty"
        );
    }

    #[test]
    fn payload_carries_documented_shape() {
        let payload = DualDeliveryPayload::build(
            &sample_submission(),
            "JVBERi0=".to_owned(),
            "2024-001.pdf".to_owned(),
            1_700_000_000_000,
        );
        let value = serde_json::to_value(payload).expect("payload serializes");

        assert_eq!(
            value.pointer("/metadata/deliveryId").and_then(|v| v.as_str()),
            Some("Delivery_1700000000000"),
            "delivery id derives from the stamp"
        );
        assert_eq!(
            value
                .pointer("/configuration/deliveryProfile")
                .and_then(|v| v.as_str()),
            Some("briefbutler-test"),
            "profile defaults"
        );
        assert_eq!(
            value
                .pointer("/configuration/allowEmail")
                .and_then(serde_json::Value::as_bool),
            Some(true),
            "email delivery always allowed"
        );
        assert_eq!(
            value
                .pointer("/receiver/recipient/physicalPerson/givenName")
                .and_then(|v| v.as_str()),
            Some("Anna"),
            "receiver given name split"
        );
        assert_eq!(
            value
                .pointer("/sender/person/physicalPerson/familyName")
                .and_then(|v| v.as_str()),
            Some("Muster"),
            "sender family name split"
        );
        assert_eq!(
            value
                .pointer("/receiver/postalAddress/countryCode")
                .and_then(|v| v.as_str()),
            Some("AT"),
            "country code is hardcoded"
        );
        assert_eq!(
            value.pointer("/subject").and_then(|v| v.as_str()),
            Some("Document Delivery"),
            "subject defaults without a reference"
        );
        assert_eq!(
            value.pointer("/documents/0/type").and_then(|v| v.as_str()),
            Some("Standard"),
            "document type is fixed"
        );
        assert_eq!(
            value
                .pointer("/documents/0/documentId")
                .and_then(|v| v.as_str()),
            Some("doc_1700000000000"),
            "document id derives from the stamp"
        );
        assert_eq!(
            value
                .pointer("/documents/0/mimeType")
                .and_then(|v| v.as_str()),
            Some("application/pdf"),
            "mime type is fixed"
        );
    }

    #[test]
    fn reference_feeds_costcenter_and_subject() {
        let mut submission = sample_submission();
        submission.reference = Some("invoice-2024-001".to_owned());
        submission.delivery_profile = Some("production-profile".to_owned());
        submission.recipient_email = Some("anna@example.at".to_owned());

        let payload =
            DualDeliveryPayload::build(&submission, String::new(), "a.pdf".to_owned(), 42);
        let value = serde_json::to_value(payload).expect("payload serializes");

        assert_eq!(
            value
                .pointer("/configuration/costcenter")
                .and_then(|v| v.as_str()),
            Some("invoice-2024-001"),
            "reference overrides cost center"
        );
        assert_eq!(
            value.pointer("/subject").and_then(|v| v.as_str()),
            Some("invoice-2024-001"),
            "reference overrides subject"
        );
        assert_eq!(
            value
                .pointer("/configuration/deliveryProfile")
                .and_then(|v| v.as_str()),
            Some("production-profile"),
            "explicit profile wins"
        );
        assert_eq!(
            value.pointer("/receiver/email").and_then(|v| v.as_str()),
            Some("anna@example.at"),
            "recipient email forwarded"
        );
    }
}
