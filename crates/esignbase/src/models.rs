//! Request payloads for document creation

use std::collections::BTreeMap;

use chrono::{DateTime, FixedOffset, NaiveDateTime, TimeZone};
use serde::{Serialize, Serializer};

/// Wire format of `expiration_date`, e.g. `2025-01-31T12:00:00+0000`.
const EXPIRATION_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%z";

/// A signer or participant attached to a new document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recipient {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    /// Must match a role defined on the template.
    pub role_name: String,
    pub locale: String,
}

impl Recipient {
    pub fn new(
        email: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        role_name: impl Into<String>,
        locale: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            role_name: role_name.into(),
            locale: locale.into(),
        }
    }
}

/// User-defined metadata value: the API accepts strings and integers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum MetadataValue {
    Text(String),
    Integer(i64),
}

impl From<String> for MetadataValue {
    fn from(value: String) -> Self {
        MetadataValue::Text(value)
    }
}

impl From<&str> for MetadataValue {
    fn from(value: &str) -> Self {
        MetadataValue::Text(value.to_owned())
    }
}

impl From<i64> for MetadataValue {
    fn from(value: i64) -> Self {
        MetadataValue::Integer(value)
    }
}

impl From<i32> for MetadataValue {
    fn from(value: i32) -> Self {
        MetadataValue::Integer(value.into())
    }
}

impl From<u32> for MetadataValue {
    fn from(value: u32) -> Self {
        MetadataValue::Integer(value.into())
    }
}

/// Document expiration instant.
///
/// A `NaiveDateTime` is taken to be UTC; a zoned `DateTime` keeps its offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpirationDate(DateTime<FixedOffset>);

impl ExpirationDate {
    pub fn instant(&self) -> DateTime<FixedOffset> {
        self.0
    }

    /// `YYYY-MM-DDTHH:MM:SS±HHMM`
    pub fn to_wire(&self) -> String {
        self.0.format(EXPIRATION_FORMAT).to_string()
    }
}

impl From<NaiveDateTime> for ExpirationDate {
    fn from(value: NaiveDateTime) -> Self {
        Self(value.and_utc().fixed_offset())
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for ExpirationDate {
    fn from(value: DateTime<Tz>) -> Self {
        Self(value.fixed_offset())
    }
}

impl Serialize for ExpirationDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&self.0.format(EXPIRATION_FORMAT))
    }
}

/// Body of `POST api/document`.
///
/// Empty metadata and a missing expiration are left out of the payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateDocumentRequest {
    pub name: String,
    pub template_id: String,
    pub recipients: Vec<Recipient>,
    #[serde(rename = "user_defined_metadata", skip_serializing_if = "BTreeMap::is_empty")]
    pub metadata: BTreeMap<String, MetadataValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration_date: Option<ExpirationDate>,
}

impl CreateDocumentRequest {
    pub fn new(
        template_id: impl Into<String>,
        name: impl Into<String>,
        recipients: impl IntoIterator<Item = Recipient>,
    ) -> Self {
        Self {
            name: name.into(),
            template_id: template_id.into(),
            recipients: recipients.into_iter().collect(),
            metadata: BTreeMap::new(),
            expiration_date: None,
        }
    }

    pub fn with_recipient(mut self, recipient: Recipient) -> Self {
        self.recipients.push(recipient);
        self
    }

    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<MetadataValue>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    pub fn with_expiration_date(mut self, expiration: impl Into<ExpirationDate>) -> Self {
        self.expiration_date = Some(expiration.into());
        self
    }
}
