use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Алгоритм подписи файла прошивки
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SignMethod {
    #[serde(alias = "MD5")]
    Md5,
    #[serde(alias = "SHA256")]
    Sha256,
}

impl SignMethod {
    pub const ALL: [SignMethod; 2] = [SignMethod::Md5, SignMethod::Sha256];

    pub fn as_str(&self) -> &'static str {
        match self {
            SignMethod::Md5 => "md5",
            SignMethod::Sha256 => "sha256",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SignMethod::Md5 => "MD5",
            SignMethod::Sha256 => "SHA256",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|m| m.as_str().eq_ignore_ascii_case(value.trim()))
    }
}

/// Firmware record as the list and detail endpoints return it.
///
/// Lifecycle is owned by the server; the UI only holds transient copies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FirmwareItem {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub version_order: Option<i64>,
    #[serde(default)]
    pub product_id: String,
    #[serde(default)]
    pub product_name: String,
    #[serde(default)]
    pub sign_method: Option<SignMethod>,
    #[serde(default)]
    pub sign: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub size: Option<u64>,
    /// Epoch millis
    #[serde(default)]
    pub create_time: Option<i64>,
    #[serde(default)]
    pub description: Option<String>,
}

impl FirmwareItem {
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        self.create_time.and_then(DateTime::<Utc>::from_timestamp_millis)
    }
}

/// Product option for the firmware form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRef {
    pub id: String,
    pub name: String,
}
