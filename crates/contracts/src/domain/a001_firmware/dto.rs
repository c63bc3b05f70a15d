use super::aggregate::SignMethod;
use crate::shared::validation::{require_text, FieldError};
use serde::{Deserialize, Serialize};

/// Payload of the firmware save endpoint; `id` is absent when creating
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FirmwareDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub product_id: String,
    pub product_name: String,
    pub version: String,
    pub version_order: i64,
    pub sign_method: SignMethod,
    pub sign: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl FirmwareDto {
    pub fn is_new(&self) -> bool {
        self.id.is_none()
    }

    /// Валидация данных перед отправкой
    pub fn validate(&self) -> Result<(), FieldError> {
        require_text(&self.name, "name", "Firmware name")?;
        require_text(&self.product_id, "productId", "Product")?;
        require_text(&self.version, "version", "Version")?;
        if self.version_order < 0 {
            return Err(FieldError::invalid(
                "versionOrder",
                "Version order",
                "must not be negative",
            ));
        }
        require_text(&self.sign, "sign", "Signature")?;
        require_text(&self.url, "url", "Firmware file")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> FirmwareDto {
        FirmwareDto {
            id: None,
            name: "Boot image".into(),
            product_id: "p-1".into(),
            product_name: "Gateway".into(),
            version: "1.0.0".into(),
            version_order: 1,
            sign_method: SignMethod::Md5,
            sign: "d41d8cd98f00b204e9800998ecf8427e".into(),
            url: "http://files/fw.bin".into(),
            size: None,
            description: None,
        }
    }

    #[test]
    fn test_new_dto_omits_id_on_wire() {
        let value = serde_json::to_value(sample()).unwrap();
        assert!(value.get("id").is_none());
        assert_eq!(value["signMethod"], "md5");
        assert_eq!(value["versionOrder"], 1);
    }

    #[test]
    fn test_validate_reports_first_invalid_field() {
        let mut dto = sample();
        dto.version = String::new();
        dto.url = String::new();
        assert_eq!(dto.validate().unwrap_err().field, "version");

        let mut dto = sample();
        dto.version_order = -1;
        assert_eq!(dto.validate().unwrap_err().field, "versionOrder");

        assert!(sample().validate().is_ok());
    }
}
