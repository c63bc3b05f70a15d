use contracts::domain::a001_firmware::{FirmwareDto, FirmwareItem, SignMethod};
use contracts::shared::validation::{require_text, FieldError};

/// Editable state of the firmware form; numeric and enum fields stay as the
/// user typed them until [`FirmwareForm::to_dto`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FirmwareForm {
    pub id: Option<String>,
    pub name: String,
    pub product_id: String,
    pub product_name: String,
    pub version: String,
    pub version_order: String,
    pub sign_method: String,
    pub sign: String,
    pub url: String,
    pub size: Option<u64>,
    pub description: String,
}

impl FirmwareForm {
    /// Empty form for create, the record's values for edit
    pub fn from_selection(selection: Option<&FirmwareItem>) -> Self {
        let Some(item) = selection else {
            return Self::default();
        };
        Self {
            id: Some(item.id.clone()),
            name: item.name.clone(),
            product_id: item.product_id.clone(),
            product_name: item.product_name.clone(),
            version: item.version.clone(),
            version_order: item
                .version_order
                .map(|v| v.to_string())
                .unwrap_or_default(),
            sign_method: item
                .sign_method
                .map(|m| m.as_str().to_string())
                .unwrap_or_default(),
            sign: item.sign.clone(),
            url: item.url.clone(),
            size: item.size,
            description: item.description.clone().unwrap_or_default(),
        }
    }

    pub fn is_edit(&self) -> bool {
        self.id.is_some()
    }

    /// Validate in field order and build the save payload
    pub fn to_dto(&self) -> Result<FirmwareDto, FieldError> {
        require_text(&self.name, "name", "Firmware name")?;
        require_text(&self.product_id, "productId", "Product")?;
        require_text(&self.version, "version", "Version")?;
        require_text(&self.version_order, "versionOrder", "Version order")?;
        let version_order = self.version_order.trim().parse::<i64>().map_err(|_| {
            FieldError::invalid("versionOrder", "Version order", "must be a whole number")
        })?;
        let sign_method = SignMethod::parse(&self.sign_method)
            .ok_or_else(|| FieldError::required("signMethod", "Sign method"))?;

        let description = self.description.trim();
        let dto = FirmwareDto {
            id: self.id.clone(),
            name: self.name.trim().to_string(),
            product_id: self.product_id.clone(),
            product_name: self.product_name.clone(),
            version: self.version.trim().to_string(),
            version_order,
            sign_method,
            sign: self.sign.trim().to_string(),
            url: self.url.trim().to_string(),
            size: self.size,
            description: (!description.is_empty()).then(|| description.to_string()),
        };
        dto.validate()?;
        Ok(dto)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selected() -> FirmwareItem {
        FirmwareItem {
            id: "fw-1".into(),
            name: "Boot".into(),
            version: "1.0.2".into(),
            version_order: Some(3),
            product_id: "p-1".into(),
            product_name: "Gateway".into(),
            sign_method: Some(SignMethod::Sha256),
            sign: "abc".into(),
            url: "http://files/boot.bin".into(),
            size: Some(1024),
            create_time: Some(1_700_000_000_000),
            description: Some("first".into()),
        }
    }

    #[test]
    fn test_no_selection_prefills_nothing() {
        let form = FirmwareForm::from_selection(None);
        assert_eq!(form, FirmwareForm::default());
        assert!(!form.is_edit());
    }

    #[test]
    fn test_selection_prefills_every_field() {
        let item = selected();
        let form = FirmwareForm::from_selection(Some(&item));
        assert_eq!(form.id.as_deref(), Some("fw-1"));
        assert_eq!(form.name, item.name);
        assert_eq!(form.product_id, item.product_id);
        assert_eq!(form.product_name, item.product_name);
        assert_eq!(form.version, item.version);
        assert_eq!(form.version_order, "3");
        assert_eq!(form.sign_method, "sha256");
        assert_eq!(form.sign, item.sign);
        assert_eq!(form.url, item.url);
        assert_eq!(form.size, Some(1024));
        assert_eq!(form.description, "first");
    }

    #[test]
    fn test_edit_round_trips_to_dto() {
        let dto = FirmwareForm::from_selection(Some(&selected())).to_dto().unwrap();
        assert_eq!(dto.id.as_deref(), Some("fw-1"));
        assert_eq!(dto.version_order, 3);
        assert_eq!(dto.sign_method, SignMethod::Sha256);
        assert_eq!(dto.description.as_deref(), Some("first"));
    }

    #[test]
    fn test_first_error_wins() {
        let err = FirmwareForm::default().to_dto().unwrap_err();
        assert_eq!(err.field, "name");

        let mut form = FirmwareForm::from_selection(Some(&selected()));
        form.version_order = "x".into();
        form.url.clear();
        let err = form.to_dto().unwrap_err();
        assert_eq!(err.field, "versionOrder");

        form.version_order = "-1".into();
        assert_eq!(form.to_dto().unwrap_err().field, "versionOrder");

        form.version_order = "2".into();
        form.sign_method.clear();
        assert_eq!(form.to_dto().unwrap_err().field, "signMethod");

        form.sign_method = "md5".into();
        assert_eq!(form.to_dto().unwrap_err().field, "url");
    }
}
