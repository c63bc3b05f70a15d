use crate::shared::components::search_bar::{SearchField, SearchKind};
use crate::shared::date_utils::format_local;
use contracts::domain::a001_firmware::FirmwareItem;

const SIGN_METHOD_OPTIONS: &[(&str, &str)] = &[("md5", "MD5"), ("sha256", "SHA256")];

/// Column of the firmware table; searchable columns also feed the search bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FirmwareColumn {
    pub title: &'static str,
    pub data_index: &'static str,
    pub width: &'static str,
    pub search: Option<SearchKind>,
}

pub const COLUMNS: [FirmwareColumn; 6] = [
    FirmwareColumn {
        title: "Name",
        data_index: "name",
        width: "200px",
        search: Some(SearchKind::Text),
    },
    FirmwareColumn {
        title: "Version",
        data_index: "version",
        width: "110px",
        search: None,
    },
    FirmwareColumn {
        title: "Product",
        data_index: "productName",
        width: "180px",
        search: Some(SearchKind::Text),
    },
    FirmwareColumn {
        title: "Sign method",
        data_index: "signMethod",
        width: "120px",
        search: Some(SearchKind::Select(SIGN_METHOD_OPTIONS)),
    },
    FirmwareColumn {
        title: "Created",
        data_index: "createTime",
        width: "170px",
        search: Some(SearchKind::DateRange),
    },
    FirmwareColumn {
        title: "Description",
        data_index: "description",
        width: "auto",
        search: None,
    },
];

pub fn search_fields() -> Vec<SearchField> {
    COLUMNS
        .iter()
        .filter_map(|c| {
            c.search.map(|kind| SearchField {
                column: c.data_index,
                label: c.title,
                kind,
            })
        })
        .collect()
}

/// Display text of one cell
pub fn cell_text(item: &FirmwareItem, data_index: &str) -> String {
    match data_index {
        "name" => item.name.clone(),
        "version" => item.version.clone(),
        "productName" => item.product_name.clone(),
        "signMethod" => item
            .sign_method
            .map(|m| m.label().to_string())
            .unwrap_or_else(|| "-".to_string()),
        "createTime" => format_local(item.create_time),
        "description" => item
            .description
            .clone()
            .filter(|d| !d.trim().is_empty())
            .unwrap_or_else(|| "-".to_string()),
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_firmware::SignMethod;

    #[test]
    fn test_search_fields_follow_searchable_columns() {
        let columns: Vec<_> = search_fields().iter().map(|f| f.column).collect();
        assert_eq!(columns, vec!["name", "productName", "signMethod", "createTime"]);
    }

    #[test]
    fn test_cell_text() {
        let item = FirmwareItem {
            id: "fw-1".into(),
            name: "Boot".into(),
            version: "1.0".into(),
            version_order: Some(1),
            product_id: "p-1".into(),
            product_name: "Gateway".into(),
            sign_method: Some(SignMethod::Md5),
            sign: "abc".into(),
            url: "http://files/boot.bin".into(),
            size: None,
            create_time: None,
            description: Some(" ".into()),
        };
        assert_eq!(cell_text(&item, "name"), "Boot");
        assert_eq!(cell_text(&item, "signMethod"), "MD5");
        assert_eq!(cell_text(&item, "createTime"), "-");
        assert_eq!(cell_text(&item, "description"), "-");
        assert_eq!(cell_text(&item, "unknown"), "");
    }
}
