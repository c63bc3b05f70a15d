use crate::shared::enum_value::EnumValue;
use serde::{Deserialize, Serialize};

/// Firmware upgrade task. Owned by the task-management service; the console
/// only lists what it is given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpgradeTask {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub firmware_id: Option<String>,
    #[serde(default)]
    pub mode: Option<EnumValue>,
    #[serde(default)]
    pub timeout_seconds: Option<u64>,
    #[serde(default)]
    pub create_time: Option<i64>,
    #[serde(default)]
    pub description: Option<String>,
}
