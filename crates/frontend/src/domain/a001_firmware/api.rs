//! Firmware endpoints

use crate::shared::api_utils::ApiError;
use crate::shared::crud_service::CrudService;
use contracts::domain::a001_firmware::{FirmwareDto, FirmwareItem, ProductRef, UpgradeTask};
use contracts::shared::query::{ApiResponse, PagedResult, QueryParams, SortSpec};

pub const FIRMWARE: CrudService = CrudService::new("firmware");
pub const PRODUCTS: CrudService = CrudService::new("device-product");
pub const UPGRADE_TASKS: CrudService = CrudService::new("firmware/upgrade/task");

pub async fn query_firmware(
    params: &QueryParams,
) -> Result<ApiResponse<PagedResult<FirmwareItem>>, ApiError> {
    FIRMWARE.query(params).await
}

pub async fn get_firmware(id: &str) -> Result<ApiResponse<FirmwareItem>, ApiError> {
    FIRMWARE.get(id).await
}

pub async fn save_firmware(dto: &FirmwareDto) -> Result<ApiResponse<serde_json::Value>, ApiError> {
    FIRMWARE.save(dto).await
}

pub async fn remove_firmware(id: &str) -> Result<ApiResponse<serde_json::Value>, ApiError> {
    FIRMWARE.remove(id).await
}

/// All products, ordered by name, for the product selector
pub async fn fetch_products() -> Result<Vec<ProductRef>, String> {
    let params = QueryParams::default().with_sort(SortSpec::asc("name"));
    let response = PRODUCTS
        .query_no_paging::<ProductRef>(&params)
        .await
        .map_err(|e| e.to_string())?;
    if !response.is_success() {
        return Err(response.failure_message());
    }
    Ok(response.result.unwrap_or_default())
}

pub async fn query_upgrade_tasks(
    params: &QueryParams,
) -> Result<ApiResponse<PagedResult<UpgradeTask>>, ApiError> {
    UPGRADE_TASKS.query(params).await
}
