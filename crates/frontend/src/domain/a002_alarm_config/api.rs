//! Alarm data-exchange endpoints

use crate::shared::api_utils::{api_url, read_envelope, ApiError};
use crate::shared::crud_service::post_json;
use contracts::domain::a002_alarm_config::{DataExchange, ExchangeType, SaveDataExchangeRequest};
use contracts::shared::query::ApiResponse;
use gloo_net::http::Request;

pub fn load_path(kind: ExchangeType) -> String {
    format!("/alarm/config/{}/_load", kind.as_str())
}

pub const SAVE_PATH: &str = "/alarm/config/data-exchange";

pub async fn get_data_exchange(kind: ExchangeType) -> Result<ApiResponse<DataExchange>, ApiError> {
    let url = api_url(&load_path(kind));
    log::debug!("GET {}", url);
    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    read_envelope(response).await
}

pub async fn save_output_data(
    request: &SaveDataExchangeRequest,
) -> Result<ApiResponse<serde_json::Value>, ApiError> {
    let url = api_url(SAVE_PATH);
    log::debug!("POST {}", url);
    post_json(&url, request).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_path() {
        assert_eq!(load_path(ExchangeType::Producer), "/alarm/config/producer/_load");
    }
}
