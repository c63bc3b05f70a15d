//! Generic request wrapper for REST-like resources
//!
//! Every resource answers the same query/get/save/remove calls; a service
//! is just the resource path.

use crate::shared::api_utils::{api_url, read_envelope, ApiError};
use contracts::shared::query::{ApiResponse, PagedResult, QueryParams};
use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CrudService {
    resource: &'static str,
}

impl CrudService {
    pub const fn new(resource: &'static str) -> Self {
        Self { resource }
    }

    /// `/{resource}{suffix}`
    pub fn resource_path(&self, suffix: &str) -> String {
        format!("/{}{}", self.resource, suffix)
    }

    /// `/{resource}/{id}` with the id percent-encoded
    pub fn item_path(&self, id: &str) -> String {
        self.resource_path(&format!("/{}", urlencoding::encode(id)))
    }

    /// Один запрос страницы
    pub async fn query<T: DeserializeOwned>(
        &self,
        params: &QueryParams,
    ) -> Result<ApiResponse<PagedResult<T>>, ApiError> {
        let url = api_url(&self.resource_path("/_query"));
        log::debug!(
            "POST {} page={} size={} terms={}",
            url,
            params.page_index,
            params.page_size,
            params.terms.len()
        );
        post_json(&url, params).await
    }

    /// Same filters, whole result set
    pub async fn query_no_paging<T: DeserializeOwned>(
        &self,
        params: &QueryParams,
    ) -> Result<ApiResponse<Vec<T>>, ApiError> {
        let url = api_url(&self.resource_path("/_query/no-paging"));
        log::debug!("POST {}", url);
        post_json(&url, params).await
    }

    pub async fn get<T: DeserializeOwned>(&self, id: &str) -> Result<ApiResponse<T>, ApiError> {
        let url = api_url(&self.item_path(id));
        log::debug!("GET {}", url);
        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        read_envelope(response).await
    }

    /// Create or update; the server decides by the presence of `id`
    pub async fn save<B: Serialize, T: DeserializeOwned>(
        &self,
        payload: &B,
    ) -> Result<ApiResponse<T>, ApiError> {
        let url = api_url(&self.resource_path(""));
        log::debug!("PATCH {}", url);
        let response = Request::patch(&url)
            .json(payload)
            .map_err(|e| ApiError::Encode(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        read_envelope(response).await
    }

    pub async fn remove(&self, id: &str) -> Result<ApiResponse<serde_json::Value>, ApiError> {
        let url = api_url(&self.item_path(id));
        log::debug!("DELETE {}", url);
        let response = Request::delete(&url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        read_envelope(response).await
    }
}

pub async fn post_json<B: Serialize, T: DeserializeOwned>(
    url: &str,
    body: &B,
) -> Result<ApiResponse<T>, ApiError> {
    let response = Request::post(url)
        .json(body)
        .map_err(|e| ApiError::Encode(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    read_envelope(response).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths() {
        let service = CrudService::new("firmware");
        assert_eq!(service.resource_path("/_query"), "/firmware/_query");
        assert_eq!(service.resource_path(""), "/firmware");
        assert_eq!(service.item_path("fw 1/2"), "/firmware/fw%201%2F2");
    }
}
