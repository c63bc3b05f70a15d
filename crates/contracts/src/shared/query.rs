use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Размер страницы по умолчанию для табличных экранов
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// HTTP-подобный код успешного ответа в конверте API
pub const STATUS_OK: u16 = 200;

// ============================================================================
// Sorting
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

/// Sort specification as the query endpoints expect it: `{name, order}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    pub name: String,
    pub order: SortOrder,
}

impl SortSpec {
    pub fn asc(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            order: SortOrder::Asc,
        }
    }

    pub fn desc(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            order: SortOrder::Desc,
        }
    }
}

// ============================================================================
// Filter terms
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TermType {
    Eq,
    Like,
    Btw,
    Gte,
    Lte,
}

/// One field predicate of a query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Term {
    pub column: String,
    pub value: Value,
    pub term_type: TermType,
}

impl Term {
    /// Substring match; the value is wrapped in `%` on both sides
    pub fn like(column: impl Into<String>, text: &str) -> Self {
        Self {
            column: column.into(),
            value: Value::String(format!("%{}%", text)),
            term_type: TermType::Like,
        }
    }

    pub fn eq(column: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            column: column.into(),
            value: value.into(),
            term_type: TermType::Eq,
        }
    }

    pub fn gte(column: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            column: column.into(),
            value: value.into(),
            term_type: TermType::Gte,
        }
    }

    pub fn lte(column: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            column: column.into(),
            value: value.into(),
            term_type: TermType::Lte,
        }
    }

    /// Inclusive range `[from, to]`
    pub fn between(column: impl Into<String>, from: impl Into<Value>, to: impl Into<Value>) -> Self {
        Self {
            column: column.into(),
            value: Value::Array(vec![from.into(), to.into()]),
            term_type: TermType::Btw,
        }
    }
}

// ============================================================================
// Query parameters and paged result
// ============================================================================

/// Параметры запроса списка (пагинация с 0, сортировки, фильтры)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryParams {
    pub page_index: usize,
    pub page_size: usize,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sorts: Vec<SortSpec>,
    #[serde(default)]
    pub terms: Vec<Term>,
}

impl Default for QueryParams {
    fn default() -> Self {
        Self {
            page_index: 0,
            page_size: DEFAULT_PAGE_SIZE,
            sorts: Vec::new(),
            terms: Vec::new(),
        }
    }
}

impl QueryParams {
    pub fn page(page_index: usize, page_size: usize) -> Self {
        Self {
            page_index,
            page_size,
            ..Self::default()
        }
    }

    pub fn with_sort(mut self, sort: SortSpec) -> Self {
        self.sorts.push(sort);
        self
    }

    pub fn with_terms(mut self, terms: Vec<Term>) -> Self {
        self.terms = terms;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PagedResult<T> {
    #[serde(default)]
    pub page_index: usize,
    #[serde(default)]
    pub page_size: usize,
    #[serde(default)]
    pub total: u64,
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
}

impl<T> Default for PagedResult<T> {
    fn default() -> Self {
        Self {
            page_index: 0,
            page_size: DEFAULT_PAGE_SIZE,
            total: 0,
            data: Vec::new(),
        }
    }
}

impl<T> PagedResult<T> {
    pub fn total_pages(&self) -> usize {
        if self.page_size == 0 {
            return 0;
        }
        let total = self.total as usize;
        (total + self.page_size - 1) / self.page_size
    }
}

// ============================================================================
// Response envelope
// ============================================================================

/// Конверт, в котором API возвращает любой ответ
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub status: u16,
    pub result: Option<T>,
    #[serde(default)]
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn failed(status: u16, message: Option<String>) -> Self {
        Self {
            status,
            result: None,
            message,
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == STATUS_OK
    }

    /// Human-readable reason of a non-success response
    pub fn failure_message(&self) -> String {
        match &self.message {
            Some(message) if !message.trim().is_empty() => message.clone(),
            _ => format!("Request failed with status {}", self.status),
        }
    }
}

/// Envelope as it comes over the wire; `status` may be missing on some endpoints
#[derive(Debug, Deserialize)]
#[serde(bound = "T: DeserializeOwned")]
pub struct RawApiResponse<T> {
    #[serde(default)]
    pub status: Option<u16>,
    pub result: Option<T>,
    #[serde(default)]
    pub message: Option<String>,
}

impl<T> RawApiResponse<T> {
    /// Resolve the envelope status: a status in the body wins unless the
    /// transport itself reported a failure.
    pub fn into_response(self, http_status: u16) -> ApiResponse<T> {
        let transport_ok = (200..300).contains(&http_status);
        let status = if transport_ok {
            self.status.unwrap_or(STATUS_OK)
        } else {
            http_status
        };
        ApiResponse {
            status,
            result: self.result,
            message: self.message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_query_params_wire_shape() {
        let params = QueryParams::page(2, 20)
            .with_sort(SortSpec::desc("createTime"))
            .with_terms(vec![Term::like("name", "boot")]);

        let value = serde_json::to_value(&params).unwrap();
        assert_eq!(
            value,
            json!({
                "pageIndex": 2,
                "pageSize": 20,
                "sorts": [{"name": "createTime", "order": "desc"}],
                "terms": [{"column": "name", "value": "%boot%", "termType": "like"}]
            })
        );
    }

    #[test]
    fn test_between_term_carries_both_bounds() {
        let term = Term::between("createTime", 1_000, 2_000);
        assert_eq!(term.term_type, TermType::Btw);
        assert_eq!(term.value, json!([1000, 2000]));
    }

    #[test]
    fn test_total_pages_rounds_up() {
        let page: PagedResult<u8> = PagedResult {
            page_index: 0,
            page_size: 10,
            total: 21,
            data: vec![],
        };
        assert_eq!(page.total_pages(), 3);

        let empty: PagedResult<u8> = PagedResult::default();
        assert_eq!(empty.total_pages(), 0);
    }

    #[test]
    fn test_raw_envelope_status_resolution() {
        let body: RawApiResponse<String> =
            serde_json::from_str(r#"{"status": 500, "message": "boom"}"#).unwrap();
        let resp = body.into_response(200);
        assert_eq!(resp.status, 500);
        assert!(!resp.is_success());
        assert_eq!(resp.failure_message(), "boom");

        let body: RawApiResponse<String> = serde_json::from_str(r#"{"result": "x"}"#).unwrap();
        let resp = body.into_response(200);
        assert!(resp.is_success());
        assert_eq!(resp.result.as_deref(), Some("x"));

        let body: RawApiResponse<String> = serde_json::from_str(r#"{"status": 200}"#).unwrap();
        assert_eq!(body.into_response(404).status, 404);
    }

    #[test]
    fn test_failure_message_fallback() {
        let resp: ApiResponse<()> = ApiResponse::failed(403, None);
        assert_eq!(resp.failure_message(), "Request failed with status 403");
    }
}
