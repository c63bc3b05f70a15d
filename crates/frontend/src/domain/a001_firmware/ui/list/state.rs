use contracts::domain::a001_firmware::FirmwareItem;
use contracts::shared::query::{
    ApiResponse, PagedResult, QueryParams, SortSpec, Term, DEFAULT_PAGE_SIZE,
};
use leptos::prelude::*;

/// Список сортируется только по дате создания, новые сверху
pub const SORT_FIELD: &str = "createTime";

/// List screen state; also holds the current record and the save dialog flag
#[derive(Clone, Debug)]
pub struct FirmwareListState {
    pub items: Vec<FirmwareItem>,
    pub terms: Vec<Term>,
    pub is_loaded: bool,
    // Серверная пагинация
    pub page: usize,
    pub page_size: usize,
    pub total_count: u64,
    pub total_pages: usize,
    // Текущая запись и модалка сохранения
    pub current: Option<FirmwareItem>,
    pub save_open: bool,
    /// Bumped on every request; only the latest response is applied
    pub generation: u64,
}

impl Default for FirmwareListState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            terms: Vec::new(),
            is_loaded: false,
            page: 0,
            page_size: DEFAULT_PAGE_SIZE,
            total_count: 0,
            total_pages: 0,
            current: None,
            save_open: false,
            generation: 0,
        }
    }
}

impl FirmwareListState {
    pub fn query_params(&self) -> QueryParams {
        QueryParams::page(self.page, self.page_size)
            .with_sort(SortSpec::desc(SORT_FIELD))
            .with_terms(self.terms.clone())
    }

    /// New search: back to the first page before anything is requested
    pub fn apply_search(&mut self, terms: Vec<Term>) {
        self.terms = terms;
        self.page = 0;
    }

    pub fn go_to_page(&mut self, page: usize) {
        self.page = page;
    }

    pub fn change_page_size(&mut self, page_size: usize) {
        self.page_size = page_size.max(1);
        self.page = 0;
    }

    pub fn begin_request(&mut self) -> (u64, QueryParams) {
        self.generation += 1;
        (self.generation, self.query_params())
    }

    pub fn is_current(&self, generation: u64) -> bool {
        self.generation == generation
    }

    /// Rows are kept exactly as received. Returns false for a superseded response.
    pub fn apply_page(&mut self, generation: u64, page: PagedResult<FirmwareItem>) -> bool {
        if !self.is_current(generation) {
            return false;
        }
        self.total_count = page.total;
        self.total_pages = page.total_pages();
        self.items = page.data;
        self.is_loaded = true;
        true
    }

    pub fn open_create(&mut self) {
        self.current = None;
        self.save_open = true;
    }

    pub fn open_edit(&mut self, item: FirmwareItem) {
        self.current = Some(item);
        self.save_open = true;
    }

    pub fn select(&mut self, item: FirmwareItem) {
        self.current = Some(item);
    }

    pub fn close_save(&mut self) {
        self.save_open = false;
    }

    /// Delete answered: success starts exactly one reload of the current page,
    /// anything else yields the message to report and requests nothing.
    pub fn after_remove<T>(&mut self, response: &ApiResponse<T>) -> Result<(u64, QueryParams), String> {
        if response.is_success() {
            Ok(self.begin_request())
        } else {
            Err(response.failure_message())
        }
    }
}

pub fn create_state() -> RwSignal<FirmwareListState> {
    RwSignal::new(FirmwareListState::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::query::SortOrder;

    fn item(id: &str) -> FirmwareItem {
        serde_json::from_value(serde_json::json!({"id": id, "name": id})).unwrap()
    }

    fn page_of(ids: &[&str], total: u64) -> PagedResult<FirmwareItem> {
        PagedResult {
            page_index: 0,
            page_size: DEFAULT_PAGE_SIZE,
            total,
            data: ids.iter().map(|id| item(id)).collect(),
        }
    }

    #[test]
    fn test_request_sorts_by_create_time_desc() {
        let mut state = FirmwareListState::default();
        let (_, params) = state.begin_request();
        assert_eq!(params.sorts.len(), 1);
        assert_eq!(params.sorts[0].name, "createTime");
        assert_eq!(params.sorts[0].order, SortOrder::Desc);
    }

    #[test]
    fn test_search_resets_page_before_request() {
        let mut state = FirmwareListState::default();
        state.go_to_page(4);
        state.apply_search(vec![Term::like("name", "boot")]);

        let (_, params) = state.begin_request();
        assert_eq!(params.page_index, 0);
        assert_eq!(params.terms, vec![Term::like("name", "boot")]);
    }

    #[test]
    fn test_rows_kept_in_received_order() {
        let mut state = FirmwareListState::default();
        let (generation, _) = state.begin_request();
        assert!(state.apply_page(generation, page_of(&["c", "a", "b"], 23)));

        let ids: Vec<_> = state.items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["c", "a", "b"]);
        assert_eq!(state.total_count, 23);
        assert_eq!(state.total_pages, 3);
        assert!(state.is_loaded);
    }

    #[test]
    fn test_superseded_response_is_dropped() {
        let mut state = FirmwareListState::default();
        let (first, _) = state.begin_request();
        let (second, _) = state.begin_request();

        assert!(state.apply_page(second, page_of(&["new"], 1)));
        assert!(!state.apply_page(first, page_of(&["old"], 1)));
        assert_eq!(state.items[0].id, "new");
    }

    #[test]
    fn test_reload_keeps_page_parameters() {
        let mut state = FirmwareListState::default();
        state.change_page_size(20);
        state.go_to_page(2);
        state.apply_search(vec![Term::eq("signMethod", "md5")]);
        state.go_to_page(1);

        let (_, before) = state.begin_request();
        let (_, after) = state.begin_request();
        assert_eq!(before, after);
        assert_eq!(after.page_index, 1);
        assert_eq!(after.page_size, 20);
    }

    #[test]
    fn test_create_clears_current_and_edit_sets_it() {
        let mut state = FirmwareListState::default();
        state.open_edit(item("fw-1"));
        assert!(state.save_open);
        assert_eq!(state.current.as_ref().map(|i| i.id.as_str()), Some("fw-1"));

        state.close_save();
        state.open_create();
        assert!(state.save_open);
        assert!(state.current.is_none());
    }

    #[test]
    fn test_successful_remove_reloads_once() {
        let mut state = FirmwareListState::default();
        state.go_to_page(2);
        let (before, _) = state.begin_request();

        let ok: ApiResponse<serde_json::Value> = ApiResponse {
            status: 200,
            result: None,
            message: None,
        };
        let (generation, params) = state.after_remove(&ok).unwrap();
        assert_eq!(generation, before + 1);
        assert_eq!(state.generation, before + 1);
        assert_eq!(params.page_index, 2);
    }

    #[test]
    fn test_failed_remove_requests_nothing() {
        let mut state = FirmwareListState::default();
        let (before, _) = state.begin_request();

        let failed: ApiResponse<serde_json::Value> =
            ApiResponse::failed(500, Some("in use".to_string()));
        assert_eq!(state.after_remove(&failed), Err("in use".to_string()));
        assert_eq!(state.generation, before);
        assert!(state.is_current(before));
    }
}
