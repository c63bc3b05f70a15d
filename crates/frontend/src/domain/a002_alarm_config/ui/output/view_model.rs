use crate::domain::a002_alarm_config::api;
use crate::shared::load_state::LoadState;
use crate::shared::notice::NoticeService;
use contracts::domain::a002_alarm_config::{
    DataExchange, ExchangeType, IoConfigItem, SaveDataExchangeRequest,
};
use contracts::shared::query::ApiResponse;
use leptos::prelude::*;

/// Values the form should show after the prefill request has been answered.
///
/// Only a `200` envelope with a record overwrites `current`.
pub fn prefill_outcome(
    current: &IoConfigItem,
    response: &ApiResponse<DataExchange>,
) -> Result<IoConfigItem, String> {
    if !response.is_success() {
        return Err(response.failure_message());
    }
    match &response.result {
        Some(exchange) => Ok(current.merged_with(exchange)),
        None => Ok(current.clone()),
    }
}

/// Load the output channel and resolve it against `current`
pub async fn load_output(current: IoConfigItem) -> Result<IoConfigItem, String> {
    match api::get_data_exchange(ExchangeType::Producer).await {
        Ok(response) => prefill_outcome(&current, &response),
        Err(e) => Err(e.to_string()),
    }
}

/// ViewModel for the alarm output dialog
///
/// Field signals bind straight to the inputs; `id` is carried but never shown.
#[derive(Clone, Copy)]
pub struct OutputSaveViewModel {
    pub id: RwSignal<Option<String>>,
    pub address: RwSignal<String>,
    pub topic: RwSignal<String>,
    pub state: RwSignal<bool>,
    pub prefill: RwSignal<LoadState<IoConfigItem>>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
}

impl OutputSaveViewModel {
    pub fn new() -> Self {
        Self {
            id: RwSignal::new(None),
            address: RwSignal::new(String::new()),
            topic: RwSignal::new(String::new()),
            state: RwSignal::new(false),
            prefill: RwSignal::new(LoadState::Idle),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
        }
    }

    pub fn item(&self) -> IoConfigItem {
        IoConfigItem {
            id: self.id.get_untracked(),
            address: self.address.get_untracked(),
            topic: self.topic.get_untracked(),
            state: self.state.get_untracked(),
        }
    }

    fn apply(&self, item: IoConfigItem) {
        self.id.set(item.id);
        self.address.set(item.address);
        self.topic.set(item.topic);
        self.state.set(item.state);
    }

    /// Inputs would be overwritten by the prefill, so they wait for it
    pub fn inputs_locked(&self) -> bool {
        self.prefill.with(|p| p.is_loading())
    }

    /// Сохранение недоступно, пока идёт загрузка или отправка
    pub fn can_save(&self) -> bool {
        !self.inputs_locked() && !self.saving.get()
    }

    pub fn prefill_command(&self) {
        let vm = *self;
        self.prefill.update(|p| p.begin());
        let current = self.item();
        wasm_bindgen_futures::spawn_local(async move {
            let outcome = load_output(current).await;
            if let Err(e) = &outcome {
                log::warn!("Alarm output prefill failed: {}", e);
            }
            let accepted = vm
                .prefill
                .try_update(|p| p.resolve(outcome.clone()))
                .unwrap_or(false);
            if let (true, Ok(values)) = (accepted, outcome) {
                vm.apply(values);
            }
        });
    }

    pub fn save_command(&self, notices: NoticeService, on_saved: Callback<()>) {
        if !self.can_save() {
            return;
        }
        let item = self.item();
        if let Err(e) = item.validate() {
            self.error.set(Some(e.to_string()));
            return;
        }
        self.error.set(None);
        self.saving.set(true);

        let request = SaveDataExchangeRequest::kafka_consume(item);
        let error = self.error;
        let saving = self.saving;
        wasm_bindgen_futures::spawn_local(async move {
            let result = api::save_output_data(&request).await;
            saving.set(false);
            match result {
                Ok(response) if response.is_success() => {
                    notices.success("Alarm output saved");
                    on_saved.run(());
                }
                Ok(response) => {
                    let message = response.failure_message();
                    log::warn!("Alarm output save rejected: {}", message);
                    notices.error(message.clone());
                    error.set(Some(message));
                }
                Err(e) => {
                    log::error!("Alarm output save failed: {}", e);
                    notices.error(e.to_string());
                    error.set(Some(e.to_string()));
                }
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api_utils::parse_envelope;
    use serde_json::json;

    fn loaded(state: &str) -> ApiResponse<DataExchange> {
        let exchange = serde_json::from_value(json!({
            "id": "dx-1",
            "sourceType": "kafka",
            "exchangeType": "producer",
            "config": {
                "sourceType": "kafka",
                "config": {"address": "broker:9092", "topic": "alarms"}
            },
            "state": {"value": state}
        }))
        .unwrap();
        ApiResponse {
            status: 200,
            result: Some(exchange),
            message: None,
        }
    }

    #[test]
    fn test_success_overwrites_form_values() {
        let values = prefill_outcome(&IoConfigItem::default(), &loaded("enabled")).unwrap();
        assert_eq!(values.id.as_deref(), Some("dx-1"));
        assert_eq!(values.address, "broker:9092");
        assert_eq!(values.topic, "alarms");
        assert!(values.state);
    }

    #[test]
    fn test_state_follows_enabled_value_only() {
        let values = prefill_outcome(&IoConfigItem::default(), &loaded("disabled")).unwrap();
        assert!(!values.state);
    }

    #[test]
    fn test_minimal_load_body_prefills_form() {
        let body = r#"{"status":200,"result":{"id":"dx-1","config":{"config":{"address":"b:9092","topic":"alarms"}},"state":{"value":"enabled"}}}"#;
        let response: ApiResponse<DataExchange> = parse_envelope(200, body).unwrap();
        let values = prefill_outcome(&IoConfigItem::default(), &response).unwrap();
        assert_eq!(values.id.as_deref(), Some("dx-1"));
        assert_eq!(values.address, "b:9092");
        assert!(values.state);

        let body = r#"{"status":200,"result":{"id":"dx-1","sourceType":"rabbitmq","state":{"value":"disabled"}}}"#;
        let response: ApiResponse<DataExchange> = parse_envelope(200, body).unwrap();
        let values = prefill_outcome(&IoConfigItem::default(), &response).unwrap();
        assert!(!values.state);
    }

    #[test]
    fn test_inputs_locked_while_prefill_loads() {
        Owner::new().with(|| {
            let vm = OutputSaveViewModel::new();
            assert!(!vm.inputs_locked());
            vm.prefill.update(|p| p.begin());
            assert!(vm.inputs_locked());
            assert!(!vm.can_save());
            vm.prefill.update(|p| {
                p.resolve(Err("timeout".to_string()));
            });
            assert!(!vm.inputs_locked());
            assert!(vm.can_save());
        });
    }

    #[test]
    fn test_non_success_keeps_current_values() {
        let response: ApiResponse<DataExchange> =
            ApiResponse::failed(500, Some("broker down".into()));
        assert_eq!(
            prefill_outcome(&IoConfigItem::default(), &response),
            Err("broker down".to_string())
        );
    }

    #[test]
    fn test_empty_result_keeps_current_values() {
        let current = IoConfigItem {
            topic: "draft".into(),
            ..Default::default()
        };
        let response: ApiResponse<DataExchange> = ApiResponse {
            status: 200,
            result: None,
            message: None,
        };
        assert_eq!(prefill_outcome(&current, &response), Ok(current));
    }
}
