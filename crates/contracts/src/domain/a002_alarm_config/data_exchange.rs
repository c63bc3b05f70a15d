use crate::shared::enum_value::EnumValue;
use crate::shared::validation::{require_text, FieldError};
use serde::{Deserialize, Serialize};

/// Значение `state.value` включённого канала
pub const STATE_ENABLED: &str = "enabled";

/// Transport behind an alarm data-exchange channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceType {
    Kafka,
}

/// Direction tag of a data-exchange channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExchangeType {
    Producer,
    Consume,
}

impl ExchangeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExchangeType::Producer => "producer",
            ExchangeType::Consume => "consume",
        }
    }
}

/// Output channel settings as edited in the form
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IoConfigItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub topic: String,
    #[serde(default)]
    pub state: bool,
}

impl IoConfigItem {
    pub fn validate(&self) -> Result<(), FieldError> {
        require_text(&self.address, "address", "Kafka address")?;
        require_text(&self.topic, "topic", "Topic")?;
        Ok(())
    }

    /// Overlay a loaded exchange on top of the current values.
    ///
    /// Values from `config.config` replace the current ones, `id` comes from the
    /// exchange record and `state` is true only for an `enabled` channel.
    pub fn merged_with(&self, exchange: &DataExchange) -> IoConfigItem {
        let mut merged = exchange
            .config
            .as_ref()
            .and_then(|c| c.config.clone())
            .unwrap_or_else(|| self.clone());
        merged.id = exchange.id.clone().or_else(|| self.id.clone());
        merged.state = exchange.is_enabled();
        merged
    }
}

/// `config` part of the save envelope
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExchangeConfig {
    pub source_type: SourceType,
    #[serde(default)]
    pub config: Option<IoConfigItem>,
}

/// `config` part of a loaded record. Tags are kept as sent; the server may
/// omit them or use transports the console does not edit.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadedExchangeConfig {
    #[serde(default)]
    pub source_type: Option<String>,
    #[serde(default)]
    pub config: Option<IoConfigItem>,
}

/// Data-exchange record returned by the `_load` endpoint.
///
/// Only `id`, `config.config` and `state.value` are relied on.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataExchange {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub source_type: Option<String>,
    #[serde(default)]
    pub exchange_type: Option<String>,
    #[serde(default)]
    pub config: Option<LoadedExchangeConfig>,
    #[serde(default)]
    pub state: Option<EnumValue>,
}

impl DataExchange {
    pub fn is_enabled(&self) -> bool {
        self.state
            .as_ref()
            .map(|s| s.value == STATE_ENABLED)
            .unwrap_or(false)
    }
}

/// Body of the data-exchange save endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveDataExchangeRequest {
    pub config: ExchangeConfig,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub source_type: SourceType,
    pub exchange_type: ExchangeType,
}

impl SaveDataExchangeRequest {
    /// Envelope of the alarm output channel. Tags are fixed to `kafka`/`consume`
    /// whatever the form holds.
    pub fn kafka_consume(item: IoConfigItem) -> Self {
        Self {
            id: item.id.clone(),
            config: ExchangeConfig {
                source_type: SourceType::Kafka,
                config: Some(item),
            },
            source_type: SourceType::Kafka,
            exchange_type: ExchangeType::Consume,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn exchange(state: &str) -> DataExchange {
        serde_json::from_value(json!({
            "id": "ex-1",
            "config": {
                "sourceType": "kafka",
                "config": {"address": "10.0.0.5:9092", "topic": "alarms"}
            },
            "state": {"value": state, "text": "?"}
        }))
        .unwrap()
    }

    #[test]
    fn test_merge_takes_loaded_values_and_id() {
        let initial = IoConfigItem {
            id: None,
            address: "old:9092".into(),
            topic: "old".into(),
            state: true,
        };
        let merged = initial.merged_with(&exchange("enabled"));
        assert_eq!(merged.id.as_deref(), Some("ex-1"));
        assert_eq!(merged.address, "10.0.0.5:9092");
        assert_eq!(merged.topic, "alarms");
        assert!(merged.state);
    }

    #[test]
    fn test_state_true_only_when_enabled() {
        let initial = IoConfigItem::default();
        assert!(initial.merged_with(&exchange("enabled")).state);
        assert!(!initial.merged_with(&exchange("disabled")).state);
        assert!(!initial.merged_with(&exchange("Enabled")).state);

        let mut no_state = exchange("enabled");
        no_state.state = None;
        assert!(!initial.merged_with(&no_state).state);
    }

    #[test]
    fn test_merge_keeps_initial_values_without_config() {
        let initial = IoConfigItem {
            id: Some("local".into()),
            address: "a:1".into(),
            topic: "t".into(),
            state: false,
        };
        let bare: DataExchange = serde_json::from_value(json!({"state": {"value": "enabled"}})).unwrap();
        let merged = initial.merged_with(&bare);
        assert_eq!(merged.address, "a:1");
        assert_eq!(merged.id.as_deref(), Some("local"));
        assert!(merged.state);
    }

    #[test]
    fn test_load_record_without_tags() {
        let exchange: DataExchange = serde_json::from_value(json!({
            "id": "dx-1",
            "config": {"config": {"address": "b:9092", "topic": "alarms"}},
            "state": {"value": "enabled"}
        }))
        .unwrap();
        let merged = IoConfigItem::default().merged_with(&exchange);
        assert_eq!(merged.id.as_deref(), Some("dx-1"));
        assert_eq!(merged.address, "b:9092");
        assert_eq!(merged.topic, "alarms");
        assert!(merged.state);
    }

    #[test]
    fn test_load_record_with_foreign_tags() {
        let exchange: DataExchange = serde_json::from_value(json!({
            "id": "dx-2",
            "sourceType": "rabbitmq",
            "exchangeType": "publisher",
            "config": {"sourceType": "rabbitmq", "config": {"address": "mq:5672", "topic": "a"}},
            "state": {"value": "disabled", "text": "Disabled"}
        }))
        .unwrap();
        assert_eq!(exchange.source_type.as_deref(), Some("rabbitmq"));
        assert!(!exchange.is_enabled());
    }

    #[test]
    fn test_save_envelope_tags_are_fixed() {
        let item = IoConfigItem {
            id: Some("ex-1".into()),
            address: "10.0.0.5:9092".into(),
            topic: "alarms".into(),
            state: true,
        };
        let value = serde_json::to_value(SaveDataExchangeRequest::kafka_consume(item)).unwrap();
        assert_eq!(
            value,
            json!({
                "config": {
                    "sourceType": "kafka",
                    "config": {"id": "ex-1", "address": "10.0.0.5:9092", "topic": "alarms", "state": true}
                },
                "id": "ex-1",
                "sourceType": "kafka",
                "exchangeType": "consume"
            })
        );
    }

    #[test]
    fn test_validate_address_before_topic() {
        let item = IoConfigItem::default();
        assert_eq!(item.validate().unwrap_err().field, "address");
        let item = IoConfigItem {
            address: "x:1".into(),
            ..IoConfigItem::default()
        };
        assert_eq!(item.validate().unwrap_err().field, "topic");
    }
}
