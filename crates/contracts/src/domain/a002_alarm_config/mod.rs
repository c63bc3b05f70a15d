pub mod data_exchange;

pub use data_exchange::{
    DataExchange, ExchangeConfig, ExchangeType, IoConfigItem, LoadedExchangeConfig,
    SaveDataExchangeRequest, SourceType,
};
