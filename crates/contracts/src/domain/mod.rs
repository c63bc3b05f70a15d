pub mod a001_firmware;
pub mod a002_alarm_config;
