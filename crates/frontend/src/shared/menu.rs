//! Menu codes and the routes they resolve to

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCode {
    Firmware,
    FirmwareDetail,
    FirmwareTask,
    AlarmConfig,
}

impl MenuCode {
    /// Top-level entries of the side navigation
    pub const NAVIGATION: [MenuCode; 2] = [MenuCode::Firmware, MenuCode::AlarmConfig];

    pub fn code(&self) -> &'static str {
        match self {
            MenuCode::Firmware => "device/Firmware",
            MenuCode::FirmwareDetail => "device/Firmware/Detail",
            MenuCode::FirmwareTask => "device/Firmware/Task",
            MenuCode::AlarmConfig => "rule-engine/Alarm/Config",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            MenuCode::Firmware => "Firmware",
            MenuCode::FirmwareDetail => "Firmware details",
            MenuCode::FirmwareTask => "Upgrade tasks",
            MenuCode::AlarmConfig => "Alarm configuration",
        }
    }

    /// Route template; `:id` marks the single parameter
    pub fn path_template(&self) -> &'static str {
        match self {
            MenuCode::Firmware => "/device/firmware",
            MenuCode::FirmwareDetail => "/device/firmware/detail/:id",
            MenuCode::FirmwareTask => "/device/firmware/task/:id",
            MenuCode::AlarmConfig => "/rule-engine/alarm/config",
        }
    }
}

/// Path of a parameterless menu entry
pub fn menu_path(code: MenuCode) -> String {
    code.path_template().to_string()
}

/// Path of a menu entry with its `:id` filled in (percent-encoded)
pub fn menu_path_by_params(code: MenuCode, id: &str) -> String {
    code.path_template()
        .replace(":id", &urlencoding::encode(id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_path_by_params() {
        assert_eq!(
            menu_path_by_params(MenuCode::FirmwareDetail, "fw-1"),
            "/device/firmware/detail/fw-1"
        );
        assert_eq!(
            menu_path_by_params(MenuCode::FirmwareTask, "a b"),
            "/device/firmware/task/a%20b"
        );
        assert_eq!(menu_path(MenuCode::AlarmConfig), "/rule-engine/alarm/config");
    }
}
