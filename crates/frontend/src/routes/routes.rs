use crate::domain::a001_firmware::ui::detail::FirmwareDetailPage;
use crate::domain::a001_firmware::ui::list::FirmwareList;
use crate::domain::a001_firmware::ui::tasks::UpgradeTaskList;
use crate::domain::a002_alarm_config::ui::page::AlarmConfigPage;
use crate::layout::Shell;
use crate::shared::menu::{menu_path, MenuCode};
use leptos::prelude::*;
use leptos_router::components::{Redirect, Route, Router, Routes};
use leptos_router::path;

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="page">
            <h2>"Page not found"</h2>
        </div>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Shell>
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route
                        path=path!("/")
                        view=|| view! { <Redirect path=menu_path(MenuCode::Firmware) /> }
                    />
                    <Route path=path!("/device/firmware") view=FirmwareList />
                    <Route path=path!("/device/firmware/detail/:id") view=FirmwareDetailPage />
                    <Route path=path!("/device/firmware/task/:id") view=UpgradeTaskList />
                    <Route path=path!("/rule-engine/alarm/config") view=AlarmConfigPage />
                </Routes>
            </Shell>
        </Router>
    }
}

#[cfg(test)]
mod tests {
    use crate::shared::menu::MenuCode;

    // Route literals above must stay in sync with the menu templates
    #[test]
    fn test_menu_templates_match_routes() {
        assert_eq!(MenuCode::Firmware.path_template(), "/device/firmware");
        assert_eq!(
            MenuCode::FirmwareDetail.path_template(),
            "/device/firmware/detail/:id"
        );
        assert_eq!(
            MenuCode::FirmwareTask.path_template(),
            "/device/firmware/task/:id"
        );
        assert_eq!(
            MenuCode::AlarmConfig.path_template(),
            "/rule-engine/alarm/config"
        );
    }
}
