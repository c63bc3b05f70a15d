use crate::routes::routes::AppRoutes;
use crate::shared::notice::{NoticeHost, NoticeService};
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn App() -> impl IntoView {
    // Success/error notices for every page
    provide_context(NoticeService::new());

    view! {
        <ConfigProvider>
            <AppRoutes />
            <NoticeHost />
        </ConfigProvider>
    }
}
