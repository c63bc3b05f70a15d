pub mod sidebar;
pub mod top_bar;

use leptos::prelude::*;
use sidebar::Sidebar;
use top_bar::TopBar;

/// Main application shell.
///
/// ```text
/// +------------------------------+
/// |            TopBar            |
/// +------------------------------+
/// |  Sidebar  |     Content      |
/// +------------------------------+
/// ```
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    let sidebar_open = RwSignal::new(true);

    view! {
        <div class="app-layout">
            <TopBar sidebar_open=sidebar_open />
            <div class="app-body">
                <Show when=move || sidebar_open.get()>
                    <Sidebar />
                </Show>
                <main class="app-main">
                    {children()}
                </main>
            </div>
        </div>
    }
}
