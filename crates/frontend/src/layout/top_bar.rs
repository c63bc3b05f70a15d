use crate::shared::icons::icon;
use leptos::prelude::*;

/// Application top bar with the navigation toggle
#[component]
pub fn TopBar(sidebar_open: RwSignal<bool>) -> impl IntoView {
    view! {
        <div class="top-header">
            <button
                class="top-header__icon-btn"
                on:click=move |_| sidebar_open.update(|open| *open = !*open)
                title=move || if sidebar_open.get() { "Hide navigation" } else { "Show navigation" }
            >
                {icon("list")}
            </button>
            <div class="top-header__brand">
                <span class="top-header__title">"Device Console"</span>
            </div>
        </div>
    }
}
