//! Side navigation over the top-level menu entries

use crate::shared::icons::icon;
use crate::shared::menu::{menu_path, MenuCode};
use leptos::prelude::*;
use leptos_router::components::A;

fn menu_icon(code: MenuCode) -> &'static str {
    match code {
        MenuCode::AlarmConfig => "bell",
        _ => "firmware",
    }
}

#[component]
pub fn Sidebar() -> impl IntoView {
    view! {
        <nav class="sidebar">
            <ul class="sidebar__list">
                {MenuCode::NAVIGATION
                    .into_iter()
                    .map(|code| view! {
                        <li class="sidebar__item" data-menu-code=code.code()>
                            <A href=menu_path(code) attr:class="sidebar__link">
                                {icon(menu_icon(code))}
                                <span class="sidebar__label">{code.title()}</span>
                            </A>
                        </li>
                    })
                    .collect_view()}
            </ul>
        </nav>
    }
}
