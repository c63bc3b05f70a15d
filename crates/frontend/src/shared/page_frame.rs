//! PageFrame: root wrapper of every routed page.
//!
//! Guarantees two metadata attributes on the root DOM element:
//!   - `id`: `"{entity}--{category}"`, e.g. `"a001_firmware--list"`
//!   - `data-page-category`: one of the PAGE_CAT_* constants

use leptos::prelude::*;

pub const PAGE_CAT_LIST: &str = "list";
pub const PAGE_CAT_DETAIL: &str = "detail";
pub const PAGE_CAT_SETTINGS: &str = "settings";

#[component]
pub fn PageFrame(
    /// HTML id in format `{entity}--{category}`
    page_id: &'static str,
    /// One of the PAGE_CAT_* constants
    category: &'static str,
    children: Children,
) -> impl IntoView {
    let class = match category {
        PAGE_CAT_DETAIL => "page page--detail",
        PAGE_CAT_SETTINGS => "page page--settings",
        _ => "page",
    };

    view! {
        <div id=page_id class=class data-page-category=category>
            {children()}
        </div>
    }
}
