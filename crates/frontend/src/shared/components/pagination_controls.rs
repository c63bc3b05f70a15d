use crate::shared::icons::icon;
use leptos::prelude::*;

/// Page navigation for server-paged tables (pages are 0-indexed)
#[component]
pub fn PaginationControls(
    /// Current page (0-indexed)
    #[prop(into)]
    current_page: Signal<usize>,

    /// Total number of pages
    #[prop(into)]
    total_pages: Signal<usize>,

    /// Total count of items
    #[prop(into)]
    total_count: Signal<u64>,

    /// Current page size
    #[prop(into)]
    page_size: Signal<usize>,

    /// Callback when page changes
    on_page_change: Callback<usize>,

    /// Callback when page size changes
    on_page_size_change: Callback<usize>,

    /// Available page size options (optional, defaults to [10, 20, 50, 100])
    #[prop(optional)]
    page_size_options: Option<Vec<usize>>,

    /// Disable navigation while a request is in flight
    #[prop(optional, into)]
    disabled: Signal<bool>,
) -> impl IntoView {
    let page_size_opts = page_size_options.unwrap_or_else(|| vec![10, 20, 50, 100]);
    let default_size = page_size_opts.first().copied().unwrap_or(10);
    let on_last_page = move || current_page.get() + 1 >= total_pages.get();

    view! {
        <div class="pagination-controls">
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(0)
                disabled=move || current_page.get() == 0 || disabled.get()
                title="First page"
            >
                {icon("chevrons-left")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let page = current_page.get();
                    if page > 0 {
                        on_page_change.run(page - 1);
                    }
                }
                disabled=move || current_page.get() == 0 || disabled.get()
                title="Previous page"
            >
                {icon("chevron-left")}
            </button>
            <span class="pagination-info">
                {move || {
                    let page = current_page.get();
                    let total = total_pages.get().max(1);
                    let count = total_count.get();
                    format!("{} / {} ({})", page + 1, total, count)
                }}
            </span>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    if !on_last_page() {
                        on_page_change.run(current_page.get() + 1);
                    }
                }
                disabled=move || on_last_page() || disabled.get()
                title="Next page"
            >
                {icon("chevron-right")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let total = total_pages.get();
                    if total > 0 {
                        on_page_change.run(total - 1);
                    }
                }
                disabled=move || on_last_page() || disabled.get()
                title="Last page"
            >
                {icon("chevrons-right")}
            </button>
            <select
                class="page-size-select"
                on:change=move |ev| {
                    let val = event_target_value(&ev).parse().unwrap_or(default_size);
                    on_page_size_change.run(val);
                }
                prop:value=move || page_size.get().to_string()
            >
                {page_size_opts.iter().map(|&size| {
                    view! {
                        <option value={size.to_string()} selected=move || page_size.get() == size>
                            {size.to_string()}
                        </option>
                    }
                }).collect_view()}
            </select>
        </div>
    }
}
