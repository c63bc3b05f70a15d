pub mod columns;
pub mod state;

use self::columns::{cell_text, search_fields, COLUMNS};
use self::state::create_state;
use crate::domain::a001_firmware::api;
use crate::domain::a001_firmware::ui::details::FirmwareSave;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::search_bar::SearchBar;
use crate::shared::icons::icon;
use crate::shared::menu::{menu_path_by_params, MenuCode};
use crate::shared::notice::use_notices;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};
use contracts::domain::a001_firmware::FirmwareItem;
use contracts::shared::query::QueryParams;
use leptos::ev;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use thaw::*;

/// Id placeholder of the task route; the task page lists every task
const TASK_ROUTE_ID: &str = ":id";

#[component]
#[allow(non_snake_case)]
pub fn FirmwareList() -> impl IntoView {
    let state = create_state();
    let notices = use_notices();
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);

    let fetch_page = move |generation: u64, params: QueryParams| {
        set_loading.set(true);
        set_error.set(None);

        spawn_local(async move {
            let result = api::query_firmware(&params).await;
            if !state.with_untracked(|s| s.is_current(generation)) {
                log::debug!("Dropping superseded firmware page #{}", generation);
                return;
            }
            set_loading.set(false);
            match result {
                Ok(response) if response.is_success() => {
                    let page = response.result.unwrap_or_default();
                    state.update(|s| {
                        s.apply_page(generation, page);
                    });
                }
                Ok(response) => {
                    let message = response.failure_message();
                    log::warn!("Firmware query rejected: {}", message);
                    set_error.set(Some(message));
                }
                Err(e) => {
                    log::error!("Firmware query failed: {}", e);
                    set_error.set(Some(e.to_string()));
                }
            }
        });
    };

    let load_firmware = move || {
        if let Some((generation, params)) = state.try_update(|s| s.begin_request()) {
            fetch_page(generation, params);
        }
    };

    // Загрузка при монтировании
    Effect::new(move |_| {
        if !state.with_untracked(|s| s.is_loaded) {
            load_firmware();
        }
    });

    let on_search = Callback::new(move |terms| {
        state.update(|s| s.apply_search(terms));
        load_firmware();
    });

    let go_to_page = Callback::new(move |page: usize| {
        state.update(|s| s.go_to_page(page));
        load_firmware();
    });

    let change_page_size = Callback::new(move |size: usize| {
        state.update(|s| s.change_page_size(size));
        load_firmware();
    });

    let remove_firmware = move |item: FirmwareItem| {
        let question = format!("Delete firmware \"{}\"?", item.name);
        let confirmed = web_sys::window()
            .and_then(|w| w.confirm_with_message(&question).ok())
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        spawn_local(async move {
            match api::remove_firmware(&item.id).await {
                Ok(response) => match state.try_update(|s| s.after_remove(&response)) {
                    Some(Ok((generation, params))) => {
                        notices.success("Firmware deleted");
                        fetch_page(generation, params);
                    }
                    Some(Err(message)) => {
                        log::warn!("Firmware {} not deleted: {}", item.id, message);
                        notices.error(message);
                    }
                    None => {}
                },
                Err(e) => {
                    log::error!("Firmware delete failed: {}", e);
                    notices.error(e.to_string());
                }
            }
        });
    };

    let rows = move || {
        let items = state.with(|s| s.items.clone());
        if items.is_empty() {
            let text = if loading.get() { "Loading..." } else { "No firmware found" };
            return view! {
                <TableRow>
                    <TableCell attr:colspan="7" attr:style="padding: 32px; text-align: center;">
                        {text}
                    </TableCell>
                </TableRow>
            }
            .into_any();
        }
        items
            .into_iter()
            .map(|item| {
                let detail_path = menu_path_by_params(MenuCode::FirmwareDetail, &item.id);
                let for_view = item.clone();
                let for_edit = item.clone();
                let for_delete = item.clone();
                let cells = COLUMNS
                    .iter()
                    .map(|c| {
                        let text = cell_text(&item, c.data_index);
                        view! { <TableCell><TableCellLayout>{text}</TableCellLayout></TableCell> }
                    })
                    .collect_view();
                view! {
                    <TableRow>
                        {cells}
                        <TableCell>
                            <Flex gap=FlexGap::Small>
                                <a
                                    class="button button--icon"
                                    href=detail_path
                                    title="View"
                                    on:click=move |_| state.update(|s| s.select(for_view.clone()))
                                >
                                    {icon("eye")}
                                </a>
                                <Button
                                    appearance=ButtonAppearance::Transparent
                                    on_click=move |_| state.update(|s| s.open_edit(for_edit.clone()))
                                    attr:title="Edit"
                                >
                                    {icon("edit")}
                                </Button>
                                <Button
                                    appearance=ButtonAppearance::Transparent
                                    on_click=move |e: ev::MouseEvent| {
                                        e.stop_propagation();
                                        remove_firmware(for_delete.clone());
                                    }
                                    attr:title="Delete"
                                >
                                    {icon("minus")}
                                </Button>
                            </Flex>
                        </TableCell>
                    </TableRow>
                }
            })
            .collect_view()
            .into_any()
    };

    view! {
        <PageFrame page_id="a001_firmware--list" category=PAGE_CAT_LIST>
            <PageHeader title=MenuCode::Firmware.title()>
                <Space>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| state.update(|s| s.open_create())
                    >
                        {icon("plus")}
                        " Create"
                    </Button>
                    <A
                        href=menu_path_by_params(MenuCode::FirmwareTask, TASK_ROUTE_ID)
                        attr:class="button button--secondary"
                    >
                        {icon("list")}
                        " Upgrade tasks"
                    </A>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| load_firmware()
                        disabled=loading
                    >
                        {icon("refresh")}
                        " Refresh"
                    </Button>
                </Space>
            </PageHeader>

            <SearchBar fields=search_fields() on_search=on_search />

            {move || error.get().map(|err| view! {
                <MessageBar intent=MessageBarIntent::Error>{err}</MessageBar>
            })}

            <Table>
                <TableHeader>
                    <TableRow>
                        {COLUMNS
                            .iter()
                            .map(|c| {
                                let style = format!("width: {};", c.width);
                                view! { <TableHeaderCell attr:style=style>{c.title}</TableHeaderCell> }
                            })
                            .collect_view()}
                        <TableHeaderCell attr:style="width: 140px;">"Actions"</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>{rows}</TableBody>
            </Table>

            <Show when=move || loading.get()>
                <Flex justify=FlexJustify::Center gap=FlexGap::Small>
                    <Spinner />
                    "Loading..."
                </Flex>
            </Show>

            <PaginationControls
                current_page=Signal::derive(move || state.with(|s| s.page))
                total_pages=Signal::derive(move || state.with(|s| s.total_pages))
                total_count=Signal::derive(move || state.with(|s| s.total_count))
                page_size=Signal::derive(move || state.with(|s| s.page_size))
                on_page_change=go_to_page
                on_page_size_change=change_page_size
                disabled=loading
            />

            <Show when=move || state.with(|s| s.save_open)>
                <FirmwareSave
                    initial=state.with_untracked(|s| s.current.clone())
                    on_saved=Callback::new(move |_| {
                        state.update(|s| s.close_save());
                        load_firmware();
                    })
                    on_close=Callback::new(move |_| state.update(|s| s.close_save()))
                />
            </Show>
        </PageFrame>
    }
}
