use crate::domain::a001_firmware::api;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::date_utils::format_local;
use crate::shared::icons::icon;
use crate::shared::menu::{menu_path, MenuCode};
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};
use contracts::domain::a001_firmware::UpgradeTask;
use contracts::shared::query::{QueryParams, SortSpec, Term, DEFAULT_PAGE_SIZE};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;
use thaw::*;

/// Query for one page of tasks. A real firmware id narrows the list;
/// the route placeholder (`:id`) or a blank id lists everything.
pub fn task_query(page: usize, page_size: usize, firmware_id: Option<&str>) -> QueryParams {
    let terms = firmware_id
        .map(str::trim)
        .filter(|id| !id.is_empty() && !id.starts_with(':'))
        .map(|id| vec![Term::eq("firmwareId", id)])
        .unwrap_or_default();
    QueryParams::page(page, page_size)
        .with_sort(SortSpec::desc("createTime"))
        .with_terms(terms)
}

#[component]
pub fn UpgradeTaskList() -> impl IntoView {
    let params = use_params_map();
    let (items, set_items) = signal::<Vec<UpgradeTask>>(Vec::new());
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);
    let page = RwSignal::new(0usize);
    let page_size = RwSignal::new(DEFAULT_PAGE_SIZE);
    let (total_count, set_total_count) = signal(0u64);
    let (total_pages, set_total_pages) = signal(0usize);

    let load_tasks = move || {
        let firmware_id = params.with_untracked(|p| p.get("id"));
        let query = task_query(
            page.get_untracked(),
            page_size.get_untracked(),
            firmware_id.as_deref(),
        );
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::query_upgrade_tasks(&query).await {
                Ok(response) if response.is_success() => {
                    let result = response.result.unwrap_or_default();
                    set_total_count.set(result.total);
                    set_total_pages.set(result.total_pages());
                    set_items.set(result.data);
                }
                Ok(response) => set_error.set(Some(response.failure_message())),
                Err(e) => {
                    log::error!("Upgrade task query failed: {}", e);
                    set_error.set(Some(e.to_string()));
                }
            }
            set_loading.set(false);
        });
    };

    Effect::new(move |_| {
        params.track();
        load_tasks();
    });

    view! {
        <PageFrame page_id="a001_firmware_task--list" category=PAGE_CAT_LIST>
            <PageHeader title=MenuCode::FirmwareTask.title()>
                <Space>
                    <A href=menu_path(MenuCode::Firmware) attr:class="button button--secondary">
                        {icon("arrow-left")}
                        " Firmware"
                    </A>
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| load_tasks() disabled=loading>
                        {icon("refresh")}
                        " Refresh"
                    </Button>
                </Space>
            </PageHeader>

            {move || error.get().map(|err| view! {
                <MessageBar intent=MessageBarIntent::Error>{err}</MessageBar>
            })}

            <Table>
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell attr:style="width: 200px;">"Name"</TableHeaderCell>
                        <TableHeaderCell attr:style="width: 140px;">"Mode"</TableHeaderCell>
                        <TableHeaderCell attr:style="width: 120px;">"Timeout, s"</TableHeaderCell>
                        <TableHeaderCell attr:style="width: 170px;">"Created"</TableHeaderCell>
                        <TableHeaderCell>"Description"</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {move || {
                        if loading.get() {
                            view! {
                                <TableRow>
                                    <TableCell attr:colspan="5" attr:style="padding: 32px; text-align: center;">
                                        <Flex justify=FlexJustify::Center gap=FlexGap::Small>
                                            <Spinner />
                                            "Loading..."
                                        </Flex>
                                    </TableCell>
                                </TableRow>
                            }.into_any()
                        } else {
                            let tasks = items.get();
                            if tasks.is_empty() {
                                view! {
                                    <TableRow>
                                        <TableCell attr:colspan="5" attr:style="padding: 32px; text-align: center;">
                                            "No upgrade tasks"
                                        </TableCell>
                                    </TableRow>
                                }.into_any()
                            } else {
                                tasks.into_iter().map(|task| {
                                    let mode = task
                                        .mode
                                        .as_ref()
                                        .map(|m| m.display().to_string())
                                        .unwrap_or_else(|| "-".to_string());
                                    view! {
                                        <TableRow>
                                            <TableCell>{task.name.clone()}</TableCell>
                                            <TableCell>{mode}</TableCell>
                                            <TableCell>
                                                {task.timeout_seconds.map(|t| t.to_string()).unwrap_or_else(|| "-".to_string())}
                                            </TableCell>
                                            <TableCell>{format_local(task.create_time)}</TableCell>
                                            <TableCell>{task.description.clone().unwrap_or_else(|| "-".to_string())}</TableCell>
                                        </TableRow>
                                    }
                                }).collect_view().into_any()
                            }
                        }
                    }}
                </TableBody>
            </Table>

            <PaginationControls
                current_page=page
                total_pages=total_pages
                total_count=total_count
                page_size=page_size
                on_page_change=Callback::new(move |p: usize| {
                    page.set(p);
                    load_tasks();
                })
                on_page_size_change=Callback::new(move |size: usize| {
                    page_size.set(size.max(1));
                    page.set(0);
                    load_tasks();
                })
                disabled=loading
            />
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::query::SortOrder;

    #[test]
    fn test_placeholder_id_lists_all_tasks() {
        let query = task_query(0, 10, Some(":id"));
        assert!(query.terms.is_empty());
        assert_eq!(query.sorts[0].name, "createTime");
        assert_eq!(query.sorts[0].order, SortOrder::Desc);
        assert!(task_query(0, 10, None).terms.is_empty());
    }

    #[test]
    fn test_firmware_id_narrows_tasks() {
        let query = task_query(1, 20, Some("fw-1"));
        assert_eq!(query.page_index, 1);
        assert_eq!(query.terms, vec![Term::eq("firmwareId", "fw-1")]);
    }
}
