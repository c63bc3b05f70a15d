use crate::domain::a001_firmware::api;
use crate::shared::components::page_header::PageHeader;
use crate::shared::date_utils::format_local;
use crate::shared::icons::icon;
use crate::shared::load_state::LoadState;
use crate::shared::menu::{menu_path, MenuCode};
use crate::shared::page_frame::{PageFrame, PAGE_CAT_DETAIL};
use contracts::domain::a001_firmware::FirmwareItem;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;
use thaw::*;

fn or_dash(value: &str) -> String {
    if value.trim().is_empty() {
        "-".to_string()
    } else {
        value.to_string()
    }
}

/// Label/value pairs shown on the detail page, in display order
pub fn detail_rows(item: &FirmwareItem) -> Vec<(&'static str, String)> {
    vec![
        ("ID", item.id.clone()),
        ("Name", or_dash(&item.name)),
        ("Product", or_dash(&item.product_name)),
        ("Version", or_dash(&item.version)),
        (
            "Version order",
            item.version_order
                .map(|v| v.to_string())
                .unwrap_or_else(|| "-".to_string()),
        ),
        (
            "Sign method",
            item.sign_method
                .map(|m| m.label().to_string())
                .unwrap_or_else(|| "-".to_string()),
        ),
        ("Signature", or_dash(&item.sign)),
        ("File", or_dash(&item.url)),
        (
            "Size, bytes",
            item.size.map(|s| s.to_string()).unwrap_or_else(|| "-".to_string()),
        ),
        ("Created", format_local(item.create_time)),
        (
            "Description",
            or_dash(item.description.as_deref().unwrap_or_default()),
        ),
    ]
}

#[component]
pub fn FirmwareDetailPage() -> impl IntoView {
    let params = use_params_map();
    let record = RwSignal::new(LoadState::<FirmwareItem>::Idle);

    Effect::new(move |_| {
        let Some(id) = params.read().get("id") else {
            record.set(LoadState::Failed("Firmware id is missing".to_string()));
            return;
        };
        record.update(|r| r.begin());
        spawn_local(async move {
            let outcome = match api::get_firmware(&id).await {
                Ok(response) if response.is_success() => response
                    .result
                    .ok_or_else(|| format!("Firmware {} not found", id)),
                Ok(response) => Err(response.failure_message()),
                Err(e) => Err(e.to_string()),
            };
            if let Err(e) = &outcome {
                log::warn!("Failed to load firmware {}: {}", id, e);
            }
            if params.with_untracked(|p| p.get("id").as_deref() == Some(id.as_str())) {
                record.update(|r| {
                    r.resolve(outcome);
                });
            }
        });
    });

    view! {
        <PageFrame page_id="a001_firmware--detail" category=PAGE_CAT_DETAIL>
            <PageHeader title=MenuCode::FirmwareDetail.title()>
                <A href=menu_path(MenuCode::Firmware) attr:class="button button--secondary">
                    {icon("arrow-left")}
                    " Back to list"
                </A>
            </PageHeader>

            {move || match record.get() {
                LoadState::Idle | LoadState::Loading => view! {
                    <Flex justify=FlexJustify::Center gap=FlexGap::Small>
                        <Spinner />
                        "Loading..."
                    </Flex>
                }
                .into_any(),
                LoadState::Failed(message) => view! {
                    <MessageBar intent=MessageBarIntent::Error>{message}</MessageBar>
                }
                .into_any(),
                LoadState::Populated(item) => view! {
                    <dl class="detail-grid">
                        {detail_rows(&item)
                            .into_iter()
                            .map(|(label, value)| view! {
                                <dt class="detail-grid__label">{label}</dt>
                                <dd class="detail-grid__value">{value}</dd>
                            })
                            .collect_view()}
                    </dl>
                }
                .into_any(),
            }}
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_rows_fill_blanks_with_dash() {
        let item: FirmwareItem =
            serde_json::from_value(serde_json::json!({"id": "fw-1", "name": "Boot", "size": 2048}))
                .unwrap();
        let rows = detail_rows(&item);
        let lookup = |label: &str| rows.iter().find(|(l, _)| *l == label).map(|(_, v)| v.as_str());

        assert_eq!(lookup("Name"), Some("Boot"));
        assert_eq!(lookup("Size, bytes"), Some("2048"));
        assert_eq!(lookup("Product"), Some("-"));
        assert_eq!(lookup("Created"), Some("-"));
        assert_eq!(lookup("Description"), Some("-"));
    }
}
