use super::output::{load_output, OutputSave};
use crate::shared::components::page_header::PageHeader;
use crate::shared::icons::icon;
use crate::shared::load_state::LoadState;
use crate::shared::menu::MenuCode;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_SETTINGS};
use contracts::domain::a002_alarm_config::IoConfigItem;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

fn or_dash(value: &str) -> String {
    if value.trim().is_empty() {
        "-".to_string()
    } else {
        value.to_string()
    }
}

/// Alarm configuration: current output channel and its edit dialog
#[component]
pub fn AlarmConfigPage() -> impl IntoView {
    let summary = RwSignal::new(LoadState::<IoConfigItem>::Idle);
    let (show_output, set_show_output) = signal(false);

    let load_summary = move || {
        summary.update(|s| s.begin());
        spawn_local(async move {
            let outcome = load_output(IoConfigItem::default()).await;
            summary.update(|s| {
                s.resolve(outcome);
            });
        });
    };

    // Загрузка при монтировании
    Effect::new(move |_| load_summary());

    view! {
        <PageFrame page_id="a002_alarm_config--settings" category=PAGE_CAT_SETTINGS>
            <PageHeader title=MenuCode::AlarmConfig.title()>
                <Space>
                    <Button appearance=ButtonAppearance::Primary on_click=move |_| set_show_output.set(true)>
                        {icon("edit")}
                        " Configure output"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| load_summary()
                        disabled=Signal::derive(move || summary.with(|s| s.is_loading()))
                    >
                        {icon("refresh")}
                        " Refresh"
                    </Button>
                </Space>
            </PageHeader>

            <div class="settings-card">
                <h3 class="settings-card__title">{icon("bell")} " Alarm output (Kafka)"</h3>
                {move || match summary.get() {
                    LoadState::Idle | LoadState::Loading => view! {
                        <Flex gap=FlexGap::Small>
                            <Spinner />
                            "Loading..."
                        </Flex>
                    }.into_any(),
                    LoadState::Failed(message) => view! {
                        <MessageBar intent=MessageBarIntent::Warning>{message}</MessageBar>
                    }.into_any(),
                    LoadState::Populated(item) => {
                        let badge = if item.state {
                            view! { <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Success>"Enabled"</Badge> }.into_any()
                        } else {
                            view! { <Badge appearance=BadgeAppearance::Tint>"Disabled"</Badge> }.into_any()
                        };
                        view! {
                            <dl class="detail-grid">
                                <dt class="detail-grid__label">"Address"</dt>
                                <dd class="detail-grid__value">{or_dash(&item.address)}</dd>
                                <dt class="detail-grid__label">"Topic"</dt>
                                <dd class="detail-grid__value">{or_dash(&item.topic)}</dd>
                                <dt class="detail-grid__label">"State"</dt>
                                <dd class="detail-grid__value">{badge}</dd>
                            </dl>
                        }.into_any()
                    }
                }}
            </div>

            <Show when=move || show_output.get()>
                <OutputSave
                    on_saved=Callback::new(move |_| {
                        set_show_output.set(false);
                        load_summary();
                    })
                    on_close=Callback::new(move |_| set_show_output.set(false))
                />
            </Show>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_blank_values_show_dash() {
        let item = IoConfigItem {
            address: "b:9092".into(),
            topic: "  ".into(),
            ..Default::default()
        };
        assert_eq!(or_dash(&item.address), "b:9092");
        assert_eq!(or_dash(&item.topic), "-");
    }
}
