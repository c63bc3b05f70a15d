use super::view_model::OutputSaveViewModel;
use crate::shared::icons::icon;
use crate::shared::load_state::LoadState;
use crate::shared::modal::Modal;
use crate::shared::notice::use_notices;
use leptos::prelude::*;
use thaw::*;

/// Dialog editing the Kafka channel alarms are published to
#[component]
pub fn OutputSave(on_saved: Callback<()>, on_close: Callback<()>) -> impl IntoView {
    let vm = OutputSaveViewModel::new();
    let notices = use_notices();
    vm.prefill_command();

    view! {
        <Modal
            title="Alarm output"
            width="480px"
            on_close=Callback::new(move |_| {
                // Ответ, пришедший после закрытия, уже не применяется
                vm.prefill.update(|p| p.reset());
                on_close.run(());
            })
            action_buttons=move || view! {
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| vm.save_command(notices, on_saved)
                    disabled=Signal::derive(move || !vm.can_save())
                >
                    {icon("save")}
                    {move || if vm.saving.get() { " Saving..." } else { " Save" }}
                </Button>
            }
        >
            {move || vm.prefill.with(|p| match p {
                LoadState::Loading => Some(view! {
                    <Flex justify=FlexJustify::Center gap=FlexGap::Small>
                        <Spinner />
                        "Loading current settings..."
                    </Flex>
                }.into_any()),
                LoadState::Failed(message) => Some(view! {
                    <MessageBar intent=MessageBarIntent::Warning>
                        {format!("Current settings unavailable: {}", message)}
                    </MessageBar>
                }.into_any()),
                _ => None,
            })}

            {move || vm.error.get().map(|e| view! {
                <MessageBar intent=MessageBarIntent::Error>{e}</MessageBar>
            })}

            // Поля заблокированы, пока подгружаются текущие настройки
            <fieldset class="detail-form" disabled=move || vm.inputs_locked()>
                <div class="form__group">
                    <label class="form__label">"Kafka address *"</label>
                    <Input value=vm.address placeholder="host:port" />
                </div>
                <div class="form__group">
                    <label class="form__label">"Topic *"</label>
                    <Input value=vm.topic placeholder="Topic alarms are written to" />
                </div>
                <div class="form__group">
                    <Switch checked=vm.state label="Enabled" />
                </div>
            </fieldset>
        </Modal>
    }
}
