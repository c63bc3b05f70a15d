use super::view_model::FirmwareSaveViewModel;
use crate::shared::icons::icon;
use crate::shared::modal::Modal;
use crate::shared::notice::use_notices;
use contracts::domain::a001_firmware::{FirmwareItem, SignMethod};
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn FirmwareSave(
    /// Record being edited; `None` creates a new one
    initial: Option<FirmwareItem>,
    on_saved: Callback<()>,
    on_close: Callback<()>,
) -> impl IntoView {
    let vm = FirmwareSaveViewModel::new(initial.as_ref());
    let notices = use_notices();
    vm.load_products();

    let title = if vm.is_edit_mode() {
        "Edit firmware"
    } else {
        "New firmware"
    };

    let product_options = move || {
        let (selected_id, selected_name) =
            vm.form.with(|f| (f.product_id.clone(), f.product_name.clone()));
        vm.products.with(|p| {
            let list = p.value().cloned().unwrap_or_default();
            let missing = !selected_id.is_empty() && !list.iter().any(|p| p.id == selected_id);
            let mut options = vec![view! { <option value="">"Select product"</option> }.into_any()];
            if missing {
                options.push(
                    view! { <option value=selected_id.clone()>{selected_name.clone()}</option> }
                        .into_any(),
                );
            }
            options.extend(list.into_iter().map(|product| {
                view! { <option value=product.id>{product.name}</option> }.into_any()
            }));
            options
        })
    };

    view! {
        <Modal
            title=title
            on_close=on_close
            action_buttons=move || view! {
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| vm.save_command(notices, on_saved)
                    disabled=vm.saving
                >
                    {icon("save")}
                    {move || if vm.saving.get() { " Saving..." } else { " Save" }}
                </Button>
            }
        >
            {move || vm.error.get().map(|e| view! {
                <MessageBar intent=MessageBarIntent::Error>{e}</MessageBar>
            })}

            <div class="detail-form">
                <div class="form__group">
                    <label class="form__label" for="fw-name">"Firmware name *"</label>
                    <input
                        class="form__input"
                        type="text"
                        id="fw-name"
                        prop:value=move || vm.form.with(|f| f.name.clone())
                        on:input=move |ev| vm.form.update(|f| f.name = event_target_value(&ev))
                        placeholder="Enter firmware name"
                    />
                </div>

                <div class="form__group">
                    <label class="form__label" for="fw-product">"Product *"</label>
                    <select
                        class="form__select"
                        id="fw-product"
                        prop:value=move || vm.form.with(|f| f.product_id.clone())
                        on:change=move |ev| vm.select_product(event_target_value(&ev))
                        disabled=move || vm.products.with(|p| p.is_loading())
                    >
                        {product_options}
                    </select>
                    {move || vm.products.with(|p| p.error().map(|e| view! {
                        <small class="text-error">{format!("Products unavailable: {}", e)}</small>
                    }))}
                </div>

                <div class="form__group">
                    <label class="form__label" for="fw-version">"Version *"</label>
                    <input
                        class="form__input"
                        type="text"
                        id="fw-version"
                        prop:value=move || vm.form.with(|f| f.version.clone())
                        on:input=move |ev| vm.form.update(|f| f.version = event_target_value(&ev))
                        placeholder="e.g. 1.0.2"
                    />
                </div>

                <div class="form__group">
                    <label class="form__label" for="fw-version-order">"Version order *"</label>
                    <input
                        class="form__input"
                        type="number"
                        min="0"
                        id="fw-version-order"
                        prop:value=move || vm.form.with(|f| f.version_order.clone())
                        on:input=move |ev| vm.form.update(|f| f.version_order = event_target_value(&ev))
                    />
                </div>

                <div class="form__group">
                    <label class="form__label" for="fw-sign-method">"Sign method *"</label>
                    <select
                        class="form__select"
                        id="fw-sign-method"
                        prop:value=move || vm.form.with(|f| f.sign_method.clone())
                        on:change=move |ev| vm.form.update(|f| f.sign_method = event_target_value(&ev))
                    >
                        <option value="">"Select method"</option>
                        {SignMethod::ALL
                            .into_iter()
                            .map(|m| view! { <option value=m.as_str()>{m.label()}</option> })
                            .collect_view()}
                    </select>
                </div>

                <div class="form__group">
                    <label class="form__label" for="fw-sign">"Signature *"</label>
                    <input
                        class="form__input"
                        type="text"
                        id="fw-sign"
                        prop:value=move || vm.form.with(|f| f.sign.clone())
                        on:input=move |ev| vm.form.update(|f| f.sign = event_target_value(&ev))
                        placeholder="Hash of the firmware file"
                    />
                </div>

                <div class="form__group">
                    <label class="form__label" for="fw-url">"Firmware file *"</label>
                    <input
                        class="form__input"
                        type="url"
                        id="fw-url"
                        prop:value=move || vm.form.with(|f| f.url.clone())
                        on:input=move |ev| vm.form.update(|f| f.url = event_target_value(&ev))
                        placeholder="Download URL"
                    />
                </div>

                <div class="form__group">
                    <label class="form__label" for="fw-description">"Description"</label>
                    <textarea
                        class="form__textarea"
                        id="fw-description"
                        rows="3"
                        prop:value=move || vm.form.with(|f| f.description.clone())
                        on:input=move |ev| vm.form.update(|f| f.description = event_target_value(&ev))
                    />
                </div>
            </div>
        </Modal>
    }
}
