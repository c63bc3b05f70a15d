use super::form::FirmwareForm;
use crate::domain::a001_firmware::api;
use crate::shared::load_state::LoadState;
use crate::shared::notice::NoticeService;
use contracts::domain::a001_firmware::{FirmwareItem, ProductRef};
use leptos::prelude::*;

/// ViewModel for the firmware save dialog
///
/// - Form data stored as [`FirmwareForm`], updated directly from the view
/// - Product options loaded once per dialog
/// - Commands: load products, save
#[derive(Clone, Copy)]
pub struct FirmwareSaveViewModel {
    pub form: RwSignal<FirmwareForm>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
    pub products: RwSignal<LoadState<Vec<ProductRef>>>,
}

impl FirmwareSaveViewModel {
    pub fn new(initial: Option<&FirmwareItem>) -> Self {
        Self {
            form: RwSignal::new(FirmwareForm::from_selection(initial)),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
            products: RwSignal::new(LoadState::Idle),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.form.with_untracked(|f| f.is_edit())
    }

    pub fn load_products(&self) {
        let products = self.products;
        products.update(|p| p.begin());
        wasm_bindgen_futures::spawn_local(async move {
            let outcome = api::fetch_products().await;
            if let Err(e) = &outcome {
                log::warn!("Failed to load products: {}", e);
            }
            products.update(|p| {
                p.resolve(outcome);
            });
        });
    }

    /// Product id and display name travel together in the payload
    pub fn select_product(&self, product_id: String) {
        let name = self.products.with_untracked(|p| {
            p.value()
                .and_then(|list| list.iter().find(|p| p.id == product_id))
                .map(|p| p.name.clone())
        });
        self.form.update(|f| {
            f.product_name = name.unwrap_or_default();
            f.product_id = product_id;
        });
    }

    /// Validate, send, report
    pub fn save_command(&self, notices: NoticeService, on_saved: Callback<()>) {
        let dto = match self.form.with_untracked(|f| f.to_dto()) {
            Ok(dto) => dto,
            Err(e) => {
                self.error.set(Some(e.to_string()));
                return;
            }
        };
        self.error.set(None);
        self.saving.set(true);

        let error = self.error;
        let saving = self.saving;
        let done_text = if dto.is_new() {
            "Firmware created"
        } else {
            "Firmware saved"
        };
        wasm_bindgen_futures::spawn_local(async move {
            let result = api::save_firmware(&dto).await;
            saving.set(false);
            match result {
                Ok(response) if response.is_success() => {
                    notices.success(done_text);
                    on_saved.run(());
                }
                Ok(response) => {
                    let message = response.failure_message();
                    log::warn!("Firmware save rejected: {}", message);
                    notices.error(message.clone());
                    error.set(Some(message));
                }
                Err(e) => {
                    log::error!("Firmware save failed: {}", e);
                    notices.error(e.to_string());
                    error.set(Some(e.to_string()));
                }
            }
        });
    }
}
