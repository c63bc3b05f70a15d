use crate::shared::icons::icon;
use leptos::ev;
use leptos::prelude::*;

#[component]
pub fn Modal(
    /// Title of the modal
    #[prop(into)]
    title: String,
    /// Callback when modal should close (Escape, close button)
    on_close: Callback<()>,
    /// Optional action buttons (Save, Cancel, etc.) to display in header
    #[prop(optional, into)]
    action_buttons: Option<ViewFn>,
    /// CSS width of the dialog, `50vw` by default
    #[prop(optional, into)]
    width: Option<String>,
    /// Modal content
    children: Children,
) -> impl IntoView {
    // Handle Escape key
    let handle = window_event_listener(ev::keydown, move |event| {
        if event.key() == "Escape" {
            on_close.run(());
        }
    });
    on_cleanup(move || handle.remove());

    // Prevent click propagation from modal content
    let stop_propagation = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
    };

    let style = format!("width: {};", width.unwrap_or_else(|| "50vw".to_string()));

    // Overlay clicks are ignored
    view! {
        <div class="modal-overlay">
            <div class="modal" style=style on:click=stop_propagation>
                <div class="modal-header">
                    <h2 class="modal-title">{title}</h2>
                    <div class="modal-header-actions">
                        {action_buttons.map(|buttons| buttons.run())}
                        <button class="button button--icon modal__close" on:click=move |_| on_close.run(())>
                            {icon("x")}
                        </button>
                    </div>
                </div>
                <div class="modal-body">
                    {children()}
                </div>
            </div>
        </div>
    }
}
