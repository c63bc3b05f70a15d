use leptos::prelude::*;
use thaw::*;
use uuid::Uuid;

/// Время жизни уведомления, мс
pub const NOTICE_TTL_MS: u32 = 3_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub id: Uuid,
    pub kind: NoticeKind,
    pub text: String,
}

/// Short-lived success/error notices shown in the corner of the page
#[derive(Clone, Copy)]
pub struct NoticeService {
    notices: RwSignal<Vec<Notice>>,
}

impl NoticeService {
    pub fn new() -> Self {
        Self {
            notices: RwSignal::new(Vec::new()),
        }
    }

    pub fn success(&self, text: impl Into<String>) {
        self.push(NoticeKind::Success, text.into());
    }

    pub fn error(&self, text: impl Into<String>) {
        self.push(NoticeKind::Error, text.into());
    }

    pub fn dismiss(&self, id: Uuid) {
        self.notices.update(|list| list.retain(|n| n.id != id));
    }

    fn push(&self, kind: NoticeKind, text: String) {
        match kind {
            NoticeKind::Success => log::info!("notice: {}", text),
            NoticeKind::Error => log::warn!("notice: {}", text),
        }
        let id = Uuid::new_v4();
        self.notices.update(|list| list.push(Notice { id, kind, text }));

        let service = *self;
        wasm_bindgen_futures::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(NOTICE_TTL_MS).await;
            service.dismiss(id);
        });
    }
}

impl Default for NoticeService {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_notices() -> NoticeService {
    use_context::<NoticeService>().expect("NoticeService not provided in context")
}

/// Renders the active notices; mount once at the application root
#[component]
pub fn NoticeHost() -> impl IntoView {
    let service = use_notices();

    view! {
        <div class="notice-host" style="position: fixed; top: 16px; right: 16px; z-index: 2000; display: flex; flex-direction: column; gap: 8px; min-width: 280px;">
            <For
                each=move || service.notices.get()
                key=|notice| notice.id
                children=move |notice: Notice| {
                    let id = notice.id;
                    let intent = match notice.kind {
                        NoticeKind::Success => MessageBarIntent::Success,
                        NoticeKind::Error => MessageBarIntent::Error,
                    };
                    view! {
                        <div style="cursor: pointer;" on:click=move |_| service.dismiss(id)>
                            <MessageBar intent=intent>
                                {notice.text}
                            </MessageBar>
                        </div>
                    }
                }
            />
        </div>
    }
}
