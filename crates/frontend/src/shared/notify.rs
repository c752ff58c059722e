//! Всплывающие уведомления (успех / ошибка)
//!
//! `Notifier` кладётся в контекст в `App`; экраны берут его через
//! `use_notifier()`. Уведомление исчезает само через `NOTICE_TTL_MS`.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use thaw::{MessageBar, MessageBarIntent};

const NOTICE_TTL_MS: u32 = 4_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

#[derive(Clone, Copy)]
pub struct Notifier {
    current: RwSignal<Option<Notice>>,
    // Номер последнего показа: таймер старого уведомления не гасит новое
    seq: RwSignal<u64>,
}

impl Notifier {
    pub fn new() -> Self {
        Self {
            current: RwSignal::new(None),
            seq: RwSignal::new(0),
        }
    }

    pub fn success(&self, text: impl Into<String>) {
        self.show(NoticeKind::Success, text.into());
    }

    pub fn error(&self, text: impl Into<String>) {
        self.show(NoticeKind::Error, text.into());
    }

    pub fn dismiss(&self) {
        self.current.set(None);
    }

    fn show(&self, kind: NoticeKind, text: String) {
        log::debug!("notice {:?}: {}", kind, text);
        self.current.set(Some(Notice { kind, text }));
        self.seq.update(|s| *s += 1);

        let shown = self.seq.get_untracked();
        let current = self.current;
        let seq = self.seq;
        wasm_bindgen_futures::spawn_local(async move {
            TimeoutFuture::new(NOTICE_TTL_MS).await;
            if seq.get_untracked() == shown {
                current.set(None);
            }
        });
    }
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_notifier() -> Notifier {
    use_context::<Notifier>().expect("Notifier context not found")
}

/// Место вывода уведомлений (один раз на приложение)
#[component]
pub fn NotificationHost() -> impl IntoView {
    let notifier = use_notifier();

    view! {
        <div class="notification-host">
            {move || {
                notifier.current.get().map(|notice| {
                    let intent = match notice.kind {
                        NoticeKind::Success => MessageBarIntent::Success,
                        NoticeKind::Error => MessageBarIntent::Error,
                    };
                    view! {
                        <div on:click=move |_| notifier.dismiss()>
                            <MessageBar intent=intent>
                                {notice.text}
                            </MessageBar>
                        </div>
                    }
                })
            }}
        </div>
    }
}
