//! Toast stack for transient auth notices.
//!
//! SYSTEM CONTEXT
//! ==============
//! Renders the shared [`NoticeBoard`]; entries are removed by the notifier's
//! timers or by clicking them.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use leptos::prelude::*;
use storefront::state::notice::{NoticeBoard, NoticeLevel};

use crate::state::auth::AuthContext;

/// Stack of active notices, newest last.
#[component]
pub fn ToastStack() -> impl IntoView {
    let auth = expect_context::<AuthContext>();
    let notices = auth.notices;

    view! {
        <div class="toast-stack" role="status" aria-live="polite">
            <For
                each=move || notices.get().active().to_vec()
                key=|notice| notice.id
                children=move |notice| {
                    let id = notice.id;
                    view! {
                        <div
                            class=toast_class(notice.level)
                            on:click=move |_| notices.update(|board: &mut NoticeBoard| {
                                board.dismiss(id);
                            })
                        >
                            {notice.text}
                        </div>
                    }
                }
            />
        </div>
    }
}

fn toast_class(level: NoticeLevel) -> &'static str {
    match level {
        NoticeLevel::Info => "toast toast--info",
        NoticeLevel::Success => "toast toast--success",
        NoticeLevel::Error => "toast toast--error",
    }
}
