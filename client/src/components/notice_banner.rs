//! Banner for the current auto-dismissing notice.

use leptos::prelude::*;

use crate::state::notice::NoticeState;

#[component]
pub fn NoticeBanner(notices: RwSignal<NoticeState>) -> impl IntoView {
    move || {
        notices.get().current().cloned().map(|notice| {
            view! { <div class=notice.kind.css_class() role="status">{notice.text}</div> }
        })
    }
}
