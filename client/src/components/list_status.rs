//! Loading spinner and empty-state blocks shared by list views.

use leptos::prelude::*;

#[component]
pub fn Spinner() -> impl IntoView {
    view! {
        <div class="loading-container">
            <div class="spinner" role="status" aria-label="Loading"></div>
        </div>
    }
}

#[component]
pub fn EmptyState(
    #[prop(into)] title: String,
    #[prop(into, optional)] message: Option<String>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    view! {
        <div class="empty-state">
            <h3>{title}</h3>
            {message.map(|m| view! { <p>{m}</p> })}
            {children.map(|c| c())}
        </div>
    }
}
