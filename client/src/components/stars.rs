//! Star rating display and picker.

use leptos::prelude::*;

use crate::util::format::stars;

#[component]
pub fn Stars(rating: u8) -> impl IntoView {
    view! {
        <span class="stars" aria-label=format!("{rating} out of 5 stars")>
            {stars(rating)}
        </span>
    }
}

/// Five clickable stars bound to `value` (1-5).
#[component]
pub fn StarPicker(value: RwSignal<u8>) -> impl IntoView {
    view! {
        <div class="star-rating">
            {(1..=5u8)
                .map(|star| {
                    view! {
                        <button
                            type="button"
                            class="star-btn"
                            class:active=move || star <= value.get()
                            aria-label=format!("{star} stars")
                            on:click=move |_| value.set(star)
                        >
                            "★"
                        </button>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}
