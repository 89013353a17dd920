//! One review with stars, author, and date.

use leptos::prelude::*;

use crate::components::stars::Stars;
use crate::net::types::Review;
use crate::util::format::{api_date, initials};

#[component]
pub fn ReviewCard(review: Review, #[prop(optional)] on_delete: Option<Callback<i64>>) -> impl IntoView {
    let id = review.id;
    let author = review.client_name.clone().unwrap_or_else(|| "Anonymous".to_owned());
    let avatar = initials(&author);
    let comment = review.comment.clone().unwrap_or_default();

    view! {
        <article class="review-card card">
            <header class="review-card__header">
                <span class="review-card__avatar">{avatar}</span>
                <div>
                    <strong class="review-card__author">{author}</strong>
                    <span class="review-card__date">{api_date(&review.created_at)}</span>
                </div>
                <Stars rating=review.rating/>
            </header>
            <p class="review-card__comment">{comment}</p>
            {on_delete.map(|on_delete| {
                view! {
                    <button class="btn btn-sm btn-error" on:click=move |_| on_delete.run(id)>
                        "Delete"
                    </button>
                }
            })}
        </article>
    }
}
