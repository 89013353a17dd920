//! Client reviews wall with a submission form for signed-in users.

use leptos::prelude::*;

use crate::components::list_status::{EmptyState, Spinner};
use crate::components::notice_banner::NoticeBanner;
use crate::components::review_card::ReviewCard;
use crate::components::stars::StarPicker;
use crate::config::ClientConfig;
use crate::net::api::ApiClient;
use crate::net::types::Review;
use crate::state::auth::AuthState;
use crate::state::fetch::{ListState, ListView};
use crate::state::forms::ReviewForm;
use crate::state::notice::{NOTICE_TTL, NoticeKind, NoticeState, flash};
use crate::util::load::spawn_list_load;

/// Which review listing is shown.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ReviewScope {
    #[default]
    All,
    Mine,
}

#[component]
pub fn ReviewsPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let config = expect_context::<ClientConfig>();
    let provider_id = config.default_provider_id;

    let reviews = RwSignal::new(ListState::<Review>::default());
    let scope = RwSignal::new(ReviewScope::All);
    let notices = RwSignal::new(NoticeState::default());
    let show_form = RwSignal::new(false);
    let rating = RwSignal::new(ReviewForm::default().rating);
    let comment = RwSignal::new(String::new());
    let submitting = RwSignal::new(false);

    let authenticated = Memo::new(move |_| auth.with(AuthState::is_authenticated));

    let reload = {
        let api = api.clone();
        move || {
            let api = api.clone();
            let mine = scope.get_untracked() == ReviewScope::Mine;
            spawn_list_load(reviews, async move {
                if mine { api.my_reviews().await } else { api.list_reviews().await }
            });
        }
    };

    {
        let reload = reload.clone();
        Effect::new(move || {
            // Signing out while on "Mine" falls back to everyone's reviews.
            if !authenticated.get() && scope.get_untracked() == ReviewScope::Mine {
                scope.set(ReviewScope::All);
            }
            scope.track();
            reload();
        });
    }

    let submit = {
        let api = api.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            if !authenticated.get_untracked() {
                flash(notices, NoticeKind::Error, "Please log in to leave a review", NOTICE_TTL);
                return;
            }
            if submitting.get_untracked() {
                return;
            }
            let form = ReviewForm { rating: rating.get_untracked(), comment: comment.get_untracked() };
            let review = match form.validate(provider_id, None) {
                Ok(review) => review,
                Err(message) => {
                    flash(notices, NoticeKind::Error, message, NOTICE_TTL);
                    return;
                }
            };
            submitting.set(true);
            let api = api.clone();
            let reload = reload.clone();
            leptos::task::spawn_local(async move {
                match api.create_review(&review).await {
                    Ok(()) => {
                        flash(notices, NoticeKind::Success, "Thank you for your review!", NOTICE_TTL);
                        rating.set(ReviewForm::default().rating);
                        comment.set(String::new());
                        show_form.set(false);
                        reload();
                    }
                    Err(e) => flash(notices, NoticeKind::Error, e.user_message("Failed to submit review"), NOTICE_TTL),
                }
                submitting.set(false);
            });
        }
    };

    let header_action = move || {
        if authenticated.get() {
            view! {
                <div class="reviews-header__actions">
                    <button
                        class="filter-tab"
                        class:active=move || scope.get() == ReviewScope::All
                        on:click=move |_| scope.set(ReviewScope::All)
                    >
                        "All"
                    </button>
                    <button
                        class="filter-tab"
                        class:active=move || scope.get() == ReviewScope::Mine
                        on:click=move |_| scope.set(ReviewScope::Mine)
                    >
                        "Mine"
                    </button>
                    <button class="btn btn-primary" on:click=move |_| show_form.update(|open| *open = !*open)>
                        {move || if show_form.get() { "Cancel" } else { "Write a Review" }}
                    </button>
                </div>
            }
            .into_any()
        } else {
            view! {
                <p class="login-prompt">"Please " <a href="/login">"log in"</a> " to leave a review"</p>
            }
            .into_any()
        }
    };

    let form = move || {
        let submit = submit.clone();
        (show_form.get() && authenticated.get()).then(|| {
            view! {
                <div class="review-form-container card">
                    <h3>"Share Your Experience"</h3>
                    <form class="review-form" on:submit=submit>
                        <div class="form-group">
                            <label>"Rating"</label>
                            <StarPicker value=rating/>
                        </div>
                        <div class="form-group">
                            <label for="review-text">"Your Review"</label>
                            <textarea
                                id="review-text"
                                rows="4"
                                required
                                placeholder="Tell us about your experience..."
                                prop:value=move || comment.get()
                                on:input=move |ev| comment.set(event_target_value(&ev))
                            ></textarea>
                        </div>
                        <button type="submit" class="btn btn-primary" disabled=move || submitting.get()>
                            {move || if submitting.get() { "Submitting..." } else { "Submit Review" }}
                        </button>
                    </form>
                </div>
            }
        })
    };

    let list = move || match reviews.with(ListState::view) {
        ListView::Loading => view! { <Spinner/> }.into_any(),
        ListView::Empty => view! {
            <EmptyState title="No reviews yet" message="Be the first to leave a review!"/>
        }
        .into_any(),
        ListView::Items => view! {
            <div class="reviews-grid">
                {reviews
                    .get()
                    .items
                    .into_iter()
                    .map(|review| view! { <ReviewCard review=review/> })
                    .collect::<Vec<_>>()}
            </div>
        }
        .into_any(),
    };

    view! {
        <div class="reviews-page">
            <div class="page-header">
                <div class="container">
                    <h1>"Client Reviews"</h1>
                    <p>"See what our lovely clients have to say"</p>
                </div>
            </div>
            <div class="container reviews-container">
                <NoticeBanner notices=notices/>
                <div class="reviews-header">
                    <span class="total-reviews">{move || format!("{} Reviews", reviews.with(|r| r.items.len()))}</span>
                    {header_action}
                </div>
                {form}
                {list}
            </div>
        </div>
    }
}
