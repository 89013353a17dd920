//! Admin dashboard: services, products, and review moderation.
//!
//! SYSTEM CONTEXT
//! ==============
//! Admin-only. Each tab owns a `ListState` plus an `Editor` whose form serves
//! both create and edit. Mutations never patch the list locally; success
//! re-fetches it.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::list_status::{EmptyState, Spinner};
use crate::components::notice_banner::NoticeBanner;
use crate::components::review_card::ReviewCard;
use crate::net::api::{ApiClient, ImageUpload};
use crate::net::types::{Product, Review, Role, Service};
use crate::state::auth::AuthState;
use crate::state::editor::{Editor, SubmitTarget};
use crate::state::fetch::{ListState, ListView};
use crate::state::forms::{ProductForm, ServiceForm};
use crate::state::notice::{NOTICE_TTL, NoticeKind, NoticeState, flash};
use crate::util::auth::install_role_guard;
use crate::util::format::money;
use crate::util::load::spawn_list_load;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AdminTab {
    Services,
    Products,
    Reviews,
}

impl AdminTab {
    pub const ALL: [Self; 3] = [Self::Services, Self::Products, Self::Reviews];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Services => "Services",
            Self::Products => "Products",
            Self::Reviews => "Reviews",
        }
    }
}

#[component]
pub fn AdminPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_role_guard(auth, Role::Admin, use_navigate());

    let tab = RwSignal::new(AdminTab::Services);
    let notices = RwSignal::new(NoticeState::default());
    let allowed = Memo::new(move |_| auth.with(|a| a.has_role(Role::Admin)));

    let tabs = move || {
        AdminTab::ALL
            .into_iter()
            .map(|t| {
                view! {
                    <button class="admin-tab" class:active=move || tab.get() == t on:click=move |_| tab.set(t)>
                        {t.label()}
                    </button>
                }
            })
            .collect::<Vec<_>>()
    };

    let content = move || match tab.get() {
        AdminTab::Services => view! { <ServicesTab notices=notices/> }.into_any(),
        AdminTab::Products => view! { <ProductsTab notices=notices/> }.into_any(),
        AdminTab::Reviews => view! { <ReviewsTab notices=notices/> }.into_any(),
    };

    view! {
        <Show when=move || allowed.get() fallback=|| view! { <Spinner/> }>
            <div class="admin-page">
                <div class="page-header">
                    <div class="container">
                        <h1>"Admin Dashboard"</h1>
                        <p>"Manage services, products, and reviews"</p>
                    </div>
                </div>
                <div class="container admin-container">
                    <NoticeBanner notices=notices/>
                    <div class="admin-tabs">{tabs}</div>
                    <div class="admin-content">{content}</div>
                </div>
            </div>
        </Show>
    }
}

// =============================================================================
// SERVICES
// =============================================================================

#[component]
fn ServicesTab(notices: RwSignal<NoticeState>) -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let services = RwSignal::new(ListState::<Service>::default());
    let editor = RwSignal::new(Editor::<ServiceForm, i64>::default());

    let reload = {
        let api = api.clone();
        move || {
            let api = api.clone();
            spawn_list_load(services, async move { api.list_services(None).await });
        }
    };
    Effect::new(reload.clone());

    let submit = {
        let api = api.clone();
        let reload = reload.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            let payload = match editor.with_untracked(|e| e.form.validate()) {
                Ok(payload) => payload,
                Err(message) => {
                    flash(notices, NoticeKind::Error, message, NOTICE_TTL);
                    return;
                }
            };
            let Some(Some(target)) = editor.try_update(Editor::begin_save) else {
                return;
            };
            let api = api.clone();
            let reload = reload.clone();
            leptos::task::spawn_local(async move {
                let (result, done) = match target {
                    SubmitTarget::Create => (api.create_service(&payload).await, "Service created successfully"),
                    SubmitTarget::Update(id) => (api.update_service(id, &payload).await, "Service updated successfully"),
                };
                match result {
                    Ok(()) => {
                        editor.update(Editor::save_succeeded);
                        flash(notices, NoticeKind::Success, done, NOTICE_TTL);
                        reload();
                    }
                    Err(e) => {
                        editor.update(Editor::save_failed);
                        flash(notices, NoticeKind::Error, e.user_message("Failed to save service"), NOTICE_TTL);
                    }
                }
            });
        }
    };

    let on_confirm_delete = {
        let api = api.clone();
        let reload = reload.clone();
        Callback::new(move |()| {
            let Some(Some(id)) = editor.try_update(Editor::confirm_delete) else {
                return;
            };
            let api = api.clone();
            let reload = reload.clone();
            leptos::task::spawn_local(async move {
                match api.delete_service(id).await {
                    Ok(()) => {
                        flash(notices, NoticeKind::Success, "Service deleted successfully", NOTICE_TTL);
                        reload();
                    }
                    Err(e) => {
                        flash(notices, NoticeKind::Error, e.user_message("Failed to delete service"), NOTICE_TTL);
                    }
                }
            });
        })
    };

    let table = move || match services.with(ListState::view) {
        ListView::Loading => view! { <Spinner/> }.into_any(),
        ListView::Empty => view! { <EmptyState title="No services yet" message="Add your first service above"/> }
            .into_any(),
        ListView::Items => view! {
            <table class="admin-table">
                <thead>
                    <tr>
                        <th>"Name"</th>
                        <th>"Category"</th>
                        <th>"Price"</th>
                        <th>"Duration"</th>
                        <th>"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    {services
                        .get()
                        .items
                        .into_iter()
                        .map(|service| {
                            let id = service.id;
                            let form = ServiceForm::from_service(&service);
                            view! {
                                <tr>
                                    <td>
                                        <strong>{service.name.clone()}</strong>
                                        {service.description.clone().map(|d| view! { <small class="service-desc">{d}</small> })}
                                    </td>
                                    <td>{service.category.clone().unwrap_or_default()}</td>
                                    <td>{money(service.price)}</td>
                                    <td>{format!("{} min", service.duration)}</td>
                                    <td class="actions">
                                        <button
                                            class="btn btn-sm btn-secondary"
                                            on:click=move |_| editor.update(|e| e.begin_edit(id, form.clone()))
                                        >
                                            "Edit"
                                        </button>
                                        <button class="btn btn-sm btn-error" on:click=move |_| editor.update(|e| e.request_delete(id))>
                                            "Delete"
                                        </button>
                                    </td>
                                </tr>
                            }
                        })
                        .collect::<Vec<_>>()}
                </tbody>
            </table>
        }
        .into_any(),
    };

    view! {
        <div class="tab-content">
            <h2>{move || if editor.with(Editor::is_editing) { "Edit Service" } else { "Add New Service" }}</h2>
            <form class="service-form" on:submit=submit>
                <div class="form-row">
                    <div class="form-group">
                        <label for="service-name">"Service Name *"</label>
                        <input
                            id="service-name"
                            type="text"
                            placeholder="e.g., Brow Wax"
                            prop:value=move || editor.with(|e| e.form.name.clone())
                            on:input=move |ev| editor.update(|e| e.form.name = event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <label for="service-category">"Category"</label>
                        <input
                            id="service-category"
                            type="text"
                            placeholder="e.g., Brows, Waxing"
                            prop:value=move || editor.with(|e| e.form.category.clone())
                            on:input=move |ev| editor.update(|e| e.form.category = event_target_value(&ev))
                        />
                    </div>
                </div>
                <div class="form-group">
                    <label for="service-description">"Description"</label>
                    <textarea
                        id="service-description"
                        rows="3"
                        placeholder="Service description..."
                        prop:value=move || editor.with(|e| e.form.description.clone())
                        on:input=move |ev| editor.update(|e| e.form.description = event_target_value(&ev))
                    ></textarea>
                </div>
                <div class="form-row">
                    <div class="form-group">
                        <label for="service-price">"Price (£) *"</label>
                        <input
                            id="service-price"
                            type="number"
                            step="0.01"
                            min="0"
                            placeholder="0.00"
                            prop:value=move || editor.with(|e| e.form.price.clone())
                            on:input=move |ev| editor.update(|e| e.form.price = event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <label for="service-duration">"Duration (minutes) *"</label>
                        <input
                            id="service-duration"
                            type="number"
                            min="5"
                            placeholder="30"
                            prop:value=move || editor.with(|e| e.form.duration.clone())
                            on:input=move |ev| editor.update(|e| e.form.duration = event_target_value(&ev))
                        />
                    </div>
                </div>
                <div class="form-actions">
                    <button type="submit" class="btn btn-primary" disabled=move || editor.with(Editor::saving)>
                        {move || match (editor.with(Editor::saving), editor.with(Editor::is_editing)) {
                            (true, _) => "Saving...",
                            (false, true) => "Update Service",
                            (false, false) => "Add Service",
                        }}
                    </button>
                    <Show when=move || editor.with(Editor::is_editing)>
                        <button type="button" class="btn btn-secondary" on:click=move |_| editor.update(Editor::reset)>
                            "Cancel"
                        </button>
                    </Show>
                </div>
            </form>
            <h2>"All Services"</h2>
            {table}
            <Show when=move || editor.with(|e| e.pending_delete().is_some())>
                <ConfirmDialog
                    message="Are you sure you want to delete this service?"
                    on_confirm=on_confirm_delete
                    on_cancel=Callback::new(move |()| editor.update(Editor::cancel_delete))
                />
            </Show>
        </div>
    }
}

// =============================================================================
// PRODUCTS
// =============================================================================

/// The file picked in the product image input, if any.
fn picked_image(input: NodeRef<leptos::html::Input>) -> Option<ImageUpload> {
    #[cfg(feature = "hydrate")]
    {
        let file = input.get_untracked()?.files()?.get(0)?;
        Some(ImageUpload::new(file))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = input;
        None
    }
}

fn clear_picked_image(input: NodeRef<leptos::html::Input>) {
    #[cfg(feature = "hydrate")]
    if let Some(el) = input.get_untracked() {
        el.set_value("");
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = input;
}

#[component]
fn ProductsTab(notices: RwSignal<NoticeState>) -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let config = expect_context::<crate::config::ClientConfig>();
    let products = RwSignal::new(ListState::<Product>::default());
    let editor = RwSignal::new(Editor::<ProductForm, i64>::default());
    let image_input = NodeRef::<leptos::html::Input>::new();

    let reload = {
        let api = api.clone();
        move || {
            let api = api.clone();
            spawn_list_load(products, async move { api.list_products().await });
        }
    };
    Effect::new(reload.clone());

    let submit = {
        let api = api.clone();
        let reload = reload.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            let payload = match editor.with_untracked(|e| e.form.validate()) {
                Ok(payload) => payload,
                Err(message) => {
                    flash(notices, NoticeKind::Error, message, NOTICE_TTL);
                    return;
                }
            };
            let Some(Some(target)) = editor.try_update(Editor::begin_save) else {
                return;
            };
            let image = picked_image(image_input);
            let api = api.clone();
            let reload = reload.clone();
            leptos::task::spawn_local(async move {
                let (result, done) = match target {
                    SubmitTarget::Create => {
                        (api.create_product(&payload, image).await, "Product created successfully")
                    }
                    SubmitTarget::Update(id) => {
                        (api.update_product(id, &payload, image).await, "Product updated successfully")
                    }
                };
                match result {
                    Ok(()) => {
                        editor.update(Editor::save_succeeded);
                        clear_picked_image(image_input);
                        flash(notices, NoticeKind::Success, done, NOTICE_TTL);
                        reload();
                    }
                    Err(e) => {
                        editor.update(Editor::save_failed);
                        flash(notices, NoticeKind::Error, e.user_message("Failed to save product"), NOTICE_TTL);
                    }
                }
            });
        }
    };

    let on_confirm_delete = {
        let api = api.clone();
        let reload = reload.clone();
        Callback::new(move |()| {
            let Some(Some(id)) = editor.try_update(Editor::confirm_delete) else {
                return;
            };
            let api = api.clone();
            let reload = reload.clone();
            leptos::task::spawn_local(async move {
                match api.delete_product(id).await {
                    Ok(()) => {
                        flash(notices, NoticeKind::Success, "Product deleted successfully", NOTICE_TTL);
                        reload();
                    }
                    Err(e) => {
                        flash(notices, NoticeKind::Error, e.user_message("Failed to delete product"), NOTICE_TTL);
                    }
                }
            });
        })
    };

    let table = move || match products.with(ListState::view) {
        ListView::Loading => view! { <Spinner/> }.into_any(),
        ListView::Empty => view! { <EmptyState title="No products yet" message="Add your first product above"/> }
            .into_any(),
        ListView::Items => view! {
            <table class="admin-table">
                <thead>
                    <tr>
                        <th>"Image"</th>
                        <th>"Name"</th>
                        <th>"Category"</th>
                        <th>"Price"</th>
                        <th>"Stock"</th>
                        <th>"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    {products
                        .get()
                        .items
                        .into_iter()
                        .map(|product| {
                            let id = product.id;
                            let form = ProductForm::from_product(&product);
                            let image = product
                                .image
                                .as_deref()
                                .map(|path| config.asset_url(Some(path)));
                            view! {
                                <tr>
                                    <td>
                                        {image.map(|src| view! { <img class="product-thumb" src=src alt=""/> })}
                                    </td>
                                    <td>{product.name.clone()}</td>
                                    <td>{product.category.clone().unwrap_or_default()}</td>
                                    <td>{money(product.price)}</td>
                                    <td>{product.stock}</td>
                                    <td class="actions">
                                        <button
                                            class="btn btn-sm btn-secondary"
                                            on:click=move |_| editor.update(|e| e.begin_edit(id, form.clone()))
                                        >
                                            "Edit"
                                        </button>
                                        <button class="btn btn-sm btn-error" on:click=move |_| editor.update(|e| e.request_delete(id))>
                                            "Delete"
                                        </button>
                                    </td>
                                </tr>
                            }
                        })
                        .collect::<Vec<_>>()}
                </tbody>
            </table>
        }
        .into_any(),
    };

    view! {
        <div class="tab-content">
            <h2>{move || if editor.with(Editor::is_editing) { "Edit Product" } else { "Add New Product" }}</h2>
            <form class="product-form" on:submit=submit>
                <div class="form-row">
                    <div class="form-group">
                        <label for="product-name">"Product Name *"</label>
                        <input
                            id="product-name"
                            type="text"
                            prop:value=move || editor.with(|e| e.form.name.clone())
                            on:input=move |ev| editor.update(|e| e.form.name = event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <label for="product-category">"Category"</label>
                        <input
                            id="product-category"
                            type="text"
                            prop:value=move || editor.with(|e| e.form.category.clone())
                            on:input=move |ev| editor.update(|e| e.form.category = event_target_value(&ev))
                        />
                    </div>
                </div>
                <div class="form-group">
                    <label for="product-description">"Description"</label>
                    <textarea
                        id="product-description"
                        rows="3"
                        prop:value=move || editor.with(|e| e.form.description.clone())
                        on:input=move |ev| editor.update(|e| e.form.description = event_target_value(&ev))
                    ></textarea>
                </div>
                <div class="form-row">
                    <div class="form-group">
                        <label for="product-price">"Price (£) *"</label>
                        <input
                            id="product-price"
                            type="number"
                            step="0.01"
                            min="0"
                            placeholder="0.00"
                            prop:value=move || editor.with(|e| e.form.price.clone())
                            on:input=move |ev| editor.update(|e| e.form.price = event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <label for="product-stock">"Stock"</label>
                        <input
                            id="product-stock"
                            type="number"
                            min="0"
                            placeholder="0"
                            prop:value=move || editor.with(|e| e.form.stock.clone())
                            on:input=move |ev| editor.update(|e| e.form.stock = event_target_value(&ev))
                        />
                    </div>
                </div>
                <div class="form-group">
                    <label for="product-image">"Image"</label>
                    <input id="product-image" type="file" accept="image/*" node_ref=image_input/>
                </div>
                <div class="form-actions">
                    <button type="submit" class="btn btn-primary" disabled=move || editor.with(Editor::saving)>
                        {move || match (editor.with(Editor::saving), editor.with(Editor::is_editing)) {
                            (true, _) => "Saving...",
                            (false, true) => "Update Product",
                            (false, false) => "Add Product",
                        }}
                    </button>
                    <Show when=move || editor.with(Editor::is_editing)>
                        <button
                            type="button"
                            class="btn btn-secondary"
                            on:click=move |_| {
                                editor.update(Editor::reset);
                                clear_picked_image(image_input);
                            }
                        >
                            "Cancel"
                        </button>
                    </Show>
                </div>
            </form>
            <h2>"All Products"</h2>
            {table}
            <Show when=move || editor.with(|e| e.pending_delete().is_some())>
                <ConfirmDialog
                    message="Are you sure you want to delete this product?"
                    on_confirm=on_confirm_delete
                    on_cancel=Callback::new(move |()| editor.update(Editor::cancel_delete))
                />
            </Show>
        </div>
    }
}

// =============================================================================
// REVIEWS
// =============================================================================

#[component]
fn ReviewsTab(notices: RwSignal<NoticeState>) -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let reviews = RwSignal::new(ListState::<Review>::default());
    let pending_delete = RwSignal::new(None::<i64>);

    let reload = {
        let api = api.clone();
        move || {
            let api = api.clone();
            spawn_list_load(reviews, async move { api.list_reviews().await });
        }
    };
    Effect::new(reload.clone());

    let on_confirm_delete = {
        let api = api.clone();
        Callback::new(move |()| {
            let Some(id) = pending_delete.get_untracked() else {
                return;
            };
            pending_delete.set(None);
            let api = api.clone();
            let reload = reload.clone();
            leptos::task::spawn_local(async move {
                match api.delete_review(id).await {
                    Ok(()) => {
                        flash(notices, NoticeKind::Success, "Review deleted successfully", NOTICE_TTL);
                        reload();
                    }
                    Err(e) => {
                        flash(notices, NoticeKind::Error, e.user_message("Failed to delete review"), NOTICE_TTL);
                    }
                }
            });
        })
    };

    let on_delete = Callback::new(move |id: i64| pending_delete.set(Some(id)));

    let list = move || match reviews.with(ListState::view) {
        ListView::Loading => view! { <Spinner/> }.into_any(),
        ListView::Empty => view! { <EmptyState title="No reviews yet"/> }.into_any(),
        ListView::Items => view! {
            <div class="reviews-list">
                {reviews
                    .get()
                    .items
                    .into_iter()
                    .map(|review| view! { <ReviewCard review=review on_delete=on_delete/> })
                    .collect::<Vec<_>>()}
            </div>
        }
        .into_any(),
    };

    view! {
        <div class="tab-content">
            <h2>"Manage Reviews"</h2>
            <p class="tab-description">"View and manage customer reviews"</p>
            {list}
            <Show when=move || pending_delete.get().is_some()>
                <ConfirmDialog
                    message="Are you sure you want to delete this review?"
                    on_confirm=on_confirm_delete
                    on_cancel=Callback::new(move |()| pending_delete.set(None))
                />
            </Show>
        </div>
    }
}
