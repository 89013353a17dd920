//! Fire-and-forget list loading into a `ListState` signal.

use std::future::Future;

use leptos::prelude::*;

use crate::net::api::ApiError;
use crate::state::fetch::ListState;

/// Start a load on `list` and apply the result when `fetch` resolves. A newer
/// load started in the meantime wins.
pub fn spawn_list_load<T, Fut>(list: RwSignal<ListState<T>>, fetch: Fut)
where
    T: Send + Sync + 'static,
    Fut: Future<Output = Result<Vec<T>, ApiError>> + 'static,
{
    let Some(ticket) = list.try_update(ListState::begin_load) else {
        return;
    };
    leptos::task::spawn_local(async move {
        let result = fetch.await;
        list.update(|state| {
            state.finish(ticket, result);
        });
    });
}
