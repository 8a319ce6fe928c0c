//! Shopping List App
//!
//! Root component: restores the list from the URL, provides the store and
//! lays out the input area, list controls and list.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{InputArea, ListControls, ShoppingListView};
use crate::location;
use crate::store::{AppState, AppStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    let (state, error) = AppState::from_fragment(&location::current_hash());
    if let Some(err) = error {
        log::error!("[APP] {}", err);
        location::clear_hash();
        location::show_notice(err.notice());
    } else if !state.list.is_empty() {
        log::info!("[APP] Restored {} items from URL", state.list.item_count());
    }

    let store = Store::new(state);
    provide_context(store);

    let has_items = move || store.list().read().has_visible_items();

    view! {
        <main class="container">
            <h1>"Lista della spesa"</h1>

            <Show when=has_items fallback=|| view! { <InputArea /> }>
                <ListControls />
            </Show>

            <ShoppingListView />
        </main>
    }
}
