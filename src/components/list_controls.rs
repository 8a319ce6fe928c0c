//! List Controls Component

use leptos::prelude::*;

use crate::config::filter_button_label;
use crate::store::{store_toggle_filter, use_app_store, AppStateStoreFields};

/// Button that hides or shows items already checked off
#[component]
pub fn ListControls() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div id="list-controls" class="list-controls">
            <button
                id="toggle-unchecked-button"
                on:click=move |_| store_toggle_filter(&store)
            >
                {move || filter_button_label(store.hide_checked().get())}
            </button>
        </div>
    }
}
