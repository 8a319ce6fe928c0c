//! Product Item Component
//!
//! Individual checkable row in a category.

use leptos::prelude::*;

use crate::store::{store_toggle_item, use_app_store, AppStateStoreFields};

/// A single item row
///
/// Toggling writes the store and the URL hash; only this row's
/// checkbox and class react to the change.
#[component]
pub fn ProductItem(
    category: usize,
    index: usize,
    name: String,
) -> impl IntoView {
    let store = use_app_store();
    let input_id = format!("item-{}-{}", category, index);

    let checked = move || {
        store
            .list()
            .read()
            .item(category, index)
            .map_or(false, |item| item.checked)
    };

    view! {
        <div class=move || if checked() { "product-item checked" } else { "product-item" }>
            <input
                type="checkbox"
                id=input_id.clone()
                prop:checked=checked
                on:change=move |_| store_toggle_item(&store, category, index)
            />
            <label for=input_id>{name}</label>
        </div>
    }
}
