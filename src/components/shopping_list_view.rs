//! Shopping List View Component
//!
//! Renders every non-empty category, or a placeholder when there are none.

use leptos::prelude::*;

use crate::components::CategoryBlock;
use crate::config::EMPTY_LIST_MESSAGE;
use crate::models::ShoppingList;
use crate::store::{use_app_store, AppStateStoreFields};

/// Row structure of one visible category: (index, label, item names)
type CategoryShape = (usize, String, Vec<String>);

/// Structure of the visible list, independent of checked state
///
/// Used as the `For` key so toggles never rebuild rows.
pub fn visible_shape(list: &ShoppingList) -> Vec<CategoryShape> {
    list.visible_categories()
        .map(|(index, category)| {
            let names = category.items.iter().map(|item| item.name.clone()).collect();
            (index, category.label.clone(), names)
        })
        .collect()
}

#[component]
pub fn ShoppingListView() -> impl IntoView {
    let store = use_app_store();

    let container_class = move || {
        if store.hide_checked().get() {
            "shopping-list hide-checked"
        } else {
            "shopping-list"
        }
    };
    let has_items = move || store.list().read().has_visible_items();
    let shape = move || visible_shape(&store.list().read());

    view! {
        <div id="shopping-list-container" class=container_class>
            <Show
                when=has_items
                fallback=|| view! { <p class="empty-message">{EMPTY_LIST_MESSAGE}</p> }
            >
                <For
                    each=shape
                    key=|entry| entry.clone()
                    children=move |(category, label, names)| {
                        view! { <CategoryBlock category=category label=label names=names /> }
                    }
                />
            </Show>
        </div>
    }
}
