//! Application State Store
//!
//! Uses Leptos reactive_stores for field-level reactivity. The store is
//! the only owner of the working list and the filter flag.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::codec::{decode_fragment, fragment_for};
use crate::error::AppError;
use crate::location;
use crate::models::ShoppingList;

/// Page state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Categories and items being shopped
    pub list: ShoppingList,
    /// Hide items already checked off (view only, never touches the list)
    pub hide_checked: bool,
}

impl AppState {
    pub fn new(list: ShoppingList) -> Self {
        Self {
            list,
            hide_checked: false,
        }
    }

    /// Restore state from `location.hash`
    ///
    /// A corrupt fragment yields the empty state together with the error so
    /// the caller can clear the hash and tell the user.
    pub fn from_fragment(hash: &str) -> (Self, Option<AppError>) {
        match decode_fragment(hash) {
            Ok(Some(list)) => (Self::new(list), None),
            Ok(None) => (Self::default(), None),
            Err(err) => (Self::default(), Some(err)),
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

/// Flip one item and return the fragment for the new list, if it exists
pub fn toggle_and_encode(list: &mut ShoppingList, category: usize, index: usize) -> Option<String> {
    list.toggle(category, index)?;
    Some(fragment_for(list))
}

// ========================
// Store Helper Functions
// ========================

/// Replace the list and persist it
pub fn store_load_list(store: &AppStore, list: ShoppingList) {
    log::info!(
        "[STORE] Loaded {} categories, {} items",
        list.categories().len(),
        list.item_count()
    );
    let fragment = fragment_for(&list);
    store.list().set(list);
    location::write_hash(&fragment);
}

/// Toggle one item in the store, returning the fragment for the new list
pub fn store_toggle_in_place(store: &AppStore, category: usize, index: usize) -> Option<String> {
    store
        .list()
        .try_update(|list| toggle_and_encode(list, category, index))
        .flatten()
}

/// Toggle one item in place, then persist the whole list
pub fn store_toggle_item(store: &AppStore, category: usize, index: usize) {
    match store_toggle_in_place(store, category, index) {
        Some(fragment) => {
            log::debug!(
                "[STORE] Toggled {}/{}, {} checked",
                category,
                index,
                store.list().read_untracked().checked_count()
            );
            location::write_hash(&fragment);
        }
        None => log::warn!("[STORE] No item at {}/{}", category, index),
    }
}

/// Flip the "hide checked" filter
pub fn store_toggle_filter(store: &AppStore) {
    store.hide_checked().update(|hide| *hide = !*hide);
}
