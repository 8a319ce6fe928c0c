//! Input Area Component
//!
//! Textarea for pasting a raw JSON list plus the load button.

use leptos::prelude::*;

use crate::config::{INPUT_PLACEHOLDER, LOAD_BUTTON_LABEL};
use crate::location;
use crate::normalize::parse_raw_input;
use crate::store::{store_load_list, use_app_store};

/// Raw JSON input shown while no list is loaded
///
/// On a parse error the text stays in place so the user can fix it.
#[component]
pub fn InputArea() -> impl IntoView {
    let store = use_app_store();
    let (raw_input, set_raw_input) = signal(String::new());

    let load_list = move |_| {
        match parse_raw_input(&raw_input.get_untracked()) {
            Ok(list) => {
                set_raw_input.set(String::new());
                store_load_list(&store, list);
            }
            Err(err) => {
                log::warn!("[APP] {}", err);
                location::show_notice(err.notice());
            }
        }
    };

    view! {
        <div id="input-area" class="input-area">
            <textarea
                id="json-input"
                rows="10"
                placeholder=INPUT_PLACEHOLDER
                prop:value=move || raw_input.get()
                on:input=move |ev| set_raw_input.set(event_target_value(&ev))
            ></textarea>
            <button id="load-list-button" on:click=load_list>
                {LOAD_BUTTON_LABEL}
            </button>
        </div>
    }
}
