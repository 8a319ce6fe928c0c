//! App Configuration
//!
//! Compile-time settings and user-facing texts.

use log::LevelFilter;

/// Marker in front of the encoded list in `location.hash`
pub const FRAGMENT_PREFIX: &str = "#data=";

/// Offline cache worker script, relative to the page
pub const SERVICE_WORKER_PATH: &str = "sw.js";

#[cfg(debug_assertions)]
pub const LOG_LEVEL: LevelFilter = LevelFilter::Debug;
#[cfg(not(debug_assertions))]
pub const LOG_LEVEL: LevelFilter = LevelFilter::Info;

pub const INPUT_PARSE_NOTICE: &str =
    "Errore nel formato JSON. Assicurati che sia corretto.\nEs: {\"Frutta\": [\"Mela\", \"Banana\"]}";

pub const PERSISTED_STATE_NOTICE: &str =
    "Non è stato possibile caricare la lista dall'URL. Potrebbe essere corrotta.";

pub const EMPTY_LIST_MESSAGE: &str = "La lista della spesa è vuota o non ancora caricata.";

pub const INPUT_PLACEHOLDER: &str = "{\"Frutta\": [\"Mela\", \"Banana\"], \"Verdura\": [\"Insalata\"]}";

pub const LOAD_BUTTON_LABEL: &str = "Carica lista";

pub const HIDE_CHECKED_LABEL: &str = "Nascondi quelli già acquistati";

pub const SHOW_ALL_LABEL: &str = "Mostra tutti";

/// Label of the filter button for the current filter state
pub fn filter_button_label(hide_checked: bool) -> &'static str {
    if hide_checked {
        SHOW_ALL_LABEL
    } else {
        HIDE_CHECKED_LABEL
    }
}
