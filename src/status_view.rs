use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlButtonElement};

use waraiba_core::{SessionStatus, StatusSnapshot};

pub(crate) const STATUS_INDICATOR_ID: &str = "status-indicator";
pub(crate) const START_BUTTON_ID: &str = "start-game-btn";
pub(crate) const SCORE_ID: &str = "current-score";
pub(crate) const WINS_ID: &str = "stat-wins";
pub(crate) const GAMES_PLAYED_ID: &str = "stat-games-played";

const PULSE_CLASS: &str = "pulse";

fn status_glyph(status: SessionStatus) -> &'static str {
    match status {
        SessionStatus::Online => "🟢 Online",
        SessionStatus::Offline => "🔴 Offline",
    }
}

fn status_class(status: SessionStatus) -> &'static str {
    match status {
        SessionStatus::Online => "status-indicator status-online",
        SessionStatus::Offline => "status-indicator status-offline",
    }
}

/// Direct overwrite of the page indicators. Elements the current template
/// does not carry are skipped.
pub(crate) fn apply_status(document: &Document, snapshot: &StatusSnapshot) {
    if let Some(indicator) = document.get_element_by_id(STATUS_INDICATOR_ID) {
        indicator.set_text_content(Some(status_glyph(snapshot.status)));
        indicator.set_class_name(status_class(snapshot.status));
    }
    if let Some(button) = document.get_element_by_id(START_BUTTON_ID) {
        if let Some(button) = button.dyn_ref::<HtmlButtonElement>() {
            button.set_disabled(!snapshot.status.is_online());
        }
        let classes = button.class_list();
        let toggled = if snapshot.status.is_online() {
            classes.add_1(PULSE_CLASS)
        } else {
            classes.remove_1(PULSE_CLASS)
        };
        if toggled.is_err() {
            gloo::console::warn!("pulse class toggle failed");
        }
    }
    set_counter(document, SCORE_ID, Some(snapshot.score));
    set_counter(document, WINS_ID, snapshot.wins.map(i64::from));
    set_counter(document, GAMES_PLAYED_ID, snapshot.games_played.map(i64::from));
}

pub(crate) fn overwrite_score(document: &Document, score: i64) {
    set_counter(document, SCORE_ID, Some(score));
}

fn set_counter(document: &Document, id: &str, value: Option<i64>) {
    let Some(value) = value else {
        return;
    };
    if let Some(element) = document.get_element_by_id(id) {
        element.set_text_content(Some(&value.to_string()));
    }
}
