use waraiba_core::{is_dashboard_path, DASHBOARD_PATH};

const SESSION_ENDED_MESSAGE: &str = "Admin has ended your game session!";

pub(crate) fn current_pathname() -> Option<String> {
    let window = web_sys::window()?;
    window.location().pathname().ok()
}

pub(crate) fn on_dashboard() -> bool {
    current_pathname().is_some_and(|path| is_dashboard_path(&path))
}

pub(crate) fn alert_session_ended() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let _ = window.alert_with_message(SESSION_ENDED_MESSAGE);
}

pub(crate) fn redirect_to_dashboard() {
    let Some(window) = web_sys::window() else {
        return;
    };
    if window.location().set_href(DASHBOARD_PATH).is_err() {
        gloo::console::warn!("dashboard redirect failed");
    }
}
