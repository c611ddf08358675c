use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

pub(crate) const NOTICE_ID: &str = "poll-failure-notice";

/// Single reused banner; the poll ledger rate-limits how often this fires.
pub(crate) fn show(document: &Document, consecutive: u32) {
    let Some(notice) = ensure_notice(document) else {
        return;
    };
    notice.set_text_content(Some(&format!(
        "⚠️ Status updates unavailable ({consecutive} checks failed) — retrying"
    )));
    notice.set_hidden(false);
}

pub(crate) fn clear(document: &Document) {
    let Some(notice) = document.get_element_by_id(NOTICE_ID) else {
        return;
    };
    if let Some(notice) = notice.dyn_ref::<HtmlElement>() {
        notice.set_hidden(true);
    }
}

fn ensure_notice(document: &Document) -> Option<HtmlElement> {
    if let Some(existing) = document.get_element_by_id(NOTICE_ID) {
        return existing.dyn_into::<HtmlElement>().ok();
    }
    let created = document.create_element("div").ok()?;
    created.set_id(NOTICE_ID);
    created.set_class_name(NOTICE_ID);
    let body = document.body()?;
    body.append_child(&created).ok()?;
    created.dyn_into::<HtmlElement>().ok()
}
