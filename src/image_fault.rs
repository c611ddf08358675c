use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlImageElement};

const ERROR_MESSAGE_CLASS: &str = "image-error-message";
const ERROR_MESSAGE_HTML: &str = "\
<p>❌ Failed to load image</p>\
<p style=\"font-size: 0.9rem; color: var(--secondary);\">\
Please try refreshing the page\
</p>";

/// Terminal, user-facing degradation: the image stays in the tree at half
/// opacity with a danger border, and a notice lands right after it. Not
/// idempotent; every call inserts another notice.
pub(crate) fn report_image_failure(document: &Document, img: &HtmlImageElement) {
    gloo::console::error!("Failed to load image:", img.src());
    let Some(parent) = img.parent_node() else {
        return;
    };
    let Ok(notice) = document.create_element("div") else {
        return;
    };
    notice.set_class_name(ERROR_MESSAGE_CLASS);
    notice.set_inner_html(ERROR_MESSAGE_HTML);
    if parent
        .insert_before(&notice, img.next_sibling().as_ref())
        .is_err()
    {
        gloo::console::warn!("image failure notice insert failed", img.src());
        return;
    }
    let style = img.style();
    let _ = style.set_property("opacity", "0.5");
    let _ = style.set_property("border", "2px solid var(--danger)");
}

pub(crate) fn wire_image_fault_reporters(document: &Document) -> Vec<EventListener> {
    let mut listeners = Vec::new();
    let Ok(images) = document.query_selector_all("img") else {
        return listeners;
    };
    for index in 0..images.length() {
        let Some(node) = images.item(index) else {
            continue;
        };
        let Ok(img) = node.dyn_into::<HtmlImageElement>() else {
            continue;
        };
        let document = document.clone();
        let target = img.clone();
        listeners.push(EventListener::new(&img, "error", move |_event| {
            report_image_failure(&document, &target);
        }));
    }
    listeners
}
