use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

mod api;
mod failure_notice;
mod game_runtime;
mod image_fault;
mod routes;
mod status_poller;
mod status_view;

use status_poller::{start_status_polling, PollHandle, PollHooks};
use waraiba_core::GameState;

const CARD_SELECTOR: &str = ".glass-card, .stat-card";
const CARD_STAGGER_SECS: f64 = 0.1;

thread_local! {
    static POLL_HANDLE: RefCell<Option<PollHandle>> = RefCell::new(None);
    static IMAGE_LISTENERS: RefCell<Vec<EventListener>> = RefCell::new(Vec::new());
}

fn main() {
    console_error_panic_hook::set_once();
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };
    init_page(&document);
    EventListener::once(&window, "pagehide", |_event| {
        shutdown_page();
    })
    .forget();
}

fn init_page(document: &Document) {
    let listeners = image_fault::wire_image_fault_reporters(document);
    IMAGE_LISTENERS.with(|slot| {
        *slot.borrow_mut() = listeners;
    });

    stagger_card_entrances(document);

    let state = Rc::new(RefCell::new(GameState::new()));
    game_runtime::install(state.clone());
    let handle = start_status_polling(state, PollHooks::page_defaults(document.clone()));
    POLL_HANDLE.with(|slot| {
        *slot.borrow_mut() = Some(handle);
    });
}

fn shutdown_page() {
    POLL_HANDLE.with(|slot| {
        if let Some(mut handle) = slot.borrow_mut().take() {
            handle.cancel();
        }
    });
    IMAGE_LISTENERS.with(|slot| {
        slot.borrow_mut().clear();
    });
}

fn stagger_card_entrances(document: &Document) {
    let Ok(cards) = document.query_selector_all(CARD_SELECTOR) else {
        return;
    };
    for index in 0..cards.length() {
        let Some(node) = cards.item(index) else {
            continue;
        };
        let Ok(card) = node.dyn_into::<HtmlElement>() else {
            continue;
        };
        let delay = format!("{:.1}s", f64::from(index) * CARD_STAGGER_SECS);
        let _ = card.style().set_property("animation-delay", &delay);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use console_error_panic_hook::set_once as set_panic_hook;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn cards_enter_staggered() {
        set_panic_hook();
        let document = web_sys::window()
            .and_then(|window| window.document())
            .expect("document available");
        let container = document.create_element("div").expect("create container");
        container.set_inner_html(
            "<div class=\"glass-card\"></div>\
             <div class=\"stat-card\"></div>\
             <div class=\"stat-card\"></div>",
        );
        document
            .body()
            .expect("body available")
            .append_child(&container)
            .expect("append container");

        stagger_card_entrances(&document);

        let cards = container
            .query_selector_all(".glass-card, .stat-card")
            .expect("query cards");
        let mut delays = Vec::new();
        for index in 0..cards.length() {
            let card = cards
                .item(index)
                .and_then(|node| node.dyn_into::<HtmlElement>().ok())
                .expect("card element");
            delays.push(card.style().get_property_value("animation-delay").unwrap());
        }
        assert_eq!(delays, vec!["0.0s", "0.1s", "0.2s"]);
        container.remove();
    }

    #[wasm_bindgen_test]
    fn shutdown_clears_the_poll_handle() {
        set_panic_hook();
        let document = web_sys::window()
            .and_then(|window| window.document())
            .expect("document available");
        init_page(&document);
        assert!(POLL_HANDLE.with(|slot| slot.borrow().is_some()));
        shutdown_page();
        assert!(POLL_HANDLE.with(|slot| slot.borrow().is_none()));
    }
}
