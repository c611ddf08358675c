use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::wasm_bindgen;
use wasm_bindgen_futures::spawn_local;

use crate::api;
use crate::status_view;
use waraiba_core::GameState;

thread_local! {
    static GAME_STATE: RefCell<Option<Rc<RefCell<GameState>>>> = RefCell::new(None);
}

pub(crate) fn install(state: Rc<RefCell<GameState>>) {
    GAME_STATE.with(|slot| {
        *slot.borrow_mut() = Some(state);
    });
}

pub(crate) fn shared_state() -> Rc<RefCell<GameState>> {
    GAME_STATE.with(|slot| {
        slot.borrow_mut()
            .get_or_insert_with(|| Rc::new(RefCell::new(GameState::new())))
            .clone()
    })
}

/// Invoked by the game page when a question is answered. Updates the local
/// score immediately; the backend reconciles on the next poll.
#[wasm_bindgen]
pub fn award_points(points: i32) {
    let state = shared_state();
    let score = {
        let mut state = state.borrow_mut();
        state.add_points(i64::from(points));
        state.current_score
    };
    if let Some(document) = web_sys::window().and_then(|window| window.document()) {
        status_view::overwrite_score(&document, score);
    }
    spawn_local(async move {
        if let Err(err) = api::report_points(i64::from(points)).await {
            gloo::console::warn!("score report failed", err);
        }
    });
}

#[wasm_bindgen]
pub fn record_hint() {
    shared_state().borrow_mut().record_hint();
}

#[wasm_bindgen]
pub fn begin_image(image_key: String) {
    shared_state().borrow_mut().begin_image(image_key);
}

#[wasm_bindgen]
pub fn complete_image() {
    let completed = shared_state().borrow_mut().complete_current_image();
    let Some(image_key) = completed else {
        gloo::console::warn!("image completion with no image in progress");
        return;
    };
    gloo::console::log!("image completed", image_key);
    spawn_local(async move {
        if let Err(err) = api::report_image_complete().await {
            gloo::console::warn!("image completion report failed", err);
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn bridge_operations_reach_the_installed_state() {
        let state = Rc::new(RefCell::new(GameState::new()));
        install(state.clone());

        record_hint();
        begin_image("LAUGH/003.jpg".to_string());

        assert_eq!(state.borrow().used_hints, 1);
        assert_eq!(
            state.borrow().current_image.as_deref(),
            Some("LAUGH/003.jpg")
        );
        install(Rc::new(RefCell::new(GameState::new())));
    }

    #[wasm_bindgen_test]
    fn shared_state_self_installs_when_missing() {
        GAME_STATE.with(|slot| {
            slot.borrow_mut().take();
        });
        let state = shared_state();
        state.borrow_mut().add_points(5);
        assert_eq!(shared_state().borrow().current_score, 5);
        install(Rc::new(RefCell::new(GameState::new())));
    }
}
