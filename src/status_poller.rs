use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo::timers::callback::Interval;
use wasm_bindgen_futures::spawn_local;
use web_sys::Document;

use crate::api;
use crate::failure_notice;
use crate::routes;
use crate::status_view;
use waraiba_core::{
    session_end_required, FailureSignal, GameState, PollLedger, PollOutcome, PollTicket,
    StatusSnapshot, POLL_INTERVAL_MS,
};

/// Side effects of a poll tick, injectable so the loop can run against a test
/// harness instead of the live page.
#[derive(Clone)]
pub(crate) struct PollHooks {
    pub(crate) on_snapshot: Rc<dyn Fn(&StatusSnapshot)>,
    pub(crate) on_session_end: Rc<dyn Fn()>,
    pub(crate) on_failure: Rc<dyn Fn(u32)>,
    pub(crate) on_recovered: Rc<dyn Fn()>,
}

impl PollHooks {
    pub(crate) fn page_defaults(document: Document) -> Self {
        let doc_for_snapshot = document.clone();
        let doc_for_failure = document.clone();
        let doc_for_recovered = document;
        Self {
            on_snapshot: Rc::new(move |snapshot| {
                status_view::apply_status(&doc_for_snapshot, snapshot);
            }),
            on_session_end: Rc::new(|| {
                routes::alert_session_ended();
                routes::redirect_to_dashboard();
            }),
            on_failure: Rc::new(move |consecutive| {
                failure_notice::show(&doc_for_failure, consecutive);
            }),
            on_recovered: Rc::new(move || {
                failure_notice::clear(&doc_for_recovered);
            }),
        }
    }
}

pub(crate) struct PollHandle {
    interval: Option<Interval>,
}

impl PollHandle {
    pub(crate) fn cancel(&mut self) {
        self.interval.take();
    }

    #[allow(dead_code)]
    pub(crate) fn is_active(&self) -> bool {
        self.interval.is_some()
    }
}

/// Fixed 3000 ms cadence, no backoff, runs until the handle is cancelled or
/// dropped. The first request fires one interval after start.
pub(crate) fn start_status_polling(state: Rc<RefCell<GameState>>, hooks: PollHooks) -> PollHandle {
    let ledger = Rc::new(RefCell::new(PollLedger::new()));
    let session_ended = Rc::new(Cell::new(false));
    let interval = Interval::new(POLL_INTERVAL_MS, move || {
        poll_tick(&ledger, &state, &hooks, &session_ended);
    });
    PollHandle {
        interval: Some(interval),
    }
}

fn poll_tick(
    ledger: &Rc<RefCell<PollLedger>>,
    state: &Rc<RefCell<GameState>>,
    hooks: &PollHooks,
    session_ended: &Rc<Cell<bool>>,
) {
    let Some(ticket) = ledger.borrow_mut().begin_tick() else {
        gloo::console::log!("status poll still in flight, skipping tick");
        return;
    };
    let ledger = ledger.clone();
    let state = state.clone();
    let hooks = hooks.clone();
    let session_ended = session_ended.clone();
    spawn_local(async move {
        match api::fetch_status().await {
            Ok(snapshot) => apply_poll_success(
                &ledger,
                &state,
                &hooks,
                &session_ended,
                ticket,
                &snapshot,
                routes::on_dashboard(),
            ),
            Err(err) => apply_poll_failure(&ledger, &hooks, ticket, &err),
        }
    });
}

fn apply_poll_success(
    ledger: &Rc<RefCell<PollLedger>>,
    state: &Rc<RefCell<GameState>>,
    hooks: &PollHooks,
    session_ended: &Rc<Cell<bool>>,
    ticket: PollTicket,
    snapshot: &StatusSnapshot,
    on_dashboard: bool,
) {
    if ledger.borrow_mut().settle_success(ticket) == PollOutcome::Stale {
        return;
    }
    (hooks.on_recovered)();
    state.borrow_mut().apply_server_score(snapshot.score);
    (hooks.on_snapshot)(snapshot);
    if session_end_required(snapshot.status, on_dashboard, session_ended.get()) {
        session_ended.set(true);
        (hooks.on_session_end)();
    }
}

fn apply_poll_failure(
    ledger: &Rc<RefCell<PollLedger>>,
    hooks: &PollHooks,
    ticket: PollTicket,
    err: &str,
) {
    gloo::console::warn!("Status check failed:", err.to_string());
    if let FailureSignal::RaiseNotice { consecutive } = ledger.borrow_mut().settle_failure(ticket) {
        (hooks.on_failure)(consecutive);
    }
}
