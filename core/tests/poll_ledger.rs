use waraiba_core::{
    FailureSignal, PollLedger, PollOutcome, FAILURE_NOTICE_REPEAT_EVERY, FAILURE_NOTICE_THRESHOLD,
};

#[test]
fn tickets_are_sequential() {
    let mut ledger = PollLedger::new();
    let first = ledger.begin_tick().unwrap();
    assert_eq!(ledger.settle_success(first), PollOutcome::Applied);
    let second = ledger.begin_tick().unwrap();
    assert!(second.seq() > first.seq());
}

#[test]
fn overlapping_tick_is_skipped() {
    let mut ledger = PollLedger::new();
    let ticket = ledger.begin_tick().unwrap();
    assert!(ledger.in_flight());
    assert!(ledger.begin_tick().is_none());
    assert!(ledger.begin_tick().is_none());
    ledger.settle_success(ticket);
    assert!(!ledger.in_flight());
    assert!(ledger.begin_tick().is_some());
}

#[test]
fn replayed_ticket_is_stale() {
    let mut ledger = PollLedger::new();
    let ticket = ledger.begin_tick().unwrap();
    assert_eq!(ledger.settle_success(ticket), PollOutcome::Applied);
    assert_eq!(ledger.settle_success(ticket), PollOutcome::Stale);
    assert_eq!(ledger.last_applied_seq(), Some(ticket.seq()));
}

#[test]
fn failure_raises_notice_at_threshold_then_rate_limits() {
    let mut ledger = PollLedger::new();
    let mut raised = Vec::new();
    for _ in 0..(FAILURE_NOTICE_THRESHOLD + FAILURE_NOTICE_REPEAT_EVERY + 2) {
        let ticket = ledger.begin_tick().unwrap();
        if let FailureSignal::RaiseNotice { consecutive } = ledger.settle_failure(ticket) {
            raised.push(consecutive);
        }
    }
    assert_eq!(
        raised,
        vec![
            FAILURE_NOTICE_THRESHOLD,
            FAILURE_NOTICE_THRESHOLD + FAILURE_NOTICE_REPEAT_EVERY
        ]
    );
}

#[test]
fn success_resets_failure_run() {
    let mut ledger = PollLedger::new();
    for _ in 0..FAILURE_NOTICE_THRESHOLD - 1 {
        let ticket = ledger.begin_tick().unwrap();
        assert_eq!(ledger.settle_failure(ticket), FailureSignal::Silent);
    }
    let ticket = ledger.begin_tick().unwrap();
    assert_eq!(ledger.settle_success(ticket), PollOutcome::Applied);
    assert_eq!(ledger.consecutive_failures(), 0);

    let ticket = ledger.begin_tick().unwrap();
    assert_eq!(ledger.settle_failure(ticket), FailureSignal::Silent);
    assert_eq!(ledger.consecutive_failures(), 1);
}

#[test]
fn polling_survives_long_failure_runs() {
    let mut ledger = PollLedger::new();
    for _ in 0..500 {
        let ticket = ledger
            .begin_tick()
            .expect("ledger must keep issuing tickets through failures");
        ledger.settle_failure(ticket);
    }
    assert_eq!(ledger.consecutive_failures(), 500);
    let ticket = ledger.begin_tick().unwrap();
    assert_eq!(ledger.settle_success(ticket), PollOutcome::Applied);
    assert_eq!(ledger.consecutive_failures(), 0);
}
