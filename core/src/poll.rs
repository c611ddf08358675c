pub const POLL_INTERVAL_MS: u32 = 3000;

pub const FAILURE_NOTICE_THRESHOLD: u32 = 3;
pub const FAILURE_NOTICE_REPEAT_EVERY: u32 = 10;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PollTicket {
    seq: u64,
}

impl PollTicket {
    pub fn seq(self) -> u64 {
        self.seq
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PollOutcome {
    Applied,
    Stale,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FailureSignal {
    Silent,
    RaiseNotice { consecutive: u32 },
}

/// Bookkeeping for the status poll loop: one ticket per tick, at most one
/// request in flight, responses applied in sequence order only.
#[derive(Debug, Default)]
pub struct PollLedger {
    next_seq: u64,
    in_flight: Option<u64>,
    last_applied: Option<u64>,
    consecutive_failures: u32,
}

impl PollLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `None` while a previous request is still outstanding; the
    /// caller skips that tick instead of stacking a second request.
    pub fn begin_tick(&mut self) -> Option<PollTicket> {
        if self.in_flight.is_some() {
            return None;
        }
        self.next_seq += 1;
        self.in_flight = Some(self.next_seq);
        Some(PollTicket { seq: self.next_seq })
    }

    pub fn settle_success(&mut self, ticket: PollTicket) -> PollOutcome {
        self.clear_in_flight(ticket);
        if self
            .last_applied
            .is_some_and(|applied| ticket.seq <= applied)
        {
            return PollOutcome::Stale;
        }
        self.last_applied = Some(ticket.seq);
        self.consecutive_failures = 0;
        PollOutcome::Applied
    }

    pub fn settle_failure(&mut self, ticket: PollTicket) -> FailureSignal {
        self.clear_in_flight(ticket);
        self.consecutive_failures = self.consecutive_failures.saturating_add(1);
        let count = self.consecutive_failures;
        if count < FAILURE_NOTICE_THRESHOLD {
            return FailureSignal::Silent;
        }
        if (count - FAILURE_NOTICE_THRESHOLD) % FAILURE_NOTICE_REPEAT_EVERY == 0 {
            return FailureSignal::RaiseNotice { consecutive: count };
        }
        FailureSignal::Silent
    }

    pub fn in_flight(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn consecutive_failures(&self) -> u32 {
        self.consecutive_failures
    }

    pub fn last_applied_seq(&self) -> Option<u64> {
        self.last_applied
    }

    fn clear_in_flight(&mut self, ticket: PollTicket) {
        if self.in_flight == Some(ticket.seq) {
            self.in_flight = None;
        }
    }
}
