pub mod game;
pub mod poll;
pub mod route;
pub mod status;

pub use game::GameState;
pub use poll::{
    FailureSignal, PollLedger, PollOutcome, PollTicket, FAILURE_NOTICE_REPEAT_EVERY,
    FAILURE_NOTICE_THRESHOLD, POLL_INTERVAL_MS,
};
pub use route::{is_dashboard_path, DASHBOARD_PATH};
pub use status::{parse_status, session_end_required, SessionStatus, StatusSnapshot};
