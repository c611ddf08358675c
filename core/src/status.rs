use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionStatus {
    Online,
    Offline,
}

impl SessionStatus {
    pub fn is_online(self) -> bool {
        matches!(self, SessionStatus::Online)
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct StatusSnapshot {
    pub status: SessionStatus,
    pub score: i64,
    #[serde(default)]
    pub wins: Option<u32>,
    #[serde(default)]
    pub games_played: Option<u32>,
}

pub fn parse_status(raw: &str) -> Option<StatusSnapshot> {
    serde_json::from_str(raw).ok()
}

/// The session-end interruption fires at most once per page lifetime, and
/// never while the dashboard is already showing.
pub fn session_end_required(status: SessionStatus, on_dashboard: bool, already_ended: bool) -> bool {
    status == SessionStatus::Offline && !on_dashboard && !already_ended
}
