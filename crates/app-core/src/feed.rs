//! Mocked data-feed payloads consumed by the side widgets.
//!
//! These stand in for the external REST collaborators; the scene core never
//! reads them.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgentState {
    Running,
    Stopped,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AgentStatus {
    pub name: String,
    pub status: AgentState,
    pub pid: u32,
    pub uptime: u64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub author: String,
    pub text: String,
    /// RFC 3339 timestamp, as delivered by the upstream feed.
    pub timestamp: String,
}

pub fn agent_statuses() -> Vec<AgentStatus> {
    let status = |name: &str, status, pid, uptime| AgentStatus {
        name: name.to_owned(),
        status,
        pid,
        uptime,
    };
    vec![
        status("Trading Agent", AgentState::Running, 1234, 45231),
        status("Risk Manager", AgentState::Running, 2345, 38912),
        status("Model Router", AgentState::Stopped, 0, 0),
        status("Report Generator", AgentState::Running, 3456, 21234),
    ]
}

pub fn conversation() -> Vec<ChatMessage> {
    let msg = |author: &str, text: &str, timestamp: &str| ChatMessage {
        author: author.to_owned(),
        text: text.to_owned(),
        timestamp: timestamp.to_owned(),
    };
    vec![
        msg(
            "Alejandro",
            "Hola, ¿cómo va el dashboard?",
            "2026-02-04T01:00:00Z",
        ),
        msg(
            "Bot",
            "Todo listo para agregar la sección.",
            "2026-02-04T01:05:00Z",
        ),
        msg("Alejandro", "Excelente, gracias!", "2026-02-04T01:10:00Z"),
    ]
}

pub fn agent_statuses_json() -> serde_json::Result<String> {
    serde_json::to_string(&agent_statuses())
}

pub fn conversation_json() -> serde_json::Result<String> {
    serde_json::to_string(&conversation())
}
