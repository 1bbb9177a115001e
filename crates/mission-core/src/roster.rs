use serde::Serialize;

/// Display name of the factory when no producer record exists yet.
pub const FACTORY_NAME: &str = "SpinTheBloc Factory";

/// One fixed agent identity.
///
/// This table is the single source for agent identities: the default offline
/// record and the UI's color/emoji map (via `GET /api/agents`) both read it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RosterEntry {
    pub id: &'static str,
    pub name: &'static str,
    pub role: &'static str,
    pub model: &'static str,
    pub description: &'static str,
    pub color: &'static str,
    pub emoji: &'static str,
}

/// The known agents, in dashboard display order.
pub const ROSTER: [RosterEntry; 4] = [
    RosterEntry {
        id: "vincent",
        name: "Vincent",
        role: "Front Desk",
        model: "llama3.1",
        description: "Greetings, simple queries, triage",
        color: "#22c55e",
        emoji: "\u{1F4DE}",
    },
    RosterEntry {
        id: "vector",
        name: "Vector",
        role: "Factory Manager",
        model: "qwen2.5:32b",
        description: "Planning, architecture, review",
        color: "#00d4ff",
        emoji: "\u{1F9E0}",
    },
    RosterEntry {
        id: "vivi",
        name: "Vivi",
        role: "Builder",
        model: "qwen2.5-coder:32b",
        description: "Code generation from specs",
        color: "#ff00aa",
        emoji: "\u{2699}\u{FE0F}",
    },
    RosterEntry {
        id: "bigdawg",
        name: "Big Dawg",
        role: "Regional Manager",
        model: "claude-sonnet-4-5",
        description: "Strategy, crisis, brand",
        color: "#8b5cf6",
        emoji: "\u{1F415}",
    },
];
