use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Operational state of a single agent as reported by the producer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgentStatus {
    Online,
    Busy,
    Idle,
    Offline,
}

/// Lifecycle state of a task in the active queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    InProgress,
    Queued,
    Completed,
    Failed,
}

/// Aggregate factory descriptor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FactoryInfo {
    pub name: String,
    /// Free-form producer string, e.g. "operational". The reader only ever
    /// writes "awaiting-connection" and "stale" here, on derived views.
    pub status: String,
    pub online_agents: u32,
    pub busy_agents: u32,
    pub total_agents: u32,
}

/// One agent as displayed on the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentView {
    pub id: String,
    pub name: String,
    pub role: String,
    pub model: String,
    pub description: String,
    pub color: String,
    pub status: AgentStatus,
    #[serde(default)]
    pub current_task: Option<String>,
    #[serde(default)]
    pub last_active: Option<DateTime<Utc>>,
    #[serde(default)]
    pub sessions_count: u64,
    #[serde(default)]
    pub tasks_completed: u64,
    #[serde(default)]
    pub tokens_used: u64,
}

/// One entry in the live activity feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityEvent {
    pub id: String,
    pub timestamp: DateTime<Utc>,
    /// Display name of the agent, not its id.
    pub agent: String,
    pub action: String,
    #[serde(default)]
    pub details: String,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

/// Aggregate counters plus derived display metrics.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FactoryMetrics {
    pub total_sessions: u64,
    pub active_today: u64,
    pub tasks_completed: u64,
    pub token_savings: f64,
    pub token_savings_change: f64,
    pub throughput: f64,
    pub success_rate: f64,
    pub success_rate_change: f64,
}

/// One task in the active queue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueuedTask {
    pub id: String,
    pub title: String,
    pub assigned_to: String,
    pub status: TaskStatus,
}

/// The cached value written wholesale by the external producer.
///
/// Trailing collections and metrics are lenient: a producer that omits them
/// still deserializes, with empty/zeroed defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusRecord {
    pub timestamp: DateTime<Utc>,
    pub factory: FactoryInfo,
    pub agents: Vec<AgentView>,
    #[serde(default)]
    pub activities: Vec<ActivityEvent>,
    #[serde(default)]
    pub metrics: FactoryMetrics,
    #[serde(default)]
    pub tasks: Vec<QueuedTask>,
}

/// What `GET /api/status` returns: the record, plus at most one of the two
/// view annotations (`staleWarning` on the stale view, `message` on the
/// default offline record).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusResponse {
    #[serde(flatten)]
    pub record: StatusRecord,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stale_warning: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl From<StatusRecord> for StatusResponse {
    fn from(record: StatusRecord) -> Self {
        Self {
            record,
            stale_warning: None,
            message: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::make_record;
    use chrono::TimeZone;

    #[test]
    fn record_serializes_camel_case() {
        let recorded_at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let json = serde_json::to_value(make_record(recorded_at)).unwrap();
        assert_eq!(json["timestamp"], "2024-01-01T00:00:00Z");
        assert_eq!(json["factory"]["onlineAgents"], 2);
        assert_eq!(json["factory"]["busyAgents"], 1);
        assert_eq!(json["agents"][0]["currentTask"], serde_json::Value::Null);
        assert_eq!(json["tasks"][0]["assignedTo"], "Vivi");
        assert_eq!(json["metrics"]["tokenSavings"], 0.0);
    }

    #[test]
    fn agent_status_uses_lowercase_wire_names() {
        assert_eq!(
            serde_json::to_string(&AgentStatus::Offline).unwrap(),
            "\"offline\""
        );
        let parsed: AgentStatus = serde_json::from_str("\"busy\"").unwrap();
        assert_eq!(parsed, AgentStatus::Busy);
    }

    #[test]
    fn task_status_uses_kebab_wire_names() {
        assert_eq!(
            serde_json::to_string(&TaskStatus::InProgress).unwrap(),
            "\"in-progress\""
        );
        let parsed: TaskStatus = serde_json::from_str("\"failed\"").unwrap();
        assert_eq!(parsed, TaskStatus::Failed);
    }

    #[test]
    fn unknown_status_rejected() {
        assert!(serde_json::from_str::<AgentStatus>("\"sleeping\"").is_err());
        assert!(serde_json::from_str::<TaskStatus>("\"paused\"").is_err());
    }

    #[test]
    fn record_roundtrips() {
        let recorded_at = Utc.with_ymd_and_hms(2024, 1, 1, 12, 30, 0).unwrap();
        let record = make_record(recorded_at);
        let json = serde_json::to_string(&record).unwrap();
        let back: StatusRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, back);
    }

    #[test]
    fn sparse_producer_payload_accepted() {
        // An early producer that only writes the first page variant's shape.
        let json = r##"{
            "timestamp": "2024-01-01T00:00:00Z",
            "factory": {
                "name": "SpinTheBloc Factory",
                "status": "operational",
                "onlineAgents": 1,
                "busyAgents": 0,
                "totalAgents": 4
            },
            "agents": [{
                "id": "vincent",
                "name": "Vincent",
                "role": "Front Desk",
                "model": "llama3.1",
                "description": "Greetings, simple queries, triage",
                "color": "#22c55e",
                "status": "online",
                "sessionsCount": 7
            }]
        }"##;
        let record: StatusRecord = serde_json::from_str(json).unwrap();
        assert!(record.activities.is_empty());
        assert!(record.tasks.is_empty());
        assert_eq!(record.metrics, FactoryMetrics::default());
        let agent = &record.agents[0];
        assert_eq!(agent.sessions_count, 7);
        assert_eq!(agent.tasks_completed, 0);
        assert_eq!(agent.tokens_used, 0);
        assert!(agent.current_task.is_none());
        assert!(agent.last_active.is_none());
    }

    #[test]
    fn response_annotations_omitted_when_absent() {
        let recorded_at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let response = StatusResponse::from(make_record(recorded_at));
        let json = serde_json::to_value(&response).unwrap();
        assert!(json.get("staleWarning").is_none());
        assert!(json.get("message").is_none());
        // Flattened record fields sit at the top level.
        assert!(json.get("factory").is_some());
        assert!(json.get("agents").is_some());
    }

    #[test]
    fn activity_type_field_renamed() {
        let json = r#"{
            "id": "act-9",
            "timestamp": "2024-01-01T00:00:00Z",
            "agent": "Vector",
            "action": "Planned a build",
            "details": "",
            "type": "planning"
        }"#;
        let activity: ActivityEvent = serde_json::from_str(json).unwrap();
        assert_eq!(activity.kind.as_deref(), Some("planning"));
        let out = serde_json::to_value(&activity).unwrap();
        assert_eq!(out["type"], "planning");
    }
}
