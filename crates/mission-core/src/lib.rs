pub mod freshness;
pub mod roster;
pub mod status;

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_helpers {
    use chrono::{DateTime, Utc};

    use crate::status::{
        ActivityEvent, AgentStatus, AgentView, FactoryInfo, FactoryMetrics, QueuedTask,
        StatusRecord, TaskStatus,
    };

    /// Create a test agent with the given id, reported online.
    pub fn make_agent(id: &str) -> AgentView {
        AgentView {
            id: id.to_string(),
            name: id.to_string(),
            role: "Builder".to_string(),
            model: "test-model".to_string(),
            description: "Test agent".to_string(),
            color: "#00d4ff".to_string(),
            status: AgentStatus::Online,
            current_task: None,
            last_active: None,
            sessions_count: 0,
            tasks_completed: 0,
            tokens_used: 0,
        }
    }

    /// Create a producer-shaped record timestamped at `recorded_at` with two
    /// online agents, one activity, and one queued task.
    pub fn make_record(recorded_at: DateTime<Utc>) -> StatusRecord {
        StatusRecord {
            timestamp: recorded_at,
            factory: FactoryInfo {
                name: "Test Factory".to_string(),
                status: "operational".to_string(),
                online_agents: 2,
                busy_agents: 1,
                total_agents: 4,
            },
            agents: vec![make_agent("vincent"), make_agent("vector")],
            activities: vec![ActivityEvent {
                id: "act-1".to_string(),
                timestamp: recorded_at,
                agent: "Vincent".to_string(),
                action: "Answered a query".to_string(),
                details: "Routed to Vector".to_string(),
                kind: None,
            }],
            metrics: FactoryMetrics::default(),
            tasks: vec![QueuedTask {
                id: "task-1".to_string(),
                title: "Ship the widget".to_string(),
                assigned_to: "Vivi".to_string(),
                status: TaskStatus::Queued,
            }],
        }
    }
}
