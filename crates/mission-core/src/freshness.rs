//! The staleness policy: classify a cached record by age and derive the
//! view the dashboard should see. Everything here is pure — the caller
//! supplies `now`, and the stored record is never written back.

use std::time::Duration;

use chrono::{DateTime, SecondsFormat, Utc};

use crate::roster::{FACTORY_NAME, ROSTER};
use crate::status::{
    AgentStatus, AgentView, FactoryInfo, FactoryMetrics, StatusRecord, StatusResponse,
};

/// Default freshness threshold: records older than this render as stale.
pub const STALE_AFTER: Duration = Duration::from_secs(600);

/// True when the record's age strictly exceeds the threshold. An age of
/// exactly `stale_after` is fresh, as is a future-dated record.
pub fn is_stale(recorded_at: DateTime<Utc>, now: DateTime<Utc>, stale_after: Duration) -> bool {
    match (now - recorded_at).to_std() {
        Ok(age) => age > stale_after,
        Err(_) => false,
    }
}

/// The deterministic default returned before the producer's first write:
/// the fixed roster, everything offline, counters zeroed.
pub fn offline_record(now: DateTime<Utc>) -> StatusResponse {
    let agents: Vec<AgentView> = ROSTER
        .iter()
        .map(|entry| AgentView {
            id: entry.id.to_string(),
            name: entry.name.to_string(),
            role: entry.role.to_string(),
            model: entry.model.to_string(),
            description: entry.description.to_string(),
            color: entry.color.to_string(),
            status: AgentStatus::Offline,
            current_task: None,
            last_active: None,
            sessions_count: 0,
            tasks_completed: 0,
            tokens_used: 0,
        })
        .collect();

    StatusResponse {
        record: StatusRecord {
            timestamp: now,
            factory: FactoryInfo {
                name: FACTORY_NAME.to_string(),
                status: "awaiting-connection".to_string(),
                online_agents: 0,
                busy_agents: 0,
                total_agents: ROSTER.len() as u32,
            },
            agents,
            activities: Vec::new(),
            metrics: FactoryMetrics::default(),
            tasks: Vec::new(),
        },
        stale_warning: None,
        message: Some("Waiting for factory to connect...".to_string()),
    }
}

/// Rewrite a record into its stale view: factory marked `stale` with zero
/// online agents, every agent forced `offline`, and a warning carrying the
/// original timestamp. Everything else passes through untouched.
pub fn mark_stale(mut record: StatusRecord) -> StatusResponse {
    let stale_warning = format!(
        "Last update: {}",
        record
            .timestamp
            .to_rfc3339_opts(SecondsFormat::AutoSi, true)
    );
    record.factory.status = "stale".to_string();
    record.factory.online_agents = 0;
    for agent in &mut record.agents {
        agent.status = AgentStatus::Offline;
    }
    StatusResponse {
        record,
        stale_warning: Some(stale_warning),
        message: None,
    }
}

/// The full read-side branch: absent record → offline default, stale record
/// → stale view, otherwise passthrough.
pub fn resolve(
    record: Option<StatusRecord>,
    now: DateTime<Utc>,
    stale_after: Duration,
) -> StatusResponse {
    match record {
        None => offline_record(now),
        Some(r) if is_stale(r.timestamp, now, stale_after) => mark_stale(r),
        Some(r) => r.into(),
    }
}
