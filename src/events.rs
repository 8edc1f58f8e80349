// 10.0: every edit and every admin login attempt produces an event. used as an audit
// trail for the admin panel. the EventPayload enum lists all event types.

use crate::types::{ChampionId, MatchId, TeamId, Timestamp};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EventId(pub u64);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,
    pub timestamp: Timestamp,
    pub payload: EventPayload,
}

impl Event {
    pub fn new(id: EventId, timestamp: Timestamp, payload: EventPayload) -> Self {
        Self {
            id,
            timestamp,
            payload,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EventPayload {
    // Roster
    TeamCreated { team_id: TeamId, name: String },
    TeamUpdated { team_id: TeamId, name: String, points: i64 },
    TeamDeleted { team_id: TeamId },

    // Schedule
    MatchScheduled { match_id: MatchId, home_team: String, away_team: String },
    MatchDeleted { match_id: MatchId },

    // Site content
    ChampionAdded { champion_id: ChampionId, year: i32, team_name: String },
    ChampionDeleted { champion_id: ChampionId },
    SocialLinkUpdated { platform: String },
    RulesUpdated { length: usize },

    // Access
    AdminLogin,
    AdminLogout,
    LoginRejected,
}

/// Bounded in-memory event log. Oldest events are dropped past `capacity`.
#[derive(Debug)]
pub struct EventLog {
    events: Vec<Event>,
    next_id: u64,
    capacity: usize,
}

impl EventLog {
    pub fn new(capacity: usize) -> Self {
        Self {
            events: Vec::new(),
            next_id: 1,
            capacity,
        }
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn recent(&self, count: usize) -> &[Event] {
        let start = self.events.len().saturating_sub(count);
        &self.events[start..]
    }

    pub fn record(&mut self, timestamp: Timestamp, payload: EventPayload) -> EventId {
        let id = EventId(self.next_id);
        self.next_id += 1;

        tracing::debug!(event_id = id.0, payload = ?payload, "league event");
        self.events.push(Event::new(id, timestamp, payload));

        if self.events.len() > self.capacity {
            let drain_count = self.events.len() - self.capacity;
            self.events.drain(0..drain_count);
        }
        id
    }
}
