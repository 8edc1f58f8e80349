// 12.1 league/core.rs: League struct. repository, access mode, clock, event log.

use super::results::LeagueError;
use crate::admin::{AccessMode, CredentialCheck, TokenCredential};
use crate::config::LeagueConfig;
use crate::events::{Event, EventLog, EventPayload};
use crate::schedule::MatchDraft;
use crate::seed;
use crate::store::{LeagueRepository, LeagueSnapshot, MemoryStore, StoreError};
use crate::team::TeamDraft;
use crate::types::Timestamp;

pub struct League {
    pub(super) config: LeagueConfig,
    pub(super) repository: Box<dyn LeagueRepository + Send>,
    pub(super) credentials: Box<dyn CredentialCheck + Send>,
    pub(super) editing_enabled: bool,
    pub(super) access: AccessMode,
    pub(super) events: EventLog,
    pub(super) current_time: Timestamp,
}

impl League {
    pub fn new(
        config: LeagueConfig,
        repository: Box<dyn LeagueRepository + Send>,
    ) -> Result<Self, LeagueError> {
        config.validate()?;

        let credentials = TokenCredential::new(config.admin_token.clone());
        let editing_enabled = credentials.is_configured();

        let mut league = Self {
            events: EventLog::new(config.max_events),
            config,
            repository,
            credentials: Box::new(credentials),
            editing_enabled,
            access: AccessMode::Viewer,
            current_time: Timestamp::now(),
        };

        if league.config.seed_on_empty {
            league.seed_if_empty()?;
        }

        tracing::info!(
            league = %league.config.short_name,
            teams = league.repository.list_teams().len(),
            editing = league.editing_enabled,
            "league ready"
        );
        Ok(league)
    }

    pub fn in_memory(config: LeagueConfig) -> Result<Self, LeagueError> {
        Self::new(config, Box::new(MemoryStore::new()))
    }

    /// Swap the credential check, e.g. for one backed by the host's identity provider.
    pub fn with_credentials(mut self, credentials: Box<dyn CredentialCheck + Send>) -> Self {
        self.credentials = credentials;
        self.editing_enabled = true;
        self.access = AccessMode::Viewer;
        self
    }

    // seeding goes straight to the repository: it is not an admin edit
    fn seed_if_empty(&mut self) -> Result<(), LeagueError> {
        let empty = self.repository.list_teams().is_empty() && self.repository.list_matches().is_empty();
        if !empty {
            return Ok(());
        }

        for team in seed::sample_teams() {
            let draft = TeamDraft::named(team.name)
                .record(team.wins, team.losses, team.points)
                .goals(team.goals_for, team.goals_against);
            self.repository.create_team(draft)?;
        }
        for m in seed::sample_matches() {
            let score = m.score();
            let mut draft = MatchDraft::new(m.date, m.time, m.home_team, m.away_team);
            if let Some((home, away)) = score {
                draft = draft.with_score(home, away);
            }
            self.repository.create_match(draft)?;
        }
        tracing::info!("seeded empty league with sample data");
        Ok(())
    }

    pub fn config(&self) -> &LeagueConfig {
        &self.config
    }

    pub fn repository(&self) -> &dyn LeagueRepository {
        self.repository.as_ref()
    }

    pub fn set_time(&mut self, timestamp: Timestamp) {
        self.current_time = timestamp;
    }

    pub fn time(&self) -> Timestamp {
        self.current_time
    }

    pub fn advance_time(&mut self, millis: i64) {
        self.current_time = Timestamp::from_millis(self.current_time.as_millis().saturating_add(millis));
    }

    pub fn access_mode(&self) -> AccessMode {
        self.access
    }

    pub fn is_admin(&self) -> bool {
        self.access.can_edit()
    }

    pub fn login(&mut self, secret: &str) -> Result<(), LeagueError> {
        if !self.editing_enabled {
            return Err(LeagueError::EditingDisabled);
        }
        if !self.credentials.verify(secret) {
            tracing::warn!(league = %self.config.short_name, "rejected admin login");
            self.emit_event(EventPayload::LoginRejected);
            return Err(LeagueError::InvalidCredentials);
        }

        self.access = AccessMode::Admin;
        tracing::info!(league = %self.config.short_name, "admin mode entered");
        self.emit_event(EventPayload::AdminLogin);
        Ok(())
    }

    // logging out of viewer mode is a no-op and records nothing
    pub fn logout(&mut self) {
        if self.access == AccessMode::Admin {
            self.access = AccessMode::Viewer;
            tracing::info!(league = %self.config.short_name, "admin mode left");
            self.emit_event(EventPayload::AdminLogout);
        }
    }

    pub fn snapshot(&self) -> LeagueSnapshot {
        self.repository.snapshot()
    }

    /// JSON blob in the local-storage shape; `MemoryStore::from_json` reads it back.
    pub fn export_json(&self) -> Result<String, LeagueError> {
        serde_json::to_string(&self.snapshot())
            .map_err(|e| LeagueError::Store(StoreError::Corrupt(e.to_string())))
    }

    pub fn events(&self) -> &[Event] {
        self.events.events()
    }

    pub fn recent_events(&self, count: usize) -> &[Event] {
        self.events.recent(count)
    }

    pub(super) fn require_admin(&self) -> Result<(), LeagueError> {
        if self.access.can_edit() {
            Ok(())
        } else {
            Err(LeagueError::Unauthorized)
        }
    }

    pub(super) fn emit_event(&mut self, payload: EventPayload) {
        self.events.record(self.current_time, payload);
    }
}

impl std::fmt::Debug for League {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("League")
            .field("league", &self.config.short_name)
            .field("access", &self.access)
            .field("editing_enabled", &self.editing_enabled)
            .field("events", &self.events.events().len())
            .field("current_time", &self.current_time)
            .finish()
    }
}
