//! Roster edits and the standings table.

use super::core::League;
use super::results::LeagueError;
use crate::events::EventPayload;
use crate::standings::{compute_standings, RankedEntry};
use crate::team::{TeamDraft, TeamRecord};
use crate::types::{normalize_logo, TeamId};

impl League {
    /// Current table, recomputed from the repository on every call.
    pub fn standings(&self) -> Vec<RankedEntry> {
        let teams = self.repository.list_teams();
        tracing::debug!(teams = teams.len(), "computing standings");
        compute_standings(&teams)
    }

    pub fn teams(&self) -> Vec<TeamRecord> {
        self.repository.list_teams()
    }

    pub fn team(&self, id: TeamId) -> Option<TeamRecord> {
        self.repository.list_teams().into_iter().find(|t| t.id == id)
    }

    pub fn create_team(&mut self, draft: TeamDraft) -> Result<TeamRecord, LeagueError> {
        self.require_admin()?;
        draft.validate()?;

        let team = self.repository.create_team(draft)?;
        self.emit_event(EventPayload::TeamCreated {
            team_id: team.id,
            name: team.name.clone(),
        });
        Ok(team)
    }

    pub fn update_team(&mut self, mut team: TeamRecord) -> Result<TeamRecord, LeagueError> {
        self.require_admin()?;
        team.validate()?;

        team.name = team.name.trim().to_string();
        team.logo_ref = normalize_logo(team.logo_ref);

        let team = self.repository.update_team(team)?;
        self.emit_event(EventPayload::TeamUpdated {
            team_id: team.id,
            name: team.name.clone(),
            points: team.points,
        });
        Ok(team)
    }

    /// Returns whether a team was removed. Matches keep the team's name.
    pub fn delete_team(&mut self, id: TeamId) -> Result<bool, LeagueError> {
        self.require_admin()?;

        let removed = self.repository.delete_team(id)?;
        if removed {
            self.emit_event(EventPayload::TeamDeleted { team_id: id });
        }
        Ok(removed)
    }
}
