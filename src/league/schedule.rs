//! Schedule edits.

use super::core::League;
use super::results::LeagueError;
use crate::events::EventPayload;
use crate::schedule::{Match, MatchDraft};
use crate::types::MatchId;

impl League {
    /// Most recent first.
    pub fn schedule(&self) -> Vec<Match> {
        self.repository.list_matches()
    }

    pub fn upcoming(&self) -> Vec<Match> {
        let mut upcoming: Vec<Match> = self.schedule().into_iter().filter(|m| !m.is_played()).collect();
        upcoming.reverse();
        upcoming
    }

    pub fn schedule_match(&mut self, draft: MatchDraft) -> Result<Match, LeagueError> {
        self.require_admin()?;
        draft.validate()?;

        let m = self.repository.create_match(draft)?;
        self.emit_event(EventPayload::MatchScheduled {
            match_id: m.id,
            home_team: m.home_team.clone(),
            away_team: m.away_team.clone(),
        });
        Ok(m)
    }

    pub fn delete_match(&mut self, id: MatchId) -> Result<bool, LeagueError> {
        self.require_admin()?;

        let removed = self.repository.delete_match(id)?;
        if removed {
            self.emit_event(EventPayload::MatchDeleted { match_id: id });
        }
        Ok(removed)
    }
}
