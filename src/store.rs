// 8.0 store.rs: persistence seam. the league talks to a LeagueRepository and never
// to a concrete backend. MemoryStore is the in-process implementation and also
// produces/consumes the JSON snapshot a browser front end keeps in local storage.

use crate::champions::{sort_champions, Champion, ChampionDraft};
use crate::content::{platform_key, SocialLink, DEFAULT_RULES};
use crate::schedule::{sort_schedule, Match, MatchDraft};
use crate::seed;
use crate::team::{TeamDraft, TeamRecord};
use crate::types::{normalize_logo, ChampionId, MatchId, TeamId};
use serde::{Deserialize, Serialize};

// Any backend that can hold league content: in-memory, a REST client, a database.
// Drafts arrive validated; the repository only assigns ids and stores.
pub trait LeagueRepository {
    fn list_teams(&self) -> Vec<TeamRecord>;
    fn create_team(&mut self, draft: TeamDraft) -> Result<TeamRecord, StoreError>;
    fn update_team(&mut self, team: TeamRecord) -> Result<TeamRecord, StoreError>;
    // true if a row was removed. deleting a missing id is not an error.
    fn delete_team(&mut self, id: TeamId) -> Result<bool, StoreError>;

    // most recent first
    fn list_matches(&self) -> Vec<Match>;
    fn create_match(&mut self, draft: MatchDraft) -> Result<Match, StoreError>;
    fn delete_match(&mut self, id: MatchId) -> Result<bool, StoreError>;

    // latest year first
    fn list_champions(&self) -> Vec<Champion>;
    fn create_champion(&mut self, draft: ChampionDraft) -> Result<Champion, StoreError>;
    fn delete_champion(&mut self, id: ChampionId) -> Result<bool, StoreError>;

    fn list_socials(&self) -> Vec<SocialLink>;
    // upsert keyed by platform
    fn update_social(&mut self, link: SocialLink) -> Result<SocialLink, StoreError>;

    fn rules(&self) -> String;
    fn set_rules(&mut self, rules: String) -> Result<(), StoreError>;

    fn snapshot(&self) -> LeagueSnapshot {
        LeagueSnapshot {
            teams: self.list_teams(),
            matches: self.list_matches(),
            rules: self.rules(),
            champions: self.list_champions(),
            socials: self.list_socials(),
        }
    }
}

/// Everything the site persists, in the shape the front end stores it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeagueSnapshot {
    pub teams: Vec<TeamRecord>,
    pub matches: Vec<Match>,
    pub rules: String,
    #[serde(default)]
    pub champions: Vec<Champion>,
    #[serde(default)]
    pub socials: Vec<SocialLink>,
}

// loading side of the snapshot: every field may be missing or null
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct StoredSnapshot {
    teams: Option<Vec<TeamRecord>>,
    matches: Option<Vec<Match>>,
    rules: Option<String>,
    champions: Option<Vec<Champion>>,
    socials: Option<Vec<SocialLink>>,
}

#[derive(Debug, Clone)]
pub struct MemoryStore {
    teams: Vec<TeamRecord>,
    matches: Vec<Match>,
    champions: Vec<Champion>,
    socials: Vec<SocialLink>,
    rules: String,
    next_team_id: u64,
    next_match_id: u64,
    next_champion_id: u64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::with_contents(LeagueSnapshot {
            teams: Vec::new(),
            matches: Vec::new(),
            rules: DEFAULT_RULES.to_string(),
            champions: Vec::new(),
            socials: Vec::new(),
        })
    }

    /// Sample league with the bundled rules.
    pub fn seeded() -> Self {
        Self::with_contents(LeagueSnapshot {
            teams: seed::sample_teams(),
            matches: seed::sample_matches(),
            rules: DEFAULT_RULES.to_string(),
            champions: Vec::new(),
            socials: Vec::new(),
        })
    }

    /// Stored data may carry any id; one at `u64::MAX` leaves no room for the next.
    pub fn from_snapshot(snapshot: LeagueSnapshot) -> Result<Self, StoreError> {
        check_id_room("team", snapshot.teams.iter().map(|t| t.id.0))?;
        check_id_room("match", snapshot.matches.iter().map(|m| m.id.0))?;
        check_id_room("champion", snapshot.champions.iter().map(|c| c.id.0))?;
        Ok(Self::with_contents(snapshot))
    }

    fn with_contents(snapshot: LeagueSnapshot) -> Self {
        // ids continue after the highest one seen so deleted ids are never reused
        let next_team_id = next_after(snapshot.teams.iter().map(|t| t.id.0));
        let next_match_id = next_after(snapshot.matches.iter().map(|m| m.id.0));
        let next_champion_id = next_after(snapshot.champions.iter().map(|c| c.id.0));

        Self {
            teams: snapshot.teams,
            matches: snapshot.matches,
            champions: snapshot.champions,
            socials: snapshot.socials,
            rules: snapshot.rules,
            next_team_id,
            next_match_id,
            next_champion_id,
        }
    }

    // 8.1: missing teams/matches fall back to the sample league, missing or blank
    // rules to the bundled text. an empty list is kept as-is.
    pub fn from_json(json: &str) -> Result<Self, StoreError> {
        let stored: StoredSnapshot =
            serde_json::from_str(json).map_err(|e| StoreError::Corrupt(e.to_string()))?;

        let mut teams = stored.teams.unwrap_or_else(|| {
            tracing::warn!("snapshot has no teams, using sample league");
            seed::sample_teams()
        });
        let mut matches = stored.matches.unwrap_or_else(|| {
            tracing::warn!("snapshot has no matches, using sample schedule");
            seed::sample_matches()
        });
        let mut champions = stored.champions.unwrap_or_default();

        // older backends wrote "" for a missing logo
        for team in &mut teams {
            team.logo_ref = normalize_logo(team.logo_ref.take());
        }
        for m in &mut matches {
            m.home_team_logo = normalize_logo(m.home_team_logo.take());
            m.away_team_logo = normalize_logo(m.away_team_logo.take());
        }
        for champion in &mut champions {
            champion.logo = normalize_logo(champion.logo.take());
        }

        let rules = match stored.rules {
            Some(rules) if !rules.is_empty() => rules,
            _ => {
                tracing::warn!("snapshot has no rules, using bundled rules");
                DEFAULT_RULES.to_string()
            }
        };

        Self::from_snapshot(LeagueSnapshot {
            teams,
            matches,
            rules,
            champions,
            socials: stored.socials.unwrap_or_default(),
        })
    }

    pub fn to_json(&self) -> Result<String, StoreError> {
        serde_json::to_string(&self.snapshot()).map_err(|e| StoreError::Corrupt(e.to_string()))
    }

    /// An empty league is never written back, so a fresh load reseeds it.
    pub fn should_persist(&self) -> bool {
        !self.teams.is_empty() || !self.matches.is_empty()
    }
}

fn next_after(ids: impl Iterator<Item = u64>) -> u64 {
    ids.max().map_or(1, |id| id.saturating_add(1))
}

fn check_id_room(kind: &str, ids: impl Iterator<Item = u64>) -> Result<(), StoreError> {
    match ids.max() {
        Some(u64::MAX) => Err(StoreError::Corrupt(format!("{} id {} is out of range", kind, u64::MAX))),
        _ => Ok(()),
    }
}

// hands out `next` and advances it; fails rather than wrap or reuse an id
fn take_id(next: &mut u64) -> Result<u64, StoreError> {
    let id = *next;
    *next = id.checked_add(1).ok_or(StoreError::IdsExhausted)?;
    Ok(id)
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl LeagueRepository for MemoryStore {
    fn list_teams(&self) -> Vec<TeamRecord> {
        self.teams.clone()
    }

    fn create_team(&mut self, draft: TeamDraft) -> Result<TeamRecord, StoreError> {
        let record = draft.into_record(TeamId(take_id(&mut self.next_team_id)?));
        self.teams.push(record.clone());
        Ok(record)
    }

    fn update_team(&mut self, team: TeamRecord) -> Result<TeamRecord, StoreError> {
        let slot = self
            .teams
            .iter_mut()
            .find(|t| t.id == team.id)
            .ok_or(StoreError::TeamNotFound(team.id))?;
        *slot = team.clone();
        Ok(team)
    }

    fn delete_team(&mut self, id: TeamId) -> Result<bool, StoreError> {
        let before = self.teams.len();
        self.teams.retain(|t| t.id != id);
        Ok(self.teams.len() != before)
    }

    fn list_matches(&self) -> Vec<Match> {
        let mut matches = self.matches.clone();
        sort_schedule(&mut matches);
        matches
    }

    fn create_match(&mut self, draft: MatchDraft) -> Result<Match, StoreError> {
        let m = draft.into_match(MatchId(take_id(&mut self.next_match_id)?));
        self.matches.push(m.clone());
        Ok(m)
    }

    fn delete_match(&mut self, id: MatchId) -> Result<bool, StoreError> {
        let before = self.matches.len();
        self.matches.retain(|m| m.id != id);
        Ok(self.matches.len() != before)
    }

    fn list_champions(&self) -> Vec<Champion> {
        let mut champions = self.champions.clone();
        sort_champions(&mut champions);
        champions
    }

    fn create_champion(&mut self, draft: ChampionDraft) -> Result<Champion, StoreError> {
        let champion = draft.into_champion(ChampionId(take_id(&mut self.next_champion_id)?));
        self.champions.push(champion.clone());
        Ok(champion)
    }

    fn delete_champion(&mut self, id: ChampionId) -> Result<bool, StoreError> {
        let before = self.champions.len();
        self.champions.retain(|c| c.id != id);
        Ok(self.champions.len() != before)
    }

    fn list_socials(&self) -> Vec<SocialLink> {
        self.socials.clone()
    }

    fn update_social(&mut self, link: SocialLink) -> Result<SocialLink, StoreError> {
        let key = platform_key(&link.platform);
        if key.is_empty() {
            return Err(StoreError::EmptyPlatform);
        }
        let link = SocialLink::new(key, link.url.trim());

        match self.socials.iter_mut().find(|s| s.platform == link.platform) {
            Some(existing) => existing.url = link.url.clone(),
            None => self.socials.push(link.clone()),
        }
        Ok(link)
    }

    fn rules(&self) -> String {
        self.rules.clone()
    }

    fn set_rules(&mut self, rules: String) -> Result<(), StoreError> {
        self.rules = rules;
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("Team {0} not found")]
    TeamNotFound(TeamId),

    #[error("Social link platform must not be empty")]
    EmptyPlatform,

    #[error("Stored league data is corrupt: {0}")]
    Corrupt(String),

    #[error("No ids left to assign")]
    IdsExhausted,
}
