//! Team records.
//!
//! A `TeamRecord` is one team's season line as stored by the repository.
//! Counters are signed on purpose: the standings engine ranks whatever it is
//! handed, and validation happens here, where records are built.

use crate::types::{normalize_logo, TeamId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamRecord {
    pub id: TeamId,
    pub name: String,
    pub wins: i64,
    pub losses: i64,
    /// Tracked independently of wins/losses. Overtime results award 2/1 points.
    pub points: i64,
    pub goals_for: i64,
    pub goals_against: i64,
    #[serde(rename = "logo", default, skip_serializing_if = "Option::is_none")]
    pub logo_ref: Option<String>,
}

impl TeamRecord {
    pub fn new(id: TeamId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            wins: 0,
            losses: 0,
            points: 0,
            goals_for: 0,
            goals_against: 0,
            logo_ref: None,
        }
    }

    // derived columns are widened so any pair of i64 counters fits
    pub fn games_played(&self) -> i128 {
        i128::from(self.wins) + i128::from(self.losses)
    }

    pub fn goal_differential(&self) -> i128 {
        i128::from(self.goals_for) - i128::from(self.goals_against)
    }

    pub fn validate(&self) -> Result<(), TeamError> {
        check_fields(
            &self.name,
            &[
                ("wins", self.wins),
                ("losses", self.losses),
                ("points", self.points),
                ("goalsFor", self.goals_for),
                ("goalsAgainst", self.goals_against),
            ],
        )
    }
}

/// Input for creating a team. Counters left out of a form default to zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TeamDraft {
    pub name: String,
    pub wins: i64,
    pub losses: i64,
    pub points: i64,
    pub goals_for: i64,
    pub goals_against: i64,
    pub logo: Option<String>,
}

impl TeamDraft {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn record(mut self, wins: i64, losses: i64, points: i64) -> Self {
        self.wins = wins;
        self.losses = losses;
        self.points = points;
        self
    }

    pub fn goals(mut self, goals_for: i64, goals_against: i64) -> Self {
        self.goals_for = goals_for;
        self.goals_against = goals_against;
        self
    }

    pub fn with_logo(mut self, logo: impl Into<String>) -> Self {
        self.logo = Some(logo.into());
        self
    }

    pub fn validate(&self) -> Result<(), TeamError> {
        check_fields(
            &self.name,
            &[
                ("wins", self.wins),
                ("losses", self.losses),
                ("points", self.points),
                ("goalsFor", self.goals_for),
                ("goalsAgainst", self.goals_against),
            ],
        )
    }

    /// Builds the stored record. Callers validate first; this only trims and normalizes.
    pub fn into_record(self, id: TeamId) -> TeamRecord {
        TeamRecord {
            id,
            name: self.name.trim().to_string(),
            wins: self.wins,
            losses: self.losses,
            points: self.points,
            goals_for: self.goals_for,
            goals_against: self.goals_against,
            logo_ref: normalize_logo(self.logo),
        }
    }
}

fn check_fields(name: &str, counters: &[(&'static str, i64)]) -> Result<(), TeamError> {
    if name.trim().is_empty() {
        return Err(TeamError::EmptyName);
    }
    for &(field, value) in counters {
        if value < 0 {
            return Err(TeamError::NegativeCounter { field, value });
        }
    }
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TeamError {
    #[error("Team name must not be empty")]
    EmptyName,

    #[error("Team field {field} must not be negative (got {value})")]
    NegativeCounter { field: &'static str, value: i64 },
}
