// 5.0 champions.rs: hall of champions, one row per season winner.

use crate::types::{normalize_logo, ChampionId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Champion {
    pub id: ChampionId,
    pub year: i32,
    pub team_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChampionDraft {
    pub year: i32,
    pub team_name: String,
    #[serde(default)]
    pub logo: Option<String>,
}

impl ChampionDraft {
    pub fn new(year: i32, team_name: impl Into<String>) -> Self {
        Self {
            year,
            team_name: team_name.into(),
            logo: None,
        }
    }

    pub fn validate(&self) -> Result<(), ChampionError> {
        if self.team_name.trim().is_empty() {
            return Err(ChampionError::EmptyName);
        }
        if self.year <= 0 {
            return Err(ChampionError::InvalidYear(self.year));
        }
        Ok(())
    }

    pub fn into_champion(self, id: ChampionId) -> Champion {
        Champion {
            id,
            year: self.year,
            team_name: self.team_name.trim().to_string(),
            logo: normalize_logo(self.logo),
        }
    }
}

// 5.1: latest season first
pub fn sort_champions(champions: &mut [Champion]) {
    champions.sort_by(|a, b| b.year.cmp(&a.year));
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChampionError {
    #[error("Champion team name must not be empty")]
    EmptyName,

    #[error("Invalid season year: {0}")]
    InvalidYear(i32),
}
