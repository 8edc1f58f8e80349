//! Match schedule.
//!
//! Matches reference teams by display name, the same way the schedule form
//! does. A match with both scores filled in has been played.

use crate::types::{normalize_logo, MatchId};
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    pub id: MatchId,
    pub date: NaiveDate,
    #[serde(with = "clock")]
    pub time: NaiveTime,
    pub home_team: String,
    pub away_team: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub home_score: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub away_score: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub home_team_logo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub away_team_logo: Option<String>,
}

impl Match {
    pub fn is_played(&self) -> bool {
        self.home_score.is_some() && self.away_score.is_some()
    }

    pub fn score(&self) -> Option<(i64, i64)> {
        match (self.home_score, self.away_score) {
            (Some(h), Some(a)) => Some((h, a)),
            _ => None,
        }
    }

    pub fn involves(&self, team_name: &str) -> bool {
        self.home_team == team_name || self.away_team == team_name
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchDraft {
    pub date: NaiveDate,
    #[serde(with = "clock")]
    pub time: NaiveTime,
    pub home_team: String,
    pub away_team: String,
    #[serde(default)]
    pub home_score: Option<i64>,
    #[serde(default)]
    pub away_score: Option<i64>,
    #[serde(default)]
    pub home_team_logo: Option<String>,
    #[serde(default)]
    pub away_team_logo: Option<String>,
}

impl MatchDraft {
    pub fn new(
        date: NaiveDate,
        time: NaiveTime,
        home_team: impl Into<String>,
        away_team: impl Into<String>,
    ) -> Self {
        Self {
            date,
            time,
            home_team: home_team.into(),
            away_team: away_team.into(),
            home_score: None,
            away_score: None,
            home_team_logo: None,
            away_team_logo: None,
        }
    }

    pub fn with_score(mut self, home: i64, away: i64) -> Self {
        self.home_score = Some(home);
        self.away_score = Some(away);
        self
    }

    pub fn validate(&self) -> Result<(), MatchError> {
        let home = self.home_team.trim();
        let away = self.away_team.trim();
        if home.is_empty() || away.is_empty() {
            return Err(MatchError::MissingTeam);
        }
        if home == away {
            return Err(MatchError::SameTeam(home.to_string()));
        }
        match (self.home_score, self.away_score) {
            (Some(h), Some(a)) if h < 0 || a < 0 => Err(MatchError::NegativeScore),
            (Some(_), None) | (None, Some(_)) => Err(MatchError::PartialScore),
            _ => Ok(()),
        }
    }

    pub fn into_match(self, id: MatchId) -> Match {
        Match {
            id,
            date: self.date,
            time: self.time,
            home_team: self.home_team.trim().to_string(),
            away_team: self.away_team.trim().to_string(),
            home_score: self.home_score,
            away_score: self.away_score,
            home_team_logo: normalize_logo(self.home_team_logo),
            away_team_logo: normalize_logo(self.away_team_logo),
        }
    }
}

// 4.1: most recent first. stable, so matches at the same slot keep insertion order.
pub fn compare_schedule(a: &Match, b: &Match) -> Ordering {
    b.date.cmp(&a.date).then_with(|| b.time.cmp(&a.time))
}

pub fn sort_schedule(matches: &mut [Match]) {
    matches.sort_by(compare_schedule);
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MatchError {
    #[error("Both home and away teams are required")]
    MissingTeam,

    #[error("A team cannot play itself: {0}")]
    SameTeam(String),

    #[error("Scores must not be negative")]
    NegativeScore,

    #[error("Either both scores are set or neither is")]
    PartialScore,
}

// kick-off times travel as "HH:MM"; seconds are accepted on input.
mod clock {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%H:%M";

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&time.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(&raw, FORMAT)
            .or_else(|_| NaiveTime::parse_from_str(&raw, "%H:%M:%S"))
            .map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(date: &str, time: &str) -> (NaiveDate, NaiveTime) {
        (
            NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            NaiveTime::parse_from_str(time, "%H:%M").unwrap(),
        )
    }

    fn fixture(id: u64, date: &str, time: &str) -> Match {
        let (d, t) = at(date, time);
        MatchDraft::new(d, t, "Dynamo", "CSKA").into_match(MatchId(id))
    }

    #[test]
    fn played_needs_both_scores() {
        let (d, t) = at("2025-10-15", "19:00");
        let played = MatchDraft::new(d, t, "Dynamo", "CSKA").with_score(3, 2).into_match(MatchId(1));
        assert!(played.is_played());
        assert_eq!(played.score(), Some((3, 2)));

        let upcoming = fixture(2, "2025-10-16", "18:00");
        assert!(!upcoming.is_played());
        assert_eq!(upcoming.score(), None);
    }

    #[test]
    fn validate_rejects_bad_drafts() {
        let (d, t) = at("2025-10-15", "19:00");
        assert_eq!(MatchDraft::new(d, t, "", "CSKA").validate(), Err(MatchError::MissingTeam));
        assert_eq!(
            MatchDraft::new(d, t, "SKA", " SKA ").validate(),
            Err(MatchError::SameTeam("SKA".to_string()))
        );
        assert_eq!(
            MatchDraft::new(d, t, "SKA", "CSKA").with_score(-1, 2).validate(),
            Err(MatchError::NegativeScore)
        );

        let mut partial = MatchDraft::new(d, t, "SKA", "CSKA");
        partial.home_score = Some(1);
        assert_eq!(partial.validate(), Err(MatchError::PartialScore));
    }

    #[test]
    fn schedule_is_most_recent_first() {
        let mut matches = vec![
            fixture(1, "2025-10-15", "19:00"),
            fixture(2, "2025-10-17", "18:30"),
            fixture(3, "2025-10-15", "19:30"),
            fixture(4, "2025-10-17", "19:00"),
        ];
        sort_schedule(&mut matches);
        let order: Vec<u64> = matches.iter().map(|m| m.id.0).collect();
        assert_eq!(order, vec![4, 2, 3, 1]);
    }

    #[test]
    fn time_round_trips_as_hours_and_minutes() {
        let m = fixture(1, "2025-10-15", "19:00");
        let json = serde_json::to_value(&m).unwrap();
        assert_eq!(json["time"], "19:00");
        assert_eq!(json["date"], "2025-10-15");
        assert_eq!(json["homeTeam"], "Dynamo");
        assert!(json.get("homeScore").is_none());

        let back: Match = serde_json::from_value(json).unwrap();
        assert_eq!(back, m);
    }

    #[test]
    fn time_accepts_seconds() {
        let draft: MatchDraft = serde_json::from_str(
            r#"{"date":"2025-10-16","time":"18:00:00","homeTeam":"Lokomotiv","awayTeam":"Torpedo"}"#,
        )
        .unwrap();
        assert_eq!(draft.time, NaiveTime::from_hms_opt(18, 0, 0).unwrap());
    }
}
