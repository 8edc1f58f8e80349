//! Sample league used when no saved data exists.

use crate::schedule::{Match, MatchDraft};
use crate::team::{TeamDraft, TeamRecord};
use crate::types::{MatchId, TeamId};
use chrono::{NaiveDate, NaiveTime};

// name, wins, losses, points, goals for, goals against
const TEAMS: [(&str, i64, i64, i64, i64, i64); 12] = [
    ("Dynamo", 8, 2, 24, 45, 20),
    ("CSKA", 7, 3, 21, 38, 25),
    ("SKA", 7, 3, 21, 42, 28),
    ("Spartak", 6, 4, 18, 35, 30),
    ("Lokomotiv", 5, 5, 15, 32, 32),
    ("Torpedo", 5, 5, 15, 30, 33),
    ("Vityaz", 4, 6, 12, 28, 35),
    ("Salavat Yulaev", 4, 6, 12, 26, 36),
    ("Avangard", 3, 7, 9, 22, 38),
    ("Metallurg", 3, 7, 9, 20, 40),
    ("Ak Bars", 2, 8, 6, 18, 42),
    ("Traktor", 1, 9, 3, 15, 48),
];

// (year, month, day), (hour, minute), home, away, score
#[allow(clippy::type_complexity)]
const MATCHES: [((i32, u32, u32), (u32, u32), &str, &str, Option<(i64, i64)>); 6] = [
    ((2025, 10, 15), (19, 0), "Dynamo", "CSKA", Some((3, 2))),
    ((2025, 10, 15), (19, 30), "SKA", "Spartak", Some((4, 1))),
    ((2025, 10, 16), (18, 0), "Lokomotiv", "Torpedo", None),
    ((2025, 10, 16), (19, 0), "Vityaz", "Salavat Yulaev", None),
    ((2025, 10, 17), (18, 30), "Avangard", "Metallurg", None),
    ((2025, 10, 17), (19, 0), "Ak Bars", "Traktor", None),
];

pub fn sample_teams() -> Vec<TeamRecord> {
    TEAMS
        .iter()
        .enumerate()
        .map(|(i, &(name, wins, losses, points, gf, ga))| {
            TeamDraft::named(name)
                .record(wins, losses, points)
                .goals(gf, ga)
                .into_record(TeamId(i as u64 + 1))
        })
        .collect()
}

pub fn sample_matches() -> Vec<Match> {
    MATCHES
        .iter()
        .enumerate()
        .filter_map(|(i, &((y, mo, d), (h, mi), home, away, score))| {
            let date = NaiveDate::from_ymd_opt(y, mo, d)?;
            let time = NaiveTime::from_hms_opt(h, mi, 0)?;
            let mut draft = MatchDraft::new(date, time, home, away);
            if let Some((hs, aws)) = score {
                draft = draft.with_score(hs, aws);
            }
            Some(draft.into_match(MatchId(i as u64 + 1)))
        })
        .collect()
}
