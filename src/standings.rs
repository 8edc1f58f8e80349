// 3.0 standings.rs: the ranking engine. pure function from a team snapshot to table rows.
// order is points desc, then goal differential desc, then input order.

use crate::team::TeamRecord;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// One row of the standings table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedEntry {
    /// 1-based position. Tied teams still get consecutive ranks.
    pub rank: usize,
    pub team: TeamRecord,
    pub games_played: i128,
    pub goal_differential: i128,
}

// 3.1: comparator. Ordering::Less means `a` ranks above `b`.
pub fn compare_standing(a: &TeamRecord, b: &TeamRecord) -> Ordering {
    b.points
        .cmp(&a.points)
        .then_with(|| b.goal_differential().cmp(&a.goal_differential()))
}

// 3.2: slice::sort_by is stable, so full ties keep their input order.
pub fn compute_standings(teams: &[TeamRecord]) -> Vec<RankedEntry> {
    let mut ordered: Vec<&TeamRecord> = teams.iter().collect();
    ordered.sort_by(|a, b| compare_standing(a, b));

    ordered
        .into_iter()
        .enumerate()
        .map(|(i, team)| RankedEntry {
            rank: i + 1,
            games_played: team.games_played(),
            goal_differential: team.goal_differential(),
            team: team.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TeamId;

    fn team(id: u64, points: i64, goals_for: i64, goals_against: i64) -> TeamRecord {
        let mut t = TeamRecord::new(TeamId(id), format!("T{}", id));
        t.points = points;
        t.goals_for = goals_for;
        t.goals_against = goals_against;
        t
    }

    fn ids(rows: &[RankedEntry]) -> Vec<u64> {
        rows.iter().map(|r| r.team.id.0).collect()
    }

    #[test]
    fn empty_input() {
        assert!(compute_standings(&[]).is_empty());
    }

    #[test]
    fn single_team_metrics() {
        let mut t = team(1, 10, 20, 15);
        t.wins = 5;
        t.losses = 2;

        let rows = compute_standings(&[t.clone()]);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].rank, 1);
        assert_eq!(rows[0].games_played, 7);
        assert_eq!(rows[0].goal_differential, 5);
        assert_eq!(rows[0].team, t);
    }

    #[test]
    fn points_decide_first() {
        let rows = compute_standings(&[team(1, 21, 38, 25), team(2, 24, 45, 20)]);
        assert_eq!(ids(&rows), vec![2, 1]);
        assert_eq!(rows[0].rank, 1);
        assert_eq!(rows[1].rank, 2);
    }

    #[test]
    fn goal_differential_breaks_points_tie() {
        let rows = compute_standings(&[team(1, 15, 30, 33), team(2, 15, 32, 32)]);
        assert_eq!(ids(&rows), vec![2, 1]);
    }

    #[test]
    fn negative_differentials_compare_correctly() {
        // -20 vs -16
        let rows = compute_standings(&[team(1, 9, 20, 40), team(2, 9, 22, 38)]);
        assert_eq!(ids(&rows), vec![2, 1]);
    }

    #[test]
    fn full_tie_keeps_input_order() {
        let rows = compute_standings(&[team(7, 12, 28, 35), team(3, 12, 21, 28), team(5, 12, 30, 37)]);
        assert_eq!(ids(&rows), vec![7, 3, 5]);
        assert_eq!(rows.iter().map(|r| r.rank).collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn input_is_not_reordered() {
        let teams = vec![team(1, 3, 0, 0), team(2, 9, 0, 0)];
        let _ = compute_standings(&teams);
        assert_eq!(teams[0].id, TeamId(1));
    }

    #[test]
    fn malformed_counts_are_ranked_not_rejected() {
        let rows = compute_standings(&[team(1, -4, 0, 0), team(2, 0, -2, 5)]);
        assert_eq!(ids(&rows), vec![2, 1]);
        assert_eq!(rows[0].goal_differential, -7);
    }

    #[test]
    fn extreme_counters_rank_by_true_differential() {
        let rows = compute_standings(&[team(1, 5, 0, 0), team(2, 5, i64::MAX, -1)]);
        assert_eq!(ids(&rows), vec![2, 1]);
        assert_eq!(rows[0].goal_differential, i128::from(i64::MAX) + 1);

        let rows = compute_standings(&[team(1, 5, i64::MIN, 1), team(2, 5, 0, 0)]);
        assert_eq!(ids(&rows), vec![2, 1]);
        assert_eq!(rows[1].goal_differential, i128::from(i64::MIN) - 1);
    }

    #[test]
    fn extreme_games_played() {
        let mut t = team(1, 0, 0, 0);
        t.wins = i64::MAX;
        t.losses = i64::MAX;
        let rows = compute_standings(&[t]);
        assert_eq!(rows[0].games_played, 2 * i128::from(i64::MAX));
    }

    #[test]
    fn rows_serialize_camel_case() {
        let rows = compute_standings(&[team(1, 3, 4, 1)]);
        let json = serde_json::to_value(&rows[0]).unwrap();
        assert_eq!(json["gamesPlayed"], 0);
        assert_eq!(json["goalDifferential"], 3);
        assert_eq!(json["team"]["points"], 3);
    }
}
