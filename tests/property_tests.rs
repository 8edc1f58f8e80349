//! Property-based tests for the standings engine.
//!
//! These tests verify the ranking invariants hold under random rosters.

use league_core::*;
use proptest::prelude::*;

// Strategies for generating test data
fn team_strategy() -> impl Strategy<Value = (i64, i64, i64, i64, i64)> {
    (
        0i64..30,  // wins
        0i64..30,  // losses
        0i64..90,  // points
        0i64..150, // goals for
        0i64..150, // goals against
    )
}

// Narrow ranges so full ties show up often
fn tie_heavy_strategy() -> impl Strategy<Value = (i64, i64, i64, i64, i64)> {
    (0i64..3, 0i64..3, 0i64..3, 0i64..4, 0i64..4)
}

fn roster(stats: Vec<(i64, i64, i64, i64, i64)>) -> Vec<TeamRecord> {
    stats
        .into_iter()
        .enumerate()
        .map(|(i, (wins, losses, points, gf, ga))| {
            TeamDraft::named(format!("Team {}", i))
                .record(wins, losses, points)
                .goals(gf, ga)
                .into_record(TeamId(i as u64 + 1))
        })
        .collect()
}

fn input_position(teams: &[TeamRecord], id: TeamId) -> usize {
    teams.iter().position(|t| t.id == id).unwrap()
}

proptest! {
    /// Output has one row per input team
    #[test]
    fn length_preserving(stats in proptest::collection::vec(team_strategy(), 0..40)) {
        let teams = roster(stats);
        let rows = compute_standings(&teams);
        prop_assert_eq!(rows.len(), teams.len());
    }

    /// Every input team appears exactly once, unmodified
    #[test]
    fn teams_are_permuted_not_changed(stats in proptest::collection::vec(team_strategy(), 0..40)) {
        let teams = roster(stats);
        let rows = compute_standings(&teams);

        let mut seen: Vec<TeamId> = rows.iter().map(|r| r.team.id).collect();
        seen.sort();
        let mut expected: Vec<TeamId> = teams.iter().map(|t| t.id).collect();
        expected.sort();
        prop_assert_eq!(seen, expected);

        for row in &rows {
            let original = &teams[input_position(&teams, row.team.id)];
            prop_assert_eq!(&row.team, original);
        }
    }

    /// Adjacent rows are ordered by points, then goal differential
    #[test]
    fn sorted_by_points_then_differential(stats in proptest::collection::vec(team_strategy(), 2..40)) {
        let rows = compute_standings(&roster(stats));

        for pair in rows.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            prop_assert!(
                a.team.points > b.team.points
                    || (a.team.points == b.team.points && a.goal_differential >= b.goal_differential),
                "{} ({} pts, {:+}) above {} ({} pts, {:+})",
                a.team.name, a.team.points, a.goal_differential,
                b.team.name, b.team.points, b.goal_differential
            );
        }
    }

    /// Full ties keep input order
    #[test]
    fn stable_for_full_ties(stats in proptest::collection::vec(tie_heavy_strategy(), 2..30)) {
        let teams = roster(stats);
        let rows = compute_standings(&teams);

        for pair in rows.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            if a.team.points == b.team.points && a.goal_differential == b.goal_differential {
                prop_assert!(input_position(&teams, a.team.id) < input_position(&teams, b.team.id));
            }
        }
    }

    /// Same input, same output
    #[test]
    fn deterministic(stats in proptest::collection::vec(tie_heavy_strategy(), 0..30)) {
        let teams = roster(stats);
        prop_assert_eq!(compute_standings(&teams), compute_standings(&teams));
    }

    /// Ranks are exactly 1..=n in output order
    #[test]
    fn ranks_are_consecutive(stats in proptest::collection::vec(tie_heavy_strategy(), 0..30)) {
        let rows = compute_standings(&roster(stats));
        let ranks: Vec<usize> = rows.iter().map(|r| r.rank).collect();
        let expected: Vec<usize> = (1..=rows.len()).collect();
        prop_assert_eq!(ranks, expected);
    }

    /// Derived columns match the record
    #[test]
    fn derived_metrics_match(stats in proptest::collection::vec(team_strategy(), 0..30)) {
        for row in compute_standings(&roster(stats)) {
            prop_assert_eq!(row.games_played, i128::from(row.team.wins) + i128::from(row.team.losses));
            prop_assert_eq!(
                row.goal_differential,
                i128::from(row.team.goals_for) - i128::from(row.team.goals_against)
            );
        }
    }

    /// Any signed counters, extremes included, are ranked without complaint
    #[test]
    fn negative_counters_accepted(
        stats in proptest::collection::vec(
            (any::<i64>(), any::<i64>(), any::<i64>(), any::<i64>(), any::<i64>()),
            0..20,
        ),
    ) {
        let teams = roster(stats);
        let rows = compute_standings(&teams);
        prop_assert_eq!(rows.len(), teams.len());

        for pair in rows.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            prop_assert!(
                a.team.points > b.team.points
                    || (a.team.points == b.team.points && a.goal_differential >= b.goal_differential)
            );
        }
    }
}

#[test]
fn sample_league_table() {
    let rows = compute_standings(&seed::sample_teams());
    let order: Vec<&str> = rows.iter().map(|r| r.team.name.as_str()).collect();

    // CSKA/SKA tie on 21 points, SKA ahead on differential (+14 vs +13)
    assert_eq!(
        order,
        vec![
            "Dynamo", "SKA", "CSKA", "Spartak", "Lokomotiv", "Torpedo",
            "Vityaz", "Salavat Yulaev", "Avangard", "Metallurg", "Ak Bars", "Traktor",
        ]
    );
    assert_eq!(rows[0].goal_differential, 25);
    assert_eq!(rows[11].rank, 12);
}
