//! League site simulation.
//!
//! Walks through what the site does: show the table and schedule, enter admin
//! mode, edit results, and persist the snapshot the front end would store.

use chrono::{NaiveDate, NaiveTime};
use league_core::*;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    println!("League Site Simulation");
    println!("Standings, Schedule, Admin Edits, Snapshot\n");

    if let Err(e) = run() {
        eprintln!("simulation failed: {}", e);
        std::process::exit(1);
    }

    println!("\nAll scenarios completed successfully.");
}

fn run() -> Result<(), LeagueError> {
    let mut league = League::in_memory(LeagueConfig::development())?;
    league.set_time(Timestamp::from_millis(1_760_540_400_000));

    scenario_1_standings(&league);
    scenario_2_schedule(&league);
    scenario_3_viewer_cannot_edit(&mut league);
    scenario_4_admin_edits(&mut league)?;
    scenario_5_snapshot(&league)?;
    Ok(())
}

/// Sample table as a visitor sees it.
fn scenario_1_standings(league: &League) {
    println!("Scenario 1: Standings\n");
    print_table(&league.standings());
    println!();
}

fn print_table(rows: &[RankedEntry]) {
    println!("  {:>3}  {:<16} {:>3} {:>3} {:>3} {:>7} {:>4} {:>4}", "#", "Team", "GP", "W", "L", "Goals", "Diff", "Pts");
    for row in rows {
        println!(
            "  {:>3}  {:<16} {:>3} {:>3} {:>3} {:>7} {:>+4} {:>4}",
            row.rank,
            row.team.name,
            row.games_played,
            row.team.wins,
            row.team.losses,
            format!("{}:{}", row.team.goals_for, row.team.goals_against),
            row.goal_differential,
            row.team.points,
        );
    }
}

/// Results and upcoming fixtures.
fn scenario_2_schedule(league: &League) {
    println!("Scenario 2: Schedule\n");

    for m in league.schedule() {
        match m.score() {
            Some((home, away)) => println!("  {} {}  {} {}:{} {}", m.date, m.time.format("%H:%M"), m.home_team, home, away, m.away_team),
            None => println!("  {} {}  {} vs {}", m.date, m.time.format("%H:%M"), m.home_team, m.away_team),
        }
    }
    println!("  {} upcoming\n", league.upcoming().len());
}

/// Edits are refused until admin mode is entered.
fn scenario_3_viewer_cannot_edit(league: &mut League) {
    println!("Scenario 3: Viewer Mode\n");

    match league.set_rules("# hijacked") {
        Err(e) => println!("  Edit as viewer: {}", e),
        Ok(()) => println!("  Edit as viewer unexpectedly accepted"),
    }
    match league.login("guess") {
        Err(e) => println!("  Login with wrong token: {}", e),
        Ok(()) => println!("  Wrong token unexpectedly accepted"),
    }
    println!();
}

/// Admin records a result and the table moves.
fn scenario_4_admin_edits(league: &mut League) -> Result<(), LeagueError> {
    println!("Scenario 4: Admin Edits\n");

    league.login("dev-admin")?;
    println!("  Admin mode: {}", league.is_admin());

    let date = NaiveDate::from_ymd_opt(2025, 10, 16).unwrap_or_default();
    let time = NaiveTime::from_hms_opt(18, 0, 0).unwrap_or_default();
    league.schedule_match(MatchDraft::new(date, time, "Torpedo", "Lokomotiv").with_score(4, 1))?;
    league.advance_time(60_000);

    // Torpedo win in regulation: +3 points, goals 4:1
    if let Some(mut torpedo) = league.teams().into_iter().find(|t| t.name == "Torpedo") {
        torpedo.wins += 1;
        torpedo.points += 3;
        torpedo.goals_for += 4;
        torpedo.goals_against += 1;
        league.update_team(torpedo)?;
    }
    if let Some(mut lokomotiv) = league.teams().into_iter().find(|t| t.name == "Lokomotiv") {
        lokomotiv.losses += 1;
        lokomotiv.goals_for += 1;
        lokomotiv.goals_against += 4;
        league.update_team(lokomotiv)?;
    }

    league.add_champion(ChampionDraft::new(2024, "Dynamo"))?;
    league.update_social(SocialLink::new("Telegram", "https://t.me/league"))?;
    league.logout();

    println!("  Table after Torpedo 4:1 Lokomotiv:");
    print_table(&league.standings());

    println!("\n  Audit log:");
    for event in league.events() {
        println!("    [{}] {} {:?}", event.id.0, event.timestamp, event.payload);
    }
    println!();
    Ok(())
}

/// Persist and reload through the JSON snapshot.
fn scenario_5_snapshot(league: &League) -> Result<(), LeagueError> {
    println!("Scenario 5: Snapshot\n");

    let json = league.export_json()?;
    let restored = MemoryStore::from_json(&json)?;
    println!("  Snapshot size: {} bytes", json.len());
    println!("  Restored {} teams, {} matches, {} champions", restored.list_teams().len(), restored.list_matches().len(), restored.list_champions().len());
    println!("  Leader after reload: {}", compute_standings(&restored.list_teams()).first().map(|r| r.team.name.as_str()).unwrap_or("-"));
    Ok(())
}
