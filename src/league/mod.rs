// 12.0: league facade. owns the repository, admin gate and audit log, and is the
// only entry point the presentation layer needs. no I/O of its own.

mod content;
mod core;
mod results;
mod schedule;
mod teams;

pub use core::League;
pub use results::LeagueError;
