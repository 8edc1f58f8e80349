// league-core: hockey league site backend.
// the standings engine is a pure function; everything else is thin CRUD over an
// injected repository, gated by admin mode. no network or file I/O.
//
// file map (search X.0 for structs, X.1+ for logic):
//   1.x  types.rs: ids, timestamps, logo normalization
//   2.x  team.rs: TeamRecord, TeamDraft, roster validation
//   3.x  standings.rs: ranking engine: points, goal differential, stable ties
//   4.x  schedule.rs: matches, schedule ordering
//   5.x  champions.rs: hall of champions
//   6.x  content.rs: social links, bundled rules text
//   7.x  seed.rs: sample league
//   8.x  store.rs: LeagueRepository trait, MemoryStore, JSON snapshot
//   9.x  admin.rs: credential check, access mode
//   10.x events.rs: audit events
//   11.x config.rs: league settings, env presets
//   12.x league/: facade: standings, edits, login, event log

// domain records
pub mod champions;
pub mod content;
pub mod schedule;
pub mod standings;
pub mod team;
pub mod types;

// storage and access
pub mod admin;
pub mod seed;
pub mod store;

// facade
pub mod config;
pub mod events;
pub mod league;

// re exports for convenience
pub use admin::*;
pub use champions::*;
pub use content::*;
pub use events::*;
pub use league::*;
pub use schedule::*;
pub use standings::*;
pub use store::*;
pub use team::*;
pub use types::*;
pub use config::{ConfigError, Environment, LeagueConfig};
