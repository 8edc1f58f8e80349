// 12.0.1: errors for league operations.

use crate::champions::ChampionError;
use crate::config::ConfigError;
use crate::schedule::MatchError;
use crate::store::StoreError;
use crate::team::TeamError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LeagueError {
    #[error("Admin mode required")]
    Unauthorized,

    #[error("Invalid admin credentials")]
    InvalidCredentials,

    #[error("Editing is disabled: no admin credential configured")]
    EditingDisabled,

    #[error("Invalid team: {0}")]
    Team(#[from] TeamError),

    #[error("Invalid match: {0}")]
    Match(#[from] MatchError),

    #[error("Invalid champion: {0}")]
    Champion(#[from] ChampionError),

    #[error("Storage error: {0}")]
    Store(#[from] StoreError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}
