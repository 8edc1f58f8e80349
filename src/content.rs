// 6.0 content.rs: the free-form parts of the site. social links and the rules text.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub platform: String,
    pub url: String,
}

impl SocialLink {
    pub fn new(platform: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            platform: platform.into(),
            url: url.into(),
        }
    }
}

// 6.1: platform keys are case-insensitive, stored lowercase.
pub fn platform_key(platform: &str) -> String {
    platform.trim().to_lowercase()
}

// 6.2: bundled regulation shown until an admin edits it.
pub const DEFAULT_RULES: &str = "# League Rules

## Game regulations
- Match length: 3 periods of 20 minutes
- Roster: 20 players (18 skaters + 2 goaltenders)
- Regulation win: 3 points
- Overtime/shootout win: 2 points
- Overtime/shootout loss: 1 point
- Regulation loss: 0 points

## Discipline
- Minor penalty: 2 minutes
- Major penalty: 5 minutes + game misconduct
- Match penalty: ejection + suspension

## Playoffs
- Top 8 teams qualify
- Format: quarterfinals, semifinals, final
- Best-of-seven series
";
