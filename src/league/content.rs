//! Champions, social links and rules.

use super::core::League;
use super::results::LeagueError;
use crate::champions::{Champion, ChampionDraft};
use crate::content::SocialLink;
use crate::events::EventPayload;
use crate::types::ChampionId;

impl League {
    pub fn champions(&self) -> Vec<Champion> {
        self.repository.list_champions()
    }

    pub fn add_champion(&mut self, draft: ChampionDraft) -> Result<Champion, LeagueError> {
        self.require_admin()?;
        draft.validate()?;

        let champion = self.repository.create_champion(draft)?;
        self.emit_event(EventPayload::ChampionAdded {
            champion_id: champion.id,
            year: champion.year,
            team_name: champion.team_name.clone(),
        });
        Ok(champion)
    }

    pub fn delete_champion(&mut self, id: ChampionId) -> Result<bool, LeagueError> {
        self.require_admin()?;

        let removed = self.repository.delete_champion(id)?;
        if removed {
            self.emit_event(EventPayload::ChampionDeleted { champion_id: id });
        }
        Ok(removed)
    }

    pub fn socials(&self) -> Vec<SocialLink> {
        self.repository.list_socials()
    }

    pub fn update_social(&mut self, link: SocialLink) -> Result<SocialLink, LeagueError> {
        self.require_admin()?;

        let link = self.repository.update_social(link)?;
        self.emit_event(EventPayload::SocialLinkUpdated {
            platform: link.platform.clone(),
        });
        Ok(link)
    }

    pub fn rules(&self) -> String {
        self.repository.rules()
    }

    pub fn set_rules(&mut self, rules: impl Into<String>) -> Result<(), LeagueError> {
        self.require_admin()?;

        let rules = rules.into();
        let length = rules.chars().count();
        self.repository.set_rules(rules)?;
        self.emit_event(EventPayload::RulesUpdated { length });
        Ok(())
    }
}
