use crate::MemoryStore;
use esti_core::models::{GameSlug, Team, TeamId, UserId};
use esti_core::ports::{TeamFailure, TeamRepository};

impl TeamRepository for MemoryStore {
    async fn create_team(&self, team: Team) -> Result<Result<Team, TeamFailure>, Self::Error> {
        let mut state = self.write();
        if !state.games.contains_key(&team.game) {
            return Ok(Err(TeamFailure::UnknownGame));
        }
        let name_taken = state
            .teams
            .values()
            .any(|existing| existing.game == team.game && existing.team_name == team.team_name);
        if name_taken {
            return Ok(Err(TeamFailure::NameInUse));
        }
        state.teams.insert(team.id, team.clone());
        Ok(Ok(team))
    }

    async fn get_team(&self, team_id: TeamId) -> Result<Option<Team>, Self::Error> {
        Ok(self.read().teams.get(&team_id).cloned())
    }

    async fn teams_for_game(&self, slug: &GameSlug) -> Result<Vec<Team>, Self::Error> {
        let mut teams: Vec<Team> = self
            .read()
            .teams
            .values()
            .filter(|team| team.game == *slug)
            .cloned()
            .collect();
        teams.sort_by(|a, b| a.team_name.cmp(&b.team_name));
        Ok(teams)
    }

    async fn team_for_user(
        &self,
        slug: &GameSlug,
        user: UserId,
    ) -> Result<Option<Team>, Self::Error> {
        Ok(self
            .read()
            .teams
            .values()
            .find(|team| team.game == *slug && team.has_member(user))
            .cloned())
    }
}
