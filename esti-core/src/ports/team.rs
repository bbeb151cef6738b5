use crate::models::{GameSlug, Team, TeamId, UserId};
use std::future::Future;

/// The ways creating a team can fail on the domain level
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TeamFailure {
    /// The referenced game does not exist
    #[error("Game not found")]
    UnknownGame,
    /// The game already has a team with this name
    #[error("Team with this name already exists")]
    NameInUse,
}

/// Repository interface for team registration and lookup
pub trait TeamRepository: super::Repository {
    /// Add a team to its game.
    ///
    /// Only the storage-level rules are enforced here; whether registration
    /// is currently open is the registration operation's concern.
    ///
    /// # Returns
    ///
    /// The stored team, or a [`TeamFailure`] if the game is unknown or the
    /// `(game, team_name)` pair is already taken. No partial state is
    /// retained on conflict.
    fn create_team(
        &self,
        team: Team,
    ) -> impl Future<Output = Result<Result<Team, TeamFailure>, Self::Error>> + Send;

    /// Look up a team by id.
    ///
    /// # Returns
    ///
    /// `Ok(None)` if no team with this id exists.
    fn get_team(
        &self,
        team_id: TeamId,
    ) -> impl Future<Output = Result<Option<Team>, Self::Error>> + Send;

    /// All teams of a game, ordered by team name.
    fn teams_for_game(
        &self,
        slug: &GameSlug,
    ) -> impl Future<Output = Result<Vec<Team>, Self::Error>> + Send;

    /// The team within a game that has `user` on its roster, if any.
    ///
    /// At most one team per game can ever match, because registration
    /// refuses users who are already on a team of that game.
    fn team_for_user(
        &self,
        slug: &GameSlug,
        user: UserId,
    ) -> impl Future<Output = Result<Option<Team>, Self::Error>> + Send;
}
