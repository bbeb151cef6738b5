use crate::models::{Game, GameSlug};
use std::future::Future;

/// The ways creating a game can fail on the domain level
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GameFailure {
    /// A game with this slug already exists
    #[error("A game with this slug already exists")]
    SlugInUse,
}

/// Repository interface for the game catalog
pub trait GameRepository: super::Repository {
    /// Add a new game to the catalog.
    ///
    /// # Returns
    ///
    /// The stored game, or [`GameFailure::SlugInUse`] if the slug is
    /// already taken. No partial state is retained on conflict.
    fn create_game(
        &self,
        game: Game,
    ) -> impl Future<Output = Result<Result<Game, GameFailure>, Self::Error>> + Send;

    /// Look up a game by its slug.
    ///
    /// # Returns
    ///
    /// `Ok(None)` if no game with this slug exists.
    fn get_game(
        &self,
        slug: &GameSlug,
    ) -> impl Future<Output = Result<Option<Game>, Self::Error>> + Send;

    /// All games in the catalog, ordered by slug.
    fn list_games(&self) -> impl Future<Output = Result<Vec<Game>, Self::Error>> + Send;
}
