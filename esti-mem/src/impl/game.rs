use crate::MemoryStore;
use esti_core::models::{Game, GameSlug};
use esti_core::ports::{GameFailure, GameRepository};

impl GameRepository for MemoryStore {
    async fn create_game(&self, game: Game) -> Result<Result<Game, GameFailure>, Self::Error> {
        let mut state = self.write();
        if state.games.contains_key(&game.slug) {
            return Ok(Err(GameFailure::SlugInUse));
        }
        state.games.insert(game.slug.clone(), game.clone());
        Ok(Ok(game))
    }

    async fn get_game(&self, slug: &GameSlug) -> Result<Option<Game>, Self::Error> {
        Ok(self.read().games.get(slug).cloned())
    }

    async fn list_games(&self) -> Result<Vec<Game>, Self::Error> {
        let mut games: Vec<Game> = self.read().games.values().cloned().collect();
        games.sort_by(|a, b| a.slug.cmp(&b.slug));
        Ok(games)
    }
}
