use crate::models::{GameSlug, Question, QuestionId};
use std::future::Future;

/// The ways creating a question can fail on the domain level
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum QuestionFailure {
    /// The referenced game does not exist
    #[error("Game not found")]
    UnknownGame,
    /// The game already has a question at this position
    #[error("Question at this position already exists")]
    PositionInUse,
}

/// Repository interface for the question catalog
pub trait QuestionRepository: super::Repository {
    /// Add a question to its game.
    ///
    /// # Returns
    ///
    /// The stored question, or a [`QuestionFailure`] if the game is unknown
    /// or the `(game, position)` pair is already taken. No partial state is
    /// retained on conflict.
    fn create_question(
        &self,
        question: Question,
    ) -> impl Future<Output = Result<Result<Question, QuestionFailure>, Self::Error>> + Send;

    /// Look up a question by id.
    ///
    /// # Returns
    ///
    /// `Ok(None)` if no question with this id exists.
    fn get_question(
        &self,
        question_id: QuestionId,
    ) -> impl Future<Output = Result<Option<Question>, Self::Error>> + Send;

    /// All questions of a game, ordered by ascending position.
    ///
    /// An unknown game yields an empty list; callers that need to
    /// distinguish that case look the game up first.
    fn questions_for_game(
        &self,
        slug: &GameSlug,
    ) -> impl Future<Output = Result<Vec<Question>, Self::Error>> + Send;
}
