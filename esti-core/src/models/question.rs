use super::{GameSlug, QuestionId};
use bigdecimal::BigDecimal;

/// One question of a game
///
/// The answer is an arbitrary-precision decimal because estimathon answers
/// routinely span dozens of orders of magnitude. It is "hidden" only in the
/// sense that the rendering layer must not show it while the game runs; the
/// scoring engine needs it to judge submissions at any time.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Question {
    /// Unique identifier of this question
    pub id: QuestionId,
    /// The game this question belongs to
    pub game: GameSlug,
    /// Position within the game, unique per game, lowest first
    pub position: u32,
    /// The question text shown to the teams
    pub statement: String,
    /// The hidden numeric answer
    pub answer: BigDecimal,
}
