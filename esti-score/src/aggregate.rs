use crate::QuestionOutcome;
use bigdecimal::{BigDecimal, Zero};

/// Folds per-question outcomes into a team's total score
///
/// The total is `(10 + sum of question scores) * 2^bad`, where `bad` counts
/// the questions whose score is zero. Lower totals are better, so every
/// missed or unanswered question doubles whatever a team has accumulated.
///
/// An empty outcome slice yields the floor total of 10, which is what a team
/// in a game without questions scores.
pub fn total_score(outcomes: &[QuestionOutcome]) -> BigDecimal {
    let sum = outcomes
        .iter()
        .fold(BigDecimal::zero(), |sum, outcome| sum + &outcome.score);
    let bad_intervals = outcomes
        .iter()
        .filter(|outcome| outcome.score.is_zero())
        .count();

    let mut total = BigDecimal::from(10) + sum;
    for _ in 0..bad_intervals {
        total = &total + &total;
    }
    total
}
