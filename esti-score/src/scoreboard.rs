use crate::{QuestionOutcome, countable_submissions, dense_ranks, resolve_questions, total_score};
use bigdecimal::BigDecimal;
use esti_core::models::{Game, Question, Submission, Team, TeamId};

/// One row of the scoreboard
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TeamStanding {
    /// The team's display name
    pub team_name: String,
    /// Outcomes in ascending question position, one per question
    pub per_question: Vec<QuestionOutcome>,
    /// The folded total, lower being better
    pub total_score: BigDecimal,
    /// Competition rank shared by teams with equal totals
    pub rank: u32,
    /// Whether this row is the one the viewer asked to have marked
    pub highlighted: bool,
}

/// The ranked scoreboard of one game
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Scoreboard {
    /// Rows listed best-first
    pub teams: Vec<TeamStanding>,
    /// The question positions the per-question columns correspond to
    pub question_positions: Vec<u32>,
}

/// Builds the scoreboard for one game
///
/// Every team's history goes through the same pipeline: keep the countable
/// submissions, resolve the live one per question, and fold the outcomes
/// into a total. Teams are then listed best-first, which for this scoring
/// scheme means ascending total with ties broken by team name; the rank
/// column keys on totals alone, so name-broken ties still share a rank.
///
/// `questions` may arrive in any order; the board's columns follow question
/// position. The same inputs always produce the same board.
pub fn scoreboard<'a>(
    game: &Game,
    questions: &[Question],
    teams: impl IntoIterator<Item = (&'a Team, &'a [Submission])>,
    highlight: Option<TeamId>,
) -> Scoreboard {
    let mut ordered_questions: Vec<&Question> = questions.iter().collect();
    ordered_questions.sort_by_key(|question| question.position);
    let question_positions = ordered_questions
        .iter()
        .map(|question| question.position)
        .collect();

    let mut rows: Vec<(String, TeamId, Vec<QuestionOutcome>, BigDecimal)> = teams
        .into_iter()
        .map(|(team, submissions)| {
            let countable = countable_submissions(game, submissions);
            let per_question = resolve_questions(ordered_questions.iter().copied(), &countable);
            let total = total_score(&per_question);
            (team.team_name.clone(), team.id, per_question, total)
        })
        .collect();

    rows.sort_by(|a, b| a.3.cmp(&b.3).then_with(|| a.0.cmp(&b.0)));
    let ranks = dense_ranks(rows.iter().map(|row| &row.3));

    let teams = rows
        .into_iter()
        .zip(ranks)
        .map(
            |((team_name, team_id, per_question, total_score), rank)| TeamStanding {
                team_name,
                per_question,
                total_score,
                rank,
                highlighted: highlight == Some(team_id),
            },
        )
        .collect();

    Scoreboard {
        teams,
        question_positions,
    }
}
