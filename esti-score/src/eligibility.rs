use crate::Map;
use esti_core::models::{Game, Question, QuestionId, Submission};

/// The label attached to one submission when a team's history is replayed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SubmissionStatus {
    /// Received before the game's window opened
    #[cfg_attr(feature = "serde", serde(rename = "Too early"))]
    TooEarly,
    /// Received at or after the window's close
    #[cfg_attr(feature = "serde", serde(rename = "Too late"))]
    TooLate,
    /// In-window, but arrived after the team used up its submission limit
    #[cfg_attr(feature = "serde", serde(rename = "Limit exceeded"))]
    LimitExceeded,
    /// Countable, and the interval contains the answer
    Correct,
    /// Countable, but the interval misses the answer
    Incorrect,
}

impl SubmissionStatus {
    /// Whether a submission with this status counts toward scoring
    pub fn is_countable(&self) -> bool {
        matches!(self, Self::Correct | Self::Incorrect)
    }
}

impl std::fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::TooEarly => "Too early",
            Self::TooLate => "Too late",
            Self::LimitExceeded => "Limit exceeded",
            Self::Correct => "Correct",
            Self::Incorrect => "Incorrect",
        })
    }
}

/// One submission together with its replay label
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClassifiedSubmission {
    /// The submission as received
    pub submission: Submission,
    /// How the scoring rules treat it
    pub status: SubmissionStatus,
}

/// Replays a team's submission history and labels every entry
///
/// Entries are considered in ascending order of arrival, whatever order they
/// are handed in. Out-of-window entries are labelled [`TooEarly`] or
/// [`TooLate`] without consuming any budget; among the in-window rest, the
/// first `game.submission_limit` are judged against their questions and
/// everything after is [`LimitExceeded`].
///
/// [`TooEarly`]: SubmissionStatus::TooEarly
/// [`TooLate`]: SubmissionStatus::TooLate
/// [`LimitExceeded`]: SubmissionStatus::LimitExceeded
///
/// # Panics
///
/// Panics if a submission addresses a question absent from `questions`. The
/// slice is expected to hold the game's full catalog.
pub fn classify_submissions(
    game: &Game,
    questions: &[Question],
    mut submissions: Vec<Submission>,
) -> Vec<ClassifiedSubmission> {
    let catalog: Map<QuestionId, &Question> =
        questions.iter().map(|question| (question.id, question)).collect();

    submissions.sort_by_key(|submission| submission.submitted_at);

    let mut remaining = game.submission_limit;
    submissions
        .into_iter()
        .map(|submission| {
            let status = if submission.submitted_before_game(game) {
                SubmissionStatus::TooEarly
            } else if submission.submitted_after_game(game) {
                SubmissionStatus::TooLate
            } else if remaining == 0 {
                SubmissionStatus::LimitExceeded
            } else {
                remaining -= 1;
                let question = catalog
                    .get(&submission.question)
                    .expect("submission addresses a question outside the catalog");
                if submission.contains_answer(question) {
                    SubmissionStatus::Correct
                } else {
                    SubmissionStatus::Incorrect
                }
            };
            ClassifiedSubmission { submission, status }
        })
        .collect()
}

/// The submissions that count for a team, in arrival order
///
/// These are the in-window entries up to the game's limit: exactly the ones
/// [`classify_submissions`] would label `Correct` or `Incorrect`.
pub fn countable_submissions<'a>(
    game: &Game,
    submissions: &'a [Submission],
) -> Vec<&'a Submission> {
    let mut countable: Vec<&Submission> = submissions
        .iter()
        .filter(|submission| submission.submitted_during_game(game))
        .collect();
    countable.sort_by_key(|submission| submission.submitted_at);
    countable.truncate(game.submission_limit as usize);
    countable
}

/// How many countable submissions a team has left
///
/// Out-of-window entries never consume the budget, and the count bottoms out
/// at zero rather than going negative.
pub fn submissions_remaining(game: &Game, submissions: &[Submission]) -> u32 {
    let used = submissions
        .iter()
        .filter(|submission| submission.submitted_during_game(game))
        .take(game.submission_limit as usize)
        .count() as u32;
    game.submission_limit - used
}
