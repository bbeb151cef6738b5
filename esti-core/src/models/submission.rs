use super::{Game, Interval, IntervalError, Question, QuestionId, SubmissionId, Team, TeamId};
use bigdecimal::BigDecimal;
use time::OffsetDateTime;

/// The raw payload of a submit request, before validation
///
/// This is what the surrounding application receives from a team: which
/// question they are answering and the two claimed bounds. Turning a draft
/// into a [`Submission`] is the single validation pass; a draft itself
/// makes no promises about its contents.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SubmissionDraft {
    /// The question being answered
    pub question: QuestionId,
    /// The claimed lower bound
    pub lower: BigDecimal,
    /// The claimed upper bound
    pub upper: BigDecimal,
}

/// One validated interval guess by one team for one question
///
/// Submissions are created once at submit time and never change afterwards:
/// correcting a guess means submitting again, and the scoring rules decide
/// which submission of a pair ends up counting. The cross-game rule (the
/// team and the question must belong to the same game) is checked by
/// [`Submission::new`], so records obtained from a backend can be trusted
/// on it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Submission {
    /// Unique identifier of this submission
    pub id: SubmissionId,
    /// The team that submitted
    pub team: TeamId,
    /// The question being answered
    pub question: QuestionId,
    /// The guessed range
    pub interval: Interval,
    /// When the submission was received
    #[cfg_attr(feature = "serde", serde(with = "time::serde::rfc3339"))]
    pub submitted_at: OffsetDateTime,
}

impl Submission {
    /// Validates a draft against the team and question it addresses
    ///
    /// This is the one place expected input problems are caught, and every
    /// violated check is reported together: a cross-game draft with garbage
    /// bounds yields the mismatch error *and* the bound errors in one pass.
    /// Timing is deliberately not checked here: submissions outside the
    /// game window are stored and later labelled, never rejected.
    ///
    /// # Panics
    ///
    /// Panics if `draft.question` and `question.id` disagree. Resolving the
    /// draft's question reference is the caller's job; disagreement means a
    /// bug in the calling layer, not bad user input.
    pub fn new(
        id: SubmissionId,
        team: &Team,
        question: &Question,
        draft: SubmissionDraft,
        submitted_at: OffsetDateTime,
    ) -> Result<Self, SubmissionErrors> {
        assert_eq!(
            draft.question, question.id,
            "draft was resolved against the wrong question"
        );

        let mut errors = Vec::new();
        if team.game != question.game {
            errors.push(SubmissionError::GameMismatch);
        }

        match Interval::new(draft.lower, draft.upper) {
            Ok(interval) if errors.is_empty() => Ok(Self {
                id,
                team: team.id,
                question: question.id,
                interval,
                submitted_at,
            }),
            Ok(_) => Err(SubmissionErrors(errors)),
            Err(interval_errors) => {
                errors.extend(interval_errors.0.into_iter().map(SubmissionError::Interval));
                Err(SubmissionErrors(errors))
            }
        }
    }

    /// Whether this submission's interval contains the question's answer
    ///
    /// # Panics
    ///
    /// Panics if `question` is not the question this submission addresses.
    pub fn contains_answer(&self, question: &Question) -> bool {
        assert_eq!(
            self.question, question.id,
            "submission checked against the wrong question"
        );
        self.interval.contains(&question.answer)
    }

    /// Whether this submission arrived inside the game's window
    pub fn submitted_during_game(&self, game: &Game) -> bool {
        game.start_time <= self.submitted_at && self.submitted_at < game.end_time()
    }

    /// Whether this submission arrived before the game's window opened
    pub fn submitted_before_game(&self, game: &Game) -> bool {
        self.submitted_at < game.start_time
    }

    /// Whether this submission arrived at or after the window's close
    pub fn submitted_after_game(&self, game: &Game) -> bool {
        self.submitted_at >= game.end_time()
    }
}

/// A single failed submission check
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SubmissionError {
    /// Error when the team and the question belong to different games
    #[error("Team must belong to the same game as the question")]
    GameMismatch,
    /// Error from validating the guessed interval
    #[error(transparent)]
    Interval(IntervalError),
}

impl SubmissionError {
    /// The draft field this error is attributable to, if any
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::GameMismatch => Some("team"),
            Self::Interval(error) => error.field(),
        }
    }
}

/// Every failed check from one submission validation pass
///
/// Returned as a value, not propagated as a fault: rejected drafts are an
/// expected outcome and the caller is meant to show each message next to
/// its field.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{}", .0.iter().map(|e| e.to_string()).collect::<Vec<_>>().join("; "))]
pub struct SubmissionErrors(pub Vec<SubmissionError>);
