use crate::Map;
use bigdecimal::{BigDecimal, Zero};
use esti_core::models::{Question, QuestionId, Submission};

/// A team's standing on one question
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QuestionOutcome {
    /// The tie-break score of the live submission, or zero
    ///
    /// Zero means the question contributes a doubling to the team's total,
    /// either because the live interval misses the answer or because nothing
    /// countable was submitted at all.
    pub score: BigDecimal,
    /// How many countable submissions the team spent on this question
    pub tries: u32,
}

/// Resolves which submission is live per question and scores it
///
/// The `countable` slice is a team's countable history in ascending arrival
/// order, as produced by [`countable_submissions`]; for each question the
/// latest entry addressing it is the live one and earlier entries only add
/// to the try count. Questions nobody answered come back with zero score and
/// zero tries. Outcomes are returned in the order `questions` yields them.
///
/// [`countable_submissions`]: crate::countable_submissions
pub fn resolve_questions<'a>(
    questions: impl IntoIterator<Item = &'a Question>,
    countable: &[&Submission],
) -> Vec<QuestionOutcome> {
    let mut live: Map<QuestionId, (u32, &Submission)> = Map::default();
    for &submission in countable {
        live.entry(submission.question)
            .and_modify(|(tries, latest)| {
                *tries += 1;
                *latest = submission;
            })
            .or_insert((1, submission));
    }

    questions
        .into_iter()
        .map(|question| match live.get(&question.id) {
            Some((tries, latest)) => QuestionOutcome {
                score: if latest.contains_answer(question) {
                    latest.interval.tie_break_score()
                } else {
                    BigDecimal::zero()
                },
                tries: *tries,
            },
            None => QuestionOutcome {
                score: BigDecimal::zero(),
                tries: 0,
            },
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use esti_core::models::{Game, GameSlug, SubmissionDraft, SubmissionId, Team, UserId};
    use std::time::Duration;
    use time::OffsetDateTime;
    use time::macros::datetime;
    use uuid::Uuid;

    fn game() -> Game {
        Game {
            slug: GameSlug::new("spring").unwrap(),
            full_name: "Spring Estimathon".into(),
            start_time: datetime!(2024-03-01 18:00 UTC),
            duration: Duration::from_secs(3600),
            submission_limit: 18,
            open_for_registration: false,
        }
    }

    fn question(game: &Game, position: u32, answer: &str) -> Question {
        Question {
            id: Uuid::new_v4().into(),
            game: game.slug.clone(),
            position,
            statement: format!("Question {position}"),
            answer: answer.parse().unwrap(),
        }
    }

    fn team(game: &Game) -> Team {
        Team {
            id: Uuid::new_v4().into(),
            game: game.slug.clone(),
            team_name: "Estimators".into(),
            members: vec![UserId::from(Uuid::new_v4())],
        }
    }

    fn submit(
        team: &Team,
        question: &Question,
        lower: &str,
        upper: &str,
        at: OffsetDateTime,
    ) -> Submission {
        Submission::new(
            SubmissionId::from(Uuid::new_v4()),
            team,
            question,
            SubmissionDraft {
                question: question.id,
                lower: lower.parse().unwrap(),
                upper: upper.parse().unwrap(),
            },
            at,
        )
        .unwrap()
    }

    #[test]
    fn test_latest_countable_submission_wins() {
        let game = game();
        let question = question(&game, 1, "42");
        let team = team(&game);

        // a correct guess followed by a tighter but wrong correction
        let first = submit(&team, &question, "40", "50", datetime!(2024-03-01 18:05 UTC));
        let second = submit(&team, &question, "43", "45", datetime!(2024-03-01 18:10 UTC));

        let outcomes = resolve_questions([&question], &[&first, &second]);
        assert_eq!(
            outcomes,
            vec![QuestionOutcome {
                score: BigDecimal::zero(),
                tries: 2,
            }]
        );
    }

    #[test]
    fn test_correct_live_submission_scores_its_tie_break() {
        let game = game();
        let question = question(&game, 1, "42");
        let team = team(&game);

        let wrong = submit(&team, &question, "1", "2", datetime!(2024-03-01 18:05 UTC));
        let right = submit(&team, &question, "3", "50", datetime!(2024-03-01 18:10 UTC));

        let outcomes = resolve_questions([&question], &[&wrong, &right]);
        assert_eq!(outcomes[0].score, BigDecimal::from(16)); // 50 / 3 rounded down
        assert_eq!(outcomes[0].tries, 2);
    }

    #[test]
    fn test_unanswered_questions_come_back_empty() {
        let game = game();
        let answered = question(&game, 1, "42");
        let untouched = question(&game, 2, "7");
        let team = team(&game);

        let only = submit(&team, &answered, "40", "50", datetime!(2024-03-01 18:05 UTC));

        let outcomes = resolve_questions([&answered, &untouched], &[&only]);
        assert_eq!(outcomes[0].tries, 1);
        assert_eq!(outcomes[1], QuestionOutcome {
            score: BigDecimal::zero(),
            tries: 0,
        });
    }

    #[test]
    fn test_tries_are_counted_per_question() {
        let game = game();
        let first = question(&game, 1, "42");
        let second = question(&game, 2, "7");
        let team = team(&game);

        let history = [
            submit(&team, &first, "40", "50", datetime!(2024-03-01 18:05 UTC)),
            submit(&team, &second, "5", "10", datetime!(2024-03-01 18:06 UTC)),
            submit(&team, &first, "41", "44", datetime!(2024-03-01 18:07 UTC)),
            submit(&team, &first, "41", "43", datetime!(2024-03-01 18:08 UTC)),
        ];
        let countable: Vec<_> = history.iter().collect();

        let outcomes = resolve_questions([&first, &second], &countable);
        assert_eq!(outcomes[0].tries, 3);
        assert_eq!(outcomes[0].score, BigDecimal::from(1)); // 43 / 41 rounded down
        assert_eq!(outcomes[1].tries, 1);
        assert_eq!(outcomes[1].score, BigDecimal::from(2)); // 10 / 5
    }
}
