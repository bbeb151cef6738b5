use crate::{ClassifiedSubmission, Scoreboard, classify_submissions, submissions_remaining};
use esti_core::models::{
    GamePhase, GameSlug, Submission, SubmissionDraft, SubmissionErrors, SubmissionId, Team, TeamId,
    UserId,
};
use esti_core::ports::{EstimathonRepository, TeamFailure};
use time::OffsetDateTime;
use tracing::{Level, event};
use uuid::Uuid;

/// Domain failure of the read operations: the addressed record is missing
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum LookupFailure {
    /// No game with the given slug
    #[error("Game not found")]
    UnknownGame,
    /// No team with the given id
    #[error("Team not found")]
    UnknownTeam,
}

/// The ways a submit request can fail on the domain level
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitFailure {
    /// No team with the given id
    #[error("Team not found")]
    UnknownTeam,
    /// The draft references a question that does not exist
    #[error("Question not found")]
    UnknownQuestion,
    /// The draft failed validation; every violated check is listed
    #[error(transparent)]
    Rejected(SubmissionErrors),
}

/// The ways a registration request can fail on the domain level
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RegisterFailure {
    /// No game with the given slug
    #[error("Game not found")]
    UnknownGame,
    /// The game is not accepting new teams
    #[error("Registration is closed for this game")]
    RegistrationClosed,
    /// The user is already on a team of this game
    #[error("User is already on a team of this game")]
    AlreadyRegistered,
    /// The game already has a team with this name
    #[error("Team with this name already exists")]
    NameInUse,
}

/// What a team sees on the submit form before sending anything
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SubmitContext {
    /// How many countable submissions the team has left
    pub submissions_remaining: u32,
    /// Where the game stands as of the request
    pub phase: GamePhase,
}

/// A team's submission history with per-entry labels, most recent first
///
/// # Panics
///
/// Panics if the stored team references a game missing from the catalog;
/// teams are only ever created under existing games, so that indicates a
/// corrupted backend rather than a bad request.
pub async fn submissions_view<R: EstimathonRepository>(
    db: &R,
    team_id: TeamId,
) -> Result<Result<Vec<ClassifiedSubmission>, LookupFailure>, R::Error> {
    let Some(team) = db.get_team(team_id).await? else {
        return Ok(Err(LookupFailure::UnknownTeam));
    };
    let game = db
        .get_game(&team.game)
        .await?
        .expect("team references a game missing from the catalog");
    let questions = db.questions_for_game(&team.game).await?;
    let submissions = db.submissions_for_team(team.id).await?;

    let mut entries = classify_submissions(&game, &questions, submissions);
    entries.reverse();
    Ok(Ok(entries))
}

/// The submit-form context for a team: remaining budget and game phase
///
/// # Panics
///
/// Panics if the stored team references a game missing from the catalog,
/// as with [`submissions_view`].
pub async fn submit_context<R: EstimathonRepository>(
    db: &R,
    team_id: TeamId,
    now: OffsetDateTime,
) -> Result<Result<SubmitContext, LookupFailure>, R::Error> {
    let Some(team) = db.get_team(team_id).await? else {
        return Ok(Err(LookupFailure::UnknownTeam));
    };
    let game = db
        .get_game(&team.game)
        .await?
        .expect("team references a game missing from the catalog");
    let submissions = db.submissions_for_team(team.id).await?;

    Ok(Ok(SubmitContext {
        submissions_remaining: submissions_remaining(&game, &submissions),
        phase: game.phase(now),
    }))
}

/// Validates a draft and appends it to the team's submission log
///
/// A draft sent outside the game window is still recorded; the history view
/// labels it rather than this operation rejecting it. Validation failures
/// come back as [`SubmitFailure::Rejected`] carrying every violated check.
pub async fn submit<R: EstimathonRepository>(
    db: &R,
    team_id: TeamId,
    draft: SubmissionDraft,
    now: OffsetDateTime,
) -> Result<Result<Submission, SubmitFailure>, R::Error> {
    let Some(team) = db.get_team(team_id).await? else {
        return Ok(Err(SubmitFailure::UnknownTeam));
    };
    let Some(question) = db.get_question(draft.question).await? else {
        return Ok(Err(SubmitFailure::UnknownQuestion));
    };

    let id = SubmissionId::from(Uuid::new_v4());
    let submission = match Submission::new(id, &team, &question, draft, now) {
        Ok(submission) => submission,
        Err(errors) => return Ok(Err(SubmitFailure::Rejected(errors))),
    };

    let submission = db.create_submission(submission).await?;
    event!(
        Level::INFO,
        submission_id = submission.id.to_string(),
        team_id = submission.team.to_string(),
        question_id = submission.question.to_string()
    );
    Ok(Ok(submission))
}

/// Registers a new single-member team in a game
pub async fn register<R: EstimathonRepository>(
    db: &R,
    slug: &GameSlug,
    team_name: String,
    user: UserId,
) -> Result<Result<Team, RegisterFailure>, R::Error> {
    let Some(game) = db.get_game(slug).await? else {
        return Ok(Err(RegisterFailure::UnknownGame));
    };
    if !game.open_for_registration {
        return Ok(Err(RegisterFailure::RegistrationClosed));
    }
    if db.team_for_user(slug, user).await?.is_some() {
        return Ok(Err(RegisterFailure::AlreadyRegistered));
    }

    let team = Team {
        id: TeamId::from(Uuid::new_v4()),
        game: game.slug,
        team_name,
        members: vec![user],
    };
    match db.create_team(team).await? {
        Ok(team) => {
            event!(
                Level::INFO,
                team_id = team.id.to_string(),
                game = team.game.to_string()
            );
            Ok(Ok(team))
        }
        Err(TeamFailure::UnknownGame) => Ok(Err(RegisterFailure::UnknownGame)),
        Err(TeamFailure::NameInUse) => Ok(Err(RegisterFailure::NameInUse)),
    }
}

/// The ranked scoreboard of a game, optionally with one team marked
pub async fn scoreboard<R: EstimathonRepository>(
    db: &R,
    slug: &GameSlug,
    highlight: Option<TeamId>,
) -> Result<Result<Scoreboard, LookupFailure>, R::Error> {
    let Some(game) = db.get_game(slug).await? else {
        return Ok(Err(LookupFailure::UnknownGame));
    };
    let questions = db.questions_for_game(slug).await?;
    let teams = db.teams_for_game(slug).await?;

    let mut histories = Vec::with_capacity(teams.len());
    for team in &teams {
        histories.push(db.submissions_for_team(team.id).await?);
    }
    let rows = teams
        .iter()
        .zip(histories.iter())
        .map(|(team, history)| (team, history.as_slice()));

    Ok(Ok(crate::scoreboard(&game, &questions, rows, highlight)))
}
