use crate::models::{Submission, TeamId};
use std::future::Future;

/// Repository interface for the submission log
///
/// Submissions are append-only: there is no update or delete. This is the
/// only mutation the scoring operations ever perform.
pub trait SubmissionRepository: super::Repository {
    /// Append one submission to the log.
    ///
    /// The value was validated by [`Submission::new`], so there is no
    /// domain-level failure here; referential breakage (a team or question
    /// id that the backend has never seen) is a caller bug, and backends
    /// are free to assert on it.
    fn create_submission(
        &self,
        submission: Submission,
    ) -> impl Future<Output = Result<Submission, Self::Error>> + Send;

    /// A team's full submission history, ordered by ascending submission
    /// time.
    ///
    /// The ordering is part of the contract: eligibility is decided by
    /// arrival order, and callers must never have to fall back on storage
    /// insertion order.
    fn submissions_for_team(
        &self,
        team_id: TeamId,
    ) -> impl Future<Output = Result<Vec<Submission>, Self::Error>> + Send;
}
