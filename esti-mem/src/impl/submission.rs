use crate::MemoryStore;
use esti_core::models::{Submission, TeamId};
use esti_core::ports::SubmissionRepository;

impl SubmissionRepository for MemoryStore {
    async fn create_submission(&self, submission: Submission) -> Result<Submission, Self::Error> {
        let mut state = self.write();
        assert!(
            state.teams.contains_key(&submission.team),
            "submission references an unknown team"
        );
        assert!(
            state.questions.contains_key(&submission.question),
            "submission references an unknown question"
        );
        state.submissions.push(submission.clone());
        Ok(submission)
    }

    async fn submissions_for_team(&self, team_id: TeamId) -> Result<Vec<Submission>, Self::Error> {
        let mut submissions: Vec<Submission> = self
            .read()
            .submissions
            .iter()
            .filter(|submission| submission.team == team_id)
            .cloned()
            .collect();
        submissions.sort_by_key(|submission| submission.submitted_at);
        Ok(submissions)
    }
}
