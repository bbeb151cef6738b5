mod game;
mod question;
mod submission;
mod team;

pub use game::{GameFailure, GameRepository};
pub use question::{QuestionFailure, QuestionRepository};
pub use submission::SubmissionRepository;
pub use team::{TeamFailure, TeamRepository};

/// Common contract shared by every repository trait
///
/// Domain failures (conflicts, not-found) travel inside the `Ok` variant of
/// each operation, so this error type is reserved for the backend's own
/// problems: connectivity, corruption and the like. A caller that receives
/// `Self::Error` can only retry or give up; a caller that receives a domain
/// failure can fix its request.
pub trait Repository: Send + Sync {
    /// The backend-specific failure type
    type Error: std::error::Error + Send + Sync + 'static;
}

/// The "marker" trait used by the scoring operations, implying a complete backend
pub trait EstimathonRepository:
    GameRepository + QuestionRepository + TeamRepository + SubmissionRepository
{
}
