mod game;
mod interval;
mod question;
mod slug;
mod submission;
mod team;

pub use game::{Game, GamePhase};
pub use interval::{Interval, IntervalDto, IntervalError, IntervalErrors};
pub use question::Question;
pub use slug::{GameSlug, GameSlugError};
pub use submission::{Submission, SubmissionDraft, SubmissionError, SubmissionErrors};
pub use team::Team;

macro_rules! uuid_wrapper {
    ($(#[$docs:meta])* $struct: ident) => {
        $(#[$docs])*
        #[derive(Debug, Hash, PartialEq, Eq, Clone, Copy, PartialOrd, Ord)]
        #[cfg_attr(
            feature = "serde",
            derive(serde::Serialize, serde::Deserialize),
            serde(transparent)
        )]
        #[repr(transparent)]
        pub struct $struct(pub uuid::Uuid);

        impl From<uuid::Uuid> for $struct {
            fn from(value: uuid::Uuid) -> Self {
                Self(value)
            }
        }

        impl From<$struct> for uuid::Uuid {
            fn from(value: $struct) -> Self {
                value.0
            }
        }

        impl TryFrom<&str> for $struct {
            type Error = <uuid::Uuid as std::str::FromStr>::Err;

            fn try_from(value: &str) -> Result<Self, Self::Error> {
                Ok(Self(<uuid::Uuid as std::str::FromStr>::from_str(value)?))
            }
        }

        impl std::ops::Deref for $struct {
            type Target = uuid::Uuid;

            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        impl std::fmt::Display for $struct {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                self.0.fmt(f)
            }
        }
    };
}

uuid_wrapper!(
    /// Unique identifier of a [`Question`]
    QuestionId
);
uuid_wrapper!(
    /// Unique identifier of a [`Team`]
    TeamId
);
uuid_wrapper!(
    /// Unique identifier of a [`Submission`]
    SubmissionId
);
uuid_wrapper!(
    /// Opaque identifier of a registered user
    ///
    /// Accounts are managed outside this library; team rosters only record
    /// which users belong to which team, and scoring never looks at them.
    UserId
);
