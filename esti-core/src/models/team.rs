use super::{GameSlug, TeamId, UserId};

/// One registered team of a game
///
/// A team exclusively owns its roster within its game: a user may be on at
/// most one team per game, which the registration operation enforces. The
/// scoring engine never looks at the roster; it exists so the surrounding
/// application can resolve a requesting user to their team.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Team {
    /// Unique identifier of this team
    pub id: TeamId,
    /// The game this team is registered for
    pub game: GameSlug,
    /// Display name, unique within the game
    pub team_name: String,
    /// The users on this team, in registration order
    pub members: Vec<UserId>,
}

impl Team {
    /// Whether `user` is on this team's roster
    pub fn has_member(&self, user: UserId) -> bool {
        self.members.contains(&user)
    }
}
