/// The identity of a game, suitable for use in URLs
///
/// Games are addressed by a short human-chosen handle rather than a
/// surrogate id. A slug is a non-empty sequence of ASCII letters, digits,
/// hyphens and underscores; anything else fails validation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct GameSlug(String);

impl GameSlug {
    /// Creates a slug from a string, validating the character set
    pub fn new(value: impl Into<String>) -> Result<Self, GameSlugError> {
        Self::try_from(value.into())
    }

    /// The slug as a plain string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for GameSlug {
    type Error = GameSlugError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if value.is_empty() {
            return Err(GameSlugError::Empty);
        }
        match value
            .chars()
            .find(|c| !(c.is_ascii_alphanumeric() || *c == '-' || *c == '_'))
        {
            Some(c) => Err(GameSlugError::UnsupportedCharacter(c)),
            None => Ok(Self(value)),
        }
    }
}

impl TryFrom<&str> for GameSlug {
    type Error = GameSlugError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::try_from(value.to_owned())
    }
}

impl From<GameSlug> for String {
    fn from(value: GameSlug) -> Self {
        value.0
    }
}

impl AsRef<str> for GameSlug {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for GameSlug {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// Errors that can occur when validating a [`GameSlug`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GameSlugError {
    /// Error when the slug is the empty string
    #[error("Slug must not be empty")]
    Empty,
    /// Error when the slug contains anything outside `[A-Za-z0-9_-]`
    #[error("Slug contains unsupported character {0:?}")]
    UnsupportedCharacter(char),
}
