use super::GameSlug;
use std::time::Duration;
use time::OffsetDateTime;

/// One estimathon event
///
/// A game owns a set of questions and a set of registered teams, and defines
/// the submission window `[start_time, start_time + duration)` together with
/// the per-team cap on counted submissions. Nothing about the clock is
/// stored: whether the game has started or ended is always derived from a
/// caller-supplied instant, so two calls with the same instant agree.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Game {
    /// The unique handle the game is addressed by
    pub slug: GameSlug,
    /// Human-readable name for display purposes
    pub full_name: String,
    /// When the submission window opens
    #[cfg_attr(feature = "serde", serde(with = "time::serde::rfc3339"))]
    pub start_time: OffsetDateTime,
    /// How long the submission window stays open
    #[cfg_attr(feature = "serde", serde(with = "humantime_serde"))]
    pub duration: Duration,
    /// How many in-window submissions per team are counted
    pub submission_limit: u32,
    /// Whether new teams may currently register
    pub open_for_registration: bool,
}

impl Game {
    /// When the submission window closes
    ///
    /// The window is half-open: a submission exactly at this instant is
    /// already too late.
    pub fn end_time(&self) -> OffsetDateTime {
        self.start_time + self.duration
    }

    /// Whether the window has opened as of `now`
    pub fn has_started(&self, now: OffsetDateTime) -> bool {
        self.start_time <= now
    }

    /// Whether the window has closed as of `now`
    pub fn has_ended(&self, now: OffsetDateTime) -> bool {
        self.end_time() <= now
    }

    /// Whether `now` falls inside the submission window
    pub fn is_running(&self, now: OffsetDateTime) -> bool {
        self.has_started(now) && !self.has_ended(now)
    }

    /// The game's lifecycle phase as of `now`
    pub fn phase(&self, now: OffsetDateTime) -> GamePhase {
        if !self.has_started(now) {
            GamePhase::Upcoming
        } else if self.has_ended(now) {
            GamePhase::Ended
        } else {
            GamePhase::Running
        }
    }
}

/// Where a game stands relative to its submission window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GamePhase {
    /// The window has not opened yet
    Upcoming,
    /// The window is open
    Running,
    /// The window has closed
    Ended,
}

impl std::fmt::Display for GamePhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Upcoming => "Upcoming",
            Self::Running => "Running",
            Self::Ended => "Ended",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    fn game() -> Game {
        Game {
            slug: GameSlug::new("spring-2024").unwrap(),
            full_name: "Spring Estimathon 2024".into(),
            start_time: datetime!(2024-03-01 18:00 UTC),
            duration: Duration::from_secs(90 * 60),
            submission_limit: 18,
            open_for_registration: true,
        }
    }

    #[test]
    fn test_end_time_derived_from_duration() {
        assert_eq!(game().end_time(), datetime!(2024-03-01 19:30 UTC));
    }

    #[test]
    fn test_phase_transitions_at_window_edges() {
        let game = game();

        let before = datetime!(2024-03-01 17:59:59 UTC);
        assert!(!game.has_started(before));
        assert_eq!(game.phase(before), GamePhase::Upcoming);

        // the window opens exactly at start_time
        assert!(game.has_started(game.start_time));
        assert!(game.is_running(game.start_time));
        assert_eq!(game.phase(game.start_time), GamePhase::Running);

        // and is already over exactly at end_time
        let end = game.end_time();
        assert!(game.has_ended(end));
        assert!(!game.is_running(end));
        assert_eq!(game.phase(end), GamePhase::Ended);
    }

    #[test]
    fn test_serde_round_trip() {
        let original = game();
        let encoded = serde_json::to_string(&original).unwrap();
        let decoded: Game = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, original);
    }
}
