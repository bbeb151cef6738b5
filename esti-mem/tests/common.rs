use esti_core::models::{Game, GameSlug, Question};
use std::time::Duration;
use time::macros::datetime;
use uuid::Uuid;

pub fn sample_game(slug: &str, submission_limit: u32) -> Game {
    Game {
        slug: GameSlug::new(slug).unwrap(),
        full_name: format!("Estimathon {slug}"),
        start_time: datetime!(2024-03-01 18:00 UTC),
        duration: Duration::from_secs(3600),
        submission_limit,
        open_for_registration: true,
    }
}

pub fn sample_question(game: &Game, position: u32, answer: &str) -> Question {
    Question {
        id: Uuid::new_v4().into(),
        game: game.slug.clone(),
        position,
        statement: format!("Question {position}"),
        answer: answer.parse().unwrap(),
    }
}
