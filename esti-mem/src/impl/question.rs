use crate::MemoryStore;
use esti_core::models::{GameSlug, Question, QuestionId};
use esti_core::ports::{QuestionFailure, QuestionRepository};

impl QuestionRepository for MemoryStore {
    async fn create_question(
        &self,
        question: Question,
    ) -> Result<Result<Question, QuestionFailure>, Self::Error> {
        let mut state = self.write();
        if !state.games.contains_key(&question.game) {
            return Ok(Err(QuestionFailure::UnknownGame));
        }
        let position_taken = state.questions.values().any(|existing| {
            existing.game == question.game && existing.position == question.position
        });
        if position_taken {
            return Ok(Err(QuestionFailure::PositionInUse));
        }
        state.questions.insert(question.id, question.clone());
        Ok(Ok(question))
    }

    async fn get_question(&self, question_id: QuestionId) -> Result<Option<Question>, Self::Error> {
        Ok(self.read().questions.get(&question_id).cloned())
    }

    async fn questions_for_game(&self, slug: &GameSlug) -> Result<Vec<Question>, Self::Error> {
        let mut questions: Vec<Question> = self
            .read()
            .questions
            .values()
            .filter(|question| question.game == *slug)
            .cloned()
            .collect();
        questions.sort_by_key(|question| question.position);
        Ok(questions)
    }
}
