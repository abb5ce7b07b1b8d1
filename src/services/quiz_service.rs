//! Quiz service: serving, grading and question management

use std::collections::HashMap;

use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::{
    constants::POINTS_PER_CORRECT_ANSWER,
    db::repositories::{QuestionRepository, ScoreRepository},
    error::{AppError, AppResult},
    handlers::{
        admin::request::{CreateQuestionRequest, UpdateQuestionRequest},
        topics::response::{PublicQuestion, QuestionResult, QuizResponse, QuizResultResponse},
    },
    models::QuizQuestion,
    services::TopicService,
    utils::{sanitize_string, validation::answer_in_range},
};

/// Quiz service for business logic
pub struct QuizService;

impl QuizService {
    /// Quiz of a published topic, answers hidden
    pub async fn get_quiz(pool: &PgPool, topic_id: &Uuid) -> AppResult<QuizResponse> {
        let topic = TopicService::get_published_topic(pool, topic_id).await?;
        let questions = QuestionRepository::list_by_topic(pool, topic_id).await?;

        Ok(QuizResponse {
            topic_id: topic.id,
            topic_title: topic.title,
            questions: questions.into_iter().map(PublicQuestion::from).collect(),
        })
    }

    /// Grade an attempt and store the result as the user's score for the topic
    pub async fn submit_quiz(
        pool: &PgPool,
        user_id: &Uuid,
        topic_id: &Uuid,
        answers: &HashMap<Uuid, i32>,
    ) -> AppResult<QuizResultResponse> {
        TopicService::get_published_topic(pool, topic_id).await?;
        let questions = QuestionRepository::list_by_topic(pool, topic_id).await?;

        let result = grade_answers(*topic_id, &questions, answers)?;

        ScoreRepository::upsert(pool, user_id, topic_id, result.score).await?;

        info!(
            user_id = %user_id,
            topic_id = %topic_id,
            score = result.score,
            correct = result.correct_count,
            total = result.total_questions,
            "Quiz graded"
        );

        Ok(result)
    }

    /// All questions of a topic with answers (admin view)
    pub async fn list_questions(pool: &PgPool, topic_id: &Uuid) -> AppResult<Vec<QuizQuestion>> {
        TopicService::get_topic(pool, topic_id).await?;
        QuestionRepository::list_by_topic(pool, topic_id).await
    }

    /// Add a question to a topic
    pub async fn create_question(
        pool: &PgPool,
        topic_id: &Uuid,
        payload: CreateQuestionRequest,
    ) -> AppResult<QuizQuestion> {
        TopicService::get_topic(pool, topic_id).await?;

        if !answer_in_range(payload.answer_index, payload.choices.len()) {
            return Err(AppError::Validation(
                "answer_index must point to one of the choices".to_string(),
            ));
        }

        let position = match payload.position {
            Some(position) => position,
            None => QuestionRepository::next_position(pool, topic_id).await?,
        };

        let question = QuestionRepository::create(
            pool,
            topic_id,
            &sanitize_string(&payload.question),
            &payload.choices,
            payload.answer_index,
            payload.explanation.as_deref(),
            position,
        )
        .await?;

        info!(question_id = %question.id, topic_id = %topic_id, "Question created");
        Ok(question)
    }

    /// Update a question. Choices and answer index are checked against each
    /// other after merging with the stored question.
    pub async fn update_question(
        pool: &PgPool,
        id: &Uuid,
        payload: UpdateQuestionRequest,
    ) -> AppResult<QuizQuestion> {
        let existing = QuestionRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Question not found".to_string()))?;

        let question = payload
            .question
            .as_deref()
            .map(sanitize_string)
            .unwrap_or(existing.question);
        let choices = payload.choices.unwrap_or(existing.choices);
        let answer_index = payload.answer_index.unwrap_or(existing.answer_index);
        let explanation = payload.explanation.or(existing.explanation);
        let position = payload.position.unwrap_or(existing.position);

        if !answer_in_range(answer_index, choices.len()) {
            return Err(AppError::Validation(
                "answer_index must point to one of the choices".to_string(),
            ));
        }

        let updated = QuestionRepository::update(
            pool,
            id,
            &question,
            &choices,
            answer_index,
            explanation.as_deref(),
            position,
        )
        .await?;

        info!(question_id = %id, "Question updated");
        Ok(updated)
    }

    /// Delete a question
    pub async fn delete_question(pool: &PgPool, id: &Uuid) -> AppResult<()> {
        if !QuestionRepository::delete(pool, id).await? {
            return Err(AppError::NotFound("Question not found".to_string()));
        }

        info!(question_id = %id, "Question deleted");
        Ok(())
    }
}

/// Grade a quiz attempt.
///
/// Every correct answer is worth [`POINTS_PER_CORRECT_ANSWER`]. Unanswered
/// questions and out-of-range choices count as wrong. Answers for questions
/// outside `questions` are rejected.
pub fn grade_answers(
    topic_id: Uuid,
    questions: &[QuizQuestion],
    answers: &HashMap<Uuid, i32>,
) -> AppResult<QuizResultResponse> {
    if questions.is_empty() {
        return Err(AppError::InvalidInput(
            "This topic has no quiz questions".to_string(),
        ));
    }

    if let Some(unknown) = answers
        .keys()
        .find(|id| !questions.iter().any(|q| q.id == **id))
    {
        return Err(AppError::InvalidInput(format!(
            "Question {} is not part of this quiz",
            unknown
        )));
    }

    let results: Vec<QuestionResult> = questions
        .iter()
        .map(|q| {
            let selected = answers.get(&q.id).copied();
            QuestionResult {
                question_id: q.id,
                selected,
                correct_index: q.answer_index,
                is_correct: selected.is_some_and(|choice| q.is_correct(choice)),
                explanation: q.explanation.clone(),
            }
        })
        .collect();

    let correct_count = results.iter().filter(|r| r.is_correct).count();
    let total_questions = questions.len();

    Ok(QuizResultResponse {
        topic_id,
        score: correct_count as i64 * POINTS_PER_CORRECT_ANSWER,
        max_score: total_questions as i64 * POINTS_PER_CORRECT_ANSWER,
        correct_count,
        total_questions,
        results,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn question(answer_index: i32, position: i32) -> QuizQuestion {
        QuizQuestion {
            id: Uuid::new_v4(),
            topic_id: Uuid::nil(),
            question: format!("Question {}", position),
            choices: vec!["a".into(), "b".into(), "c".into()],
            answer_index,
            explanation: Some("because".to_string()),
            position,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_all_correct() {
        let questions = vec![question(0, 0), question(2, 1)];
        let answers = HashMap::from([(questions[0].id, 0), (questions[1].id, 2)]);

        let result = grade_answers(Uuid::nil(), &questions, &answers).unwrap();

        assert_eq!(result.score, 20);
        assert_eq!(result.max_score, 20);
        assert_eq!(result.correct_count, 2);
        assert!(result.results.iter().all(|r| r.is_correct));
    }

    #[test]
    fn test_missing_and_wrong_answers_score_zero() {
        let questions = vec![question(1, 0), question(1, 1), question(1, 2)];
        let answers = HashMap::from([(questions[0].id, 1), (questions[1].id, 0)]);

        let result = grade_answers(Uuid::nil(), &questions, &answers).unwrap();

        assert_eq!(result.score, 10);
        assert_eq!(result.max_score, 30);
        assert_eq!(result.correct_count, 1);
        assert_eq!(result.total_questions, 3);
        assert_eq!(result.results[1].selected, Some(0));
        assert!(!result.results[1].is_correct);
        assert_eq!(result.results[2].selected, None);
        assert!(!result.results[2].is_correct);
    }

    #[test]
    fn test_out_of_range_choice_is_wrong() {
        let questions = vec![question(0, 0)];
        let answers = HashMap::from([(questions[0].id, 7)]);

        let result = grade_answers(Uuid::nil(), &questions, &answers).unwrap();
        assert_eq!(result.score, 0);
    }

    #[test]
    fn test_results_follow_question_order() {
        let questions = vec![question(0, 0), question(0, 1), question(0, 2)];
        let result = grade_answers(Uuid::nil(), &questions, &HashMap::new()).unwrap();

        let ids: Vec<Uuid> = result.results.iter().map(|r| r.question_id).collect();
        let expected: Vec<Uuid> = questions.iter().map(|q| q.id).collect();
        assert_eq!(ids, expected);
    }

    #[test]
    fn test_unknown_question_rejected() {
        let questions = vec![question(0, 0)];
        let answers = HashMap::from([(questions[0].id, 0), (Uuid::new_v4(), 1)]);

        let err = grade_answers(Uuid::nil(), &questions, &answers).unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(_)));
    }

    #[test]
    fn test_empty_quiz_rejected() {
        let err = grade_answers(Uuid::nil(), &[], &HashMap::new()).unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(_)));
    }
}
