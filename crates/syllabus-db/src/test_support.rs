//! Shared test utilities for syllabus-db unit tests.

use syllabus_core::entities::Author;
use syllabus_core::enums::{LessonType, QuestionType};
use syllabus_core::payloads::{
    ContentInput, CourseCreate, LessonInput, OptionInput, QuestionInput, QuizInput,
};

use crate::service::CourseService;

/// Create an in-memory `CourseService`.
pub async fn test_service() -> CourseService {
    CourseService::new_local(":memory:").await.unwrap()
}

/// Register an author and return it.
pub async fn test_author(svc: &CourseService, email: &str) -> Author {
    svc.create_author(email, "Test Author").await.unwrap()
}

pub fn lesson(title: &str) -> LessonInput {
    LessonInput {
        title: title.into(),
        ..LessonInput::default()
    }
}

pub fn lesson_with_content(title: &str, body: &str) -> LessonInput {
    LessonInput {
        title: title.into(),
        lesson_type: LessonType::Theory,
        content: Some(Some(ContentInput {
            body: body.into(),
            video_url: None,
        })),
        quiz: None,
        id: None,
    }
}

pub fn choice(text: &str, labels: &[&str]) -> QuestionInput {
    QuestionInput {
        text: text.into(),
        question_type: QuestionType::Choice,
        options: labels
            .iter()
            .map(|l| OptionInput {
                label: (*l).to_string(),
            })
            .collect(),
    }
}

pub fn quiz(questions: Vec<QuestionInput>) -> QuizInput {
    QuizInput { questions }
}

pub fn course(title: &str, lessons: Vec<LessonInput>) -> CourseCreate {
    CourseCreate {
        title: title.into(),
        description: format!("{title} description"),
        tags: vec!["rust".into()],
        lessons,
        ..CourseCreate::default()
    }
}
