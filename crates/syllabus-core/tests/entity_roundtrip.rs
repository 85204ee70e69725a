//! Serde roundtrip and JsonSchema validation tests for entities, payloads, and read models.

use chrono::Utc;
use schemars::schema_for;
use syllabus_core::entities::*;
use syllabus_core::enums::*;
use syllabus_core::payloads::*;
use syllabus_core::responses::*;

/// Validate a JSON value against a schemars-generated schema.
fn validate_against_schema(
    schema: &serde_json::Value,
    instance: &serde_json::Value,
) -> Vec<String> {
    let validator = jsonschema::validator_for(schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

macro_rules! roundtrip_and_validate {
    ($name:ident, $ty:ty, $instance:expr) => {
        #[test]
        fn $name() {
            let val: $ty = $instance;

            let json_str = serde_json::to_string_pretty(&val).unwrap();
            let recovered: $ty = serde_json::from_str(&json_str).unwrap();
            assert_eq!(
                recovered,
                val,
                "serde roundtrip failed for {}",
                stringify!($ty)
            );

            let schema = serde_json::to_value(schema_for!($ty)).unwrap();
            let instance = serde_json::to_value(&val).unwrap();
            let errors = validate_against_schema(&schema, &instance);
            assert!(
                errors.is_empty(),
                "Schema validation failed for {}: {:?}",
                stringify!($ty),
                errors
            );
        }
    };
}

roundtrip_and_validate!(
    course_roundtrip,
    Course,
    Course {
        id: "crs-a3f8b2c1".into(),
        author_id: "usr-00000001".into(),
        title: "Async Rust".into(),
        description: "Futures, executors, pinning".into(),
        difficulty: Difficulty::Senior,
        language: Some("English".into()),
        cover_url: None,
        estimated_duration: 6,
        version: 1,
        is_published: false,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
);

roundtrip_and_validate!(
    lesson_roundtrip,
    Lesson,
    Lesson {
        id: "les-0000000a".into(),
        course_id: "crs-a3f8b2c1".into(),
        title: "Pinning".into(),
        lesson_type: LessonType::Coding,
        sort_order: 2,
    }
);

roundtrip_and_validate!(
    lesson_detail_roundtrip,
    LessonDetail,
    LessonDetail {
        lesson: Lesson {
            id: "les-0000000a".into(),
            course_id: "crs-a3f8b2c1".into(),
            title: "Pinning".into(),
            lesson_type: LessonType::Theory,
            sort_order: 0,
        },
        content: Some(LessonContent {
            lesson_id: "les-0000000a".into(),
            body: "Pin<&mut T> guarantees...".into(),
            video_url: Some("https://video.example/pin".into()),
        }),
        questions: vec![QuestionDetail {
            question: Question {
                id: "qst-00000001".into(),
                lesson_id: "les-0000000a".into(),
                text: "Which trait opts out of pinning?".into(),
                question_type: QuestionType::Choice,
                sort_order: 0,
            },
            options: vec![
                QuestionOption {
                    id: "opt-00000001".into(),
                    question_id: "qst-00000001".into(),
                    label: "Unpin".into(),
                    sort_order: 0,
                },
                QuestionOption {
                    id: "opt-00000002".into(),
                    question_id: "qst-00000001".into(),
                    label: "Send".into(),
                    sort_order: 1,
                },
            ],
        }],
    }
);

roundtrip_and_validate!(
    aggregate_roundtrip,
    CourseAggregate,
    CourseAggregate {
        id: "crs-a3f8b2c1".into(),
        author_id: "usr-00000001".into(),
        author_name: "Ada".into(),
        title: "Async Rust".into(),
        description: "Futures".into(),
        difficulty: Difficulty::Middle,
        language: None,
        cover_url: Some("/images/courses/default.png".into()),
        tags: vec!["async".into(), "rust".into()],
        estimated_duration: 2,
        version: 2,
        is_published: true,
        stats: CourseStats::default(),
        lessons: vec![LessonSummary {
            id: "les-0000000a".into(),
            title: "Intro".into(),
            lesson_type: LessonType::Theory,
            sort_order: 0,
            has_quiz: false,
        }],
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
);

roundtrip_and_validate!(
    course_create_roundtrip,
    CourseCreate,
    CourseCreate {
        title: "Async Rust".into(),
        description: "Futures".into(),
        difficulty: Difficulty::Middle,
        language: Some("Rust".into()),
        cover_url: None,
        tags: vec!["async".into()],
        lessons: vec![LessonInput {
            id: None,
            title: "Intro".into(),
            lesson_type: LessonType::Theory,
            content: Some(Some(ContentInput {
                body: "hello".into(),
                video_url: None,
            })),
            quiz: Some(QuizInput {
                questions: vec![QuestionInput {
                    text: "What is a future?".into(),
                    question_type: QuestionType::LongText,
                    options: vec![],
                }],
            }),
        }],
    }
);

#[test]
fn lesson_detail_flattens_lesson_fields() {
    let detail = LessonDetail {
        lesson: Lesson {
            id: "les-0000000a".into(),
            course_id: "crs-a3f8b2c1".into(),
            title: "Intro".into(),
            lesson_type: LessonType::Theory,
            sort_order: 0,
        },
        content: None,
        questions: vec![],
    };
    let value = serde_json::to_value(&detail).unwrap();
    assert_eq!(value["id"], "les-0000000a");
    assert_eq!(value["lesson_type"], "theory");
    assert!(value["content"].is_null());
    assert!(!detail.has_quiz());
}
