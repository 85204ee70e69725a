//! Draft/published lifecycle integration tests
//!
//! - publish immutability and version monotonicity
//! - ownership checks on every write
//! - catalog visibility before and after publishing
//! - durability across reopen of a file-backed store

use pretty_assertions::assert_eq;
use tempfile::TempDir;

use syllabus_core::payloads::{CourseCreate, CourseUpdateBuilder, LessonInput};
use syllabus_db::error::CourseError;
use syllabus_db::repos::catalog::CourseFilter;
use syllabus_db::service::CourseService;

async fn test_service() -> CourseService {
    CourseService::new_local(":memory:").await.unwrap()
}

fn draft(title: &str, lessons: usize) -> CourseCreate {
    CourseCreate {
        title: title.into(),
        description: "A course".into(),
        tags: vec!["lifecycle".into()],
        lessons: (0..lessons)
            .map(|i| LessonInput {
                title: format!("Lesson {i}"),
                ..LessonInput::default()
            })
            .collect(),
        ..CourseCreate::default()
    }
}

#[tokio::test]
async fn publish_then_update_is_rejected_for_every_field() {
    let svc = test_service().await;
    let author = svc.create_author("a@example.com", "Alan").await.unwrap();
    let created = svc.create_course(&draft("Frozen", 2), &author.id).await.unwrap();
    let published = svc.publish_course(&created.id, &author.id).await.unwrap();

    let attempts = [
        CourseUpdateBuilder::new().title("x").build(),
        CourseUpdateBuilder::new().description("x").build(),
        CourseUpdateBuilder::new().tags(["x"]).build(),
        CourseUpdateBuilder::new().lessons(vec![]).build(),
        CourseUpdateBuilder::new().language(Some("German".into())).build(),
    ];
    for update in &attempts {
        let err = svc
            .update_course(&created.id, update, &author.id)
            .await
            .unwrap_err();
        assert!(matches!(err, CourseError::CannotModifyPublished));
    }

    let after = svc.find_course(&created.id, None).await.unwrap().unwrap();
    assert_eq!(after, published);
}

#[tokio::test]
async fn versions_increase_by_one_per_publish() {
    let svc = test_service().await;
    let author = svc.create_author("a@example.com", "Alan").await.unwrap();
    let created = svc.create_course(&draft("Releases", 1), &author.id).await.unwrap();
    assert_eq!(created.version, 1);

    let mut previous = created.version;
    for _ in 0..5 {
        let published = svc.publish_course(&created.id, &author.id).await.unwrap();
        assert_eq!(published.version, previous + 1);
        assert!(published.is_published);
        previous = published.version;
    }
}

#[tokio::test]
async fn drafts_do_not_bump_version() {
    let svc = test_service().await;
    let author = svc.create_author("a@example.com", "Alan").await.unwrap();
    let created = svc.create_course(&draft("Draft", 1), &author.id).await.unwrap();

    for title in ["one", "two", "three"] {
        let update = CourseUpdateBuilder::new().title(title).build();
        let updated = svc
            .update_course(&created.id, &update, &author.id)
            .await
            .unwrap();
        assert_eq!(updated.version, 1);
        assert!(!updated.is_published);
    }
}

#[tokio::test]
async fn publishing_empty_course_is_allowed() {
    let svc = test_service().await;
    let author = svc.create_author("a@example.com", "Alan").await.unwrap();
    let created = svc.create_course(&draft("Empty", 0), &author.id).await.unwrap();

    let published = svc.publish_course(&created.id, &author.id).await.unwrap();
    assert!(published.is_published);
    assert!(published.lessons.is_empty());
    assert_eq!(published.estimated_duration, 0);
}

#[tokio::test]
async fn catalog_shows_course_only_after_publish() {
    let svc = test_service().await;
    let author = svc.create_author("a@example.com", "Alan").await.unwrap();
    let created = svc.create_course(&draft("Visible", 1), &author.id).await.unwrap();

    let listed = svc.find_courses(&CourseFilter::default()).await.unwrap();
    assert!(listed.is_empty());
    assert!(svc.list_tags().await.unwrap().is_empty());

    svc.publish_course(&created.id, &author.id).await.unwrap();
    let listed = svc.find_courses(&CourseFilter::default()).await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, created.id);
    assert_eq!(svc.list_tags().await.unwrap(), vec!["lifecycle"]);
}

#[tokio::test]
async fn non_owner_cannot_touch_course() {
    let svc = test_service().await;
    let owner = svc.create_author("owner@example.com", "Owner").await.unwrap();
    let intruder = svc.create_author("intruder@example.com", "Intruder").await.unwrap();
    let created = svc.create_course(&draft("Mine", 1), &owner.id).await.unwrap();

    let update = CourseUpdateBuilder::new().title("Theirs").build();
    assert!(matches!(
        svc.update_course(&created.id, &update, &intruder.id).await,
        Err(CourseError::NotFoundOrUnauthorized)
    ));
    assert!(matches!(
        svc.publish_course(&created.id, &intruder.id).await,
        Err(CourseError::NotFoundOrUnauthorized)
    ));

    let after = svc.find_course(&created.id, None).await.unwrap().unwrap();
    assert_eq!(after, created);
}

#[tokio::test]
async fn state_survives_reopen() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("syllabus.db");
    let path = path.to_str().unwrap();

    let course_id = {
        let svc = CourseService::new_local(path).await.unwrap();
        let author = svc.create_author("a@example.com", "Alan").await.unwrap();
        let created = svc.create_course(&draft("Durable", 3), &author.id).await.unwrap();
        svc.publish_course(&created.id, &author.id).await.unwrap();
        created.id
    };

    let svc = CourseService::new_local(path).await.unwrap();
    let course = svc.find_course(&course_id, Some(2)).await.unwrap().unwrap();
    assert!(course.is_published);
    assert_eq!(course.lessons.len(), 3);
    assert_eq!(course.estimated_duration, 6);
}
