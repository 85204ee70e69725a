//! Publisher: the draft-to-published transition.

use syllabus_core::responses::CourseAggregate;

use super::course::projected;
use crate::error::CourseError;
use crate::helpers::now;
use crate::service::CourseService;
use crate::store::{course, lesson};
use crate::unit_of_work::UnitOfWork;

impl CourseService {
    /// Publish a course, or cut a new release of an already published one.
    ///
    /// Sets `is_published` and increments `version` in a single statement.
    /// Every call increments the version again.
    ///
    /// # Errors
    ///
    /// - `CourseError::NotFoundOrUnauthorized` if the course does not exist or
    ///   belongs to someone else.
    /// - `CourseError::Persistence` if the write fails, or if it committed but
    ///   reading it back failed.
    pub async fn publish_course(
        &self,
        course_id: &str,
        author_id: &str,
    ) -> Result<CourseAggregate, CourseError> {
        let conn = self.db().checkout().await?;
        let uow = UnitOfWork::begin(&conn).await?;
        let result = apply_publish(uow.conn(), course_id, author_id).await;
        uow.finish(result).await?;

        let aggregate = projected(&conn, course_id).await?;
        tracing::info!(course_id, author_id, version = aggregate.version, "course published");
        Ok(aggregate)
    }
}

async fn apply_publish(
    conn: &libsql::Connection,
    course_id: &str,
    author_id: &str,
) -> Result<(), CourseError> {
    let changed = course::publish(conn, course_id, author_id, now()).await?;
    if changed == 0 {
        return Err(CourseError::NotFoundOrUnauthorized);
    }

    // Allowed, but worth noticing.
    if lesson::count(conn, course_id).await? == 0 {
        tracing::warn!(course_id, "publishing a course with no lessons");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use syllabus_core::payloads::CourseUpdateBuilder;

    use crate::error::CourseError;
    use crate::test_support::{course, lesson, test_author, test_service};

    #[tokio::test]
    async fn publish_flips_flag_and_bumps_version() {
        let svc = test_service().await;
        let author = test_author(&svc, "a@example.com").await;
        let created = svc
            .create_course(&course("C", vec![lesson("a")]), &author.id)
            .await
            .unwrap();

        let published = svc.publish_course(&created.id, &author.id).await.unwrap();
        assert!(published.is_published);
        assert_eq!(published.version, 2);
        assert_eq!(published.lessons, created.lessons);
    }

    #[tokio::test]
    async fn repeated_publish_keeps_incrementing() {
        let svc = test_service().await;
        let author = test_author(&svc, "a@example.com").await;
        let created = svc.create_course(&course("C", vec![]), &author.id).await.unwrap();

        let mut versions = Vec::new();
        for _ in 0..3 {
            let published = svc.publish_course(&created.id, &author.id).await.unwrap();
            assert!(published.is_published);
            versions.push(published.version);
        }
        assert_eq!(versions, vec![2, 3, 4]);
    }

    #[tokio::test]
    async fn publish_by_other_author_changes_nothing() {
        let svc = test_service().await;
        let owner = test_author(&svc, "owner@example.com").await;
        let other = test_author(&svc, "other@example.com").await;
        let created = svc.create_course(&course("C", vec![]), &owner.id).await.unwrap();

        let err = svc.publish_course(&created.id, &other.id).await.unwrap_err();
        assert!(matches!(err, CourseError::NotFoundOrUnauthorized));

        let current = svc.find_course(&created.id, None).await.unwrap().unwrap();
        assert!(!current.is_published);
        assert_eq!(current.version, 1);
    }

    #[tokio::test]
    async fn publish_unknown_course_is_not_found() {
        let svc = test_service().await;
        let author = test_author(&svc, "a@example.com").await;
        let err = svc.publish_course("crs-00000000", &author.id).await.unwrap_err();
        assert!(matches!(err, CourseError::NotFoundOrUnauthorized));
    }

    #[tokio::test]
    async fn published_course_rejects_updates() {
        let svc = test_service().await;
        let author = test_author(&svc, "a@example.com").await;
        let created = svc
            .create_course(&course("C", vec![lesson("a")]), &author.id)
            .await
            .unwrap();
        let published = svc.publish_course(&created.id, &author.id).await.unwrap();

        let update = CourseUpdateBuilder::new()
            .title("changed")
            .lessons(vec![])
            .build();
        let err = svc
            .update_course(&created.id, &update, &author.id)
            .await
            .unwrap_err();
        assert!(matches!(err, CourseError::CannotModifyPublished));

        let after = svc.find_course(&created.id, None).await.unwrap().unwrap();
        assert_eq!(after, published);
    }
}
