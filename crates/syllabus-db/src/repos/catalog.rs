//! Catalog reads: single-course lookup, published listings, author dashboards,
//! tag index, and lesson detail. All reads go through the Projection Builder.

use std::collections::BTreeSet;

use syllabus_core::enums::{CourseSort, Difficulty};
use syllabus_core::responses::{CourseAggregate, LessonDetail};

use crate::error::CourseError;
use crate::helpers::like_pattern;
use crate::projection::{self, AGGREGATE_SELECT};
use crate::service::CourseService;
use crate::store::tag;

/// Filters for the published catalog. Empty fields do not filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CourseFilter {
    /// Case-insensitive substring of title, description, or author name.
    pub search: Option<String>,
    pub difficulty: Option<Difficulty>,
    pub language: Option<String>,
    /// A course must carry every listed tag.
    pub tags: Vec<String>,
    pub sort: CourseSort,
    pub limit: Option<u32>,
}

impl CourseFilter {
    /// Render the `WHERE`/`ORDER BY`/`LIMIT` tail and its positional parameters.
    fn to_sql(&self) -> (String, Vec<libsql::Value>) {
        let mut conditions = vec!["c.is_published = 1".to_string()];
        let mut params: Vec<libsql::Value> = Vec::new();

        if let Some(search) = self
            .search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
        {
            params.push(like_pattern(search).into());
            let n = params.len();
            conditions.push(format!(
                "(c.title LIKE ?{n} ESCAPE '\\' OR c.description LIKE ?{n} ESCAPE '\\' \
                 OR a.full_name LIKE ?{n} ESCAPE '\\')"
            ));
        }

        if let Some(difficulty) = self.difficulty {
            params.push(difficulty.as_str().into());
            conditions.push(format!("c.difficulty = ?{}", params.len()));
        }

        if let Some(language) = &self.language {
            params.push(language.clone().into());
            conditions.push(format!("c.language = ?{}", params.len()));
        }

        let tags: BTreeSet<&str> = self.tags.iter().map(String::as_str).collect();
        if !tags.is_empty() {
            let placeholders: Vec<String> = tags
                .iter()
                .map(|t| {
                    params.push((*t).to_string().into());
                    format!("?{}", params.len())
                })
                .collect();
            conditions.push(format!(
                "c.id IN (SELECT course_id FROM course_tags WHERE tag IN ({})
                          GROUP BY course_id HAVING COUNT(DISTINCT tag) = {})",
                placeholders.join(", "),
                tags.len()
            ));
        }

        let mut sql = format!(
            " WHERE {} ORDER BY {}",
            conditions.join(" AND "),
            self.sort.order_by()
        );
        if let Some(limit) = self.limit {
            params.push(i64::from(limit).into());
            sql = format!("{sql} LIMIT ?{}", params.len());
        }
        (sql, params)
    }
}

impl CourseService {
    /// Aggregate of one course, drafts included.
    ///
    /// With `version`, returns `None` unless the stored version matches.
    /// Only the current version of a course is kept.
    pub async fn find_course(
        &self,
        course_id: &str,
        version: Option<u32>,
    ) -> Result<Option<CourseAggregate>, CourseError> {
        let conn = self.db().checkout().await?;
        let found = projection::course(&conn, course_id).await?;
        Ok(found.filter(|c| version.is_none_or(|v| c.version == v)))
    }

    /// Published courses matching `filter`.
    pub async fn find_courses(
        &self,
        filter: &CourseFilter,
    ) -> Result<Vec<CourseAggregate>, CourseError> {
        let (tail, params) = filter.to_sql();
        let sql = format!("{AGGREGATE_SELECT}{tail}");
        tracing::debug!(sort = %filter.sort, tags = filter.tags.len(), "listing published courses");

        let conn = self.db().checkout().await?;
        Ok(projection::courses(&conn, &sql, params).await?)
    }

    /// Every course of one author, drafts included, newest first.
    pub async fn find_courses_by_author(
        &self,
        author_id: &str,
    ) -> Result<Vec<CourseAggregate>, CourseError> {
        let sql = format!(
            "{AGGREGATE_SELECT} WHERE c.author_id = ?1 ORDER BY {}",
            CourseSort::Newest.order_by()
        );
        let conn = self.db().checkout().await?;
        Ok(projection::courses(&conn, &sql, vec![author_id.into()]).await?)
    }

    /// Distinct tags carried by at least one published course, sorted.
    pub async fn list_tags(&self) -> Result<Vec<String>, CourseError> {
        let conn = self.db().checkout().await?;
        Ok(tag::published_distinct(&conn).await?)
    }

    pub async fn find_lesson(&self, lesson_id: &str) -> Result<Option<LessonDetail>, CourseError> {
        let conn = self.db().checkout().await?;
        Ok(projection::lesson_detail(&conn, lesson_id).await?)
    }
}
