use diesel::prelude::*;
use uuid::Uuid;

use super::schema::courses;
use crate::models::{Course, CourseId, CourseSummary};

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = courses)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct CourseRow {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = courses)]
pub struct NewCourseRow<'a> {
    pub title: &'a str,
    pub description: Option<&'a str>,
}

impl From<CourseRow> for Course {
    fn from(row: CourseRow) -> Self {
        Self {
            id: CourseId(row.id),
            title: row.title,
            description: row.description,
        }
    }
}

pub fn summary_from_columns((id, title): (Uuid, String)) -> CourseSummary {
    CourseSummary {
        id: CourseId(id),
        title,
    }
}
