//! Course model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Course row as stored, returned by the create operation.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Course {
    pub id: i32,
    pub course_name: String,
    pub lecture_id: Option<i32>,
    pub semester: Option<String>,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Course row with derived attributes, returned by the list operation.
///
/// `student_count` is computed per query from the enrollment table and
/// is never stored or cached across requests; `lecturer_name` is joined
/// in from the owning lecturer, when one is set.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct CourseWithCount {
    pub id: i32,
    pub course_name: String,
    pub lecture_id: Option<i32>,
    pub lecturer_name: Option<String>,
    pub semester: Option<String>,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub student_count: i64,
}

/// Input shape for course creation.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct NewCourse {
    pub course_name: String,
    pub lecture_id: Option<i32>,
    pub semester: Option<String>,
    pub description: Option<String>,
}
