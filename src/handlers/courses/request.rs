//! Course request DTOs

use serde::Deserialize;
use validator::Validate;

use crate::models::NewCourse;

/// List courses query parameters
#[derive(Debug, Deserialize)]
pub struct ListCoursesQuery {
    pub search: Option<String>,
}

/// Create course request
#[derive(Debug, Deserialize, Validate)]
pub struct CreateCourseRequest {
    #[validate(length(min = 1, max = 256))]
    pub course_name: String,

    pub lecture_id: Option<i32>,

    pub semester: Option<String>,

    pub description: Option<String>,
}

impl From<CreateCourseRequest> for NewCourse {
    fn from(req: CreateCourseRequest) -> Self {
        NewCourse {
            course_name: req.course_name,
            lecture_id: req.lecture_id,
            semester: req.semester,
            description: req.description,
        }
    }
}
