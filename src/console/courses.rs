//! Course management view
//!
//! State machine for the course list page. Courses only support the
//! create flow; rows carry the derived enrollment count, which is why a
//! full reload follows every mutation rather than a local patch of the
//! in-memory list.

use tokio_util::sync::CancellationToken;

use crate::{error::AppResult, models::CourseWithCount};

use super::{client::CatalogApi, editor::CourseEditor};

/// The course management view.
pub struct CourseConsole<C: CatalogApi> {
    client: C,
    pub search: String,
    rows: Vec<CourseWithCount>,
    error: Option<String>,
    editor: Option<CourseEditor>,
    fetch_token: CancellationToken,
}

impl<C: CatalogApi> CourseConsole<C> {
    pub fn new(client: C) -> Self {
        Self {
            client,
            search: String::new(),
            rows: Vec::new(),
            error: None,
            editor: None,
            fetch_token: CancellationToken::new(),
        }
    }

    pub fn rows(&self) -> &[CourseWithCount] {
        &self.rows
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn editor(&self) -> Option<&CourseEditor> {
        self.editor.as_ref()
    }

    pub fn editor_mut(&mut self) -> Option<&mut CourseEditor> {
        self.editor.as_mut()
    }

    /// "Add" action: open a blank course form.
    pub fn open_create(&mut self) {
        self.editor = Some(CourseEditor::default());
    }

    /// "Cancel" action: close the form, discarding the draft.
    pub fn cancel_edit(&mut self) {
        self.editor = None;
    }

    fn begin_fetch(&mut self) -> CancellationToken {
        self.fetch_token.cancel();
        self.fetch_token = CancellationToken::new();
        self.fetch_token.clone()
    }

    fn apply_fetch(&mut self, token: &CancellationToken, result: AppResult<Vec<CourseWithCount>>) {
        if token.is_cancelled() {
            return;
        }
        match result {
            Ok(rows) => {
                self.rows = rows;
                self.error = None;
            }
            Err(err) => {
                self.rows.clear();
                self.error = Some(err.to_string());
            }
        }
    }

    /// Fetch the course list with the currently active search text.
    pub async fn reload(&mut self) {
        let token = self.begin_fetch();
        let result = self.client.list_courses(&self.search).await;
        self.apply_fetch(&token, result);
    }

    /// "Submit" action: a blank course name keeps the form open with a
    /// validation message; success closes it and reloads the list so the
    /// new row appears with its (zero) enrollment count.
    pub async fn submit(&mut self) {
        let Some(editor) = self.editor.as_ref() else {
            return;
        };
        let draft = editor.draft.clone();

        if draft.course_name.trim().is_empty() {
            if let Some(editor) = self.editor.as_mut() {
                editor.notice = Some("Course name is required".to_string());
            }
            return;
        }

        match self.client.create_course(draft.to_new_course()).await {
            Ok(_) => {
                self.editor = None;
                self.reload().await;
            }
            Err(err) => {
                if let Some(editor) = self.editor.as_mut() {
                    editor.notice = Some(err.to_string());
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    use crate::{
        console::client::MockCatalogApi,
        error::AppError,
        models::Course,
    };

    fn course_row(id: i32, name: &str, count: i64) -> CourseWithCount {
        CourseWithCount {
            id,
            course_name: name.to_string(),
            lecture_id: None,
            lecturer_name: None,
            semester: None,
            description: None,
            created_at: Utc::now(),
            student_count: count,
        }
    }

    #[tokio::test]
    async fn test_submit_blank_name_stays_editing_without_calls() {
        let mut client = MockCatalogApi::new();
        client.expect_create_course().times(0);

        let mut console = CourseConsole::new(client);
        console.open_create();
        console.submit().await;

        let editor = console.editor().expect("form must stay open");
        assert!(editor.notice.is_some());
    }

    #[tokio::test]
    async fn test_submit_closes_form_and_reloads_with_search() {
        let created = Course {
            id: 1,
            course_name: "Algorithms".to_string(),
            lecture_id: None,
            semester: None,
            description: None,
            created_at: Utc::now(),
        };

        let mut client = MockCatalogApi::new();
        client
            .expect_create_course()
            .withf(|input| input.course_name == "Algorithms" && input.lecture_id.is_none())
            .return_once(move |_| Ok(created));
        client
            .expect_list_courses()
            .withf(|search| search == "algo")
            .times(1)
            .return_once(|_| Ok(vec![course_row(1, "Algorithms", 0)]));

        let mut console = CourseConsole::new(client);
        console.search = "algo".to_string();
        console.open_create();
        console.editor_mut().unwrap().draft.course_name = "Algorithms".to_string();

        console.submit().await;

        assert!(console.editor().is_none());
        assert_eq!(console.rows().len(), 1);
        assert_eq!(console.rows()[0].student_count, 0);
    }

    #[tokio::test]
    async fn test_submit_failure_keeps_draft() {
        let mut client = MockCatalogApi::new();
        client
            .expect_create_course()
            .return_once(|_| Err(AppError::Validation("course_name is required".to_string())));
        client.expect_list_courses().times(0);

        let mut console = CourseConsole::new(client);
        console.open_create();
        console.editor_mut().unwrap().draft.course_name = "Algorithms".to_string();

        console.submit().await;

        let editor = console.editor().expect("form must stay open");
        assert_eq!(editor.draft.course_name, "Algorithms");
        assert!(editor.notice.is_some());
    }

    #[tokio::test]
    async fn test_failed_fetch_flags_error_and_empties_list() {
        let mut client = MockCatalogApi::new();
        client
            .expect_list_courses()
            .return_once(|_| Err(AppError::Validation("boom".to_string())));

        let mut console = CourseConsole::new(client);
        console.rows = vec![course_row(1, "Old", 3)];
        console.reload().await;

        assert!(console.rows().is_empty());
        assert!(console.error().is_some());
    }

    #[test]
    fn test_superseded_fetch_result_is_dropped() {
        let mut console = CourseConsole::new(MockCatalogApi::new());

        let stale = console.begin_fetch();
        let fresh = console.begin_fetch();

        console.apply_fetch(&stale, Ok(vec![course_row(1, "Stale", 0)]));
        assert!(console.rows().is_empty());

        console.apply_fetch(&fresh, Ok(vec![course_row(2, "Fresh", 5)]));
        assert_eq!(console.rows()[0].course_name, "Fresh");
    }
}
