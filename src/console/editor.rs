//! Record editor drafts
//!
//! One reusable form per entity, serving both the create and the edit
//! flow. A draft holds raw form field values; conversion into service
//! input shapes happens at submit time.

use crate::models::{NewCourse, NewUser, Role, User, UserPatch};

/// Which flow the open form is serving.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorMode {
    Create,
    Update,
}

/// Raw field values of the account form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserDraft {
    pub name: String,
    pub email: String,
    pub password: String,
    pub phone: String,
    pub role: String,
}

impl UserDraft {
    /// Blank defaults for the create flow.
    pub fn blank() -> Self {
        Self {
            role: Role::Student.as_str().to_string(),
            ..Self::default()
        }
    }

    /// Field values copied from an existing row; the password field is
    /// always blank, the stored password is never shown or round-tripped.
    pub fn from_row(row: &User) -> Self {
        Self {
            name: row.name.clone(),
            email: row.email.clone(),
            password: String::new(),
            phone: row.phone.clone().unwrap_or_default(),
            role: row.role.clone(),
        }
    }

    /// Creation input: the password travels, an empty phone becomes
    /// absent.
    pub fn to_new_user(&self) -> NewUser {
        NewUser {
            name: self.name.clone(),
            email: self.email.clone(),
            password: (!self.password.is_empty()).then(|| self.password.clone()),
            phone: (!self.phone.is_empty()).then(|| self.phone.clone()),
            role: self.role.clone(),
        }
    }

    /// Update input with the password stripped before it leaves the
    /// draft.
    pub fn to_patch(&self) -> UserPatch {
        UserPatch {
            name: Some(self.name.clone()),
            email: Some(self.email.clone()),
            phone: (!self.phone.is_empty()).then(|| self.phone.clone()),
            role: Some(self.role.clone()),
            password: None,
        }
    }
}

/// The open account form: mode, target, draft, and any message to show
/// the operator.
#[derive(Debug, Clone, PartialEq)]
pub struct UserEditor {
    pub mode: EditorMode,
    pub target_id: Option<i32>,
    pub draft: UserDraft,
    pub notice: Option<String>,
}

impl UserEditor {
    /// Open the form in create mode with blank defaults.
    pub fn create() -> Self {
        Self {
            mode: EditorMode::Create,
            target_id: None,
            draft: UserDraft::blank(),
            notice: None,
        }
    }

    /// Open the form in update mode over an existing row.
    pub fn update(row: &User) -> Self {
        Self {
            mode: EditorMode::Update,
            target_id: Some(row.id),
            draft: UserDraft::from_row(row),
            notice: None,
        }
    }
}

/// Raw field values of the course form (create flow only).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CourseDraft {
    pub course_name: String,
    pub lecture_id: Option<i32>,
    pub semester: String,
    pub description: String,
}

impl CourseDraft {
    pub fn to_new_course(&self) -> NewCourse {
        NewCourse {
            course_name: self.course_name.clone(),
            lecture_id: self.lecture_id,
            semester: (!self.semester.is_empty()).then(|| self.semester.clone()),
            description: (!self.description.is_empty()).then(|| self.description.clone()),
        }
    }
}

/// The open course form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CourseEditor {
    pub draft: CourseDraft,
    pub notice: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn row() -> User {
        User {
            id: 12,
            name: "Tran Thi B".to_string(),
            email: "b.tran@example.edu".to_string(),
            phone: Some("0901234567".to_string()),
            role: "lecturer".to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_create_editor_starts_blank_with_student_role() {
        let editor = UserEditor::create();
        assert_eq!(editor.mode, EditorMode::Create);
        assert_eq!(editor.target_id, None);
        assert_eq!(editor.draft.role, "student");
        assert!(editor.draft.password.is_empty());
    }

    #[test]
    fn test_update_editor_copies_fields_but_never_the_password() {
        let editor = UserEditor::update(&row());
        assert_eq!(editor.mode, EditorMode::Update);
        assert_eq!(editor.target_id, Some(12));
        assert_eq!(editor.draft.name, "Tran Thi B");
        assert_eq!(editor.draft.phone, "0901234567");
        assert!(editor.draft.password.is_empty());
    }

    #[test]
    fn test_patch_strips_password() {
        let mut draft = UserDraft::from_row(&row());
        draft.password = "should-not-travel".to_string();
        let patch = draft.to_patch();
        assert_eq!(patch.password, None);
        assert_eq!(patch.name.as_deref(), Some("Tran Thi B"));
        assert_eq!(patch.role.as_deref(), Some("lecturer"));
    }

    #[test]
    fn test_empty_optional_fields_become_absent() {
        let draft = UserDraft {
            name: "C".to_string(),
            email: "c@example.edu".to_string(),
            password: "pw".to_string(),
            phone: String::new(),
            role: "student".to_string(),
        };
        let input = draft.to_new_user();
        assert_eq!(input.phone, None);
        assert_eq!(input.password.as_deref(), Some("pw"));

        let course = CourseDraft {
            course_name: "Algorithms".to_string(),
            ..CourseDraft::default()
        };
        let input = course.to_new_course();
        assert_eq!(input.semester, None);
        assert_eq!(input.description, None);
        assert_eq!(input.lecture_id, None);
    }
}
