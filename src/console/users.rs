//! User management view
//!
//! State machine for the account list page: filter fields, the rendered
//! list snapshot, and the conditional editor form. All state is owned by
//! this instance; there is no concurrent writer within one view.

use tokio_util::sync::CancellationToken;

use crate::{
    constants::ROLE_FILTER_ALL,
    error::AppResult,
    models::User,
};

use super::{
    ConfirmPrompt,
    client::CatalogApi,
    editor::{EditorMode, UserEditor},
};

/// Active filter state for the account list.
#[derive(Debug, Clone, PartialEq)]
pub struct UserFilter {
    pub search: String,
    pub role: String,
}

impl Default for UserFilter {
    fn default() -> Self {
        Self {
            search: String::new(),
            role: ROLE_FILTER_ALL.to_string(),
        }
    }
}

/// The account management view.
pub struct UserConsole<C: CatalogApi> {
    client: C,
    pub filter: UserFilter,
    rows: Vec<User>,
    error: Option<String>,
    editor: Option<UserEditor>,
    fetch_token: CancellationToken,
}

impl<C: CatalogApi> UserConsole<C> {
    pub fn new(client: C) -> Self {
        Self {
            client,
            filter: UserFilter::default(),
            rows: Vec::new(),
            error: None,
            editor: None,
            fetch_token: CancellationToken::new(),
        }
    }

    /// Current list snapshot.
    pub fn rows(&self) -> &[User] {
        &self.rows
    }

    /// Last surfaced view-level error, if any.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// The open editor form, if any.
    pub fn editor(&self) -> Option<&UserEditor> {
        self.editor.as_ref()
    }

    pub fn editor_mut(&mut self) -> Option<&mut UserEditor> {
        self.editor.as_mut()
    }

    /// "Add" action: open the form in create mode, from any state.
    pub fn open_create(&mut self) {
        self.editor = Some(UserEditor::create());
    }

    /// "Edit row" action: open the form over the row's field values.
    pub fn open_edit(&mut self, row: &User) {
        self.editor = Some(UserEditor::update(row));
    }

    /// "Cancel" action: close the form, discarding the draft.
    pub fn cancel_edit(&mut self) {
        self.editor = None;
    }

    /// Register a new fetch, superseding any in-flight one. The returned
    /// token identifies the fetch; a response applied after its token
    /// was cancelled is dropped, which eliminates the stale-response
    /// race between overlapping searches.
    fn begin_fetch(&mut self) -> CancellationToken {
        self.fetch_token.cancel();
        self.fetch_token = CancellationToken::new();
        self.fetch_token.clone()
    }

    /// Apply a fetch outcome, unless the fetch was superseded. A failed
    /// fetch leaves an empty list with the error flagged; the rest of
    /// the view stays usable.
    fn apply_fetch(&mut self, token: &CancellationToken, result: AppResult<Vec<User>>) {
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

    /// Fetch the list with the currently active filter state.
    pub async fn reload(&mut self) {
        let token = self.begin_fetch();
        let result = self
            .client
            .list_users(&self.filter.search, &self.filter.role)
            .await;
        self.apply_fetch(&token, result);
    }

    /// "Submit" action.
    ///
    /// Create mode requires a non-empty draft password; without one the
    /// form stays open with a validation message and nothing is sent.
    /// Update mode strips the password from the draft before calling.
    /// Success closes the form and reloads the list in full; failure
    /// keeps the form open with the draft intact and the error shown.
    pub async fn submit(&mut self) {
        let Some(editor) = self.editor.as_ref() else {
            return;
        };
        let mode = editor.mode;
        let target = editor.target_id;
        let draft = editor.draft.clone();

        let result = match mode {
            EditorMode::Create => {
                if draft.password.is_empty() {
                    if let Some(editor) = self.editor.as_mut() {
                        editor.notice =
                            Some("Password is required when creating an account".to_string());
                    }
                    return;
                }
                self.client.create_user(draft.to_new_user()).await.map(|_| ())
            }
            EditorMode::Update => {
                let Some(id) = target else {
                    return;
                };
                self.client.update_user(id, draft.to_patch()).await.map(|_| ())
            }
        };

        match result {
            Ok(()) => {
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

    /// "Delete row" action, gated on an explicit confirmation. Declined
    /// means no state change and no call; failure surfaces the error
    /// without touching the list.
    pub async fn delete(&mut self, row: &User, confirm: &dyn ConfirmPrompt) {
        if !confirm.confirm(&format!("Delete account \"{}\"?", row.name)) {
            return;
        }

        match self.client.delete_user(row.id).await {
            Ok(()) => self.reload().await,
            Err(err) => self.error = Some(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    use crate::{console::client::MockCatalogApi, error::AppError};

    struct StubConfirm(bool);

    impl ConfirmPrompt for StubConfirm {
        fn confirm(&self, _message: &str) -> bool {
            self.0
        }
    }

    fn row(id: i32, name: &str) -> User {
        User {
            id,
            name: name.to_string(),
            email: format!("{}@example.edu", name.to_lowercase().replace(' ', ".")),
            phone: None,
            role: "student".to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_add_opens_create_editor_from_any_state() {
        let mut console = UserConsole::new(MockCatalogApi::new());
        assert!(console.editor().is_none());

        console.open_create();
        let editor = console.editor().unwrap();
        assert_eq!(editor.mode, EditorMode::Create);
        assert_eq!(editor.target_id, None);

        // "Add" while editing another row resets to a blank create form
        console.open_edit(&row(3, "Le Van C"));
        console.open_create();
        let editor = console.editor().unwrap();
        assert_eq!(editor.mode, EditorMode::Create);
        assert!(editor.draft.name.is_empty());
    }

    #[test]
    fn test_cancel_discards_draft() {
        let mut console = UserConsole::new(MockCatalogApi::new());
        console.open_create();
        console.editor_mut().unwrap().draft.name = "half-typed".to_string();
        console.cancel_edit();
        assert!(console.editor().is_none());
    }

    #[tokio::test]
    async fn test_submit_create_without_password_stays_editing() {
        let mut client = MockCatalogApi::new();
        client.expect_create_user().times(0);

        let mut console = UserConsole::new(client);
        console.open_create();
        console.editor_mut().unwrap().draft.name = "Le Van C".to_string();

        console.submit().await;

        let editor = console.editor().expect("form must stay open");
        assert_eq!(editor.mode, EditorMode::Create);
        assert!(editor.notice.is_some());
        assert_eq!(editor.draft.name, "Le Van C");
    }

    #[tokio::test]
    async fn test_submit_create_with_password_closes_and_reloads() {
        let created = row(1, "Le Van C");
        let listed = created.clone();

        let mut client = MockCatalogApi::new();
        client
            .expect_create_user()
            .withf(|input| input.password.as_deref() == Some("s3cret"))
            .return_once(move |_| Ok(created));
        client
            .expect_list_users()
            .times(1)
            .return_once(move |_, _| Ok(vec![listed]));

        let mut console = UserConsole::new(client);
        console.open_create();
        {
            let draft = &mut console.editor_mut().unwrap().draft;
            draft.name = "Le Van C".to_string();
            draft.email = "c@example.edu".to_string();
            draft.password = "s3cret".to_string();
        }

        console.submit().await;

        assert!(console.editor().is_none());
        assert_eq!(console.rows().len(), 1);
        assert!(console.error().is_none());
    }

    #[tokio::test]
    async fn test_submit_update_strips_password_and_uses_target_id() {
        let existing = row(12, "Tran Thi B");
        let updated = existing.clone();

        let mut client = MockCatalogApi::new();
        client
            .expect_update_user()
            .withf(|id, patch| *id == 12 && patch.password.is_none())
            .return_once(move |_, _| Ok(updated));
        client
            .expect_list_users()
            .times(1)
            .return_once(|_, _| Ok(vec![]));

        let mut console = UserConsole::new(client);
        console.open_edit(&existing);
        // The operator typed something into the blank password field;
        // it must still not travel with the update.
        console.editor_mut().unwrap().draft.password = "typed-anyway".to_string();

        console.submit().await;

        assert!(console.editor().is_none());
    }

    #[tokio::test]
    async fn test_submit_failure_keeps_form_open_with_draft_intact() {
        let mut client = MockCatalogApi::new();
        client
            .expect_create_user()
            .return_once(|_| Err(AppError::Validation("email already in use".to_string())));
        client.expect_list_users().times(0);

        let mut console = UserConsole::new(client);
        console.open_create();
        {
            let draft = &mut console.editor_mut().unwrap().draft;
            draft.name = "Le Van C".to_string();
            draft.password = "s3cret".to_string();
        }

        console.submit().await;

        let editor = console.editor().expect("form must stay open");
        assert!(editor.notice.as_deref().unwrap().contains("email already in use"));
        assert_eq!(editor.draft.name, "Le Van C");
        assert_eq!(editor.draft.password, "s3cret");
    }

    #[tokio::test]
    async fn test_reload_uses_active_filter_after_mutation() {
        let created = row(1, "Le Van C");

        let mut client = MockCatalogApi::new();
        client.expect_create_user().return_once(move |_| Ok(created));
        client
            .expect_list_users()
            .withf(|search, role| search == "le van" && role == "student")
            .times(1)
            .return_once(|_, _| Ok(vec![]));

        let mut console = UserConsole::new(client);
        console.filter.search = "le van".to_string();
        console.filter.role = "student".to_string();
        console.open_create();
        console.editor_mut().unwrap().draft.password = "s3cret".to_string();

        console.submit().await;
    }

    #[tokio::test]
    async fn test_delete_declined_makes_no_call() {
        let mut client = MockCatalogApi::new();
        client.expect_delete_user().times(0);
        client.expect_list_users().times(0);

        let mut console = UserConsole::new(client);
        console.delete(&row(7, "Le Van C"), &StubConfirm(false)).await;

        assert!(console.error().is_none());
    }

    #[tokio::test]
    async fn test_delete_confirmed_reloads() {
        let mut client = MockCatalogApi::new();
        client
            .expect_delete_user()
            .withf(|id| *id == 7)
            .return_once(|_| Ok(()));
        client
            .expect_list_users()
            .times(1)
            .return_once(|_, _| Ok(vec![]));

        let mut console = UserConsole::new(client);
        console.delete(&row(7, "Le Van C"), &StubConfirm(true)).await;

        assert!(console.error().is_none());
    }

    #[tokio::test]
    async fn test_delete_failure_surfaces_error_without_touching_list() {
        let mut client = MockCatalogApi::new();
        client
            .expect_delete_user()
            .return_once(|_| Err(AppError::NotFound("user 7 not found".to_string())));
        client.expect_list_users().times(0);

        let mut console = UserConsole::new(client);
        console.rows = vec![row(7, "Le Van C")];
        console.delete(&row(7, "Le Van C"), &StubConfirm(true)).await;

        assert!(console.error().unwrap().contains("not found"));
        assert_eq!(console.rows().len(), 1);
    }

    #[test]
    fn test_superseded_fetch_result_is_dropped() {
        let mut console = UserConsole::new(MockCatalogApi::new());

        let stale = console.begin_fetch();
        let fresh = console.begin_fetch();

        console.apply_fetch(&stale, Ok(vec![row(1, "Stale Row")]));
        assert!(console.rows().is_empty());

        console.apply_fetch(&fresh, Ok(vec![row(2, "Fresh Row")]));
        assert_eq!(console.rows().len(), 1);
        assert_eq!(console.rows()[0].name, "Fresh Row");
    }

    #[tokio::test]
    async fn test_failed_fetch_leaves_empty_list_with_error_flag() {
        let mut client = MockCatalogApi::new();
        client
            .expect_list_users()
            .return_once(|_, _| Err(AppError::Validation("boom".to_string())));

        let mut console = UserConsole::new(client);
        console.rows = vec![row(1, "Old Row")];
        console.reload().await;

        assert!(console.rows().is_empty());
        assert!(console.error().is_some());
    }
}
