//! List-page state shared by the CRUD pages.
//!
//! `CrudList` holds the rows, the editor dialog state and the pending delete
//! confirmation. Store responses are applied to it and turned into the
//! feedback the page shows; the page itself only wires signals and toasts.

use crate::shared::store::{StoreOp, StoreResponse};
use contracts::domain::common::{AggregateId, AggregateRoot};

/// What the page should tell the user after a store call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Feedback {
    /// Success toast with the given message; the list must be refreshed.
    Saved { message_key: &'static str },
    /// Success toast after a row was removed locally.
    Deleted,
    /// Error toast with the given message and status.
    Failed { message_key: &'static str, status: u16 },
    /// Nothing user-visible; the failure is only logged.
    Silent,
    None,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorState {
    Closed,
    Creating,
    Editing(String),
}

#[derive(Debug, Clone)]
pub struct CrudList<T> {
    pub items: Vec<T>,
    pub loaded: bool,
    pub editor: EditorState,
    /// Id of the row awaiting delete confirmation.
    pub pending_delete: Option<String>,
}

impl<T> Default for CrudList<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            loaded: false,
            editor: EditorState::Closed,
            pending_delete: None,
        }
    }
}

impl<T: AggregateRoot> CrudList<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn find(&self, id: &str) -> Option<&T> {
        self.items.iter().find(|item| item.id().as_string() == id)
    }

    /// Replaces the rows on success; keeps the previous rows otherwise.
    pub fn apply_list(&mut self, response: StoreResponse<Vec<T>>) -> Feedback {
        let status = response.status;
        match response.ok_data() {
            Some(items) => {
                self.items = items;
                self.loaded = true;
                Feedback::None
            }
            None => Feedback::Failed {
                message_key: "toast-load-failed",
                status,
            },
        }
    }

    pub fn open_create(&mut self) {
        self.editor = EditorState::Creating;
    }

    pub fn open_edit(&mut self, id: &str) {
        if self.find(id).is_some() {
            self.editor = EditorState::Editing(id.to_string());
        }
    }

    pub fn close_editor(&mut self) {
        self.editor = EditorState::Closed;
    }

    /// Closes the editor on success. On failure the editor stays open and
    /// the rows are left untouched until the next refresh.
    pub fn apply_save(&mut self, response: &StoreResponse<T>) -> Feedback {
        if !response.is_success() {
            return Feedback::Failed {
                message_key: "toast-save-failed",
                status: response.status,
            };
        }
        let message_key = match response.op {
            StoreOp::Update => "toast-updated",
            _ => "toast-created",
        };
        self.editor = EditorState::Closed;
        Feedback::Saved { message_key }
    }

    pub fn request_delete(&mut self, id: &str) {
        self.pending_delete = Some(id.to_string());
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    /// Drops editor and delete state whose dialog is no longer shown, e.g.
    /// after a click on the dialog mask. Returns `true` if anything changed.
    pub fn sync_dialogs(&mut self, editor_open: bool, delete_open: bool) -> bool {
        let mut changed = false;
        if !editor_open && self.editor != EditorState::Closed {
            self.editor = EditorState::Closed;
            changed = true;
        }
        if !delete_open && self.pending_delete.is_some() {
            self.pending_delete = None;
            changed = true;
        }
        changed
    }

    /// Always closes the confirmation. The row is removed only on 204;
    /// any other status is logged to the console and nothing else happens.
    pub fn apply_delete(&mut self, id: &str, response: &StoreResponse<()>) -> Feedback {
        self.pending_delete = None;
        if response.is_success() {
            self.items.retain(|item| item.id().as_string() != id);
            Feedback::Deleted
        } else {
            log::error!("delete of {} failed with status {}", id, response.status);
            Feedback::Silent
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_youtube_channel::{YoutubeChannel, YoutubeChannelDto};

    fn channel(title: &str) -> YoutubeChannel {
        YoutubeChannel::new_for_insert(&YoutubeChannelDto {
            title: title.to_string(),
            handle: title.to_lowercase(),
            ..Default::default()
        })
    }

    fn loaded(titles: &[&str]) -> CrudList<YoutubeChannel> {
        let mut list = CrudList::new();
        let items = titles.iter().map(|t| channel(t)).collect();
        list.apply_list(StoreResponse::new(StoreOp::List, 200, Some(items)));
        list
    }

    fn titles(list: &CrudList<YoutubeChannel>) -> Vec<&str> {
        list.items.iter().map(|c| c.title.as_str()).collect()
    }

    #[test]
    fn test_list_failure_keeps_rows() {
        let mut list = loaded(&["A", "B"]);
        let feedback = list.apply_list(StoreResponse::failed(StoreOp::List, 503));
        assert_eq!(
            feedback,
            Feedback::Failed {
                message_key: "toast-load-failed",
                status: 503
            }
        );
        assert_eq!(titles(&list), vec!["A", "B"]);
        assert!(list.loaded);
    }

    #[test]
    fn test_hidden_dialogs_reset_state() {
        let mut list = loaded(&["A", "B"]);
        let id = list.items[0].id().as_string();
        list.open_edit(&id);
        list.request_delete(&id);

        assert!(!list.sync_dialogs(true, true));
        assert_eq!(list.editor, EditorState::Editing(id.clone()));

        assert!(list.sync_dialogs(false, true));
        assert_eq!(list.editor, EditorState::Closed);
        assert_eq!(list.pending_delete.as_deref(), Some(id.as_str()));

        assert!(list.sync_dialogs(false, false));
        assert_eq!(list.pending_delete, None);
        assert!(!list.sync_dialogs(false, false));
    }

    #[test]
    fn test_create_201_is_saved() {
        let mut list = loaded(&["A"]);
        list.open_create();
        let created = channel("B");
        let feedback = list.apply_save(&StoreResponse::new(StoreOp::Create, 201, Some(created)));
        assert_eq!(
            feedback,
            Feedback::Saved {
                message_key: "toast-created"
            }
        );
        assert_eq!(list.editor, EditorState::Closed);
    }

    #[test]
    fn test_create_500_fails_and_leaves_list_unchanged() {
        let mut list = loaded(&["A"]);
        list.open_create();
        let feedback = list.apply_save(&StoreResponse::failed(StoreOp::Create, 500));
        assert_eq!(
            feedback,
            Feedback::Failed {
                message_key: "toast-save-failed",
                status: 500
            }
        );
        assert_eq!(list.editor, EditorState::Creating);
        assert_eq!(titles(&list), vec!["A"]);
    }

    #[test]
    fn test_update_200_reports_update() {
        let mut list = loaded(&["A"]);
        let id = list.items[0].id().as_string();
        list.open_edit(&id);
        assert_eq!(list.editor, EditorState::Editing(id));
        let feedback = list.apply_save(&StoreResponse::new(StoreOp::Update, 200, None));
        assert_eq!(
            feedback,
            Feedback::Saved {
                message_key: "toast-updated"
            }
        );
    }

    #[test]
    fn test_update_after_dismissed_editor_still_reports_update() {
        let mut list = loaded(&["A"]);
        let id = list.items[0].id().as_string();
        list.open_edit(&id);
        list.sync_dialogs(false, false);
        let feedback = list.apply_save(&StoreResponse::new(StoreOp::Update, 200, None));
        assert_eq!(
            feedback,
            Feedback::Saved {
                message_key: "toast-updated"
            }
        );
    }

    #[test]
    fn test_open_edit_ignores_unknown_id() {
        let mut list = loaded(&["A"]);
        list.open_edit("missing");
        assert_eq!(list.editor, EditorState::Closed);
    }

    #[test]
    fn test_delete_204_removes_row_and_closes_dialog() {
        let mut list = loaded(&["A", "B"]);
        let id = list.items[0].id().as_string();
        list.request_delete(&id);
        let feedback = list.apply_delete(&id, &StoreResponse::new(StoreOp::Delete, 204, None));
        assert_eq!(feedback, Feedback::Deleted);
        assert_eq!(list.pending_delete, None);
        assert_eq!(titles(&list), vec!["B"]);
    }

    #[test]
    fn test_delete_403_closes_dialog_without_removal() {
        let mut list = loaded(&["A", "B"]);
        let id = list.items[0].id().as_string();
        list.request_delete(&id);
        let feedback = list.apply_delete(&id, &StoreResponse::failed(StoreOp::Delete, 403));
        assert_eq!(feedback, Feedback::Silent);
        assert_eq!(list.pending_delete, None);
        assert_eq!(titles(&list), vec!["A", "B"]);
    }
}
