//! Reactive wiring of a CRUD list page: rows, details dialog and delete
//! confirmation, backed by a [`RestStore`].
//!
//! State transitions live in [`CrudList`]; this type only spawns the store
//! calls and turns the resulting [`Feedback`] into toasts.

use crate::shared::crud::{CrudList, EditorState, Feedback};
use crate::shared::edit_form::EditForm;
use crate::shared::i18n::{use_i18n, FluentArgs, I18n};
use crate::shared::notify::{use_notifications, NotificationService};
use crate::shared::store::RestStore;
use contracts::domain::common::AggregateRoot;
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde::de::DeserializeOwned;

pub struct CrudPage<T: Send + Sync + 'static, D: Send + Sync + 'static> {
    pub state: RwSignal<CrudList<T>>,
    pub form: RwSignal<D>,
    /// Translation key of the current validation error.
    pub form_error: RwSignal<Option<&'static str>>,
    pub editor_open: RwSignal<bool>,
    pub delete_open: RwSignal<bool>,
    store: StoredValue<RestStore<T, D>>,
    i18n: I18n,
    notify: NotificationService,
}

impl<T: Send + Sync + 'static, D: Send + Sync + 'static> Clone for CrudPage<T, D> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static, D: Send + Sync + 'static> Copy for CrudPage<T, D> {}

impl<T, D> CrudPage<T, D>
where
    T: AggregateRoot + DeserializeOwned + Clone + Send + Sync + 'static,
    D: EditForm + for<'a> From<&'a T>,
{
    /// Creates the page state and starts loading the rows.
    pub fn new(store: RestStore<T, D>) -> Self {
        let page = Self {
            state: RwSignal::new(CrudList::new()),
            form: RwSignal::new(D::default()),
            form_error: RwSignal::new(None),
            editor_open: RwSignal::new(false),
            delete_open: RwSignal::new(false),
            store: StoredValue::new(store),
            i18n: use_i18n(),
            notify: use_notifications(),
        };

        // thaw dialogs close themselves on a mask click.
        Effect::new(move |_| {
            let editor_open = page.editor_open.get();
            let delete_open = page.delete_open.get();
            page.state
                .maybe_update(|s| s.sync_dialogs(editor_open, delete_open));
        });

        page.refresh();
        page
    }

    pub fn refresh(&self) {
        let this = *self;
        spawn_local(async move {
            let Some(store) = this.store.try_get_value() else {
                return;
            };
            let response = store.list().await;
            if let Some(feedback) = this.state.try_update(|s| s.apply_list(response)) {
                this.report(feedback);
            }
        });
    }

    pub fn open_create(&self) {
        self.state.update(|s| s.open_create());
        self.form.set(D::default());
        self.form_error.set(None);
        self.editor_open.set(true);
    }

    /// Opens the editor with the cached row, then refreshes the form from
    /// the server copy if it arrives while the editor still shows that row.
    pub fn open_edit(&self, id: String) {
        let Some(row) = self.state.with_untracked(|s| s.find(&id).cloned()) else {
            log::warn!("{}: edit of unknown row {}", T::full_name(), id);
            return;
        };
        self.state.update(|s| s.open_edit(&id));
        self.form.set(D::from(&row));
        self.form_error.set(None);
        self.editor_open.set(true);

        let this = *self;
        spawn_local(async move {
            let Some(store) = this.store.try_get_value() else {
                return;
            };
            if let Some(fresh) = store.get(&id).await.ok_data() {
                let still_open = this
                    .state
                    .try_with_untracked(|s| s.editor == EditorState::Editing(id.clone()))
                    .unwrap_or(false);
                if still_open {
                    this.form.set(D::from(&fresh));
                }
            }
        });
    }

    pub fn close_editor(&self) {
        self.state.update(|s| s.close_editor());
        self.editor_open.set(false);
    }

    /// Validates the form and sends it as a create or an update, depending
    /// on how the editor was opened.
    pub fn save(&self) {
        let dto = self.form.get_untracked().prepared();
        if let Err(key) = dto.validate() {
            self.form_error.set(Some(key));
            return;
        }
        self.form_error.set(None);

        let editor = self.state.with_untracked(|s| s.editor.clone());
        let this = *self;
        spawn_local(async move {
            let Some(store) = this.store.try_get_value() else {
                return;
            };
            let response = match editor {
                EditorState::Creating => store.create(&dto).await,
                EditorState::Editing(id) => store.update(&id, &dto).await,
                EditorState::Closed => return,
            };
            let Some(feedback) = this.state.try_update(|s| s.apply_save(&response)) else {
                return;
            };
            if matches!(feedback, Feedback::Saved { .. }) {
                this.editor_open.try_set(false);
            }
            this.report(feedback);
        });
    }

    pub fn request_delete(&self, id: String) {
        self.state.update(|s| s.request_delete(&id));
        self.delete_open.set(true);
    }

    pub fn cancel_delete(&self) {
        self.state.update(|s| s.cancel_delete());
        self.delete_open.set(false);
    }

    pub fn confirm_delete(&self) {
        self.delete_open.set(false);
        let Some(id) = self.state.with_untracked(|s| s.pending_delete.clone()) else {
            return;
        };
        let this = *self;
        spawn_local(async move {
            let Some(store) = this.store.try_get_value() else {
                return;
            };
            let response = store.remove(&id).await;
            if let Some(feedback) = this.state.try_update(|s| s.apply_delete(&id, &response)) {
                this.report(feedback);
            }
        });
    }

    /// Display name of the row awaiting delete confirmation.
    pub fn pending_delete_name(&self) -> String {
        self.state.with(|s| {
            s.pending_delete
                .as_deref()
                .and_then(|id| s.find(id))
                .map(|row| row.display_name().to_string())
                .unwrap_or_default()
        })
    }

    fn report(&self, feedback: Feedback) {
        let i18n = self.i18n;
        let mut args = FluentArgs::new();
        args.set("entity", i18n.tr(T::element_label_key()));
        match feedback {
            Feedback::Saved { message_key } => {
                self.notify.success(i18n.translate(message_key, Some(&args)));
                self.refresh();
            }
            Feedback::Deleted => {
                self.notify.success(i18n.translate("toast-deleted", Some(&args)));
            }
            Feedback::Failed {
                message_key,
                status,
            } => {
                args.set("status", status);
                self.notify.error(i18n.translate(message_key, Some(&args)));
            }
            Feedback::Silent | Feedback::None => {}
        }
    }
}
