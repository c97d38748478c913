use crate::shared::i18n::{use_i18n, FluentArgs};
use leptos::prelude::*;
use thaw::*;

/// Delete confirmation for a single named record.
#[component]
pub fn ConfirmDeleteDialog(
    open: RwSignal<bool>,
    #[prop(into)] name: Signal<String>,
    #[prop(into)] on_confirm: Callback<()>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    let i18n = use_i18n();
    let title = move || i18n.tr("confirm-delete-title");
    let body = move || {
        let mut args = FluentArgs::new();
        args.set("name", name.get());
        i18n.translate("confirm-delete-body", Some(&args))
    };
    let delete_label = move || i18n.tr("action-delete");
    let cancel_label = move || i18n.tr("action-cancel");

    view! {
        <Dialog open=open>
            <DialogSurface>
                <DialogBody>
                    <DialogTitle>{title}</DialogTitle>
                    <DialogContent>{body}</DialogContent>
                    <DialogActions>
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=move |_| on_confirm.run(())
                        >
                            {delete_label}
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Subtle
                            on_click=move |_| on_cancel.run(())
                        >
                            {cancel_label}
                        </Button>
                    </DialogActions>
                </DialogBody>
            </DialogSurface>
        </Dialog>
    }
}
