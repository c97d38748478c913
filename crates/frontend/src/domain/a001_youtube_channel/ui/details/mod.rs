use super::list::ChannelPage;
use crate::shared::i18n::use_i18n;
use contracts::domain::a001_youtube_channel::YoutubeChannelDto;
use leptos::prelude::*;
use thaw::*;

/// Create/edit dialog for a channel. Open state and the form live in `page`.
#[component]
pub fn ChannelDetailsDialog(page: ChannelPage) -> impl IntoView {
    let i18n = use_i18n();
    let form = page.form;

    let title = move || {
        if form.with(|f| f.id.is_some()) {
            i18n.tr("dialog-edit-channel")
        } else {
            i18n.tr("dialog-new-channel")
        }
    };
    let error = move || {
        page.form_error
            .get()
            .map(|key| view! { <div class="error">{i18n.tr(key)}</div> })
    };

    let text_field = move |label: Signal<String>,
                           get: fn(&YoutubeChannelDto) -> String,
                           set: fn(&mut YoutubeChannelDto, String)| {
        view! {
            <div class="form-group">
                <Label>{label}</Label>
                <input
                    type="text"
                    prop:value=move || form.with(get)
                    on:input=move |ev| form.update(|f| set(f, event_target_value(&ev)))
                />
            </div>
        }
    };

    view! {
        <Dialog open=page.editor_open>
            <DialogSurface>
                <DialogBody>
                    <DialogTitle>{title}</DialogTitle>
                    <DialogContent>
                        <Flex vertical=true gap=FlexGap::Small>
                            {error}
                            {text_field(
                                i18n.label("field-title"),
                                |f| f.title.clone(),
                                |f, v| f.title = v,
                            )}
                            {text_field(
                                i18n.label("field-handle"),
                                |f| f.handle.clone(),
                                |f, v| f.handle = v,
                            )}
                            {text_field(
                                i18n.label("field-subscribers"),
                                |f| f.subscriber_count.map(|n| n.to_string()).unwrap_or_default(),
                                |f, v| f.subscriber_count = v.trim().parse().ok(),
                            )}
                            <div class="form-group">
                                <Label>{i18n.label("field-description")}</Label>
                                <textarea
                                    rows="3"
                                    prop:value=move || form.with(|f| f.description.clone().unwrap_or_default())
                                    on:input=move |ev| {
                                        let value = event_target_value(&ev);
                                        form.update(|f| {
                                            f.description = if value.is_empty() { None } else { Some(value) };
                                        });
                                    }
                                />
                            </div>
                        </Flex>
                    </DialogContent>
                    <DialogActions>
                        <Button appearance=ButtonAppearance::Primary on_click=move |_| page.save()>
                            {i18n.label("action-save")}
                        </Button>
                        <Button appearance=ButtonAppearance::Subtle on_click=move |_| page.close_editor()>
                            {i18n.label("action-cancel")}
                        </Button>
                    </DialogActions>
                </DialogBody>
            </DialogSurface>
        </Dialog>
    }
}
