use super::list::VideoPage;
use crate::shared::i18n::use_i18n;
use chrono::NaiveDate;
use contracts::domain::a001_youtube_channel::YoutubeChannel;
use contracts::domain::common::AggregateId;
use leptos::prelude::*;
use thaw::*;

/// Create/edit dialog for a video.
#[component]
pub fn VideoDetailsDialog(page: VideoPage, channels: RwSignal<Vec<YoutubeChannel>>) -> impl IntoView {
    let i18n = use_i18n();
    let form = page.form;

    let title = move || {
        if form.with(|f| f.id.is_some()) {
            i18n.tr("dialog-edit-video")
        } else {
            i18n.tr("dialog-new-video")
        }
    };
    let error = move || {
        page.form_error
            .get()
            .map(|key| view! { <div class="error">{i18n.tr(key)}</div> })
    };

    view! {
        <Dialog open=page.editor_open>
            <DialogSurface>
                <DialogBody>
                    <DialogTitle>{title}</DialogTitle>
                    <DialogContent>
                        <Flex vertical=true gap=FlexGap::Small>
                            {error}
                            <div class="form-group">
                                <Label>{i18n.label("field-channel")}</Label>
                                <select
                                    prop:value=move || form.with(|f| f.channel_id.clone())
                                    on:change=move |ev| form.update(|f| f.channel_id = event_target_value(&ev))
                                >
                                    <option value="">"-"</option>
                                    <For
                                        each=move || channels.get()
                                        key=|c| c.id.as_string()
                                        children=move |c: YoutubeChannel| {
                                            let id = c.id.as_string();
                                            let selected = {
                                                let id = id.clone();
                                                move || form.with(|f| f.channel_id == id)
                                            };
                                            view! { <option value=id selected=selected>{c.title}</option> }
                                        }
                                    />
                                </select>
                            </div>
                            <div class="form-group">
                                <Label>{i18n.label("field-title")}</Label>
                                <input
                                    type="text"
                                    prop:value=move || form.with(|f| f.title.clone())
                                    on:input=move |ev| form.update(|f| f.title = event_target_value(&ev))
                                />
                            </div>
                            <div class="form-group">
                                <Label>{i18n.label("field-video-key")}</Label>
                                <input
                                    type="text"
                                    placeholder="https://www.youtube.com/watch?v=..."
                                    prop:value=move || form.with(|f| f.video_key.clone())
                                    on:input=move |ev| form.update(|f| f.video_key = event_target_value(&ev))
                                />
                            </div>
                            <div class="form-group">
                                <Label>{i18n.label("field-duration")}</Label>
                                <input
                                    type="number"
                                    min="0"
                                    prop:value=move || form.with(|f| f.duration_seconds.map(|d| d.to_string()).unwrap_or_default())
                                    on:input=move |ev| {
                                        let value = event_target_value(&ev);
                                        form.update(|f| f.duration_seconds = value.trim().parse().ok());
                                    }
                                />
                            </div>
                            <div class="form-group">
                                <Label>{i18n.label("field-published")}</Label>
                                <input
                                    type="date"
                                    prop:value=move || form.with(|f| f.published_at.map(|d| d.format("%Y-%m-%d").to_string()).unwrap_or_default())
                                    on:change=move |ev| {
                                        let value = event_target_value(&ev);
                                        form.update(|f| {
                                            f.published_at = NaiveDate::parse_from_str(&value, "%Y-%m-%d").ok();
                                        });
                                    }
                                />
                            </div>
                            <label class="form-group form-group--inline">
                                <input
                                    type="checkbox"
                                    prop:checked=move || form.with(|f| f.watched)
                                    on:change=move |ev| {
                                        let checked = event_target_checked(&ev);
                                        form.update(|f| f.watched = checked);
                                    }
                                />
                                {i18n.label("field-watched")}
                            </label>
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
