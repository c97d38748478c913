use super::details::VideoDetailsDialog;
use crate::domain::a001_youtube_channel::api::channel_store;
use crate::domain::a002_youtube_video::api::video_store;
use crate::shared::confirm_dialog::ConfirmDeleteDialog;
use crate::shared::crud_page::CrudPage;
use crate::shared::i18n::{use_i18n, FluentArgs};
use crate::shared::icons::icon;
use contracts::domain::a001_youtube_channel::YoutubeChannel;
use contracts::domain::a002_youtube_video::{YoutubeVideo, YoutubeVideoDto};
use contracts::domain::common::{AggregateId, AggregateRoot};
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::collections::HashMap;
use thaw::*;

pub type VideoPage = CrudPage<YoutubeVideo, YoutubeVideoDto>;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct VideoRow {
    pub id: String,
    pub title: String,
    pub channel: String,
    pub watch_url: String,
    pub duration: String,
    pub published: String,
    pub watched: bool,
}

impl VideoRow {
    /// `channels` maps channel id to title; unknown channels show the raw id.
    pub fn new(video: &YoutubeVideo, channels: &HashMap<String, String>) -> Self {
        let channel_id = video.channel_id.as_string();
        Self {
            id: video.id.as_string(),
            title: video.title.clone(),
            channel: channels.get(&channel_id).cloned().unwrap_or(channel_id),
            watch_url: video.watch_url(),
            duration: video.formatted_duration().unwrap_or_else(|| "-".to_string()),
            published: video
                .published_at
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_else(|| "-".to_string()),
            watched: video.watched,
        }
    }
}

/// Channel choices for the video form, loaded once per page.
pub fn load_channel_options(channels: RwSignal<Vec<YoutubeChannel>>) {
    let store = channel_store();
    spawn_local(async move {
        let response = store.list().await;
        let status = response.status;
        match response.ok_data() {
            Some(list) => {
                channels.try_set(list);
            }
            None => log::warn!("channel options not loaded (status {})", status),
        }
    });
}

#[component]
pub fn VideoList() -> impl IntoView {
    let i18n = use_i18n();
    let page: VideoPage = CrudPage::new(video_store());
    let channels = RwSignal::new(Vec::<YoutubeChannel>::new());
    load_channel_options(channels);

    let channel_titles = Memo::new(move |_| {
        channels.with(|list| {
            list.iter()
                .map(|c| (c.id.as_string(), c.title.clone()))
                .collect::<HashMap<_, _>>()
        })
    });
    let rows = move || {
        channel_titles.with(|titles| {
            page.state
                .with(|s| s.items.iter().map(|v| VideoRow::new(v, titles)).collect::<Vec<_>>())
        })
    };
    let count = move || {
        let mut args = FluentArgs::new();
        args.set("count", page.state.with(|s| s.items.len()));
        i18n.translate("list-count", Some(&args))
    };
    let open_title = i18n.label("action-open");
    let placeholder = move || {
        page.state.with(|s| {
            if !s.loaded {
                Some(i18n.tr("list-loading"))
            } else if s.items.is_empty() {
                Some(i18n.tr("list-empty"))
            } else {
                None
            }
        })
    };

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{i18n.label(YoutubeVideo::list_label_key())}</h1>
                    <span class="header__meta">{count}</span>
                </div>
                <div class="header__actions">
                    <Button appearance=ButtonAppearance::Primary on_click=move |_| page.open_create()>
                        {icon("plus")}
                        {i18n.label("action-create")}
                    </Button>
                    <Button on_click=move |_| {
                        page.refresh();
                        load_channel_options(channels);
                    }>
                        {icon("refresh")}
                        {i18n.label("action-refresh")}
                    </Button>
                </div>
            </div>

            <Table>
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell>{i18n.label("field-title")}</TableHeaderCell>
                        <TableHeaderCell>{i18n.label("field-channel")}</TableHeaderCell>
                        <TableHeaderCell>{i18n.label("field-duration")}</TableHeaderCell>
                        <TableHeaderCell>{i18n.label("field-published")}</TableHeaderCell>
                        <TableHeaderCell>{i18n.label("field-watched")}</TableHeaderCell>
                        <TableHeaderCell>""</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    <For
                        each=rows
                        key=|row| row.clone()
                        children=move |row: VideoRow| {
                            let id_for_edit = row.id.clone();
                            let id_for_delete = row.id.clone();
                            view! {
                                <TableRow>
                                    <TableCell>
                                        <TableCellLayout>
                                            <a
                                                href="#"
                                                on:click=move |e| {
                                                    e.prevent_default();
                                                    page.open_edit(id_for_edit.clone());
                                                }
                                            >
                                                {row.title}
                                            </a>
                                        </TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout>{row.channel}</TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout>{row.duration}</TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout>{row.published}</TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout>
                                            <input type="checkbox" disabled=true checked=row.watched />
                                        </TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <a
                                            class="table__icon-link"
                                            href=row.watch_url
                                            target="_blank"
                                            rel="noopener"
                                            title=open_title
                                        >
                                            {icon("external-link")}
                                        </a>
                                        <Button
                                            appearance=ButtonAppearance::Subtle
                                            on_click=move |_| page.request_delete(id_for_delete.clone())
                                        >
                                            {icon("delete")}
                                        </Button>
                                    </TableCell>
                                </TableRow>
                            }
                        }
                    />
                </TableBody>
            </Table>
            {move || placeholder().map(|text| view! { <div class="page__placeholder">{text}</div> })}

            <VideoDetailsDialog page=page channels=channels />
            <ConfirmDeleteDialog
                open=page.delete_open
                name=Signal::derive(move || page.pending_delete_name())
                on_confirm=move |_| page.confirm_delete()
                on_cancel=move |_| page.cancel_delete()
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_youtube_channel::ChannelId;
    use contracts::domain::a002_youtube_video::VideoId;
    use contracts::domain::common::EntityMetadata;

    fn video(channel_id: ChannelId) -> YoutubeVideo {
        YoutubeVideo {
            id: VideoId::new_v4(),
            channel_id,
            title: "Talk".to_string(),
            video_key: "dQw4w9WgXcQ".to_string(),
            duration_seconds: Some(3725),
            published_at: None,
            watched: false,
            metadata: EntityMetadata::new(),
        }
    }

    #[test]
    fn test_row_uses_channel_title_when_known() {
        let channel_id = ChannelId::new_v4();
        let mut titles = HashMap::new();
        titles.insert(channel_id.as_string(), "Rust".to_string());
        let row = VideoRow::new(&video(channel_id), &titles);
        assert_eq!(row.channel, "Rust");
        assert_eq!(row.duration, "1:02:05");
        assert_eq!(row.published, "-");
        assert_eq!(row.watch_url, "https://www.youtube.com/watch?v=dQw4w9WgXcQ");
    }

    #[test]
    fn test_row_falls_back_to_channel_id() {
        let channel_id = ChannelId::new_v4();
        let row = VideoRow::new(&video(channel_id), &HashMap::new());
        assert_eq!(row.channel, channel_id.as_string());
    }
}
