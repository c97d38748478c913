use super::details::ChannelDetailsDialog;
use crate::domain::a001_youtube_channel::api::channel_store;
use crate::shared::confirm_dialog::ConfirmDeleteDialog;
use crate::shared::crud_page::CrudPage;
use crate::shared::i18n::{use_i18n, FluentArgs};
use crate::shared::icons::icon;
use contracts::domain::a001_youtube_channel::{YoutubeChannel, YoutubeChannelDto};
use contracts::domain::common::{AggregateId, AggregateRoot};
use leptos::prelude::*;
use thaw::*;

pub type ChannelPage = CrudPage<YoutubeChannel, YoutubeChannelDto>;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ChannelRow {
    pub id: String,
    pub title: String,
    pub handle: String,
    pub url: String,
    pub subscribers: String,
    pub created_at: String,
}

impl From<&YoutubeChannel> for ChannelRow {
    fn from(c: &YoutubeChannel) -> Self {
        Self {
            id: c.id().as_string(),
            title: c.title.clone(),
            handle: c.handle.clone(),
            url: c.channel_url(),
            subscribers: c
                .subscriber_count
                .map(|n| n.to_string())
                .unwrap_or_else(|| "-".to_string()),
            created_at: c.metadata().created_at.format("%Y-%m-%d %H:%M").to_string(),
        }
    }
}

#[component]
pub fn ChannelList() -> impl IntoView {
    let i18n = use_i18n();
    let page: ChannelPage = CrudPage::new(channel_store());

    let rows = move || {
        page.state
            .with(|s| s.items.iter().map(ChannelRow::from).collect::<Vec<_>>())
    };
    let count = move || {
        let mut args = FluentArgs::new();
        args.set("count", page.state.with(|s| s.items.len()));
        i18n.translate("list-count", Some(&args))
    };
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
                    <h1 class="header__title">{i18n.label(YoutubeChannel::list_label_key())}</h1>
                    <span class="header__meta">{count}</span>
                </div>
                <div class="header__actions">
                    <Button appearance=ButtonAppearance::Primary on_click=move |_| page.open_create()>
                        {icon("plus")}
                        {i18n.label("action-create")}
                    </Button>
                    <Button on_click=move |_| page.refresh()>
                        {icon("refresh")}
                        {i18n.label("action-refresh")}
                    </Button>
                </div>
            </div>

            <Table>
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell>{i18n.label("field-title")}</TableHeaderCell>
                        <TableHeaderCell>{i18n.label("field-handle")}</TableHeaderCell>
                        <TableHeaderCell>{i18n.label("field-subscribers")}</TableHeaderCell>
                        <TableHeaderCell>{i18n.label("field-created")}</TableHeaderCell>
                        <TableHeaderCell>""</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    <For
                        each=rows
                        key=|row| row.clone()
                        children=move |row: ChannelRow| {
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
                                        <TableCellLayout>
                                            <a href=row.url target="_blank" rel="noopener">
                                                {row.handle}
                                            </a>
                                        </TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout>{row.subscribers}</TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout>{row.created_at}</TableCellLayout>
                                    </TableCell>
                                    <TableCell>
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

            <ChannelDetailsDialog page=page />
            <ConfirmDeleteDialog
                open=page.delete_open
                name=Signal::derive(move || page.pending_delete_name())
                on_confirm=move |_| page.confirm_delete()
                on_cancel=move |_| page.cancel_delete()
            />
        </div>
    }
}
