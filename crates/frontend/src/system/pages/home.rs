//! Landing page: entity counts at a glance.

use crate::domain::a001_youtube_channel::api::channel_store;
use crate::domain::a002_youtube_video::api::video_store;
use crate::shared::i18n::use_i18n;
use crate::shared::icons::icon;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MediaCounts {
    pub channels: Option<usize>,
    pub videos: Option<usize>,
    pub unwatched: Option<usize>,
}

fn format_count(count: Option<usize>) -> String {
    count.map(|n| n.to_string()).unwrap_or_else(|| "-".to_string())
}

#[component]
pub fn HomePage() -> impl IntoView {
    let i18n = use_i18n();
    let counts = RwSignal::new(MediaCounts::default());

    let channels = channel_store();
    let videos = video_store();
    spawn_local(async move {
        let channel_count = channels.list().await.ok_data().map(|list| list.len());
        counts.try_update(|c| c.channels = channel_count);

        if let Some(list) = videos.list().await.ok_data() {
            let unwatched = list.iter().filter(|v| !v.watched).count();
            counts.try_update(|c| {
                c.videos = Some(list.len());
                c.unwatched = Some(unwatched);
            });
        }
    });

    let card = move |icon_name: &'static str, label: Signal<String>, value: fn(&MediaCounts) -> Option<usize>| {
        view! {
            <div class="stat-card">
                <div class="stat-card__icon">{icon(icon_name)}</div>
                <div class="stat-card__value">{move || format_count(counts.with(value))}</div>
                <div class="stat-card__label">{label}</div>
            </div>
        }
    };

    view! {
        <div class="page">
            <div class="header">
                <h1 class="header__title">{i18n.label("home-welcome")}</h1>
            </div>
            <div class="stat-grid">
                {card("channel", i18n.label("home-channels-count"), |c| c.channels)}
                {card("video", i18n.label("home-videos-count"), |c| c.videos)}
                {card("video", i18n.label("home-unwatched-count"), |c| c.unwatched)}
            </div>
        </div>
    }
}
