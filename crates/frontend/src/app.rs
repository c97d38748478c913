use crate::layout::NavContext;
use crate::routes::{AppRoutes, RouteTable};
use crate::shared::config::AppConfig;
use crate::shared::i18n::I18n;
use crate::shared::notify::NotificationService;
use crate::shared::theme::ThemeContext;
use leptos::prelude::*;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    provide_context(I18n::bootstrap(&config.ui.default_locale));
    provide_context(NotificationService::new(config.ui.toast_timeout_ms));
    provide_context(ThemeContext::bootstrap());
    provide_context(RouteTable::build());
    // Page-level navigation state: active tab, sticky slot, drawer.
    provide_context(NavContext::new());
    provide_context(config);

    view! { <AppRoutes /> }
}
