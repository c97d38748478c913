use crate::shared::i18n::use_i18n;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use thaw::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    let i18n = use_i18n();
    let navigate = use_navigate();

    view! {
        <div class="page page--centered">
            <h1 class="header__title">{i18n.label("not-found")}</h1>
            <Button
                appearance=ButtonAppearance::Primary
                on_click=move |_| navigate("/", Default::default())
            >
                {i18n.label("not-found-back")}
            </Button>
        </div>
    }
}
