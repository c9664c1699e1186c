//! Storefront landing page.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::state::session::AppSession;

#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<RwSignal<AppSession>>();
    let greeting = move || {
        session.with(|s| match s.session().user() {
            Some(user) => format!("Welcome back, {}!", user.display_name()),
            None => "Everything you need, delivered.".to_owned(),
        })
    };

    view! {
        <section class="hero">
            <h1 class="hero__title">"Apni Shop"</h1>
            <p class="hero__subtitle">{greeting}</p>
            <div class="hero__actions">
                <A href="/products" attr:class="btn btn-primary">"Shop Now"</A>
                <Show when=move || !session.with(|s| s.session().is_authenticated())>
                    <A href="/register" attr:class="btn btn-secondary">"Create an account"</A>
                </Show>
            </div>
        </section>
    }
}
