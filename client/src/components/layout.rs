//! Page shells for the customer storefront and the admin console.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::{use_location, use_navigate};

use crate::components::navbar::Navbar;
use crate::pages::admin::AdminSection;
use crate::state::session::AppSession;
use crate::util::guard::LOGIN_PATH;

/// Navbar + content + footer.
#[component]
pub fn UserLayout(children: Children) -> impl IntoView {
    view! {
        <div class="user-layout">
            <Navbar/>
            <main class="user-layout__content">{children()}</main>
            <footer class="footer">
                <p>"© Apni Shop"</p>
            </footer>
        </div>
    }
}

/// Sidebar menu with the active section highlighted, plus logout.
#[component]
pub fn AdminLayout(children: Children) -> impl IntoView {
    let session = expect_context::<RwSignal<AppSession>>();
    let location = use_location();
    let navigate = use_navigate();

    let active = Memo::new(move |_| AdminSection::from_path(&location.pathname.get()));
    let admin_name = move || {
        session.with(|s| {
            s.session()
                .user()
                .map(|u| u.display_name().to_owned())
                .unwrap_or_default()
        })
    };

    let on_logout = move |_| {
        session.update(|s| s.logout());
        navigate(LOGIN_PATH, NavigateOptions::default());
    };

    let menu = AdminSection::ALL
        .into_iter()
        .map(|section| {
            let class = move || {
                if active.get() == Some(section) {
                    "admin-menu__item admin-menu__item--active"
                } else {
                    "admin-menu__item"
                }
            };
            view! {
                <A href=section.path() attr:class=class>
                    <span class="admin-menu__icon">{section.icon()}</span>
                    {section.label()}
                </A>
            }
        })
        .collect_view();

    view! {
        <div class="admin-layout">
            <aside class="admin-layout__sidebar">
                <div class="admin-layout__brand">"Apni Shop Admin"</div>
                <nav class="admin-menu">{menu}</nav>
                <div class="admin-layout__account">
                    <span class="admin-layout__name">{admin_name}</span>
                    <button class="admin-layout__logout" on:click=on_logout>"Logout"</button>
                </div>
            </aside>
            <main class="admin-layout__content">{children()}</main>
        </div>
    }
}
