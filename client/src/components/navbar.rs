//! Top navigation bar for customer-facing pages.

#[cfg(test)]
#[path = "navbar_test.rs"]
mod navbar_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::net::types::User;
use crate::state::session::AppSession;
use crate::util::guard::LOGIN_PATH;

/// One link in the account area of the navbar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct NavLink {
    pub href: &'static str,
    pub label: &'static str,
    pub class: &'static str,
}

const DASHBOARD: NavLink = NavLink { href: "/admin/dashboard", label: "Dashboard", class: "btn btn-primary" };
const ORDERS: NavLink = NavLink { href: "/orders", label: "Orders", class: "nav-link" };
const CART: NavLink = NavLink { href: "/cart", label: "Cart", class: "navbar__cart" };
const LOGIN: NavLink = NavLink { href: LOGIN_PATH, label: "Login", class: "nav-link" };
const GET_STARTED: NavLink = NavLink { href: "/register", label: "Get Started", class: "btn btn-primary" };

/// Account links for the current session. Links to guarded pages are only
/// offered to signed-in users.
pub(crate) fn account_links(is_authenticated: bool, is_admin: bool) -> Vec<NavLink> {
    match (is_authenticated, is_admin) {
        (true, true) => vec![DASHBOARD, ORDERS, CART],
        (true, false) => vec![ORDERS, CART],
        (false, _) => vec![LOGIN, GET_STARTED],
    }
}

/// Brand link, store links, and session-aware account controls.
#[component]
pub fn Navbar() -> impl IntoView {
    let session = expect_context::<RwSignal<AppSession>>();
    let navigate = use_navigate();

    let is_authenticated = move || session.with(|s| s.session().is_authenticated());
    let initial = move || {
        session
            .with(|s| s.session().user().map_or('U', User::avatar_initial))
            .to_string()
    };

    let on_logout = move |_: leptos::ev::MouseEvent| {
        session.update(|s| s.logout());
        navigate(LOGIN_PATH, NavigateOptions::default());
    };

    let links = move || {
        let (authenticated, admin) = session.with(|s| (s.session().is_authenticated(), s.session().is_admin()));
        account_links(authenticated, admin)
            .into_iter()
            .map(|link| view! { <A href=link.href attr:class=link.class>{link.label}</A> })
            .collect_view()
    };

    view! {
        <nav class="navbar">
            <A href="/" attr:class="navbar__brand">"Apni Shop"</A>
            <div class="navbar__links">
                <A href="/" attr:class="nav-link">"Home"</A>
                <A href="/products" attr:class="nav-link">"Store"</A>
                <div class="navbar__account">
                    {links}
                    <Show when=is_authenticated>
                        <span class="navbar__avatar">{initial}</span>
                        <button class="navbar__logout" on:click=on_logout.clone()>"Exit"</button>
                    </Show>
                </div>
            </div>
        </nav>
    }
}
