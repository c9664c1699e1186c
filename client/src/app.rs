//! Root application component with routing and the session context.
//!
//! ARCHITECTURE
//! ============
//! `App` builds the single session store, provides it as context, and lays out
//! the route table. Protected routes are wrapped in `<Protected>` with their
//! declared access level; `util::guard::ROUTES` mirrors the same table.
//!
//! The store is hydrated from storage inside an effect. Effects only run in
//! the browser, so the server render stays in the loading state and protected
//! routes render the pending indicator instead of redirecting.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::layout::{AdminLayout, UserLayout};
use crate::components::protected::Protected;
use crate::net::api::HttpBackend;
use crate::pages::admin::{AdminSection, AdminSectionPage};
use crate::pages::home::HomePage;
use crate::pages::login::{AdminLoginPage, LoginPage};
use crate::pages::register::RegisterPage;
use crate::pages::shop::{CartPage, CheckoutPage, OrdersPage, ProductDetailPage, ProductsPage};
use crate::state::session::AppSession;
use crate::util::guard::Access;
use crate::util::storage::AppStorage;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Requirement declared by the cart, checkout, and order routes.
pub(crate) const CUSTOMER_ACCESS: Access = Access::Authenticated;
/// Requirement declared by every admin console route.
pub(crate) const ADMIN_ACCESS: Access = Access::AdminOnly;

/// Storefront paths wrapped in `<Protected access=CUSTOMER_ACCESS>`.
pub(crate) const CUSTOMER_PATHS: [&str; 3] = ["/cart", "/checkout", "/orders"];

fn admin_view(section: AdminSection) -> impl IntoView {
    view! {
        <Protected access=ADMIN_ACCESS>
            <AdminLayout>
                <AdminSectionPage section/>
            </AdminLayout>
        </Protected>
    }
}

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(AppSession::init(AppStorage::default(), HttpBackend));
    provide_context(session);

    Effect::new(move || session.update(|s| s.hydrate()));

    view! {
        <Stylesheet id="leptos" href="/pkg/storefront.css"/>
        <Title text="Apni Shop"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=|| view! { <UserLayout><HomePage/></UserLayout> }/>
                <Route path=StaticSegment("products") view=|| view! { <UserLayout><ProductsPage/></UserLayout> }/>
                <Route
                    path=(StaticSegment("products"), ParamSegment("slug"))
                    view=|| view! { <UserLayout><ProductDetailPage/></UserLayout> }
                />
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <Route path=(StaticSegment("admin"), StaticSegment("login")) view=AdminLoginPage/>

                <Route
                    path=StaticSegment("cart")
                    view=|| view! { <Protected access=CUSTOMER_ACCESS><UserLayout><CartPage/></UserLayout></Protected> }
                />
                <Route
                    path=StaticSegment("checkout")
                    view=|| view! { <Protected access=CUSTOMER_ACCESS><UserLayout><CheckoutPage/></UserLayout></Protected> }
                />
                <Route
                    path=StaticSegment("orders")
                    view=|| view! { <Protected access=CUSTOMER_ACCESS><UserLayout><OrdersPage/></UserLayout></Protected> }
                />

                <Route
                    path=(StaticSegment("admin"), StaticSegment("dashboard"))
                    view=|| admin_view(AdminSection::Dashboard)
                />
                <Route
                    path=(StaticSegment("admin"), StaticSegment("categories"))
                    view=|| admin_view(AdminSection::Categories)
                />
                <Route
                    path=(StaticSegment("admin"), StaticSegment("products"))
                    view=|| admin_view(AdminSection::Products)
                />
                <Route
                    path=(StaticSegment("admin"), StaticSegment("orders"))
                    view=|| admin_view(AdminSection::Orders)
                />
                <Route
                    path=(StaticSegment("admin"), StaticSegment("users"))
                    view=|| admin_view(AdminSection::Users)
                />
                <Route
                    path=(StaticSegment("admin"), StaticSegment("inventory"))
                    view=|| admin_view(AdminSection::Inventory)
                />
            </Routes>
        </Router>
    }
}
