//! Catalogue, cart, checkout, and order pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! These are route targets only. Listing, pricing, and order data come from
//! the backend's shop endpoints; the session layer decides which of these
//! pages a visitor may reach.

#[cfg(test)]
#[path = "shop_test.rs"]
mod shop_test;

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

/// Human title for a product slug: `blue-denim-jacket` -> `Blue Denim Jacket`.
pub(crate) fn title_from_slug(slug: &str) -> String {
    slug.split(['-', '_'])
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().chain(chars).collect::<String>()
            })
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[component]
fn PageShell(title: &'static str, body: &'static str, children: Children) -> impl IntoView {
    view! {
        <section class="shop-page">
            <h1 class="shop-page__title">{title}</h1>
            <p class="shop-page__body">{body}</p>
            {children()}
        </section>
    }
}

#[component]
pub fn ProductsPage() -> impl IntoView {
    view! {
        <PageShell title="Products" body="Browse the full catalogue.">
            <A href="/cart">"View cart"</A>
        </PageShell>
    }
}

#[component]
pub fn ProductDetailPage() -> impl IntoView {
    let params = use_params_map();
    let title = move || {
        params.with(|p| p.get("slug").map(|slug| title_from_slug(&slug)).unwrap_or_default())
    };

    view! {
        <section class="shop-page">
            <h1 class="shop-page__title">{title}</h1>
            <A href="/products">"Back to products"</A>
        </section>
    }
}

#[component]
pub fn CartPage() -> impl IntoView {
    view! {
        <PageShell title="Your Cart" body="Review items before checkout.">
            <A href="/checkout" attr:class="btn btn-primary">"Proceed to checkout"</A>
        </PageShell>
    }
}

#[component]
pub fn CheckoutPage() -> impl IntoView {
    view! {
        <PageShell title="Checkout" body="Confirm your shipping details and place the order.">
            <A href="/orders">"Go to my orders"</A>
        </PageShell>
    }
}

#[component]
pub fn OrdersPage() -> impl IntoView {
    view! {
        <PageShell title="My Orders" body="Track current and past orders.">
            <A href="/products">"Continue shopping"</A>
        </PageShell>
    }
}
