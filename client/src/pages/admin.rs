//! Admin console sections.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each section is an admin-only route rendered inside `AdminLayout`. The CRUD
//! tables themselves are served by the backend's admin endpoints; these pages
//! are the guarded entry points to them.

#[cfg(test)]
#[path = "admin_test.rs"]
mod admin_test;

use leptos::prelude::*;

use crate::state::session::AppSession;

/// Admin console section, in sidebar order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AdminSection {
    Dashboard,
    Categories,
    Products,
    Orders,
    Users,
    Inventory,
}

impl AdminSection {
    pub const ALL: [Self; 6] = [
        Self::Dashboard,
        Self::Categories,
        Self::Products,
        Self::Orders,
        Self::Users,
        Self::Inventory,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Categories => "Categories",
            Self::Products => "Products",
            Self::Orders => "Orders",
            Self::Users => "Users",
            Self::Inventory => "Inventory",
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            Self::Dashboard => "/admin/dashboard",
            Self::Categories => "/admin/categories",
            Self::Products => "/admin/products",
            Self::Orders => "/admin/orders",
            Self::Users => "/admin/users",
            Self::Inventory => "/admin/inventory",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Dashboard => "📊",
            Self::Categories => "📁",
            Self::Products => "📦",
            Self::Orders => "🛍️",
            Self::Users => "👥",
            Self::Inventory => "📋",
        }
    }

    fn summary(self) -> &'static str {
        match self {
            Self::Dashboard => "Store activity at a glance.",
            Self::Categories => "Organise the catalogue into categories.",
            Self::Products => "Create, edit, and retire products.",
            Self::Orders => "Review and update customer orders.",
            Self::Users => "Browse registered accounts.",
            Self::Inventory => "Track stock levels across products.",
        }
    }

    /// Section whose path matches `path`, ignoring a trailing slash.
    pub fn from_path(path: &str) -> Option<Self> {
        let path = path.trim_end_matches('/');
        Self::ALL.into_iter().find(|section| section.path() == path)
    }
}

/// Heading block for one admin section.
#[component]
pub fn AdminSectionPage(section: AdminSection) -> impl IntoView {
    let session = expect_context::<RwSignal<AppSession>>();
    let greeting = move || {
        session.with(|s| {
            s.session()
                .user()
                .map(|u| format!("Signed in as {}", u.display_name()))
                .unwrap_or_default()
        })
    };

    view! {
        <section class="admin-section">
            <header class="admin-section__header">
                <h1>{section.icon()} " " {section.label()}</h1>
                <p class="admin-section__summary">{section.summary()}</p>
            </header>
            <Show when=move || section == AdminSection::Dashboard>
                <p class="admin-section__greeting">{greeting}</p>
            </Show>
        </section>
    }
}
