//! Route wrapper that applies the guard before mounting its children.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every protected route in `App` is wrapped in `<Protected>` with the access
//! level it declares. The guard never derives the requirement from the live
//! URL, so a redirect in flight cannot relax it.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::session::AppSession;
use crate::util::guard::{self, Access, GuardDecision};

pub const PENDING_LABEL: &str = "Verifying Session...";

/// Render `children` only when the session satisfies `access`.
///
/// While the session hydrates a neutral indicator is shown and no redirect
/// happens, so a reload on a protected page does not bounce through `/login`.
#[component]
pub fn Protected(access: Access, children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<RwSignal<AppSession>>();
    let navigate = use_navigate();

    let decision = Memo::new(move |_| session.with(|store| guard::evaluate(store.session(), access)));

    Effect::new(move || {
        if let Some(path) = decision.get().redirect_path() {
            navigate(path, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    move || match decision.get() {
        GuardDecision::Pending => view! {
            <div class="session-pending">
                <span class="session-pending__label">{PENDING_LABEL}</span>
            </div>
        }
        .into_any(),
        GuardDecision::Allowed => children().into_any(),
        GuardDecision::DeniedAuth | GuardDecision::DeniedRole => ().into_any(),
    }
}
