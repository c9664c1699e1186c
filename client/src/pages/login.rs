//! Customer and admin login pages.
//!
//! Both pages share one form; only the endpoint, copy, and post-login
//! destination differ.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::state::session::{AppSession, login_in_signal};

/// Query flag set by the register page after a successful sign-up.
pub const REGISTERED_QUERY_KEY: &str = "registered";
pub const REGISTERED_NOTICE: &str = "Registration successful! Please check your email to verify your account.";

/// Static text and destination for one login variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct LoginCopy {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub submit_label: &'static str,
    pub busy_label: &'static str,
    pub success_path: &'static str,
}

pub(crate) fn login_copy(as_admin: bool) -> LoginCopy {
    if as_admin {
        LoginCopy {
            title: "Admin Login",
            subtitle: "Access the admin dashboard",
            submit_label: "Admin Login",
            busy_label: "Logging in...",
            success_path: "/admin/dashboard",
        }
    } else {
        LoginCopy {
            title: "Welcome back",
            subtitle: "Login to your account to continue",
            submit_label: "Sign In",
            busy_label: "Authenticating...",
            success_path: "/",
        }
    }
}

/// Trim the email and require both fields.
pub(crate) fn validate_login_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter both email and password.");
    }
    Ok((email.to_owned(), password.to_owned()))
}

#[component]
pub fn LoginPage() -> impl IntoView {
    view! { <LoginForm as_admin=false/> }
}

#[component]
pub fn AdminLoginPage() -> impl IntoView {
    view! { <LoginForm as_admin=true/> }
}

#[component]
fn LoginForm(as_admin: bool) -> impl IntoView {
    let session = expect_context::<RwSignal<AppSession>>();
    let navigate = use_navigate();
    let query = use_query_map();
    let copy = login_copy(as_admin);

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let registered = move || !as_admin && query.with(|q| q.get(REGISTERED_QUERY_KEY).is_some());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (email_value, password_value) = match validate_login_input(&email.get(), &password.get()) {
            Ok(values) => values,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set(String::new());

        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match login_in_signal(session, email_value, password_value, as_admin).await {
                Ok(_) => navigate(copy.success_path, NavigateOptions::default()),
                Err(e) => info.set(e.to_string()),
            }
            busy.set(false);
        });
    };

    let page_class = if as_admin { "auth-container admin-login" } else { "auth-container" };

    view! {
        <div class=page_class>
            <div class="auth-card">
                <h2>{copy.title}</h2>
                <p class="auth-subtitle">{copy.subtitle}</p>
                <Show when=registered>
                    <p class="auth-message auth-message--success">{REGISTERED_NOTICE}</p>
                </Show>
                <form class="auth-form" on:submit=on_submit>
                    <label class="form-group">
                        "Email Address"
                        <input
                            type="email"
                            placeholder="name@example.com"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="form-group">
                        "Password"
                        <input
                            type="password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <button class="btn btn-primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { copy.busy_label } else { copy.submit_label }}
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="auth-message auth-message--error">{move || info.get()}</p>
                </Show>
                <div class="auth-links">
                    {if as_admin {
                        view! { <p>"Not an admin? " <A href="/login">"User Login"</A></p> }.into_any()
                    } else {
                        view! {
                            <p>"New here? " <A href="/register">"Create an account"</A></p>
                            <p>"Staff member? " <A href="/admin/login">"Admin Login"</A></p>
                        }
                        .into_any()
                    }}
                </div>
            </div>
        </div>
    }
}
