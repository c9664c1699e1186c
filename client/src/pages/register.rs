//! Customer sign-up page.
//!
//! DESIGN
//! ======
//! Registration never opens a session. On success the page hands off to the
//! login form with the `registered` query flag so the notice survives the
//! navigation; on failure every field error the backend returned is listed.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::net::types::RegisterRequest;
use crate::pages::login::REGISTERED_QUERY_KEY;
use crate::state::session::{AppSession, register_in_signal};
use crate::util::guard::LOGIN_PATH;

pub(crate) const MISSING_FIELDS: &str = "Fill in all required fields.";
pub(crate) const PASSWORD_MISMATCH: &str = "Passwords do not match";

/// Trim text fields and check the form before it leaves the browser.
///
/// Phone is optional; passwords are compared verbatim.
pub(crate) fn validate_register_input(input: &RegisterRequest) -> Result<RegisterRequest, &'static str> {
    let request = RegisterRequest {
        email: input.email.trim().to_owned(),
        username: input.username.trim().to_owned(),
        first_name: input.first_name.trim().to_owned(),
        last_name: input.last_name.trim().to_owned(),
        phone: input.phone.trim().to_owned(),
        password: input.password.clone(),
        password2: input.password2.clone(),
    };
    let required = [
        &request.email,
        &request.username,
        &request.first_name,
        &request.last_name,
        &request.password,
        &request.password2,
    ];
    if required.iter().any(|field| field.is_empty()) {
        return Err(MISSING_FIELDS);
    }
    if request.password != request.password2 {
        return Err(PASSWORD_MISMATCH);
    }
    Ok(request)
}

/// Login URL carrying the post-registration notice flag.
pub(crate) fn registered_login_href() -> String {
    format!("{LOGIN_PATH}?{REGISTERED_QUERY_KEY}=1")
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let session = expect_context::<RwSignal<AppSession>>();
    let navigate = use_navigate();

    let form = RwSignal::new(RegisterRequest::default());
    let errors = RwSignal::new(Vec::<String>::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let request = match form.with(validate_register_input) {
            Ok(request) => request,
            Err(msg) => {
                errors.set(vec![msg.to_owned()]);
                return;
            }
        };
        busy.set(true);
        errors.set(Vec::new());

        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match register_in_signal(session, request).await {
                Ok(_) => navigate(&registered_login_href(), NavigateOptions::default()),
                Err(e) => errors.set(e.messages()),
            }
            busy.set(false);
        });
    };

    view! {
        <div class="auth-container">
            <div class="auth-card auth-card--wide">
                <h2>"Create Account"</h2>
                <p class="auth-subtitle">"Join Apni Shop today"</p>
                <Show when=move || !errors.get().is_empty()>
                    <ul class="auth-message auth-message--error">
                        {move || errors.get().into_iter().map(|msg| view! { <li>{msg}</li> }).collect_view()}
                    </ul>
                </Show>
                <form class="auth-form" on:submit=on_submit>
                    <div class="form-row">
                        <TextField form=form field=RegisterField::FirstName/>
                        <TextField form=form field=RegisterField::LastName/>
                    </div>
                    <TextField form=form field=RegisterField::Username/>
                    <TextField form=form field=RegisterField::Email/>
                    <TextField form=form field=RegisterField::Phone/>
                    <div class="form-row">
                        <TextField form=form field=RegisterField::Password/>
                        <TextField form=form field=RegisterField::ConfirmPassword/>
                    </div>
                    <button class="btn btn-primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Creating account..." } else { "Create Account" }}
                    </button>
                </form>
                <div class="auth-links">
                    <p>"Already have an account? " <A href=LOGIN_PATH>"Login"</A></p>
                </div>
            </div>
        </div>
    }
}

/// Form input on the sign-up page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum RegisterField {
    FirstName,
    LastName,
    Username,
    Email,
    Phone,
    Password,
    ConfirmPassword,
}

impl RegisterField {
    pub(crate) fn label(self) -> &'static str {
        match self {
            Self::FirstName => "First Name",
            Self::LastName => "Last Name",
            Self::Username => "Username",
            Self::Email => "Email Address",
            Self::Phone => "Phone (optional)",
            Self::Password => "Password",
            Self::ConfirmPassword => "Confirm Password",
        }
    }

    fn input_type(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Phone => "tel",
            Self::Password | Self::ConfirmPassword => "password",
            Self::FirstName | Self::LastName | Self::Username => "text",
        }
    }

    pub(crate) fn value(self, request: &RegisterRequest) -> &str {
        match self {
            Self::FirstName => &request.first_name,
            Self::LastName => &request.last_name,
            Self::Username => &request.username,
            Self::Email => &request.email,
            Self::Phone => &request.phone,
            Self::Password => &request.password,
            Self::ConfirmPassword => &request.password2,
        }
    }

    pub(crate) fn slot(self, request: &mut RegisterRequest) -> &mut String {
        match self {
            Self::FirstName => &mut request.first_name,
            Self::LastName => &mut request.last_name,
            Self::Username => &mut request.username,
            Self::Email => &mut request.email,
            Self::Phone => &mut request.phone,
            Self::Password => &mut request.password,
            Self::ConfirmPassword => &mut request.password2,
        }
    }
}

/// One labelled input bound to a single field of the form signal.
#[component]
fn TextField(form: RwSignal<RegisterRequest>, field: RegisterField) -> impl IntoView {
    view! {
        <label class="form-group">
            {field.label()}
            <input
                type=field.input_type()
                prop:value=move || form.with(|r| field.value(r).to_owned())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    form.update(|r| *field.slot(r) = value);
                }
            />
        </label>
    }
}
