//! Login form with role selection.

use api::{Credentials, Role, ValidationError};
use dioxus::prelude::*;

use crate::use_session;

/// Login form component.
///
/// Validation is purely local: a matching password pair is all it takes to
/// sign in. The chosen role decides which sections render afterwards.
#[component]
pub fn LoginForm() -> Element {
    let mut session = use_session();
    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm_password = use_signal(String::new);
    let mut role = use_signal(|| Role::Participant);
    let mut error = use_signal(|| Option::<String>::None);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        error.set(None);

        let credentials = Credentials {
            username: username(),
            password: password(),
            confirm_password: confirm_password(),
            role: role(),
        };
        if let Err(ValidationError::PasswordMismatch) =
            session.write().submit_login(credentials)
        {
            error.set(Some("Passwords do not match!".to_string()));
        }
    };

    rsx! {
        form {
            class: "login-form",
            onsubmit: handle_submit,

            if let Some(err) = error() {
                div { class: "form-error", "{err}" }
            }

            input {
                r#type: "text",
                placeholder: "Username",
                value: username(),
                oninput: move |evt| username.set(evt.value()),
            }
            input {
                r#type: "password",
                placeholder: "Password",
                value: password(),
                oninput: move |evt| password.set(evt.value()),
            }
            input {
                r#type: "password",
                placeholder: "Confirm password",
                value: confirm_password(),
                oninput: move |evt| confirm_password.set(evt.value()),
            }
            select {
                value: role().as_str(),
                onchange: move |evt| {
                    role.set(match evt.value().as_str() {
                        "registrar" => Role::Registrar,
                        _ => Role::Participant,
                    });
                },
                option { value: "participant", "Participant" }
                option { value: "registrar", "Registrar" }
            }
            button { r#type: "submit", "Sign in" }
        }
    }
}
