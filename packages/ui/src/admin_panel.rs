//! Tournament-management controls for registrars.

use dioxus::prelude::*;

/// Management controls shown to registrars.
#[component]
pub fn AdminPanel() -> Element {
    let mut notice = use_signal(|| Option::<String>::None);

    let on_create = move |_| {
        tracing::info!("Tournament creation requested");
        notice.set(Some("Create a tournament".to_string()));
    };

    rsx! {
        div {
            class: "admin-section",
            button {
                id: "create-tournament",
                onclick: on_create,
                "Create tournament"
            }
            if let Some(msg) = notice() {
                div { class: "admin-notice", "{msg}" }
            }
            div { id: "my-tournaments", "My tournaments" }
            div { id: "planning", "Planning" }
        }
    }
}
