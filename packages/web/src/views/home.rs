//! Main page: the login form, or the role-conditioned sections.

use dioxus::prelude::*;

use ui::{AdminPanel, Bracket, CompetitionsTable, LoginForm, Sections, use_session};

/// The single page of the app.
///
/// A pure composition of the session and feed states: the session picks the
/// sections, the feed fills the table.
#[component]
pub fn Home() -> Element {
    let session = use_session();
    let state = session();
    let sections = Sections::for_session(state.session.as_ref());

    rsx! {
        div {
            class: "container",
            h1 { class: "title", "MatchUp" }

            if sections.login_form {
                LoginForm {}
            } else {
                div {
                    if sections.admin_panel {
                        AdminPanel {}
                    }
                    if sections.bracket {
                        Bracket {}
                    }
                    if sections.competitions_table {
                        CompetitionsTable {}
                    }
                }
            }
        }
    }
}
