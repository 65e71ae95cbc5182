//! Catalog table shown to every signed-in user.

use dioxus::prelude::*;

use crate::use_competitions;

/// Table of every competition in the catalog.
///
/// Renders whatever the feed currently holds: zero rows while the fetch is
/// in flight or after it failed, the full catalog once it is ready.
#[component]
pub fn CompetitionsTable() -> Element {
    let feed = use_competitions();
    let state = feed();

    rsx! {
        table {
            class: "competitions-table",
            thead {
                tr {
                    th { "ID" }
                    th { "Title" }
                    th { "Sport" }
                    th { "Date" }
                    th { "Participants" }
                    th { "Image" }
                }
            }
            tbody {
                for competition in state.items().iter() {
                    tr {
                        key: "{competition.id}",
                        td { "{competition.id}" }
                        td { "{competition.title}" }
                        td { "{competition.sport}" }
                        td { "{competition.date}" }
                        td { "{competition.participants_count}" }
                        td {
                            img {
                                class: "competition-image",
                                src: "{competition.image}",
                                alt: "{competition.title}",
                            }
                        }
                    }
                }
            }
        }
    }
}
