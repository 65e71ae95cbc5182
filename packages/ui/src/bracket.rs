//! Bracket view for participants.

use dioxus::prelude::*;

/// Static four-team seed shown in the bracket.
const TEAMS: [&str; 4] = ["Team A", "Team B", "Team C", "Team D"];

/// Bracket of the seeded teams.
#[component]
pub fn Bracket() -> Element {
    rsx! {
        div {
            class: "bracket",
            for (index, team) in TEAMS.iter().enumerate() {
                div {
                    key: "{index}",
                    class: "bracket-team",
                    "{team}"
                }
            }
        }
    }
}
