//! # Competition catalog models
//!
//! Everything the catalog endpoints return. All of these types are
//! `Serialize + Deserialize + PartialEq` so they can cross the server/client
//! boundary via Dioxus server functions.
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`Competition`] | A single tournament record in the catalog table. Serialized camelCase on the wire (`participantsCount`). |
//! | [`Match`] | One scheduled fixture inside a competition. |
//! | [`CatalogMetadata`] | Catalog-wide counters (`totalCompetitions`, `lastUpdated`). |
//! | [`PageData`] | The composed main-page payload: title + competitions + metadata. |
//!
//! The client treats the competition collection as a read-only,
//! insertion-ordered sequence; nothing here is mutated after it leaves the
//! server.

use serde::{Deserialize, Serialize};

/// A single tournament/event record in the competition catalog.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Competition {
    pub id: i64,
    pub title: String,
    pub sport: String,
    /// Scheduled date as a display string: "2023-11-15"
    pub date: String,
    pub participants_count: u32,
    /// Poster image URI.
    pub image: String,
}

/// One scheduled fixture inside a competition.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Match {
    pub id: i64,
    pub competition_id: i64,
    pub team1: String,
    pub team2: String,
    pub date: String,
    pub time: String,
    pub venue: String,
}

/// Catalog-wide metadata.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogMetadata {
    pub total_competitions: u32,
    /// RFC 3339 timestamp of the last catalog update.
    pub last_updated: String,
}

/// Composed payload for the main page.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageData {
    pub page_title: String,
    pub competitions: Vec<Competition>,
    pub metadata: CatalogMetadata,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_competition_wire_format() {
        let json = r#"{"id":1,"title":"Cup","sport":"Chess","date":"2024-01-01","participantsCount":8,"image":"http://x/i.png"}"#;
        let competition: Competition = serde_json::from_str(json).unwrap();
        assert_eq!(competition.id, 1);
        assert_eq!(competition.title, "Cup");
        assert_eq!(competition.sport, "Chess");
        assert_eq!(competition.date, "2024-01-01");
        assert_eq!(competition.participants_count, 8);
        assert_eq!(competition.image, "http://x/i.png");

        // participantsCount must stay camelCase on the wire
        let back = serde_json::to_string(&competition).unwrap();
        assert_eq!(back, json);
    }

    #[test]
    fn test_catalog_order_is_preserved() {
        let json = r#"[
            {"id":2,"title":"B","sport":"s","date":"d","participantsCount":1,"image":"i"},
            {"id":1,"title":"A","sport":"s","date":"d","participantsCount":1,"image":"i"}
        ]"#;
        let competitions: Vec<Competition> = serde_json::from_str(json).unwrap();
        let ids: Vec<i64> = competitions.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![2, 1]);
    }
}
