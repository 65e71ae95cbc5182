//! Static competition catalog served by the platform API.
//!
//! The catalog is a fixed in-memory data set; there is no database behind it.
//! Lookups clone out of the seed so callers own their rows.

use crate::models::{CatalogMetadata, Competition, Match, PageData};

/// Title shown on the main page.
pub const PAGE_TITLE: &str = "MatchUp";

const LAST_UPDATED: &str = "2023-11-01T14:30:00Z";

/// All competitions, in catalog order.
pub fn competitions() -> Vec<Competition> {
    vec![
        Competition {
            id: 1,
            title: "Football Championship 2023".to_string(),
            sport: "Football".to_string(),
            date: "2023-11-15".to_string(),
            participants_count: 32,
            image: "football.jpg".to_string(),
        },
        Competition {
            id: 2,
            title: "Basketball Cup".to_string(),
            sport: "Basketball".to_string(),
            date: "2023-11-25".to_string(),
            participants_count: 24,
            image: "basketball.jpg".to_string(),
        },
    ]
}

/// Look up a single competition by id.
pub fn competition(id: i64) -> Option<Competition> {
    competitions().into_iter().find(|c| c.id == id)
}

/// All matches scheduled for a competition. Empty if the id is unknown.
pub fn matches_for(competition_id: i64) -> Vec<Match> {
    all_matches()
        .into_iter()
        .filter(|m| m.competition_id == competition_id)
        .collect()
}

/// Catalog-wide metadata.
pub fn metadata() -> CatalogMetadata {
    CatalogMetadata {
        total_competitions: competitions().len() as u32,
        last_updated: LAST_UPDATED.to_string(),
    }
}

/// The composed main-page payload.
pub fn page_data() -> PageData {
    PageData {
        page_title: PAGE_TITLE.to_string(),
        competitions: competitions(),
        metadata: metadata(),
    }
}

fn all_matches() -> Vec<Match> {
    vec![
        Match {
            id: 1,
            competition_id: 1,
            team1: "Team A".to_string(),
            team2: "Team B".to_string(),
            date: "2023-11-15".to_string(),
            time: "15:00".to_string(),
            venue: "Central Stadium".to_string(),
        },
        Match {
            id: 2,
            competition_id: 1,
            team1: "Team C".to_string(),
            team2: "Team D".to_string(),
            date: "2023-11-16".to_string(),
            time: "17:00".to_string(),
            venue: "North Stadium".to_string(),
        },
        Match {
            id: 3,
            competition_id: 2,
            team1: "Basketball Stars".to_string(),
            team2: "Space Jammers".to_string(),
            date: "2023-11-25".to_string(),
            time: "18:30".to_string(),
            venue: "Sports Palace".to_string(),
        },
    ]
}
