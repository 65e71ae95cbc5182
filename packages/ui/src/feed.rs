//! Competition feed: the one-shot catalog retrieval and its state.

use api::Competition;
use dioxus::prelude::*;

/// State of the catalog retrieval. Exactly one variant holds at a time.
///
/// `Loading` settles into `Ready` or `Failed` and never transitions again;
/// there is no manual refresh. A fetch that never resolves leaves the feed
/// `Loading` for the lifetime of the page.
#[derive(Clone, Debug, PartialEq)]
pub enum CompetitionFeed {
    Loading,
    Ready(Vec<Competition>),
    Failed(String),
}

impl CompetitionFeed {
    /// Rows to render. Empty until the feed is `Ready`, and empty again if
    /// the fetch failed, so the table is consistent at every point of the
    /// feed lifecycle.
    pub fn items(&self) -> &[Competition] {
        match self {
            CompetitionFeed::Ready(items) => items,
            CompetitionFeed::Loading | CompetitionFeed::Failed(_) => &[],
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, CompetitionFeed::Loading)
    }

    pub fn has_failed(&self) -> bool {
        matches!(self, CompetitionFeed::Failed(_))
    }
}

/// Get the current feed state.
/// Returns a signal that updates when the fetch settles.
pub fn use_competitions() -> Signal<CompetitionFeed> {
    use_context::<Signal<CompetitionFeed>>()
}

/// Provider component that fetches the competition catalog.
///
/// The fetch starts when the provider mounts and runs exactly once;
/// re-renders do not restart it. Failures are logged and absorbed — the feed
/// just stays empty.
#[component]
pub fn CompetitionFeedProvider(children: Element) -> Element {
    let mut feed = use_signal(|| CompetitionFeed::Loading);

    let _ = use_resource(move || async move {
        match api::list_competitions().await {
            Ok(items) => feed.set(CompetitionFeed::Ready(items)),
            Err(e) => {
                tracing::error!("Failed to fetch the competition catalog: {}", e);
                feed.set(CompetitionFeed::Failed(e.to_string()));
            }
        }
    });

    use_context_provider(|| feed);

    rsx! {
        {children}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn competition(id: i64, title: &str) -> Competition {
        Competition {
            id,
            title: title.to_string(),
            sport: "Chess".to_string(),
            date: "2024-01-01".to_string(),
            participants_count: 8,
            image: "http://x/i.png".to_string(),
        }
    }

    #[test]
    fn test_loading_renders_zero_rows() {
        assert!(CompetitionFeed::Loading.items().is_empty());
        assert!(CompetitionFeed::Loading.is_loading());
    }

    #[test]
    fn test_ready_keeps_the_server_sequence() {
        let feed = CompetitionFeed::Ready(vec![competition(2, "B"), competition(1, "A")]);
        let ids: Vec<i64> = feed.items().iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![2, 1]);
        assert!(!feed.is_loading());
    }

    #[test]
    fn test_failure_renders_zero_rows() {
        let feed = CompetitionFeed::Failed("connection refused".to_string());
        assert!(feed.items().is_empty());
        assert!(feed.has_failed());
    }
}
