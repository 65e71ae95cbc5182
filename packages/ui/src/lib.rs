//! This crate contains all shared UI for the workspace.

mod session;
pub use session::{use_session, SessionProvider, SessionState};

mod feed;
pub use feed::{use_competitions, CompetitionFeed, CompetitionFeedProvider};

mod sections;
pub use sections::Sections;

mod login_form;
pub use login_form::LoginForm;

mod competitions_table;
pub use competitions_table::CompetitionsTable;

mod bracket;
pub use bracket::Bracket;

mod admin_panel;
pub use admin_panel::AdminPanel;
