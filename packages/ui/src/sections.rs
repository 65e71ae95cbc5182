//! Which main-page sections render for a given session.

use api::{Role, Session};

/// The sections of the main page, as flags the view branches on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Sections {
    pub login_form: bool,
    pub admin_panel: bool,
    pub bracket: bool,
    pub competitions_table: bool,
}

impl Sections {
    /// Anonymous visitors see only the login form. A registrar gets the
    /// management controls, a participant the bracket, and both get the
    /// catalog table.
    pub fn for_session(session: Option<&Session>) -> Self {
        match session {
            None => Self {
                login_form: true,
                admin_panel: false,
                bracket: false,
                competitions_table: false,
            },
            Some(session) => Self {
                login_form: false,
                admin_panel: session.role == Role::Registrar,
                bracket: session.role == Role::Participant,
                competitions_table: true,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(role: Role) -> Session {
        Session {
            username: "alice".to_string(),
            role,
        }
    }

    #[test]
    fn test_anonymous_sees_only_the_login_form() {
        let sections = Sections::for_session(None);
        assert!(sections.login_form);
        assert!(!sections.admin_panel);
        assert!(!sections.bracket);
        assert!(!sections.competitions_table);
    }

    #[test]
    fn test_registrar_sees_admin_controls_and_table() {
        let sections = Sections::for_session(Some(&session(Role::Registrar)));
        assert!(!sections.login_form);
        assert!(sections.admin_panel);
        assert!(!sections.bracket);
        assert!(sections.competitions_table);
    }

    #[test]
    fn test_participant_sees_bracket_and_table() {
        let sections = Sections::for_session(Some(&session(Role::Participant)));
        assert!(!sections.login_form);
        assert!(!sections.admin_panel);
        assert!(sections.bracket);
        assert!(sections.competitions_table);
    }

    #[test]
    fn test_admin_controls_and_bracket_are_exclusive() {
        for role in [Role::Participant, Role::Registrar] {
            let sections = Sections::for_session(Some(&session(role)));
            assert!(!(sections.admin_panel && sections.bracket));
        }
    }
}
