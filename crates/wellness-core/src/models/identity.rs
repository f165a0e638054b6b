/// Who submitted a request.
///
/// An authenticated user reference always wins over the anonymous session
/// token; the identity middleware only falls back to a session when no
/// user is present.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Identity {
    User(String),
    Session(String),
}

impl Identity {
    pub fn user_id(&self) -> Option<&str> {
        match self {
            Identity::User(id) => Some(id),
            Identity::Session(_) => None,
        }
    }

    pub fn session_id(&self) -> Option<&str> {
        match self {
            Identity::User(_) => None,
            Identity::Session(id) => Some(id),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Identity::User(_))
    }
}
