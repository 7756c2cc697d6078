//! Client route table.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

/// Every client-side route the router knows about.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AppRoute {
    Root,
    Login,
    Signup,
    Dashboard,
    Ingest,
    Qa,
}

impl AppRoute {
    pub const ALL: [Self; 6] = [Self::Root, Self::Login, Self::Signup, Self::Dashboard, Self::Ingest, Self::Qa];

    pub fn path(self) -> &'static str {
        match self {
            Self::Root => "/",
            Self::Login => "/login",
            Self::Signup => "/signup",
            Self::Dashboard => "/dashboard",
            Self::Ingest => "/ingest",
            Self::Qa => "/qa",
        }
    }

    /// Path segment as registered with the router (no leading slash).
    pub fn segment(self) -> &'static str {
        self.path().trim_start_matches('/')
    }

    pub fn from_path(path: &str) -> Option<Self> {
        let trimmed = path.trim_end_matches('/');
        let normalized = if trimmed.is_empty() { "/" } else { trimmed };
        Self::ALL.into_iter().find(|route| route.path() == normalized)
    }

    /// Landing page for signed-in users.
    pub fn authenticated_home() -> Self {
        Self::Dashboard
    }

    /// Entry point for signed-out users.
    pub fn login_entry() -> Self {
        Self::Login
    }
}
