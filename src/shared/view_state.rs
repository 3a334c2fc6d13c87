//! State owned by the leaderboard screen.
//!
//! All mutation goes through the transition methods below. A transition that
//! needs data returns a [`FetchRequest`]; the view runs it and hands the result
//! back to [`ViewState::apply`].

use crate::shared::types::User;

/// How many entries the leaderboard view asks for.
pub const LEADERBOARD_LIMIT: usize = 50;

/// Queries at or below this length (in characters) do not hit the backend.
pub const MIN_SEARCH_LEN: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Leaderboard,
    Search,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fetch {
    Leaderboard { limit: usize },
    Search { query: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub id: u64,
    pub fetch: Fetch,
}

#[derive(Debug, Clone, Default)]
pub struct ViewState {
    pub users: Vec<User>,
    pub query: String,
    pub mode: Mode,
    pub loading: bool,
    pub simulating: bool,
    pub dark_mode: bool,
    theme_chosen: bool,
    // decided when Simulate is pressed, not when the call returns
    reload_after_simulate: bool,
    // id of the most recent list fetch; older responses are discarded
    latest_request: u64,
}

impl ViewState {
    pub fn new(dark_mode: bool) -> Self {
        Self {
            dark_mode,
            ..Default::default()
        }
    }

    pub fn mount(&mut self) -> FetchRequest {
        self.mode = Mode::Leaderboard;
        self.load_leaderboard()
    }

    pub fn set_query(&mut self, text: impl Into<String>) -> Option<FetchRequest> {
        self.query = text.into();
        if self.query.is_empty() {
            self.mode = Mode::Leaderboard;
            return Some(self.load_leaderboard());
        }
        self.mode = Mode::Search;
        if self.query.chars().count() > MIN_SEARCH_LEN {
            let query = self.query.clone();
            Some(self.issue(Fetch::Search { query }))
        } else {
            None
        }
    }

    pub fn clear_query(&mut self) -> Option<FetchRequest> {
        self.set_query(String::new())
    }

    /// Stores the result of `request_id` if it is still the latest list fetch.
    pub fn apply(&mut self, request_id: u64, users: Vec<User>) -> bool {
        if request_id != self.latest_request {
            return false;
        }
        self.users = users;
        self.loading = false;
        true
    }

    pub fn begin_simulate(&mut self) -> bool {
        if self.simulating {
            return false;
        }
        self.simulating = true;
        self.reload_after_simulate = self.mode == Mode::Leaderboard;
        true
    }

    /// Called once the simulate call resolved. The leaderboard is reloaded only if
    /// Simulate was pressed while it was showing; a search is never re-run.
    pub fn finish_simulate(&mut self) -> Option<FetchRequest> {
        if std::mem::take(&mut self.reload_after_simulate) {
            Some(self.load_leaderboard())
        } else {
            None
        }
    }

    pub fn end_simulate(&mut self) {
        self.simulating = false;
    }

    pub fn toggle_theme(&mut self) {
        self.dark_mode = !self.dark_mode;
        self.theme_chosen = true;
    }

    pub fn apply_system_theme(&mut self, dark: bool) {
        if !self.theme_chosen {
            self.dark_mode = dark;
        }
    }

    fn load_leaderboard(&mut self) -> FetchRequest {
        self.issue(Fetch::Leaderboard {
            limit: LEADERBOARD_LIMIT,
        })
    }

    fn issue(&mut self, fetch: Fetch) -> FetchRequest {
        self.latest_request += 1;
        self.loading = true;
        FetchRequest {
            id: self.latest_request,
            fetch,
        }
    }
}
