//! Async steps the screen spawns: run a list fetch, run a simulation.
//!
//! They only touch the state through [`ViewHandle`], so the screen drives them
//! with its signal and tests with a plain `RefCell`.

use dioxus::logger::tracing::{debug, info};
use dioxus::prelude::*;

use crate::api::ApiClient;
use crate::shared::types::User;
use crate::shared::view_state::{Fetch, FetchRequest, ViewState};

pub trait ViewHandle: Clone {
    fn update<R>(&mut self, f: impl FnOnce(&mut ViewState) -> R) -> R;
}

impl ViewHandle for Signal<ViewState> {
    fn update<R>(&mut self, f: impl FnOnce(&mut ViewState) -> R) -> R {
        let mut state = self.write();
        f(&mut state)
    }
}

pub async fn load(client: &ApiClient, fetch: &Fetch) -> Vec<User> {
    match fetch {
        Fetch::Leaderboard { limit } => client.fetch_leaderboard(*limit).await,
        Fetch::Search { query } => client.search_users(query).await,
    }
}

/// Runs a list fetch and hands the result back to the state.
pub async fn run_fetch<H: ViewHandle>(mut view: H, client: &ApiClient, request: FetchRequest) {
    let users = load(client, &request.fetch).await;
    let count = users.len();
    if view.update(|s| s.apply(request.id, users)) {
        debug!("[view] request {} -> {} users", request.id, count);
    } else {
        debug!("[view] dropped stale response for request {}", request.id);
    }
}

/// Simulate, then reload the leaderboard if it was showing when pressed.
/// `simulating` stays set until the reload has landed.
pub async fn run_simulate<H: ViewHandle>(mut view: H, client: &ApiClient) {
    if !view.update(|s| s.begin_simulate()) {
        return;
    }
    client.simulate_traffic().await;
    info!("[view] simulation finished");
    let reload = view.update(|s| s.finish_simulate());
    if let Some(request) = reload {
        run_fetch(view.clone(), client, request).await;
    }
    view.update(|s| s.end_simulate());
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use crate::shared::view_state::Mode;
    use serde_json::json;
    use std::cell::RefCell;
    use std::rc::Rc;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[derive(Clone, Default)]
    struct Shared(Rc<RefCell<ViewState>>);

    impl ViewHandle for Shared {
        fn update<R>(&mut self, f: impl FnOnce(&mut ViewState) -> R) -> R {
            f(&mut self.0.borrow_mut())
        }
    }

    impl Shared {
        fn get(&self) -> ViewState {
            self.0.borrow().clone()
        }
    }

    async fn board(server: &MockServer, expected: u64) {
        Mock::given(method("GET"))
            .and(path("/leaderboard"))
            .and(query_param("limit", "50"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"username": "alice", "rating": 2410, "rank": 1},
                {"username": "bob", "rating": 2388, "rank": 2}
            ])))
            .expect(expected)
            .mount(server)
            .await;
    }

    async fn simulate(server: &MockServer) {
        Mock::given(method("GET"))
            .and(path("/simulate"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"message": "ok"})))
            .expect(1)
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn mount_fills_list_from_leaderboard() {
        let server = MockServer::start().await;
        board(&server, 1).await;
        let client = ApiClient::new(server.uri());

        let mut view = Shared::default();
        let request = view.update(|s| s.mount());
        run_fetch(view.clone(), &client, request).await;

        let state = view.get();
        assert!(!state.loading);
        assert_eq!(state.users.len(), 2);
        assert_eq!(state.users[0].username, "alice");
    }

    #[tokio::test]
    async fn search_request_hits_search_endpoint() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search"))
            .and(query_param("q", "ali"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"username": "alice", "rating": 2410, "rank": 1}
            ])))
            .expect(1)
            .mount(&server)
            .await;
        let client = ApiClient::new(server.uri());

        let mut view = Shared::default();
        let request = view.update(|s| s.set_query("ali")).expect("search");
        run_fetch(view.clone(), &client, request).await;

        let state = view.get();
        assert_eq!(state.mode, Mode::Search);
        assert_eq!(state.users.len(), 1);
    }

    #[tokio::test]
    async fn simulate_reloads_before_clearing_flag() {
        let server = MockServer::start().await;
        simulate(&server).await;
        board(&server, 1).await;
        let client = ApiClient::new(server.uri());

        let view = Shared::default();
        run_simulate(view.clone(), &client).await;

        let state = view.get();
        assert!(!state.simulating);
        assert!(!state.loading);
        assert_eq!(state.users.len(), 2);
    }

    #[tokio::test]
    async fn simulate_in_search_mode_does_not_refetch() {
        let server = MockServer::start().await;
        simulate(&server).await;
        board(&server, 0).await;
        Mock::given(method("GET"))
            .and(path("/search"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(0)
            .mount(&server)
            .await;
        let client = ApiClient::new(server.uri());

        let mut view = Shared::default();
        view.update(|s| s.set_query("al"));
        run_simulate(view.clone(), &client).await;

        let state = view.get();
        assert!(!state.simulating);
        assert_eq!(state.mode, Mode::Search);
    }

    #[tokio::test]
    async fn simulate_failure_still_clears_flag() {
        let client = ApiClient::new("http://127.0.0.1:1");
        let view = Shared::default();
        run_simulate(view.clone(), &client).await;
        assert!(!view.get().simulating);
    }
}
