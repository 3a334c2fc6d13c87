use serde::{Deserialize, Serialize};

/// One leaderboard entry as returned by `/leaderboard` and `/search`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub username: String,
    pub rating: i64,
    pub rank: u32, // 1-based, assigned by the backend
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_backend_payload() {
        let body = r#"[
            {"username": "alice", "rating": 2410, "rank": 1},
            {"username": "bob", "rating": 2388, "rank": 2}
        ]"#;
        let users: Vec<User> = serde_json::from_str(body).unwrap();
        assert_eq!(users.len(), 2);
        assert_eq!(users[0].username, "alice");
        assert_eq!(users[1].rating, 2388);
        assert_eq!(users[1].rank, 2);
    }

    #[test]
    fn ignores_unknown_fields() {
        let body = r#"{"username": "carol", "rating": 1500, "rank": 7, "country": "IT"}"#;
        let user: User = serde_json::from_str(body).unwrap();
        assert_eq!(user.rank, 7);
    }
}
