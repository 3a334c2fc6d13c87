pub mod leaderboard_screen;
pub mod screen_header;
pub mod user_card;

pub use leaderboard_screen::LeaderboardScreen;
pub use screen_header::ScreenHeader;
pub use user_card::UserCard;
