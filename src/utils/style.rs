use crate::shared::view_state::Mode;
use crate::utils::theme::Palette;

pub const AVATAR_COLORS: [&str; 7] = [
    "#EF4444", "#F59E0B", "#10B981", "#3B82F6", "#6366F1", "#8B5CF6", "#EC4899",
];

/// Colors for one leaderboard row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankStyle {
    pub badge_bg: &'static str,
    pub badge_text: &'static str,
    /// Outline and tinted background, only set for podium rows.
    pub border: Option<&'static str>,
    pub card_bg: &'static str,
}

pub fn rank_style(rank: u32, mode: Mode, dark: bool) -> RankStyle {
    let palette = Palette::for_mode(dark);
    let plain = RankStyle {
        badge_bg: palette.rank_badge,
        badge_text: palette.rank_text,
        border: None,
        card_bg: palette.card,
    };
    if mode != Mode::Leaderboard {
        return plain;
    }
    let podium_bg = if dark { "#171717" } else { "#FAFAFA" };
    let (badge_bg, badge_text, border) = match (rank, dark) {
        (1, true) => ("#451a03", "#D97706", "#F59E0B"),
        (1, false) => ("#FEF3C7", "#D97706", "#F59E0B"),
        (2, true) => ("#1f2937", "#9CA3AF", "#9CA3AF"),
        (2, false) => ("#F3F4F6", "#4B5563", "#9CA3AF"),
        (3, true) => ("#431407", "#EA580C", "#B45309"),
        (3, false) => ("#FFEDD5", "#EA580C", "#B45309"),
        _ => return plain,
    };
    RankStyle {
        badge_bg,
        badge_text,
        border: Some(border),
        card_bg: podium_bg,
    }
}

/// String hash over UTF-16 units: `h = c + (h << 5) - h`.
///
/// Only the shift is done in 32 bits (the operand is truncated to `i32` first);
/// the sum itself is carried in 64 bits without wrapping, so long names land
/// on the same palette slot as the web client's `charCodeAt` hash.
fn name_hash(name: &str) -> i64 {
    name.encode_utf16().fold(0i64, |hash, unit| {
        let shifted = ((hash as i32) << 5) as i64;
        unit as i64 + shifted - hash
    })
}

pub fn avatar_color(username: &str) -> &'static str {
    let idx = (name_hash(username).unsigned_abs() % AVATAR_COLORS.len() as u64) as usize;
    AVATAR_COLORS[idx]
}

/// First two characters, uppercased. Shorter names are returned as-is (uppercased).
pub fn initials(username: &str) -> String {
    username.chars().take(2).collect::<String>().to_uppercase()
}
