/// Colors for one color scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub bg: &'static str,
    pub card: &'static str,
    pub text: &'static str,
    pub subtext: &'static str,
    pub header_bg: &'static str,
    pub header_text: &'static str,
    pub rank_badge: &'static str,
    pub rank_text: &'static str,
    pub input_bg: &'static str,
    pub input_text: &'static str,
}

pub const LIGHT: Palette = Palette {
    bg: "#F3F4F6",
    card: "#FFFFFF",
    text: "#111827",
    subtext: "#6B7280",
    header_bg: "#4338CA",
    header_text: "#FFFFFF",
    rank_badge: "#F3F4F6",
    rank_text: "#6B7280",
    input_bg: "rgba(255,255,255,0.15)",
    input_text: "#FFFFFF",
};

pub const DARK: Palette = Palette {
    bg: "#111827",         // gray-900
    card: "#1F2937",       // gray-800
    text: "#F9FAFB",       // gray-50
    subtext: "#9CA3AF",    // gray-400
    header_bg: "#312E81",  // indigo-900
    header_text: "#FFFFFF",
    rank_badge: "#374151", // gray-700
    rank_text: "#D1D5DB",  // gray-300
    input_bg: "rgba(0,0,0,0.3)",
    input_text: "#FFFFFF",
};

impl Palette {
    pub fn for_mode(dark: bool) -> Palette {
        if dark {
            DARK
        } else {
            LIGHT
        }
    }
}

const PREFERS_DARK_JS: &str =
    "window.matchMedia && window.matchMedia('(prefers-color-scheme: dark)').matches";

/// System dark-mode preference, when it can be read synchronously (web only).
#[cfg(all(feature = "web", target_arch = "wasm32"))]
pub fn system_prefers_dark() -> bool {
    js_sys::eval(PREFERS_DARK_JS)
        .ok()
        .and_then(|v| v.as_bool())
        .unwrap_or(false)
}

#[cfg(not(all(feature = "web", target_arch = "wasm32")))]
pub fn system_prefers_dark() -> bool {
    false
}

/// Script for platforms that can only answer asynchronously (desktop webview).
pub fn prefers_dark_script() -> String {
    format!("return {PREFERS_DARK_JS};")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picks_palette_by_mode() {
        assert_eq!(Palette::for_mode(true), DARK);
        assert_eq!(Palette::for_mode(false), LIGHT);
        assert_ne!(DARK.bg, LIGHT.bg);
    }

    #[test]
    fn native_builds_defer_preference_to_script() {
        assert!(!system_prefers_dark());
        let script = prefers_dark_script();
        assert!(script.starts_with("return "));
        assert!(script.contains("prefers-color-scheme: dark"));
    }
}
