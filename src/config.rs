use dioxus::logger::tracing::info;
use once_cell::sync::Lazy;

pub const DEFAULT_BASE_URL: &str = "https://matiks-project-backend.onrender.com";

/// Name of the variable overriding the backend root, read at runtime on native
/// targets and captured at compile time for web builds.
pub const BASE_URL_VAR: &str = "API_URL";

static BASE_URL: Lazy<String> = Lazy::new(|| {
    let runtime = runtime_override();
    let url = resolve_base_url_from(runtime.as_deref(), option_env!("API_URL"));
    info!("[config] backend base url: {}", url);
    url
});

/// Backend root address, resolved once per process.
pub fn base_url() -> &'static str {
    BASE_URL.as_str()
}

#[cfg(not(target_arch = "wasm32"))]
fn runtime_override() -> Option<String> {
    std::env::var(BASE_URL_VAR).ok()
}

#[cfg(target_arch = "wasm32")]
fn runtime_override() -> Option<String> {
    None
}

pub fn resolve_base_url_from(runtime: Option<&str>, compiled: Option<&str>) -> String {
    [runtime, compiled]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|s| !s.is_empty())
        .unwrap_or(DEFAULT_BASE_URL)
        .trim_end_matches('/')
        .to_string()
}
