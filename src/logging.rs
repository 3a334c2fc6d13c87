#![cfg(any(feature = "desktop", feature = "mobile"))]

use tracing_subscriber::{fmt, prelude::*, util::SubscriberInitExt, EnvFilter};

/// Native builds log through `tracing_subscriber`; `RUST_LOG` overrides the filter.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if let Err(e) = tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .try_init()
    {
        eprintln!("[logging] subscriber already set: {e}");
    }
}
