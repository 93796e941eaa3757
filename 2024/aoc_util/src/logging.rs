//! Diagnostics for the puzzle binaries.
//!
//! Events go to stderr so the answer printed on stdout stays clean. The
//! filter comes from `RUST_LOG` and defaults to `warn`, e.g.
//! `RUST_LOG=day2=debug cargo run -p day2 --bin part2 -- inputs.txt`.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // A second call (e.g. from tests) keeps the first subscriber.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .try_init();
}
