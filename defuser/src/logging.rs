//! Solver tracing on stderr.
//!
//! stdout carries only solve output, so every diagnostic goes to stderr.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used when `RUST_LOG` is unset, chosen by the number of `-v` flags.
///
/// Other crates stay at `warn`; only this crate gets louder.
pub fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "warn,defuser=info",
        2 => "warn,defuser=debug",
        _ => "warn,defuser=trace",
    }
}

/// Install the stderr subscriber.
///
/// `RUST_LOG` takes precedence over `verbosity` when set.
///
/// ```bash
/// defuser -vvv solve --indicator 4,2 --start 5,0 --target 2,4
/// ```
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(verbosity > 1)
                .compact(),
        )
        .init();
}
