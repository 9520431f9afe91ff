use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used when `RUST_LOG` is not set.
pub const DEFAULT_FILTER: &str = "common=info,boards=info";

/// Installs the global `tracing` subscriber.
///
/// Honours `RUST_LOG`. Returns `false` if a subscriber was already installed,
/// so calling this more than once is harmless.
pub fn init() -> bool {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into());

    let installed = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init()
        .is_ok();

    if installed {
        tracing::debug!("Logger initialized.");
    }
    installed
}
