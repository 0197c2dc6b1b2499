use tracing_subscriber::{
    prelude::__tracing_subscriber_SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

#[allow(unused_imports)]
use tracing::{instrument, trace};

/// Installs the global subscriber. Events go to stderr so they never
/// interleave with the board on stdout. `RUST_LOG` takes precedence over
/// the `verbose` switch.
#[instrument]
pub fn init_tracing(verbose: bool) {
    let default_directive = if verbose { "hangman=debug" } else { "hangman=warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    trace!("finished");
}
