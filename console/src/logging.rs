use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the global subscriber. Output goes to stderr so it never mixes
/// with the table on stdout; `RUST_LOG` overrides the default filter.
pub fn init_logger(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(verbose)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}

/// Target directives match by prefix, so `clientes` also covers
/// `clientes_core`.
fn default_directives(verbose: bool) -> &'static str {
    if verbose {
        "clientes=debug"
    } else {
        "clientes=info"
    }
}
