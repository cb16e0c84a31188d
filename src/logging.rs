use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_DIRECTIVE: &str = "envars=warn";
const VERBOSE_DIRECTIVE: &str = "envars=debug";

/// Initialize logging on stderr.
///
/// By default only warnings and errors from this crate are emitted.
/// `RUST_LOG` directives are applied on top of that default, and `verbose`
/// forces debug for this crate.
pub fn init_logging(verbose: bool) {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();

    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .without_time()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(EnvFilter::new(filter_spec(rust_log.as_deref(), verbose)))
        .try_init();
}

/// Builds the filter string; for a repeated target the last directive wins
fn filter_spec(rust_log: Option<&str>, verbose: bool) -> String {
    let mut spec = DEFAULT_DIRECTIVE.to_string();

    if let Some(extra) = rust_log.map(str::trim).filter(|s| !s.is_empty()) {
        spec.push(',');
        spec.push_str(extra);
    }

    if verbose {
        spec.push(',');
        spec.push_str(VERBOSE_DIRECTIVE);
    }

    spec
}
