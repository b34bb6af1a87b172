use std::sync::Once;

static INIT: Once = Once::new();

/// Install the stderr subscriber. `RUST_LOG` overrides the default filter.
pub fn init_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("kana_cli=warn")),
            )
            .init();
    });
}
