use tracing_subscriber::{fmt::format::FmtSpan, EnvFilter, FmtSubscriber};

pub const DEFAULT_LOG_FILTER: &str = "content_service=debug,seo_llm=debug,tower_http=debug";

/// Installs the global subscriber: pretty output in development, JSON
/// everywhere else. `RUST_LOG` overrides the default filter.
pub fn init_tracing(dev: bool) -> anyhow::Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let subscriber_builder = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_level(true)
        .with_span_events(FmtSpan::CLOSE);

    if dev {
        tracing::subscriber::set_global_default(
            subscriber_builder.pretty().with_ansi(true).finish(),
        )?;
    } else {
        tracing::subscriber::set_global_default(
            subscriber_builder.json().with_ansi(false).finish(),
        )?;
    }

    Ok(())
}
