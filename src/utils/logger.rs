use tracing::Subscriber;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// `RUST_LOG` wins over the built-in directives.
fn env_filter(default_directives: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directives))
}

/// Human-readable output on stderr so stdout carries only the JSON result.
pub fn init_cli_logger(verbose: bool) {
    let directives = if verbose {
        "people_api=debug,people=debug,info"
    } else {
        "people_api=warn"
    };

    tracing_subscriber::registry()
        .with(env_filter(directives))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(verbose)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();
}

/// One JSON object per line. Each event carries the fields of the enclosing
/// `request` span (request id, method, path) so an invocation's lines can be
/// grouped in CloudWatch.
fn lambda_layer<S, W>(writer: W) -> impl Layer<S>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    tracing_subscriber::fmt::layer()
        .with_target(false)
        .without_time()
        .with_writer(writer)
        .json()
        .flatten_event(true)
        .with_current_span(true)
        .with_span_list(false)
}

pub fn init_lambda_logger() {
    tracing_subscriber::registry()
        .with(env_filter("people_api=info"))
        .with(lambda_layer(std::io::stdout))
        .init();
}
