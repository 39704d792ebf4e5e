use tracing::Subscriber;
use tracing_subscriber::{
    fmt::{self, format::FmtSpan, MakeWriter},
    layer::SubscriberExt,
    registry::LookupSpan,
    util::SubscriberInitExt,
    EnvFilter, Layer,
};

use crate::config::{LogFormat, LoggingConfig};

/// Installs the global subscriber. `RUST_LOG` wins over the configured level.
pub fn init_logging(config: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.level));

    tracing_subscriber::registry()
        .with(filter)
        .with(format_layer(&config.format, std::io::stdout))
        .init();

    tracing::info!(level = %config.level, "Logging initialized");
}

/// Formatting layer for the configured output style
fn format_layer<S, W>(format: &LogFormat, writer: W) -> Box<dyn Layer<S> + Send + Sync>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    match format {
        LogFormat::Json => fmt::layer()
            .json()
            .with_span_events(FmtSpan::CLOSE)
            .with_writer(writer)
            .boxed(),
        LogFormat::Pretty => fmt::layer()
            .pretty()
            .with_target(true)
            .with_span_events(FmtSpan::CLOSE)
            .with_writer(writer)
            .boxed(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Capture(Arc<Mutex<Vec<u8>>>);

    impl Write for Capture {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    fn render(format: LogFormat) -> String {
        let capture = Capture::default();
        let sink = capture.clone();
        let subscriber =
            tracing_subscriber::registry().with(format_layer(&format, move || sink.clone()));

        tracing::subscriber::with_default(subscriber, || {
            tracing::info!(project_id = "p-1", "Project created");
        });

        let bytes = capture.0.lock().unwrap().clone();
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn test_json_format() {
        let output = render(LogFormat::Json);
        let line: serde_json::Value = serde_json::from_str(output.lines().next().unwrap()).unwrap();

        assert_eq!(line["level"], "INFO");
        assert_eq!(line["fields"]["message"], "Project created");
        assert_eq!(line["fields"]["project_id"], "p-1");
    }

    #[test]
    fn test_pretty_format_is_multiline_with_location() {
        let output = render(LogFormat::Pretty);

        assert!(output.contains("Project created"));
        assert!(output.contains("infrastructure/logging.rs"));
        assert!(output.lines().filter(|l| !l.trim().is_empty()).count() >= 2);
    }
}
