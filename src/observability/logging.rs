//! Structured logging setup.

use std::fmt;

use tracing::{Event, Level, Subscriber};
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::EnvFilter;

use crate::config::Configuration;

/// Logging configuration derived from the merged settings.
///
/// A plain value owned by the bootstrap rather than ambient state, so tests
/// can construct one and inspect the selected level without installing a
/// subscriber.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingConfig {
    pub debug: bool,
}

impl LoggingConfig {
    pub fn from_settings(config: &Configuration) -> Self {
        Self {
            debug: config.debug(),
        }
    }

    /// Verbosity: debug level when `JINO_DEBUG` is truthy, info otherwise.
    pub fn level(&self) -> Level {
        if self.debug {
            Level::DEBUG
        } else {
            Level::INFO
        }
    }

    /// Install the process-wide subscriber. `RUST_LOG` takes precedence over
    /// the derived level when set. A second call is a no-op.
    pub fn init(&self) {
        let fallback = if self.debug { "debug" } else { "info" };
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| fallback.into());

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .event_format(LineFormat)
            .try_init();
    }
}

/// Event formatter producing `LEVEL: target | message` lines.
struct LineFormat;

impl<S, N> FormatEvent<S, N> for LineFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let meta = event.metadata();
        write!(writer, "{}: {} | ", meta.level(), meta.target())?;
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_follows_debug_flag() {
        let mut config = Configuration::default();
        assert_eq!(LoggingConfig::from_settings(&config).level(), Level::INFO);

        config.insert("JINO_DEBUG", false);
        assert_eq!(LoggingConfig::from_settings(&config).level(), Level::INFO);

        config.insert("JINO_DEBUG", true);
        assert_eq!(LoggingConfig::from_settings(&config).level(), Level::DEBUG);
    }

    #[test]
    fn truthy_string_enables_debug() {
        let mut config = Configuration::default();
        config.insert("JINO_DEBUG", "1");
        assert_eq!(LoggingConfig::from_settings(&config).level(), Level::DEBUG);
    }
}
