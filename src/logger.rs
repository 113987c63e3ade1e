use crate::settings::Log;
use anyhow::{Context, Result};
use tracing_subscriber::{
    fmt, layer::SubscriberExt, reload, util::SubscriberInitExt, EnvFilter, Registry,
};

const BOOTSTRAP_FILTER: &str = "info";

/// Global subscriber. Starts at `info` so settings loading is logged, then
/// switches to the configured filter.
pub struct Logger {
    filter: reload::Handle<EnvFilter, Registry>,
}

impl Logger {
    pub fn new_bootstrap() -> Logger {
        let (filter_layer, filter) = reload::Layer::new(EnvFilter::new(BOOTSTRAP_FILTER));

        tracing_subscriber::registry()
            .with(filter_layer)
            .with(fmt::layer())
            .init();

        Logger { filter }
    }

    pub fn reload_filter(&self, log: &Log) -> Result<()> {
        let filter = parse_filter(log)?;
        self.filter
            .reload(filter)
            .context("tracing subscriber is gone")?;

        tracing::debug!(filter = %log.filter, "log filter applied");
        Ok(())
    }
}

fn parse_filter(log: &Log) -> Result<EnvFilter> {
    EnvFilter::try_new(&log.filter).with_context(|| format!("bad log filter {:?}", log.filter))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_filter_accepts_directives() {
        let log = Log {
            filter: String::from("epic_notes=debug,tower_http=info,info"),
        };
        assert!(parse_filter(&log).is_ok());
    }

    #[test]
    fn test_parse_filter_rejects_garbage() {
        let log = Log {
            filter: String::from("epic_notes=notalevel"),
        };
        assert!(parse_filter(&log).is_err());
    }
}
