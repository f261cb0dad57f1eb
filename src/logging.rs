use std::str::FromStr;

use tracing::metadata::LevelFilter;
use tracing_subscriber::{
    filter::FilterFn, prelude::__tracing_subscriber_SubscriberExt, util::SubscriberInitExt, Layer,
};

#[macro_export]
macro_rules! log {
    ($level:expr, $span:expr, $($msg:tt)*) => {{
        let span = $crate::tracing::span!(target: "exemplar", $level, $span);
        let _enter = span.enter();

        $crate::tracing::event!(target: "exemplar", $level, $($msg)*)
    }};
}

/// Something leaving the process, e.g. a delivery confirmation.
#[macro_export]
macro_rules! outgoing {
    (level = $level:ident, $($msg:tt)*) => {
        $crate::log!($crate::tracing::Level::$level, "outgoing", $($msg)*)
    };

    ($($msg:tt)*) => {
        $crate::outgoing!(level = TRACE, $($msg)*)
    };
}

#[macro_export]
macro_rules! internal {
    (level = $level:ident, $($msg:tt)*) => {
        $crate::log!($crate::tracing::Level::$level, "internal", $($msg)*)
    };

    ($($msg:tt)*) => {
        $crate::internal!(level = TRACE, $($msg)*)
    };
}

/// Resolve the level filter from `LOG_LEVEL`, falling back to `default` when
/// unset or unparseable.
fn level_from(value: Option<&str>, default: LevelFilter) -> LevelFilter {
    value.map_or(default, |level| {
        LevelFilter::from_str(level).unwrap_or_else(|_| {
            eprintln!("Invalid log level specified {level}, defaulting to {default}");
            default
        })
    })
}

pub fn init() {
    let default = if cfg!(debug_assertions) {
        LevelFilter::TRACE
    } else {
        LevelFilter::INFO
    };

    let level = level_from(std::env::var("LOG_LEVEL").ok().as_deref(), default);

    // A subscriber may already be installed, e.g. by a test harness
    let _ = tracing_subscriber::Registry::default()
        .with(
            tracing_subscriber::fmt::layer()
                .with_file(false)
                .with_line_number(false)
                .compact()
                .with_ansi(true)
                .with_timer(tracing_subscriber::fmt::time::ChronoUtc::rfc_3339())
                .with_filter(level)
                .with_filter(FilterFn::new(|metadata| {
                    metadata.target().starts_with("exemplar")
                })),
        )
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_from_env_value() {
        assert_eq!(level_from(Some("warn"), LevelFilter::INFO), LevelFilter::WARN);
        assert_eq!(level_from(Some("TRACE"), LevelFilter::INFO), LevelFilter::TRACE);
    }

    #[test]
    fn test_level_falls_back_to_default() {
        assert_eq!(level_from(None, LevelFilter::INFO), LevelFilter::INFO);
        assert_eq!(
            level_from(Some("wombat"), LevelFilter::ERROR),
            LevelFilter::ERROR
        );
    }

    #[test]
    fn test_init_is_idempotent() {
        init();
        init();
        crate::internal!(level = INFO, "logging initialised");
    }
}
