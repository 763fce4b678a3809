//! CLI Tracing
//!
//! Stdout only ever carries formatted blocks, so every log line is routed to stderr.
//! The filter comes from the verbosity flags unless `CXXREC_LOG` is set, in which case that
//! directive string wins.

use crate::Verbosity;
use std::env;
use tracing_subscriber::{prelude::*, EnvFilter};

const LOG_ENV: &str = "CXXREC_LOG";

pub(crate) struct TraceController;

impl TraceController {
    /// Build tracing infrastructure.
    pub(crate) fn initialize(verbosity: &Verbosity) {
        let filter = match env::var(LOG_ENV) {
            Ok(directives) => EnvFilter::new(directives),
            Err(_) => EnvFilter::new(default_directives(verbosity)),
        };

        // json lines for tools, plain lines for people
        let json_layer = verbosity.json_output.then(|| {
            tracing_subscriber::fmt::layer()
                .json()
                .with_writer(std::io::stderr)
        });

        let fmt_layer = (!verbosity.json_output).then(|| {
            tracing_subscriber::fmt::layer()
                .with_target(verbosity.verbose || verbosity.trace)
                .with_writer(std::io::stderr)
        });

        tracing_subscriber::registry()
            .with(filter)
            .with(json_layer)
            .with(fmt_layer)
            .init();
    }
}

fn default_directives(verbosity: &Verbosity) -> &'static str {
    match verbosity {
        Verbosity { trace: true, .. } => "error,cxxrec=trace,cxx_records=trace",
        Verbosity { verbose: true, .. } => "error,cxxrec=debug,cxx_records=debug",
        // the structured outcome is logged at info and must survive --quiet
        Verbosity {
            quiet: true,
            json_output: true,
            ..
        } => "error,cxxrec=info",
        Verbosity { quiet: true, .. } => "error",
        _ => "error,cxxrec=info,cxx_records=info",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_picks_the_filter() {
        let quiet = Verbosity {
            quiet: true,
            ..Default::default()
        };
        assert_eq!(default_directives(&quiet), "error");

        let verbose = Verbosity {
            verbose: true,
            ..Default::default()
        };
        assert_eq!(
            default_directives(&verbose),
            "error,cxxrec=debug,cxx_records=debug"
        );

        let both = Verbosity {
            verbose: true,
            trace: true,
            ..Default::default()
        };
        assert_eq!(
            default_directives(&both),
            "error,cxxrec=trace,cxx_records=trace"
        );

        let quiet_json = Verbosity {
            quiet: true,
            json_output: true,
            ..Default::default()
        };
        assert_eq!(default_directives(&quiet_json), "error,cxxrec=info");

        assert_eq!(
            default_directives(&Verbosity::default()),
            "error,cxxrec=info,cxx_records=info"
        );
    }
}
