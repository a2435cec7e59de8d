use crate::applet::Applet;
use anyhow::Error as Anyhow;
use clap::Parser;
use std::io::{stderr, IsTerminal};
use tracing::{instrument, Level};
use tracing_subscriber::fmt::{format::FmtSpan, layer};
use tracing_subscriber::{filter::Targets, prelude::*, registry, util::SubscriberInitExt};

/// Two players, one board, rules enforced.
#[derive(Parser)]
#[clap(author, version, about)]
pub struct Cli {
    /// Verbosity level of the diagnostics written to stderr.
    #[clap(short, long)]
    #[cfg_attr(not(debug_assertions), clap(default_value_t = Level::INFO))]
    #[cfg_attr(debug_assertions, clap(default_value_t = Level::DEBUG))]
    verbosity: Level,

    #[clap(subcommand)]
    applet: Option<Applet>,
}

impl Cli {
    /// The rule engine and this binary log at the requested verbosity, dependencies at most `WARN`.
    fn filter(&self) -> Targets {
        Targets::new()
            .with_target(env!("CARGO_CRATE_NAME"), self.verbosity)
            .with_target("lib", self.verbosity)
            .with_default(Level::WARN.min(self.verbosity))
    }

    #[instrument(level = "trace", skip(self), err)]
    pub fn execute(self) -> Result<(), Anyhow> {
        // Shares the terminal with the prompt.
        let writer = layer()
            .compact()
            .without_time()
            .with_span_events(FmtSpan::NONE)
            .with_ansi(stderr().is_terminal())
            .with_writer(stderr);

        registry().with(self.filter()).with(writer).init();

        self.applet.unwrap_or_default().execute()
    }
}
