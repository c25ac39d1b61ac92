//! Tracing utilities shared between the nldoc crates.

use ansi_term::Colour;
use std::{env, io};
use tracing::{Level, Metadata};
use tracing_subscriber::{
    filter::{EnvFilter, LevelFilter},
    fmt::MakeWriter,
};

const LOG_FILTER: &str = "RUST_LOG";

/// Prints a status line with a bold green action verb, `cargo` style.
pub fn println_action_green(action: &str, txt: &str) {
    tracing::info!("{:>10} {}", Colour::Green.bold().paint(action), txt);
}

/// Prints an error message with a red prefix.
pub fn println_error(txt: &str) {
    tracing::error!("{} {}", Colour::Red.paint("error:"), txt);
}

// Routes ERROR and WARN records to stderr and everything else to stdout,
// so status output stays pipeable.
struct StdioTracingWriter {
    writer_mode: TracingWriterMode,
}

impl<'a> MakeWriter<'a> for StdioTracingWriter {
    type Writer = Box<dyn io::Write>;

    fn make_writer(&'a self) -> Self::Writer {
        if self.writer_mode == TracingWriterMode::Stderr {
            Box::new(io::stderr())
        } else {
            // No metadata to inspect here; stdout is the default stream.
            Box::new(io::stdout())
        }
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        if self.writer_mode == TracingWriterMode::Stderr
            || (self.writer_mode == TracingWriterMode::Stdio && meta.level() <= &Level::WARN)
        {
            return Box::new(io::stderr());
        }

        Box::new(io::stdout())
    }
}

#[derive(PartialEq, Eq)]
pub enum TracingWriterMode {
    /// Write ERROR and WARN to stderr and everything else to stdout.
    Stdio,
    /// Write everything to stdout.
    Stdout,
    /// Write everything to stderr.
    Stderr,
}

#[derive(Default)]
pub struct TracingSubscriberOptions {
    pub log_level: Option<LevelFilter>,
    pub writer_mode: Option<TracingWriterMode>,
}

/// Initializes a plain subscriber whose output reads like ordinary
/// `println!` lines. The minimum level defaults to `info` and can be
/// changed through the `RUST_LOG` environment variable.
pub fn init_tracing_subscriber(options: TracingSubscriberOptions) {
    let env_filter = match env::var_os(LOG_FILTER) {
        Some(_) => EnvFilter::try_from_default_env().expect("Invalid `RUST_LOG` provided"),
        None => EnvFilter::new("info"),
    };

    let builder = tracing_subscriber::fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_ansi(true)
        .with_level(false)
        .with_file(false)
        .with_line_number(false)
        .without_time()
        .with_target(false)
        .with_writer(StdioTracingWriter {
            writer_mode: options.writer_mode.unwrap_or(TracingWriterMode::Stdio),
        });

    // An explicit log level takes precedence over the RUST_LOG filter.
    if let Some(level_filter) = options.log_level {
        builder.with_max_level(level_filter).init();
    } else {
        builder.init();
    }
}
