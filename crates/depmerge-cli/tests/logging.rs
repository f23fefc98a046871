//! Subscriber output tests. The global subscriber can be installed once per
//! process, so this file holds a single test.

use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use tracing::level_filters::LevelFilter;
use tracing_subscriber::fmt::MakeWriter;

use depmerge_cli::logging::{LogConfig, LogFormat, init_logging_with_writer};

#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl Captured {
    fn text(&self) -> String {
        String::from_utf8(self.0.lock().expect("buffer lock").clone()).expect("utf-8 logs")
    }
}

impl Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().expect("buffer lock").extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for Captured {
    type Writer = Captured;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

#[test]
fn compact_output_honors_target_and_timestamp_settings() {
    let captured = Captured::default();
    let config = LogConfig {
        use_env_filter: false,
        ..LogConfig::default()
    }
    .with_level_filter(LevelFilter::INFO)
    .with_format(LogFormat::Compact)
    .with_ansi(false)
    .with_timestamps(false)
    .with_target(true);
    init_logging_with_writer(&config, captured.clone());

    tracing::info!(target: "depmerge_core", rows = 3, "reconciliation complete");
    tracing::debug!(target: "depmerge_core", "filtered out");
    tracing::info!(target: "other_crate", "filtered out");

    let text = captured.text();
    let line = text.lines().next().expect("one log line");
    assert_eq!(text.lines().count(), 1);
    assert!(line.contains("depmerge_core"));
    assert!(line.contains("reconciliation complete"));
    assert!(line.contains("rows=3"));
    assert!(line.trim_start().starts_with("INFO"));
}
