//! Handles all user-facing output for the runner.
//!
//! The runner never prints directly; it hands each [`ReportLine`] to an
//! [`OutputSink`]. `OutputBuffer` captures plain text for tests and embedding
//! programs, `StdoutSink` writes to the console through `termcolor`.

// ============================================================================
// OUTPUT SINKS: OutputBuffer and StdoutSink implementations
// ============================================================================

use std::io::Write;

use termcolor::{Color, ColorSpec, StandardStream, WriteColor};

use crate::config::ColorMode;
use crate::test::report::{ReportLine, Tag};

/// Destination for runner output, one complete line per call.
pub trait OutputSink {
    fn emit(&mut self, line: &ReportLine<'_>);
}

/// OutputBuffer: collects uncolored output into a String, each line ending in `\n`.
#[derive(Debug, Default)]
pub struct OutputBuffer {
    buffer: String,
}

impl OutputBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    pub fn lines(&self) -> Vec<&str> {
        self.buffer.lines().collect()
    }
}

impl OutputSink for OutputBuffer {
    fn emit(&mut self, line: &ReportLine<'_>) {
        self.buffer.push_str(&line.to_string());
        self.buffer.push('\n');
    }
}

/// StdoutSink: writes to stdout, coloring the `[PASS]` / `[FAIL]` tag.
pub struct StdoutSink {
    stream: StandardStream,
}

impl StdoutSink {
    pub fn new(color: ColorMode) -> Self {
        Self {
            stream: StandardStream::stdout(color.color_choice()),
        }
    }
}

impl OutputSink for StdoutSink {
    fn emit(&mut self, line: &ReportLine<'_>) {
        // Console write failures are not test failures; drop them like println! callers would.
        let _ = write_line(&mut self.stream, line);
    }
}

// ============================================================================
// PRIVATE HELPERS
// ============================================================================

fn write_line<W: WriteColor>(out: &mut W, line: &ReportLine<'_>) -> std::io::Result<()> {
    match line.tag() {
        Some(tag) => {
            out.set_color(&tag_color(tag))?;
            write!(out, "{}", tag.as_str())?;
            out.reset()?;
            writeln!(out, " {}", line.message())?;
        }
        None => {
            out.set_color(ColorSpec::new().set_bold(true))?;
            write!(out, "{}", line.message())?;
            out.reset()?;
            writeln!(out)?;
        }
    }
    out.flush()
}

fn tag_color(tag: Tag) -> ColorSpec {
    let mut spec = ColorSpec::new();
    match tag {
        Tag::Pass => spec.set_fg(Some(Color::Green)),
        Tag::Fail => spec.set_fg(Some(Color::Red)).set_bold(true),
    };
    spec
}
