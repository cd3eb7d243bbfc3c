//! Status-line output backend.

use std::io::{self, Stdout, Write};

use ct_terminal::RunSummary;

use crate::{NotificationRow, OutputResult};
use crate::writer::OutputWriter;

/// Prints `"<time>: <message>"` per notification, then the summary.
pub struct ConsoleWriter<W: Write> {
    out:          W,
    with_summary: bool,
}

impl ConsoleWriter<Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ConsoleWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out, with_summary: true }
    }

    /// Print only the status lines.
    pub fn without_summary(mut self) -> Self {
        self.with_summary = false;
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> OutputWriter for ConsoleWriter<W> {
    fn write_notifications(&mut self, rows: &[NotificationRow]) -> OutputResult<()> {
        for row in rows {
            writeln!(self.out, "{}: {}", row.time, row.message)?;
        }
        Ok(())
    }

    fn write_summary(&mut self, summary: &RunSummary) -> OutputResult<()> {
        if self.with_summary {
            writeln!(self.out, "{summary}")?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        self.out.flush()?;
        Ok(())
    }
}
