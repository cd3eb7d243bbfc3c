//! `JournalObserver<W>` — bridges `TerminalObserver` to an `OutputWriter`.

use ct_terminal::{RunSummary, TerminalError, TerminalObserver, TimedNotification};

use crate::row::NotificationRow;
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// Rows buffered before a batch is handed to the writer.
const BATCH: usize = 256;

/// A [`TerminalObserver`] that writes every notification and the run summary
/// to any [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because observer methods
/// have no return value.  After `terminal.run()` returns, check for errors
/// with [`take_error`][Self::take_error].
pub struct JournalObserver<W: OutputWriter> {
    writer:     W,
    pending:    Vec<NotificationRow>,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> JournalObserver<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            pending:    Vec::with_capacity(BATCH),
            last_error: None,
        }
    }

    /// Take the stored write error (if any) after `terminal.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect output after the run).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn flush_pending(&mut self) {
        if self.pending.is_empty() {
            return;
        }
        let result = self.writer.write_notifications(&self.pending);
        self.pending.clear();
        self.store_err(result);
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> TerminalObserver for JournalObserver<W> {
    fn on_notification(&mut self, line: &TimedNotification) {
        self.pending.push(NotificationRow::from(line));
        if self.pending.len() >= BATCH {
            self.flush_pending();
        }
    }

    fn on_run_end(&mut self, summary: &RunSummary) {
        self.flush_pending();
        let result = self.writer.write_summary(summary);
        self.store_err(result);
        let result = self.writer.finish();
        self.store_err(result);
    }

    fn on_run_error(&mut self, _error: &TerminalError) {
        self.flush_pending();
        let result = self.writer.finish();
        self.store_err(result);
    }
}
