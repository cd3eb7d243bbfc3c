//! The `OutputWriter` trait implemented by all backend writers.

use ct_terminal::RunSummary;

use crate::{NotificationRow, OutputResult};

/// Trait implemented by the console and CSV writers.
///
/// All methods are infallible from the observer's perspective — errors are
/// stored internally and retrieved with [`JournalObserver::take_error`].
///
/// [`JournalObserver::take_error`]: crate::JournalObserver::take_error
pub trait OutputWriter {
    /// Write a batch of notifications, in stream order.
    fn write_notifications(&mut self, rows: &[NotificationRow]) -> OutputResult<()>;

    /// Write the end-of-run totals.
    fn write_summary(&mut self, summary: &RunSummary) -> OutputResult<()>;

    /// Flush and close all underlying handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}

/// Writes only when present.
impl<W: OutputWriter> OutputWriter for Option<W> {
    fn write_notifications(&mut self, rows: &[NotificationRow]) -> OutputResult<()> {
        self.as_mut().map_or(Ok(()), |w| w.write_notifications(rows))
    }

    fn write_summary(&mut self, summary: &RunSummary) -> OutputResult<()> {
        self.as_mut().map_or(Ok(()), |w| w.write_summary(summary))
    }

    fn finish(&mut self) -> OutputResult<()> {
        self.as_mut().map_or(Ok(()), |w| w.finish())
    }
}

/// Writes to both; the first error wins but `finish` is attempted on both.
impl<A: OutputWriter, B: OutputWriter> OutputWriter for (A, B) {
    fn write_notifications(&mut self, rows: &[NotificationRow]) -> OutputResult<()> {
        self.0.write_notifications(rows)?;
        self.1.write_notifications(rows)
    }

    fn write_summary(&mut self, summary: &RunSummary) -> OutputResult<()> {
        self.0.write_summary(summary)?;
        self.1.write_summary(summary)
    }

    fn finish(&mut self) -> OutputResult<()> {
        let first = self.0.finish();
        let second = self.1.finish();
        first.and(second)
    }
}
