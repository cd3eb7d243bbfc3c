//! Terminal observer trait for consuming the notification stream.

use crate::{RunSummary, TerminalError, TimedNotification};

/// Callbacks invoked by [`Terminal::run`][crate::Terminal::run].
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example — console printer
///
/// ```rust,ignore
/// struct Printer;
///
/// impl TerminalObserver for Printer {
///     fn on_notification(&mut self, line: &TimedNotification) {
///         println!("{line}");
///     }
/// }
/// ```
pub trait TerminalObserver {
    /// Called for every notification, in the order the transitions happened.
    fn on_notification(&mut self, _line: &TimedNotification) {}

    /// Called once when `run` reaches its horizon.
    fn on_run_end(&mut self, _summary: &RunSummary) {}

    /// Called instead of `on_run_end` when the run aborts.  Every
    /// notification recorded before the failure has already been delivered.
    fn on_run_error(&mut self, _error: &TerminalError) {}
}

/// A [`TerminalObserver`] that ignores everything.
pub struct SilentObserver;

impl TerminalObserver for SilentObserver {}

/// Keeps every notification in memory.
#[derive(Default, Debug)]
pub struct TraceRecorder {
    pub entries: Vec<TimedNotification>,
    pub summary: Option<RunSummary>,
    pub error:   Option<TerminalError>,
}

impl TraceRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// The recorded stream rendered as status lines.
    pub fn lines(&self) -> Vec<String> {
        self.entries.iter().map(ToString::to_string).collect()
    }
}

impl TerminalObserver for TraceRecorder {
    fn on_notification(&mut self, line: &TimedNotification) {
        self.entries.push(*line);
    }

    fn on_run_end(&mut self, summary: &RunSummary) {
        self.summary = Some(*summary);
    }

    fn on_run_error(&mut self, error: &TerminalError) {
        self.error = Some(error.clone());
    }
}

impl<O: TerminalObserver + ?Sized> TerminalObserver for &mut O {
    fn on_notification(&mut self, line: &TimedNotification) {
        (**self).on_notification(line);
    }

    fn on_run_end(&mut self, summary: &RunSummary) {
        (**self).on_run_end(summary);
    }

    fn on_run_error(&mut self, error: &TerminalError) {
        (**self).on_run_error(error);
    }
}
