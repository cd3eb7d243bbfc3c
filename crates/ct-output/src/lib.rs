//! `ct-output` — writers for the terminal's notification stream.
//!
//! | Writer                        | Destination                                   |
//! |-------------------------------|-----------------------------------------------|
//! | [`ConsoleWriter`]             | Any `io::Write`; one status line per notification |
//! | [`CsvWriter`]                 | `notifications.csv`, `run_summary.csv`        |
//!
//! All writers implement [`OutputWriter`] and are driven by
//! [`JournalObserver`], which implements `ct_terminal::TerminalObserver`.
//! Writers compose: `Option<W>` writes when `Some`, and a pair `(A, B)`
//! writes to both.
//!
//! # Usage
//!
//! ```rust,ignore
//! use ct_output::{ConsoleWriter, CsvWriter, JournalObserver};
//!
//! let writer = (ConsoleWriter::stdout(), CsvWriter::new(Path::new("./output"))?);
//! let mut obs = JournalObserver::new(writer);
//! terminal.run(Tick(5_000), &mut obs)?;
//! obs.take_error().map(|e| eprintln!("output error: {e}"));
//! ```

pub mod console;
pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(test)]
mod tests;

pub use console::ConsoleWriter;
pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::JournalObserver;
pub use row::NotificationRow;
pub use writer::OutputWriter;
