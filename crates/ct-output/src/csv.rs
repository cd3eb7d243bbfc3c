//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `notifications.csv`
//! - `run_summary.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;
use ct_terminal::RunSummary;

use crate::{NotificationRow, OutputResult};
use crate::writer::OutputWriter;

/// Writes run output to two CSV files.
pub struct CsvWriter {
    notifications: Writer<File>,
    summary:       Writer<File>,
}

impl CsvWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut notifications = Writer::from_path(dir.join("notifications.csv"))?;
        notifications.write_record(["time", "kind", "vessel", "container", "label", "message"])?;

        let mut summary = Writer::from_path(dir.join("run_summary.csv"))?;
        summary.write_record([
            "horizon",
            "events_dispatched",
            "vessels_arrived",
            "vessels_berthed",
            "vessels_unloaded",
            "vessels_departed",
            "containers_unloaded",
            "trips_started",
            "trips_completed",
            "in_flight",
        ])?;

        Ok(Self { notifications, summary })
    }
}

fn optional(value: Option<u32>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

impl OutputWriter for CsvWriter {
    fn write_notifications(&mut self, rows: &[NotificationRow]) -> OutputResult<()> {
        for row in rows {
            self.notifications.write_record(&[
                row.time.to_string(),
                row.kind.to_owned(),
                row.vessel.to_string(),
                optional(row.container),
                optional(row.label),
                row.message.clone(),
            ])?;
        }
        Ok(())
    }

    fn write_summary(&mut self, s: &RunSummary) -> OutputResult<()> {
        self.summary.write_record(&[
            s.horizon.0.to_string(),
            s.events_dispatched.to_string(),
            s.vessels_arrived.to_string(),
            s.vessels_berthed.to_string(),
            s.vessels_unloaded.to_string(),
            s.vessels_departed.to_string(),
            s.containers_unloaded.to_string(),
            s.trips_started.to_string(),
            s.trips_completed.to_string(),
            s.in_flight.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        self.notifications.flush()?;
        self.summary.flush()?;
        Ok(())
    }
}
