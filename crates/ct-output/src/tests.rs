//! Integration tests for ct-output.

use ct_core::{TerminalConfig, Tick, VesselId};
use ct_terminal::{
    Notification, RunSummary, ScriptedArrivals, Terminal, TerminalBuilder, TimedNotification,
};

fn timed(at: u64, notification: Notification) -> TimedNotification {
    TimedNotification { at: Tick(at), notification }
}

fn berthed_row() -> crate::NotificationRow {
    crate::NotificationRow::from(&timed(4, Notification::Berthed { vessel: VesselId(2), berth: 1 }))
}

/// One vessel, two containers, every pool of size one.
fn small_terminal() -> Terminal {
    let config = TerminalConfig {
        berths:                1,
        cranes:                1,
        trucks:                1,
        containers_per_vessel: 2,
        ..TerminalConfig::default()
    };
    TerminalBuilder::new(config)
        .arrivals(ScriptedArrivals::at_times([0]))
        .build()
        .unwrap()
}

#[cfg(test)]
mod row_tests {
    use super::*;

    #[test]
    fn vessel_level_row_has_no_container() {
        let row = berthed_row();
        assert_eq!(row.time, 4);
        assert_eq!(row.kind, "berthed");
        assert_eq!(row.vessel, 2);
        assert_eq!(row.container, None);
        assert_eq!(row.label, Some(1));
        assert_eq!(row.message, "Vessel 2 berthed at berth 1");
    }

    #[test]
    fn truck_row_has_container_but_no_label() {
        let row = crate::NotificationRow::from(&timed(
            9,
            Notification::TruckReturned { container: 3, vessel: VesselId(1) },
        ));
        assert_eq!(row.kind, "truck_returned");
        assert_eq!(row.container, Some(3));
        assert_eq!(row.label, None);
    }
}

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use super::*;
    use crate::csv::CsvWriter;
    use crate::observer::JournalObserver;
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn read_rows(path: std::path::PathBuf) -> Vec<csv::StringRecord> {
        let mut rdr = csv::Reader::from_path(path).unwrap();
        rdr.records().map(|r| r.unwrap()).collect()
    }

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("notifications.csv").exists());
        assert!(dir.path().join("run_summary.csv").exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("notifications.csv")).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers, ["time", "kind", "vessel", "container", "label", "message"]);

        let mut rdr2 = csv::Reader::from_path(dir.path().join("run_summary.csv")).unwrap();
        let headers2: Vec<_> = rdr2.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers2.first().map(String::as_str), Some("horizon"));
        assert_eq!(headers2.last().map(String::as_str), Some("in_flight"));
        assert_eq!(headers2.len(), 10);
    }

    #[test]
    fn csv_notification_columns() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_notifications(&[berthed_row()]).unwrap();
        w.finish().unwrap();

        let rows = read_rows(dir.path().join("notifications.csv"));
        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0][0], "4");       // time
        assert_eq!(&rows[0][1], "berthed");
        assert_eq!(&rows[0][2], "2");       // vessel
        assert_eq!(&rows[0][3], "");        // no container
        assert_eq!(&rows[0][4], "1");       // berth label
        assert_eq!(&rows[0][5], "Vessel 2 berthed at berth 1");
    }

    #[test]
    fn csv_finish_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }

    #[test]
    fn csv_empty_batch_ok() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_notifications(&[]).unwrap();
    }

    #[test]
    fn integration_csv() {
        let dir = tmp();
        let mut terminal = small_terminal();
        let mut obs = JournalObserver::new(CsvWriter::new(dir.path()).unwrap());
        let summary = terminal.run(Tick(100), &mut obs).unwrap();
        assert!(obs.take_error().is_none(), "no write errors expected");

        let rows = read_rows(dir.path().join("notifications.csv"));
        assert_eq!(rows.len(), 10);
        assert_eq!(&rows[0][1], "arrived");
        assert_eq!(&rows[9][0], "18");
        assert_eq!(&rows[9][1], "truck_returned");

        let totals = read_rows(dir.path().join("run_summary.csv"));
        assert_eq!(totals.len(), 1);
        assert_eq!(&totals[0][0], "100");
        assert_eq!(&totals[0][6], summary.containers_unloaded.to_string());
    }
}

#[cfg(test)]
mod console_tests {
    use super::*;
    use crate::console::ConsoleWriter;
    use crate::observer::JournalObserver;
    use crate::writer::OutputWriter;

    #[test]
    fn status_line_format() {
        let mut w = ConsoleWriter::new(Vec::new());
        w.write_notifications(&[berthed_row()]).unwrap();
        let text = String::from_utf8(w.into_inner()).unwrap();
        assert_eq!(text, "4: Vessel 2 berthed at berth 1\n");
    }

    #[test]
    fn integration_console_matches_trace() {
        let mut terminal = small_terminal();
        let mut obs = JournalObserver::new(ConsoleWriter::new(Vec::new()).without_summary());
        terminal.run(Tick(100), &mut obs).unwrap();
        let text = String::from_utf8(obs.into_writer().into_inner()).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 10);
        assert_eq!(lines[0], "0: Vessel 1 has arrived and waiting to berth");
        assert_eq!(lines[7], "12: Vessel 1 unloaded");
    }

    #[test]
    fn summary_printed_last() {
        let mut terminal = small_terminal();
        let mut obs = JournalObserver::new(ConsoleWriter::new(Vec::new()));
        let summary = terminal.run(Tick(100), &mut obs).unwrap();
        let text = String::from_utf8(obs.into_writer().into_inner()).unwrap();
        assert_eq!(text.lines().last(), Some(summary.to_string().as_str()));
    }
}

#[cfg(test)]
mod observer_tests {
    use std::io;

    use super::*;
    use crate::observer::JournalObserver;
    use crate::writer::OutputWriter;
    use crate::{NotificationRow, OutputError, OutputResult};

    /// Counts calls; fails every write once `fail` is set.
    #[derive(Default)]
    struct Tally {
        rows:      usize,
        batches:   usize,
        summaries: usize,
        finishes:  usize,
        fail:      bool,
    }

    impl OutputWriter for Tally {
        fn write_notifications(&mut self, rows: &[NotificationRow]) -> OutputResult<()> {
            if self.fail {
                return Err(OutputError::Io(io::Error::other("disk full")));
            }
            self.rows += rows.len();
            self.batches += 1;
            Ok(())
        }

        fn write_summary(&mut self, _summary: &RunSummary) -> OutputResult<()> {
            if self.fail {
                return Err(OutputError::Io(io::Error::other("summary")));
            }
            self.summaries += 1;
            Ok(())
        }

        fn finish(&mut self) -> OutputResult<()> {
            self.finishes += 1;
            Ok(())
        }
    }

    #[test]
    fn rows_flushed_at_run_end() {
        let mut terminal = small_terminal();
        let mut obs = JournalObserver::new(Tally::default());
        terminal.run(Tick(100), &mut obs).unwrap();
        let tally = obs.into_writer();
        assert_eq!(tally.rows, 10);
        assert_eq!(tally.batches, 1);
        assert_eq!(tally.summaries, 1);
        assert_eq!(tally.finishes, 1);
    }

    #[test]
    fn pending_rows_flushed_when_run_aborts() {
        use ct_terminal::{TerminalError, TerminalObserver};

        let mut obs = JournalObserver::new(Tally::default());
        for at in 0..3 {
            obs.on_notification(&timed(at, Notification::Arrived { vessel: VesselId(1) }));
        }
        obs.on_run_error(&TerminalError::InvalidHorizon);

        let tally = obs.into_writer();
        assert_eq!(tally.rows, 3);
        assert_eq!(tally.batches, 1);
        assert_eq!(tally.summaries, 0);
        assert_eq!(tally.finishes, 1);
    }

    #[test]
    fn first_error_kept() {
        let mut terminal = small_terminal();
        let mut obs = JournalObserver::new(Tally { fail: true, ..Tally::default() });
        terminal.run(Tick(100), &mut obs).unwrap();
        let err = obs.take_error().unwrap();
        assert_eq!(err.to_string(), "I/O error: disk full");
        assert!(obs.take_error().is_none());
    }

    #[test]
    fn pair_writes_both_and_option_skips() {
        let mut terminal = small_terminal();
        let writer = (Tally::default(), (None::<Tally>, Tally::default()));
        let mut obs = JournalObserver::new(writer);
        terminal.run(Tick(100), &mut obs).unwrap();
        let (a, (none, b)) = obs.into_writer();
        assert_eq!(a.rows, 10);
        assert_eq!(b.rows, 10);
        assert!(none.is_none());
    }
}
