//! `wn-report` — session trace writers for the worknav toolkit.
//!
//! The CSV backend creates two files:
//!
//! | File            | Contents                                             |
//! |-----------------|------------------------------------------------------|
//! | `fix_trace.csv` | Every gated fix with its disposition                 |
//! | `proximity.csv` | Every ranked table row at every update               |
//!
//! Backends implement [`ReportWriter`] and are driven by
//! [`SessionReporter`], which implements `wn_track::TrackObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use wn_report::{CsvReporter, SessionReporter};
//!
//! let writer = CsvReporter::new(Path::new("./output")).unwrap();
//! let mut obs = SessionReporter::new(writer, worker);
//! session.run(&mut source, &mut obs);
//! obs.take_error().map(|e| eprintln!("report error: {e}"));
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;


pub use self::csv::CsvReporter;
pub use error::{ReportError, ReportResult};
pub use observer::SessionReporter;
pub use row::{FixTraceRow, ProximitySnapshotRow};
pub use writer::ReportWriter;
