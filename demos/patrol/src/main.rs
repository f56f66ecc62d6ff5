//! patrol — smallest end-to-end demo for the worknav field toolkit.
//!
//! Replays one municipal worker's morning patrol: load a ward's task
//! snapshot from an embedded CSV export, walk a simulated GPS track across
//! the ward, and watch the proximity ranking re-order as the worker moves.
//! Fix and ranking traces land in `output/patrol/` as CSV.
//!
//! Run with `RUST_LOG=info` to see the session lifecycle logs too.

use std::collections::HashMap;
use std::io::Cursor;
use std::path::Path;
use std::time::Instant;

use anyhow::Result;

use wn_board::{TaskBoard, load_tasks_reader};
use wn_core::{Coordinate, TaskId, Timestamp, WorkerId};
use wn_report::{CsvReporter, ReportWriter, SessionReporter};
use wn_track::{
    FixDisposition, LocationFix, ProximityTable, SessionStats, SimulatedWalk, TrackConfig,
    TrackObserver, TrackingSession,
};

// ── Constants ─────────────────────────────────────────────────────────────────

const WORKER_ID:   u64 = 9;
const SEED:        u64 = 42;
const WALK_STEPS:  u32 = 24;
const INTERVAL_MS: i64 = 5_000; // one fix every 5 s

/// When the board snapshot was pulled; also the walk's first fix time.
const FETCHED_AT: Timestamp = Timestamp::from_unix_secs(1_755_864_000);

// ── Task snapshot CSV ─────────────────────────────────────────────────────────

// Ward export as the backend serves it: one row per reported issue.  The
// coordinates span ~1.5 km of east Kolkata so the ranking visibly flips as
// the walk progresses.  Task 205 is already resolved and never ranks.
const TASK_CSV: &str = "\
task_id,title,address,lat,lon,priority,status,reported_unix_ms\n\
201,Pothole blocking bus bay,12 Rajdanga Main Rd,22.5698,88.4315,high,assigned,1755847200000\n\
202,Streetlight dark at crossing,3 Kasba New Market,22.5741,88.4352,medium,assigned,1755850800000\n\
203,Garbage pileup at vat,88 Bosepukur Rd,22.5786,88.4385,urgent,in_progress,1755854400000\n\
204,Waterlogged underpass,EM Bypass service lane,22.5725,88.4248,low,reported,1755858000000\n\
205,Broken park railing,Madhusudan Park gate 2,22.5760,88.4360,medium,resolved,1755861600000\n\
";

// ── Console observer ──────────────────────────────────────────────────────────

/// Wraps the CSV [`SessionReporter`] and narrates nearest-task changes on
/// stdout.  Titles are copied out of the board up front because the session
/// owns the board while the walk runs.
struct PatrolObserver<W: ReportWriter> {
    inner:    SessionReporter<W>,
    titles:   HashMap<TaskId, String>,
    last_top: Option<TaskId>,
    updates:  usize,
}

impl<W: ReportWriter> PatrolObserver<W> {
    fn new(inner: SessionReporter<W>, board: &TaskBoard) -> Self {
        let titles = board.iter().map(|t| (t.id, t.title.clone())).collect();
        Self { inner, titles, last_top: None, updates: 0 }
    }

    fn title(&self, id: TaskId) -> &str {
        self.titles.get(&id).map_or("<unknown task>", String::as_str)
    }
}

impl<W: ReportWriter> TrackObserver for PatrolObserver<W> {
    fn on_fix_accepted(&mut self, fix: &LocationFix) {
        self.inner.on_fix_accepted(fix);
    }

    fn on_fix_discarded(&mut self, fix: &LocationFix, why: FixDisposition) {
        self.inner.on_fix_discarded(fix, why);
    }

    fn on_table_update(&mut self, at: &LocationFix, table: &ProximityTable) {
        self.updates += 1;
        if let Some(row) = table.nearest() {
            if self.last_top != Some(row.task_id) {
                let t = at.time.millis_since(FETCHED_AT) / 1_000;
                println!(
                    "t+{t:>4}s  nearest is now #{} ({:.2} km, {}): {}",
                    row.task_id.raw(),
                    row.distance_km,
                    row.eta,
                    self.title(row.task_id),
                );
                self.last_top = Some(row.task_id);
            }
        }
        self.inner.on_table_update(at, table);
    }

    fn on_session_end(&mut self, stats: &SessionStats) {
        self.inner.on_session_end(stats);
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    pretty_env_logger::init();

    println!("=== patrol — worknav field demo ===");
    println!("Worker: {WORKER_ID}  |  Steps: {WALK_STEPS}  |  Seed: {SEED}");
    println!();

    // 1. Load the ward's task snapshot.
    let board = load_tasks_reader(Cursor::new(TASK_CSV), FETCHED_AT)?;
    println!("Task board: {} tasks, {} open", board.len(), board.open_count());

    // 2. Device settings for the patrol: default cadence and displacement,
    //    plus an accuracy gate that drops the worst GPS scatter.
    let config = TrackConfig {
        max_accuracy_m: Some(20.0),
        ..TrackConfig::default()
    };

    // 3. CSV trace output.
    std::fs::create_dir_all("output/patrol")?;
    let writer = CsvReporter::new(Path::new("output/patrol"))?;
    let reporter = SessionReporter::new(writer, WorkerId::from(WORKER_ID));
    let mut observer = PatrolObserver::new(reporter, &board);

    // 4. The session takes over the board snapshot.
    let mut session = TrackingSession::new(WorkerId::from(WORKER_ID), board, config)?;

    // 5. Simulated GPS walk from the depot toward the urgent garbage pileup.
    let depot = Coordinate::new(22.5690, 88.4310)?;
    let garbage_vat = Coordinate::new(22.5786, 88.4385)?;
    let mut walk = SimulatedWalk::new(SEED, depot, garbage_vat, WALK_STEPS)
        .with_interval_ms(INTERVAL_MS)
        .with_start(FETCHED_AT);

    // 6. Run the patrol.
    let t0 = Instant::now();
    let stats = session.run(&mut walk, &mut observer);
    let elapsed = t0.elapsed();

    if let Some(e) = observer.inner.take_error() {
        eprintln!("trace output error: {e}");
    }

    // 7. Summary.
    println!();
    println!("Patrol complete in {:.3} s", elapsed.as_secs_f64());
    println!(
        "  fixes: {} seen, {} accepted, {} discarded",
        stats.seen, stats.accepted, stats.discarded
    );
    println!("  ranking updates: {}", observer.updates);
    println!("  traces: output/patrol/fix_trace.csv, output/patrol/proximity.csv");
    println!();

    // 8. Final ranking, as the worker's task list screen would show it.
    println!(
        "{:<6} {:<28} {:<9} {:>9} {:>8}",
        "Task", "Title", "Priority", "Distance", "ETA"
    );
    println!("{}", "-".repeat(64));
    for row in session.table().rows() {
        let (title, priority) = session
            .board()
            .get(row.task_id)
            .map_or(("<gone>", "-"), |t| (t.title.as_str(), t.priority.as_str()));
        println!(
            "#{:<5} {:<28} {:<9} {:>6.2} km {:>8}",
            row.task_id.raw(),
            title,
            priority,
            row.distance_km,
            row.eta.to_string(),
        );
    }

    Ok(())
}
