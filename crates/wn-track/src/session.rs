//! The tracking session: fix stream in, ranked proximity table out.

use wn_board::TaskBoard;
use wn_core::{TravelProfile, WorkerId};

use crate::config::TrackConfig;
use crate::error::TrackResult;
use crate::filter::{FixDisposition, FixFilter};
use crate::fix::LocationFix;
use crate::observer::TrackObserver;
use crate::proximity::ProximityTable;
use crate::source::LocationSource;

// ── SessionStats ──────────────────────────────────────────────────────────────

/// Counters accumulated over one session.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SessionStats {
    /// Fixes pulled from the source.
    pub seen: u64,
    /// Fixes that passed the filter and updated the table.
    pub accepted: u64,
    /// Fixes the filter rejected.
    pub discarded: u64,
}

// ── TrackingSession ───────────────────────────────────────────────────────────

/// Per-worker tracking state: the filter baseline, the current board
/// snapshot, and the ranked table derived from the last accepted fix.
///
/// Drive it either by pulling a whole [`LocationSource`] dry with
/// [`run`](Self::run), or fix-by-fix with [`ingest`](Self::ingest) from a
/// platform callback.
pub struct TrackingSession {
    worker:  WorkerId,
    config:  TrackConfig,
    profile: TravelProfile,
    board:   TaskBoard,
    filter:  FixFilter,
    table:   ProximityTable,
    stats:   SessionStats,
}

impl TrackingSession {
    /// Create a session over a board snapshot.
    ///
    /// # Errors
    ///
    /// Fails if `config` does not validate; see [`TrackConfig::validate`].
    pub fn new(worker: WorkerId, board: TaskBoard, config: TrackConfig) -> TrackResult<Self> {
        config.validate()?;
        let profile = TravelProfile::new(config.speed_kmh)?;

        Ok(Self {
            filter: FixFilter::new(&config),
            table: ProximityTable::new(),
            stats: SessionStats::default(),
            worker,
            config,
            profile,
            board,
        })
    }

    // ── Driving ───────────────────────────────────────────────────────────

    /// Pull `source` dry, routing every fix through [`ingest`](Self::ingest),
    /// then fire `on_session_end`.
    ///
    /// Use [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<S: LocationSource, O: TrackObserver>(
        &mut self,
        source: &mut S,
        observer: &mut O,
    ) -> SessionStats {
        log::info!(
            "tracking session started for {} ({} open tasks)",
            self.worker,
            self.board.open_count()
        );

        while let Some(fix) = source.next_fix() {
            self.ingest(fix, observer);
        }

        observer.on_session_end(&self.stats);
        log::info!(
            "tracking session ended for {}: {} fixes seen, {} accepted",
            self.worker,
            self.stats.seen,
            self.stats.accepted
        );
        self.stats
    }

    /// Process a single fix.
    ///
    /// Accepted fixes recompute the table and fire `on_fix_accepted` then
    /// `on_table_update`; rejected fixes fire `on_fix_discarded`.
    pub fn ingest<O: TrackObserver>(&mut self, fix: LocationFix, observer: &mut O) -> FixDisposition {
        self.stats.seen += 1;
        let disposition = self.filter.check(&fix);

        if disposition.is_accepted() {
            self.stats.accepted += 1;
            observer.on_fix_accepted(&fix);
            self.table.recompute(&self.board, fix.position, self.profile);
            observer.on_table_update(&fix, &self.table);
        } else {
            self.stats.discarded += 1;
            log::debug!("discarded fix at {}: {}", fix.position, disposition);
            observer.on_fix_discarded(&fix, disposition);
        }

        disposition
    }

    /// Swap in a fresh board snapshot.
    ///
    /// The table is recomputed immediately from the current baseline fix, so
    /// it never shows rows for tasks the new snapshot closed.  The filter
    /// baseline survives the swap; a refresh is not a movement.
    pub fn refresh_board(&mut self, board: TaskBoard) {
        log::info!(
            "board refreshed for {}: {} tasks ({} open)",
            self.worker,
            board.len(),
            board.open_count()
        );
        self.board = board;
        match self.filter.last_accepted() {
            Some(fix) => self.table.recompute(&self.board, fix.position, self.profile),
            None => self.table.clear(),
        }
    }

    // ── Reads ─────────────────────────────────────────────────────────────

    pub fn worker(&self) -> WorkerId {
        self.worker
    }

    pub fn config(&self) -> &TrackConfig {
        &self.config
    }

    pub fn profile(&self) -> TravelProfile {
        self.profile
    }

    pub fn board(&self) -> &TaskBoard {
        &self.board
    }

    /// The ranked table as of the last accepted fix (empty before the
    /// first).
    pub fn table(&self) -> &ProximityTable {
        &self.table
    }

    /// The filter's current baseline fix.
    pub fn last_fix(&self) -> Option<LocationFix> {
        self.filter.last_accepted()
    }

    pub fn stats(&self) -> SessionStats {
        self.stats
    }
}
