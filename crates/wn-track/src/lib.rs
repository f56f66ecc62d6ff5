//! `wn-track` — turns a raw fix stream into a ranked how-far/how-long table.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                |
//! |---------------|---------------------------------------------------------|
//! | [`fix`]       | `LocationFix`                                           |
//! | [`config`]    | `TrackConfig` thresholds + speed                        |
//! | [`filter`]    | `FixFilter`, `FixDisposition`                           |
//! | [`proximity`] | `ProximityTable`, `ProximityRow`                        |
//! | [`session`]   | `TrackingSession`, `SessionStats`                       |
//! | [`observer`]  | `TrackObserver` trait, `NoopObserver`                   |
//! | [`source`]    | `LocationSource` trait, `ReplaySource`, `SimulatedWalk` |
//! | [`error`]     | `TrackError`, `TrackResult<T>`                          |
//!
//! # Pipeline (summary)
//!
//! ```text
//! LocationSource → FixFilter → ProximityTable recompute → TrackObserver
//!                     │
//!                     └─ rejected fixes: on_fix_discarded(reason)
//! ```
//!
//! Every accepted fix becomes the filter's new baseline and triggers a full
//! table rebuild over the board's open tasks.  The session never mutates the
//! board; refreshes swap in a whole new snapshot.
//!
//! # Feature flags
//!
//! | Flag       | Effect                                                   |
//! |------------|----------------------------------------------------------|
//! | `parallel` | Rayon-parallel table recompute (large boards only).      |
//! | `serde`    | Adds `Serialize`/`Deserialize` to the data types.        |

pub mod config;
pub mod error;
pub mod filter;
pub mod fix;
pub mod observer;
pub mod proximity;
pub mod session;
pub mod source;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::TrackConfig;
pub use error::{TrackError, TrackResult};
pub use filter::{FixDisposition, FixFilter};
pub use fix::LocationFix;
pub use observer::{NoopObserver, TrackObserver};
pub use proximity::{ProximityRow, ProximityTable};
pub use session::{SessionStats, TrackingSession};
pub use source::{LocationSource, ReplaySource, SimulatedWalk};
