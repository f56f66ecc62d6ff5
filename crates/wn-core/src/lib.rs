//! `wn-core` — foundational types for the `worknav` field-task toolkit.
//!
//! This crate is a dependency of every other `wn-*` crate.  It intentionally
//! has no `wn-*` dependencies and minimal external ones (only `thiserror`,
//! plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `TaskId`, `WorkerId`                                  |
//! | [`geo`]         | `Coordinate`, haversine distance                      |
//! | [`eta`]         | `TravelProfile`, `Eta` arrival estimates              |
//! | [`status`]      | `TaskStatus`, `TaskPriority` enums                    |
//! | [`time`]        | `Timestamp` (unix milliseconds)                       |
//! | [`error`]       | `GeoError`, `GeoResult`                               |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod error;
pub mod eta;
pub mod geo;
pub mod ids;
pub mod status;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{GeoError, GeoResult};
pub use eta::{Eta, TravelProfile, URBAN_AVERAGE_SPEED_KMH};
pub use geo::{Coordinate, EARTH_RADIUS_KM};
pub use ids::{TaskId, WorkerId};
pub use status::{TaskPriority, TaskStatus};
pub use time::Timestamp;
