//! Core draw engine: pool generation, random selection, and draw/undo state.
//!
//! ## Module overview
//!
//! | Module    | Purpose |
//! |-----------|---------|
//! | `models`  | Shared types: ranges, ball states, snapshots |
//! | `error`   | Range validation errors |
//! | `pool`    | `generate_pool()`: the ascending closed range as a `Vec` |
//! | `random`  | `RandomSource` trait with seeded and scripted implementations |
//! | `session` | `DrawSession`: draw, undo and range resets |

pub mod error;
pub mod models;
pub mod pool;
pub mod random;
pub mod session;

// Re-export the public API surface so callers can use
// `draw_engine::DrawSession` without reaching into sub-modules.
pub use error::{Error, Result};
pub use models::{BallStatus, HistoryEntry, Range, Snapshot, DEFAULT_RANGE, MAX_POOL_SIZE};
pub use pool::generate_pool;
pub use random::{RandomSource, ScriptedRandom, StdRandom};
pub use session::DrawSession;
