//! # number_draw
//!
//! Draw unique random numbers from a range until it runs out, with undo.
//!
//! A [`DrawSession`] holds the numbers still available (the pool) and the
//! numbers already drawn (the history). Each draw moves one uniformly chosen
//! number from the pool to the end of the history; undo moves the last one
//! back. Applying a new range resets both. Optionally, a short trivia sentence
//! about each drawn number is fetched from a text-generation service; that
//! lookup never fails and never affects the draw state.
//!
//! ## How it works
//!
//! 1. Build a session with a [`Range`] and a [`RandomSource`]: [`StdRandom`]
//!    in production (seeded or from entropy), [`ScriptedRandom`] in tests.
//! 2. Call [`DrawSession::draw`], [`DrawSession::undo`] and
//!    [`DrawSession::apply_range`] in response to user actions.
//! 3. Render [`DrawSession::snapshot`] directly, or convert it to client JSON
//!    with [`to_view_state`].
//!
//! Front-ends that also show trivia wrap the session in an [`App`], which
//! hands out [`TriviaTicket`]s and drops answers that arrive after the
//! current number has changed.
//!
//! ## Quick start
//!
//! ```rust
//! use number_draw::{DrawSession, Range, StdRandom};
//!
//! let mut session = DrawSession::new(Range::new(1, 10).unwrap(), StdRandom::seeded(42));
//!
//! let first = session.draw().unwrap();
//! assert_eq!(session.current(), Some(first));
//! assert_eq!(session.pool().len(), 9);
//!
//! session.undo();
//! assert_eq!(session.pool(), &[1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);
//!
//! // Invalid ranges are refused and leave the session untouched.
//! assert!(session.apply_range(5, 3).is_err());
//! ```

pub mod app;
pub mod command;
pub mod config;
pub mod draw_engine;
pub mod trivia;
pub mod view_adapter;

// Convenience re-exports so callers can use `number_draw::DrawSession`
// directly without reaching into `draw_engine::`.
pub use app::{App, Effect, Intent};
pub use config::Config;
pub use draw_engine::{
    generate_pool, BallStatus, DrawSession, Error, HistoryEntry, RandomSource, Range,
    ScriptedRandom, Snapshot, StdRandom,
};
pub use trivia::{TriviaLookup, TriviaProvider, TriviaTicket};
pub use view_adapter::{render_text, to_view_state};
