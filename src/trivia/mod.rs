//! Best-effort trivia about drawn numbers.
//!
//! | Module   | Purpose |
//! |----------|---------|
//! | `lookup` | `TriviaProvider` trait and the never-failing `TriviaLookup` |
//! | `ticket` | `TriviaSlot`: drops answers that arrive after the number changed |
//! | `gemini` | HTTP provider backed by Gemini `generateContent` |
//! | `error`  | Provider errors (never surfaced past `TriviaLookup`) |

pub mod error;
pub mod gemini;
pub mod lookup;
pub mod ticket;

pub use error::Error;
pub use gemini::GeminiProvider;
pub use lookup::{TriviaLookup, TriviaProvider, MISSING_KEY_MESSAGE};
pub use ticket::{TriviaSlot, TriviaTicket};
