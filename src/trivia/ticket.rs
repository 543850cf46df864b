use log::debug;
use serde::{Deserialize, Serialize};

/// Identifies one trivia request. Only the newest ticket's answer is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TriviaTicket {
    pub generation: u64,
    pub number: i64,
}

/// Trivia text for the current number, guarded against late answers.
///
/// Every draw, undo or reset moves the slot to a new generation; an answer
/// carrying an older ticket is dropped.
#[derive(Debug, Clone, Default)]
pub struct TriviaSlot {
    generation: u64,
    pending: Option<TriviaTicket>,
    text: Option<String>,
}

impl TriviaSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start waiting for trivia about `number`, discarding whatever was shown.
    pub fn issue(&mut self, number: i64) -> TriviaTicket {
        self.generation += 1;
        let ticket = TriviaTicket { generation: self.generation, number };
        self.pending = Some(ticket);
        self.text = None;
        ticket
    }

    /// Forget the shown text and any outstanding request.
    pub fn clear(&mut self) {
        self.generation += 1;
        self.pending = None;
        self.text = None;
    }

    /// Store `text` if `ticket` is the one being waited on.
    pub fn accept(&mut self, ticket: TriviaTicket, text: String) -> bool {
        if self.pending != Some(ticket) {
            debug!(
                "dropping stale trivia for {} (generation {}, now {})",
                ticket.number, ticket.generation, self.generation
            );
            return false;
        }
        self.pending = None;
        self.text = Some(text);
        true
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}
