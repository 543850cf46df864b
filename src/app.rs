//! Presentation-facing controller.
//!
//! `App` is what a front-end holds: the draw session, the two bound inputs the
//! user is editing, and the trivia shown for the current number. Front-ends
//! turn user actions into [`Intent`]s and act on the returned [`Effect`].

use log::debug;
use serde_json::Value;

use crate::draw_engine::{DrawSession, Error, RandomSource, Snapshot, StdRandom};
use crate::trivia::{TriviaSlot, TriviaTicket};
use crate::view_adapter::to_view_state;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Draw,
    Undo,
    SetMin(i64),
    SetMax(i64),
    /// Reset the session to the edited bounds.
    ApplyRange,
}

/// Follow-up work for the front-end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Fetch trivia for `ticket.number` and hand it back via [`App::accept_trivia`].
    LookupTrivia(TriviaTicket),
    /// The edited range was refused; show the message, nothing changed.
    Rejected(Error),
}

#[derive(Debug)]
pub struct App<R: RandomSource = StdRandom> {
    session: DrawSession<R>,
    min_input: i64,
    max_input: i64,
    trivia: TriviaSlot,
    trivia_enabled: bool,
}

impl<R: RandomSource> App<R> {
    pub fn new(session: DrawSession<R>) -> Self {
        let range = session.range();
        App {
            session,
            min_input: range.min,
            max_input: range.max,
            trivia: TriviaSlot::new(),
            trivia_enabled: true,
        }
    }

    /// Turn trivia requests off; draws and undos then never ask for a lookup.
    pub fn without_trivia(mut self) -> Self {
        self.trivia_enabled = false;
        self
    }

    fn request_trivia(&mut self, number: i64) -> Effect {
        if !self.trivia_enabled {
            return Effect::None;
        }
        Effect::LookupTrivia(self.trivia.issue(number))
    }

    pub fn handle(&mut self, intent: Intent) -> Effect {
        debug!("handling {intent:?}");
        match intent {
            Intent::Draw => match self.session.draw() {
                Some(n) => self.request_trivia(n),
                None => Effect::None,
            },
            Intent::Undo => {
                if self.session.undo().is_none() {
                    return Effect::None;
                }
                match self.session.current() {
                    Some(n) => self.request_trivia(n),
                    None => {
                        self.trivia.clear();
                        Effect::None
                    }
                }
            }
            Intent::SetMin(n) => {
                self.min_input = n;
                Effect::None
            }
            Intent::SetMax(n) => {
                self.max_input = n;
                Effect::None
            }
            Intent::ApplyRange => match self.session.apply_range(self.min_input, self.max_input) {
                Ok(()) => {
                    self.trivia.clear();
                    Effect::None
                }
                Err(err) => Effect::Rejected(err),
            },
        }
    }

    /// Deliver a finished lookup. Returns `false` if the answer is stale.
    pub fn accept_trivia(&mut self, ticket: TriviaTicket, text: String) -> bool {
        self.trivia.accept(ticket, text)
    }

    pub fn session(&self) -> &DrawSession<R> {
        &self.session
    }

    pub fn min_input(&self) -> i64 {
        self.min_input
    }

    pub fn max_input(&self) -> i64 {
        self.max_input
    }

    pub fn trivia_text(&self) -> Option<&str> {
        self.trivia.text()
    }

    pub fn trivia_pending(&self) -> bool {
        self.trivia.is_pending()
    }

    pub fn snapshot(&self) -> Snapshot {
        self.session.snapshot()
    }

    pub fn view_state(&self) -> Value {
        to_view_state(&self.snapshot(), self.trivia_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw_engine::{Range, ScriptedRandom};

    fn app(min: i64, max: i64, script: Vec<usize>) -> App<ScriptedRandom> {
        App::new(DrawSession::new(Range { min, max }, ScriptedRandom::new(script)))
    }

    fn ticket_of(effect: Effect) -> TriviaTicket {
        match effect {
            Effect::LookupTrivia(t) => t,
            other => panic!("expected a trivia lookup, got {other:?}"),
        }
    }

    #[test]
    fn inputs_start_at_session_range() {
        let a = app(3, 9, vec![0]);
        assert_eq!((a.min_input(), a.max_input()), (3, 9));
    }

    #[test]
    fn draw_requests_trivia_for_drawn_number() {
        let mut a = app(1, 3, vec![1]);
        let t = ticket_of(a.handle(Intent::Draw));
        assert_eq!(t.number, 2);
        assert!(a.trivia_pending());
        assert!(a.accept_trivia(t, "Two is even.".into()));
        assert_eq!(a.trivia_text(), Some("Two is even."));
    }

    #[test]
    fn answer_for_superseded_draw_is_discarded() {
        let mut a = app(1, 5, vec![0]);
        let first = ticket_of(a.handle(Intent::Draw));
        let second = ticket_of(a.handle(Intent::Draw));
        assert!(!a.accept_trivia(first, "late".into()));
        assert!(a.accept_trivia(second, "fresh".into()));
        assert_eq!(a.trivia_text(), Some("fresh"));
    }

    #[test]
    fn undo_requests_trivia_for_new_current() {
        let mut a = app(1, 5, vec![0]);
        a.handle(Intent::Draw);
        let drawn_second = ticket_of(a.handle(Intent::Draw));
        let after_undo = ticket_of(a.handle(Intent::Undo));
        assert_eq!(after_undo.number, 1);
        assert!(!a.accept_trivia(drawn_second, "about 2".into()));
    }

    #[test]
    fn undo_to_empty_clears_trivia() {
        let mut a = app(1, 5, vec![0]);
        let t = ticket_of(a.handle(Intent::Draw));
        a.accept_trivia(t, "one".into());
        assert_eq!(a.handle(Intent::Undo), Effect::None);
        assert_eq!(a.trivia_text(), None);
        assert!(!a.trivia_pending());
    }

    #[test]
    fn noop_intents_return_no_effect() {
        let mut a = app(1, 2, vec![0]);
        assert_eq!(a.handle(Intent::Undo), Effect::None);
        a.handle(Intent::Draw);
        a.handle(Intent::Draw);
        assert_eq!(a.handle(Intent::Draw), Effect::None);
    }

    #[test]
    fn rejected_range_keeps_state_and_inputs() {
        let mut a = app(1, 10, vec![0]);
        let t = ticket_of(a.handle(Intent::Draw));
        a.accept_trivia(t, "one".into());
        let before = a.snapshot();

        a.handle(Intent::SetMin(5));
        a.handle(Intent::SetMax(3));
        assert_eq!(
            a.handle(Intent::ApplyRange),
            Effect::Rejected(Error::InvalidRange { min: 5, max: 3 })
        );
        assert_eq!(a.snapshot(), before);
        assert_eq!(a.trivia_text(), Some("one"));
        assert_eq!((a.min_input(), a.max_input()), (5, 3));
    }

    #[test]
    fn editing_bounds_alone_does_not_reset() {
        let mut a = app(1, 10, vec![0]);
        a.handle(Intent::Draw);
        a.handle(Intent::SetMin(20));
        a.handle(Intent::SetMax(30));
        assert_eq!(a.session().range(), Range { min: 1, max: 10 });
        assert_eq!(a.session().history(), &[1]);
    }

    #[test]
    fn applied_range_resets_session_and_trivia() {
        let mut a = app(1, 10, vec![0]);
        let t = ticket_of(a.handle(Intent::Draw));
        a.handle(Intent::SetMin(20));
        a.handle(Intent::SetMax(25));
        assert_eq!(a.handle(Intent::ApplyRange), Effect::None);
        assert_eq!(a.session().pool(), &[20, 21, 22, 23, 24, 25]);
        assert!(a.session().history().is_empty());
        assert!(!a.accept_trivia(t, "stale".into()));
    }

    #[test]
    fn disabled_trivia_never_requests_lookups() {
        let mut a = app(1, 5, vec![0]).without_trivia();
        assert_eq!(a.handle(Intent::Draw), Effect::None);
        assert_eq!(a.handle(Intent::Draw), Effect::None);
        assert_eq!(a.handle(Intent::Undo), Effect::None);
        assert!(!a.trivia_pending());
        assert_eq!(a.session().history(), &[1]);
    }

    #[test]
    fn view_state_reflects_trivia() {
        let mut a = app(1, 3, vec![0]);
        let t = ticket_of(a.handle(Intent::Draw));
        a.accept_trivia(t, "One is the loneliest number.".into());
        let view = a.view_state();
        assert_eq!(view["trivia"], "One is the loneliest number.");
        assert_eq!(view["current"], 1);
    }
}
