//! Draw/undo state for one configured range.
//!
//! A number is either in `pool` (available) or in `history` (chosen), never
//! both, and together they always cover the range of the last reset. Draws
//! move a random pool element to the end of history; undo moves the last
//! history element back and keeps the pool ascending.

use log::{debug, info, warn};

use crate::draw_engine::{
    error::Result,
    models::{HistoryEntry, Range, Snapshot, DEFAULT_RANGE},
    pool::generate_pool,
    random::{RandomSource, StdRandom},
};

#[derive(Debug)]
pub struct DrawSession<R: RandomSource = StdRandom> {
    range: Range,
    pool: Vec<i64>,
    history: Vec<i64>,
    rng: R,
}

impl<R: RandomSource> DrawSession<R> {
    /// Start a session over `range` with an untouched pool.
    pub fn new(range: Range, rng: R) -> Self {
        let mut session = DrawSession {
            range,
            pool: Vec::new(),
            history: Vec::new(),
            rng,
        };
        session.initialize(range.min, range.max);
        session
    }

    /// Start a session over the default `1..=100` range.
    pub fn with_default_range(rng: R) -> Self {
        Self::new(DEFAULT_RANGE, rng)
    }

    /// Replace pool and history wholesale. Bounds are not validated here;
    /// use [`apply_range`](Self::apply_range) for user input.
    pub fn initialize(&mut self, min: i64, max: i64) {
        self.range = Range { min, max };
        self.pool = generate_pool(min, max);
        self.history.clear();
        info!("draw session reset to {} ({} numbers)", self.range, self.pool.len());
    }

    /// Draw one number uniformly from the pool. `None` when the pool is empty.
    pub fn draw(&mut self) -> Option<i64> {
        if self.pool.is_empty() {
            debug!("draw ignored: pool exhausted");
            return None;
        }

        let index = self.rng.pick_index(self.pool.len());
        // Clamp guards against a misbehaving source; remove keeps the order
        // of the untouched numbers.
        let index = index.min(self.pool.len() - 1);
        let value = self.pool.remove(index);
        self.history.push(value);

        debug!("drew {value} ({} left)", self.pool.len());
        Some(value)
    }

    /// Return the most recent draw to the pool. `None` when nothing was drawn.
    pub fn undo(&mut self) -> Option<i64> {
        let value = match self.history.pop() {
            Some(v) => v,
            None => {
                debug!("undo ignored: history empty");
                return None;
            }
        };

        self.pool.push(value);
        self.pool.sort_unstable();

        debug!("undid {value}, current is now {:?}", self.current());
        Some(value)
    }

    /// Validate `min < max` and reset. On error the session is untouched.
    pub fn apply_range(&mut self, min: i64, max: i64) -> Result<()> {
        let range = Range::new(min, max).map_err(|err| {
            warn!("rejected range {min}..={max}: {err}");
            err
        })?;
        self.initialize(range.min, range.max);
        Ok(())
    }

    pub fn range(&self) -> Range {
        self.range
    }

    /// Numbers still available, ascending.
    pub fn pool(&self) -> &[i64] {
        &self.pool
    }

    /// Drawn numbers, oldest first.
    pub fn history(&self) -> &[i64] {
        &self.history
    }

    pub fn current(&self) -> Option<i64> {
        self.history.last().copied()
    }

    pub fn can_draw(&self) -> bool {
        !self.pool.is_empty()
    }

    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }

    /// Every number has been drawn.
    pub fn is_exhausted(&self) -> bool {
        self.pool.is_empty() && !self.history.is_empty()
    }

    pub fn rng(&self) -> &R {
        &self.rng
    }

    pub fn snapshot(&self) -> Snapshot {
        let last = self.history.len().checked_sub(1);
        let history = self
            .history
            .iter()
            .enumerate()
            .map(|(i, &value)| HistoryEntry { value, is_last: Some(i) == last })
            .collect();

        Snapshot {
            range: self.range,
            pool: self.pool.clone(),
            history,
            current: self.current(),
            can_draw: self.can_draw(),
            can_undo: self.can_undo(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw_engine::error::Error;
    use crate::draw_engine::random::ScriptedRandom;

    fn scripted(min: i64, max: i64, script: Vec<usize>) -> DrawSession<ScriptedRandom> {
        DrawSession::new(Range { min, max }, ScriptedRandom::new(script))
    }

    #[test]
    fn new_session_has_full_pool_and_no_history() {
        let s = scripted(1, 3, vec![0]);
        assert_eq!(s.pool(), &[1, 2, 3]);
        assert!(s.history().is_empty());
        assert_eq!(s.current(), None);
        assert!(s.can_draw());
        assert!(!s.can_undo());
    }

    #[test]
    fn default_session_spans_one_to_hundred() {
        let s = DrawSession::with_default_range(StdRandom::seeded(1));
        assert_eq!(s.pool().len(), 100);
        assert_eq!(s.range(), DEFAULT_RANGE);
    }

    #[test]
    fn draw_undo_walkthrough() {
        // Indices: 1 → picks 2 from [1,2,3]; 1 → picks 3 from [1,3];
        // 0 → picks 1 from [1,3] after undo.
        let mut s = scripted(1, 3, vec![1, 1, 0]);

        assert_eq!(s.draw(), Some(2));
        assert_eq!(s.pool(), &[1, 3]);
        assert_eq!(s.history(), &[2]);
        assert_eq!(s.current(), Some(2));

        assert_eq!(s.draw(), Some(3));
        assert_eq!(s.pool(), &[1]);
        assert_eq!(s.history(), &[2, 3]);
        assert_eq!(s.current(), Some(3));

        assert_eq!(s.undo(), Some(3));
        assert_eq!(s.pool(), &[1, 3]);
        assert_eq!(s.history(), &[2]);
        assert_eq!(s.current(), Some(2));

        assert_eq!(s.draw(), Some(1));
        assert_eq!(s.pool(), &[3]);
        assert_eq!(s.history(), &[2, 1]);
        assert_eq!(s.current(), Some(1));
    }

    #[test]
    fn draw_on_empty_pool_is_noop() {
        let mut s = scripted(1, 2, vec![0]);
        s.draw();
        s.draw();
        assert!(s.is_exhausted());
        let before = s.snapshot();
        assert_eq!(s.draw(), None);
        assert_eq!(s.snapshot(), before);
        assert_eq!(s.rng().calls(), 2, "empty draw must not consume randomness");
    }

    #[test]
    fn undo_on_empty_history_is_noop() {
        let mut s = scripted(1, 5, vec![0]);
        let before = s.snapshot();
        assert_eq!(s.undo(), None);
        assert_eq!(s.snapshot(), before);
    }

    #[test]
    fn undo_to_empty_clears_current() {
        let mut s = scripted(10, 12, vec![2]);
        assert_eq!(s.draw(), Some(12));
        assert_eq!(s.undo(), Some(12));
        assert_eq!(s.current(), None);
        assert_eq!(s.pool(), &[10, 11, 12]);
        assert!(!s.can_undo());
    }

    #[test]
    fn apply_range_rejects_inverted_bounds_without_touching_state() {
        let mut s = scripted(1, 5, vec![3]);
        s.draw();
        let before = s.snapshot();

        assert_eq!(s.apply_range(5, 3), Err(Error::InvalidRange { min: 5, max: 3 }));
        assert_eq!(s.snapshot(), before);
        assert_eq!(s.apply_range(4, 4), Err(Error::InvalidRange { min: 4, max: 4 }));
        assert_eq!(s.snapshot(), before);
    }

    #[test]
    fn apply_range_resets_pool_and_history() {
        let mut s = scripted(1, 5, vec![0]);
        s.draw();
        s.draw();
        s.apply_range(-2, 2).unwrap();
        assert_eq!(s.range(), Range { min: -2, max: 2 });
        assert_eq!(s.pool(), &[-2, -1, 0, 1, 2]);
        assert!(s.history().is_empty());
        assert_eq!(s.current(), None);
    }

    #[test]
    fn snapshot_flags_only_last_history_entry() {
        let mut s = scripted(1, 4, vec![0]);
        s.draw();
        s.draw();
        s.draw();
        let snap = s.snapshot();
        let flags: Vec<bool> = snap.history.iter().map(|e| e.is_last).collect();
        assert_eq!(flags, vec![false, false, true]);
        assert_eq!(snap.current, Some(3));
        assert!(snap.can_draw && snap.can_undo);
    }

    #[test]
    fn draw_then_undo_round_trips_ascending_pool() {
        let mut s = DrawSession::new(Range { min: 1, max: 30 }, StdRandom::seeded(9));
        for _ in 0..10 {
            let pool = s.pool().to_vec();
            let history = s.history().to_vec();
            s.draw();
            s.undo();
            assert_eq!(s.pool(), pool.as_slice());
            assert_eq!(s.history(), history.as_slice());
            s.draw();
        }
    }

    #[test]
    fn debug_output_shows_pool_and_history() {
        let mut s = scripted(1, 3, vec![0]);
        s.draw();
        let printed = format!("{s:?}");
        assert!(printed.contains("pool: [2, 3]"), "{printed}");
        assert!(printed.contains("history: [1]"), "{printed}");
    }
}
