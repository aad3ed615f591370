use crate::query::Query;

/// Mutable per-viewer session state.
///
/// Holds the remembered previous query, the pointer-follow toggle, the last
/// pointer position and the dispatch sequence counter in one place, so a
/// viewer can reset or snapshot its session as a unit. Lifetime is one
/// viewer session; `reset` is the only way back to the initial state.
#[derive(Debug, Clone, Default)]
pub struct Session {
    prev_query: Option<Query>,
    move_enabled: bool,
    last_point: Option<(f64, f64)>,
    next_seq: u64,
    displayed_seq: u64,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// De-duplication gate: suppress a dispatch iff `next` equals the
    /// remembered previous query. Remembers `next` when it passes.
    pub fn should_dispatch(&mut self, next: Query) -> bool {
        if self.prev_query == Some(next) {
            return false;
        }
        self.prev_query = Some(next);
        true
    }

    pub fn prev_query(&self) -> Option<Query> {
        self.prev_query
    }

    /// Flip the pointer-follow toggle; returns the new state.
    pub fn toggle_move(&mut self) -> bool {
        self.move_enabled = !self.move_enabled;
        self.move_enabled
    }

    pub fn move_enabled(&self) -> bool {
        self.move_enabled
    }

    pub fn track_pointer(&mut self, x: f64, y: f64) {
        self.last_point = Some((x, y));
    }

    pub fn last_point(&self) -> Option<(f64, f64)> {
        self.last_point
    }

    /// Sequence number for the next dispatched query. Strictly increasing
    /// within a session.
    pub fn next_seq(&mut self) -> u64 {
        self.next_seq += 1;
        self.next_seq
    }

    /// Whether a response with sequence `seq` may still be rendered.
    ///
    /// Responses racing in behind a later one are discarded rather than
    /// cancelled: anything at or below the last accepted sequence loses.
    pub fn accept_response(&mut self, seq: u64) -> bool {
        if seq <= self.displayed_seq {
            return false;
        }
        self.displayed_seq = seq;
        true
    }

    pub fn reset(&mut self) {
        *self = Session::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_query_always_dispatches() {
        let mut session = Session::new();
        assert!(session.should_dispatch(Query { x: 1, y: 2 }));
    }

    #[test]
    fn identical_consecutive_query_is_suppressed() {
        let mut session = Session::new();
        let q = Query { x: 4, y: 4 };
        assert!(session.should_dispatch(q));
        assert!(!session.should_dispatch(q));
        assert!(session.should_dispatch(Query { x: 4, y: 5 }));
        // Coming back to the first query is a change again.
        assert!(session.should_dispatch(q));
    }

    #[test]
    fn stale_responses_are_discarded() {
        let mut session = Session::new();
        let a = session.next_seq();
        let b = session.next_seq();
        assert!(session.accept_response(b));
        assert!(!session.accept_response(a));
        assert!(!session.accept_response(b));
    }

    #[test]
    fn reset_restores_initial_state() {
        let mut session = Session::new();
        session.should_dispatch(Query { x: 0, y: 0 });
        session.toggle_move();
        session.track_pointer(3.0, 4.0);
        session.next_seq();
        session.reset();
        assert_eq!(session.prev_query(), None);
        assert!(!session.move_enabled());
        assert_eq!(session.last_point(), None);
        let seq = session.next_seq();
        assert!(session.accept_response(seq));
    }
}
