use std::cell::Cell;

/// Latch for actions that must run at most once per page load. The hero
/// stats batch is gated on this: the first intersecting report fires it,
/// every later report is ignored, and it is never reset.
///
/// Interior mutability keeps it usable from `Fn` observer callbacks without
/// an outer `RefCell`. Single-threaded by construction (browser event loop),
/// so a `Cell` is all the synchronization this needs.
#[derive(Default)]
pub struct OneShot {
    fired: Cell<bool>,
}

impl OneShot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` only on the first call.
    pub fn fire(&self) -> bool {
        !self.fired.replace(true)
    }

    pub fn has_fired(&self) -> bool {
        self.fired.get()
    }

    /// Gates an intersection report: fires only on the first report that is
    /// actually intersecting. Non-intersecting reports never consume the
    /// latch.
    pub fn fire_on(&self, is_intersecting: bool) -> bool {
        is_intersecting && self.fire()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_exactly_once() {
        let latch = OneShot::new();
        assert!(!latch.has_fired());
        assert!(latch.fire());
        assert!(latch.has_fired());
        assert!(!latch.fire());
        assert!(!latch.fire());
    }

    #[test]
    fn fires_once_across_a_report_sequence() {
        let latch = OneShot::new();
        let reports = [true, true, false, true];
        let fired: Vec<bool> = reports.iter().map(|&r| latch.fire_on(r)).collect();
        assert_eq!(fired, vec![true, false, false, false]);
    }

    #[test]
    fn non_intersecting_reports_do_not_consume_the_latch() {
        let latch = OneShot::new();
        assert!(!latch.fire_on(false));
        assert!(!latch.fire_on(false));
        assert!(!latch.has_fired());
        assert!(latch.fire_on(true));
    }
}
